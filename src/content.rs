pub struct NewsItem {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub views: u32,
    pub comments: u32,
}

pub struct ShopItem {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub struct LocationCard {
    pub caption: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const NEWS: &[NewsItem] = &[
    NewsItem {
        title: "New update: Guilds",
        excerpt: "Discover the new guild system with territories to conquer and epic wars!",
        date: "2 days ago",
        views: 1250,
        comments: 45,
    },
    NewsItem {
        title: "Halloween special event",
        excerpt: "Join the Halloween event and earn exclusive rewards!",
        date: "5 days ago",
        views: 890,
        comments: 23,
    },
    NewsItem {
        title: "Server optimisations",
        excerpt: "Performance improvements and fixes for major bugs.",
        date: "1 week ago",
        views: 567,
        comments: 12,
    },
];

pub const SHOP: &[ShopItem] = &[
    ShopItem {
        name: "Titan Rank",
        price: "20.00€",
        features: &["Titan kit", "VIP access", "Special commands"],
        popular: true,
    },
    ShopItem {
        name: "Legendary Sword",
        price: "15.00€",
        features: &["+50% damage", "Lightning effect", "Max enchantments"],
        popular: false,
    },
    ShopItem {
        name: "Divine Armor",
        price: "25.00€",
        features: &["Ultimate protection", "Magic resistance", "Self-repair"],
        popular: false,
    },
];

pub const LOCATIONS: &[LocationCard] = &[
    LocationCard {
        caption: "MAIN RESIDENCE",
        name: "Emerald City",
        description: "The thriving capital of the kingdom of Axis, known for its crystal towers \
            and floating gardens. A hub of trade and magic that welcomes adventurers from \
            all over the world.",
    },
    LocationCard {
        caption: "CURRENT LOCATION",
        name: "Golden Dragon Tavern",
        description: "A warm meeting place in the heart of the city. Adventurers gather here to \
            share stories, form parties and plan their next quests over a good ale.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_popular_shop_item() {
        assert_eq!(SHOP.iter().filter(|i| i.popular).count(), 1);
        assert_eq!(NEWS.len(), 3);
    }
}
