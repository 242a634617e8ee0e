#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceOption {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub traits: Vec<String>,
    pub bonuses: Vec<String>,
}

/// Resolved to a glyph by the rendering code, never by the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassIcon {
    Shield,
    Bolt,
    Sword,
    Heart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassOption {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: ClassIcon,
    pub starting_items: Vec<String>,
    pub playstyle: String,
}

pub trait CatalogEntry {
    fn id(&self) -> &str;
}

impl CatalogEntry for RaceOption {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogEntry for ClassOption {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Ordered, read-only option list keyed by identifier.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    entries: Vec<T>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Later duplicates of an identifier are dropped so lookups stay unambiguous.
    pub fn new(entries: Vec<T>) -> Self {
        let mut unique: Vec<T> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().any(|e| e.id() == entry.id()) {
                tracing::warn!(id = entry.id(), "duplicate catalog id ignored");
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn race(id: &str, name: &str, description: &str, image: &str, traits: &[&str], bonuses: &[&str]) -> RaceOption {
    RaceOption {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        traits: strings(traits),
        bonuses: strings(bonuses),
    }
}

fn class(
    id: &str,
    name: &str,
    description: &str,
    icon: ClassIcon,
    starting_items: &[&str],
    playstyle: &str,
) -> ClassOption {
    ClassOption {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon,
        starting_items: strings(starting_items),
        playstyle: playstyle.to_string(),
    }
}

pub fn default_races() -> Catalog<RaceOption> {
    Catalog::new(vec![
        race(
            "human",
            "Human",
            "Versatile and adaptable. Skilled traders and diplomats, humans thrive in every environment.",
            "races/human.png",
            &["Versatile", "Adaptable", "Diplomatic"],
            &["+10% Trade XP", "+5% Diplomatic relations", "Privileged access to cities"],
        ),
        race(
            "elf",
            "Elf",
            "Masters of magic and nature, elves live exceptionally long lives and share a natural bond with the elements.",
            "races/elf.png",
            &["Magical", "Ageless", "Wise"],
            &["+15% Magic", "+10% Mana regeneration", "Night vision"],
        ),
        race(
            "dwarf",
            "Dwarf",
            "Legendary smiths and fearsome warriors, dwarves excel at craftsmanship and shrug off the elements.",
            "races/dwarf.png",
            &["Sturdy", "Artisan", "Resilient"],
            &["+20% Smithing", "+15% Resistance", "Ore detection"],
        ),
        race(
            "orc",
            "Orc",
            "Fierce warriors driven by instinct, orcs make up for their brutality with exceptional strength and endurance.",
            "races/orc.png",
            &["Powerful", "Ferocious", "Enduring"],
            &["+25% Strength", "+10% Running speed", "Health regeneration"],
        ),
    ])
}

pub fn default_classes() -> Catalog<ClassOption> {
    Catalog::new(vec![
        class(
            "warrior",
            "Warrior",
            "Master of close combat, the warrior excels at the art of war and at protecting allies.",
            ClassIcon::Shield,
            &["Iron sword", "Oak shield", "Leather armor", "5 Healing potions"],
            "Close combat, Tank, Protection",
        ),
        class(
            "mage",
            "Mage",
            "Wielder of the arcane, the mage deals damage from afar and controls the battlefield.",
            ClassIcon::Bolt,
            &["Novice staff", "Mage robe", "Spellbook", "10 Mana potions"],
            "Magic, Ranged damage, Control",
        ),
        class(
            "rogue",
            "Rogue",
            "Expert in stealth and agility, the rogue favours speed and cunning over brute force.",
            ClassIcon::Sword,
            &["Twin daggers", "Soft leather armor", "Lockpicking kit", "3 Smoke bombs"],
            "Stealth, Agility, Critical damage",
        ),
        class(
            "healer",
            "Healer",
            "Guardian of life, the healer is devoted to supporting and mending fellow adventurers.",
            ClassIcon::Heart,
            &["Healing staff", "White robe", "Medicinal herbs", "15 Healing potions"],
            "Support, Healing, Divine magic",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalogs_keep_order() {
        let races: Vec<_> = default_races().iter().map(|r| r.id.clone()).collect();
        assert_eq!(races, ["human", "elf", "dwarf", "orc"]);
        let classes: Vec<_> = default_classes().iter().map(|c| c.id.clone()).collect();
        assert_eq!(classes, ["warrior", "mage", "rogue", "healer"]);
    }

    #[test]
    fn lookup_by_id() {
        let classes = default_classes();
        assert_eq!(classes.get("mage").map(|c| c.icon), Some(ClassIcon::Bolt));
        assert!(classes.get("paladin").is_none());
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let catalog = Catalog::new(vec![
            race("elf", "Elf", "", "", &[], &[]),
            race("elf", "High Elf", "", "", &[], &[]),
        ]);
        assert_eq!(catalog.iter().count(), 1);
        assert_eq!(catalog.get("elf").map(|r| r.name.as_str()), Some("Elf"));
    }
}
