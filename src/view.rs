#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    News,
    Map,
    Settings,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::News, View::Map, View::Settings];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::News => "News",
            View::Map => "Map",
            View::Settings => "Settings",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            View::Home => "🏠",
            View::News => "📰",
            View::Map => "🗺",
            View::Settings => "⚙",
        }
    }
}
