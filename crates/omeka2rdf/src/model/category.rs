use std::fmt;

/// Which kind of record a graph (or batch) was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Items,
    Media,
    Collections,
    /// All three categories in one graph.
    Combined,
}

impl Category {
    /// Omeka S API resource name. `None` for [`Category::Combined`].
    pub fn api_resource(self) -> Option<&'static str> {
        match self {
            Category::Items => Some("items"),
            Category::Media => Some("media"),
            Category::Collections => Some("item_sets"),
            Category::Combined => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Items => "items",
            Category::Media => "media",
            Category::Collections => "collections",
            Category::Combined => "combined",
        };
        f.write_str(name)
    }
}
