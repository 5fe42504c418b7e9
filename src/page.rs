//! Classify a request path into a page category and item id.
//! Category pages live two directory levels deep: `.../characters/<id>.html`
//! for id-addressed pages, `.../<category>/index.html` for landing pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Characters,
    Units,
    Buildings,
    Modes,
    Guides,
}

impl PageKind {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "characters" => Some(Self::Characters),
            "units" => Some(Self::Units),
            "buildings" => Some(Self::Buildings),
            "modes" => Some(Self::Modes),
            "guides" => Some(Self::Guides),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Units => "units",
            Self::Buildings => "buildings",
            Self::Modes => "modes",
            Self::Guides => "guides",
        }
    }

    /// Decorative glyph shown before the page title.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Characters => "🐉",
            Self::Units => "🛡️",
            Self::Buildings => "🏛️",
            Self::Modes => "🎮",
            Self::Guides => "📚",
        }
    }

    /// Categories addressed by record id. Everything else shows its first
    /// entry as the representative item.
    pub fn selects_by_id(&self) -> bool {
        matches!(self, Self::Characters | Self::Guides)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub kind: Option<PageKind>,
    pub id: Option<String>,
}

impl PageContext {
    /// Derive the context from a URL path. Malformed paths are not an error;
    /// an absent kind simply means the page carries no data-driven content.
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < 2 {
            return Self::default();
        }
        let category = segments[segments.len() - 2];
        let filename = segments[segments.len() - 1];
        let Some(kind) = PageKind::from_segment(category) else {
            return Self::default();
        };

        let id = if kind == PageKind::Characters {
            Some(strip_extension(filename).to_string())
        } else if filename.contains("index.html") {
            // Landing page: the category name doubles as a "show the first
            // item" sentinel.
            Some(category.to_string())
        } else if kind == PageKind::Guides {
            Some(strip_extension(filename).to_string())
        } else {
            None
        };

        Self {
            kind: Some(kind),
            id,
        }
    }
}

/// Everything before the last dot. A filename with no extension resolves to
/// an empty id, which never matches a record.
fn strip_extension(filename: &str) -> &str {
    filename.rfind('.').map_or("", |dot| &filename[..dot])
}
