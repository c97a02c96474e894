use serde::{Deserialize, Serialize};
use std::fmt;

/// Named anchors on the storefront page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Products,
    Testimonials,
    About,
    Contact,
}

impl Section {
    /// Anchor id used by navigation links (`#products`, ...)
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Products => "products",
            Section::Testimonials => "testimonials",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub section: Section,
    pub label: &'static str,
}

/// Header navigation, in display order
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        section: Section::Products,
        label: "Top Picks",
    },
    NavLink {
        section: Section::Testimonials,
        label: "Reviews",
    },
    NavLink {
        section: Section::About,
        label: "Why Us?",
    },
    NavLink {
        section: Section::Contact,
        label: "Contact",
    },
];
