//! Category presentation styles
//!
//! Categories are free-text labels. The lookup table below gives known
//! categories an icon and a color; anything else gets [`FALLBACK_STYLE`].

use serde::Serialize;

/// Icon and color used when rendering a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    /// Icon name (lucide icon set naming)
    pub icon: &'static str,
    /// Color name
    pub color: &'static str,
}

/// Style for categories missing from [`CATEGORY_STYLES`]
pub const FALLBACK_STYLE: CategoryStyle = CategoryStyle {
    icon: "shopping-cart",
    color: "gray",
};

/// Known categories and their styles
pub const CATEGORY_STYLES: &[(&str, CategoryStyle)] = &[
    ("Housing", CategoryStyle { icon: "home", color: "blue" }),
    ("Food", CategoryStyle { icon: "utensils", color: "green" }),
    ("Transport", CategoryStyle { icon: "car", color: "yellow" }),
    ("Leisure", CategoryStyle { icon: "coffee", color: "purple" }),
    ("Shopping", CategoryStyle { icon: "shopping-cart", color: "pink" }),
    ("Health", CategoryStyle { icon: "heart", color: "red" }),
    ("Technology", CategoryStyle { icon: "smartphone", color: "cyan" }),
    ("Salary", CategoryStyle { icon: "wallet", color: "emerald" }),
];

/// Look up the style of a category, falling back for unknown labels
///
/// Matching is exact and case-sensitive, like category grouping.
pub fn style_for(category: &str) -> CategoryStyle {
    CATEGORY_STYLES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, style)| *style)
        .unwrap_or(FALLBACK_STYLE)
}
