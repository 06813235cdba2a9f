use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub tags: BTreeSet<String>,
    /// No image extraction is done; always serialized as an empty string.
    #[serde(default)]
    pub image_url: String,
}

impl MenuItem {
    pub fn is_market_price(&self) -> bool {
        self.tags.contains(MARKET_PRICE_TAG)
    }
}

pub const MARKET_PRICE_TAG: &str = "mp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuDocument {
    pub categories: Vec<MenuCategory>,
}

impl MenuDocument {
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// One configured input: the menu-section label and its HTML file,
/// relative to the storage base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSource {
    pub label: String,
    pub path: String,
}

impl MenuSource {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Raw page text as read by the extract stage, before entity decoding.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub source: MenuSource,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub output_path: String,
    pub category_count: usize,
    pub item_count: usize,
}
