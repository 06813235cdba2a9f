//! Extraction of menus from "stylish price list" widget markup.
//!
//! A page carries one widget `id="spl_<n>"`. Its tab links
//! (`data-href="#<key>_<n>"`) name the categories, and its tab blocks
//! (`<div class="tab…" id="<key>_<n>"`) hold `spl-item-root` item chunks.

pub mod blocks;
pub mod ids;
pub mod items;
pub mod price;
pub mod tabs;
pub mod text;
pub mod widget;

use crate::domain::model::{MenuCategory, MenuItem, MARKET_PRICE_TAG};
use crate::utils::error::Result;
use ids::IdRegistry;
use std::collections::BTreeSet;

pub const CATEGORY_NAME_SEPARATOR: &str = " — ";

/// Parses pages one after another, keeping category ids unique across all
/// of them.
#[derive(Debug)]
pub struct StylishPriceListParser {
    id_prefix: String,
    category_ids: IdRegistry,
}

impl StylishPriceListParser {
    pub fn new(id_prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            category_ids: IdRegistry::new(),
        }
    }

    /// Parse one already entity-decoded page. `source_name` only labels errors.
    pub fn parse(
        &mut self,
        html: &str,
        menu_label: &str,
        source_name: &str,
    ) -> Result<Vec<MenuCategory>> {
        let widget_id = widget::locate_widget_id(html, source_name)?;
        let names = tabs::resolve_categories(html, &widget_id);
        let spans = blocks::locate_blocks(html, &widget_id, source_name)?;

        tracing::debug!(
            "{}: widget spl_{} with {} tab labels and {} blocks",
            source_name,
            widget_id,
            names.len(),
            spans.len()
        );

        let mut categories = Vec::new();
        for span in &spans {
            let category_name = names
                .get(&span.key)
                .cloned()
                .unwrap_or_else(|| format!("Category {}", span.key));

            // registered before the empty check, so a dropped category still reserves its id
            let id = self.category_ids.assign(
                ids::category_id(&self.id_prefix, menu_label, &category_name),
                &span.key,
            );

            let items = self.build_items(span.slice(html), menu_label);
            if items.is_empty() {
                tracing::debug!(
                    "{}: dropping empty category '{}' (key {})",
                    source_name,
                    category_name,
                    span.key
                );
                continue;
            }

            categories.push(MenuCategory {
                id,
                name: format!("{}{}{}", menu_label, CATEGORY_NAME_SEPARATOR, category_name),
                items,
            });
        }

        Ok(categories)
    }

    fn build_items(&self, block: &str, menu_label: &str) -> Vec<MenuItem> {
        let mut item_ids = IdRegistry::new();

        items::extract_items(block)
            .into_iter()
            .map(|raw| {
                let price = price::parse_price(raw.price.as_deref());
                let mut tags = BTreeSet::new();
                if price.on_request {
                    tags.insert(MARKET_PRICE_TAG.to_string());
                }

                MenuItem {
                    id: item_ids.assign(
                        ids::item_id(&self.id_prefix, menu_label, &raw.name),
                        &raw.position.to_string(),
                    ),
                    name: raw.name,
                    description: raw.description,
                    price: price.amount,
                    tags,
                    image_url: String::new(),
                }
            })
            .collect()
    }
}

/// Parse a single raw page (entities not yet decoded) with a fresh id scope.
pub fn parse_stylish_price_list(
    raw_html: &str,
    menu_label: &str,
    id_prefix: &str,
    source_name: &str,
) -> Result<Vec<MenuCategory>> {
    let html = text::decode_entities(raw_html);
    StylishPriceListParser::new(id_prefix).parse(&html, menu_label, source_name)
}
