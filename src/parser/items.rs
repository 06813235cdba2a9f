use super::text::clean_text;
use regex::Regex;
use std::sync::LazyLock;

static ITEM_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<div[^>]*spl-item-root[^>]*>").unwrap());
static ITEM_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)class="name a-tag"[^>]*>\s*<span>(?P<name>.*?)</span>"#).unwrap()
});
static ITEM_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)data-price="(?P<price>[^"]+)""#).unwrap());
static ITEM_DESC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)class="desc a-tag"[^>]*>\s*<span>(?P<desc>.*?)</span>"#).unwrap()
});

/// One item chunk's fields, text already cleaned, price still raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    /// 1-based position among the chunks after the leading boilerplate.
    pub position: usize,
    pub name: String,
    pub price: Option<String>,
    pub description: String,
}

/// Split a tab block into item chunks and pull name, price and description
/// out of each. Chunks without a usable name are skipped.
pub fn extract_items(block: &str) -> Vec<RawItem> {
    ITEM_SPLIT_RE
        .split(block)
        .skip(1)
        .enumerate()
        .filter_map(|(idx, chunk)| {
            let item = parse_chunk(chunk, idx + 1);
            if item.is_none() {
                tracing::debug!("Skipping unnamed item chunk #{}", idx + 1);
            }
            item
        })
        .collect()
}

fn parse_chunk(chunk: &str, position: usize) -> Option<RawItem> {
    let name = ITEM_NAME_RE
        .captures(chunk)
        .map(|caps| clean_text(&caps["name"]))?;
    if name.is_empty() {
        return None;
    }

    let price = ITEM_PRICE_RE
        .captures(chunk)
        .map(|caps| caps["price"].to_string());

    let description = ITEM_DESC_RE
        .captures(chunk)
        .map(|caps| clean_text(&caps["desc"]))
        .unwrap_or_default();

    Some(RawItem {
        position,
        name,
        price,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_html(name: &str, price: Option<&str>, desc: Option<&str>) -> String {
        let price_attr = price
            .map(|p| format!(r#" data-price="{}""#, p))
            .unwrap_or_default();
        let desc_html = desc
            .map(|d| format!(r#"<div class="desc a-tag"><span>{}</span></div>"#, d))
            .unwrap_or_default();
        format!(
            r#"<div class="spl-item-root"><div class="name a-tag" data-x="1">
                <span>{}</span></div><span class="price"{}></span>{}</div>"#,
            name, price_attr, desc_html
        )
    }

    #[test]
    fn test_leading_boilerplate_is_discarded() {
        let block = format!(
            "<h3>Starters</h3>{}{}",
            item_html("Wings", Some("$12.50"), Some("Ten  wings,\n  hot")),
            item_html("Fries", None, None)
        );
        let items = extract_items(&block);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].position, 1);
        assert_eq!(items[0].name, "Wings");
        assert_eq!(items[0].price.as_deref(), Some("$12.50"));
        assert_eq!(items[0].description, "Ten wings, hot");

        assert_eq!(items[1].position, 2);
        assert_eq!(items[1].price, None);
        assert_eq!(items[1].description, "");
    }

    #[test]
    fn test_block_without_item_roots_yields_nothing() {
        assert!(extract_items(r#"<div class="tab" id="1_7"><p>Coming soon</p></div>"#).is_empty());
    }

    #[test]
    fn test_unnamed_chunks_are_skipped_but_keep_positions() {
        let block = format!(
            "{}{}{}",
            r#"<div class="spl-item-root"><div class="price" data-price="4"></div></div>"#,
            item_html("  ", Some("3"), None),
            item_html("Soda", Some("2"), None)
        );
        let items = extract_items(&block);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Soda");
        assert_eq!(items[0].position, 3);
    }

    #[test]
    fn test_name_entities_are_decoded() {
        let block = item_html("Mac &amp;amp; Cheese", None, Some("Caf&eacute; &quot;style&quot;"));
        let items = extract_items(&block);
        assert_eq!(items[0].name, "Mac &amp; Cheese");
        assert_eq!(items[0].description, "Café \"style\"");
    }
}
