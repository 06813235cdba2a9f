use super::text::collapse_whitespace;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static TAB_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"(?i)data-href="#(?P<key>\d+)_(?P<spl>\d+)">(?P<name>[^<]+)</a>"##).unwrap()
});

/// Map category key to tab label for the links of widget `widget_id`.
///
/// A key seen twice keeps its first label; links whose label collapses to
/// nothing are ignored.
pub fn resolve_categories(html: &str, widget_id: &str) -> HashMap<String, String> {
    let mut categories = HashMap::new();

    for caps in TAB_LINK_RE.captures_iter(html) {
        if &caps["spl"] != widget_id {
            continue;
        }
        let name = collapse_whitespace(&caps["name"]);
        if name.is_empty() {
            continue;
        }
        categories
            .entry(caps["key"].to_string())
            .or_insert(name);
    }

    categories
}
