use crate::utils::error::{EtlError, Result};
use regex::Regex;
use std::sync::LazyLock;

static SPL_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"id="spl_(\d+)""#).unwrap());

/// Find the numeric instance id of the page's stylish price list widget.
/// Only the first `id="spl_<n>"` marker counts.
pub fn locate_widget_id(html: &str, source_name: &str) -> Result<String> {
    SPL_ID_RE
        .captures(html)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| EtlError::WidgetNotFound {
            source_name: source_name.to_string(),
        })
}
