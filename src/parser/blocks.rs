use crate::utils::error::{EtlError, Result};
use regex::Regex;
use std::sync::LazyLock;

static TAB_BLOCK_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<div class="tab[^"]*" id="(?P<key>\d+)_(?P<spl>\d+)""#).unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStart {
    pub key: String,
    pub start: usize,
}

/// Byte range `[start, end)` of one category's tab content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpan {
    pub key: String,
    pub start: usize,
    pub end: usize,
}

impl BlockSpan {
    pub fn slice<'a>(&self, html: &'a str) -> &'a str {
        &html[self.start..self.end]
    }
}

/// Start offsets of every tab block belonging to widget `widget_id`, in scan order.
pub fn find_block_starts(html: &str, widget_id: &str) -> Vec<BlockStart> {
    TAB_BLOCK_START_RE
        .captures_iter(html)
        .filter(|caps| &caps["spl"] == widget_id)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(BlockStart {
                key: caps["key"].to_string(),
                start: whole.start(),
            })
        })
        .collect()
}

/// Sort starts into document order and close each span at the next start,
/// the last one at `doc_len`. Equal offsets keep scan order.
pub fn segment_blocks(mut starts: Vec<BlockStart>, doc_len: usize) -> Vec<BlockSpan> {
    starts.sort_by_key(|s| s.start);

    let ends: Vec<usize> = starts
        .iter()
        .skip(1)
        .map(|s| s.start)
        .chain(std::iter::once(doc_len))
        .collect();

    starts
        .into_iter()
        .zip(ends)
        .map(|(s, end)| BlockSpan {
            key: s.key,
            start: s.start,
            end,
        })
        .collect()
}

/// Locate and segment the widget's blocks; zero blocks means the page shape
/// is unsupported.
pub fn locate_blocks(html: &str, widget_id: &str, source_name: &str) -> Result<Vec<BlockSpan>> {
    let starts = find_block_starts(html, widget_id);
    if starts.is_empty() {
        return Err(EtlError::NoTabBlocks {
            widget_id: widget_id.to_string(),
            source_name: source_name.to_string(),
        });
    }
    Ok(segment_blocks(starts, html.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(key: &str, start: usize) -> BlockStart {
        BlockStart {
            key: key.to_string(),
            start,
        }
    }

    #[test]
    fn test_spans_run_to_next_start_and_document_end() {
        let spans = segment_blocks(vec![start("1", 100), start("2", 500)], 800);
        assert_eq!(
            spans,
            vec![
                BlockSpan { key: "1".into(), start: 100, end: 500 },
                BlockSpan { key: "2".into(), start: 500, end: 800 },
            ]
        );
    }

    #[test]
    fn test_spans_are_sorted_by_offset() {
        let spans = segment_blocks(vec![start("b", 40), start("a", 10), start("c", 90)], 120);
        let keys: Vec<_> = spans.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(spans[0].end, 40);
        assert_eq!(spans[1].end, 90);
        assert_eq!(spans[2].end, 120);
    }

    #[test]
    fn test_find_block_starts_filters_by_widget() {
        let html = concat!(
            r#"<div class="tab active" id="1_7">a</div>"#,
            r#"<div class="tab" id="1_8">b</div>"#,
            r#"<div class="tab" id="2_7">c</div>"#,
        );
        let starts = find_block_starts(html, "7");
        assert_eq!(starts.len(), 2);
        assert_eq!(starts[0], start("1", 0));
        assert_eq!(starts[1].key, "2");
        assert_eq!(&html[starts[1].start..starts[1].start + 4], "<div");
    }

    #[test]
    fn test_locate_blocks_without_matches_is_an_error() {
        let html = r#"<div class="tab" id="1_8"></div>"#;
        let err = locate_blocks(html, "7", "dinner.html").unwrap_err();
        assert!(matches!(err, EtlError::NoTabBlocks { ref widget_id, .. } if widget_id == "7"));
    }

    #[test]
    fn test_block_slice() {
        let html = r#"<div class="tab" id="1_7">one</div><div class="tab" id="2_7">two</div>"#;
        let spans = locate_blocks(html, "7", "t.html").unwrap();
        assert_eq!(spans[0].slice(html), r#"<div class="tab" id="1_7">one</div>"#);
        assert_eq!(spans[1].slice(html), r#"<div class="tab" id="2_7">two</div>"#);
    }
}
