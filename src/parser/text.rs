use regex::{Captures, Regex};
use std::sync::LazyLock;

static CHAR_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+;?|#[xX][0-9a-fA-F]+;?|[^\t\n\f <&#;]{1,32};?)").unwrap()
});
static APOSTROPHE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"['`\x{2019}]").unwrap());
static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Trim and collapse every run of whitespace to a single space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Named entities that HTML5 also accepts without the trailing `;`.
const LEGACY_ENTITIES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren",
    "deg", "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34",
    "gt", "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

/// Characters for numeric references 0x80..=0x9F, read as Windows-1252.
const WINDOWS_1252: [char; 32] = [
    '\u{20ac}', '\u{81}', '\u{201a}', '\u{192}', '\u{201e}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{2c6}', '\u{2030}', '\u{160}', '\u{2039}', '\u{152}', '\u{8d}', '\u{17d}', '\u{8f}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{2dc}', '\u{2122}', '\u{161}', '\u{203a}', '\u{153}', '\u{9d}', '\u{17e}', '\u{178}',
];

/// Decode character references following the HTML5 rules: legacy names
/// without `;`, Windows-1252 numeric references, and replacement of
/// out-of-range code points. Unknown references are left as written.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    CHAR_REF_RE
        .replace_all(s, |caps: &Captures| match caps[1].strip_prefix('#') {
            Some(number) => decode_numeric(number),
            None => decode_named(&caps[1]),
        })
        .into_owned()
}

fn decode_numeric(number: &str) -> String {
    let digits = number.trim_end_matches(';');
    let code = match digits.strip_prefix(&['x', 'X'][..]) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => digits.parse::<u32>(),
    }
    .unwrap_or(u32::MAX);

    match code {
        0 => '\u{fffd}'.to_string(),
        0x0d => '\r'.to_string(),
        0x80..=0x9f => WINDOWS_1252[(code - 0x80) as usize].to_string(),
        0xd800..=0xdfff | 0x110000.. => '\u{fffd}'.to_string(),
        0x01..=0x08 | 0x0b | 0x0e..=0x1f | 0x7f | 0xfdd0..=0xfdef => String::new(),
        _ if code & 0xfffe == 0xfffe => String::new(),
        _ => char::from_u32(code)
            .map(String::from)
            .unwrap_or_else(|| '\u{fffd}'.to_string()),
    }
}

fn decode_named(name: &str) -> String {
    if let Some(value) = lookup_entity(name) {
        return value;
    }

    // longest legacy prefix of two or more characters, rest kept as text
    for end in (2..name.len()).rev() {
        if !name.is_char_boundary(end) {
            continue;
        }
        let (prefix, rest) = name.split_at(end);
        if let Some(value) = lookup_entity(prefix) {
            return format!("{}{}", value, rest);
        }
    }

    format!("&{}", name)
}

fn lookup_entity(name: &str) -> Option<String> {
    let reference = match name.strip_suffix(';') {
        Some(_) => format!("&{}", name),
        None if LEGACY_ENTITIES.contains(&name) => format!("&{};", name),
        None => return None,
    };
    let decoded = html_escape::decode_html_entities(&reference);
    (decoded != reference.as_str()).then(|| decoded.into_owned())
}

/// Entity-decoded, whitespace-collapsed display text.
pub fn clean_text(s: &str) -> String {
    collapse_whitespace(&decode_entities(s))
}

/// Lowercase hyphen-separated id fragment. Empty input yields `"x"`.
pub fn slugify(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    let stripped = APOSTROPHE_RE.replace_all(&lowered, "");
    let hyphenated = NON_SLUG_RE.replace_all(&stripped, "-");
    let slug = hyphenated.trim_matches('-');
    if slug.is_empty() {
        "x".to_string()
    } else {
        slug.to_string()
    }
}
