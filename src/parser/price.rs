use super::text::collapse_whitespace;

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£'];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price {
    pub amount: f64,
    /// Market price: no usable positive price in the source.
    pub on_request: bool,
}

/// Parse a `data-price` attribute value.
///
/// Absent, blank or unparsable values give `0` and set `on_request`.
/// A parsed amount that is zero or negative keeps its value but still sets
/// `on_request`.
pub fn parse_price(raw: Option<&str>) -> Price {
    let cleaned = raw.map(collapse_whitespace).unwrap_or_default();
    if cleaned.is_empty() {
        return Price {
            amount: 0.0,
            on_request: true,
        };
    }

    let numeric = cleaned
        .strip_prefix(CURRENCY_SYMBOLS)
        .unwrap_or(&cleaned)
        .trim();

    match numeric.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Price {
            amount,
            on_request: amount <= 0.0,
        },
        _ => Price {
            amount: 0.0,
            on_request: true,
        },
    }
}
