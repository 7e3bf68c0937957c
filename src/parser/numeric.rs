//! Numeric token extraction from free-text header values
//!
//! Header values mix units, numbers and prose (`F   8665.00`, `-999.25`,
//! `12 ft`). The extractor returns the first signed decimal or integer
//! token found anywhere in the text.

use regex::Regex;

/// Optional sign, then either a fractional number or an integer
const NUMERIC_TOKEN_PATTERN: &str = r"[-+]?[0-9]*\.[0-9]+|[-+]?[0-9]+";

/// Extracts the first numeric token from header value text
#[derive(Debug, Clone)]
pub struct NumericExtractor {
    pattern: Regex,
}

impl NumericExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(NUMERIC_TOKEN_PATTERN).expect("numeric token pattern is valid"),
        }
    }

    /// First numeric token in `text`, if any
    pub fn extract(&self, text: &str) -> Option<f64> {
        self.pattern
            .find(text)
            .and_then(|token| token.as_str().parse::<f64>().ok())
    }
}

impl Default for NumericExtractor {
    fn default() -> Self {
        Self::new()
    }
}
