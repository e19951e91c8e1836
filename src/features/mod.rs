//! Lexical/structural feature extraction from raw URLs.

mod parse;
mod url;

pub use parse::ParsedUrl;
pub use url::{extract_url_features, trim_url};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static DIGIT: OnceLock<Regex> = OnceLock::new();

// Unicode decimal digits (Nd), e.g. Arabic-Indic ٣ as well as 3.
fn digit() -> &'static Regex {
    DIGIT.get_or_init(|| Regex::new(r"\d").expect("digit pattern"))
}

/// Number of decimal-digit characters in `s`.
pub fn count_digits(s: &str) -> usize {
    digit().find_iter(s).count()
}

pub fn has_digit(s: &str) -> bool {
    digit().is_match(s)
}

/// Number of URL features the URL classifier consumes.
pub const URL_FEATURE_DIM: usize = 12;

/// Positional feature names; the classifier depends on this order.
pub const URL_FEATURE_NAMES: [&str; URL_FEATURE_DIM] = [
    "url_length",
    "hostname_length",
    "path_length",
    "num_dots",
    "num_hyphens",
    "num_at",
    "num_qm",
    "num_eq",
    "num_slash",
    "has_ip",
    "has_https",
    "digit_ratio",
];

/// Fixed-size URL feature vector (always 12 finite values).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrlFeatureVector {
    pub values: [f64; URL_FEATURE_DIM],
}

impl UrlFeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value of a feature by name, e.g. `"has_ip"`.
    pub fn get(&self, name: &str) -> Option<f64> {
        URL_FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    /// Name/value pairs in positional order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        URL_FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}
