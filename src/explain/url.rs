use crate::features::has_digit;
use serde::{Serialize, Serializer};

const SUSPICIOUS_KEYWORDS: [&str; 5] = ["login", "verify", "update", "secure", "account"];
const LONG_URL_CHARS: usize = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlReason {
    NotHttps,
    SuspiciousKeyword,
    NumericDomain,
    AtSymbol,
    UnusuallyLong,
    /// Fallback when nothing else fired.
    TrainingPattern,
}

impl UrlReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlReason::NotHttps => "URL does not use HTTPS",
            UrlReason::SuspiciousKeyword => {
                "Contains suspicious keywords related to sensitive actions"
            }
            UrlReason::NumericDomain => "URL contains numeric or complex domain structure",
            UrlReason::AtSymbol => "URL contains '@' symbol which is commonly used in phishing",
            UrlReason::UnusuallyLong => "URL length is unusually long",
            UrlReason::TrainingPattern => {
                "URL structure matches known phishing patterns from training data"
            }
        }
    }
}

impl AsRef<str> for UrlReason {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for UrlReason {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

/// Evaluates the URL exactly as received (no trimming). Never empty.
pub fn explain_url(url: &str) -> Vec<UrlReason> {
    let mut reasons = Vec::new();
    let lower = url.to_lowercase();

    if !url.starts_with("https://") {
        reasons.push(UrlReason::NotHttps);
    }
    if SUSPICIOUS_KEYWORDS.iter().any(|k| lower.contains(k)) {
        reasons.push(UrlReason::SuspiciousKeyword);
    }
    if has_digit(url) && url.matches('.').count() > 3 {
        reasons.push(UrlReason::NumericDomain);
    }
    if url.contains('@') {
        reasons.push(UrlReason::AtSymbol);
    }
    if url.chars().count() > LONG_URL_CHARS {
        reasons.push(UrlReason::UnusuallyLong);
    }

    if reasons.is_empty() {
        reasons.push(UrlReason::TrainingPattern);
    }
    reasons
}
