//! Rule-based explanation engines for URLs and message text.
//!
//! Rules look only at the raw input, never at the classifier verdict. When no
//! rule fires each engine appends a fallback reason so the list is never
//! empty. The URL fallback reads like a phishing indicator and the text
//! fallback like a legitimacy indicator whatever the verdict was; callers must
//! take the verdict from the classifier alone.

mod text;
mod url;

pub use text::{explain_text, TextReason};
pub use url::{explain_url, UrlReason};

/// Reasons rendered as wire strings, in rule order.
pub fn render<R: AsRef<str>>(reasons: &[R]) -> Vec<String> {
    reasons.iter().map(|r| r.as_ref().to_string()).collect()
}
