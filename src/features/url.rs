//! URL → 12-dim feature vector. Counts run over the trimmed URL; the IP check
//! runs over the authority component only.

use super::{count_digits, ParsedUrl, UrlFeatureVector};
use regex::Regex;
use std::sync::OnceLock;

static DOTTED_QUAD: OnceLock<Regex> = OnceLock::new();

fn dotted_quad() -> &'static Regex {
    DOTTED_QUAD.get_or_init(|| {
        Regex::new(r"\d+\.\d+\.\d+\.\d+").expect("dotted-quad pattern")
    })
}

fn count(s: &str, c: char) -> f64 {
    s.chars().filter(|&x| x == c).count() as f64
}

/// Strips what Python's `str.strip()` strips: Unicode whitespace plus the
/// file/group/record/unit separators `\x1c`..=`\x1f`.
pub fn trim_url(url: &str) -> &str {
    url.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Total over any string input.
pub fn extract_url_features(url: &str) -> UrlFeatureVector {
    let url = trim_url(url);
    let parsed = ParsedUrl::parse(url);

    let url_length = url.chars().count();
    let digits = count_digits(url);
    let has_ip = dotted_quad().is_match(&parsed.hostname);
    let has_https = url.to_lowercase().starts_with("https://");
    let digit_ratio = if url_length > 0 {
        digits as f64 / url_length as f64
    } else {
        0.0
    };

    UrlFeatureVector {
        values: [
            url_length as f64,
            parsed.hostname.chars().count() as f64,
            parsed.path.chars().count() as f64,
            count(url, '.'),
            count(url, '-'),
            count(url, '@'),
            count(url, '?'),
            count(url, '='),
            count(url, '/'),
            if has_ip { 1.0 } else { 0.0 },
            if has_https { 1.0 } else { 0.0 },
            digit_ratio,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::URL_FEATURE_DIM;

    #[test]
    fn empty_input_is_all_zero() {
        let fv = extract_url_features("");
        assert_eq!(fv.len(), URL_FEATURE_DIM);
        assert!(fv.as_slice().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn counts_over_full_url() {
        let fv = extract_url_features("  http://a-b.example.com/p/q?x=1&y=2  ");
        assert_eq!(fv.get("url_length"), Some(34.0));
        assert_eq!(fv.get("hostname_length"), Some(15.0));
        assert_eq!(fv.get("path_length"), Some(4.0));
        assert_eq!(fv.get("num_dots"), Some(2.0));
        assert_eq!(fv.get("num_hyphens"), Some(1.0));
        assert_eq!(fv.get("num_at"), Some(0.0));
        assert_eq!(fv.get("num_qm"), Some(1.0));
        assert_eq!(fv.get("num_eq"), Some(2.0));
        assert_eq!(fv.get("num_slash"), Some(4.0));
        assert_eq!(fv.get("digit_ratio"), Some(2.0 / 34.0));
    }

    #[test]
    fn ip_flag_checks_authority() {
        assert_eq!(extract_url_features("http://192.168.1.1/x").get("has_ip"), Some(1.0));
        assert_eq!(extract_url_features("http://example.com/x").get("has_ip"), Some(0.0));
        assert_eq!(
            extract_url_features("http://192.168.1.1:8080/x").get("has_ip"),
            Some(1.0)
        );
        // dotted quad in the path does not count
        assert_eq!(
            extract_url_features("http://example.com/1.2.3.4").get("has_ip"),
            Some(0.0)
        );
    }

    #[test]
    fn https_flag_is_case_insensitive() {
        assert_eq!(extract_url_features("HTTPS://a.com").get("has_https"), Some(1.0));
        assert_eq!(extract_url_features("http://a.com").get("has_https"), Some(0.0));
    }

    #[test]
    fn digit_ratio() {
        assert_eq!(extract_url_features("abc123").get("digit_ratio"), Some(0.5));
    }

    #[test]
    fn non_ascii_digits_count() {
        let fv = extract_url_features("abc\u{661}\u{662}\u{663}");
        assert_eq!(fv.get("digit_ratio"), Some(0.5));
        let fv = extract_url_features("http://\u{661}\u{669}\u{662}.\u{661}\u{666}\u{668}.\u{661}.\u{661}/x");
        assert_eq!(fv.get("has_ip"), Some(1.0));
    }

    #[test]
    fn separators_are_trimmed() {
        let fv = extract_url_features("\x1chttp://a.com\x1f\u{85}");
        assert_eq!(fv.get("url_length"), Some(12.0));
        assert_eq!(trim_url("\u{3000} x \x1e"), "x");
    }

    #[test]
    fn malformed_input_still_yields_vector() {
        for input in ["::::", "http://", "@@@", "\u{1F600}", "[::1"] {
            let fv = extract_url_features(input);
            assert!(fv.as_slice().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        let u = "http://user@evil.com/login?id=42";
        assert_eq!(extract_url_features(u), extract_url_features(u));
    }
}
