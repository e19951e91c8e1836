//! Permissive URL splitting: scheme, authority, path. Never fails; malformed
//! input yields empty components.

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    /// Authority (`user@host:port`); empty unless the URL has a `//` part.
    pub hostname: String,
    pub path: String,
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

fn split_params(path: &str) -> &str {
    let start = path.rfind('/').unwrap_or(0);
    match path[start..].find(';') {
        Some(i) => &path[..start + i],
        None => path,
    }
}

impl ParsedUrl {
    pub fn parse(url: &str) -> Self {
        let cleaned: String = url
            .trim_start_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();
        let mut rest = cleaned.as_str();

        let mut scheme = String::new();
        if let Some(i) = rest.find(':') {
            let candidate = &rest[..i];
            let starts_alpha = candidate.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
            if starts_alpha && candidate.chars().all(is_scheme_char) {
                scheme = candidate.to_ascii_lowercase();
                rest = &rest[i + 1..];
            }
        }

        let mut hostname = "";
        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
            hostname = &after[..end];
            rest = &after[end..];
        }

        if let Some(i) = rest.find('#') {
            rest = &rest[..i];
        }
        if let Some(i) = rest.find('?') {
            rest = &rest[..i];
        }

        let path = if USES_PARAMS.contains(&scheme.as_str()) {
            split_params(rest)
        } else {
            rest
        };

        Self {
            scheme,
            hostname: hostname.to_string(),
            path: path.to_string(),
        }
    }
}
