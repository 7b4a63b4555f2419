//! Address-bar input resolution.
//!
//! Input containing a dot is treated as a URL and given an `https://`
//! scheme when it lacks one; anything else becomes a search query
//! against the configured endpoint. Malformed addresses are passed
//! through untouched; the embedded view owns load failures.

use crate::config::ShellConfig;

/// Resolve raw address-bar input into a loadable URL.
pub fn resolve_input(input: &str, config: &ShellConfig) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return config.home_url.clone();
    }
    // Dot presence decides URL vs. search; scheme handling applies only
    // within the URL branch, so dotless input is searched even when it
    // carries a scheme prefix.
    if trimmed.contains('.') {
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return trimmed.to_string();
        }
        return format!("https://{}", trimmed);
    }
    format!("{}{}", config.search_endpoint, percent_encode(trimmed))
}

/// Percent-encode a search query (application/x-www-form-urlencoded:
/// space becomes '+', unreserved bytes pass through).
pub fn percent_encode(s: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(b));
        } else if b == b' ' {
            out.push('+');
        } else {
            let _ = write!(out, "%{:02X}", b);
        }
    }
    out
}

/// Short label for a URL, used as a tab title until the page reports one:
/// the host with scheme and `www.` stripped.
pub fn host_label(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .split('/')
        .next()
        .unwrap_or(url)
        .to_string()
}
