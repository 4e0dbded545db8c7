//! exec::scan
//!
//! Post-processing of captured command output.
//!
//! Chain tooling prints the endpoints it serves (local canister UIs,
//! candid interfaces) somewhere in its stdout/stderr; the scanner pulls
//! those out so commands can surface them without re-parsing tool output
//! at every call site.

use std::sync::OnceLock;

use regex::Regex;

/// Matches `http`/`https` URLs with typical path/query characters,
/// stopping at whitespace, quotes, and closing brackets.
const URL_PATTERN: &str = r#"https?://[^\s"'<>\)\]]+"#;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_PATTERN).expect("url pattern is valid"))
}

/// Extract every URL embedded in `text`, in order of appearance.
///
/// Pure function; empty or malformed input yields an empty list.
pub fn extract_urls(text: &str) -> Vec<String> {
    url_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
