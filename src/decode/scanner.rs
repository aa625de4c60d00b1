//! Line scanner and key classifier for the wire format
//!
//! The response body is a flat sequence of `KEY = VALUE` assignments,
//! optionally wrapped in an INI-style `[RESPONSE]` section and terminated
//! by an `EOF` marker line. The scanner is permissive: blank lines,
//! section headers, and anything that does not look like an assignment
//! are skipped rather than reported.

use once_cell::sync::Lazy;
use regex::Regex;

/// How many trailing lines are searched for the end-of-response marker.
///
/// The protocol places `EOF` at the very end of the body; limiting the
/// backward search keeps an `EOF`-looking value mid-response from
/// truncating the rest of it.
const EOF_SEARCH_WINDOW: usize = 4;

/// Matches an indexed property key, e.g. `property[domain created date][0]`.
/// The name may be any text without `]`; the index is digits only.
static PROPERTY_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^property\[([^\]]+)\]\[(\d+)\]$").expect("valid regex"));

/// A classified response key.
///
/// Keys are ASCII-lowercased during scanning; the upstream API treats
/// them case-insensitively and historical clients exposed them lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseKey {
    /// A bare top-level key (`code`, `description`, `runtime`, ...).
    Scalar(String),
    /// An indexed property key (`property[NAME][INDEX]`).
    Property {
        /// Property (column) name.
        name: String,
        /// Row index within the property.
        index: u64,
    },
}

/// Classify a raw key string.
///
/// Returns `None` when the key cannot belong to any response field at
/// all (empty, or a bare key containing whitespace). Keys that merely
/// fail the indexed-property pattern are kept as scalars verbatim.
pub fn classify(key: &str) -> Option<ResponseKey> {
    let key = key.trim().to_ascii_lowercase();
    if key.is_empty() {
        return None;
    }

    if let Some(caps) = PROPERTY_KEY.captures(&key) {
        let name = caps[1].to_string();
        let index: u64 = caps[2].parse().ok()?;
        return Some(ResponseKey::Property { name, index });
    }

    if key.contains(char::is_whitespace) {
        return None;
    }

    Some(ResponseKey::Scalar(key))
}

/// Split the response body into classified `(key, value)` assignments.
///
/// The returned iterator borrows the input and can be restarted by
/// calling `scan` again on the same text. Values are trimmed of
/// surrounding whitespace; order is preserved.
pub fn scan(body: &str) -> impl Iterator<Item = (ResponseKey, &str)> {
    strip_eof(body).lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        // Section header such as `[RESPONSE]`.
        if line.starts_with('[') && line.ends_with(']') {
            return None;
        }
        let (key, value) = line.split_once('=')?;
        Some((classify(key)?, value.trim()))
    })
}

/// Cut the body at the trailing `EOF` marker line, if present.
///
/// Only the last few lines are inspected, scanning backward from the
/// end of the text; everything from the marker onward is discarded.
fn strip_eof(body: &str) -> &str {
    let mut end = body.len();
    for _ in 0..EOF_SEARCH_WINDOW {
        let head = &body[..end];
        let start = head.rfind('\n').map_or(0, |pos| pos + 1);
        if head[start..].trim().starts_with("EOF") {
            return &body[..start];
        }
        if start == 0 {
            break;
        }
        end = start - 1;
    }
    body
}
