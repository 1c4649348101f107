/// Collapses insignificant whitespace in GraphQL source text into a canonical
/// string suitable for use as a cache key.
///
/// Every maximal run of whitespace and/or commas becomes a single space, and
/// the result is trimmed. Commas are insignificant in GraphQL, as is the
/// byte-order mark.
///
/// Only whitespace is canonicalized: two documents that differ in field
/// order (for example) still normalize to different keys.
pub fn normalize(source: &str) -> String {
    let mut normalized = String::with_capacity(source.len());
    let mut in_gap = false;
    for ch in source.chars() {
        if is_insignificant(ch) {
            in_gap = true;
            continue;
        }

        if in_gap && !normalized.is_empty() {
            normalized.push(' ');
        }
        in_gap = false;
        normalized.push(ch);
    }
    normalized
}

fn is_insignificant(ch: char) -> bool {
    ch == ',' || ch == '\u{feff}' || ch.is_whitespace()
}
