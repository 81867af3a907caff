//! Part-number normalization.
//!
//! Supplier feeds and callers format the same part number differently
//! (`"0012345"`, `"12-345"`, `"PN12345"`). Both sides of every comparison are
//! reduced to a canonical digit string first.

/// Strip leading `'0'`s and every non-digit character.
///
/// Zeros exposed by separator removal (`"A-012"`) are stripped as well, so the
/// result is stable under repeated normalization.
pub fn normalize_part_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.trim_start_matches('0').to_string()
}

/// True when both part numbers normalize to the same non-empty key.
///
/// An empty key never matches, not even another empty key.
pub fn part_numbers_match(query_key: &str, candidate: Option<&str>) -> bool {
    if query_key.is_empty() {
        return false;
    }
    candidate
        .map(normalize_part_number)
        .is_some_and(|key| key == query_key)
}
