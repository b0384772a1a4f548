//! Fixed-width field formatting.
//!
//! None of these functions fail: malformed input degrades to zeros or
//! padding so that every field still occupies exactly its column width.

/// Padding side for text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Keeps only ASCII digits, left-pads with `'0'` and keeps the last `length` digits.
pub fn digits(value: &str, length: usize) -> String {
    let only: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    let padded = format!("{:0>width$}", only, width = length);
    padded[padded.len() - length..].to_string()
}

/// Keeps ASCII alphanumerics and spaces, then pads with spaces to `length`.
///
/// Excess characters are always cut from the end, whatever the alignment.
pub fn text(value: &str, length: usize, align: Align) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .take(length)
        .collect();
    match align {
        Align::Left => format!("{:<width$}", cleaned, width = length),
        Align::Right => format!("{:>width$}", cleaned, width = length),
    }
}

/// Zero-padded numeric field for counts and cent amounts.
pub fn number(value: u64, length: usize) -> String {
    digits(&value.to_string(), length)
}

/// Splits a routing number into the 8-digit RDFI identifier and its check digit.
pub fn split_routing(routing_number: &str) -> (String, String) {
    let normalized = digits(routing_number, 9);
    let (rdfi, check) = normalized.split_at(8);
    (rdfi.to_string(), check.to_string())
}

/// Sums RDFI identifiers and keeps the low-order 10 digits.
pub fn entry_hash<S: AsRef<str>>(rdfi_ids: &[S]) -> String {
    let sum: u64 = rdfi_ids
        .iter()
        .map(|id| id.as_ref().parse::<u64>().unwrap_or(0))
        .sum();
    number(sum, 10)
}
