//! Display formatting for counts.

/// Group separator used for `pages` and `documents`.
pub const THOUSANDS_SEPARATOR: char = '.';

/// Format `n` with `.` between groups of three digits: `1234567` -> `1.234.567`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
