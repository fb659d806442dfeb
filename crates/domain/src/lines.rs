/// Lines substituted when the input cannot be read.
pub const FALLBACK_LINES: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

pub fn fallback_lines() -> Vec<String> {
    FALLBACK_LINES.iter().map(ToString::to_string).collect()
}

/// Splits `text` on `'\n'` and drops zero-length entries.
///
/// Nothing else is trimmed: a `"\r"` left over from CRLF input stays part of
/// its line, and a line holding only `"\r"` is kept.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
