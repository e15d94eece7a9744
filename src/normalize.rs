/// Clean a free-text argument before it is used in a query.
///
/// Trims surrounding whitespace, strips one pair of matching surrounding
/// quotes, and collapses internal whitespace runs to a single space.
/// Case is left untouched.
pub fn clean(input: &str) -> String {
    let trimmed = input.trim();
    let unquoted = strip_quotes(trimmed).trim();
    unquoted.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}
