/// Joins text fragments with single spaces, dropping blank fragments
pub fn join_fragments<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits text on every period, trimming each fragment.
///
/// Empty fragments are kept so callers see exactly the period-delimited pieces.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split('.').map(str::trim)
}
