pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

/// An anchor element found in the monitored region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Visible text, whitespace-collapsed
    pub text: String,
    /// The raw `href` attribute, trimmed
    pub href: String,
}

/// Result of parsing page markup
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Visible text of the region, single-space separated
    pub content: String,
    /// Anchors carrying an `href`, in document order
    pub anchors: Vec<Anchor>,
    /// Whether the region selector matched; false means the whole document was used
    pub region_found: bool,
}
