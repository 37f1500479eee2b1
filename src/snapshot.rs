use serde::{Deserialize, Serialize};

/// A registration link found on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible anchor text
    pub text: String,

    /// Absolute URL of the anchor
    pub url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Registration-relevant content of the page at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Sentence fragments matching announcement keywords, in document order.
    /// Duplicates are kept.
    #[serde(default)]
    pub registration_text: Vec<String>,

    /// Registration links in document order
    #[serde(default)]
    pub links: Vec<Link>,

    /// Lowercased, whitespace-collapsed text of the monitored region.
    /// Search corpus only; never persisted.
    #[serde(skip)]
    pub full_text: String,
}

impl Snapshot {
    pub fn new(registration_text: Vec<String>, links: Vec<Link>) -> Self {
        Self {
            registration_text,
            links,
            full_text: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.registration_text.is_empty() && self.links.is_empty()
    }
}

// `full_text` is derived and not persisted, so it takes no part in equality.
impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.registration_text == other.registration_text && self.links == other.links
    }
}

impl Eq for Snapshot {}
