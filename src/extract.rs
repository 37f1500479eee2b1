use crate::config::MonitorConfig;
use crate::error::ConfigError;
use crate::keywords::KeywordSet;
use crate::parsers::{Anchor, html, text};
use crate::snapshot::{Link, Snapshot};
use scraper::Selector;
use url::Url;

/// Turns page markup into a `Snapshot` of registration text and links
#[derive(Debug)]
pub struct Extractor {
    region: Selector,
    origin: Url,
    announcement: KeywordSet,
    link_intent: KeywordSet,
}

impl Extractor {
    /// Build an extractor from the region selector, site origin and keyword lists in `config`
    pub fn new(config: &MonitorConfig) -> Result<Self, ConfigError> {
        let region =
            Selector::parse(&config.region_selector).map_err(|e| ConfigError::InvalidSelector {
                selector: config.region_selector.clone(),
                reason: e.to_string(),
            })?;

        let announcement = KeywordSet::new(&config.keywords.announcement)?;
        let link_intent = KeywordSet::new(&config.keywords.link_intent)?;
        if announcement.is_empty() || link_intent.is_empty() {
            ::log::warn!("A keyword list is empty; that part of the page will never match");
        }
        ::log::debug!(
            "Compiled {} announcement and {} link keywords",
            announcement.len(),
            link_intent.len()
        );

        Ok(Self {
            region,
            origin: Url::parse(&config.site_origin)?,
            announcement,
            link_intent,
        })
    }

    /// Extract a snapshot from raw markup. Never fails; unusable markup gives an empty snapshot.
    pub fn extract(&self, markup: &str) -> Snapshot {
        let parsed = html::parse(markup, &self.region);
        let full_text = parsed.content.to_lowercase();

        // Keyword-major order: a fragment matching several keywords is recorded once per keyword.
        let mut registration_text = Vec::new();
        for keyword in self.announcement.iter() {
            if !keyword.is_match(&full_text) {
                continue;
            }
            ::log::debug!("Announcement keyword {:?} present", keyword.phrase());
            registration_text.extend(
                text::sentences(&parsed.content)
                    .filter(|fragment| keyword.is_match(fragment))
                    .map(str::to_string),
            );
        }

        let links: Vec<Link> = parsed
            .anchors
            .iter()
            .filter(|anchor| self.is_registration_link(anchor))
            .map(|anchor| Link::new(anchor.text.clone(), self.absolutize(&anchor.href)))
            .collect();

        ::log::debug!(
            "Extracted {} registration fragments and {} links (region found: {})",
            registration_text.len(),
            links.len(),
            parsed.region_found
        );

        Snapshot {
            registration_text,
            links,
            full_text,
        }
    }

    fn is_registration_link(&self, anchor: &Anchor) -> bool {
        self.link_intent
            .matches_any(&[anchor.text.as_str(), anchor.href.as_str()])
    }

    /// Absolute hrefs are kept verbatim and root-relative paths get the origin prepended
    /// as written. Other relative forms are resolved against the origin.
    fn absolutize(&self, href: &str) -> String {
        if Url::parse(href).is_ok() {
            return href.to_string();
        }

        let origin = self.origin.as_str().trim_end_matches('/');
        if href.starts_with('/') && !href.starts_with("//") {
            return format!("{origin}{href}");
        }

        match self.origin.join(href) {
            Ok(url) => url.to_string(),
            Err(e) => {
                ::log::debug!("Could not resolve {:?} against origin: {}", href, e);
                format!("{origin}{href}")
            }
        }
    }
}
