use crate::snapshot::{Link, Snapshot};
use std::collections::HashSet;
use std::fmt;

/// Kind of new content found on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    RegistrationAnnouncement,
    NewLink,
}

impl SignalKind {
    /// Label used in alert subject lines
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::RegistrationAnnouncement => "REGISTRATION ANNOUNCEMENT",
            SignalKind::NewLink => "NEW REGISTRATION LINK",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// New content relative to the stored snapshot, carrying the items that triggered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSignal {
    /// Registration fragments absent from the previous snapshot
    RegistrationAnnouncement(Vec<String>),
    /// Links whose URL was absent from the previous snapshot
    NewLink(Vec<Link>),
}

impl ChangeSignal {
    pub fn kind(&self) -> SignalKind {
        match self {
            ChangeSignal::RegistrationAnnouncement(_) => SignalKind::RegistrationAnnouncement,
            ChangeSignal::NewLink(_) => SignalKind::NewLink,
        }
    }

    /// Number of new items carried by the signal
    pub fn item_count(&self) -> usize {
        match self {
            ChangeSignal::RegistrationAnnouncement(texts) => texts.len(),
            ChangeSignal::NewLink(links) => links.len(),
        }
    }
}

/// Compare `current` against `previous` and report new content only.
///
/// At most one signal of each kind is returned, announcements first. Removed fragments,
/// removed links and relabelled links produce nothing. Links are compared by URL alone.
pub fn detect(current: &Snapshot, previous: &Snapshot) -> Vec<ChangeSignal> {
    let mut signals = Vec::with_capacity(2);

    let seen_text: HashSet<&str> = previous
        .registration_text
        .iter()
        .map(String::as_str)
        .collect();
    let new_text: Vec<String> = current
        .registration_text
        .iter()
        .filter(|text| !seen_text.contains(text.as_str()))
        .cloned()
        .collect();

    if !new_text.is_empty() {
        signals.push(ChangeSignal::RegistrationAnnouncement(new_text));
    }

    let seen_urls: HashSet<&str> = previous.links.iter().map(|l| l.url.as_str()).collect();
    let new_links: Vec<Link> = current
        .links
        .iter()
        .filter(|link| !seen_urls.contains(link.url.as_str()))
        .cloned()
        .collect();

    if !new_links.is_empty() {
        signals.push(ChangeSignal::NewLink(new_links));
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_link_detection() {
        let previous = Snapshot::new(vec![], vec![Link::new("Register", "https://site/old")]);
        let current = Snapshot::new(
            vec![],
            vec![
                Link::new("Register", "https://site/old"),
                Link::new("Sign Up", "https://site/new"),
            ],
        );

        assert_eq!(
            detect(&current, &previous),
            vec![ChangeSignal::NewLink(vec![Link::new(
                "Sign Up",
                "https://site/new"
            )])]
        );
    }

    #[test]
    fn test_new_announcement_detection() {
        let previous = Snapshot::new(texts(&["Fall registration opens in September"]), vec![]);
        let current = Snapshot::new(
            texts(&[
                "Fall registration opens in September",
                "Winter registration opens in January",
            ]),
            vec![],
        );

        assert_eq!(
            detect(&current, &previous),
            vec![ChangeSignal::RegistrationAnnouncement(texts(&[
                "Winter registration opens in January"
            ]))]
        );
    }

    #[test]
    fn test_identical_snapshots_produce_nothing() {
        let snapshot = Snapshot::new(
            texts(&["Registration opens in May", "Registration opens in May"]),
            vec![Link::new("Register", "https://site/r")],
        );
        assert!(detect(&snapshot, &snapshot.clone()).is_empty());
    }

    #[test]
    fn test_removals_and_relabels_are_ignored() {
        let previous = Snapshot::new(
            texts(&["Registration opens in May"]),
            vec![
                Link::new("Register", "https://site/r"),
                Link::new("Enroll", "https://site/e"),
            ],
        );
        let current = Snapshot::new(vec![], vec![Link::new("Register now!", "https://site/r")]);

        assert!(detect(&current, &previous).is_empty());
    }

    #[test]
    fn test_both_signals_announcement_first() {
        let previous = Snapshot::default();
        let current = Snapshot::new(
            texts(&["Registration opens in May"]),
            vec![Link::new("Register", "https://site/r")],
        );

        let kinds: Vec<SignalKind> = detect(&current, &previous)
            .iter()
            .map(ChangeSignal::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![SignalKind::RegistrationAnnouncement, SignalKind::NewLink]
        );
    }

    #[test]
    fn test_new_url_payload_keeps_every_link_object() {
        let previous = Snapshot::default();
        let current = Snapshot::new(
            vec![],
            vec![
                Link::new("Register", "https://site/new"),
                Link::new("Sign up here", "https://site/new"),
            ],
        );

        let signals = detect(&current, &previous);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].item_count(), 2);
    }

    #[test]
    fn test_new_duplicate_fragments_are_all_reported() {
        let previous = Snapshot::default();
        let current = Snapshot::new(texts(&["Opens in May", "Opens in May"]), vec![]);

        assert_eq!(
            detect(&current, &previous),
            vec![ChangeSignal::RegistrationAnnouncement(texts(&[
                "Opens in May",
                "Opens in May"
            ]))]
        );
    }

    #[test]
    fn test_signal_labels() {
        assert_eq!(
            SignalKind::RegistrationAnnouncement.to_string(),
            "REGISTRATION ANNOUNCEMENT"
        );
        assert_eq!(SignalKind::NewLink.label(), "NEW REGISTRATION LINK");
    }
}
