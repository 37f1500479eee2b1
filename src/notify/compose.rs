use crate::config::MonitorConfig;
use crate::detect::ChangeSignal;
use crate::notify::Message;
use chrono::NaiveDateTime;

/// Format of the detection timestamp in alert footers
pub const DETECTED_AT_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Builds the notification texts for one monitored page
#[derive(Debug, Clone)]
pub struct Composer {
    short_name: String,
    page_title: String,
    target_url: String,
}

impl Composer {
    pub fn new(
        short_name: impl Into<String>,
        page_title: impl Into<String>,
        target_url: impl Into<String>,
    ) -> Self {
        Self {
            short_name: short_name.into(),
            page_title: page_title.into(),
            target_url: target_url.into(),
        }
    }

    pub fn from_config(config: &MonitorConfig) -> Self {
        Self::new(
            config.short_name.clone(),
            config.page_title.clone(),
            config.target_url.clone(),
        )
    }

    /// One message covering every signal of the run
    pub fn alert(&self, signals: &[ChangeSignal], detected_at: NaiveDateTime) -> Message {
        let labels: Vec<&str> = signals.iter().map(|s| s.kind().label()).collect();
        let subject = format!("🚨 {} ALERT: {}", self.short_name, labels.join(" & "));

        let mut body = format!("{} Update!\n\n", self.page_title);
        for signal in signals {
            match signal {
                ChangeSignal::RegistrationAnnouncement(texts) => {
                    body.push_str("📅 NEW ANNOUNCEMENT DETECTED:\n");
                    for text in texts {
                        body.push_str(&format!("  • {text}\n"));
                    }
                }
                ChangeSignal::NewLink(links) => {
                    body.push_str("🔗 NEW REGISTRATION LINKS:\n");
                    for link in links {
                        body.push_str(&format!("  • {}\n    {}\n", link.text, link.url));
                    }
                }
            }
            body.push('\n');
        }

        body.push_str(&format!(
            "Check the full page here:\n{}\n\nDetected at: {}",
            self.target_url,
            detected_at.format(DETECTED_AT_FORMAT)
        ));

        Message::new(subject, body)
    }

    /// The one-time message sent when a baseline is first recorded
    pub fn started(&self, link_count: usize) -> Message {
        Message::new(
            format!("{} Monitor Started", self.short_name),
            format!(
                "Monitoring has begun for {}.\n\n\
                 Current links found: {}\n\
                 URL: {}\n\n\
                 You'll receive alerts when registration announcements or new links are detected.",
                self.page_title, link_count, self.target_url
            ),
        )
    }
}
