use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the sender account
pub const ENV_SENDER: &str = "GMAIL_USER";
/// Environment variable holding the sender's app password
pub const ENV_PASSWORD: &str = "GMAIL_APP_PASSWORD";
/// Environment variable holding the primary recipient
pub const ENV_RECIPIENT: &str = "RECIPIENT_EMAIL";
/// Environment variable holding the optional SMS gateway address
pub const ENV_SMS_RECIPIENT: &str = "SMS_EMAIL";

/// Configuration for a single monitored page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Page that is fetched on every run
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// Origin used to absolutize relative link targets
    #[serde(default = "default_site_origin")]
    pub site_origin: String,

    /// CSS selector of the monitored content region
    #[serde(default = "default_region_selector")]
    pub region_selector: String,

    /// Path of the stored snapshot
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    /// User-Agent header sent with the page request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Page request timeout in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// Implicit-TLS submission port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    #[serde(default = "default_smtp_timeout_secs")]
    pub smtp_timeout_secs: u64,

    /// Short label used in subject lines ("ESL ALERT", "ESL Monitor Started")
    #[serde(default = "default_short_name")]
    pub short_name: String,

    /// Human readable name of the monitored page
    #[serde(default = "default_page_title")]
    pub page_title: String,

    /// Maximum body length of the SMS gateway message
    #[serde(default = "default_sms_max_chars")]
    pub sms_max_chars: usize,

    #[serde(default)]
    pub keywords: KeywordConfig,
}

/// Keyword lists driving extraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordConfig {
    /// Phrases that mark a sentence as a registration announcement
    #[serde(default = "default_announcement_keywords")]
    pub announcement: Vec<String>,

    /// Phrases that mark an anchor as a registration link
    #[serde(default = "default_link_intent_keywords")]
    pub link_intent: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            announcement: default_announcement_keywords(),
            link_intent: default_link_intent_keywords(),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            target_url: default_target_url(),
            site_origin: default_site_origin(),
            region_selector: default_region_selector(),
            state_file: default_state_file(),
            user_agent: default_user_agent(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_timeout_secs: default_smtp_timeout_secs(),
            short_name: default_short_name(),
            page_title: default_page_title(),
            sms_max_chars: default_sms_max_chars(),
            keywords: KeywordConfig::default(),
        }
    }
}

impl MonitorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn smtp_timeout(&self) -> Duration {
        Duration::from_secs(self.smtp_timeout_secs)
    }
}

/// Notification secrets as read from the environment, not yet validated
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    pub sender: Option<String>,
    pub password: Option<String>,
    pub recipient: Option<String>,
    pub sms_recipient: Option<String>,
}

/// Validated mail settings; the only way to obtain one is `Secrets::validate`
#[derive(Debug, Clone, PartialEq)]
pub struct MailSettings {
    pub sender: String,
    pub password: String,
    pub recipient: String,
    pub sms_recipient: Option<String>,
}

impl Secrets {
    /// Read secrets from the process environment (and a `.env` file if present)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            sender: env::var(ENV_SENDER).ok(),
            password: env::var(ENV_PASSWORD).ok(),
            recipient: env::var(ENV_RECIPIENT).ok(),
            sms_recipient: env::var(ENV_SMS_RECIPIENT).ok(),
        }
    }

    /// Check that sender, password and recipient are present. Empty values count as missing.
    pub fn validate(&self) -> Result<MailSettings, ConfigError> {
        Ok(MailSettings {
            sender: required(&self.sender, ENV_SENDER)?,
            password: required(&self.password, ENV_PASSWORD)?,
            recipient: required(&self.recipient, ENV_RECIPIENT)?,
            sms_recipient: present(&self.sms_recipient),
        })
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required(value: &Option<String>, name: &'static str) -> Result<String, ConfigError> {
    present(value).ok_or(ConfigError::MissingSetting(name))
}

fn default_target_url() -> String {
    "https://www.santaclaraadulted.org/esl/#SignupforEnglishClasses".to_string()
}

fn default_site_origin() -> String {
    "https://www.santaclaraadulted.org".to_string()
}

fn default_region_selector() -> String {
    "section#SignupforEnglishClasses".to_string()
}

fn default_state_file() -> PathBuf {
    PathBuf::from("page_state.json")
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_smtp_timeout_secs() -> u64 {
    30
}

fn default_short_name() -> String {
    "ESL".to_string()
}

fn default_page_title() -> String {
    "Santa Clara Adult Education ESL Registration".to_string()
}

fn default_sms_max_chars() -> usize {
    160
}

fn default_announcement_keywords() -> Vec<String> {
    [
        "registration opens",
        "the next registration will be",
        "registration will be on",
        "register online",
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_link_intent_keywords() -> Vec<String> {
    ["register", "registration", "sign up", "signup", "enroll"]
        .into_iter()
        .map(String::from)
        .collect()
}
