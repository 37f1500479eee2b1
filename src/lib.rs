// Re-export modules
pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod keywords;
pub mod monitor;
pub mod notify;
pub mod parsers;
pub mod snapshot;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{MailSettings, MonitorConfig, Secrets};
pub use detect::{ChangeSignal, SignalKind, detect};
pub use error::RunError;
pub use extract::Extractor;
pub use fetch::{HttpFetcher, PageSource};
pub use monitor::{Monitor, RunReport};
pub use notify::{Message, Notifier, SmtpTransport, Transport};
pub use snapshot::{Link, Snapshot};
pub use store::SnapshotStore;
