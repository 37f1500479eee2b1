use crate::config::{MonitorConfig, Secrets};
use crate::detect::{self, SignalKind};
use crate::error::RunError;
use crate::extract::Extractor;
use crate::fetch::PageSource;
use crate::notify::{Composer, Notifier, Transport};
use crate::snapshot::Snapshot;
use crate::store::SnapshotStore;
use chrono::{Local, NaiveDateTime};
use std::fmt;


/// Successful outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    /// No stored snapshot existed; the baseline was saved and the started notice sent
    FirstRun { links: usize },
    /// Nothing new; stored snapshot left untouched
    NoChanges,
    /// An alert was sent for these signal kinds and the snapshot replaced
    Notified { signals: Vec<SignalKind> },
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunReport::FirstRun { links } => write!(f, "first run, {links} links recorded"),
            RunReport::NoChanges => f.write_str("no changes"),
            RunReport::Notified { signals } => {
                let labels: Vec<&str> = signals.iter().map(SignalKind::label).collect();
                write!(f, "notified: {}", labels.join(" & "))
            }
        }
    }
}

/// Runs one check of the monitored page: fetch, extract, load, detect, notify, persist.
///
/// Every failure ends the run at the step where it happens and is returned as a `RunError`;
/// nothing is retried within a run.
pub struct Monitor<'a, P: PageSource + ?Sized, T: Transport + ?Sized> {
    config: &'a MonitorConfig,
    secrets: &'a Secrets,
    source: &'a P,
    transport: &'a T,
    clock: fn() -> NaiveDateTime,
}

impl<'a, P: PageSource + ?Sized, T: Transport + ?Sized> Monitor<'a, P, T> {
    pub fn new(
        config: &'a MonitorConfig,
        secrets: &'a Secrets,
        source: &'a P,
        transport: &'a T,
    ) -> Self {
        Self {
            config,
            secrets,
            source,
            transport,
            clock: local_now,
        }
    }

    /// Override the clock used for the "Detected at" footer
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Execute a single run, logging its start, outcome and any error
    pub async fn run(&self) -> Result<RunReport, RunError> {
        ::log::info!("{}", "=".repeat(50));
        ::log::info!("Starting page check for {}", self.config.target_url);

        let result = self.check().await;
        match &result {
            Ok(report) => ::log::info!("Check completed: {}", report),
            Err(e) => ::log::error!("Check aborted: {}", e),
        }
        result
    }

    async fn check(&self) -> Result<RunReport, RunError> {
        // Configuration is checked before any network activity.
        let mail = self.secrets.validate().inspect_err(|_| {
            ::log::error!("Email configuration missing, check the mail secrets")
        })?;
        let extractor = Extractor::new(self.config)?;

        let markup = self
            .source
            .fetch()
            .await
            .inspect_err(|e| ::log::error!("Error fetching page, will retry next run: {}", e))?;

        let current = extractor.extract(&markup);
        ::log::info!(
            "Found {} registration fragments and {} registration links",
            current.registration_text.len(),
            current.links.len()
        );

        let store = SnapshotStore::new(&self.config.state_file);
        let composer = Composer::from_config(self.config);
        let notifier = Notifier::new(self.transport, &mail, self.config.sms_max_chars);

        ::log::debug!("Loading previous state from {:?}", store.path());
        let Some(previous) = store.load() else {
            return self.first_run(&store, &composer, &notifier, &current).await;
        };

        let signals = detect::detect(&current, &previous);
        if signals.is_empty() {
            ::log::info!("No changes detected");
            return Ok(RunReport::NoChanges);
        }
        for signal in &signals {
            ::log::info!("{} detected: {} new items", signal.kind(), signal.item_count());
        }

        let message = composer.alert(&signals, (self.clock)());
        notifier.send(&message).await.inspect_err(|e| {
            ::log::error!(
                "Error sending alert, state not updated so the change is retried next run: {}",
                e
            )
        })?;

        store.save(&current).inspect_err(|e| {
            ::log::error!(
                "Error saving state after alert, next run will alert again: {}",
                e
            )
        })?;
        ::log::info!("State updated with new information");

        Ok(RunReport::Notified {
            signals: signals.iter().map(|s| s.kind()).collect(),
        })
    }

    async fn first_run(
        &self,
        store: &SnapshotStore,
        composer: &Composer,
        notifier: &Notifier<'_, T>,
        current: &Snapshot,
    ) -> Result<RunReport, RunError> {
        ::log::info!("First run - initializing");

        // Without a saved baseline every run would be a first run, so skip the notice.
        store.save(current).inspect_err(|e| {
            ::log::error!("Error saving initial state, not sending started notice: {}", e)
        })?;

        notifier
            .send(&composer.started(current.links.len()))
            .await
            .inspect_err(|e| ::log::error!("Error sending started notice: {}", e))?;

        Ok(RunReport::FirstRun {
            links: current.links.len(),
        })
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
