use clap::Parser;
use regwatch::MonitorConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "regwatch")]
#[command(about = "Watches a registration page and emails when new announcements or links appear")]
#[command(version)]
pub struct Args {
    /// JSON configuration file (defaults are used for anything it omits)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the monitored page URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// Override the path of the stored snapshot
    #[arg(short, long)]
    pub state_file: Option<PathBuf>,

    /// Always exit with status 0, even when the run fails
    #[arg(long)]
    pub exit_zero: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply(&self, mut config: MonitorConfig) -> MonitorConfig {
        if let Some(url) = &self.url {
            config.target_url = url.clone();
        }
        if let Some(state_file) = &self.state_file {
            config.state_file = state_file.clone();
        }
        config
    }

    /// Exit status to report for a failed run
    pub fn failure_status(&self, code: u8) -> u8 {
        if self.exit_zero { 0 } else { code }
    }
}
