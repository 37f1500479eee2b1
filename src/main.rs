use clap::Parser;
use regwatch::{HttpFetcher, Monitor, MonitorConfig, RunError, Secrets, SmtpTransport};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging, defaulting to info so scheduled runs show every step
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match MonitorConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load configuration: {}", e);
                return ExitCode::from(args.failure_status(RunError::from(e).exit_code()));
            }
        },
        None => MonitorConfig::default(),
    };
    let config = args.apply(config);
    let secrets = Secrets::from_env();

    let fetcher = HttpFetcher::from_config(&config);
    let transport = SmtpTransport::from_config(&config);

    match Monitor::new(&config, &secrets, &fetcher, &transport).run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(args.failure_status(e.exit_code())),
    }
}
