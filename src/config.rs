use crate::args;

use tbl::models::CheckingPolicy;
use tbl::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub policy: CheckingPolicy,
}

/// Starts the logger, then reads the command-line flags.
///
/// Logs go to stderr so the session on stdout stays clean. `RUST_LOG` overrides the level.
pub fn configure_app() -> Result<AppConfig> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    log::debug!("Logger configured. Parsing arguments...");

    let policy = args::parse_policy_args()?;

    return Ok(AppConfig { policy });
}
