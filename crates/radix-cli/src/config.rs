//! Runtime configuration: flags plus environment, resolved once at startup.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `RADIX_LOG` | tracing filter directive, used when no `-v` is given |
//! | `RADIX_NO_COLOR` | disable ANSI styling, like `--plain` |

use std::env;
use std::io::{self, IsTerminal};

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RADIX_LOG";
pub const NO_COLOR_ENV: &str = "RADIX_NO_COLOR";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// EnvFilter directive
    pub log_filter: String,
    /// ANSI styling on stdout
    pub color: bool,
}

impl CliConfig {
    /// Resolve from flags and the process environment.
    pub fn resolve(verbose: u8, plain: bool) -> Self {
        Self::from_parts(
            verbose,
            plain,
            env::var(LOG_ENV).ok(),
            env::var_os(NO_COLOR_ENV).is_some(),
            io::stdout().is_terminal(),
        )
    }

    /// Precedence: `-v` flags, then `RADIX_LOG`, then `warn`.
    /// Colour needs a terminal and neither `--plain` nor `RADIX_NO_COLOR`.
    pub fn from_parts(
        verbose: u8,
        plain: bool,
        log_env: Option<String>,
        no_color_env: bool,
        stdout_is_terminal: bool,
    ) -> Self {
        let log_filter = match verbose {
            0 => log_env
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        };

        CliConfig {
            log_filter,
            color: stdout_is_terminal && !plain && !no_color_env,
        }
    }
}

/// Install the global subscriber, writing to stderr.
pub fn init_logging(config: &CliConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(config.color)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
