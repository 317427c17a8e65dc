//! Logging utilities for CLI output

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Default `env_logger` filter for this level.
    pub fn filter(self) -> &'static str {
        match self {
            LogLevel::Quiet => "error",
            LogLevel::Normal => "warn",
            LogLevel::Verbose => "debug",
        }
    }
}

/// Install the global logger. `RUST_LOG` overrides the level's filter.
pub fn init_logging(level: LogLevel) {
    let env = env_logger::Env::default().default_filter_or(level.filter());
    // a second init (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}

/// Print a status message to stderr if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        eprintln!("{msg}");
    }
}
