//! Logging setup for the splashgen binary
//!
//! Console `✓`/`✗` lines are the user-facing output; the log is diagnostics
//! only and goes to stderr via env_logger.

use chrono::Local;
use std::env;

/// Environment variable overriding the log level
pub const LOG_LEVEL_ENV: &str = "SPLASHGEN_LOG_LEVEL";

/// Initialize logging with the given level string
pub fn init_with_level(level_str: &str) {
    let level_filter = match level_str {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Warn,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level_filter)
        .format(|buf, record| {
            use std::io::Write;

            write!(
                buf,
                "[{} {} {}] ",
                Local::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.target()
            )?;
            writeln!(buf, "{}", record.args())
        })
        .try_init();
}

/// Initialize logging from `SPLASHGEN_LOG_LEVEL`, defaulting to warn
pub fn init() {
    let level = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "warn".to_string());
    init_with_level(&level);
}
