use std::io;
use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

pub fn parse_level(level: &str) -> Level {
    Level::from_str(level).unwrap_or(Level::INFO)
}

// logs go to stderr so that command output on stdout can be piped
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(&config.log_level))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(io::stderr);

    // try_init so that a second call (e.g. from tests) is not fatal
    let _ = if config.json_logs {
        builder.with_ansi(false).without_time().json().try_init()
    } else {
        builder.try_init()
    };
}
