//! Log level selection and subscriber construction.
//!
//! The subscriber is built once by the binary and installed only for the
//! duration of a run, so library code never touches global logging state.

use tracing::level_filters::LevelFilter;
use tracing::Subscriber;

/// Environment variable that selects the log level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Map a level name to a filter. Unknown or missing names give `INFO`.
pub fn parse_level(name: Option<&str>) -> LevelFilter {
    let Some(name) = name else {
        return LevelFilter::INFO;
    };
    match name.trim().to_ascii_uppercase().as_str() {
        "TRACE" => LevelFilter::TRACE,
        "DEBUG" => LevelFilter::DEBUG,
        "INFO" => LevelFilter::INFO,
        "WARN" | "WARNING" => LevelFilter::WARN,
        "ERROR" | "CRITICAL" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}

/// Level requested through `LOG_LEVEL`.
pub fn level_from_env() -> LevelFilter {
    parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
}

/// Build a stderr subscriber at `level`.
pub fn subscriber(level: LevelFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_standard_names() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::DEBUG);
        assert_eq!(parse_level(Some("INFO")), LevelFilter::INFO);
        assert_eq!(parse_level(Some("Warning")), LevelFilter::WARN);
        assert_eq!(parse_level(Some("warn")), LevelFilter::WARN);
        assert_eq!(parse_level(Some("ERROR")), LevelFilter::ERROR);
        assert_eq!(parse_level(Some("critical")), LevelFilter::ERROR);
        assert_eq!(parse_level(Some("trace")), LevelFilter::TRACE);
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(parse_level(None), LevelFilter::INFO);
        assert_eq!(parse_level(Some("verbose")), LevelFilter::INFO);
        assert_eq!(parse_level(Some("")), LevelFilter::INFO);
    }

    #[test]
    fn scoped_subscriber_receives_events() {
        let sub = subscriber(LevelFilter::DEBUG);

        tracing::subscriber::with_default(sub, || {
            tracing::debug!("inside scoped subscriber");
        });
    }
}
