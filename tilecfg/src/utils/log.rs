use tracing::metadata::LevelFilter;
use tracing_subscriber::{
    filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const FALLBACK_LEVEL: &str = "info";

/// Build the filter from `RUST_LOG` if set, from `level` otherwise. A malformed `level` is
/// replaced by `info` and the parse error handed back.
pub fn parse_log_level(level: &str) -> (EnvFilter, Option<ParseError>) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, None);
    }
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    match builder.parse(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_LEVEL), Some(err)),
    }
}

/// Install the global subscriber. Events go to stderr so a serialized config on stdout stays
/// clean.
pub fn setup_logging(level: &str) {
    let (filter, parse_err) = parse_log_level(level);
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if let Err(err) = tracing_subscriber::registry().with(filter).with(fmt).try_init() {
        eprintln!("Could not install the log subscriber: {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Error parsing log_level config `{level}`, using `{FALLBACK_LEVEL}`: {err}");
    }
}
