use crate::config::{LogFormat, TelemetryConfig};
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Targets that receive the configured level; everything else logs at `warn`.
const WORKSPACE_TARGETS: &[&str] = &["readiness_scout", "readiness_scout_cli"];
const DEPENDENCY_LEVEL: &str = "warn";

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directives: String, source: ParseError },
    Install(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directives, .. } => {
                write!(f, "invalid log filter `{directives}`")
            }
            TelemetryError::Install(err) => {
                write!(f, "unable to install tracing subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Install(err) => Some(&**err),
        }
    }
}

/// Expand a bare level such as `debug` into per-target directives, with
/// dependencies held at `warn`. Values that already carry directives pass
/// through untouched.
pub fn filter_directives(log_level: &str) -> String {
    let level = log_level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .chain(std::iter::once(DEPENDENCY_LEVEL.to_string()))
        .collect::<Vec<_>>()
        .join(",")
}

fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = filter_directives(&config.log_level);
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter { directives, source })
}

/// Install the global subscriber. `RUST_LOG` overrides the configured
/// level. Logs go to stderr so assessment JSON on stdout stays
/// machine-readable.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder
            .compact()
            .with_target(false)
            .with_ansi(false)
            .try_init(),
    }
    .map_err(TelemetryError::Install)
}
