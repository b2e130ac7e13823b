use crate::assessment::AssessmentError;
use crate::config::ConfigError;
use crate::recommend::BackendError;
use crate::scoring::ProfileError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Evidence(serde_json::Error),
    Output(serde_json::Error),
    Profile(ProfileError),
    Assessment(AssessmentError),
    Backend(BackendError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Evidence(err) => write!(f, "invalid evidence bundle: {}", err),
            AppError::Output(err) => write!(f, "unable to render result: {}", err),
            AppError::Profile(err) => write!(f, "profile error: {}", err),
            AppError::Assessment(err) => write!(f, "assessment error: {}", err),
            AppError::Backend(err) => write!(f, "recommendation backend error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Evidence(err) | AppError::Output(err) => Some(err),
            AppError::Profile(err) => Some(err),
            AppError::Assessment(err) => Some(err),
            AppError::Backend(err) => Some(err),
        }
    }
}

/// Process exit status for input the caller can fix.
pub const EXIT_USER_ERROR: i32 = 2;
/// Process exit status for configuration, environment and internal failures.
pub const EXIT_FAILURE: i32 = 1;

impl AppError {
    /// Whether the caller supplied bad input, as opposed to an environment
    /// or configuration failure.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Evidence(_) | AppError::Assessment(_))
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_user_error() {
            EXIT_USER_ERROR
        } else {
            EXIT_FAILURE
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ProfileError> for AppError {
    fn from(value: ProfileError) -> Self {
        Self::Profile(value)
    }
}

impl From<AssessmentError> for AppError {
    fn from(value: AssessmentError) -> Self {
        Self::Assessment(value)
    }
}

impl From<BackendError> for AppError {
    fn from(value: BackendError) -> Self {
        Self::Backend(value)
    }
}
