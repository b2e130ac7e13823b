use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use readiness_scout::config::AppConfig;
use readiness_scout::error::AppError;
use readiness_scout::recommend::{OpenAiCompatibleBackend, RecommendationSelector};
use readiness_scout::scoring::{EvidenceBundle, ProfileRegistry};
use readiness_scout::AssessmentEngine;
use tracing::{debug, info};

pub(crate) fn build_registry() -> Result<Arc<ProfileRegistry>, AppError> {
    Ok(Arc::new(ProfileRegistry::builtin()?))
}

/// Selector for the configured backend. A configured backend that cannot
/// be built fails the command; `offline` skips it entirely.
pub(crate) fn build_selector(
    config: &AppConfig,
    offline: bool,
) -> Result<RecommendationSelector, AppError> {
    let Some(generative) = config.generative.clone().filter(|_| !offline) else {
        debug!(offline, "template recommendations only");
        return Ok(RecommendationSelector::template_only());
    };

    let timeout = generative.timeout;
    let model = generative.model.clone();
    let backend = OpenAiCompatibleBackend::new(generative)?;
    info!(%model, ?timeout, "generative recommendations enabled");
    Ok(RecommendationSelector::with_backend(Arc::new(backend), timeout))
}

pub(crate) fn build_engine(
    config: &AppConfig,
    offline: bool,
) -> Result<AssessmentEngine, AppError> {
    let engine = AssessmentEngine::new(build_registry()?, build_selector(config, offline)?);
    Ok(engine.with_default_profile(config.scoring.default_profile.clone()))
}

/// Read a bundle from `path`, or stdin when `path` is `-`.
pub(crate) fn read_evidence(path: &Path) -> Result<EvidenceBundle, AppError> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    serde_json::from_str(&raw).map_err(AppError::Evidence)
}
