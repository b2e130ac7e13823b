use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use super::backend::{BackendError, RecommendationBackend};
use super::context::RecommendationRequest;
use super::schema::Recommendations;
use super::template::{template_recommendations, TemplateBackend};

pub const DEFAULT_GENERATIVE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Generative,
    Template,
}

impl RecommendationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RecommendationSource::Generative => "generative",
            RecommendationSource::Template => "template",
        }
    }
}

/// How the recommendations were produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationDiagnostics {
    pub source: RecommendationSource,
    /// Generative backend consulted. `None` for the in-process template.
    pub backend: Option<String>,
    pub fallback_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationOutcome {
    pub recommendations: Recommendations,
    pub diagnostics: RecommendationDiagnostics,
}

/// Backend-first recommendation selection with a deterministic template
/// fallback.
///
/// Every backend failure mode (transport, timeout, cancellation, schema
/// violation) resolves to the tier template, so `select` never fails.
#[derive(Clone)]
pub struct RecommendationSelector {
    backend: Arc<dyn RecommendationBackend>,
    timeout: Duration,
}

impl Default for RecommendationSelector {
    fn default() -> Self {
        Self::template_only()
    }
}

impl std::fmt::Debug for RecommendationSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationSelector")
            .field("backend", &self.backend.name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RecommendationSelector {
    /// Serves [`TemplateBackend`] output only.
    pub fn template_only() -> Self {
        Self::with_backend(Arc::new(TemplateBackend), DEFAULT_GENERATIVE_TIMEOUT)
    }

    pub fn with_backend(backend: Arc<dyn RecommendationBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn select(&self, request: &RecommendationRequest) -> RecommendationOutcome {
        self.select_or_cancel(request, std::future::pending::<()>())
            .await
    }

    /// Like [`select`](Self::select), but abandons the generative call as soon
    /// as `cancel` completes.
    pub async fn select_or_cancel<C>(
        &self,
        request: &RecommendationRequest,
        cancel: C,
    ) -> RecommendationOutcome
    where
        C: Future<Output = ()>,
    {
        let backend = &self.backend;
        let source = backend.source();
        let backend_label = match source {
            RecommendationSource::Generative => Some(backend.name().to_string()),
            RecommendationSource::Template => None,
        };

        let attempt = tokio::select! {
            result = tokio::time::timeout(self.timeout, backend.generate(request)) => {
                match result {
                    Ok(generated) => generated,
                    Err(_) => Err(BackendError::Timeout(self.timeout)),
                }
            }
            _ = cancel => Err(BackendError::Cancelled),
        };

        let failure = match attempt {
            Ok(value) => match Recommendations::from_value(value) {
                Ok(recommendations) => {
                    debug!(
                        backend = backend.name(),
                        source = source.as_str(),
                        "recommendations accepted"
                    );
                    return RecommendationOutcome {
                        recommendations,
                        diagnostics: RecommendationDiagnostics {
                            source,
                            backend: backend_label,
                            fallback_reason: None,
                        },
                    };
                }
                Err(violation) => format!("schema violation: {violation}"),
            },
            Err(err) => err.to_string(),
        };

        warn!(
            backend = backend.name(),
            reason = %failure,
            "backend recommendations unavailable; using template"
        );
        RecommendationOutcome {
            recommendations: template_recommendations(request),
            diagnostics: RecommendationDiagnostics {
                source: RecommendationSource::Template,
                backend: backend_label,
                fallback_reason: Some(failure),
            },
        }
    }
}
