use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::info;

use crate::recommend::{
    RecommendationRequest, RecommendationSelector, RecommendationSource, Recommendations,
};
use crate::scoring::{
    aggregate, extract_insights, vertical_insights, BenchmarkMatch, ComponentKind,
    ComponentScore, ComponentSignals, EvidenceBundle, ProfileRegistry, ReadinessTier,
    ScoringProfile,
};

/// Profile name that asks the engine to pick a profile from the evidence.
pub const AUTO_PROFILE: &str = "auto";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("unknown scoring profile `{requested}` (registered: {available})")]
    UnknownProfile { requested: String, available: String },
    #[error("no scoring profiles are registered")]
    NoProfiles,
}

/// One organization to assess.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub evidence: EvidenceBundle,
    /// Registered profile name or `auto`. Falls back to the engine default.
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

impl AssessmentRequest {
    pub fn new(evidence: EvidenceBundle) -> Self {
        Self {
            evidence,
            ..Self::default()
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }
}

/// Industry benchmark row used for the adoption component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkDiagnostic {
    /// `explicit`, `label` or `default`.
    pub matched_by: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub baseline: f64,
}

impl From<BenchmarkMatch<'_>> for BenchmarkDiagnostic {
    fn from(value: BenchmarkMatch<'_>) -> Self {
        match value {
            BenchmarkMatch::Explicit { key, baseline } => Self {
                matched_by: "explicit",
                key: Some(key.to_string()),
                baseline,
            },
            BenchmarkMatch::Label { key, baseline } => Self {
                matched_by: "label",
                key: Some(key.to_string()),
                baseline,
            },
            BenchmarkMatch::Default { baseline } => Self {
                matched_by: "default",
                key: None,
                baseline,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentDiagnostics {
    pub recommendation_source: RecommendationSource,
    pub recommendation_backend: Option<String>,
    pub fallback_reason: Option<String>,
    /// Components scored from their fallback baseline.
    pub fallback_components: Vec<ComponentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_benchmark: Option<BenchmarkDiagnostic>,
    /// Vocabulary each data-backed component matched, keyed by component.
    #[serde(serialize_with = "serialize_signal_map")]
    pub matched_signals: Vec<ComponentSignals>,
}

/// Final, immutable outcome of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub profile: String,
    pub overall_score: f64,
    pub confidence: f64,
    pub tier: ReadinessTier,
    #[serde(rename = "component_scores", serialize_with = "serialize_component_map")]
    pub components: Vec<ComponentScore>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    /// Vertical-specific observations; only the financial profile has any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vertical_insights: Vec<String>,
    pub recommendations: Recommendations,
    pub diagnostics: AssessmentDiagnostics,
}

impl AssessmentResult {
    pub fn component(&self, kind: ComponentKind) -> Option<&ComponentScore> {
        self.components.iter().find(|score| score.component == kind)
    }
}

fn serialize_component_map<S>(
    components: &[ComponentScore],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(components.len()))?;
    for score in components {
        map.serialize_entry(score.component.key(), &score.value)?;
    }
    map.end()
}

fn serialize_signal_map<S>(signals: &[ComponentSignals], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(signals.len()))?;
    for entry in signals {
        map.serialize_entry(entry.component.key(), &entry.matched)?;
    }
    map.end()
}

/// Runs evidence through profile selection, aggregation, tiering, insight
/// extraction and recommendation selection.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    registry: Arc<ProfileRegistry>,
    selector: RecommendationSelector,
    default_profile: String,
}

impl AssessmentEngine {
    pub fn new(registry: Arc<ProfileRegistry>, selector: RecommendationSelector) -> Self {
        Self {
            registry,
            selector,
            default_profile: AUTO_PROFILE.to_string(),
        }
    }

    pub fn with_default_profile(mut self, profile: impl Into<String>) -> Self {
        self.default_profile = profile.into();
        self
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    pub fn selector(&self) -> &RecommendationSelector {
        &self.selector
    }

    pub fn resolve_profile(
        &self,
        requested: Option<&str>,
        evidence: &EvidenceBundle,
    ) -> Result<Arc<ScoringProfile>, AssessmentError> {
        let name = requested
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.default_profile.as_str());

        if name.eq_ignore_ascii_case(AUTO_PROFILE) {
            return self
                .registry
                .select_for(evidence)
                .ok_or(AssessmentError::NoProfiles);
        }

        self.registry
            .get(name)
            .ok_or_else(|| AssessmentError::UnknownProfile {
                requested: name.to_string(),
                available: self.registry.names().join(", "),
            })
    }

    pub async fn assess(
        &self,
        request: AssessmentRequest,
    ) -> Result<AssessmentResult, AssessmentError> {
        let profile = self.resolve_profile(request.profile.as_deref(), &request.evidence)?;
        let scorecard = aggregate(&profile, &request.evidence);
        let tier = ReadinessTier::from_score(scorecard.overall_score);
        let insights = extract_insights(&scorecard.components);
        let vertical = vertical_insights(profile.vertical(), &scorecard);

        let recommendation_request = RecommendationRequest::new(
            request.company.clone(),
            profile.name(),
            profile.vertical(),
            &scorecard,
            &request.evidence,
        );
        let outcome = self.selector.select(&recommendation_request).await;

        let industry_benchmark: Option<BenchmarkDiagnostic> = profile
            .weight(ComponentKind::IndustryAdoption)
            .and_then(|_| request.evidence.organization.as_ref())
            .map(|organization| {
                profile
                    .benchmarks()
                    .resolve(
                        organization.sector_key.as_deref(),
                        organization.sector_label.as_deref(),
                    )
                    .into()
            });

        let diagnostics = AssessmentDiagnostics {
            recommendation_source: outcome.diagnostics.source,
            recommendation_backend: outcome.diagnostics.backend,
            fallback_reason: outcome.diagnostics.fallback_reason,
            fallback_components: scorecard.fallback_components(),
            industry_benchmark,
            matched_signals: scorecard.signals,
        };

        info!(
            profile = profile.name(),
            company = request.company.as_deref().unwrap_or("-"),
            overall_score = scorecard.overall_score,
            confidence = scorecard.confidence,
            tier = tier.key(),
            recommendation_source = diagnostics.recommendation_source.as_str(),
            "assessment complete"
        );

        Ok(AssessmentResult {
            profile: profile.name().to_string(),
            overall_score: scorecard.overall_score,
            confidence: scorecard.confidence,
            tier,
            components: scorecard.components,
            strengths: insights.strengths,
            weaknesses: insights.weaknesses,
            vertical_insights: vertical,
            recommendations: outcome.recommendations,
            diagnostics,
        })
    }
}
