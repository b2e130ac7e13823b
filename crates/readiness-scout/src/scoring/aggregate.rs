use serde::Serialize;
use tracing::debug;

use super::component::{ComponentKind, ComponentScore};
use super::evidence::EvidenceBundle;
use super::profile::ScoringProfile;

/// Confidence reported when no component is backed by real evidence.
pub const CONFIDENCE_FLOOR: f64 = 0.30;

/// Vocabulary one data-backed component matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSignals {
    pub component: ComponentKind,
    pub matched: Vec<&'static str>,
}

/// Weighted outcome of running a profile's evaluators over one bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub overall_score: f64,
    pub confidence: f64,
    /// In the profile's weight declaration order.
    pub components: Vec<ComponentScore>,
    /// Components with at least one matched signal, in the same order.
    pub signals: Vec<ComponentSignals>,
}

impl Scorecard {
    pub fn value(&self, component: ComponentKind) -> Option<f64> {
        self.components
            .iter()
            .find(|score| score.component == component)
            .map(|score| score.value)
    }

    /// Components scored from their fallback baseline.
    pub fn fallback_components(&self) -> Vec<ComponentKind> {
        self.components
            .iter()
            .filter(|score| !score.data_present)
            .map(|score| score.component)
            .collect()
    }

    pub fn matched(&self, component: ComponentKind) -> &[&'static str] {
        self.signals
            .iter()
            .find(|signals| signals.component == component)
            .map(|signals| signals.matched.as_slice())
            .unwrap_or(&[])
    }
}

/// Score `evidence` with `profile`.
///
/// The overall score is the weighted sum rounded to one decimal. Confidence
/// is the mean confidence factor of the data-backed components, pulled
/// towards [`CONFIDENCE_FLOOR`] by the share of weight that fell back to
/// baselines.
pub fn aggregate(profile: &ScoringProfile, evidence: &EvidenceBundle) -> Scorecard {
    let benchmarks = profile.benchmarks();
    let mut components = Vec::with_capacity(profile.weights().len());
    let mut weighted_sum = 0.0;
    let mut covered_weight = 0.0;
    let mut present_factors = Vec::new();
    let mut signals = Vec::new();

    for (component, weight) in profile.weights() {
        let Some(evaluator) = profile.evaluator(*component) else {
            continue;
        };
        let evaluation = evaluator.evaluate(evidence, benchmarks);
        let score = evaluation.score;
        debug!(
            profile = profile.name(),
            component = component.key(),
            value = score.value,
            data_present = score.data_present,
            matched = evaluation.matched.len(),
            "component scored"
        );

        weighted_sum += weight * score.value;
        if score.data_present {
            covered_weight += weight;
            present_factors.push(evaluator.confidence_factor());
        }
        components.push(score);
        if !evaluation.matched.is_empty() {
            signals.push(ComponentSignals {
                component: *component,
                matched: evaluation.matched,
            });
        }
    }

    Scorecard {
        overall_score: round_to(weighted_sum, 1).clamp(0.0, 100.0),
        confidence: confidence(&present_factors, covered_weight),
        components,
        signals,
    }
}

fn confidence(present_factors: &[f64], covered_weight: f64) -> f64 {
    if present_factors.is_empty() {
        return CONFIDENCE_FLOOR;
    }
    let mean = present_factors.iter().sum::<f64>() / present_factors.len() as f64;
    let coverage = covered_weight.clamp(0.0, 1.0);
    round_to(CONFIDENCE_FLOOR + (mean - CONFIDENCE_FLOOR) * coverage, 2).clamp(0.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
