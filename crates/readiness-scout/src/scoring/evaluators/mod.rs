//! Signal evaluators: one stateless function per component.
//!
//! An evaluator returns `None` when none of the evidence it reads was
//! collected, or when the collected evidence carries none of its signals.
//! [`Evaluator::score`] then substitutes the documented fallback baseline and
//! marks the score as not data-backed.

mod financial;
mod general;

pub(crate) use financial::{is_cloud_provider, is_compliance_vendor, is_governance_indicator};

use super::benchmark::BenchmarkTable;
use super::component::{ComponentKind, ComponentScore};
use super::evidence::EvidenceBundle;

pub type EvaluateFn = fn(&EvidenceBundle, &BenchmarkTable) -> Option<Measurement>;

/// Normalized value observed by an evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub value: f64,
    /// Vocabulary entries that contributed, first occurrence only.
    pub matched: Vec<&'static str>,
}

impl Measurement {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            matched: Vec::new(),
        }
    }

    pub fn with_matched(value: f64, matched: Vec<&'static str>) -> Self {
        Self { value, matched }
    }
}

/// A scored component together with the signals behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub score: ComponentScore,
    /// Empty when the score fell back to the baseline.
    pub matched: Vec<&'static str>,
}

/// A component's scoring function plus the constants the aggregator needs.
#[derive(Clone, Copy)]
pub struct Evaluator {
    component: ComponentKind,
    fallback: f64,
    confidence_factor: f64,
    measure: EvaluateFn,
}

impl Evaluator {
    pub const fn new(
        component: ComponentKind,
        fallback: f64,
        confidence_factor: f64,
        measure: EvaluateFn,
    ) -> Self {
        Self {
            component,
            fallback,
            confidence_factor,
            measure,
        }
    }

    pub fn component(&self) -> ComponentKind {
        self.component
    }

    pub fn confidence_factor(&self) -> f64 {
        self.confidence_factor
    }

    /// Baseline used when the evidence is absent. Benchmark evaluators use
    /// the profile table's default instead of the fixed value.
    pub fn fallback(&self, benchmarks: &BenchmarkTable) -> f64 {
        if self.component == ComponentKind::IndustryAdoption {
            benchmarks.default_baseline()
        } else {
            self.fallback
        }
    }

    pub fn evaluate(&self, evidence: &EvidenceBundle, benchmarks: &BenchmarkTable) -> Evaluation {
        match (self.measure)(evidence, benchmarks) {
            Some(measurement) => Evaluation {
                score: ComponentScore::observed(self.component, measurement.value),
                matched: measurement.matched,
            },
            None => Evaluation {
                score: ComponentScore::fallback(self.component, self.fallback(benchmarks)),
                matched: Vec::new(),
            },
        }
    }

    pub fn score(&self, evidence: &EvidenceBundle, benchmarks: &BenchmarkTable) -> ComponentScore {
        self.evaluate(evidence, benchmarks).score
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("component", &self.component)
            .field("fallback", &self.fallback)
            .field("confidence_factor", &self.confidence_factor)
            .finish_non_exhaustive()
    }
}

/// Built-in evaluator for every component kind.
pub fn builtin(component: ComponentKind) -> Evaluator {
    match component {
        ComponentKind::TechHiring => Evaluator::new(component, 30.0, 0.90, general::tech_hiring),
        ComponentKind::AiMentions => Evaluator::new(component, 20.0, 0.80, general::ai_mentions),
        ComponentKind::CompanyScale => {
            Evaluator::new(component, 50.0, 0.75, general::company_scale)
        }
        ComponentKind::IndustryAdoption => {
            Evaluator::new(component, 50.0, 0.85, general::industry_adoption)
        }
        ComponentKind::TechModernization => {
            Evaluator::new(component, 40.0, 0.80, general::tech_modernization)
        }
        ComponentKind::RegulatoryCompliance => {
            Evaluator::new(component, 35.0, 0.90, financial::regulatory_compliance)
        }
        ComponentKind::DataGovernance => {
            Evaluator::new(component, 30.0, 0.85, financial::data_governance)
        }
        ComponentKind::QuantRiskCapabilities => {
            Evaluator::new(component, 25.0, 0.80, financial::quant_risk)
        }
        ComponentKind::AmlKycCapabilities => {
            Evaluator::new(component, 30.0, 0.75, financial::aml_kyc)
        }
        ComponentKind::AiMlMaturity => {
            Evaluator::new(component, 20.0, 0.85, financial::ai_ml_maturity)
        }
    }
}
