use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::benchmark::BenchmarkTable;
use super::component::ComponentKind;
use super::evaluators::Evaluator;

/// Tolerance for the weight-sum check.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Market vertical a profile is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vertical {
    General,
    FinancialServices,
}

impl Vertical {
    pub fn label(&self) -> &'static str {
        match self {
            Vertical::General => "General",
            Vertical::FinancialServices => "Financial Services",
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected profile configuration. Raised at startup; never at scoring time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("profile name must not be empty")]
    EmptyName,
    #[error("profile `{profile}` declares no weights")]
    EmptyWeights { profile: String },
    #[error("profile `{profile}` weight for {component} must be finite and non-negative, found {weight}")]
    InvalidWeight {
        profile: String,
        component: ComponentKind,
        weight: f64,
    },
    #[error("profile `{profile}` weights sum to {sum:.6}, expected 1.0")]
    WeightSum { profile: String, sum: f64 },
    #[error("profile `{profile}` weights {component} but registers no evaluator for it")]
    MissingEvaluator {
        profile: String,
        component: ComponentKind,
    },
    #[error("profile `{0}` is registered more than once")]
    DuplicateProfile(String),
}

/// Validated weights, evaluators and sector benchmarks for one vertical.
///
/// Profiles only carry data. Every profile is scored by the same
/// aggregation in [`super::aggregate`].
#[derive(Debug, Clone)]
pub struct ScoringProfile {
    name: String,
    vertical: Vertical,
    weights: Vec<(ComponentKind, f64)>,
    evaluators: BTreeMap<ComponentKind, Evaluator>,
    benchmarks: BenchmarkTable,
}

impl ScoringProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertical(&self) -> Vertical {
        self.vertical
    }

    /// Weighted components in declaration order.
    pub fn weights(&self) -> &[(ComponentKind, f64)] {
        &self.weights
    }

    pub fn weight(&self, component: ComponentKind) -> Option<f64> {
        self.weights
            .iter()
            .find(|(kind, _)| *kind == component)
            .map(|(_, weight)| *weight)
    }

    pub fn evaluator(&self, component: ComponentKind) -> Option<&Evaluator> {
        self.evaluators.get(&component)
    }

    pub fn benchmarks(&self) -> &BenchmarkTable {
        &self.benchmarks
    }

    /// Weighted sum of the fallback baselines: the score of an empty bundle
    /// before rounding.
    pub fn fallback_score(&self) -> f64 {
        self.weights
            .iter()
            .filter_map(|(component, weight)| {
                self.evaluators
                    .get(component)
                    .map(|evaluator| weight * evaluator.fallback(&self.benchmarks))
            })
            .sum()
    }
}

/// Assembles a [`ScoringProfile`], either from scratch or by specializing
/// an existing profile.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    name: String,
    vertical: Vertical,
    weights: Vec<(ComponentKind, f64)>,
    evaluators: BTreeMap<ComponentKind, Evaluator>,
    benchmarks: BenchmarkTable,
}

impl ProfileBuilder {
    pub fn new(name: impl Into<String>, vertical: Vertical) -> Self {
        Self {
            name: name.into(),
            vertical,
            weights: Vec::new(),
            evaluators: BTreeMap::new(),
            benchmarks: BenchmarkTable::new(50.0),
        }
    }

    /// Start from a copy of `base`'s weights, evaluators and benchmarks.
    pub fn specialize(base: &ScoringProfile, name: impl Into<String>, vertical: Vertical) -> Self {
        Self {
            name: name.into(),
            vertical,
            weights: base.weights.clone(),
            evaluators: base.evaluators.clone(),
            benchmarks: base.benchmarks.clone(),
        }
    }

    /// Replace the whole weight table. The component set may differ from
    /// the base profile's.
    pub fn weights(mut self, weights: &[(ComponentKind, f64)]) -> Self {
        self.weights.clear();
        for (component, weight) in weights {
            self = self.weight(*component, *weight);
        }
        self
    }

    /// Set or overwrite a single weight.
    pub fn weight(mut self, component: ComponentKind, weight: f64) -> Self {
        match self.weights.iter_mut().find(|(kind, _)| *kind == component) {
            Some(entry) => entry.1 = weight,
            None => self.weights.push((component, weight)),
        }
        self
    }

    pub fn evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluators.insert(evaluator.component(), evaluator);
        self
    }

    pub fn benchmarks(mut self, benchmarks: BenchmarkTable) -> Self {
        self.benchmarks = benchmarks;
        self
    }

    pub fn build(self) -> Result<ScoringProfile, ProfileError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if self.weights.is_empty() {
            return Err(ProfileError::EmptyWeights { profile: name });
        }

        for (component, weight) in &self.weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ProfileError::InvalidWeight {
                    profile: name,
                    component: *component,
                    weight: *weight,
                });
            }
        }

        let sum: f64 = self.weights.iter().map(|(_, weight)| weight).sum();
        if (sum - 1.0).abs() > WEIGHT_EPSILON {
            return Err(ProfileError::WeightSum { profile: name, sum });
        }

        if let Some((component, _)) = self
            .weights
            .iter()
            .find(|(component, _)| !self.evaluators.contains_key(component))
        {
            return Err(ProfileError::MissingEvaluator {
                profile: name,
                component: *component,
            });
        }

        Ok(ScoringProfile {
            name,
            vertical: self.vertical,
            weights: self.weights,
            evaluators: self.evaluators,
            benchmarks: self.benchmarks,
        })
    }
}
