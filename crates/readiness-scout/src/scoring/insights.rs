use serde::Serialize;

use super::aggregate::Scorecard;
use super::component::{ComponentKind, ComponentScore};
use super::evaluators::{is_cloud_provider, is_compliance_vendor, is_governance_indicator};
use super::profile::Vertical;

pub const STRENGTH_THRESHOLD: f64 = 70.0;
pub const WEAKNESS_THRESHOLD: f64 = 40.0;

pub const DEFAULT_STRENGTH: &str = "Building AI foundation";
pub const DEFAULT_WEAKNESS: &str = "Continue AI journey";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Label components scoring at least [`STRENGTH_THRESHOLD`] as strengths and
/// those below [`WEAKNESS_THRESHOLD`] as weaknesses, keeping component order.
/// Both lists always carry at least one entry.
pub fn extract_insights(components: &[ComponentScore]) -> Insights {
    let mut strengths: Vec<String> = components
        .iter()
        .filter(|score| score.value >= STRENGTH_THRESHOLD)
        .map(|score| score.component.strength_label().to_string())
        .collect();
    let mut weaknesses: Vec<String> = components
        .iter()
        .filter(|score| score.value < WEAKNESS_THRESHOLD)
        .map(|score| score.component.weakness_label().to_string())
        .collect();

    if strengths.is_empty() {
        strengths.push(DEFAULT_STRENGTH.to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push(DEFAULT_WEAKNESS.to_string());
    }

    Insights {
        strengths,
        weaknesses,
    }
}

/// Capability thresholds for the financial-services insight list.
const FINANCIAL_STRENGTHS: &[(ComponentKind, f64, &str)] = &[
    (
        ComponentKind::RegulatoryCompliance,
        70.0,
        "Well-positioned for AI governance requirements",
    ),
    (
        ComponentKind::DataGovernance,
        70.0,
        "Data foundation ready for AI/ML modeling",
    ),
    (
        ComponentKind::QuantRiskCapabilities,
        60.0,
        "Existing quant capabilities can accelerate AI adoption",
    ),
    (
        ComponentKind::AmlKycCapabilities,
        60.0,
        "Ready for AI-enhanced financial crime detection",
    ),
];

const FINANCIAL_GAPS: &[(ComponentKind, f64, &str)] = &[
    (
        ComponentKind::TechModernization,
        50.0,
        "Core system modernization needed for real-time AI",
    ),
    (
        ComponentKind::AiMlMaturity,
        40.0,
        "Need to build AI talent and governance structure",
    ),
    (
        ComponentKind::DataGovernance,
        50.0,
        "Data quality issues may impede AI model performance",
    ),
];

pub const MAX_VERTICAL_INSIGHTS: usize = 5;
const MAX_LISTED_SYSTEMS: usize = 3;

/// Insights specific to the profile's vertical. Empty for `general`.
pub fn vertical_insights(vertical: Vertical, scorecard: &Scorecard) -> Vec<String> {
    match vertical {
        Vertical::General => Vec::new(),
        Vertical::FinancialServices => financial_insights(scorecard),
    }
}

/// Score-driven observations followed by signal-driven ones, capped at
/// [`MAX_VERTICAL_INSIGHTS`]. Strict comparisons: a score sitting exactly
/// on a threshold triggers neither list.
pub fn financial_insights(scorecard: &Scorecard) -> Vec<String> {
    let mut insights: Vec<String> = Vec::new();
    for (component, threshold, insight) in FINANCIAL_STRENGTHS {
        if scorecard.value(*component).is_some_and(|value| value > *threshold) {
            insights.push(insight.to_string());
        }
    }
    for (component, threshold, insight) in FINANCIAL_GAPS {
        if scorecard.value(*component).is_some_and(|value| value < *threshold) {
            insights.push(insight.to_string());
        }
    }

    if scorecard
        .matched(ComponentKind::RegulatoryCompliance)
        .iter()
        .any(|phrase| is_governance_indicator(phrase))
    {
        insights.push("Model risk management framework detected".to_string());
    }

    let cloud = [ComponentKind::TechModernization, ComponentKind::DataGovernance]
        .into_iter()
        .flat_map(|component| scorecard.matched(component).iter())
        .any(|phrase| is_cloud_provider(phrase));
    if cloud {
        insights.push("Cloud infrastructure enables scalable AI deployment".to_string());
    }

    let systems: Vec<String> = scorecard
        .matched(ComponentKind::AmlKycCapabilities)
        .iter()
        .filter(|phrase| is_compliance_vendor(phrase))
        .take(MAX_LISTED_SYSTEMS)
        .map(|vendor| display_name(vendor))
        .collect();
    if !systems.is_empty() {
        insights.push(format!("Existing systems: {}", systems.join(", ")));
    }

    insights.truncate(MAX_VERTICAL_INSIGHTS);
    insights
}

/// `nasdaq verafin` -> `Nasdaq Verafin`.
fn display_name(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
