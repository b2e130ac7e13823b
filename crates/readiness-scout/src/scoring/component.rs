use std::fmt;

use serde::{Deserialize, Serialize};

/// Every signal category a profile may weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    TechHiring,
    AiMentions,
    CompanyScale,
    IndustryAdoption,
    TechModernization,
    RegulatoryCompliance,
    DataGovernance,
    QuantRiskCapabilities,
    AmlKycCapabilities,
    AiMlMaturity,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 10] = [
        ComponentKind::TechHiring,
        ComponentKind::AiMentions,
        ComponentKind::CompanyScale,
        ComponentKind::IndustryAdoption,
        ComponentKind::TechModernization,
        ComponentKind::RegulatoryCompliance,
        ComponentKind::DataGovernance,
        ComponentKind::QuantRiskCapabilities,
        ComponentKind::AmlKycCapabilities,
        ComponentKind::AiMlMaturity,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ComponentKind::TechHiring => "tech_hiring",
            ComponentKind::AiMentions => "ai_mentions",
            ComponentKind::CompanyScale => "company_scale",
            ComponentKind::IndustryAdoption => "industry_adoption",
            ComponentKind::TechModernization => "tech_modernization",
            ComponentKind::RegulatoryCompliance => "regulatory_compliance",
            ComponentKind::DataGovernance => "data_governance",
            ComponentKind::QuantRiskCapabilities => "quant_risk_capabilities",
            ComponentKind::AmlKycCapabilities => "aml_kyc_capabilities",
            ComponentKind::AiMlMaturity => "ai_ml_maturity",
        }
    }

    /// Human-readable name used in prompts and CLI listings.
    pub const fn title(self) -> &'static str {
        match self {
            ComponentKind::TechHiring => "Tech Hiring",
            ComponentKind::AiMentions => "AI Mentions",
            ComponentKind::CompanyScale => "Company Scale",
            ComponentKind::IndustryAdoption => "Industry Adoption",
            ComponentKind::TechModernization => "Tech Modernization",
            ComponentKind::RegulatoryCompliance => "Regulatory Compliance",
            ComponentKind::DataGovernance => "Data Governance",
            ComponentKind::QuantRiskCapabilities => "Quant & Risk Capabilities",
            ComponentKind::AmlKycCapabilities => "AML/KYC Capabilities",
            ComponentKind::AiMlMaturity => "AI/ML Maturity",
        }
    }

    pub const fn strength_label(self) -> &'static str {
        match self {
            ComponentKind::TechHiring => "Strong technical team",
            ComponentKind::AiMentions => "Clear AI focus",
            ComponentKind::CompanyScale => "Sufficient scale for AI",
            ComponentKind::IndustryAdoption => "AI-forward industry",
            ComponentKind::TechModernization => "Modern tech stack",
            ComponentKind::RegulatoryCompliance => "Strong regulatory compliance framework",
            ComponentKind::DataGovernance => "Mature data governance capabilities",
            ComponentKind::QuantRiskCapabilities => "Strong quantitative and risk modeling team",
            ComponentKind::AmlKycCapabilities => "Established AML/KYC processes",
            ComponentKind::AiMlMaturity => "Established AI/ML team and initiatives",
        }
    }

    pub const fn weakness_label(self) -> &'static str {
        match self {
            ComponentKind::TechHiring => "Limited AI talent",
            ComponentKind::AiMentions => "Low AI visibility",
            ComponentKind::CompanyScale => "Scale considerations",
            ComponentKind::IndustryAdoption => "Industry AI maturity",
            ComponentKind::TechModernization => "Legacy technology",
            ComponentKind::RegulatoryCompliance => "Regulatory readiness gaps",
            ComponentKind::DataGovernance => "Data governance gaps",
            ComponentKind::QuantRiskCapabilities => "Limited quantitative modeling capacity",
            ComponentKind::AmlKycCapabilities => "Manual financial crime controls",
            ComponentKind::AiMlMaturity => "Limited AI/ML expertise",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Normalized output of one evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub component: ComponentKind,
    pub value: f64,
    /// False when `value` is the evaluator's fallback baseline.
    pub data_present: bool,
}

impl ComponentScore {
    pub fn observed(component: ComponentKind, value: f64) -> Self {
        Self {
            component,
            value: sanitize(value),
            data_present: true,
        }
    }

    pub fn fallback(component: ComponentKind, value: f64) -> Self {
        Self {
            component,
            value: sanitize(value),
            data_present: false,
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
