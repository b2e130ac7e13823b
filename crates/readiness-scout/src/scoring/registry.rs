use std::sync::Arc;

use super::benchmark::{financial_benchmarks, general_benchmarks};
use super::component::ComponentKind;
use super::evaluators;
use super::evidence::EvidenceBundle;
use super::profile::{ProfileBuilder, ProfileError, ScoringProfile, Vertical};
use super::text::TokenizedText;

pub const GENERAL_PROFILE: &str = "general";
pub const FINANCIAL_SERVICES_PROFILE: &str = "financial_services";

/// Sector terms that route an organization to the financial-services profile.
const FINANCIAL_SECTOR_TERMS: &[&str] = &[
    "bank",
    "banking",
    "finance",
    "financial",
    "investment",
    "asset",
    "insurance",
    "reinsurance",
    "payment",
    "payments",
    "fintech",
];

const GENERAL_WEIGHTS: &[(ComponentKind, f64)] = &[
    (ComponentKind::TechHiring, 0.25),
    (ComponentKind::AiMentions, 0.25),
    (ComponentKind::CompanyScale, 0.20),
    (ComponentKind::IndustryAdoption, 0.15),
    (ComponentKind::TechModernization, 0.15),
];

const FINANCIAL_WEIGHTS: &[(ComponentKind, f64)] = &[
    (ComponentKind::RegulatoryCompliance, 0.20),
    (ComponentKind::DataGovernance, 0.15),
    (ComponentKind::QuantRiskCapabilities, 0.15),
    (ComponentKind::AmlKycCapabilities, 0.15),
    (ComponentKind::TechModernization, 0.15),
    (ComponentKind::AiMlMaturity, 0.10),
    (ComponentKind::IndustryAdoption, 0.10),
];

const FINANCIAL_ONLY: &[ComponentKind] = &[
    ComponentKind::RegulatoryCompliance,
    ComponentKind::DataGovernance,
    ComponentKind::QuantRiskCapabilities,
    ComponentKind::AmlKycCapabilities,
    ComponentKind::AiMlMaturity,
];

pub fn general_profile() -> Result<ScoringProfile, ProfileError> {
    GENERAL_WEIGHTS
        .iter()
        .fold(
            ProfileBuilder::new(GENERAL_PROFILE, Vertical::General),
            |builder, (component, _)| builder.evaluator(evaluators::builtin(*component)),
        )
        .weights(GENERAL_WEIGHTS)
        .benchmarks(general_benchmarks())
        .build()
}

/// Specialization of `base` with regulatory and financial-crime signals.
pub fn financial_services_profile(base: &ScoringProfile) -> Result<ScoringProfile, ProfileError> {
    FINANCIAL_ONLY
        .iter()
        .fold(
            ProfileBuilder::specialize(
                base,
                FINANCIAL_SERVICES_PROFILE,
                Vertical::FinancialServices,
            ),
            |builder, component| builder.evaluator(evaluators::builtin(*component)),
        )
        .weights(FINANCIAL_WEIGHTS)
        .benchmarks(financial_benchmarks())
        .build()
}

/// Collects profiles at startup. Registration order is preserved.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    profiles: Vec<ScoringProfile>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, profile: ScoringProfile) -> Result<Self, ProfileError> {
        if self.profiles.iter().any(|p| p.name() == profile.name()) {
            return Err(ProfileError::DuplicateProfile(profile.name().to_string()));
        }
        self.profiles.push(profile);
        Ok(self)
    }

    pub fn build(self) -> ProfileRegistry {
        ProfileRegistry {
            profiles: self.profiles.into_iter().map(Arc::new).collect(),
        }
    }
}

/// Immutable set of named profiles, shared read-only across requests.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<Arc<ScoringProfile>>,
}

impl ProfileRegistry {
    /// The `general` and `financial_services` profiles.
    pub fn builtin() -> Result<Self, ProfileError> {
        let general = general_profile()?;
        let financial = financial_services_profile(&general)?;
        Ok(RegistryBuilder::new()
            .register(general)?
            .register(financial)?
            .build())
    }

    pub fn get(&self, name: &str) -> Option<Arc<ScoringProfile>> {
        let name = name.trim();
        self.profiles
            .iter()
            .find(|profile| profile.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|profile| profile.name()).collect()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &ScoringProfile> {
        self.profiles.iter().map(Arc::as_ref)
    }

    pub fn for_vertical(&self, vertical: Vertical) -> Option<Arc<ScoringProfile>> {
        self.profiles
            .iter()
            .find(|profile| profile.vertical() == vertical)
            .cloned()
    }

    /// Pick the profile for an organization's sector. Financial sectors get
    /// the financial-services profile when one is registered; everything
    /// else, including bundles with no sector, gets the general profile or
    /// the first registered one.
    pub fn select_for(&self, evidence: &EvidenceBundle) -> Option<Arc<ScoringProfile>> {
        let vertical = detect_vertical(evidence);
        self.for_vertical(vertical)
            .or_else(|| self.for_vertical(Vertical::General))
            .or_else(|| self.profiles.first().cloned())
    }
}

pub fn detect_vertical(evidence: &EvidenceBundle) -> Vertical {
    let Some(organization) = evidence.organization.as_ref() else {
        return Vertical::General;
    };
    let sector = TokenizedText::new(
        organization
            .sector_key
            .iter()
            .chain(organization.sector_label.iter())
            .map(String::as_str),
    );
    if sector.contains_any(FINANCIAL_SECTOR_TERMS) {
        Vertical::FinancialServices
    } else {
        Vertical::General
    }
}
