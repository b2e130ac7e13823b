//! Evidence normalization, profile-weighted aggregation and tiering.

pub mod aggregate;
pub mod benchmark;
pub mod component;
pub mod curve;
pub mod evaluators;
pub mod evidence;
pub mod insights;
pub mod profile;
pub mod registry;
pub mod text;
pub mod tier;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, ComponentSignals, Scorecard, CONFIDENCE_FLOOR};
pub use benchmark::{BenchmarkMatch, BenchmarkTable};
pub use component::{ComponentKind, ComponentScore};
pub use evaluators::{Evaluation, Evaluator, Measurement};
pub use evidence::{
    EvidenceBundle, HiringEvidence, MentionItem, OrganizationProfile, PublicMentionsEvidence,
};
pub use insights::{extract_insights, financial_insights, vertical_insights, Insights};
pub use profile::{ProfileBuilder, ProfileError, ScoringProfile, Vertical};
pub use registry::{
    detect_vertical, ProfileRegistry, RegistryBuilder, FINANCIAL_SERVICES_PROFILE,
    GENERAL_PROFILE,
};
pub use tier::ReadinessTier;
