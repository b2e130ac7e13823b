//! AI readiness scoring for prospect organizations.
//!
//! Evidence from independent collectors is normalized per component,
//! aggregated under a named scoring profile, tiered and turned into sales
//! recommendations. See [`assessment::AssessmentEngine`] for the entry point.

pub mod assessment;
pub mod config;
pub mod error;
pub mod recommend;
pub mod scoring;
pub mod telemetry;

pub use assessment::{
    AssessmentEngine, AssessmentError, AssessmentRequest, AssessmentResult, AUTO_PROFILE,
};
