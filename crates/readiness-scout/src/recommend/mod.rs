pub mod backend;
pub mod context;
pub mod openai;
pub mod schema;
pub mod selector;
pub mod template;

pub use backend::{BackendError, RecommendationBackend};
pub use context::{EvidenceHighlights, RecommendationRequest};
pub use openai::OpenAiCompatibleBackend;
pub use schema::{Objection, Priority, Recommendations, SchemaViolation};
pub use selector::{
    RecommendationDiagnostics, RecommendationOutcome, RecommendationSelector,
    RecommendationSource, DEFAULT_GENERATIVE_TIMEOUT,
};
pub use template::{template_recommendations, TemplateBackend};
