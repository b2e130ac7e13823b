use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const REQUIRED_FIELDS: [&str; 8] = [
    "strategy",
    "messaging",
    "priority",
    "timeline",
    "focus_areas",
    "talking_points",
    "objections",
    "next_steps",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objection {
    pub objection: String,
    pub response: String,
}

impl Objection {
    pub fn new(objection: &str, response: &str) -> Self {
        Self {
            objection: objection.to_string(),
            response: response.to_string(),
        }
    }
}

/// Sales guidance attached to every assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub strategy: String,
    pub messaging: String,
    pub priority: Priority,
    pub timeline: String,
    pub focus_areas: Vec<String>,
    pub talking_points: Vec<String>,
    pub objections: Vec<Objection>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Error)]
pub enum SchemaViolation {
    #[error("recommendations must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("malformed recommendations: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("field `{0}` must not be empty")]
    Empty(&'static str),
    #[error("field `{0}` contains a blank entry")]
    BlankEntry(&'static str),
    #[error("talking point uses second-person phrasing: {0:?}")]
    SecondPersonTalkingPoint(String),
}

impl Recommendations {
    /// Parse and validate a backend payload.
    pub fn from_value(value: Value) -> Result<Self, SchemaViolation> {
        let object = value.as_object().ok_or(SchemaViolation::NotAnObject)?;
        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|field| object.get(**field).map_or(true, Value::is_null))
        {
            return Err(SchemaViolation::MissingField(*missing));
        }

        let recommendations: Recommendations = serde_json::from_value(value)?;
        recommendations.validate()?;
        Ok(recommendations)
    }

    pub fn validate(&self) -> Result<(), SchemaViolation> {
        non_blank("strategy", &self.strategy)?;
        non_blank("messaging", &self.messaging)?;
        non_blank("timeline", &self.timeline)?;
        non_empty_list("focus_areas", &self.focus_areas)?;
        non_empty_list("talking_points", &self.talking_points)?;
        non_empty_list("next_steps", &self.next_steps)?;

        if self.objections.is_empty() {
            return Err(SchemaViolation::Empty("objections"));
        }
        if self
            .objections
            .iter()
            .any(|o| o.objection.trim().is_empty() || o.response.trim().is_empty())
        {
            return Err(SchemaViolation::BlankEntry("objections"));
        }

        if let Some(point) = self
            .talking_points
            .iter()
            .find(|point| opens_in_second_person(point))
        {
            return Err(SchemaViolation::SecondPersonTalkingPoint(point.clone()));
        }

        Ok(())
    }
}

fn non_blank(field: &'static str, value: &str) -> Result<(), SchemaViolation> {
    if value.trim().is_empty() {
        Err(SchemaViolation::Empty(field))
    } else {
        Ok(())
    }
}

fn non_empty_list(field: &'static str, values: &[String]) -> Result<(), SchemaViolation> {
    if values.is_empty() {
        return Err(SchemaViolation::Empty(field));
    }
    if values.iter().any(|value| value.trim().is_empty()) {
        return Err(SchemaViolation::BlankEntry(field));
    }
    Ok(())
}

fn opens_in_second_person(point: &str) -> bool {
    let first = point
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
        .replace('\u{2019}', "'");
    let word = first.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
    matches!(word, "you" | "your" | "yours" | "yourself")
        || word.starts_with("you'")
}
