use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-request evidence assembled by the collectors.
///
/// Every sub-record is optional; a missing record means the collector was
/// unavailable or found nothing, and the evaluators degrade to their
/// documented fallbacks instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring: Option<HiringEvidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_mentions: Option<PublicMentionsEvidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationProfile>,
}

impl EvidenceBundle {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_hiring(mut self, hiring: HiringEvidence) -> Self {
        self.hiring = Some(hiring);
        self
    }

    pub fn with_public_mentions(mut self, mentions: PublicMentionsEvidence) -> Self {
        self.public_mentions = Some(mentions);
        self
    }

    pub fn with_organization(mut self, organization: OrganizationProfile) -> Self {
        self.organization = Some(organization);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.hiring.is_none() && self.public_mentions.is_none() && self.organization.is_none()
    }

    /// Technology tags reported by any collector, lowercased and deduplicated
    /// in first-seen order.
    pub fn technology_tags(&self) -> Vec<String> {
        let hiring = self.hiring.iter().flat_map(|h| h.detected_tags.iter());
        let organization = self
            .organization
            .iter()
            .flat_map(|o| o.detected_tags.iter());

        let mut tags: Vec<String> = Vec::new();
        for tag in hiring.chain(organization) {
            let normalized = tag.trim().to_lowercase();
            if !normalized.is_empty() && !tags.contains(&normalized) {
                tags.push(normalized);
            }
        }
        tags
    }

    /// Mentions ordered newest first; undated items sort last in their
    /// original order.
    pub fn recent_items_newest_first(&self) -> Vec<&MentionItem> {
        let mut items: Vec<&MentionItem> = self
            .public_mentions
            .iter()
            .flat_map(|m| m.recent_items.iter())
            .collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }
}

/// Hiring signals from job-posting collectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringEvidence {
    pub total_open_roles: u32,
    /// Open roles in the specialized (AI/ML) category.
    pub specialized_role_count: u32,
    pub recent_role_titles: Vec<String>,
    pub detected_tags: Vec<String>,
}

/// Public mention counts from two independent sources plus recent items.
///
/// Source A is the organization's own web presence, source B the news feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicMentionsEvidence {
    pub source_a_mention_count: u32,
    pub source_b_mention_count: u32,
    pub recent_items: Vec<MentionItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentionItem {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub summary: String,
}

impl MentionItem {
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// Firmographic profile of the organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationProfile {
    /// Free-text sector as reported by the profile collector.
    pub sector_label: Option<String>,
    /// Explicit key from the benchmark taxonomy; preferred over label matching.
    pub sector_key: Option<String>,
    pub employee_count: Option<u64>,
    pub detected_tags: Vec<String>,
}
