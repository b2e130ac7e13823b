use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::scoring::{ComponentScore, EvidenceBundle, ReadinessTier, Scorecard, Vertical};

/// Evidence highlights the recommendation backends may cite.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvidenceHighlights {
    pub total_open_roles: Option<u32>,
    pub specialized_role_count: Option<u32>,
    pub source_a_mention_count: Option<u32>,
    pub source_b_mention_count: Option<u32>,
    pub latest_mention: Option<String>,
    pub sector_label: Option<String>,
    pub employee_count: Option<u64>,
    pub technology_tags: Vec<String>,
}

impl EvidenceHighlights {
    pub fn from_evidence(evidence: &EvidenceBundle) -> Self {
        let hiring = evidence.hiring.as_ref();
        let mentions = evidence.public_mentions.as_ref();
        let organization = evidence.organization.as_ref();
        Self {
            total_open_roles: hiring.map(|h| h.total_open_roles),
            specialized_role_count: hiring.map(|h| h.specialized_role_count),
            source_a_mention_count: mentions.map(|m| m.source_a_mention_count),
            source_b_mention_count: mentions.map(|m| m.source_b_mention_count),
            latest_mention: evidence
                .recent_items_newest_first()
                .first()
                .map(|item| item.title.trim().to_string())
                .filter(|title| !title.is_empty()),
            sector_label: organization.and_then(|o| o.sector_label.clone()),
            employee_count: organization.and_then(|o| o.employee_count),
            technology_tags: evidence.technology_tags(),
        }
    }
}

/// Everything a backend sees for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRequest {
    pub company: Option<String>,
    pub profile: String,
    pub vertical: Vertical,
    pub overall_score: f64,
    pub confidence: f64,
    pub tier: ReadinessTier,
    pub components: Vec<ComponentScore>,
    pub highlights: EvidenceHighlights,
}

impl RecommendationRequest {
    pub fn new(
        company: Option<String>,
        profile: &str,
        vertical: Vertical,
        scorecard: &Scorecard,
        evidence: &EvidenceBundle,
    ) -> Self {
        Self {
            company,
            profile: profile.to_string(),
            vertical,
            overall_score: scorecard.overall_score,
            confidence: scorecard.confidence,
            tier: ReadinessTier::from_score(scorecard.overall_score),
            components: scorecard.components.clone(),
            highlights: EvidenceHighlights::from_evidence(evidence),
        }
    }

    pub fn company_name(&self) -> &str {
        self.company
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("The organization")
    }

    /// Plain-text analysis summary sent to generative backends.
    pub fn analysis_summary(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_summary(&mut out);
        out
    }

    fn write_summary(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "Company analysis for {}:", self.company_name())?;
        writeln!(
            out,
            "AI readiness score: {:.1}/100 ({}), confidence {:.2}",
            self.overall_score, self.tier, self.confidence
        )?;
        writeln!(out, "Vertical: {}", self.vertical)?;
        writeln!(out, "\nComponent scores:")?;
        for score in &self.components {
            writeln!(
                out,
                "- {}: {:.0}/100{}",
                score.component.title(),
                score.value,
                if score.data_present {
                    ""
                } else {
                    " (baseline, no data)"
                }
            )?;
        }

        let h = &self.highlights;
        if h.total_open_roles.is_some() {
            writeln!(out, "\nHiring signals:")?;
            writeln!(out, "- Open roles: {}", h.total_open_roles.unwrap_or(0))?;
            writeln!(
                out,
                "- AI/ML roles: {}",
                h.specialized_role_count.unwrap_or(0)
            )?;
        }
        if h.source_a_mention_count.is_some() {
            writeln!(out, "\nPublic mentions:")?;
            writeln!(
                out,
                "- Website AI mentions: {}",
                h.source_a_mention_count.unwrap_or(0)
            )?;
            writeln!(
                out,
                "- AI news articles: {}",
                h.source_b_mention_count.unwrap_or(0)
            )?;
            if let Some(latest) = &h.latest_mention {
                writeln!(out, "- Latest: {latest}")?;
            }
        }
        if h.sector_label.is_some() || h.employee_count.is_some() {
            writeln!(out, "\nOrganization:")?;
            if let Some(sector) = &h.sector_label {
                writeln!(out, "- Sector: {sector}")?;
            }
            if let Some(employees) = h.employee_count {
                writeln!(out, "- Employees: {employees}")?;
            }
        }
        if !h.technology_tags.is_empty() {
            let tags: Vec<&str> = h.technology_tags.iter().take(8).map(String::as_str).collect();
            writeln!(out, "\nTechnology stack: {}", tags.join(", "))?;
        }
        Ok(())
    }
}
