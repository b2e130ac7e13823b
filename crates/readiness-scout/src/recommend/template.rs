use async_trait::async_trait;
use serde_json::Value;

use super::backend::{BackendError, RecommendationBackend};
use super::context::RecommendationRequest;
use super::schema::{Objection, Priority, Recommendations};
use super::selector::RecommendationSource;
use crate::scoring::{ReadinessTier, Vertical};

struct TierTemplate {
    strategy: &'static str,
    messaging: &'static str,
    priority: Priority,
    timeline: &'static str,
    focus_areas: &'static [&'static str],
    objections: &'static [(&'static str, &'static str)],
    next_steps: &'static [&'static str],
}

static AI_READY_LEADER: TierTemplate = TierTemplate {
    strategy: "Advanced Partnership",
    messaging: "Position the platform as the next evolution of an established AI program",
    priority: Priority::High,
    timeline: "Immediate",
    focus_areas: &[
        "Enterprise-scale AI deployment",
        "Advanced model optimization",
        "Capabilities beyond current tooling",
        "Competitive advantage through AI",
    ],
    objections: &[
        (
            "We already have AI capabilities",
            "The platform extends and scales existing capabilities rather than replacing them",
        ),
        (
            "Integration complexity",
            "Proven enterprise integration patterns keep deployment disruption low",
        ),
    ],
    next_steps: &[
        "Schedule executive briefing within 1 week",
        "Prepare custom demo around current use cases",
        "Identify current AI pain points",
        "Propose pilot project for immediate value",
    ],
};

static STRONG_POTENTIAL: TierTemplate = TierTemplate {
    strategy: "Strategic Enablement",
    messaging: "Frame the platform as the catalyst for AI transformation",
    priority: Priority::High,
    timeline: "0-3 months",
    focus_areas: &[
        "Accelerating existing AI initiatives",
        "Filling capability gaps",
        "Reducing time to production",
        "ROI and efficiency gains",
    ],
    objections: &[
        (
            "ROI uncertainty",
            "Comparable organizations report measurable ROI within two quarters",
        ),
        (
            "Resource constraints",
            "Automation reduces the engineering effort needed per model",
        ),
    ],
    next_steps: &[
        "Schedule technical deep-dive session",
        "Share relevant case studies",
        "Identify champion within organization",
        "Propose proof of concept",
    ],
};

static EMERGING_INTEREST: TierTemplate = TierTemplate {
    strategy: "Education and Enablement",
    messaging: "Present the platform as the foundation for AI success",
    priority: Priority::Medium,
    timeline: "3-6 months",
    focus_areas: &[
        "Low-risk pilot projects",
        "Quick wins and proof of concept",
        "Building AI capabilities",
        "Training and support",
    ],
    objections: &[
        (
            "ROI uncertainty",
            "Scoped pilots prove value before larger commitments",
        ),
        (
            "Resource constraints",
            "Managed infrastructure removes the need for a dedicated platform team",
        ),
    ],
    next_steps: &[
        "Send educational materials",
        "Schedule discovery call",
        "Identify specific use cases",
        "Offer workshop or training session",
    ],
};

static EARLY_STAGE: TierTemplate = TierTemplate {
    strategy: "Educational Nurturing",
    messaging: "Start the AI journey with a trusted partner",
    priority: Priority::Low,
    timeline: "6-12 months",
    focus_areas: &[
        "AI education and awareness",
        "Industry use cases",
        "Small pilot opportunities",
        "Long-term vision building",
    ],
    objections: &[
        (
            "Not ready for AI",
            "Start small with pilot projects and grow",
        ),
        (
            "Lack of AI expertise",
            "Full training and support included",
        ),
    ],
    next_steps: &[
        "Add to nurture campaign",
        "Share industry AI trends report",
        "Schedule quarterly check-in",
        "Invite to product webinars",
    ],
};

static NOT_YET_READY: TierTemplate = TierTemplate {
    strategy: "Long-term Relationship Building",
    messaging: "Build awareness of practical AI outcomes before any sales motion",
    priority: Priority::Low,
    timeline: "12+ months",
    focus_areas: &[
        "AI education and awareness",
        "Data and infrastructure foundations",
        "Industry peer examples",
    ],
    objections: &[
        (
            "AI is not a priority this year",
            "Foundational data work now shortens time to value later",
        ),
        (
            "Lack of AI expertise",
            "Full training and support included",
        ),
    ],
    next_steps: &[
        "Add to nurture campaign",
        "Share industry AI trends report",
        "Revisit assessment in two quarters",
    ],
};

const FINANCIAL_TALKING_POINTS: &[&str] = &[
    "Regulatory-compliant AI models designed for financial services",
    "Pre-built fraud detection and risk assessment models available",
];

const FINANCIAL_OBJECTION: (&str, &str) = (
    "Regulators will scrutinize AI models",
    "Model documentation and validation workflows support model risk management reviews",
);

const AGGRESSIVE_HIRING_ROLES: u32 = 20;
const COMMITTED_HIRING_ROLES: u32 = 5;
const AHEAD_OF_PEERS_SCORE: f64 = 70.0;
const ACCELERATE_SCORE: f64 = 50.0;

fn template_for(tier: ReadinessTier) -> &'static TierTemplate {
    match tier {
        ReadinessTier::AiReadyLeader => &AI_READY_LEADER,
        ReadinessTier::StrongPotential => &STRONG_POTENTIAL,
        ReadinessTier::EmergingInterest => &EMERGING_INTEREST,
        ReadinessTier::EarlyStage => &EARLY_STAGE,
        ReadinessTier::NotYetReady => &NOT_YET_READY,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Deterministic recommendations for the request's tier, with talking points
/// drawn from its evidence.
pub fn template_recommendations(request: &RecommendationRequest) -> Recommendations {
    let template = template_for(request.tier);
    let financial = request.vertical == Vertical::FinancialServices;

    let mut objections: Vec<Objection> = template
        .objections
        .iter()
        .map(|(objection, response)| Objection::new(objection, response))
        .collect();
    if financial {
        objections.push(Objection::new(FINANCIAL_OBJECTION.0, FINANCIAL_OBJECTION.1));
    }

    let mut next_steps = owned(template.next_steps);
    if let Some(company) = request.company.as_deref().map(str::trim) {
        if !company.is_empty() {
            next_steps.insert(0, format!("Map decision makers at {company} (CTO, CDO)"));
        }
    }

    Recommendations {
        strategy: template.strategy.to_string(),
        messaging: template.messaging.to_string(),
        priority: template.priority,
        timeline: template.timeline.to_string(),
        focus_areas: owned(template.focus_areas),
        talking_points: talking_points(request),
        objections,
        next_steps,
    }
}

fn talking_points(request: &RecommendationRequest) -> Vec<String> {
    let highlights = &request.highlights;
    let mut points = Vec::new();

    match highlights.specialized_role_count {
        Some(roles) if roles > AGGRESSIVE_HIRING_ROLES => points.push(format!(
            "Aggressive AI talent hiring ({roles} open AI/ML positions)"
        )),
        Some(roles) if roles > COMMITTED_HIRING_ROLES => points.push(format!(
            "{roles} open AI/ML positions show commitment to AI"
        )),
        _ => {}
    }

    if let Some(latest) = &highlights.latest_mention {
        points.push(format!(
            "Recent \"{latest}\" aligns with a scalable AI platform"
        ));
    }

    let position = if request.overall_score >= AHEAD_OF_PEERS_SCORE {
        "Ahead of industry peers in AI adoption"
    } else if request.overall_score >= ACCELERATE_SCORE {
        "Critical time to accelerate AI adoption to stay competitive"
    } else {
        "Opportunity to leapfrog competitors with the right AI strategy"
    };
    points.push(position.to_string());

    if highlights
        .technology_tags
        .iter()
        .any(|tag| tag.contains("python"))
    {
        points.push("Seamless integration with existing Python infrastructure".to_string());
    }

    if request.vertical == Vertical::FinancialServices {
        points.extend(owned(FINANCIAL_TALKING_POINTS));
    }

    points
}

/// In-process backend serving [`template_recommendations`]. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateBackend;

#[async_trait]
impl RecommendationBackend for TemplateBackend {
    fn name(&self) -> &'static str {
        "template"
    }

    fn source(&self) -> RecommendationSource {
        RecommendationSource::Template
    }

    async fn generate(&self, request: &RecommendationRequest) -> Result<Value, BackendError> {
        Ok(serde_json::to_value(template_recommendations(request))?)
    }
}
