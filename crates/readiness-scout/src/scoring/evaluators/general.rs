use crate::scoring::benchmark::BenchmarkTable;
use crate::scoring::curve::{score_count, Curve};
use crate::scoring::evidence::EvidenceBundle;
use crate::scoring::text::{count_matching_titles, TokenizedText};

use super::Measurement;

const HIRING_CURVE: Curve = Curve::new(
    &[(0.0, 20.0), (5.0, 40.0), (20.0, 60.0), (50.0, 80.0)],
    100.0,
    60.0,
);

const WEBSITE_MENTIONS_CURVE: Curve = Curve::new(
    &[(0.0, 10.0), (10.0, 30.0), (30.0, 50.0), (50.0, 70.0)],
    100.0,
    50.0,
);

const NEWS_MENTIONS_CURVE: Curve = Curve::new(
    &[(0.0, 10.0), (3.0, 30.0), (7.0, 60.0), (12.0, 80.0)],
    100.0,
    10.0,
);

/// Own-web-presence share of the mentions score; the news feed gets the rest.
const WEBSITE_SHARE: f64 = 0.6;

const SCALE_CURVE: Curve = Curve::new(
    &[(0.0, 30.0), (100.0, 50.0), (1_000.0, 70.0), (10_000.0, 85.0)],
    95.0,
    40_000.0,
);

const MODERNIZATION_CURVE: Curve = Curve::new(
    &[(0.0, 20.0), (2.0, 40.0), (4.0, 60.0), (7.0, 80.0)],
    100.0,
    6.0,
);

const CLOUD_PLATFORMS: &[&str] = &[
    "aws",
    "azure",
    "gcp",
    "google cloud",
    "kubernetes",
    "docker",
];

const MODERN_LANGUAGES: &[&str] = &[
    "react",
    "vue",
    "angular",
    "node",
    "node.js",
    "python",
    "go",
    "golang",
    "rust",
    "typescript",
];

const AI_TOOLS: &[&str] = &[
    "tensorflow",
    "pytorch",
    "scikit",
    "scikit-learn",
    "jupyter",
    "spark",
    "databricks",
];

const CLOUD_POINTS: f64 = 1.5;
const AI_TOOL_POINTS: f64 = 2.0;

/// Specialized (AI/ML) openings only; a large generic hiring volume with no
/// specialized roles stays at the curve baseline.
pub(super) fn tech_hiring(evidence: &EvidenceBundle, _: &BenchmarkTable) -> Option<Measurement> {
    let hiring = evidence.hiring.as_ref()?;
    Some(Measurement::new(score_count(
        &HIRING_CURVE,
        hiring.specialized_role_count as usize,
    )))
}

pub(super) fn ai_mentions(evidence: &EvidenceBundle, _: &BenchmarkTable) -> Option<Measurement> {
    let mentions = evidence.public_mentions.as_ref()?;
    let website = score_count(
        &WEBSITE_MENTIONS_CURVE,
        mentions.source_a_mention_count as usize,
    );
    let news = score_count(
        &NEWS_MENTIONS_CURVE,
        mentions.source_b_mention_count as usize,
    );
    Some(Measurement::new(
        website * WEBSITE_SHARE + news * (1.0 - WEBSITE_SHARE),
    ))
}

pub(super) fn company_scale(evidence: &EvidenceBundle, _: &BenchmarkTable) -> Option<Measurement> {
    let employees = evidence.organization.as_ref()?.employee_count?;
    Some(Measurement::new(SCALE_CURVE.apply(employees as f64)))
}

pub(super) fn industry_adoption(
    evidence: &EvidenceBundle,
    benchmarks: &BenchmarkTable,
) -> Option<Measurement> {
    let organization = evidence.organization.as_ref()?;
    let key = non_blank(organization.sector_key.as_deref());
    let label = non_blank(organization.sector_label.as_deref());
    if key.is_none() && label.is_none() {
        return None;
    }
    Some(Measurement::new(benchmarks.resolve(key, label).baseline()))
}

pub(super) fn tech_modernization(
    evidence: &EvidenceBundle,
    _: &BenchmarkTable,
) -> Option<Measurement> {
    let tags = evidence.technology_tags();
    if tags.is_empty() {
        return None;
    }

    let cloud = count_matching_titles(&tags, CLOUD_PLATFORMS) as f64;
    let languages = count_matching_titles(&tags, MODERN_LANGUAGES) as f64;
    let ai_tools = count_matching_titles(&tags, AI_TOOLS) as f64;
    let points = cloud * CLOUD_POINTS + languages + ai_tools * AI_TOOL_POINTS;

    let stack = TokenizedText::new(tags.iter().map(String::as_str));
    let matched = [CLOUD_PLATFORMS, MODERN_LANGUAGES, AI_TOOLS]
        .into_iter()
        .flat_map(|vocabulary| stack.matched(vocabulary))
        .collect();
    Some(Measurement::with_matched(
        MODERNIZATION_CURVE.apply(points),
        matched,
    ))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
