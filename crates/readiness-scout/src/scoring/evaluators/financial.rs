//! Evaluators only the financial-services profile weights.
//!
//! Each one turns keyword, vendor and role-title hits into points and maps
//! the points through its own curve. Keyword hits are whole-word phrase
//! matches over role titles, technology tags and, where the component reads
//! them, public mention titles and summaries.

use crate::scoring::benchmark::BenchmarkTable;
use crate::scoring::curve::Curve;
use crate::scoring::evidence::EvidenceBundle;
use crate::scoring::text::{count_matching_titles, TokenizedText};

use super::Measurement;

const REGULATORY_KEYWORDS: &[&str] = &[
    "basel iii",
    "basel iv",
    "mifid ii",
    "gdpr",
    "dodd-frank",
    "eu ai act",
    "psd2",
    "solvency ii",
    "ifrs 9",
    "cecl",
    "regulatory reporting",
    "compliance automation",
    "regtech",
    "supervisory technology",
    "suptech",
    "model risk management",
    "sr 11-7",
    "model validation",
    "model governance",
    "explainable ai",
    "fair lending",
    "disparate impact",
];

const DATA_GOVERNANCE_KEYWORDS: &[&str] = &[
    "data governance",
    "data quality",
    "data lineage",
    "data catalog",
    "master data management",
    "mdm",
    "single source of truth",
    "data lake",
    "data warehouse",
    "data mesh",
    "data fabric",
    "metadata management",
    "data stewardship",
    "data privacy",
    "data classification",
    "data retention",
    "data archival",
];

const QUANT_RISK_KEYWORDS: &[&str] = &[
    "credit risk",
    "market risk",
    "operational risk",
    "liquidity risk",
    "counterparty risk",
    "concentration risk",
    "model risk",
    "var",
    "value at risk",
    "cvar",
    "expected shortfall",
    "monte carlo",
    "stress testing",
    "backtesting",
    "scenario analysis",
    "sensitivity analysis",
    "quantitative analysis",
    "quantitative modeling",
    "risk modeling",
    "portfolio optimization",
    "algorithmic trading",
    "quant trading",
    "derivatives pricing",
    "option pricing",
    "fixed income analytics",
];

const AML_KYC_KEYWORDS: &[&str] = &[
    "aml",
    "anti-money laundering",
    "kyc",
    "know your customer",
    "transaction monitoring",
    "sanctions screening",
    "pep screening",
    "adverse media",
    "customer due diligence",
    "cdd",
    "edd",
    "enhanced due diligence",
    "suspicious activity",
    "sar",
    "ctr",
    "currency transaction report",
    "ofac",
    "fatf",
    "beneficial ownership",
    "ubo",
    "financial crime",
];

const COMPLIANCE_VENDORS: &[&str] = &[
    "actimize",
    "nasdaq verafin",
    "verafin",
    "fenergo",
    "accuity",
    "lexisnexis",
    "world-check",
    "dow jones",
];

const FINANCIAL_ROLE_TITLES: &[&str] = &[
    "quantitative analyst",
    "quant developer",
    "quantitative researcher",
    "quantitative trader",
    "algo trader",
    "systematic trader",
    "risk modeler",
    "credit risk analyst",
    "market risk analyst",
    "model risk analyst",
    "model validator",
    "risk data scientist",
    "aml analyst",
    "kyc analyst",
    "compliance analyst",
    "financial crime analyst",
    "sanctions analyst",
    "financial data scientist",
    "financial ml engineer",
    "financial data engineer",
    "ai architect",
    "mlops engineer",
];

const DATA_PLATFORMS: &[&str] = &[
    "snowflake",
    "databricks",
    "palantir",
    "alteryx",
    "tableau",
    "power bi",
    "qlik",
    "looker",
];
const CLOUD: &[&str] = &["aws", "azure", "gcp", "google cloud"];
const QUANT_TOOLS: &[&str] = &["python", "r", "matlab", "c++", "java", "scala", "sas"];
const AI_USE_CASES: &[&str] = &[
    "fraud detection",
    "credit scoring",
    "robo-advisor",
    "chatbot",
    "customer service ai",
    "algorithmic trading",
    "risk modeling",
    "document processing",
    "kyc automation",
];

const COMPLIANCE_ROLE_TERMS: &[&str] = &["compliance", "risk", "regulatory", "audit"];
const COMPLIANCE_NEWS_TERMS: &[&str] = &["compliance", "regulatory", "audit", "governance"];
const RISK_LEADERSHIP: &[&str] = &["chief risk officer", "chief compliance officer"];
const MODEL_RISK_FRAMEWORK: &[&str] = &["model risk management", "model validation"];
const DATA_ROLE_TERMS: &[&str] = &["data", "database", "etl", "analytics"];
const AML_ROLE_TERMS: &[&str] = &["aml", "kyc", "financial crime", "sanctions"];
const AI_ROLE_TERMS: &[&str] = &["data scientist", "ml engineer", "machine learning", "ai"];
const AI_NEWS_TERMS: &[&str] = &["ai", "artificial intelligence", "machine learning"];
const AI_GOVERNANCE: &[&str] = &["ai governance", "ai ethics", "responsible ai"];
const AI_COMMITTEE: &[&str] = &["ai committee", "ai steering"];

/// Only the newest mentions count towards news-driven signals.
const NEWS_WINDOW: usize = 5;

const REGULATORY_CURVE: Curve = Curve::new(
    &[(0.0, 30.0), (2.0, 45.0), (5.0, 65.0), (10.0, 85.0)],
    100.0,
    8.0,
);
const DATA_GOVERNANCE_CURVE: Curve = Curve::new(
    &[(0.0, 25.0), (3.0, 45.0), (6.0, 65.0), (12.0, 85.0)],
    100.0,
    10.0,
);
const QUANT_RISK_CURVE: Curve = Curve::new(
    &[(0.0, 20.0), (3.0, 40.0), (8.0, 65.0), (15.0, 85.0)],
    100.0,
    12.0,
);
const AML_KYC_CURVE: Curve = Curve::new(
    &[(0.0, 25.0), (3.0, 45.0), (8.0, 70.0), (15.0, 85.0)],
    100.0,
    10.0,
);
const AI_ML_MATURITY_CURVE: Curve = Curve::new(
    &[(0.0, 15.0), (5.0, 40.0), (12.0, 65.0), (25.0, 85.0)],
    100.0,
    20.0,
);

/// Which sub-records a component reads.
#[derive(Clone, Copy)]
struct Sources {
    hiring: bool,
    mentions: bool,
    organization: bool,
}

const HIRING_AND_ORGANIZATION: Sources = Sources {
    hiring: true,
    mentions: false,
    organization: true,
};
const ALL_SOURCES: Sources = Sources {
    hiring: true,
    mentions: true,
    organization: true,
};

/// Text view over the sub-records one component reads, recording every
/// vocabulary entry that scored.
struct Signals<'a> {
    titles: &'a [String],
    tags: Vec<String>,
    text: TokenizedText,
    news: Vec<String>,
    matched: Vec<&'static str>,
}

impl<'a> Signals<'a> {
    /// `None` when none of the component's sub-records were collected.
    fn collect(evidence: &'a EvidenceBundle, sources: Sources) -> Option<Self> {
        let hiring = evidence.hiring.as_ref().filter(|_| sources.hiring);
        let mentions = evidence.public_mentions.as_ref().filter(|_| sources.mentions);
        let organization = evidence.organization.as_ref().filter(|_| sources.organization);
        if hiring.is_none() && mentions.is_none() && organization.is_none() {
            return None;
        }

        let titles = hiring.map(|h| h.recent_role_titles.as_slice()).unwrap_or(&[]);
        let tags = evidence.technology_tags();
        let news: Vec<String> = if mentions.is_some() {
            evidence
                .recent_items_newest_first()
                .into_iter()
                .take(NEWS_WINDOW)
                .map(|item| item.text())
                .collect()
        } else {
            Vec::new()
        };

        let mention_text: Vec<String> = mentions
            .map(|m| m.recent_items.iter().map(|item| item.text()).collect())
            .unwrap_or_default();
        let text = TokenizedText::new(
            titles
                .iter()
                .chain(tags.iter())
                .chain(mention_text.iter())
                .map(String::as_str),
        );

        Some(Self {
            titles,
            tags,
            text,
            news,
            matched: Vec::new(),
        })
    }

    fn record(&mut self, phrases: Vec<&'static str>) {
        for phrase in phrases {
            if !self.matched.contains(&phrase) {
                self.matched.push(phrase);
            }
        }
    }

    fn keyword_hits(&mut self, vocabulary: &[&'static str]) -> f64 {
        let phrases = self.text.matched(vocabulary);
        let hits = phrases.len();
        self.record(phrases);
        hits as f64
    }

    fn role_hits(&mut self, vocabulary: &[&'static str]) -> f64 {
        let (hits, phrases) = fragment_hits(self.titles, vocabulary);
        self.record(phrases);
        hits
    }

    fn tag_hits(&mut self, vocabulary: &[&'static str]) -> f64 {
        let (hits, phrases) = fragment_hits(&self.tags, vocabulary);
        self.record(phrases);
        hits
    }

    fn news_hits(&mut self, vocabulary: &[&'static str]) -> f64 {
        let (hits, phrases) = fragment_hits(&self.news, vocabulary);
        self.record(phrases);
        hits
    }

    fn flag(&mut self, vocabulary: &[&'static str], points: f64) -> f64 {
        let phrases = self.text.matched(vocabulary);
        if phrases.is_empty() {
            return 0.0;
        }
        self.record(phrases);
        points
    }

    /// Zero points means none of the component's signals were seen.
    fn finish(self, curve: &Curve, points: f64) -> Option<Measurement> {
        if points <= 0.0 {
            return None;
        }
        Some(Measurement::with_matched(curve.apply(points), self.matched))
    }
}

/// Number of fragments mentioning any phrase, plus the phrases seen.
fn fragment_hits(fragments: &[String], vocabulary: &[&'static str]) -> (f64, Vec<&'static str>) {
    let hits = count_matching_titles(fragments, vocabulary);
    if hits == 0 {
        return (0.0, Vec::new());
    }
    let phrases = TokenizedText::new(fragments.iter().map(String::as_str)).matched(vocabulary);
    (hits as f64, phrases)
}

pub(super) fn regulatory_compliance(
    evidence: &EvidenceBundle,
    _: &BenchmarkTable,
) -> Option<Measurement> {
    let mut signals = Signals::collect(evidence, ALL_SOURCES)?;
    let points = signals.keyword_hits(REGULATORY_KEYWORDS)
        + signals.flag(RISK_LEADERSHIP, 1.5)
        + signals.flag(MODEL_RISK_FRAMEWORK, 2.0)
        + signals.role_hits(COMPLIANCE_ROLE_TERMS)
        + signals.news_hits(COMPLIANCE_NEWS_TERMS);
    signals.finish(&REGULATORY_CURVE, points)
}

pub(super) fn data_governance(
    evidence: &EvidenceBundle,
    _: &BenchmarkTable,
) -> Option<Measurement> {
    let mut signals = Signals::collect(evidence, HIRING_AND_ORGANIZATION)?;
    let cloud = if signals.tag_hits(CLOUD) > 0.0 { 1.5 } else { 0.0 };
    let points = signals.keyword_hits(DATA_GOVERNANCE_KEYWORDS)
        + signals.tag_hits(DATA_PLATFORMS) * 2.0
        + cloud
        + signals.role_hits(DATA_ROLE_TERMS);
    signals.finish(&DATA_GOVERNANCE_CURVE, points)
}

pub(super) fn quant_risk(evidence: &EvidenceBundle, _: &BenchmarkTable) -> Option<Measurement> {
    let mut signals = Signals::collect(evidence, HIRING_AND_ORGANIZATION)?;
    let points = signals.role_hits(FINANCIAL_ROLE_TITLES) * 2.0
        + signals.tag_hits(QUANT_TOOLS)
        + signals.keyword_hits(QUANT_RISK_KEYWORDS);
    signals.finish(&QUANT_RISK_CURVE, points)
}

pub(super) fn aml_kyc(evidence: &EvidenceBundle, _: &BenchmarkTable) -> Option<Measurement> {
    let mut signals = Signals::collect(evidence, ALL_SOURCES)?;
    let points = signals.keyword_hits(AML_KYC_KEYWORDS)
        + signals.keyword_hits(COMPLIANCE_VENDORS) * 3.0
        + signals.role_hits(AML_ROLE_TERMS) * 2.0;
    signals.finish(&AML_KYC_CURVE, points)
}

pub(super) fn ai_ml_maturity(
    evidence: &EvidenceBundle,
    _: &BenchmarkTable,
) -> Option<Measurement> {
    let mut signals = Signals::collect(evidence, ALL_SOURCES)?;
    let specialized = evidence
        .hiring
        .as_ref()
        .map(|h| h.specialized_role_count as f64)
        .unwrap_or(0.0);
    let points = specialized
        + signals.role_hits(AI_ROLE_TERMS)
        + signals.news_hits(AI_NEWS_TERMS)
        + signals.keyword_hits(AI_USE_CASES) * 2.0
        + signals.flag(AI_GOVERNANCE, 3.0)
        + signals.flag(AI_COMMITTEE, 2.0);
    signals.finish(&AI_ML_MATURITY_CURVE, points)
}

/// Risk or compliance leadership, or a model risk framework.
pub(crate) fn is_governance_indicator(phrase: &str) -> bool {
    RISK_LEADERSHIP.contains(&phrase) || MODEL_RISK_FRAMEWORK.contains(&phrase)
}

pub(crate) fn is_compliance_vendor(phrase: &str) -> bool {
    COMPLIANCE_VENDORS.contains(&phrase)
}

pub(crate) fn is_cloud_provider(phrase: &str) -> bool {
    CLOUD.contains(&phrase)
}
