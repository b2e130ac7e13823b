use crate::infra::{build_engine, build_registry, read_evidence};
use chrono::NaiveDate;
use clap::Args;
use readiness_scout::config::AppConfig;
use readiness_scout::error::AppError;
use readiness_scout::scoring::{
    EvidenceBundle, HiringEvidence, MentionItem, OrganizationProfile, PublicMentionsEvidence,
};
use readiness_scout::{AssessmentRequest, AssessmentResult};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Evidence bundle JSON file (`-` reads stdin)
    #[arg(long)]
    pub(crate) evidence: PathBuf,
    /// Scoring profile name, or `auto` to detect it from the sector
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Organization name used in recommendations
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Pretty-print the JSON result
    #[arg(long)]
    pub(crate) pretty: bool,
    /// Skip the generative backend even when one is configured
    #[arg(long)]
    pub(crate) offline: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Query the configured generative backend instead of templates only
    #[arg(long)]
    pub(crate) generative: bool,
    /// Print full JSON results after the summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_assess(config: &AppConfig, args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        evidence,
        profile,
        company,
        pretty,
        offline,
    } = args;

    let engine = build_engine(config, offline)?;
    let request = AssessmentRequest {
        evidence: read_evidence(&evidence)?,
        profile,
        company,
    };
    let result = engine.assess(request).await?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .map_err(AppError::Output)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_profiles() -> Result<(), AppError> {
    let registry = build_registry()?;
    for profile in registry.profiles() {
        println!(
            "{} ({}) | empty-bundle baseline {:.1}",
            profile.name(),
            profile.vertical(),
            profile.fallback_score()
        );
        for (component, weight) in profile.weights() {
            println!("  - {:<26} {:.2}", component.key(), weight);
        }
    }
    Ok(())
}

pub(crate) async fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let engine = build_engine(config, !args.generative)?;

    println!("AI readiness demo");
    let mut results = Vec::new();
    for (company, evidence) in sample_organizations() {
        let request = AssessmentRequest::new(evidence).with_company(company);
        let result = engine.assess(request).await?;
        render_summary(company, &result);
        results.push(result);
    }

    if args.json {
        let rendered = serde_json::to_string_pretty(&results).map_err(AppError::Output)?;
        println!("\n{rendered}");
    }
    Ok(())
}

fn render_summary(company: &str, result: &AssessmentResult) {
    println!(
        "\n{company}: {:.1}/100 ({}) | confidence {:.2} | profile {}",
        result.overall_score, result.tier, result.confidence, result.profile
    );
    println!("  Component scores:");
    for score in &result.components {
        println!(
            "    - {}: {:.1}{}",
            score.component.title(),
            score.value,
            if score.data_present { "" } else { " (baseline)" }
        );
    }
    println!("  Strengths: {}", result.strengths.join("; "));
    println!("  Weaknesses: {}", result.weaknesses.join("; "));
    for insight in &result.vertical_insights {
        println!("  > {insight}");
    }
    let recs = &result.recommendations;
    println!(
        "  Strategy: {} ({:?} priority, {})",
        recs.strategy, recs.priority, recs.timeline
    );
    for point in &recs.talking_points {
        println!("    * {point}");
    }
    if let Some(reason) = &result.diagnostics.fallback_reason {
        println!("  Template fallback: {reason}");
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn mention(title: &str, (year, month, day): (i32, u32, u32), summary: &str) -> MentionItem {
    MentionItem {
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day),
        summary: summary.to_string(),
    }
}

fn sample_organizations() -> Vec<(&'static str, EvidenceBundle)> {
    vec![
        (
            "Lumen Analytics",
            EvidenceBundle::empty()
                .with_hiring(HiringEvidence {
                    total_open_roles: 85,
                    specialized_role_count: 34,
                    recent_role_titles: strings(&[
                        "Machine Learning Engineer",
                        "MLOps Engineer",
                        "Applied Scientist",
                    ]),
                    detected_tags: strings(&["Python", "PyTorch", "Kubernetes", "AWS", "Go"]),
                })
                .with_public_mentions(PublicMentionsEvidence {
                    source_a_mention_count: 45,
                    source_b_mention_count: 9,
                    recent_items: vec![mention(
                        "Lumen Analytics launches AI forecasting suite",
                        (2025, 5, 12),
                        "Generative models now power demand planning.",
                    )],
                })
                .with_organization(OrganizationProfile {
                    sector_label: Some("Software".to_string()),
                    employee_count: Some(2_400),
                    ..OrganizationProfile::default()
                }),
        ),
        (
            "Harborview Bank",
            EvidenceBundle::empty()
                .with_hiring(HiringEvidence {
                    total_open_roles: 40,
                    specialized_role_count: 8,
                    recent_role_titles: strings(&[
                        "Model Risk Analyst",
                        "AML Investigator",
                        "Data Governance Lead",
                        "Quantitative Analyst",
                    ]),
                    detected_tags: strings(&["python", "sas", "snowflake", "azure"]),
                })
                .with_public_mentions(PublicMentionsEvidence {
                    source_a_mention_count: 12,
                    source_b_mention_count: 4,
                    recent_items: vec![mention(
                        "Harborview Bank modernizes fraud detection",
                        (2025, 4, 2),
                        "The bank adopts machine learning for transaction monitoring.",
                    )],
                })
                .with_organization(OrganizationProfile {
                    sector_label: Some("Retail Banking".to_string()),
                    employee_count: Some(9_000),
                    detected_tags: strings(&["Basel III", "KYC", "data lineage"]),
                    ..OrganizationProfile::default()
                }),
        ),
        (
            "Granite Works",
            EvidenceBundle::empty()
                .with_hiring(HiringEvidence {
                    total_open_roles: 6,
                    specialized_role_count: 0,
                    ..HiringEvidence::default()
                })
                .with_organization(OrganizationProfile {
                    sector_label: Some("Manufacturing".to_string()),
                    employee_count: Some(350),
                    ..OrganizationProfile::default()
                }),
        ),
    ]
}
