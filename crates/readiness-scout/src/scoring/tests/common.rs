use chrono::NaiveDate;

use crate::scoring::{
    EvidenceBundle, HiringEvidence, MentionItem, OrganizationProfile, ProfileRegistry,
    PublicMentionsEvidence,
};

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn mention(title: &str, date: (i32, u32, u32), summary: &str) -> MentionItem {
    MentionItem {
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
        summary: summary.to_string(),
    }
}

pub(super) fn registry() -> ProfileRegistry {
    ProfileRegistry::builtin().expect("builtin profiles are valid")
}

pub(super) fn hiring(specialized: u32, titles: &[&str], tags: &[&str]) -> HiringEvidence {
    HiringEvidence {
        total_open_roles: specialized * 2 + 10,
        specialized_role_count: specialized,
        recent_role_titles: strings(titles),
        detected_tags: strings(tags),
    }
}

/// Large AI-native company with strong signals in every source.
pub(super) fn strong_general_bundle() -> EvidenceBundle {
    EvidenceBundle::empty()
        .with_hiring(hiring(
            60,
            &[
                "Machine Learning Engineer",
                "Senior Data Scientist",
                "AI Platform Lead",
            ],
            &[
                "AWS",
                "GCP",
                "Python",
                "Rust",
                "TypeScript",
                "PyTorch",
                "TensorFlow",
                "Databricks",
            ],
        ))
        .with_public_mentions(PublicMentionsEvidence {
            source_a_mention_count: 80,
            source_b_mention_count: 15,
            recent_items: vec![
                mention(
                    "Company ships new AI assistant",
                    (2025, 6, 2),
                    "The launch expands its generative AI portfolio.",
                ),
                mention("Quarterly results", (2025, 4, 20), "Revenue up 30%."),
            ],
        })
        .with_organization(OrganizationProfile {
            sector_label: Some("Artificial Intelligence".to_string()),
            sector_key: None,
            employee_count: Some(50_000),
            detected_tags: Vec::new(),
        })
}

/// Investment bank with regulatory, data, quant and AML signals.
pub(super) fn strong_bank_bundle() -> EvidenceBundle {
    EvidenceBundle::empty()
        .with_hiring(hiring(
            25,
            &[
                "Quantitative Analyst",
                "Credit Risk Analyst",
                "AML Analyst",
                "KYC Analyst",
                "Model Validator",
                "Financial Data Engineer",
                "Compliance Analyst",
                "Machine Learning Engineer",
            ],
            &[
                "python",
                "sas",
                "snowflake",
                "aws",
                "kafka",
                "matlab",
                "databricks",
            ],
        ))
        .with_public_mentions(PublicMentionsEvidence {
            source_a_mention_count: 40,
            source_b_mention_count: 10,
            recent_items: vec![
                mention(
                    "Bank launches AI fraud detection platform",
                    (2025, 5, 14),
                    "Model risk management and regulatory reporting upgrades under Basel III.",
                ),
                mention(
                    "Bank expands AML transaction monitoring with Actimize",
                    (2025, 3, 3),
                    "Compliance teams consolidate KYC reviews.",
                ),
            ],
        })
        .with_organization(OrganizationProfile {
            sector_label: Some("Investment Banking".to_string()),
            sector_key: None,
            employee_count: Some(40_000),
            detected_tags: strings(&[
                "data governance",
                "data lineage",
                "credit risk",
                "stress testing",
                "Fenergo",
            ]),
        })
}

pub(super) fn scenario_a_bundle() -> EvidenceBundle {
    EvidenceBundle::empty().with_hiring(HiringEvidence {
        total_open_roles: 50,
        specialized_role_count: 0,
        ..HiringEvidence::default()
    })
}
