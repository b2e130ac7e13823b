use super::common::*;
use crate::scoring::benchmark::{financial_benchmarks, general_benchmarks};
use crate::scoring::evaluators::builtin;
use crate::scoring::{
    ComponentKind, EvidenceBundle, HiringEvidence, OrganizationProfile, PublicMentionsEvidence,
};

fn score(component: ComponentKind, evidence: &EvidenceBundle) -> (f64, bool) {
    let result = builtin(component).score(evidence, &general_benchmarks());
    (result.value, result.data_present)
}

#[test]
fn every_evaluator_falls_back_on_empty_bundle() {
    let empty = EvidenceBundle::empty();
    let expected = [
        (ComponentKind::TechHiring, 30.0),
        (ComponentKind::AiMentions, 20.0),
        (ComponentKind::CompanyScale, 50.0),
        (ComponentKind::IndustryAdoption, 50.0),
        (ComponentKind::TechModernization, 40.0),
        (ComponentKind::RegulatoryCompliance, 35.0),
        (ComponentKind::DataGovernance, 30.0),
        (ComponentKind::QuantRiskCapabilities, 25.0),
        (ComponentKind::AmlKycCapabilities, 30.0),
        (ComponentKind::AiMlMaturity, 20.0),
    ];
    for (component, fallback) in expected {
        assert_eq!(score(component, &empty), (fallback, false), "{component}");
    }
}

#[test]
fn hiring_without_specialized_roles_scores_baseline() {
    let (value, present) = score(ComponentKind::TechHiring, &scenario_a_bundle());
    assert_eq!(value, 20.0);
    assert!(present);
}

#[test]
fn hiring_score_is_monotonic_in_specialized_roles() {
    let mut previous = 0.0;
    for count in 0..200 {
        let evidence = EvidenceBundle::empty().with_hiring(HiringEvidence {
            specialized_role_count: count,
            ..HiringEvidence::default()
        });
        let (value, _) = score(ComponentKind::TechHiring, &evidence);
        assert!(value >= previous, "dropped at {count}");
        assert!(value <= 100.0);
        previous = value;
    }
}

#[test]
fn mentions_blend_website_and_news() {
    let evidence = EvidenceBundle::empty().with_public_mentions(PublicMentionsEvidence {
        source_a_mention_count: 10,
        source_b_mention_count: 3,
        recent_items: Vec::new(),
    });
    let (value, present) = score(ComponentKind::AiMentions, &evidence);
    assert!(present);
    assert!((value - 30.0).abs() < 1e-9);

    let website_only = EvidenceBundle::empty().with_public_mentions(PublicMentionsEvidence {
        source_a_mention_count: 50,
        ..PublicMentionsEvidence::default()
    });
    let (value, _) = score(ComponentKind::AiMentions, &website_only);
    assert!((value - (70.0 * 0.6 + 10.0 * 0.4)).abs() < 1e-9);
}

#[test]
fn mentions_are_monotonic_in_each_source() {
    let build = |a: u32, b: u32| {
        EvidenceBundle::empty().with_public_mentions(PublicMentionsEvidence {
            source_a_mention_count: a,
            source_b_mention_count: b,
            recent_items: Vec::new(),
        })
    };
    let mut previous_a = 0.0;
    let mut previous_b = 0.0;
    for count in 0..150 {
        let (by_a, _) = score(ComponentKind::AiMentions, &build(count, 4));
        let (by_b, _) = score(ComponentKind::AiMentions, &build(4, count));
        assert!(by_a >= previous_a);
        assert!(by_b >= previous_b);
        previous_a = by_a;
        previous_b = by_b;
    }
}

#[test]
fn company_scale_needs_employee_count() {
    let unknown = EvidenceBundle::empty().with_organization(OrganizationProfile {
        sector_label: Some("Retail".to_string()),
        ..OrganizationProfile::default()
    });
    assert_eq!(score(ComponentKind::CompanyScale, &unknown), (50.0, false));

    let known = EvidenceBundle::empty().with_organization(OrganizationProfile {
        employee_count: Some(1_000),
        ..OrganizationProfile::default()
    });
    let (value, present) = score(ComponentKind::CompanyScale, &known);
    assert!(present);
    assert!((value - 70.0).abs() < 1e-9);
}

#[test]
fn company_scale_saturates_below_ceiling() {
    let huge = EvidenceBundle::empty().with_organization(OrganizationProfile {
        employee_count: Some(5_000_000),
        ..OrganizationProfile::default()
    });
    let (value, _) = score(ComponentKind::CompanyScale, &huge);
    assert!(value > 90.0 && value <= 95.0);
}

#[test]
fn industry_adoption_uses_the_profile_table() {
    let bank = EvidenceBundle::empty().with_organization(OrganizationProfile {
        sector_label: Some("Community Banking Group".to_string()),
        ..OrganizationProfile::default()
    });
    let evaluator = builtin(ComponentKind::IndustryAdoption);

    let general = evaluator.score(&bank, &general_benchmarks());
    let financial = evaluator.score(&bank, &financial_benchmarks());
    assert!(general.data_present && financial.data_present);
    assert_eq!(general.value, 65.0);
    assert_eq!(financial.value, 50.0);

    let unlabeled = EvidenceBundle::empty().with_organization(OrganizationProfile {
        employee_count: Some(10),
        ..OrganizationProfile::default()
    });
    let fallback = evaluator.score(&unlabeled, &financial_benchmarks());
    assert_eq!((fallback.value, fallback.data_present), (55.0, false));
}

#[test]
fn industry_adoption_prefers_explicit_sector_key() {
    let evidence = EvidenceBundle::empty().with_organization(OrganizationProfile {
        sector_label: Some("Technology consulting".to_string()),
        sector_key: Some("consulting".to_string()),
        ..OrganizationProfile::default()
    });
    assert_eq!(score(ComponentKind::IndustryAdoption, &evidence), (70.0, true));
}

#[test]
fn modernization_counts_weighted_stack_points() {
    let evidence = EvidenceBundle::empty().with_hiring(hiring(
        0,
        &[],
        &["AWS", "Python", "Go", "PyTorch"],
    ));
    // 1.5 cloud + 2 languages + 2 for one AI tool = 5.5 points.
    let (value, present) = score(ComponentKind::TechModernization, &evidence);
    assert!(present);
    assert!((value - 70.0).abs() < 1e-9);
    let evaluation =
        builtin(ComponentKind::TechModernization).evaluate(&evidence, &general_benchmarks());
    assert_eq!(evaluation.matched, vec!["aws", "python", "go", "pytorch"]);

    let no_tags = EvidenceBundle::empty().with_hiring(hiring(3, &["Engineer"], &[]));
    assert_eq!(score(ComponentKind::TechModernization, &no_tags), (40.0, false));
}

#[test]
fn financial_evaluators_report_data_for_populated_bank() {
    let evidence = strong_bank_bundle();
    for component in [
        ComponentKind::RegulatoryCompliance,
        ComponentKind::DataGovernance,
        ComponentKind::QuantRiskCapabilities,
        ComponentKind::AmlKycCapabilities,
        ComponentKind::AiMlMaturity,
    ] {
        let result = builtin(component).score(&evidence, &financial_benchmarks());
        assert!(result.data_present, "{component}");
        assert!(result.value > 70.0, "{component} scored {}", result.value);
    }
}

#[test]
fn short_keywords_do_not_match_inside_words() {
    let evidence = EvidenceBundle::empty().with_hiring(hiring(
        0,
        &["Sustainability Lead", "Campaign Manager"],
        &["paml", "skyc"],
    ));
    let aml = builtin(ComponentKind::AmlKycCapabilities).score(&evidence, &financial_benchmarks());
    assert_eq!((aml.value, aml.data_present), (30.0, false));
}

#[test]
fn aml_score_grows_with_aml_roles() {
    let mut previous = 0.0;
    for roles in 0..12 {
        let titles: Vec<&str> = (0..roles).map(|_| "AML Investigator").collect();
        let evidence = EvidenceBundle::empty().with_hiring(hiring(0, &titles, &[]));
        let value = builtin(ComponentKind::AmlKycCapabilities)
            .score(&evidence, &financial_benchmarks())
            .value;
        assert!(value >= previous);
        previous = value;
    }
    assert!(previous > 80.0);
}

/// Scores `bundles` in order. Leading bundles may fall back; once a
/// component is data-backed it must stay so and never lose value.
fn assert_non_decreasing(component: ComponentKind, bundles: Vec<EvidenceBundle>) {
    let mut previous: Option<f64> = None;
    for (step, bundle) in bundles.iter().enumerate() {
        let result = builtin(component).score(bundle, &financial_benchmarks());
        if !result.data_present {
            assert!(previous.is_none(), "{component} lost its evidence at step {step}");
            continue;
        }
        if let Some(previous) = previous {
            assert!(
                result.value >= previous,
                "{component} dropped at step {step}: {} < {previous}",
                result.value
            );
        }
        assert!(result.value <= 100.0);
        previous = Some(result.value);
    }
    assert!(previous.is_some(), "{component} never saw data");
}

fn with_titles(title: &str, count: usize) -> EvidenceBundle {
    let titles: Vec<&str> = (0..count).map(|_| title).collect();
    EvidenceBundle::empty().with_hiring(hiring(0, &titles, &[]))
}

fn with_tags(tags: &[&str]) -> EvidenceBundle {
    EvidenceBundle::empty().with_hiring(hiring(0, &[], tags))
}

fn prefixes(pool: &[&str]) -> Vec<EvidenceBundle> {
    (0..=pool.len()).map(|n| with_tags(&pool[..n])).collect()
}

#[test]
fn company_scale_is_monotonic_in_employee_count() {
    let bundles = [0u64, 1, 10, 50, 100, 500, 1_000, 5_000, 10_000, 25_000, 100_000, 2_000_000]
        .into_iter()
        .map(|employees| {
            EvidenceBundle::empty().with_organization(OrganizationProfile {
                employee_count: Some(employees),
                ..OrganizationProfile::default()
            })
        })
        .collect();
    assert_non_decreasing(ComponentKind::CompanyScale, bundles);
}

#[test]
fn modernization_is_monotonic_in_tag_count() {
    let pool = [
        "COBOL", "AWS", "Python", "PyTorch", "Azure", "Go", "TensorFlow", "Docker", "Rust",
        "Spark", "Kubernetes", "TypeScript", "Databricks",
    ];
    assert_non_decreasing(ComponentKind::TechModernization, prefixes(&pool));
}

#[test]
fn regulatory_is_monotonic_in_roles_and_regulations() {
    let roles = (0..15).map(|n| with_titles("Compliance Officer", n)).collect();
    assert_non_decreasing(ComponentKind::RegulatoryCompliance, roles);

    let regulations = [
        "Basel III", "GDPR", "MiFID II", "IFRS 9", "CECL", "PSD2", "Solvency II", "RegTech",
        "Dodd-Frank", "SR 11-7", "Model Validation",
    ];
    assert_non_decreasing(ComponentKind::RegulatoryCompliance, prefixes(&regulations));
}

#[test]
fn data_governance_is_monotonic_in_platforms_and_roles() {
    let platforms = [
        "Snowflake", "Databricks", "Tableau", "Looker", "Power BI", "Qlik", "Alteryx", "Palantir",
    ];
    assert_non_decreasing(ComponentKind::DataGovernance, prefixes(&platforms));

    let roles = (0..20).map(|n| with_titles("Data Engineer", n)).collect();
    assert_non_decreasing(ComponentKind::DataGovernance, roles);
}

#[test]
fn quant_risk_is_monotonic_in_quant_roles() {
    let roles = (0..15).map(|n| with_titles("Quantitative Analyst", n)).collect();
    assert_non_decreasing(ComponentKind::QuantRiskCapabilities, roles);
}

#[test]
fn ai_ml_maturity_is_monotonic_in_roles() {
    let specialized = (0..120)
        .map(|count| {
            EvidenceBundle::empty().with_hiring(HiringEvidence {
                specialized_role_count: count,
                ..HiringEvidence::default()
            })
        })
        .collect();
    assert_non_decreasing(ComponentKind::AiMlMaturity, specialized);

    let titles = (0..30).map(|n| with_titles("Machine Learning Engineer", n)).collect();
    assert_non_decreasing(ComponentKind::AiMlMaturity, titles);
}

#[test]
fn only_the_newest_mentions_feed_news_signals() {
    let audits: Vec<_> = (1..=5)
        .map(|day| mention("Regulatory audit completed", (2025, 1, day), ""))
        .collect();
    let bundle = |items: Vec<_>| {
        EvidenceBundle::empty().with_public_mentions(PublicMentionsEvidence {
            recent_items: items,
            ..PublicMentionsEvidence::default()
        })
    };
    let regulatory = |evidence: &EvidenceBundle| {
        builtin(ComponentKind::RegulatoryCompliance)
            .score(evidence, &financial_benchmarks())
            .value
    };

    let five_audits = regulatory(&bundle(audits.clone()));
    assert_eq!(five_audits, 65.0);

    // A sixth, older item never enters the window.
    let mut with_older = audits.clone();
    with_older.push(mention("Quarterly results", (2024, 12, 1), ""));
    assert_eq!(regulatory(&bundle(with_older)), five_audits);

    // A newer item pushes the oldest audit out of the window.
    let mut with_newer = audits;
    with_newer.push(mention("Quarterly results", (2025, 2, 1), ""));
    let aged_out = regulatory(&bundle(with_newer));
    assert!(aged_out < five_audits, "{aged_out} >= {five_audits}");
    assert!(aged_out > 45.0);
}

#[test]
fn financial_evaluators_need_a_signal_not_just_a_record() {
    let label_only = EvidenceBundle::empty().with_organization(OrganizationProfile {
        sector_label: Some("Retail Banking".to_string()),
        employee_count: Some(12_000),
        ..OrganizationProfile::default()
    });
    for component in [
        ComponentKind::RegulatoryCompliance,
        ComponentKind::DataGovernance,
        ComponentKind::QuantRiskCapabilities,
        ComponentKind::AmlKycCapabilities,
        ComponentKind::AiMlMaturity,
    ] {
        let result = builtin(component).evaluate(&label_only, &financial_benchmarks());
        assert!(!result.score.data_present, "{component}");
        assert!(result.matched.is_empty(), "{component}");
    }
}

#[test]
fn financial_evaluators_report_matched_vocabulary() {
    let evidence = strong_bank_bundle();
    let aml = builtin(ComponentKind::AmlKycCapabilities).evaluate(&evidence, &financial_benchmarks());
    for phrase in ["aml", "kyc", "actimize", "fenergo"] {
        assert!(aml.matched.contains(&phrase), "missing {phrase} in {:?}", aml.matched);
    }
    let mut distinct = aml.matched.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(distinct.len(), aml.matched.len());

    let regulatory =
        builtin(ComponentKind::RegulatoryCompliance).evaluate(&evidence, &financial_benchmarks());
    assert!(regulatory.matched.contains(&"model risk management"));
    assert!(regulatory.matched.contains(&"basel iii"));

    let empty = builtin(ComponentKind::AmlKycCapabilities)
        .evaluate(&EvidenceBundle::empty(), &financial_benchmarks());
    assert!(empty.matched.is_empty());
}
