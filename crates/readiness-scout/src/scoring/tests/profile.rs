use super::common::*;
use crate::scoring::benchmark::general_benchmarks;
use crate::scoring::evaluators::builtin;
use crate::scoring::profile::WEIGHT_EPSILON;
use crate::scoring::{
    detect_vertical, ComponentKind, EvidenceBundle, OrganizationProfile, ProfileBuilder,
    ProfileError, RegistryBuilder, Vertical, FINANCIAL_SERVICES_PROFILE, GENERAL_PROFILE,
};

fn organization(label: &str) -> EvidenceBundle {
    EvidenceBundle::empty().with_organization(OrganizationProfile {
        sector_label: Some(label.to_string()),
        ..OrganizationProfile::default()
    })
}

#[test]
fn builtin_profile_weights_sum_to_one() {
    let registry = registry();
    assert_eq!(
        registry.names(),
        vec![GENERAL_PROFILE, FINANCIAL_SERVICES_PROFILE]
    );
    for profile in registry.profiles() {
        let sum: f64 = profile.weights().iter().map(|(_, weight)| weight).sum();
        assert!((sum - 1.0).abs() <= WEIGHT_EPSILON, "{} sums to {sum}", profile.name());
        for (component, _) in profile.weights() {
            assert!(profile.evaluator(*component).is_some());
        }
    }
}

#[test]
fn specialization_replaces_weights_and_keeps_base_evaluators() {
    let registry = registry();
    let general = registry.get(GENERAL_PROFILE).expect("general");
    let financial = registry.get(FINANCIAL_SERVICES_PROFILE).expect("financial");

    assert_eq!(financial.vertical(), Vertical::FinancialServices);
    assert_eq!(financial.weight(ComponentKind::TechHiring), None);
    assert_eq!(financial.weight(ComponentKind::RegulatoryCompliance), Some(0.20));
    assert_eq!(general.weight(ComponentKind::RegulatoryCompliance), None);
    // Inherited from the base, although the specialization no longer weights it.
    assert!(financial.evaluator(ComponentKind::TechHiring).is_some());
    assert!(general.evaluator(ComponentKind::AmlKycCapabilities).is_none());
    assert_eq!(financial.benchmarks().default_baseline(), 55.0);
}

#[test]
fn rejects_weights_not_summing_to_one() {
    let err = ProfileBuilder::new("skewed", Vertical::General)
        .evaluator(builtin(ComponentKind::TechHiring))
        .evaluator(builtin(ComponentKind::AiMentions))
        .weights(&[
            (ComponentKind::TechHiring, 0.6),
            (ComponentKind::AiMentions, 0.6),
        ])
        .build()
        .expect_err("weights sum to 1.2");
    match err {
        ProfileError::WeightSum { profile, sum } => {
            assert_eq!(profile, "skewed");
            assert!((sum - 1.2).abs() < 1e-9);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn rejects_weighted_component_without_evaluator() {
    let err = ProfileBuilder::new("partial", Vertical::General)
        .evaluator(builtin(ComponentKind::TechHiring))
        .weights(&[
            (ComponentKind::TechHiring, 0.5),
            (ComponentKind::DataGovernance, 0.5),
        ])
        .build()
        .expect_err("data governance has no evaluator");
    assert_eq!(
        err,
        ProfileError::MissingEvaluator {
            profile: "partial".to_string(),
            component: ComponentKind::DataGovernance,
        }
    );
}

#[test]
fn rejects_negative_or_non_finite_weights() {
    for weight in [-0.5, f64::NAN, f64::INFINITY] {
        let err = ProfileBuilder::new("broken", Vertical::General)
            .evaluator(builtin(ComponentKind::TechHiring))
            .evaluator(builtin(ComponentKind::AiMentions))
            .weights(&[
                (ComponentKind::TechHiring, 1.5),
                (ComponentKind::AiMentions, weight),
            ])
            .build()
            .expect_err("invalid weight");
        assert!(matches!(err, ProfileError::InvalidWeight { .. }), "{err}");
    }
}

#[test]
fn rejects_empty_weights_and_names() {
    assert_eq!(
        ProfileBuilder::new("empty", Vertical::General).build().unwrap_err(),
        ProfileError::EmptyWeights {
            profile: "empty".to_string()
        }
    );
    let err = ProfileBuilder::new("  ", Vertical::General)
        .evaluator(builtin(ComponentKind::TechHiring))
        .weight(ComponentKind::TechHiring, 1.0)
        .build()
        .unwrap_err();
    assert_eq!(err, ProfileError::EmptyName);
}

#[test]
fn single_weight_override_keeps_other_entries() {
    let registry = registry();
    let general = registry.get(GENERAL_PROFILE).expect("general");
    let tuned = ProfileBuilder::specialize(&general, "hiring_heavy", Vertical::General)
        .weight(ComponentKind::TechHiring, 0.35)
        .weight(ComponentKind::AiMentions, 0.15)
        .build()
        .expect("still sums to one");
    assert_eq!(tuned.weights().len(), general.weights().len());
    assert_eq!(tuned.weight(ComponentKind::TechHiring), Some(0.35));
    assert_eq!(tuned.weight(ComponentKind::CompanyScale), Some(0.20));
}

#[test]
fn registry_rejects_duplicate_names() {
    let profile = || {
        ProfileBuilder::new("solo", Vertical::General)
            .evaluator(builtin(ComponentKind::IndustryAdoption))
            .weight(ComponentKind::IndustryAdoption, 1.0)
            .benchmarks(general_benchmarks())
            .build()
            .expect("valid profile")
    };
    let err = RegistryBuilder::new()
        .register(profile())
        .and_then(|builder| builder.register(profile()))
        .expect_err("duplicate");
    assert_eq!(err, ProfileError::DuplicateProfile("solo".to_string()));
}

#[test]
fn lookup_is_case_insensitive() {
    let registry = registry();
    assert!(registry.get("Financial_Services").is_some());
    assert!(registry.get("healthcare").is_none());
}

#[test]
fn financial_sectors_select_specialized_profile() {
    let registry = registry();
    for label in [
        "Investment Banking",
        "Asset Management",
        "FinTech",
        "Insurance",
        "Payments",
    ] {
        let selected = registry.select_for(&organization(label)).expect("profile");
        assert_eq!(selected.name(), FINANCIAL_SERVICES_PROFILE, "{label}");
    }
    for label in ["Software", "Healthcare", "Fine dining"] {
        let selected = registry.select_for(&organization(label)).expect("profile");
        assert_eq!(selected.name(), GENERAL_PROFILE, "{label}");
    }
    assert_eq!(detect_vertical(&EvidenceBundle::empty()), Vertical::General);
}

#[test]
fn selection_falls_back_when_vertical_unregistered() {
    let general = ProfileBuilder::new("only_general", Vertical::General)
        .evaluator(builtin(ComponentKind::TechHiring))
        .weight(ComponentKind::TechHiring, 1.0)
        .build()
        .expect("valid profile");
    let registry = RegistryBuilder::new()
        .register(general)
        .expect("registered")
        .build();
    let selected = registry
        .select_for(&organization("Retail Banking"))
        .expect("falls back");
    assert_eq!(selected.name(), "only_general");
}
