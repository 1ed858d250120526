//! Scenario tests pinning the published figures of each formula family.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use roimap::{
    compute_breakdown, compute_breakdown_lenient, default_registry, PaybackBucket,
    SavingsBreakdown, SecurityControls,
};

fn metrics(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn item_value(breakdown: &SavingsBreakdown, key: &str) -> f64 {
    breakdown
        .items
        .iter()
        .find(|item| item.key == key)
        .unwrap_or_else(|| panic!("missing item '{}'", key))
        .value
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn legacy_scenario_reproduces_published_figures() {
    let breakdown = compute_breakdown(
        default_registry(),
        "legacy",
        &metrics(&[
            ("employees", 50.0),
            ("revenue", 5_000_000.0),
            ("clients", 1_000.0),
            ("insurance", 10_000.0),
            ("it_spend", 5.0),
        ]),
        &SecurityControls::default(),
    )
    .unwrap();

    assert_eq!(breakdown.security_score, 0);
    assert_close(breakdown.vendor_annual_cost, 150_000.0);

    // insurance reduction rate at score 0 is 0.30
    assert_close(item_value(&breakdown, "insurance"), 3_000.0);

    // breach prob 0.15, cost tier for <=100 employees is 46,000
    assert_close(item_value(&breakdown, "breach"), (0.15 - 0.02) * 46_000.0);
    assert_close(item_value(&breakdown, "breach"), 5_980.0);

    // ransomware: involvement 0.88, ransom 53,155, recovery 319,268
    let current_ransomware = 0.15 * 0.88;
    assert_close(
        item_value(&breakdown, "ransomware"),
        (current_ransomware - 0.02) * (53_155.0 + 319_268.0),
    );

    // BEC without MFA: (0.23 - 0.01) * 129,000
    assert_close(item_value(&breakdown, "bec"), 28_380.0);

    // compliance: (50*40 + 1000/20) hours * $250 * 0.60
    assert_close(item_value(&breakdown, "compliance"), 2_050.0 * 250.0 * 0.60);

    // IT: 5M * 5% * 0.25 * 0.50
    assert_close(item_value(&breakdown, "it"), 31_250.0);

    // downtime: (0.132 - 0.02) * 18 days * (5M / 260)
    assert_close(
        item_value(&breakdown, "downtime"),
        (current_ransomware - 0.02) * 18.0 * (5_000_000.0 / 260.0),
    );

    // retention: 0.35 * 5M * (0.15 - 0.02)
    assert_close(
        item_value(&breakdown, "retention"),
        0.35 * 5_000_000.0 * (0.15 - 0.02),
    );

    // penalty: 0.15 * 60,000
    assert_close(item_value(&breakdown, "penalty"), 9_000.0);

    assert_eq!(breakdown.items.len(), 9);
}

#[test]
fn legacy_mfa_flag_alone_collapses_bec_savings() {
    let registry = default_registry();
    let inputs = metrics(&[("employees", 50.0), ("revenue", 5_000_000.0)]);

    let with_mfa = compute_breakdown(
        registry,
        "legacy",
        &inputs,
        &SecurityControls {
            mfa: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_close(item_value(&with_mfa, "bec"), 0.0);

    let without_mfa = compute_breakdown(
        registry,
        "legacy",
        &inputs,
        &SecurityControls {
            backup: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_close(item_value(&without_mfa, "bec"), 28_380.0);
}

#[test]
fn accounting_scenario_matches_hand_computed_breakdown() {
    let breakdown = compute_breakdown(
        default_registry(),
        "accounting",
        &metrics(&[
            ("employees", 10.0),
            ("revenue", 2_000_000.0),
            ("insurance", 5_000.0),
        ]),
        &SecurityControls::default(),
    )
    .unwrap();

    // 10 employees * $150/month * 12
    assert_close(breakdown.vendor_annual_cost, 18_000.0);

    // reduction rate (6-0)*0.04 = 0.24, inside the [0.10, 0.25] clamp
    assert_close(item_value(&breakdown, "insurance"), 5_000.0 * 0.24);

    // hourly cost floors at $3,000; 25 hours prevented at score 0
    assert_close(item_value(&breakdown, "downtime"), 3_000.0 * 25.0);

    // (0.30 - 0.05) * min(2M * 0.25, 500K)
    assert_close(item_value(&breakdown, "breach"), 0.25 * 500_000.0);

    // (0.35 - 0.08) * 129,000
    assert_close(item_value(&breakdown, "bec"), 0.27 * 129_000.0);

    // 50 hours * $75 * 0.7
    assert_close(item_value(&breakdown, "compliance"), 2_625.0);

    // 2M * 0.038 * 0.15
    assert_close(item_value(&breakdown, "it"), 11_400.0);

    let expected_gross = 1_200.0 + 75_000.0 + 125_000.0 + 34_830.0 + 2_625.0 + 11_400.0;
    assert_close(breakdown.total_gross_savings, expected_gross);
    assert_close(breakdown.net_savings, expected_gross - 18_000.0);

    // fast payback lands in the plain-months bucket
    let months = breakdown.payback_months.unwrap();
    assert_close(months, 18_000.0 / (expected_gross / 12.0));
    assert!(matches!(
        PaybackBucket::classify(months),
        PaybackBucket::Months(_)
    ));
}

#[test]
fn accounting_full_posture_hits_insurance_reduction_floor() {
    let all_controls = SecurityControls {
        mfa: true,
        edr: true,
        monitoring: true,
        backup: true,
        training: true,
        compliance: true,
    };
    let breakdown = compute_breakdown(
        default_registry(),
        "accounting",
        &metrics(&[("insurance", 5_000.0)]),
        &all_controls,
    )
    .unwrap();
    assert_eq!(breakdown.security_score, 6);
    // (6-6)*0.04 = 0 clamps up to the 0.10 floor
    assert_close(item_value(&breakdown, "insurance"), 5_000.0 * 0.10);
}

#[test]
fn property_defaults_match_hand_computed_breakdown() {
    let breakdown = compute_breakdown(
        default_registry(),
        "property",
        &BTreeMap::new(),
        &SecurityControls::default(),
    )
    .unwrap();

    // 10 buildings, 1 user per building, $200 tier
    assert_close(breakdown.vendor_annual_cost, 24_000.0);

    // (6-0)*0.045 = 0.27 clamps down to the 0.25 cap
    assert_close(item_value(&breakdown, "insurance"), 3_000.0 * 0.25);

    // (15 + 10*2) hours * 60 min * $427
    assert_close(item_value(&breakdown, "downtime"), 35.0 * 60.0 * 427.0);

    // (0.43 - 0.06) * 680,000
    assert_close(item_value(&breakdown, "breach"), 0.37 * 680_000.0);

    // (0.20 - 0.03) * 500,000
    assert_close(item_value(&breakdown, "smart_building"), 85_000.0);

    // (0.30 - 0.05) * 250,000 * (10/50)
    assert_close(item_value(&breakdown, "vendor_risk"), 12_500.0);

    // 100 hours * $85 * 0.65
    assert_close(item_value(&breakdown, "compliance"), 5_525.0);

    // 200 tenants * $50
    assert_close(item_value(&breakdown, "tenant_trust"), 10_000.0);

    assert_eq!(breakdown.items.len(), 7);
}

#[test]
fn property_vendor_cost_scales_super_linearly_at_tier_boundary() {
    let registry = default_registry();
    let at_ten = compute_breakdown(
        registry,
        "property",
        &metrics(&[("buildings", 10.0)]),
        &SecurityControls::default(),
    )
    .unwrap();
    // 10 buildings * 1 user each * $200 * 12
    assert_close(at_ten.vendor_annual_cost, 24_000.0);

    let at_eleven = compute_breakdown(
        registry,
        "property",
        &metrics(&[("buildings", 11.0)]),
        &SecurityControls::default(),
    )
    .unwrap();
    // 11 buildings * 2 users each * $275 * 12
    assert_close(at_eleven.vendor_annual_cost, 72_600.0);
}

#[test]
fn out_of_range_metrics_clamp_by_default() {
    let breakdown = compute_breakdown(
        default_registry(),
        "accounting",
        &metrics(&[("employees", 10_000.0)]),
        &SecurityControls::default(),
    )
    .unwrap();
    // 10,000 clamps to the 100-employee schema max, $135 tier
    assert_close(breakdown.vendor_annual_cost, 100.0 * 135.0 * 12.0);
}

#[test]
fn unknown_industry_yields_sentinel_breakdown_via_lenient_entry() {
    let (breakdown, err) = compute_breakdown_lenient(
        default_registry(),
        "healthcare",
        &BTreeMap::new(),
        &SecurityControls::default(),
    );
    assert!(err.unwrap().to_string().contains("healthcare"));
    assert_eq!(breakdown, SavingsBreakdown::zeroed("healthcare"));
}
