//! Built-in industry profiles.
//!
//! Three profiles ship with the crate: the two industry-keyed verticals and
//! the early fixed-formula revision. All coefficients live in the params
//! structs' `Default` impls so config-file overrides only name what changes.

use super::{
    AccountingParams, FormulaSet, IndustryProfile, LegacyParams, MetricScale, MetricSpec,
    PropertyParams, UnitKind,
};

fn metric(
    key: &str,
    label: &str,
    min: f64,
    max: f64,
    step: f64,
    default: f64,
    unit: UnitKind,
    scale: MetricScale,
) -> MetricSpec {
    MetricSpec {
        key: key.to_string(),
        label: label.to_string(),
        min,
        max,
        step,
        default,
        unit,
        scale,
    }
}

pub fn accounting_profile() -> IndustryProfile {
    IndustryProfile {
        key: "accounting".to_string(),
        name: "Accounting Firms".to_string(),
        title: "Your Firm Details".to_string(),
        metrics: vec![
            metric(
                "employees",
                "Number of Employees",
                1.0,
                100.0,
                1.0,
                10.0,
                UnitKind::Count,
                MetricScale::Linear,
            ),
            metric(
                "revenue",
                "Annual Revenue",
                500_000.0,
                20_000_000.0,
                100_000.0,
                2_000_000.0,
                UnitKind::Currency,
                MetricScale::Linear,
            ),
            metric(
                "insurance",
                "Current Cyber Insurance (Annual)",
                1_000.0,
                50_000.0,
                500.0,
                5_000.0,
                UnitKind::Currency,
                MetricScale::Linear,
            ),
        ],
        formulas: FormulaSet::Accounting(AccountingParams::default()),
    }
}

pub fn property_profile() -> IndustryProfile {
    IndustryProfile {
        key: "property".to_string(),
        name: "Property Management".to_string(),
        title: "Your Property Details".to_string(),
        metrics: vec![
            metric(
                "buildings",
                "Number of Buildings",
                1.0,
                100.0,
                1.0,
                10.0,
                UnitKind::Count,
                MetricScale::Linear,
            ),
            metric(
                "revenue",
                "Annual Revenue",
                200_000.0,
                15_000_000.0,
                100_000.0,
                2_000_000.0,
                UnitKind::Currency,
                MetricScale::Linear,
            ),
            metric(
                "insurance",
                "Current Cyber Insurance (Annual)",
                1_000.0,
                30_000.0,
                500.0,
                3_000.0,
                UnitKind::Currency,
                MetricScale::Linear,
            ),
            metric(
                "tenants",
                "Number of Tenants",
                10.0,
                2_000.0,
                1.0,
                200.0,
                UnitKind::Count,
                MetricScale::Linear,
            ),
        ],
        formulas: FormulaSet::Property(PropertyParams::default()),
    }
}

/// The first-generation single-industry revision, kept as its own profile so
/// the figures it published stay reproducible bit for bit.
pub fn legacy_profile() -> IndustryProfile {
    IndustryProfile {
        key: "legacy".to_string(),
        name: "Managed Services (Original)".to_string(),
        title: "Your Company Details".to_string(),
        metrics: vec![
            metric(
                "employees",
                "Number of Employees",
                1.0,
                1_000.0,
                1.0,
                50.0,
                UnitKind::Count,
                MetricScale::Log,
            ),
            metric(
                "revenue",
                "Annual Revenue",
                100_000.0,
                500_000_000.0,
                1.0,
                5_000_000.0,
                UnitKind::Currency,
                MetricScale::Log,
            ),
            metric(
                "clients",
                "Number of Clients",
                10.0,
                100_000.0,
                1.0,
                1_000.0,
                UnitKind::Count,
                MetricScale::Log,
            ),
            metric(
                "insurance",
                "Current Cyber Insurance (Annual)",
                100.0,
                500_000.0,
                1.0,
                10_000.0,
                UnitKind::Currency,
                MetricScale::Log,
            ),
            metric(
                "it_spend",
                "IT Spend (% of Revenue)",
                1.0,
                15.0,
                0.5,
                5.0,
                UnitKind::Percent,
                MetricScale::Linear,
            ),
        ],
        formulas: FormulaSet::Legacy(LegacyParams::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_validate() {
        for profile in [accounting_profile(), property_profile(), legacy_profile()] {
            profile
                .validate()
                .unwrap_or_else(|e| panic!("profile '{}' invalid: {}", profile.key, e));
        }
    }

    #[test]
    fn accounting_defaults_match_schema() {
        let profile = accounting_profile();
        let defaults = profile.default_metrics();
        assert_eq!(defaults["employees"], 10.0);
        assert_eq!(defaults["revenue"], 2_000_000.0);
        assert_eq!(defaults["insurance"], 5_000.0);
    }

    #[test]
    fn legacy_log_metrics_have_positive_min() {
        let profile = legacy_profile();
        for spec in &profile.metrics {
            if spec.scale == MetricScale::Log {
                assert!(spec.min > 0.0, "metric '{}'", spec.key);
            }
        }
    }
}
