//! The savings calculation engine.
//!
//! Maps resolved inputs, the posture score, and an industry profile to an
//! itemized savings breakdown plus summary metrics. Pure and synchronous:
//! no I/O, no ambient state, a single pass per call.
//!
//! Each formula family lives in its own module; the dispatch here is the only
//! place that knows which family a profile uses.

mod accounting;
mod legacy;
mod property;

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::aggregate;
use crate::config::InputPolicy;
use crate::errors::CalcError;
use crate::input::{resolve_metrics, MetricValues};
use crate::posture::SecurityControls;
use crate::profile::{FormulaSet, ProfileRegistry};

/// One named monetized benefit category. Values are signed: a negative entry
/// means the product underperforms on that axis and is preserved as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavingsItem {
    pub key: String,
    pub label: String,
    pub value: f64,
}

pub(crate) fn item(key: &str, label: &str, value: f64) -> SavingsItem {
    SavingsItem {
        key: key.to_string(),
        label: label.to_string(),
        value,
    }
}

/// Raw output of one formula family before aggregation.
pub(crate) struct FormulaOutcome {
    pub vendor_annual_cost: f64,
    pub items: Vec<SavingsItem>,
}

/// Full derived breakdown for one set of inputs. Never persisted; recomputed
/// on every input change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavingsBreakdown {
    pub industry: String,
    pub security_score: u8,
    pub vendor_annual_cost: f64,
    pub items: Vector<SavingsItem>,
    pub total_gross_savings: f64,
    pub net_savings: f64,
    pub roi_percent: f64,
    /// `None` signals "no payback": net savings is non-positive, or a
    /// division guard tripped. Never a number in those cases.
    pub payback_months: Option<f64>,
}

impl SavingsBreakdown {
    /// Safe sentinel breakdown returned by the lenient entry point on error.
    pub fn zeroed(industry: &str) -> Self {
        Self {
            industry: industry.to_string(),
            security_score: 0,
            vendor_annual_cost: 0.0,
            items: Vector::new(),
            total_gross_savings: 0.0,
            net_savings: 0.0,
            roi_percent: 0.0,
            payback_months: None,
        }
    }
}

/// Posture reduction factor, clamped so derived probabilities stay in [0, 1].
pub(crate) fn posture_reduction(score: u8, per_control: f64) -> f64 {
    (f64::from(score) * per_control).min(1.0)
}

/// Residual incident probability after applying the posture reduction.
pub(crate) fn residual_probability(base: f64, score: u8, per_control: f64) -> f64 {
    (base * (1.0 - posture_reduction(score, per_control))).clamp(0.0, 1.0)
}

/// Sole entry point: resolve inputs, score posture, run the profile's formula
/// family, and aggregate.
pub fn compute_breakdown_with_policy(
    registry: &ProfileRegistry,
    industry: &str,
    metrics: &BTreeMap<String, f64>,
    controls: &SecurityControls,
    policy: InputPolicy,
) -> Result<SavingsBreakdown, CalcError> {
    let profile = registry.get(industry)?;
    let values = resolve_metrics(profile, metrics, policy)?;
    let score = controls.score();
    log::debug!(
        "computing breakdown: industry={} score={} controls={:?}",
        profile.key,
        score,
        controls.enabled_keys()
    );

    let outcome = evaluate(&profile.formulas, &values, controls, score);
    let summary = aggregate::summarize(outcome.vendor_annual_cost, &outcome.items);

    Ok(SavingsBreakdown {
        industry: profile.key.clone(),
        security_score: score,
        vendor_annual_cost: outcome.vendor_annual_cost,
        items: outcome.items.into_iter().collect(),
        total_gross_savings: summary.total_gross_savings,
        net_savings: summary.net_savings,
        roi_percent: summary.roi_percent,
        payback_months: summary.payback_months,
    })
}

/// [`compute_breakdown_with_policy`] under the default clamping policy.
pub fn compute_breakdown(
    registry: &ProfileRegistry,
    industry: &str,
    metrics: &BTreeMap<String, f64>,
    controls: &SecurityControls,
) -> Result<SavingsBreakdown, CalcError> {
    compute_breakdown_with_policy(registry, industry, metrics, controls, InputPolicy::Clamp)
}

/// Entry point for hosts that must never fail: on any error, returns the
/// zeroed sentinel breakdown alongside the condition.
pub fn compute_breakdown_lenient(
    registry: &ProfileRegistry,
    industry: &str,
    metrics: &BTreeMap<String, f64>,
    controls: &SecurityControls,
) -> (SavingsBreakdown, Option<CalcError>) {
    match compute_breakdown(registry, industry, metrics, controls) {
        Ok(breakdown) => (breakdown, None),
        Err(err) => {
            log::warn!("breakdown computation failed: {}", err);
            (SavingsBreakdown::zeroed(industry), Some(err))
        }
    }
}

fn evaluate(
    formulas: &FormulaSet,
    values: &MetricValues,
    controls: &SecurityControls,
    score: u8,
) -> FormulaOutcome {
    match formulas {
        FormulaSet::Accounting(params) => accounting::evaluate(params, values, score),
        FormulaSet::Property(params) => property::evaluate(params, values, score),
        FormulaSet::Legacy(params) => legacy::evaluate(params, values, controls, score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::default_registry;

    #[test]
    fn posture_reduction_clamps_at_one() {
        assert!((posture_reduction(6, 0.10) - 0.6).abs() < 1e-12);
        assert_eq!(posture_reduction(6, 0.25), 1.0);
    }

    #[test]
    fn residual_probability_stays_in_unit_interval() {
        for score in 0..=SecurityControls::MAX_SCORE {
            let p = residual_probability(0.43, score, 0.08);
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn unknown_industry_is_rejected() {
        let err = compute_breakdown(
            default_registry(),
            "healthcare",
            &BTreeMap::new(),
            &SecurityControls::default(),
        )
        .unwrap_err();
        assert_eq!(err, CalcError::unknown_industry("healthcare"));
    }

    #[test]
    fn lenient_entry_point_returns_zeroed_sentinel() {
        let (breakdown, err) = compute_breakdown_lenient(
            default_registry(),
            "healthcare",
            &BTreeMap::new(),
            &SecurityControls::default(),
        );
        assert!(err.is_some());
        assert_eq!(breakdown.vendor_annual_cost, 0.0);
        assert_eq!(breakdown.roi_percent, 0.0);
        assert!(breakdown.items.is_empty());
        assert!(breakdown.payback_months.is_none());
    }

    #[test]
    fn defaults_produce_a_full_breakdown() {
        let breakdown = compute_breakdown(
            default_registry(),
            "accounting",
            &BTreeMap::new(),
            &SecurityControls::default(),
        )
        .unwrap();
        assert_eq!(breakdown.items.len(), 6);
        assert!(breakdown.vendor_annual_cost > 0.0);
        let total: f64 = breakdown.items.iter().map(|i| i.value).sum();
        assert!((breakdown.total_gross_savings - total).abs() < 1e-9);
        assert!(
            (breakdown.net_savings - (breakdown.total_gross_savings - breakdown.vendor_annual_cost))
                .abs()
                < 1e-9
        );
    }
}
