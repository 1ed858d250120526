//! Accounting-firm formula family.

use super::{item, residual_probability, FormulaOutcome};
use crate::input::MetricValues;
use crate::posture::SecurityControls;
use crate::profile::AccountingParams;

const WORK_HOURS_PER_YEAR: f64 = 2_080.0;

pub(crate) fn evaluate(
    params: &AccountingParams,
    metrics: &MetricValues,
    score: u8,
) -> FormulaOutcome {
    let employees = metrics.get("employees");
    let revenue = metrics.get("revenue");
    let insurance = metrics.get("insurance");

    let vendor_annual_cost = employees * params.pricing.monthly_price(employees) * 12.0;

    // The reduction rate falls as posture improves: a firm with fewer
    // controls has more headroom, so the carrier discount is larger.
    let posture_gap = f64::from(SecurityControls::MAX_SCORE - score);
    let insurance_reduction = (posture_gap * params.insurance_reduction_per_gap)
        .clamp(params.insurance_reduction_floor, params.insurance_reduction_cap);
    let insurance_savings = insurance * insurance_reduction;

    let hourly_downtime_cost = (revenue * params.downtime_hourly_revenue_share
        / WORK_HOURS_PER_YEAR)
        .clamp(params.downtime_hourly_floor, params.downtime_hourly_cap);
    let downtime_hours = params.downtime_hours_prevented.eval(employees)
        * (1.0 - f64::from(score) / params.downtime_score_divisor);
    let downtime_savings = hourly_downtime_cost * downtime_hours;

    let current_breach =
        residual_probability(params.base_breach_prob, score, params.breach_reduction_per_control);
    let incident_cost = (revenue * params.incident_cost_revenue_share).min(params.incident_cost_cap);
    let breach_savings = (current_breach - params.vendor_breach_prob) * incident_cost;

    let current_bec =
        residual_probability(params.base_bec_prob, score, params.bec_reduction_per_control);
    let bec_savings = (current_bec - params.vendor_bec_prob) * params.bec_cost;

    let efficiency_gain = if score < params.compliance_score_threshold {
        params.compliance_gain_low_posture
    } else {
        params.compliance_gain_high_posture
    };
    let compliance_savings =
        params.compliance_hours.eval(employees) * params.compliance_hourly_rate * efficiency_gain;

    let it_savings = revenue
        * params.it_spend_revenue_share
        * params.it_optimization_rate
        * (1.0 - f64::from(score) / params.it_score_divisor);

    FormulaOutcome {
        vendor_annual_cost,
        items: vec![
            item("insurance", "Insurance Premium Reduction", insurance_savings),
            item("downtime", "Downtime Prevention", downtime_savings),
            item("breach", "Data Breach Risk Mitigation", breach_savings),
            item("bec", "BEC/Fraud Prevention", bec_savings),
            item("compliance", "Compliance Efficiency", compliance_savings),
            item("it", "IT Management Optimization", it_savings),
        ],
    }
}
