//! Property-management formula family.

use super::{item, residual_probability, FormulaOutcome};
use crate::input::MetricValues;
use crate::posture::SecurityControls;
use crate::profile::PropertyParams;

pub(crate) fn evaluate(
    params: &PropertyParams,
    metrics: &MetricValues,
    score: u8,
) -> FormulaOutcome {
    let buildings = metrics.get("buildings");
    let insurance = metrics.get("insurance");
    let tenants = metrics.get("tenants");

    // Billable users grow with portfolio size, so cost scales super-linearly.
    let users_per_building = (buildings / params.users_per_building_divisor).ceil().max(1.0);
    let total_users = buildings * users_per_building;
    let vendor_annual_cost = total_users * params.pricing.monthly_price(buildings) * 12.0;

    let posture_gap = f64::from(SecurityControls::MAX_SCORE - score);
    let insurance_reduction = (posture_gap * params.insurance_reduction_per_gap)
        .clamp(params.insurance_reduction_floor, params.insurance_reduction_cap);
    let insurance_savings = insurance * insurance_reduction;

    let downtime_minutes = params.downtime_hours_prevented.eval(buildings)
        * 60.0
        * (1.0 - f64::from(score) / params.downtime_score_divisor);
    let downtime_savings = downtime_minutes * params.downtime_per_minute;

    let current_breach =
        residual_probability(params.base_breach_prob, score, params.breach_reduction_per_control);
    let breach_savings = (current_breach - params.vendor_breach_prob) * params.breach_cost;

    let current_smart = residual_probability(
        params.base_smart_building_prob,
        score,
        params.smart_reduction_per_control,
    );
    let smart_savings = (current_smart - params.vendor_smart_prob) * params.smart_building_cost;

    let current_vendor =
        residual_probability(params.base_vendor_prob, score, params.vendor_reduction_per_control);
    let vendor_savings = (current_vendor - params.vendor_residual_prob)
        * params.vendor_incident_cost
        * (buildings / params.vendor_exposure_divisor);

    let efficiency_gain = if score < params.compliance_score_threshold {
        params.compliance_gain_low_posture
    } else {
        params.compliance_gain_high_posture
    };
    let compliance_savings =
        params.compliance_hours.eval(buildings) * params.compliance_hourly_rate * efficiency_gain;

    let tenant_savings = tenants
        * params.tenant_value_per_tenant
        * (1.0 - f64::from(score) / params.tenant_score_divisor);

    FormulaOutcome {
        vendor_annual_cost,
        items: vec![
            item("insurance", "Insurance Premium Reduction", insurance_savings),
            item("downtime", "Downtime Prevention", downtime_savings),
            item("breach", "Data Breach Risk Mitigation", breach_savings),
            item("smart_building", "Smart Building Security", smart_savings),
            item("vendor_risk", "Vendor Risk Management", vendor_savings),
            item("compliance", "Compliance & Reporting", compliance_savings),
            item("tenant_trust", "Tenant Trust & Retention", tenant_savings),
        ],
    }
}
