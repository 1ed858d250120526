//! First-generation fixed-formula revision.
//!
//! Predates the industry-keyed profiles: one formula set, piecewise-linear
//! cost tables by company-size band, and a BEC term keyed on the MFA flag
//! alone rather than the aggregate score. Kept exact so the figures it
//! published remain reproducible.

use super::{item, residual_probability, FormulaOutcome};
use crate::input::MetricValues;
use crate::posture::SecurityControls;
use crate::profile::LegacyParams;

pub(crate) fn evaluate(
    params: &LegacyParams,
    metrics: &MetricValues,
    controls: &SecurityControls,
    score: u8,
) -> FormulaOutcome {
    let employees = metrics.get("employees");
    let revenue = metrics.get("revenue");
    let clients = metrics.get("clients");
    let insurance = metrics.get("insurance");
    let it_spend_percent = metrics.get("it_spend");

    let vendor_annual_cost = employees * params.pricing.monthly_price(employees) * 12.0;

    let insurance_reduction = params.insurance_base_reduction
        - f64::from(score) * params.insurance_reduction_per_control;
    let insurance_savings = insurance * insurance_reduction;

    let current_breach = residual_probability(
        params.base_breach_prob,
        score,
        params.risk_reduction_per_control,
    );
    let breach_savings = (current_breach - params.vendor_residual_prob)
        * params.breach_cost_by_employees.eval(employees);

    let involvement = params.ransomware_involvement_by_employees.eval(employees);
    let current_ransomware = current_breach * involvement;
    let ransomware_cost = params.ransom_payment_by_revenue.eval(revenue)
        + params.recovery_cost_by_employees.eval(employees);
    let ransomware_savings =
        (current_ransomware - params.vendor_residual_prob) * ransomware_cost;

    // BEC keys on the MFA flag alone, not the aggregate score.
    let current_bec = if controls.mfa {
        params.bec_prob_with_mfa
    } else {
        params.bec_prob_without_mfa
    };
    let bec_savings = (current_bec - params.vendor_bec_prob) * params.bec_cost;

    let compliance_hours = employees * params.compliance_hours_per_employee
        + clients / params.compliance_clients_divisor;
    let efficiency_gain =
        params.compliance_base_gain - f64::from(score) * params.compliance_gain_per_control;
    let compliance_savings = compliance_hours * params.compliance_hourly_rate * efficiency_gain;

    let current_it_spend = revenue * (it_spend_percent / 100.0);
    let it_savings = current_it_spend
        * params.it_vendor_overhead_share
        * params.it_consolidation_efficiency;

    let daily_cost = revenue / params.working_days_per_year;
    let downtime_savings =
        (current_ransomware - params.vendor_residual_prob) * params.downtime_days * daily_cost;

    let retention_savings =
        params.churn_rate * revenue * (current_breach - params.vendor_residual_prob);

    let penalty_savings = current_breach * params.penalty_cost;

    FormulaOutcome {
        vendor_annual_cost,
        items: vec![
            item("insurance", "Insurance Premium Reduction", insurance_savings),
            item("breach", "Data Breach Risk Mitigation", breach_savings),
            item("ransomware", "Ransomware Prevention", ransomware_savings),
            item("bec", "BEC/Fraud Prevention", bec_savings),
            item("compliance", "Compliance Efficiency", compliance_savings),
            item("it", "IT Consolidation", it_savings),
            item("downtime", "Downtime Prevention", downtime_savings),
            item("retention", "Client Retention", retention_savings),
            item("penalty", "Regulatory Penalty Avoidance", penalty_savings),
        ],
    }
}
