//! Industry profiles: input schemas, risk constants, and pricing data.
//!
//! A profile bundles everything specific to one customer vertical. Formula
//! parameters are plain serde data so a `.roimap.toml` can override any
//! coefficient without code changes; per-industry behavior that earlier
//! revisions kept as free-form callables is data here (tiered price tables,
//! affine hour functions, piecewise-linear cost tables) dispatched by the
//! tagged [`FormulaSet`] variant.

mod builtin;
mod registry;

pub use builtin::{accounting_profile, legacy_profile, property_profile};
pub use registry::{default_registry, ProfileRegistry};

use serde::{Deserialize, Serialize};

/// What kind of quantity a metric measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Count,
    Currency,
    Percent,
}

/// How an external slider should map positions to values for this metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricScale {
    Linear,
    Log,
}

fn default_scale() -> MetricScale {
    MetricScale::Linear
}

fn default_step() -> f64 {
    1.0
}

/// Schema for one input field: bounds, default, unit, and slider scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    pub key: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_step")]
    pub step: f64,
    pub default: f64,
    pub unit: UnitKind,
    #[serde(default = "default_scale")]
    pub scale: MetricScale,
}

/// One pricing tier: per-unit monthly price while the unit count stays at or
/// below `up_to`. `up_to = None` marks the open top tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub up_to: Option<f64>,
    pub monthly: f64,
}

/// Tiered per-unit monthly pricing, a step function of the unit count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub tiers: Vec<PriceTier>,
}

impl Pricing {
    pub fn flat(monthly: f64) -> Self {
        Self {
            tiers: vec![PriceTier {
                up_to: None,
                monthly,
            }],
        }
    }

    /// Per-unit monthly price for the given unit count. The step between
    /// tiers is exact: a count equal to `up_to` still belongs to that tier.
    pub fn monthly_price(&self, units: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| tier.up_to.is_none_or(|cap| units <= cap))
            .map(|tier| tier.monthly)
            .unwrap_or(0.0)
    }
}

/// Affine size-to-quantity function: `base + per_unit * size`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Affine {
    pub base: f64,
    pub per_unit: f64,
}

impl Affine {
    pub fn eval(&self, size: f64) -> f64 {
        self.base + self.per_unit * size
    }
}

/// Piecewise-linear table keyed on an input size, clamped to the end values
/// outside the covered range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseLinear {
    /// `(x, y)` knots in strictly increasing `x` order.
    pub points: Vec<(f64, f64)>,
}

impl PiecewiseLinear {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn eval(&self, x: f64) -> f64 {
        let Some(&(first_x, first_y)) = self.points.first() else {
            return 0.0;
        };
        if x <= first_x {
            return first_y;
        }
        for window in self.points.windows(2) {
            let (x0, y0) = window[0];
            let (x1, y1) = window[1];
            if x <= x1 {
                let ratio = (x - x0) / (x1 - x0);
                return y0 + ratio * (y1 - y0);
            }
        }
        self.points.last().map(|&(_, y)| y).unwrap_or(0.0)
    }
}

/// The formula family for one vertical, tagged so profiles stay plain data.
///
/// Adding an industry that reuses an existing family is a data change only;
/// a genuinely new formula shape adds a variant and one calculator module.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum FormulaSet {
    Accounting(AccountingParams),
    Property(PropertyParams),
    Legacy(LegacyParams),
}

impl FormulaSet {
    /// Check that every probability-like coefficient is inside `[0, 1]`.
    pub fn validate(&self) -> Result<(), String> {
        let check = |name: &str, value: f64| -> Result<(), String> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(format!("{} must be between 0.0 and 1.0, got {}", name, value))
            }
        };
        match self {
            Self::Accounting(p) => {
                check("base_breach_prob", p.base_breach_prob)?;
                check("breach_reduction_per_control", p.breach_reduction_per_control)?;
                check("vendor_breach_prob", p.vendor_breach_prob)?;
                check("base_bec_prob", p.base_bec_prob)?;
                check("bec_reduction_per_control", p.bec_reduction_per_control)?;
                check("vendor_bec_prob", p.vendor_bec_prob)?;
                check("insurance_reduction_floor", p.insurance_reduction_floor)?;
                check("insurance_reduction_cap", p.insurance_reduction_cap)?;
            }
            Self::Property(p) => {
                check("base_breach_prob", p.base_breach_prob)?;
                check("breach_reduction_per_control", p.breach_reduction_per_control)?;
                check("vendor_breach_prob", p.vendor_breach_prob)?;
                check("base_smart_building_prob", p.base_smart_building_prob)?;
                check("smart_reduction_per_control", p.smart_reduction_per_control)?;
                check("vendor_smart_prob", p.vendor_smart_prob)?;
                check("base_vendor_prob", p.base_vendor_prob)?;
                check("vendor_reduction_per_control", p.vendor_reduction_per_control)?;
                check("vendor_residual_prob", p.vendor_residual_prob)?;
                check("insurance_reduction_floor", p.insurance_reduction_floor)?;
                check("insurance_reduction_cap", p.insurance_reduction_cap)?;
            }
            Self::Legacy(p) => {
                check("base_breach_prob", p.base_breach_prob)?;
                check("risk_reduction_per_control", p.risk_reduction_per_control)?;
                check("vendor_residual_prob", p.vendor_residual_prob)?;
                check("bec_prob_without_mfa", p.bec_prob_without_mfa)?;
                check("bec_prob_with_mfa", p.bec_prob_with_mfa)?;
                check("vendor_bec_prob", p.vendor_bec_prob)?;
                check("insurance_base_reduction", p.insurance_base_reduction)?;
            }
        }
        Ok(())
    }
}

/// Coefficients for the accounting-firm formula family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountingParams {
    pub base_breach_prob: f64,
    pub breach_reduction_per_control: f64,
    pub vendor_breach_prob: f64,
    /// Incident cost is `revenue * share`, capped.
    pub incident_cost_revenue_share: f64,
    pub incident_cost_cap: f64,
    pub base_bec_prob: f64,
    pub bec_reduction_per_control: f64,
    pub vendor_bec_prob: f64,
    pub bec_cost: f64,
    /// Insurance reduction rate grows with the posture gap: fewer controls
    /// leave more room to improve, so the carrier discount is larger.
    pub insurance_reduction_per_gap: f64,
    pub insurance_reduction_floor: f64,
    pub insurance_reduction_cap: f64,
    /// Hourly downtime cost is `revenue * share / 2080`, clamped.
    pub downtime_hourly_revenue_share: f64,
    pub downtime_hourly_floor: f64,
    pub downtime_hourly_cap: f64,
    pub downtime_hours_prevented: Affine,
    pub downtime_score_divisor: f64,
    pub compliance_hours: Affine,
    pub compliance_hourly_rate: f64,
    /// Efficiency gain steps down once the score reaches the threshold.
    pub compliance_score_threshold: u8,
    pub compliance_gain_low_posture: f64,
    pub compliance_gain_high_posture: f64,
    pub it_spend_revenue_share: f64,
    pub it_optimization_rate: f64,
    pub it_score_divisor: f64,
    pub pricing: Pricing,
}

impl Default for AccountingParams {
    fn default() -> Self {
        Self {
            base_breach_prob: 0.30,
            breach_reduction_per_control: 0.10,
            vendor_breach_prob: 0.05,
            incident_cost_revenue_share: 0.25,
            incident_cost_cap: 500_000.0,
            base_bec_prob: 0.35,
            bec_reduction_per_control: 0.12,
            vendor_bec_prob: 0.08,
            bec_cost: 129_000.0,
            insurance_reduction_per_gap: 0.04,
            insurance_reduction_floor: 0.10,
            insurance_reduction_cap: 0.25,
            downtime_hourly_revenue_share: 0.005,
            downtime_hourly_floor: 3_000.0,
            downtime_hourly_cap: 10_000.0,
            downtime_hours_prevented: Affine {
                base: 20.0,
                per_unit: 0.5,
            },
            downtime_score_divisor: 12.0,
            compliance_hours: Affine {
                base: 0.0,
                per_unit: 5.0,
            },
            compliance_hourly_rate: 75.0,
            compliance_score_threshold: 4,
            compliance_gain_low_posture: 0.7,
            compliance_gain_high_posture: 0.3,
            it_spend_revenue_share: 0.038,
            it_optimization_rate: 0.15,
            it_score_divisor: 10.0,
            pricing: Pricing {
                tiers: vec![
                    PriceTier {
                        up_to: Some(20.0),
                        monthly: 150.0,
                    },
                    PriceTier {
                        up_to: None,
                        monthly: 135.0,
                    },
                ],
            },
        }
    }
}

/// Coefficients for the property-management formula family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyParams {
    pub insurance_reduction_per_gap: f64,
    pub insurance_reduction_floor: f64,
    pub insurance_reduction_cap: f64,
    pub downtime_hours_prevented: Affine,
    pub downtime_score_divisor: f64,
    pub downtime_per_minute: f64,
    pub base_breach_prob: f64,
    pub breach_reduction_per_control: f64,
    pub vendor_breach_prob: f64,
    pub breach_cost: f64,
    pub base_smart_building_prob: f64,
    pub smart_reduction_per_control: f64,
    pub vendor_smart_prob: f64,
    pub smart_building_cost: f64,
    pub base_vendor_prob: f64,
    pub vendor_reduction_per_control: f64,
    pub vendor_residual_prob: f64,
    pub vendor_incident_cost: f64,
    /// Vendor exposure scales with portfolio size: `buildings / divisor`.
    pub vendor_exposure_divisor: f64,
    pub compliance_hours: Affine,
    pub compliance_hourly_rate: f64,
    pub compliance_score_threshold: u8,
    pub compliance_gain_low_posture: f64,
    pub compliance_gain_high_posture: f64,
    pub tenant_value_per_tenant: f64,
    pub tenant_score_divisor: f64,
    /// Billable users per building: `max(1, ceil(buildings / divisor))`.
    pub users_per_building_divisor: f64,
    pub pricing: Pricing,
}

impl Default for PropertyParams {
    fn default() -> Self {
        Self {
            insurance_reduction_per_gap: 0.045,
            insurance_reduction_floor: 0.10,
            insurance_reduction_cap: 0.25,
            downtime_hours_prevented: Affine {
                base: 15.0,
                per_unit: 2.0,
            },
            downtime_score_divisor: 10.0,
            downtime_per_minute: 427.0,
            base_breach_prob: 0.43,
            breach_reduction_per_control: 0.08,
            vendor_breach_prob: 0.06,
            breach_cost: 680_000.0,
            base_smart_building_prob: 0.20,
            smart_reduction_per_control: 0.10,
            vendor_smart_prob: 0.03,
            smart_building_cost: 500_000.0,
            base_vendor_prob: 0.30,
            vendor_reduction_per_control: 0.08,
            vendor_residual_prob: 0.05,
            vendor_incident_cost: 250_000.0,
            vendor_exposure_divisor: 50.0,
            compliance_hours: Affine {
                base: 0.0,
                per_unit: 10.0,
            },
            compliance_hourly_rate: 85.0,
            compliance_score_threshold: 3,
            compliance_gain_low_posture: 0.65,
            compliance_gain_high_posture: 0.25,
            tenant_value_per_tenant: 50.0,
            tenant_score_divisor: 8.0,
            users_per_building_divisor: 10.0,
            pricing: Pricing {
                tiers: vec![
                    PriceTier {
                        up_to: Some(10.0),
                        monthly: 200.0,
                    },
                    PriceTier {
                        up_to: Some(30.0),
                        monthly: 275.0,
                    },
                    PriceTier {
                        up_to: None,
                        monthly: 375.0,
                    },
                ],
            },
        }
    }
}

/// Coefficients for the early fixed-formula revision, carried as its own
/// profile rather than silently unified with the industry-keyed families.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyParams {
    pub base_breach_prob: f64,
    pub risk_reduction_per_control: f64,
    pub vendor_residual_prob: f64,
    pub insurance_base_reduction: f64,
    pub insurance_reduction_per_control: f64,
    pub breach_cost_by_employees: PiecewiseLinear,
    pub ransom_payment_by_revenue: PiecewiseLinear,
    pub recovery_cost_by_employees: PiecewiseLinear,
    pub ransomware_involvement_by_employees: PiecewiseLinear,
    pub bec_prob_without_mfa: f64,
    pub bec_prob_with_mfa: f64,
    pub vendor_bec_prob: f64,
    pub bec_cost: f64,
    pub compliance_hours_per_employee: f64,
    pub compliance_clients_divisor: f64,
    pub compliance_hourly_rate: f64,
    pub compliance_base_gain: f64,
    pub compliance_gain_per_control: f64,
    pub it_vendor_overhead_share: f64,
    pub it_consolidation_efficiency: f64,
    pub downtime_days: f64,
    pub working_days_per_year: f64,
    pub churn_rate: f64,
    pub penalty_cost: f64,
    pub pricing: Pricing,
}

impl Default for LegacyParams {
    fn default() -> Self {
        Self {
            base_breach_prob: 0.15,
            risk_reduction_per_control: 0.10,
            vendor_residual_prob: 0.02,
            insurance_base_reduction: 0.30,
            insurance_reduction_per_control: 0.025,
            breach_cost_by_employees: PiecewiseLinear::new(vec![
                (100.0, 46_000.0),
                (400.0, 97_200.0),
                (700.0, 150_000.0),
            ]),
            ransom_payment_by_revenue: PiecewiseLinear::new(vec![
                (5_000_000.0, 53_155.0),
                (20_000_000.0, 106_310.0),
                (100_000_000.0, 169_364.0),
                (500_000_000.0, 1_000_000.0),
            ]),
            recovery_cost_by_employees: PiecewiseLinear::new(vec![
                (50.0, 319_268.0),
                (150.0, 638_536.0),
                (350.0, 1_078_763.0),
                (750.0, 1_570_927.0),
            ]),
            ransomware_involvement_by_employees: PiecewiseLinear::new(vec![
                (100.0, 0.88),
                (500.0, 0.39),
            ]),
            bec_prob_without_mfa: 0.23,
            bec_prob_with_mfa: 0.01,
            vendor_bec_prob: 0.01,
            bec_cost: 129_000.0,
            compliance_hours_per_employee: 40.0,
            compliance_clients_divisor: 20.0,
            compliance_hourly_rate: 250.0,
            compliance_base_gain: 0.60,
            compliance_gain_per_control: 0.05,
            it_vendor_overhead_share: 0.25,
            it_consolidation_efficiency: 0.50,
            downtime_days: 18.0,
            working_days_per_year: 260.0,
            churn_rate: 0.35,
            penalty_cost: 60_000.0,
            pricing: Pricing::flat(250.0),
        }
    }
}

/// One customer vertical: labels, input schema, and formula coefficients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub key: String,
    pub name: String,
    pub title: String,
    pub metrics: Vec<MetricSpec>,
    pub formulas: FormulaSet,
}

impl IndustryProfile {
    /// Look up a metric spec by key.
    pub fn metric(&self, key: &str) -> Option<&MetricSpec> {
        self.metrics.iter().find(|spec| spec.key == key)
    }

    /// Default value for every metric, in schema order.
    pub fn default_metrics(&self) -> std::collections::BTreeMap<String, f64> {
        self.metrics
            .iter()
            .map(|spec| (spec.key.clone(), spec.default))
            .collect()
    }

    pub fn summary(&self) -> IndustrySummary {
        IndustrySummary {
            key: self.key.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            metrics: self.metrics.clone(),
        }
    }

    /// Validate schema bounds and formula coefficients.
    pub fn validate(&self) -> Result<(), String> {
        for spec in &self.metrics {
            if spec.min > spec.max {
                return Err(format!(
                    "metric '{}': min {} exceeds max {}",
                    spec.key, spec.min, spec.max
                ));
            }
            if spec.default < spec.min || spec.default > spec.max {
                return Err(format!(
                    "metric '{}': default {} outside [{}, {}]",
                    spec.key, spec.default, spec.min, spec.max
                ));
            }
            if spec.scale == MetricScale::Log && spec.min <= 0.0 {
                return Err(format!(
                    "metric '{}': log scale requires min > 0",
                    spec.key
                ));
            }
        }
        self.formulas.validate()
    }
}

/// Schema summary handed to external input renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndustrySummary {
    pub key: String,
    pub name: String,
    pub title: String,
    pub metrics: Vec<MetricSpec>,
}
