//! Summary metrics over an itemized breakdown.
//!
//! Division guards live here: a zero vendor cost or non-positive gross pins
//! ROI and payback to their sentinels instead of producing infinities.

use serde::{Deserialize, Serialize};

use crate::calculator::SavingsItem;

/// Derived summary for one breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiSummary {
    pub total_gross_savings: f64,
    pub net_savings: f64,
    pub roi_percent: f64,
    pub payback_months: Option<f64>,
}

/// Sum the items, net out the vendor cost, and derive ROI and payback.
pub fn summarize(vendor_annual_cost: f64, items: &[SavingsItem]) -> RoiSummary {
    let total_gross_savings: f64 = items.iter().map(|item| item.value).sum();
    let net_savings = total_gross_savings - vendor_annual_cost;

    let roi_percent = if vendor_annual_cost > 0.0 {
        net_savings / vendor_annual_cost * 100.0
    } else {
        0.0
    };

    let payback_months =
        if net_savings <= 0.0 || total_gross_savings <= 0.0 || vendor_annual_cost <= 0.0 {
            None
        } else {
            Some(vendor_annual_cost / (total_gross_savings / 12.0))
        };

    RoiSummary {
        total_gross_savings,
        net_savings,
        roi_percent,
        payback_months,
    }
}

/// Display bucket for a payback period. The 12/24/120-month boundaries are
/// contract, not styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaybackBucket {
    /// Pays back within a year.
    Months(f64),
    /// Pays back within two years; worth flagging to the prospect.
    WarningMonths(f64),
    /// Pays back within ten years.
    YearsMonths { years: u32, months: u32 },
    /// Longer than ten years.
    TenPlusYears,
}

impl PaybackBucket {
    pub fn classify(months: f64) -> Self {
        if months <= 12.0 {
            Self::Months(months)
        } else if months <= 24.0 {
            Self::WarningMonths(months)
        } else if months <= 120.0 {
            let total = months.round() as u32;
            Self::YearsMonths {
                years: total / 12,
                months: total % 12,
            }
        } else {
            Self::TenPlusYears
        }
    }
}

impl std::fmt::Display for PaybackBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Months(m) | Self::WarningMonths(m) => write!(f, "{:.1} months", m),
            Self::YearsMonths { years, months } => write!(f, "{}y {}m", years, months),
            Self::TenPlusYears => write!(f, "10+ years"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::SavingsItem;

    fn items(values: &[f64]) -> Vec<SavingsItem> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| SavingsItem {
                key: format!("item{}", i),
                label: format!("Item {}", i),
                value,
            })
            .collect()
    }

    #[test]
    fn net_is_gross_minus_cost_exactly() {
        let summary = summarize(10_000.0, &items(&[4_000.0, 8_000.0, -500.0]));
        assert_eq!(summary.total_gross_savings, 11_500.0);
        assert_eq!(summary.net_savings, 1_500.0);
    }

    #[test]
    fn roi_is_zero_when_cost_is_zero() {
        let summary = summarize(0.0, &items(&[5_000.0]));
        assert_eq!(summary.roi_percent, 0.0);
        // zero cost also suppresses payback rather than reporting 0 months
        assert_eq!(summary.payback_months, None);
    }

    #[test]
    fn payback_is_none_when_net_is_non_positive() {
        let summary = summarize(12_000.0, &items(&[12_000.0]));
        assert_eq!(summary.net_savings, 0.0);
        assert_eq!(summary.payback_months, None);

        let summary = summarize(12_000.0, &items(&[3_000.0]));
        assert!(summary.net_savings < 0.0);
        assert_eq!(summary.payback_months, None);
    }

    #[test]
    fn payback_is_cost_over_monthly_gross() {
        let summary = summarize(12_000.0, &items(&[24_000.0]));
        // 12000 / (24000/12) = 6 months
        assert_eq!(summary.payback_months, Some(6.0));
    }

    #[test]
    fn negative_gross_trips_the_division_guard() {
        let summary = summarize(-100.0, &items(&[-5_000.0]));
        assert_eq!(summary.roi_percent, 0.0);
        assert_eq!(summary.payback_months, None);
    }

    #[test]
    fn buckets_are_exact_at_boundaries() {
        assert_eq!(PaybackBucket::classify(12.0), PaybackBucket::Months(12.0));
        assert_eq!(
            PaybackBucket::classify(12.001),
            PaybackBucket::WarningMonths(12.001)
        );
        assert_eq!(
            PaybackBucket::classify(24.0),
            PaybackBucket::WarningMonths(24.0)
        );
        assert_eq!(
            PaybackBucket::classify(24.001),
            PaybackBucket::YearsMonths {
                years: 2,
                months: 0
            }
        );
        assert_eq!(
            PaybackBucket::classify(120.0),
            PaybackBucket::YearsMonths {
                years: 10,
                months: 0
            }
        );
        assert_eq!(PaybackBucket::classify(120.001), PaybackBucket::TenPlusYears);
    }

    #[test]
    fn years_months_split() {
        assert_eq!(
            PaybackBucket::classify(30.0),
            PaybackBucket::YearsMonths {
                years: 2,
                months: 6
            }
        );
        assert_eq!(PaybackBucket::classify(30.0).to_string(), "2y 6m");
    }

    #[test]
    fn display_formats() {
        assert_eq!(PaybackBucket::classify(6.5).to_string(), "6.5 months");
        assert_eq!(PaybackBucket::classify(200.0).to_string(), "10+ years");
    }
}
