//! Session input: raw metric values resolved against a profile schema.
//!
//! The engine accepts whatever the caller hands it and normalizes here.
//! Missing metrics take the profile default, unknown keys are ignored with a
//! warning, and out-of-range values are clamped (default) or rejected (strict
//! policy). One policy applies uniformly to every metric.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculator::{compute_breakdown_with_policy, SavingsBreakdown};
use crate::config::InputPolicy;
use crate::errors::CalcError;
use crate::posture::SecurityControls;
use crate::profile::{IndustryProfile, ProfileRegistry};

/// Metric values resolved against a profile schema: every metric the schema
/// declares is present and inside its bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricValues(BTreeMap<String, f64>);

impl MetricValues {
    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Resolve raw metric values against the profile schema under the given
/// policy.
pub fn resolve_metrics(
    profile: &IndustryProfile,
    raw: &BTreeMap<String, f64>,
    policy: InputPolicy,
) -> Result<MetricValues, CalcError> {
    for key in raw.keys() {
        if profile.metric(key).is_none() {
            log::warn!(
                "ignoring unknown metric '{}' for industry '{}'",
                key,
                profile.key
            );
        }
    }

    let mut resolved = BTreeMap::new();
    for spec in &profile.metrics {
        let supplied = raw.get(&spec.key).copied();
        let value = match supplied {
            Some(v) if v.is_finite() => v,
            Some(v) => {
                log::warn!(
                    "metric '{}' value {} is not finite, using default {}",
                    spec.key,
                    v,
                    spec.default
                );
                spec.default
            }
            None => spec.default,
        };
        let value = match policy {
            InputPolicy::Clamp => value.clamp(spec.min, spec.max),
            InputPolicy::Strict => {
                if value < spec.min || value > spec.max {
                    return Err(CalcError::out_of_range(&spec.key, value, spec.min, spec.max));
                }
                value
            }
        };
        resolved.insert(spec.key.clone(), value);
    }
    Ok(MetricValues(resolved))
}

/// One user session's inputs. Mutations are plain field writes; every
/// computation is a full pass over the current state, no incremental diffing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub industry: String,
    pub metrics: BTreeMap<String, f64>,
    pub controls: SecurityControls,
}

impl CalculatorInput {
    /// New session seeded with the profile's default metric values.
    pub fn with_defaults(profile: &IndustryProfile) -> Self {
        Self {
            industry: profile.key.clone(),
            metrics: profile.default_metrics(),
            controls: SecurityControls::default(),
        }
    }

    pub fn set_metric(&mut self, key: impl Into<String>, value: f64) {
        self.metrics.insert(key.into(), value);
    }

    /// Recompute the full breakdown from the current state.
    pub fn compute(
        &self,
        registry: &ProfileRegistry,
        policy: InputPolicy,
    ) -> Result<SavingsBreakdown, CalcError> {
        compute_breakdown_with_policy(registry, &self.industry, &self.metrics, &self.controls, policy)
    }
}
