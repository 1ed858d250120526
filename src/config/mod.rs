//! Configuration: input policy and profile overrides.
//!
//! A `.roimap.toml` can switch the out-of-range policy, override any formula
//! coefficient of a built-in profile, or register an additional vertical that
//! reuses an existing formula family. Overrides that fail validation are
//! dropped with a warning rather than aborting (bad config must never take
//! the estimator down).

mod loader;

pub use loader::{load_config, load_config_from, parse_and_validate_config};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profile::{FormulaSet, IndustryProfile, MetricSpec, ProfileRegistry};

/// What to do with metric values outside their declared bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Pull the value into `[min, max]`.
    #[default]
    Clamp,
    /// Reject with `OutOfRangeInput`.
    Strict,
}

/// Top-level configuration file shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoimapConfig {
    pub policy: InputPolicy,
    pub profiles: BTreeMap<String, ProfileOverride>,
}

/// Partial profile definition: fields present here win over the built-in
/// profile with the same key. A new key must supply metrics and formulas.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOverride {
    pub name: Option<String>,
    pub title: Option<String>,
    pub metrics: Option<Vec<MetricSpec>>,
    pub formulas: Option<FormulaSet>,
}

impl ProfileOverride {
    /// Apply this override on top of an existing profile.
    pub fn apply(self, base: IndustryProfile) -> IndustryProfile {
        IndustryProfile {
            key: base.key,
            name: self.name.unwrap_or(base.name),
            title: self.title.unwrap_or(base.title),
            metrics: self.metrics.unwrap_or(base.metrics),
            formulas: self.formulas.unwrap_or(base.formulas),
        }
    }

    /// Build a standalone profile for a key with no built-in counterpart.
    /// Requires metrics and formulas; labels default to the key.
    pub fn into_profile(self, key: &str) -> Option<IndustryProfile> {
        let metrics = self.metrics?;
        let formulas = self.formulas?;
        let name = self.name.unwrap_or_else(|| key.to_string());
        let title = self.title.unwrap_or_else(|| name.clone());
        Some(IndustryProfile {
            key: key.to_string(),
            name,
            title,
            metrics,
            formulas,
        })
    }
}

impl RoimapConfig {
    /// Built-in registry with this config's overrides applied.
    pub fn build_registry(&self) -> ProfileRegistry {
        let mut registry = ProfileRegistry::builtin();
        for (key, override_) in &self.profiles {
            let candidate = match registry.get(key) {
                Ok(base) => Some(override_.clone().apply(base.clone())),
                Err(_) => override_.clone().into_profile(key),
            };
            match candidate {
                Some(profile) => match profile.validate() {
                    Ok(()) => registry.insert(profile),
                    Err(e) => {
                        eprintln!(
                            "Warning: invalid profile override '{}': {}. Ignoring it.",
                            key, e
                        );
                    }
                },
                None => {
                    eprintln!(
                        "Warning: profile '{}' is not built in and the override does not \
                         define metrics and formulas. Ignoring it.",
                        key
                    );
                }
            }
        }
        registry
    }
}
