//! Security posture scoring.
//!
//! The posture score is the count of enabled controls from a fixed six-entry
//! checklist. Every risk-reduction formula in the calculator keys off this
//! integer, so it lives in its own module with no other dependencies.

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// The fixed security-control checklist.
///
/// Missing flags deserialize to `false`. The `endpoint` alias covers the
/// earlier revision's name for the EDR control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityControls {
    pub mfa: bool,
    #[serde(alias = "endpoint")]
    pub edr: bool,
    pub monitoring: bool,
    pub backup: bool,
    pub training: bool,
    pub compliance: bool,
}

impl SecurityControls {
    /// Maximum attainable posture score.
    pub const MAX_SCORE: u8 = 6;

    /// Recognized control keys, in checklist order.
    pub const KEYS: [&'static str; 6] = [
        "mfa",
        "edr",
        "monitoring",
        "backup",
        "training",
        "compliance",
    ];

    /// Count of enabled controls, always in `0..=6`.
    pub fn score(&self) -> u8 {
        [
            self.mfa,
            self.edr,
            self.monitoring,
            self.backup,
            self.training,
            self.compliance,
        ]
        .iter()
        .filter(|&&enabled| enabled)
        .count() as u8
    }

    /// Build a control set from a list of control keys.
    ///
    /// Accepts `endpoint` as an alias for `edr`. Unknown keys are rejected.
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Result<Self, CalcError> {
        let mut controls = Self::default();
        for key in keys {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            match key {
                "mfa" => controls.mfa = true,
                "edr" | "endpoint" => controls.edr = true,
                "monitoring" => controls.monitoring = true,
                "backup" => controls.backup = true,
                "training" => controls.training = true,
                "compliance" => controls.compliance = true,
                other => {
                    return Err(CalcError::validation(format!(
                        "unknown security control '{}' (expected one of: {})",
                        other,
                        Self::KEYS.join(", ")
                    )))
                }
            }
        }
        Ok(controls)
    }

    /// Enabled control keys, in checklist order.
    pub fn enabled_keys(&self) -> Vec<&'static str> {
        let flags = [
            self.mfa,
            self.edr,
            self.monitoring,
            self.backup,
            self.training,
            self.compliance,
        ];
        Self::KEYS
            .iter()
            .zip(flags)
            .filter_map(|(&key, enabled)| enabled.then_some(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_checklist_scores_zero() {
        assert_eq!(SecurityControls::default().score(), 0);
    }

    #[test]
    fn full_checklist_scores_max() {
        let controls = SecurityControls {
            mfa: true,
            edr: true,
            monitoring: true,
            backup: true,
            training: true,
            compliance: true,
        };
        assert_eq!(controls.score(), SecurityControls::MAX_SCORE);
    }

    #[test]
    fn score_counts_enabled_flags() {
        let controls = SecurityControls {
            mfa: true,
            backup: true,
            training: true,
            ..Default::default()
        };
        assert_eq!(controls.score(), 3);
        assert_eq!(controls.enabled_keys(), vec!["mfa", "backup", "training"]);
    }

    #[test]
    fn from_keys_accepts_endpoint_alias() {
        let controls = SecurityControls::from_keys(["mfa", "endpoint"]).unwrap();
        assert!(controls.mfa);
        assert!(controls.edr);
        assert_eq!(controls.score(), 2);
    }

    #[test]
    fn from_keys_rejects_unknown_control() {
        let err = SecurityControls::from_keys(["firewall"]).unwrap_err();
        assert!(err.to_string().contains("firewall"));
    }

    #[test]
    fn missing_flags_deserialize_to_false() {
        let controls: SecurityControls = serde_json::from_str(r#"{"mfa": true}"#).unwrap();
        assert!(controls.mfa);
        assert!(!controls.monitoring);
        assert_eq!(controls.score(), 1);
    }

    #[test]
    fn endpoint_alias_deserializes_as_edr() {
        let controls: SecurityControls = serde_json::from_str(r#"{"endpoint": true}"#).unwrap();
        assert!(controls.edr);
    }
}
