//! Log-scale slider mapping.
//!
//! The core never renders a slider; this is the compatibility interface an
//! external input widget uses so wide-range metrics (revenue spanning $100K
//! to $500M) get usable resolution. Positions run 0..=1000 and values round
//! to whole units so both directions stay interchangeable with the widget.

use crate::errors::CalcError;
use crate::profile::{MetricScale, MetricSpec};

/// Mapping between slider positions and metric values on a log10 scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogScale {
    min: f64,
    max: f64,
}

impl LogScale {
    /// Number of discrete slider steps.
    pub const STEPS: u32 = 1_000;

    pub fn new(min: f64, max: f64) -> Result<Self, CalcError> {
        if min <= 0.0 {
            return Err(CalcError::validation(format!(
                "log scale requires min > 0, got {}",
                min
            )));
        }
        if max <= min {
            return Err(CalcError::validation(format!(
                "log scale requires max > min, got [{}, {}]",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Scale for a metric spec, if the metric is log-scaled.
    pub fn for_metric(spec: &MetricSpec) -> Option<Self> {
        (spec.scale == MetricScale::Log)
            .then(|| Self::new(spec.min, spec.max).ok())
            .flatten()
    }

    /// Slider position for a value, clamped into `0..=1000`.
    pub fn to_position(&self, value: f64) -> u32 {
        let value = value.clamp(self.min, self.max);
        let min_log = self.min.log10();
        let max_log = self.max.log10();
        let ratio = (value.log10() - min_log) / (max_log - min_log);
        (ratio * f64::from(Self::STEPS)).round() as u32
    }

    /// Value at a slider position, rounded to a whole unit.
    pub fn from_position(&self, position: u32) -> f64 {
        let position = position.min(Self::STEPS);
        let min_log = self.min.log10();
        let max_log = self.max.log10();
        let value_log = min_log + f64::from(position) / f64::from(Self::STEPS) * (max_log - min_log);
        10f64.powf(value_log).round()
    }
}
