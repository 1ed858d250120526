// Export modules for library usage
pub mod aggregate;
pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod input;
pub mod io;
pub mod posture;
pub mod profile;
pub mod slider;

// Re-export commonly used types
pub use crate::aggregate::{summarize, PaybackBucket, RoiSummary};
pub use crate::calculator::{
    compute_breakdown, compute_breakdown_lenient, compute_breakdown_with_policy, SavingsBreakdown,
    SavingsItem,
};
pub use crate::config::{load_config, InputPolicy, ProfileOverride, RoimapConfig};
pub use crate::errors::CalcError;
pub use crate::input::{resolve_metrics, CalculatorInput, MetricValues};
pub use crate::posture::SecurityControls;
pub use crate::profile::{
    default_registry, FormulaSet, IndustryProfile, IndustrySummary, MetricScale, MetricSpec,
    PiecewiseLinear, Pricing, ProfileRegistry, UnitKind,
};
pub use crate::slider::LogScale;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
