//! Simulation configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use sprawl_core::CategoryGrid;
use sprawl_rule::TransitionRule;

/// Number of ticks a run covers unless configured otherwise.
pub const DEFAULT_STEPS: u64 = 20;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// `steps` is zero.
    ZeroSteps,
    /// The grid has more cells than draws can be addressed for.
    CellCountOverflow {
        /// Number of cells in the grid.
        value: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSteps => write!(f, "steps must be at least 1"),
            Self::CellCountOverflow { value } => {
                write!(f, "cell count {value} exceeds u32::MAX")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SimulationConfig ───────────────────────────────────────────────

/// Everything needed to drive a run, apart from the initial grid.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Transition rule applied every tick.
    pub rule: TransitionRule,
    /// Seed for the per-cell draw source.
    pub seed: u64,
    /// Number of ticks [`Simulation::run`](crate::Simulation::run) executes. Default: 20.
    pub steps: u64,
    /// Whether each step also produces a
    /// [`StepDiagnostics`](sprawl_rule::StepDiagnostics). Default: false.
    pub record_diagnostics: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rule: TransitionRule::reference(),
            seed: 0,
            steps: DEFAULT_STEPS,
            record_diagnostics: false,
        }
    }
}

impl SimulationConfig {
    /// Check the configuration against the grid it will drive.
    pub fn validate(&self, initial: &CategoryGrid) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if u32::try_from(initial.len()).is_err() {
            return Err(ConfigError::CellCountOverflow {
                value: initial.len(),
            });
        }
        Ok(())
    }
}
