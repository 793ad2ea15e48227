//! The stochastic land-use transition rule.
//!
//! One call to [`TransitionRule::step`] maps the current category grid to
//! the next one. Per cell, the rule:
//!
//! 1. counts urban and semi-urban neighbours in the 3×3 window
//!    ([`sprawl_space::MooreWindow`]);
//! 2. turns each count into a transition probability through the
//!    per-category [`CoefficientTable`] plus a small noise term
//!    ([`probability`]);
//! 3. evaluates a growth gate and a transition gate per target and
//!    realizes the target only if both pass ([`realize`]);
//! 4. picks a winner when both targets are realized ([`resolve`]);
//! 5. commits all outcomes at once ([`update`]).
//!
//! Every decision reads only the previous grid, so cells can be evaluated
//! in any order or in parallel. Random draws come from a [`DrawSource`]
//! addressed by `(tick, cell)`, which keeps sequential and parallel runs
//! bit-identical.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod coefficients;
pub mod diagnostics;
pub mod draws;
pub mod probability;
pub mod realize;
pub mod resolve;
pub mod rule;
pub mod update;

pub use coefficients::{CoefficientTable, Coefficients, GrowthRates};
pub use diagnostics::StepDiagnostics;
pub use draws::{CellDraws, ChaChaDraws, DrawSource};
pub use probability::{transition_probability, ProbabilityBound, DEFAULT_NOISE_AMPLITUDE};
pub use realize::{realize, Realization};
pub use resolve::resolve;
pub use rule::{CellEvaluation, Execution, TransitionRule, TransitionRuleBuilder};
pub use update::commit;

pub use sprawl_space::EdgeBehavior;
