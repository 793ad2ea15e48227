//! Core types for the Sprawl land-use simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Sprawl workspace:
//! land-use categories, transition targets and outcomes, the generic
//! row-major [`Grid`], tick identifiers, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod category;
pub mod error;
pub mod grid;
pub mod id;
pub mod outcome;

pub use category::{Category, Target};
pub use error::{CategoryError, GridError};
pub use grid::{CategoryGrid, Grid};
pub use id::TickId;
pub use outcome::{Contest, Outcome};
