//! Neighbourhood windows for Sprawl grids.
//!
//! The transition rule needs one spatial query: for every cell, how many
//! cells in the surrounding 3×3 window currently hold a target category.
//! [`MooreWindow`] answers it over boolean indicator grids, with the edge
//! treatment chosen by [`EdgeBehavior`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod window;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use window::MooreWindow;
