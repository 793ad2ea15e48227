//! Raster input and output for Sprawl simulations.
//!
//! Land-use maps are read and written as ESRI ASCII grids: a short
//! `key value` header followed by whitespace-separated integer cells.
//! Raw codes are mapped onto the eight canonical categories through a
//! [`LookupTable`] once, at load time; anything that does not map is a
//! fatal [`RasterError`].
//!
//! # Architecture
//!
//! - [`read_ascii_grid`] parses any `Read` source into a [`RawRaster`]
//! - [`LookupTable`] maps raw codes (single values or ranges) to categories
//! - [`load_categories`] validates a raw raster into a [`CategoryGrid`](sprawl_core::CategoryGrid)
//! - [`write_ascii_grid`] writes any [`RasterValue`] grid to a `Write` sink

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod header;
pub mod load;
pub mod lookup;
pub mod reader;
pub mod writer;

pub use error::RasterError;
pub use header::{Anchor, RasterHeader};
pub use load::load_categories;
pub use lookup::{LookupKey, LookupTable};
pub use reader::{read_ascii_grid, RawRaster};
pub use writer::{write_ascii_grid, RasterValue};
