//! Building GeoJSON from coordinate records, and reading GeoJSON or records back in.
//!
//! The builder functions are pure. They never validate positions; see
//! [`crate::geo::CoordinateRecord::validate`] for an opt-in check.

mod build;
mod read;

pub use build::*;
pub use read::*;
