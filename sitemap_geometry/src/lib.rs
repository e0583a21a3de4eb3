//! Point features and GeoJSON `FeatureCollection` output for site maps.
//!
//! ```rust
//! use sitemap_geometry::{CoordinateRecord, generate_geojson};
//!
//! let text = generate_geojson(&[CoordinateRecord::new(42.5, 23.3)]).unwrap();
//! assert!(text.starts_with(r#"{"type":"FeatureCollection","features":[{"type":"Feature""#));
//! ```

mod geo;
pub mod geojson;

pub use geo::*;
pub use geojson::*;
