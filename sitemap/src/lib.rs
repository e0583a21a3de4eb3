//! # SiteMap
//!
//! Data handling behind an embeddable site map: GeoJSON output for point records,
//! KML overlay URLs from shared-drive links, and the initial map view.
//!
//! ## Usage Example
//!
//! ```rust
//! use sitemap::{config::MapConfig, view::MapView};
//!
//! let config = MapConfig::from_string("latitude: 42.6975\nlongitude: 23.3242\nkml_link: https://drive.google.com/file/d/ABC/view").unwrap();
//! let view = MapView::from_config(&config);
//! assert_eq!(view.kml_url.as_deref(), Some("https://drive.google.com/uc?export=download&id=ABC"));
//! ```

pub mod config;
pub mod drive;
pub mod view;

pub use sitemap_geometry as geometry;
