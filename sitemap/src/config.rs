//! Map configuration, usually read from a YAML file:
//!
//! ```yaml
//! latitude: 42.6975
//! longitude: 23.3242
//! zoom: 12
//! kml_link: https://drive.google.com/file/d/<id>/view
//! height: 600px
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
	/// Latitude of the initial map center. Missing or null means 0.
	#[serde(default, deserialize_with = "null_as_zero")]
	pub latitude: f64,

	/// Longitude of the initial map center. Missing or null means 0.
	#[serde(default, deserialize_with = "null_as_zero")]
	pub longitude: f64,

	/// Initial zoom level.
	#[serde(default = "default_zoom")]
	pub zoom: u8,

	/// Shared-drive link to the KML file shown as overlay.
	#[serde(default)]
	pub kml_link: Option<String>,

	/// CSS height of the map container.
	#[serde(default = "default_height")]
	pub height: String,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_zoom() -> u8 {
	10
}

fn default_height() -> String {
	String::from("800px")
}

impl Default for MapConfig {
	fn default() -> Self {
		Self {
			latitude: 0.0,
			longitude: 0.0,
			zoom: default_zoom(),
			kml_link: None,
			height: default_height(),
		}
	}
}

impl MapConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader::<_, Option<Self>>(reader)?.unwrap_or_default())
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str::<Option<Self>>(text)?.unwrap_or_default())
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config {path:?}"))?;
		MapConfig::from_reader(BufReader::new(file)).with_context(|| format!("parsing config {path:?}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::io::Cursor;

	#[test]
	fn parse_empty_config() {
		assert_eq!(MapConfig::from_string("").unwrap(), MapConfig::default());
	}

	#[test]
	fn parse_null_center() {
		let config = MapConfig::from_string("latitude: ~\nlongitude:\nzoom: 7\n").unwrap();
		assert_eq!(config.latitude, 0.0);
		assert_eq!(config.longitude, 0.0);
		assert_eq!(config.zoom, 7);
	}

	#[test]
	fn defaults() {
		let config = MapConfig::default();
		assert_eq!(config.latitude, 0.0);
		assert_eq!(config.longitude, 0.0);
		assert_eq!(config.zoom, 10);
		assert_eq!(config.kml_link, None);
		assert_eq!(config.height, "800px");
	}

	#[test]
	fn parse_full_config() {
		let yaml = "latitude: 42.6975\nlongitude: 23.3242\nzoom: 12\nkml_link: https://drive.google.com/file/d/ABC/view\nheight: 600px\n";
		assert_eq!(
			MapConfig::from_reader(Cursor::new(yaml)).unwrap(),
			MapConfig {
				latitude: 42.6975,
				longitude: 23.3242,
				zoom: 12,
				kml_link: Some("https://drive.google.com/file/d/ABC/view".to_string()),
				height: "600px".to_string(),
			}
		);
	}

	#[test]
	fn parse_partial_config() {
		let config = MapConfig::from_string("latitude: 1.5").unwrap();
		assert_eq!(config.latitude, 1.5);
		assert_eq!(config.zoom, 10);
	}

	#[test]
	fn parse_invalid_config() {
		let error = MapConfig::from_string("center: [1, 2]").unwrap_err();
		assert!(error.to_string().contains("unknown field `center`"));
	}

	#[test]
	fn missing_file() {
		let error = MapConfig::from_path(Path::new("does/not/exist.yml")).unwrap_err();
		assert!(error.to_string().starts_with("opening config"));
	}
}
