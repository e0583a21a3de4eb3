use super::GeoFeature;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A GeoJSON `FeatureCollection`. Feature order is kept as given.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}
}

impl GeoCollection {
	pub fn from_json_str(json_str: &str) -> Result<Self> {
		serde_json::from_str(json_str).context("parsing GeoJSON feature collection")
	}

	/// Serializes to compact GeoJSON text.
	pub fn to_json_string(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	pub fn to_json_string_pretty(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn round_coordinates(&mut self, precision: u8) {
		for feature in &mut self.features {
			feature.geometry.round_coordinates(precision);
		}
	}
}
