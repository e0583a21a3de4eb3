use super::*;
use serde::{Deserialize, Serialize};

/// A GeoJSON `Feature`: one point geometry plus its properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct GeoFeature {
	pub geometry: PointGeometry,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub properties: GeoProperties,
}

impl GeoFeature {
	pub fn new(geometry: PointGeometry) -> Self {
		Self {
			geometry,
			properties: GeoProperties::new(),
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			geometry: PointGeometry::from([23.3219, 42.6977]),
			properties: GeoProperties::from(vec![
				("name", GeoValue::from("Sofia")),
				("population", GeoValue::from(1_286_383)),
				("is_capital", GeoValue::from(true)),
			]),
		}
	}
}

// GeoJSON allows `"properties": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<GeoProperties, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Ok(Option::<GeoProperties>::deserialize(deserializer)?.unwrap_or_default())
}
