use super::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A GeoJSON `Point` geometry.
///
/// Serializes as `{"type":"Point","coordinates":[longitude,latitude]}`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
	pub coordinates: Coordinates,
}

impl PointGeometry {
	#[must_use]
	pub fn new(coordinates: Coordinates) -> Self {
		Self { coordinates }
	}
	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.coordinates.longitude()
	}
	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.coordinates.latitude()
	}
	pub fn round_coordinates(&mut self, precision: u8) {
		self.coordinates = self.coordinates.rounded(precision);
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Point").field(&self.coordinates).finish()
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self::new(Coordinates::from(value))
	}
}
