use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A position as `[longitude, latitude]`. The order is never swapped.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(longitude: f64, latitude: f64) -> Self {
		Self([longitude, latitude])
	}

	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.0[1]
	}

	/// Rounds both components to `precision` decimal places.
	#[must_use]
	pub fn rounded(&self, precision: u8) -> Self {
		let factor = 10f64.powi(precision as i32);
		Self([
			(self.0[0] * factor).round() / factor,
			(self.0[1] * factor).round() / factor,
		])
	}

	pub fn is_finite(&self) -> bool {
		self.0[0].is_finite() && self.0[1].is_finite()
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
