use super::GeoProperties;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// One input row for the GeoJSON builder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRecord {
	pub latitude: f64,
	pub longitude: f64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub properties: Option<GeoProperties>,
}

impl CoordinateRecord {
	pub fn new(latitude: f64, longitude: f64) -> Self {
		Self {
			latitude,
			longitude,
			properties: None,
		}
	}

	pub fn with_properties(mut self, properties: GeoProperties) -> Self {
		self.properties = Some(properties);
		self
	}

	/// Checks that both values are finite and inside the geographic range.
	///
	/// The builder itself never calls this; records are passed through as they are.
	pub fn validate(&self) -> Result<()> {
		check_range("longitude", self.longitude, 180.0)?;
		check_range("latitude", self.latitude, 90.0)
	}
}

fn check_range(field: &str, value: f64, limit: f64) -> Result<()> {
	ensure!(value.is_finite(), "{field} must be a finite number, got {value}");
	ensure!(
		(-limit..=limit).contains(&value),
		"{field} must be within [-{limit}, {limit}], got {value}"
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::GeoValue;
	use rstest::rstest;

	#[test]
	fn deserialize_without_properties() {
		let record: CoordinateRecord = serde_json::from_str(r#"{"latitude":42.5,"longitude":23.3}"#).unwrap();
		assert_eq!(record, CoordinateRecord::new(42.5, 23.3));
	}

	#[test]
	fn deserialize_with_properties() {
		let record: CoordinateRecord =
			serde_json::from_str(r#"{"latitude":1,"longitude":2,"properties":{"name":"A"}}"#).unwrap();
		let properties = record.properties.unwrap();
		assert_eq!(properties.get("name"), Some(&GeoValue::from("A")));
	}

	#[rstest]
	#[case(42.5, 23.3)]
	#[case(-90.0, -180.0)]
	#[case(90.0, 180.0)]
	fn validate_accepts(#[case] latitude: f64, #[case] longitude: f64) {
		assert!(CoordinateRecord::new(latitude, longitude).validate().is_ok());
	}

	#[rstest]
	#[case(0.0, 180.5, "longitude must be within [-180, 180], got 180.5")]
	#[case(-90.1, 0.0, "latitude must be within [-90, 90], got -90.1")]
	#[case(f64::NAN, 0.0, "latitude must be a finite number, got NaN")]
	#[case(0.0, f64::INFINITY, "longitude must be a finite number, got inf")]
	fn validate_rejects(#[case] latitude: f64, #[case] longitude: f64, #[case] message: &str) {
		let error = CoordinateRecord::new(latitude, longitude).validate().unwrap_err();
		assert_eq!(error.to_string(), message);
	}
}
