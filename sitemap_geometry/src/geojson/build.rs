use crate::geo::{CoordinateRecord, Coordinates, GeoCollection, GeoFeature, GeoProperties, PointGeometry};
use anyhow::Result;
use log::debug;

/// Wraps a position into a point geometry. Values are not checked and pass through unchanged.
pub fn build_point(longitude: f64, latitude: f64) -> PointGeometry {
	PointGeometry::new(Coordinates::new(longitude, latitude))
}

/// Builds a point feature. Missing properties become an empty mapping.
pub fn build_feature(longitude: f64, latitude: f64, properties: Option<GeoProperties>) -> GeoFeature {
	GeoFeature {
		geometry: build_point(longitude, latitude),
		properties: properties.unwrap_or_default(),
	}
}

pub fn build_feature_collection(features: Vec<GeoFeature>) -> GeoCollection {
	GeoCollection::from(features)
}

/// Converts coordinate records into GeoJSON `FeatureCollection` text, one feature per record and in the same order.
///
/// Records are not validated. Non-finite numbers are written as `null`.
pub fn generate_geojson(records: &[CoordinateRecord]) -> Result<String> {
	let features = records
		.iter()
		.map(|record| build_feature(record.longitude, record.latitude, record.properties.clone()))
		.collect();
	let collection = build_feature_collection(features);
	debug!("generated GeoJSON with {} features", collection.len());
	collection.to_json_string()
}
