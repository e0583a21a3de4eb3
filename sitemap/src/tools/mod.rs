pub mod geojson;
pub mod kml_url;
pub mod view;
