use crate::{config::MapConfig, drive::kml_url_from_link};
use log::{debug, info};
use serde::Serialize;

/// The initial state of the map widget, resolved from a [`MapConfig`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapView {
	pub center: MapCenter,
	pub zoom: u8,
	pub height: String,
	/// Download URL of the KML overlay, if the configured link contains a file id.
	pub kml_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MapCenter {
	pub lat: f64,
	pub lng: f64,
}

impl MapView {
	pub fn from_config(config: &MapConfig) -> Self {
		let view = Self {
			center: MapCenter {
				lat: config.latitude,
				lng: config.longitude,
			},
			zoom: config.zoom,
			height: config.height.clone(),
			kml_url: kml_url_from_link(config.kml_link.as_deref()),
		};
		info!("initial center: lat {}, lng {}", view.center.lat, view.center.lng);
		if view.kml_url.is_none() && config.kml_link.is_some() {
			debug!("configured KML link holds no file id, no overlay will be shown");
		}
		view
	}

	/// Applies a new KML link and stores the resolved URL if it differs from the current one.
	///
	/// Returns `true` when the overlay has to be (re)loaded, i.e. the URL changed and is present.
	/// A link without file id clears the URL but does not remove an overlay that is already shown.
	pub fn update_kml_link(&mut self, link: Option<&str>) -> bool {
		let kml_url = kml_url_from_link(link);
		if kml_url == self.kml_url {
			return false;
		}
		debug!("KML url changed from {:?} to {:?}", self.kml_url, kml_url);
		self.kml_url = kml_url;
		self.kml_url.is_some()
	}
}
