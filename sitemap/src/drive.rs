//! Shared-drive file links.
//!
//! A share link such as `https://drive.google.com/file/d/<id>/view` carries the file id in the
//! path segment after `/d/`. The KML overlay is then loaded from the direct download URL of that id.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

const DOWNLOAD_URL_PREFIX: &str = "https://drive.google.com/uc?export=download&id=";

/// Extracts the file id from a share link.
///
/// Returns `None` for a missing or empty link, or when the link has no `/d/<id>` segment.
pub fn drive_file_id(link: Option<&str>) -> Option<String> {
	lazy_static! {
		static ref REG_FILE_ID: Regex = Regex::new(r"/d/([^/]+)").unwrap();
	}

	let link = link.filter(|l| !l.is_empty())?;
	let id = REG_FILE_ID.captures(link).and_then(|c| c.get(1)).map(|m| m.as_str().to_string());
	if id.is_none() {
		debug!("no file id found in link {link:?}");
	}
	id
}

pub fn drive_download_url(file_id: &str) -> String {
	format!("{DOWNLOAD_URL_PREFIX}{file_id}")
}

/// Resolves a share link straight to the download URL of the file it points to.
pub fn kml_url_from_link(link: Option<&str>) -> Option<String> {
	drive_file_id(link).map(|id| drive_download_url(&id))
}
