use anyhow::Result;
use clap::Args;
use log::info;
use sitemap::{config::MapConfig, view::MapView};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// YAML map config
	#[arg(required = true)]
	config: PathBuf,

	/// replace the configured KML link
	#[arg(long, value_name = "LINK")]
	kml_link: Option<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = MapConfig::from_path(&arguments.config)?;
	let mut view = MapView::from_config(&config);

	let link = arguments.kml_link.as_deref();
	if link.is_some() && view.update_kml_link(link) {
		info!("KML overlay reloads from {:?}", view.kml_url);
	}

	println!("{}", serde_json::to_string_pretty(&view)?);
	Ok(())
}
