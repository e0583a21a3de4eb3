mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Convert coordinate records into a GeoJSON FeatureCollection
	Geojson(tools::geojson::Subcommand),

	/// Print the KML download URL for a shared-drive link
	KmlUrl(tools::kml_url::Subcommand),

	/// Resolve the initial map view from a config file
	View(tools::view::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Geojson(arguments) => tools::geojson::run(arguments),
		Commands::KmlUrl(arguments) => tools::kml_url::run(arguments),
		Commands::View(arguments) => tools::view::run(arguments),
	}
}
