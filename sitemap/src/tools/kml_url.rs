use anyhow::{Result, anyhow};
use clap::Args;
use sitemap::drive::{drive_download_url, drive_file_id};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// shared-drive link, e.g. https://drive.google.com/file/d/<id>/view
	#[arg(required = true)]
	link: String,

	/// print only the file id
	#[arg(long)]
	id_only: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let file_id =
		drive_file_id(Some(&arguments.link)).ok_or_else(|| anyhow!("no file id found in link {:?}", arguments.link))?;

	if arguments.id_only {
		println!("{file_id}");
	} else {
		println!("{}", drive_download_url(&file_id));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn test_link() {
		run_command(vec!["sitemap", "kml-url", "https://drive.google.com/file/d/ABC123/view"]).unwrap();
		run_command(vec!["sitemap", "kml-url", "--id-only", "https://drive.google.com/file/d/ABC123/view"]).unwrap();
	}

	#[test]
	fn test_link_without_id() {
		let error = run_command(vec!["sitemap", "kml-url", "https://example.org/map.kml"]).unwrap_err();
		assert_eq!(error.to_string(), "no file id found in link \"https://example.org/map.kml\"");
	}
}
