use anyhow::{Context, Result};
use clap::Args;
use log::{info, warn};
use sitemap::geometry::{
	CoordinateRecord, build_feature, build_feature_collection, generate_geojson, read_ndjson_records_iter,
	read_records,
};
use std::{
	fs::File,
	io::{BufRead, BufReader, stdin},
};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON file with an array of records: {"latitude", "longitude", "properties"?}
	/// use "-" to read from stdin
	#[arg(required = true, verbatim_doc_comment)]
	input: String,

	/// read newline-delimited records, one JSON object per line
	#[arg(long)]
	ndjson: bool,

	/// reject records with non-finite or out-of-range positions
	#[arg(long)]
	strict: bool,

	/// round coordinates to this many decimal places
	#[arg(long, short, value_name = "DIGITS")]
	precision: Option<u8>,

	/// pretty-print the output
	#[arg(long)]
	pretty: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let reader: Box<dyn BufRead> = if arguments.input == "-" {
		Box::new(BufReader::new(stdin()))
	} else {
		let file = File::open(&arguments.input).with_context(|| format!("opening {:?}", arguments.input))?;
		Box::new(BufReader::new(file))
	};

	let records: Vec<CoordinateRecord> = if arguments.ndjson {
		read_ndjson_records_iter(reader).collect::<Result<_>>()?
	} else {
		read_records(reader)?
	};
	info!("read {} records from {:?}", records.len(), arguments.input);

	for (index, record) in records.iter().enumerate() {
		if arguments.strict {
			record.validate().with_context(|| format!("record {index}"))?;
		} else if !record.longitude.is_finite() || !record.latitude.is_finite() {
			warn!("record {index} has a non-finite position, it is written as null");
		}
	}

	if arguments.precision.is_none() && !arguments.pretty {
		println!("{}", generate_geojson(&records)?);
		return Ok(());
	}

	let mut collection = build_feature_collection(
		records
			.into_iter()
			.map(|r| build_feature(r.longitude, r.latitude, r.properties))
			.collect(),
	);
	if let Some(precision) = arguments.precision {
		collection.round_coordinates(precision);
	}

	if arguments.pretty {
		println!("{}", collection.to_json_string_pretty()?);
	} else {
		println!("{}", collection.to_json_string()?);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn test_records() {
		run_command(vec!["sitemap", "geojson", "../testdata/records.json"]).unwrap();
	}

	#[test]
	fn test_ndjson_with_precision() {
		run_command(vec!["sitemap", "geojson", "--ndjson", "-p", "2", "../testdata/records.ndjson"]).unwrap();
	}

	#[test]
	fn test_strict_rejects_out_of_range() {
		let error = run_command(vec!["sitemap", "geojson", "--strict", "../testdata/invalid_records.json"]).unwrap_err();
		assert_eq!(format!("{error:#}"), "record 1: latitude must be within [-90, 90], got 95");
	}

	#[test]
	fn test_permissive_keeps_out_of_range() {
		run_command(vec!["sitemap", "geojson", "../testdata/invalid_records.json"]).unwrap();
	}

	#[test]
	fn test_missing_file() {
		let error = run_command(vec!["sitemap", "geojson", "../testdata/missing.json"]).unwrap_err();
		assert!(error.to_string().starts_with("opening "));
	}
}
