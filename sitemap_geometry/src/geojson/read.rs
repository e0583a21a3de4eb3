use crate::geo::{CoordinateRecord, GeoCollection};
use anyhow::{Context, Result, anyhow};
use std::io::{BufRead, Read};

pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	GeoCollection::from_json_str(json)
}

/// Reads a JSON array of coordinate records.
pub fn read_records(reader: impl Read) -> Result<Vec<CoordinateRecord>> {
	serde_json::from_reader(reader).context("reading coordinate records")
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<CoordinateRecord>> {
	match line {
		Ok(line) if line.trim().is_empty() => Ok(None),
		Ok(line) => serde_json::from_str(&line)
			.map(Some)
			.map_err(|e| anyhow!("line {}: {}", index + 1, e)),
		Err(e) => Err(anyhow!("line {}: {}", index + 1, e)),
	}
}

/// Reads newline-delimited coordinate records, one JSON object per line. Blank lines are skipped.
pub fn read_ndjson_records_iter(reader: impl BufRead) -> impl Iterator<Item = Result<CoordinateRecord>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}
