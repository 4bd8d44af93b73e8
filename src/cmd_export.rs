use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ncl_colormap::colortables::palette::Rgb;
use serde::Serialize;

use crate::commands::ExportArgs;
use crate::common::open_table;

#[derive(Serialize)]
struct ExportedTable<'a> {
	name: &'a str,
	colors: &'a [Rgb],
	hex: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	boundaries: Option<&'a [f64]>,
}

pub(crate) fn cmap_export(args: &ExportArgs, data_dir: &Path) -> Result<()> {
	let loader = open_table(&args.name, data_dir)?;
	let palette = loader.palette()?;

	let boundaries = if args.bounds {
		// building the norm validates the boundaries against the palette
		loader.normalization()?;
		Some(loader.boundaries()?)
	} else {
		None
	};

	let table = ExportedTable {
		name: &palette.name,
		colors: &palette.colors,
		hex: palette.iter().map(|c| c.to_string()).collect(),
		boundaries,
	};

	let f = File::create(&args.output)
		.with_context(|| format!("Couldn't create {}", args.output.display()))?;
	let mut writer = BufWriter::new(f);
	if args.pretty {
		serde_json::to_writer_pretty(&mut writer, &table)?;
	} else {
		serde_json::to_writer(&mut writer, &table)?;
	}
	writeln!(writer)?;
	writer.flush()?;

	Ok(())
}
