use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::commands::ShowArgs;
use crate::common::{format_bin, format_channels, open_table, swatch};

pub(crate) fn cmap_show(args: &ShowArgs, data_dir: &Path) -> Result<()> {
	let loader = open_table(&args.name, data_dir)?;
	let palette = loader.palette()?;

	let norm = if args.bounds { Some(loader.normalization()?) } else { None };

	print!("{} ({} colors", palette.name.bold(), palette.len());
	if let Some(declared) = palette.declared_colors {
		if declared != palette.len() {
			print!(", header says {declared}");
		}
	}
	println!(")");

	for (i, color) in palette.iter().enumerate() {
		print!("{i:>4} {} {color} {}", swatch(color), format_channels(color).dimmed());

		if let Some(norm) = norm {
			// with more colors than bins, only some colors are ever used
			let bins: Vec<usize> = (0..norm.bins())
				.filter(|bin| norm.index(norm.boundaries()[*bin]) == Some(i))
				.collect();
			let ranges = bins.iter().map(|bin| format_bin(norm.boundaries(), *bin)).collect::<Vec<String>>();
			if !ranges.is_empty() {
				print!("  {}", ranges.join(" "));
			}
		}

		println!();
	}

	Ok(())
}
