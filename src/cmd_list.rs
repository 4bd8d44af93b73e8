use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use ncl_colormap::colortables::{BOUND_EXTENSION, RGB_EXTENSION};

pub(crate) fn cmap_list(data_dir: &Path) -> Result<()> {
	let entries = fs::read_dir(data_dir)
		.with_context(|| format!("Can't read data directory {}", data_dir.display()))?;

	let mut names: Vec<String> = Vec::new();
	for entry in entries {
		let path = entry?.path();
		if path.extension().and_then(|e| e.to_str()) != Some(RGB_EXTENSION) {
			continue;
		}

		match path.file_stem().and_then(|s| s.to_str()) {
			Some(stem) => names.push(stem.to_string()),
			None => debug!("skipping {}", path.display()),
		}
	}

	if names.is_empty() {
		eprintln!("NOTE: No color tables found in {}", data_dir.display());
		return Ok(());
	}

	names.sort_by_key(|n| n.to_lowercase());
	for name in names {
		let has_bounds = data_dir.join(format!("{name}.{BOUND_EXTENSION}")).is_file();
		if has_bounds {
			println!("{name} {}", "(bounds)".green());
		} else {
			println!("{name}");
		}
	}

	Ok(())
}
