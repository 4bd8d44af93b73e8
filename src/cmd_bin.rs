use std::path::Path;

use anyhow::Result;

use crate::commands::BinArgs;
use crate::common::{format_bin, open_table, swatch};

pub(crate) fn cmap_bin(args: &BinArgs, data_dir: &Path) -> Result<()> {
	let loader = open_table(&args.name, data_dir)?;
	let (palette, norm, boundaries) = loader.components()?;

	for value in &args.values {
		let (Some(bin), Some(index)) = (norm.bin(*value), norm.index(*value)) else {
			println!("{value}: no color");
			continue;
		};

		let color = &palette[index];
		println!("{value}: bin {bin} {} -> color {index} {} {color}", format_bin(boundaries, bin), swatch(color));
	}

	Ok(())
}
