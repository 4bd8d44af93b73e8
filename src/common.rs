use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use ncl_colormap::colortables::default_data_dir;
use ncl_colormap::colortables::loader::Loader;
use ncl_colormap::colortables::palette::Rgb;

use crate::commands::Cli;

pub(crate) fn data_dir(cli: &Cli) -> PathBuf {
	cli.data_dir.clone().unwrap_or_else(default_data_dir)
}

pub(crate) fn open_table<P: AsRef<Path>>(name: &str, data_dir: P) -> Result<Loader> {
	Loader::with_data_dir(name, data_dir.as_ref())
		.with_context(|| format!("Can't open color table \"{name}\""))
}

/// Renders a color as a block of background-colored spaces.
pub(crate) fn swatch(color: &Rgb) -> ColoredString {
	let [r, g, b] = color.to_rgb8();
	"      ".on_truecolor(r, g, b)
}

pub(crate) fn format_channels(color: &Rgb) -> String {
	format!("{:.4} {:.4} {:.4}", color.r, color.g, color.b)
}

/// Formats a bin range, with open ends for the clipped first and last bins.
pub(crate) fn format_bin(boundaries: &[f64], bin: usize) -> String {
	let last = boundaries.len().saturating_sub(2);
	let lower = if bin == 0 { "-∞".to_string() } else { boundaries[bin].to_string() };
	let upper = if bin >= last { "∞".to_string() } else { boundaries[bin + 1].to_string() };
	format!("[{lower}, {upper})")
}
