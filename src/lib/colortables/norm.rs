use serde::Serialize;

use crate::colortables::error::ColormapError;
use crate::colortables::palette::{Palette, Rgb};

/// Maps continuous values onto palette indices using a list of bin edges.
///
/// `n` boundaries define `n - 1` half-open bins `[b[i], b[i + 1])`. Values below the first
/// boundary land in the first bin and values at or above the last boundary land in the last
/// bin. When the palette has more colors than there are bins, bin indices are spread evenly
/// over the whole palette so the first and last bins still use the first and last colors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoundaryNorm {
	boundaries: Vec<f64>,
	ncolors: usize,
}

impl BoundaryNorm {
	pub fn new(boundaries: Vec<f64>, ncolors: usize) -> Result<Self, ColormapError> {
		if boundaries.len() < 2 {
			return Err(ColormapError::Precondition {
				msg: format!("at least 2 boundaries are required, got {}", boundaries.len()),
			});
		}

		if let Some(i) = boundaries.windows(2).position(|w| w[0] >= w[1]) {
			return Err(ColormapError::Precondition {
				msg: format!("boundaries must be strictly ascending ({} is followed by {})", boundaries[i], boundaries[i + 1]),
			});
		}

		let bins = boundaries.len() - 1;
		if ncolors < bins {
			return Err(ColormapError::Precondition {
				msg: format!("{} boundaries define {bins} bins but the palette only has {ncolors} colors", boundaries.len()),
			});
		}

		Ok(Self { boundaries, ncolors })
	}

	pub fn boundaries(&self) -> &[f64] {
		&self.boundaries
	}

	pub fn bins(&self) -> usize {
		self.boundaries.len() - 1
	}

	pub fn ncolors(&self) -> usize {
		self.ncolors
	}

	/// Returns the bin a value falls into, clipped to the valid range.
	/// NaN has no bin.
	pub fn bin(&self, value: f64) -> Option<usize> {
		if value.is_nan() {
			return None;
		}

		let above = self.boundaries.partition_point(|b| *b <= value);
		Some(above.saturating_sub(1).min(self.bins() - 1))
	}

	/// Returns the palette index for a value, in `0..ncolors`.
	pub fn index(&self, value: f64) -> Option<usize> {
		let bin = self.bin(value)?;
		let bins = self.bins();

		if self.ncolors == bins {
			return Some(bin);
		}

		if bins == 1 {
			// a single bin picks the middle color
			return Some((self.ncolors - 1) / 2);
		}

		Some(bin * (self.ncolors - 1) / (bins - 1))
	}

	/// Looks up the color a value maps to.
	pub fn color<'a>(&self, palette: &'a Palette, value: f64) -> Option<&'a Rgb> {
		palette.get(self.index(value)?)
	}

	/// Returns the normalization as a plain callable for renderers that take one.
	pub fn as_fn(&self) -> impl Fn(f64) -> Option<usize> + '_ {
		move |value| self.index(value)
	}
}
