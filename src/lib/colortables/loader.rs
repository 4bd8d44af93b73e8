use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::debug;

use crate::colortables::boundaries::parse_boundaries;
use crate::colortables::error::ColormapError;
use crate::colortables::norm::BoundaryNorm;
use crate::colortables::palette::Palette;
use crate::colortables::source::{FsSource, TableSource};
use crate::colortables::{BOUND_EXTENSION, RGB_EXTENSION, default_data_dir, split_reverse_marker};

/// Loads a named color table and its optional boundary file.
///
/// Nothing is read when the loader is created. Each of [Loader::palette],
/// [Loader::boundaries] and [Loader::normalization] reads what it needs on first use and
/// hands out the same cached value afterwards.
///
/// The caches are [OnceLock]s, so a loader can be shared between threads. If several threads
/// race on the first access they may all read the file, but only one result is kept.
#[derive(Debug)]
pub struct Loader<S: TableSource = FsSource> {
	name: String,
	data_dir: PathBuf,
	source: S,

	palette: OnceLock<Palette>,
	boundaries: OnceLock<Vec<f64>>,
	normalization: OnceLock<BoundaryNorm>,
}

impl Loader<FsSource> {
	/// Creates a loader that looks in [default_data_dir].
	pub fn new<N: Into<String>>(name: N) -> Result<Self, ColormapError> {
		Self::with_source(name, default_data_dir(), FsSource)
	}

	pub fn with_data_dir<N: Into<String>, P: Into<PathBuf>>(name: N, data_dir: P) -> Result<Self, ColormapError> {
		Self::with_source(name, data_dir, FsSource)
	}
}

impl<S: TableSource> Loader<S> {
	pub fn with_source<N: Into<String>, P: Into<PathBuf>>(name: N, data_dir: P, source: S) -> Result<Self, ColormapError> {
		let name = name.into();
		if split_reverse_marker(&name).0.is_empty() {
			return Err(ColormapError::EmptyName);
		}

		Ok(Self {
			name,
			data_dir: data_dir.into(),
			source,
			palette: OnceLock::new(),
			boundaries: OnceLock::new(),
			normalization: OnceLock::new(),
		})
	}

	/// The name as given, including a reversal marker.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The name used for file lookup.
	pub fn base_name(&self) -> &str {
		split_reverse_marker(&self.name).0
	}

	pub fn is_reversed(&self) -> bool {
		split_reverse_marker(&self.name).1
	}

	pub fn data_dir(&self) -> &Path {
		&self.data_dir
	}

	pub fn rgb_path(&self) -> PathBuf {
		self.data_dir.join(format!("{}.{RGB_EXTENSION}", self.base_name()))
	}

	pub fn bound_path(&self) -> PathBuf {
		self.data_dir.join(format!("{}.{BOUND_EXTENSION}", self.base_name()))
	}

	fn read(&self, path: &Path) -> Result<String, ColormapError> {
		debug!("reading {}", path.display());
		self.source
			.read_to_string(path)
			.map_err(|e| ColormapError::from_io(e, path.to_path_buf()))
	}

	/// Returns the normalized palette, reversed if the name carries the reversal marker.
	pub fn palette(&self) -> Result<&Palette, ColormapError> {
		if let Some(palette) = self.palette.get() {
			return Ok(palette);
		}

		let contents = self.read(&self.rgb_path())?;
		let palette = Palette::from_rgb_string(&self.name, contents)?;
		Ok(self.palette.get_or_init(|| palette))
	}

	/// Returns the boundaries in file order. The reversal marker does not apply to them.
	pub fn boundaries(&self) -> Result<&[f64], ColormapError> {
		if let Some(boundaries) = self.boundaries.get() {
			return Ok(boundaries);
		}

		let contents = self.read(&self.bound_path())?;
		let boundaries = parse_boundaries(contents)?;
		Ok(self.boundaries.get_or_init(|| boundaries))
	}

	/// Returns the normalization built from the boundaries and the palette size.
	pub fn normalization(&self) -> Result<&BoundaryNorm, ColormapError> {
		if let Some(norm) = self.normalization.get() {
			return Ok(norm);
		}

		let boundaries = self.boundaries()?;
		let palette = self.palette()?;
		let norm = BoundaryNorm::new(boundaries.to_vec(), palette.len())?;
		debug!("{}: {} bins over {} colors", self.name, norm.bins(), norm.ncolors());
		Ok(self.normalization.get_or_init(|| norm))
	}

	/// Returns palette, normalization and boundaries in one go.
	pub fn components(&self) -> Result<(&Palette, &BoundaryNorm, &[f64]), ColormapError> {
		Ok((self.palette()?, self.normalization()?, self.boundaries()?))
	}
}
