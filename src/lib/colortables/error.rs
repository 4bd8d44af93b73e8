use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColormapError {
	#[error("The color table name is empty")]
	EmptyName,
	#[error("Color table file not found: {}", path.display())]
	NotFound { path: PathBuf },
	#[error("No color entries found in color table \"{name}\"")]
	Empty { name: String },
	#[error("The largest channel value in color table \"{name}\" is not positive")]
	ZeroMaximum { name: String },
	#[error("Invalid data in line {line}: {msg}")]
	InvalidTextLine { line: usize, msg: String },
	#[error("Can't build normalization: {msg}")]
	Precondition { msg: String },
	#[error("io error: {0}")]
	IoErr(#[from] std::io::Error),
}

impl ColormapError {
	/// Maps a failed read of `path` to [ColormapError::NotFound] where appropriate.
	pub(crate) fn from_io(e: std::io::Error, path: PathBuf) -> Self {
		match e.kind() {
			std::io::ErrorKind::NotFound => ColormapError::NotFound { path },
			_ => ColormapError::IoErr(e),
		}
	}
}
