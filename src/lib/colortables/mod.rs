use std::env;
use std::path::PathBuf;

pub mod boundaries;
pub mod error;
pub mod loader;
pub mod norm;
pub mod palette;
pub(crate) mod rgb_file;
pub mod source;

pub const RGB_EXTENSION: &str = "rgb";
pub const BOUND_EXTENSION: &str = "bound";

/// Trailing marker on a table name that requests the colors in reverse order.
pub const REVERSE_SUFFIX: &str = "_r";

/// Directory used when neither a loader override nor [DATA_DIR_ENV] is given.
/// Relative paths are resolved against the working directory.
pub const DEFAULT_DATA_DIR: &str = "cmap_data";
pub const DATA_DIR_ENV: &str = "NCL_CMAP_DIR";

/// Returns the directory color tables are looked up in by default.
pub fn default_data_dir() -> PathBuf {
	match env::var_os(DATA_DIR_ENV) {
		Some(dir) if !dir.is_empty() => PathBuf::from(dir),
		_ => PathBuf::from(DEFAULT_DATA_DIR),
	}
}

/// Splits a table name into its base name and whether the reversal marker was present.
pub fn split_reverse_marker(name: &str) -> (&str, bool) {
	match name.strip_suffix(REVERSE_SUFFIX) {
		Some(base) => (base, true),
		None => (name, false),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reverse_marker() {
		assert_eq!(split_reverse_marker("BlueRed"), ("BlueRed", false));
		assert_eq!(split_reverse_marker("BlueRed_r"), ("BlueRed", true));
		// only the trailing marker counts
		assert_eq!(split_reverse_marker("rainbow_r_x"), ("rainbow_r_x", false));
		assert_eq!(split_reverse_marker("_r"), ("", true));
	}
}
