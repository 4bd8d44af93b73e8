use std::fs;
use std::io;
use std::path::Path;

/// Where a [Loader](crate::colortables::loader::Loader) reads its files from.
pub trait TableSource {
	fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads color tables from the file system.
#[derive(Clone, Copy, Default, Debug)]
pub struct FsSource;

impl TableSource for FsSource {
	fn read_to_string(&self, path: &Path) -> io::Result<String> {
		fs::read_to_string(path)
	}
}

impl<T: TableSource + ?Sized> TableSource for &T {
	fn read_to_string(&self, path: &Path) -> io::Result<String> {
		(**self).read_to_string(path)
	}
}
