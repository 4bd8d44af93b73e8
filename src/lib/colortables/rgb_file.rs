use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::colortables::error::ColormapError;
use crate::colortables::palette::{Palette, Rgb};
use crate::colortables::split_reverse_marker;

static NCOLORS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*ncolors\s*=?\s*(?P<n>\d+)\s*$").unwrap());

/// Parses a single token as a channel value. Non-finite values like `nan` don't count as numbers.
pub(crate) fn parse_number(token: &str) -> Option<f64> {
	token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Returns the three values of a color line, or [None] for anything else
/// (headers, comments, lines with more or fewer numbers).
fn parse_color_line(line: &str) -> Option<[f64; 3]> {
	let mut numbers = line.split_whitespace().filter_map(parse_number);
	let color = [numbers.next()?, numbers.next()?, numbers.next()?];
	match numbers.next() {
		None => Some(color),
		Some(_) => None,
	}
}

impl Palette {
	/// Parses the contents of an NCL `.rgb` file.
	///
	/// `name` may carry the reversal marker, in which case the colors are reversed before
	/// they are normalized. The returned palette is tagged with `name` as given.
	pub fn from_rgb_string<S: AsRef<str>>(name: &str, s: S) -> Result<Palette, ColormapError> {
		let (_, reverse) = split_reverse_marker(name);

		let mut declared_colors = None;
		let mut colors: Vec<Rgb> = Vec::new();

		for (i, line) in s.as_ref().lines().enumerate() {
			if let Some(groups) = NCOLORS_RE.captures(line) {
				declared_colors = groups.name("n").and_then(|n| n.as_str().parse::<usize>().ok());
				continue;
			}

			let Some(color) = parse_color_line(line) else {
				continue;
			};

			if color.iter().any(|v| *v < 0.0) {
				return Err(ColormapError::InvalidTextLine {
					line: i + 1,
					msg: "Negative channel value".to_string(),
				});
			}

			colors.push(Rgb::from(color));
		}

		if colors.is_empty() {
			return Err(ColormapError::Empty { name: name.to_string() });
		}

		if let Some(n) = declared_colors {
			if n != colors.len() {
				warn!("{name}: header declares {n} colors but {} were read", colors.len());
			}
		}

		if reverse {
			colors.reverse();
		}

		// one scale factor for the whole table, not per entry
		let max = colors.iter().map(Rgb::max_channel).fold(f64::NEG_INFINITY, f64::max);
		if max <= 0.0 {
			return Err(ColormapError::ZeroMaximum { name: name.to_string() });
		}

		debug!("{name}: {} colors, scaled by {max}", colors.len());

		Ok(Palette {
			name: name.to_string(),
			colors: colors.iter().map(|c| c.scaled(max)).collect(),
			declared_colors,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numeric_tokens() {
		assert_eq!(parse_number("12"), Some(12.0));
		assert_eq!(parse_number("0.25"), Some(0.25));
		assert_eq!(parse_number("-3"), Some(-3.0));
		assert_eq!(parse_number("1e2"), Some(100.0));
		assert_eq!(parse_number("2.5E-1"), Some(0.25));
		assert_eq!(parse_number("ncolors=18"), None);
		assert_eq!(parse_number("#"), None);
		assert_eq!(parse_number("nan"), None);
		assert_eq!(parse_number("inf"), None);
	}

	#[test]
	fn color_lines() {
		assert_eq!(parse_color_line("10 20 30"), Some([10.0, 20.0, 30.0]));
		assert_eq!(parse_color_line("  0.1\t0.2   0.3  "), Some([0.1, 0.2, 0.3]));
		// labels between numbers don't matter, only the count of numbers does
		assert_eq!(parse_color_line("# 1 r 2 g 3 b"), Some([1.0, 2.0, 3.0]));
		assert_eq!(parse_color_line("ncolors 18"), None);
		assert_eq!(parse_color_line("1 2"), None);
		assert_eq!(parse_color_line("1 2 3 4"), None);
		assert_eq!(parse_color_line(""), None);
	}

	#[test]
	fn skips_non_color_lines() {
		let pal = Palette::from_rgb_string("t", "header\n10 20 30\n1 2 3 4\n40 50 60\n").unwrap();
		assert_eq!(pal.len(), 2);
		assert_eq!(pal[0], Rgb::from([10.0 / 60.0, 20.0 / 60.0, 30.0 / 60.0]));
		assert_eq!(pal[1], Rgb::from([40.0 / 60.0, 50.0 / 60.0, 1.0]));
	}

	#[test]
	fn ncolors_header() {
		let pal = Palette::from_rgb_string("t", "ncolors=2\n# r g b\n255 0 0\n0 0 255\n").unwrap();
		assert_eq!(pal.declared_colors, Some(2));
		assert_eq!(pal.len(), 2);

		let pal = Palette::from_rgb_string("t", "NCOLORS 5\n255 0 0\n").unwrap();
		assert_eq!(pal.declared_colors, Some(5));
		assert_eq!(pal.len(), 1);

		let pal = Palette::from_rgb_string("t", "255 0 0\n").unwrap();
		assert_eq!(pal.declared_colors, None);
	}

	#[test]
	fn ncolors_header_mismatch() {
		// the header is informational, every color line is still used
		let pal = Palette::from_rgb_string("t", "ncolors= 2\n255 0 0\n0 255 0\n0 0 255\n").unwrap();
		assert_eq!(pal.declared_colors, Some(2));
		assert_eq!(pal.len(), 3);

		let pal = Palette::from_rgb_string("t", "ncolors=4\n255 0 0\n").unwrap();
		assert_eq!(pal.declared_colors, Some(4));
		assert_eq!(pal.len(), 1);
	}

	#[test]
	fn reversed_by_name() {
		let pal = Palette::from_rgb_string("t_r", "1 0 0\n0 1 0\n0 0 2\n").unwrap();
		assert_eq!(pal.name, "t_r");
		assert_eq!(pal.colors, vec![
			Rgb::from([0.0, 0.0, 1.0]),
			Rgb::from([0.0, 0.5, 0.0]),
			Rgb::from([0.5, 0.0, 0.0]),
		]);
	}

	#[test]
	fn empty_table() {
		let err = Palette::from_rgb_string("t", "ncolors=0\n# nothing here\n").unwrap_err();
		assert!(matches!(err, ColormapError::Empty { .. }), "{err:?}");
	}

	#[test]
	fn all_black_table() {
		let err = Palette::from_rgb_string("t", "0 0 0\n0 0 0\n").unwrap_err();
		assert!(matches!(err, ColormapError::ZeroMaximum { .. }), "{err:?}");
	}

	#[test]
	fn negative_channel() {
		let err = Palette::from_rgb_string("t", "1 2 3\n-1 2 3\n").unwrap_err();
		assert!(matches!(err, ColormapError::InvalidTextLine { line: 2, .. }), "{err:?}");
	}
}
