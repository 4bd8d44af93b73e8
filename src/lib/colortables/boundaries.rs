use crate::colortables::error::ColormapError;

/// Parses the contents of a `.bound` file: one value per line, kept in file order.
/// Blank lines are ignored. `inf` and `-inf` are allowed for open outer edges, NaN is not.
pub fn parse_boundaries<S: AsRef<str>>(s: S) -> Result<Vec<f64>, ColormapError> {
	let mut boundaries = Vec::new();

	for (i, line) in s.as_ref().lines().enumerate() {
		let trimmed_line = line.trim();
		if trimmed_line.is_empty() {
			continue;
		}

		let value = trimmed_line.parse::<f64>().map_err(|_| ColormapError::InvalidTextLine {
			line: i + 1,
			msg: format!("\"{trimmed_line}\" is not a number"),
		})?;

		if value.is_nan() {
			return Err(ColormapError::InvalidTextLine {
				line: i + 1,
				msg: "NaN is not a valid boundary".to_string(),
			});
		}

		boundaries.push(value);
	}

	Ok(boundaries)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn file_order() {
		assert_eq!(parse_boundaries("0\n5\n10\n").unwrap(), vec![0.0, 5.0, 10.0]);
		assert_eq!(parse_boundaries("10\r\n5\r\n0").unwrap(), vec![10.0, 5.0, 0.0]);
	}

	#[test]
	fn blank_and_padded_lines() {
		assert_eq!(parse_boundaries("  -1.5 \n\n2e1\n   \n").unwrap(), vec![-1.5, 20.0]);
		assert!(parse_boundaries("").unwrap().is_empty());
	}

	#[test]
	fn non_numeric_line() {
		let err = parse_boundaries("0\n5\nten\n").unwrap_err();
		match err {
			ColormapError::InvalidTextLine { line, msg } => {
				assert_eq!(line, 3);
				assert_eq!(msg, "\"ten\" is not a number");
			}
			other => panic!("unexpected error {other:?}"),
		}

		// a line holding two numbers is not one value either
		assert!(parse_boundaries("0 5\n").is_err());
	}

	#[test]
	fn infinite_outer_edges() {
		assert_eq!(parse_boundaries("-inf\n0\n10\ninf\n").unwrap(), vec![f64::NEG_INFINITY, 0.0, 10.0, f64::INFINITY]);
	}

	#[test]
	fn nan_line() {
		match parse_boundaries("0\nnan\n10\n").unwrap_err() {
			ColormapError::InvalidTextLine { line, msg } => {
				assert_eq!(line, 2);
				assert_eq!(msg, "NaN is not a valid boundary");
			}
			other => panic!("unexpected error {other:?}"),
		}
	}
}
