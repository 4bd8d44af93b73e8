use std::fmt::{Display, Formatter};
use std::ops::Index;

use serde::Serialize;

/// A single palette color. Channels are in `[0, 1]` once they are part of a [Palette].
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize)]
pub struct Rgb {
	pub r: f64,
	pub g: f64,
	pub b: f64,
}

impl From<[f64; 3]> for Rgb {
	fn from(v: [f64; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<Rgb> for [f32; 3] {
	fn from(c: Rgb) -> Self {
		[c.r as f32, c.g as f32, c.b as f32]
	}
}

fn channel_to_8bits(v: f64) -> u8 {
	(v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Rgb {
	pub(crate) fn max_channel(&self) -> f64 {
		self.r.max(self.g).max(self.b)
	}

	pub(crate) fn scaled(&self, factor: f64) -> Self {
		Self {
			r: self.r / factor,
			g: self.g / factor,
			b: self.b / factor,
		}
	}

	pub fn to_rgb8(&self) -> [u8; 3] {
		[channel_to_8bits(self.r), channel_to_8bits(self.g), channel_to_8bits(self.b)]
	}
}

impl Display for Rgb {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let [r, g, b] = self.to_rgb8();
		write!(f, "#{r:02X}{g:02X}{b:02X}")
	}
}

/// An ordered list of normalized colors, tagged with the name it was requested under.
#[derive(Clone, Default, Debug, PartialEq, Serialize)]
pub struct Palette {
	pub name: String,
	pub colors: Vec<Rgb>,
	/// Value of the `ncolors` header, if the source file had one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub declared_colors: Option<usize>,
}

impl Palette {
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Rgb> {
		self.colors.iter()
	}

	pub fn get(&self, index: usize) -> Option<&Rgb> {
		self.colors.get(index)
	}

	pub fn to_rgb8(&self) -> Vec<[u8; 3]> {
		self.colors.iter().map(Rgb::to_rgb8).collect()
	}
}

impl Index<usize> for Palette {
	type Output = Rgb;

	fn index(&self, index: usize) -> &Self::Output {
		&self.colors[index]
	}
}

impl<'a> IntoIterator for &'a Palette {
	type Item = &'a Rgb;
	type IntoIter = std::slice::Iter<'a, Rgb>;

	fn into_iter(self) -> Self::IntoIter {
		self.colors.iter()
	}
}

impl From<&Palette> for Vec<[f32; 3]> {
	fn from(p: &Palette) -> Self {
		p.colors.iter().map(|&c| c.into()).collect()
	}
}
