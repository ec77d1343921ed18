//! Visual theming for the force graph.
//!
//! Provides the categorical node palette and the background, edge and label
//! styles for the light and dark themes.

use std::collections::HashMap;

use crate::config::ThemeChoice;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Colour with alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// CSS colour string: `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Ten-colour categorical palette (d3 `schemeCategory10`).
pub const CATEGORY10: [Color; 10] = [
	Color::rgb(0x1f, 0x77, 0xb4),
	Color::rgb(0xff, 0x7f, 0x0e),
	Color::rgb(0x2c, 0xa0, 0x2c),
	Color::rgb(0xd6, 0x27, 0x28),
	Color::rgb(0x94, 0x67, 0xbd),
	Color::rgb(0x8c, 0x56, 0x4b),
	Color::rgb(0xe3, 0x77, 0xc2),
	Color::rgb(0x7f, 0x7f, 0x7f),
	Color::rgb(0xbc, 0xbd, 0x22),
	Color::rgb(0x17, 0xbe, 0xcf),
];

/// Maps category values to palette colours in first-seen order.
///
/// The first distinct category gets palette entry 0, the next entry 1, and so
/// on, wrapping around once the palette is exhausted. A category keeps its
/// colour for the lifetime of the scale.
#[derive(Clone, Debug)]
pub struct OrdinalScale {
	palette: Vec<Color>,
	assigned: HashMap<String, usize>,
}

impl OrdinalScale {
	/// Empty scale over `palette`.
	pub fn new(palette: &[Color]) -> Self {
		Self {
			palette: palette.to_vec(),
			assigned: HashMap::new(),
		}
	}

	/// Colour for `category`, assigning the next palette entry on first sight.
	pub fn color(&mut self, category: &str) -> Color {
		let next = self.assigned.len();
		let slot = *self.assigned.entry(category.to_string()).or_insert(next);
		self.palette[slot % self.palette.len()]
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Canvas fill.
	pub color: Color,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Link stroke colour.
	pub color: Color,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Border/stroke width in screen pixels (0 = no border)
	pub border_width: f64,
	/// Marker outline colour.
	pub border_color: Color,
	/// Label text colour.
	pub label_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Preset name.
	pub name: &'static str,
	/// Canvas fill.
	pub background: BackgroundStyle,
	/// Link strokes.
	pub edge: EdgeStyle,
	/// Marker outline and labels.
	pub node: NodeStyle,
	/// Categorical node palette.
	pub palette: &'static [Color],
}

impl Theme {
	/// White page, grey links, dark labels (default)
	pub fn light() -> Self {
		Self {
			name: "light",
			background: BackgroundStyle {
				color: Color::rgb(255, 255, 255),
			},
			edge: EdgeStyle {
				color: Color::rgba(153, 153, 153, 0.6),
			},
			node: NodeStyle {
				border_width: 1.5,
				border_color: Color::rgb(255, 255, 255),
				label_color: Color::rgb(34, 34, 34),
			},
			palette: &CATEGORY10,
		}
	}

	/// Dark background for projected or dimmed displays
	pub fn dark() -> Self {
		Self {
			name: "dark",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
			},
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.5),
			},
			node: NodeStyle {
				border_width: 1.0,
				border_color: Color::rgba(255, 255, 255, 0.6),
				label_color: Color::rgba(255, 255, 255, 0.85),
			},
			palette: &CATEGORY10,
		}
	}

	/// Theme for a configured choice.
	pub fn from_choice(choice: ThemeChoice) -> Self {
		match choice {
			ThemeChoice::Light => Self::light(),
			ThemeChoice::Dark => Self::dark(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ordinal_scale_assigns_in_first_seen_order() {
		let mut scale = OrdinalScale::new(&CATEGORY10);
		assert_eq!(scale.color("Engineer"), CATEGORY10[0]);
		assert_eq!(scale.color("Designer"), CATEGORY10[1]);
		assert_eq!(scale.color("Engineer"), CATEGORY10[0]);
		assert_eq!(scale.color(""), CATEGORY10[2]);
	}

	#[test]
	fn ordinal_scale_wraps_palette() {
		let mut scale = OrdinalScale::new(&CATEGORY10[..2]);
		scale.color("a");
		scale.color("b");
		assert_eq!(scale.color("c"), CATEGORY10[0]);
	}

	#[test]
	fn css_output() {
		assert_eq!(Color::rgb(31, 119, 180).to_css(), "#1f77b4");
		assert_eq!(
			Color::rgba(153, 153, 153, 0.6).to_css(),
			"rgba(153, 153, 153, 0.6)"
		);
	}

	#[test]
	fn theme_choice_selects_theme() {
		assert_eq!(Theme::from_choice(ThemeChoice::Dark).name, "dark");
		assert_eq!(Theme::default().name, "light");
	}
}
