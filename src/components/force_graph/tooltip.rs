//! Hover tooltip content and placement.

use super::state::NodeInfo;

/// Shown in place of a missing photo.
pub const NO_PHOTO: &str = "No photo available.";

/// What the tooltip panel shows for one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipContent {
	/// Person's name.
	pub title: String,
	/// Position/category line.
	pub category: String,
	/// Image URL, or `None` for the placeholder text.
	pub photo: Option<String>,
}

impl TooltipContent {
	/// Content for a hovered node.
	pub fn from_node(info: &NodeInfo) -> Self {
		Self {
			title: info.label.clone().unwrap_or_default(),
			category: info.category.clone().unwrap_or_default(),
			photo: info.photo.clone(),
		}
	}

	/// Alt text for the photo.
	pub fn photo_alt(&self) -> String {
		format!("Photo of {}", self.title)
	}
}

/// Top-left corner of the tooltip panel, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipPosition {
	/// Pixels from the viewport top.
	pub top: f64,
	/// Pixels from the viewport left.
	pub left: f64,
}

impl TooltipPosition {
	/// Place the panel down and to the right of a marker centred at `center`.
	///
	/// The offset is measured from the top-left of the marker's bounding box
	/// (`marker_radius`, which grows while hovered) and scaled by the resting
	/// radius `base_radius`. All values are screen pixels.
	pub fn beside_marker(center: (f64, f64), marker_radius: f64, base_radius: f64) -> Self {
		let (left, top) = (center.0 - marker_radius, center.1 - marker_radius);
		Self {
			top: top + base_radius * 2.0,
			left: left + base_radius * 4.0,
		}
	}

	/// Shift from canvas-relative to page coordinates.
	pub fn offset(self, dx: f64, dy: f64) -> Self {
		Self {
			top: self.top + dy,
			left: self.left + dx,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_fields_become_empty_and_placeholder() {
		let content = TooltipContent::from_node(&NodeInfo {
			id: "rec1".into(),
			..Default::default()
		});
		assert_eq!(content.title, "");
		assert_eq!(content.photo, None);
	}

	#[test]
	fn content_from_node() {
		let content = TooltipContent::from_node(&NodeInfo {
			id: "rec1".into(),
			label: Some("Ada".into()),
			category: Some("Engineer".into()),
			photo: Some("https://x/a.png".into()),
			..Default::default()
		});
		assert_eq!(content.title, "Ada");
		assert_eq!(content.category, "Engineer");
		assert_eq!(content.photo_alt(), "Photo of Ada");
	}

	#[test]
	fn sits_beside_enlarged_marker() {
		// hovered at k=1: marker 22px, resting 11px
		let pos = TooltipPosition::beside_marker((100.0, 50.0), 22.0, 11.0);
		assert_eq!(pos, TooltipPosition { top: 50.0, left: 122.0 });
		assert_eq!(
			pos.offset(10.0, 5.0),
			TooltipPosition { top: 55.0, left: 132.0 }
		);
	}
}
