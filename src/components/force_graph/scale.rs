//! Zoom-dependent scaling configuration for graph visuals.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: The coordinate system of the graph. Values in world-space
//!   scale proportionally with zoom (appear larger when zoomed in).
//! - **Screen-space**: Pixel coordinates on the canvas. Values in screen-space
//!   remain constant regardless of zoom level.
//!
//! Markers and labels live in world-space, so zooming in enlarges them the same
//! way it spreads the layout. Link strokes keep a fixed pixel width.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant world-space size. Appears larger when zoomed in.
	World,
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// Compute the world-space value for a given base value and zoom level.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Configuration for node visual scaling.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Marker radius in world units.
	pub radius: f64,
	/// How the marker radius follows zoom.
	pub radius_behavior: ScaleBehavior,
	/// Marker radius multiplier while hovered.
	pub hover_growth: f64,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	/// How the hit radius follows zoom.
	pub hit_behavior: ScaleBehavior,
	/// Label font size in world units.
	pub label_size: f64,
	/// How the label size follows zoom.
	pub label_behavior: ScaleBehavior,
	/// Label anchor relative to the node centre, world units.
	pub label_offset: (f64, f64),
}

/// Configuration for edge visual scaling.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Line width in screen pixels.
	pub line_width: f64,
	/// How the line width follows zoom.
	pub line_behavior: ScaleBehavior,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Marker, hit and label sizes.
	pub node: NodeScaleConfig,
	/// Link strokes.
	pub edge: EdgeScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 11.0,
				radius_behavior: ScaleBehavior::World,
				hover_growth: 2.0,
				hit_radius: 11.0,
				// keep markers pointable when zoomed far out
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 6.0,
					max_screen: f64::INFINITY,
				},
				label_size: 10.0,
				label_behavior: ScaleBehavior::World,
				label_offset: (6.0, 3.0),
			},
			edge: EdgeScaleConfig {
				line_width: 1.5,
				line_behavior: ScaleBehavior::Screen,
			},
		}
	}
}

/// Pre-computed scale values for a specific zoom level.
///
/// Create this once per frame and pass it to rendering functions.
/// All sizes are in world-space (ready to use after canvas transform).
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Resting marker radius.
	pub node_radius: f64,
	/// Pointer hit radius.
	pub hit_radius: f64,
	/// Label font string (e.g., "10px sans-serif").
	pub label_font: String,
	/// Label anchor offset from the node centre.
	pub label_offset: (f64, f64),
	/// Link stroke width.
	pub edge_line_width: f64,
	/// Border width in world-space for a screen-pixel border.
	pub border_scale: f64,
}

impl ScaledValues {
	/// Evaluate every size in `config` at zoom level `k`.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let node = &config.node;
		Self {
			node_radius: node.radius_behavior.apply(node.radius, k),
			hit_radius: node.hit_behavior.apply(node.hit_radius, k),
			label_font: format!(
				"{}px sans-serif",
				node.label_behavior.apply(node.label_size, k)
			),
			label_offset: node.label_offset,
			edge_line_width: config.edge.line_behavior.apply(config.edge.line_width, k),
			border_scale: 1.0 / k,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn behaviors() {
		assert_eq!(ScaleBehavior::World.apply(11.0, 4.0), 11.0);
		assert_eq!(ScaleBehavior::Screen.apply(1.5, 3.0), 0.5);
		let clamped = ScaleBehavior::Clamped {
			min_screen: 6.0,
			max_screen: f64::INFINITY,
		};
		// 11 world units at k=0.5 is 5.5px, below the 6px floor
		assert_eq!(clamped.apply(11.0, 0.5), 12.0);
		assert_eq!(clamped.apply(11.0, 2.0), 11.0);
	}

	#[test]
	fn scaled_values_at_unit_zoom() {
		let values = ScaledValues::new(&ScaleConfig::default(), 1.0);
		assert_eq!(values.node_radius, 11.0);
		assert_eq!(values.edge_line_width, 1.5);
		assert_eq!(values.label_font, "10px sans-serif");
	}
}
