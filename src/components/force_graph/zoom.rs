//! Pan/zoom transform with a clamped scale and a bounded pannable area.
//!
//! Every change goes through [`ZoomState::apply`]: the scale is clamped, the
//! translate extent is recomputed for the new scale, and the translation is
//! pulled back inside it. The resulting centre (as a fraction of the viewport)
//! and scale are remembered so a window resize can restore the same framing.

/// Translate + uniform scale mapping world coordinates to screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Horizontal translation in pixels.
	pub x: f64,
	/// Vertical translation in pixels.
	pub y: f64,
	/// Zoom factor (1.0 = 100%).
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Transform translating by `(x, y)` and scaling by `k`.
	pub fn new(x: f64, y: f64, k: f64) -> Self {
		Self { x, y, k }
	}

	/// World → screen.
	pub fn apply(&self, wx: f64, wy: f64) -> (f64, f64) {
		(wx * self.k + self.x, wy * self.k + self.y)
	}

	/// Screen → world.
	pub fn invert(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Shift by a world-space offset.
	fn translate(self, dx: f64, dy: f64) -> Self {
		Self {
			x: self.x + self.k * dx,
			y: self.y + self.k * dy,
			k: self.k,
		}
	}
}

/// Axis-aligned world-space rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
	/// Left edge.
	pub x0: f64,
	/// Top edge.
	pub y0: f64,
	/// Right edge.
	pub x1: f64,
	/// Bottom edge.
	pub y1: f64,
}

/// Zoom limits and wheel sensitivity.
#[derive(Clone, Debug)]
pub struct ZoomConfig {
	/// Allowed zoom range, inclusive.
	pub scale_extent: (f64, f64),
	/// Slack around the pannable area, in screen pixels.
	pub margin: f64,
	/// Zoom multiplier per wheel notch.
	pub wheel_step: f64,
}

impl Default for ZoomConfig {
	fn default() -> Self {
		Self {
			scale_extent: (0.5, 5.0),
			margin: 100.0,
			wheel_step: 1.1,
		}
	}
}

/// Current view plus what is needed to keep it in bounds.
#[derive(Clone, Debug)]
pub struct ZoomState {
	/// Limits applied to every change.
	pub config: ZoomConfig,
	/// Current transform.
	pub transform: ViewTransform,
	/// Translation as a fraction of the viewport size.
	pub center: (f64, f64),
	/// Canvas size in pixels.
	pub viewport: (f64, f64),
	extent: Extent,
}

impl ZoomState {
	/// Start with the world origin at the viewport centre and unit scale.
	pub fn new(config: ZoomConfig, width: f64, height: f64) -> Self {
		let mut state = Self {
			config,
			transform: ViewTransform::default(),
			center: (0.5, 0.5),
			viewport: (width, height),
			extent: Extent {
				x0: f64::NEG_INFINITY,
				y0: f64::NEG_INFINITY,
				x1: f64::INFINITY,
				y1: f64::INFINITY,
			},
		};
		state.apply(ViewTransform::new(width * 0.5, height * 0.5, 1.0), None);
		state
	}

	/// Clamp `k` into the configured scale extent.
	pub fn clamp_scale(&self, k: f64) -> f64 {
		let (lo, hi) = self.config.scale_extent;
		k.clamp(lo, hi)
	}

	/// Pannable world area for scale `k`.
	///
	/// `graph_size` is the laid-out graph's world-space width and height; it is
	/// only passed once the simulation has settled; before that the area is
	/// sized from the viewport alone.
	pub fn compute_extent(&self, k: f64, graph_size: Option<(f64, f64)>) -> Extent {
		let (w, h) = self.viewport;
		let m = self.config.margin;
		let (half_x, half_y) = match graph_size {
			None => (w + m, h + m),
			Some((gw, gh)) => {
				let (box_w, box_h) = (gw * k, gh * k);
				(w + box_w / 2.0 - m, h + box_h / 2.0 - m)
			}
		};
		Extent {
			x0: -half_x / k,
			y0: -half_y / k,
			x1: half_x / k,
			y1: half_y / k,
		}
	}

	/// Pull `t` back so the visible world rectangle stays inside `extent`.
	/// When the extent is narrower than the viewport the two are centred.
	pub fn constrain(&self, t: ViewTransform, extent: Extent) -> ViewTransform {
		let (w, h) = self.viewport;
		let (left, top) = t.invert(0.0, 0.0);
		let (right, bottom) = t.invert(w, h);
		let shift = |d0: f64, d1: f64| {
			if d1 > d0 {
				(d0 + d1) / 2.0
			} else if d0 < 0.0 {
				d0
			} else {
				d1.max(0.0)
			}
		};
		t.translate(
			shift(left - extent.x0, right - extent.x1),
			shift(top - extent.y0, bottom - extent.y1),
		)
	}

	/// Install a proposed transform: clamp, bound, and remember the framing.
	pub fn apply(&mut self, proposed: ViewTransform, graph_size: Option<(f64, f64)>) {
		let k = self.clamp_scale(proposed.k);
		self.extent = self.compute_extent(k, graph_size);
		let t = self.constrain(ViewTransform { k, ..proposed }, self.extent);

		let (w, h) = self.viewport;
		if w > 0.0 && h > 0.0 {
			self.center = (t.x / w, t.y / h);
		}
		self.transform = t;
	}

	/// Scale by `factor` keeping the screen point `(px, py)` fixed.
	pub fn zoom_at(&mut self, px: f64, py: f64, factor: f64, graph_size: Option<(f64, f64)>) {
		let t = self.transform;
		let k = self.clamp_scale(t.k * factor);
		let ratio = k / t.k;
		let proposed = ViewTransform::new(px - (px - t.x) * ratio, py - (py - t.y) * ratio, k);
		self.apply(proposed, graph_size);
	}

	/// One wheel notch; positive `delta_y` zooms out.
	pub fn wheel(&mut self, px: f64, py: f64, delta_y: f64, graph_size: Option<(f64, f64)>) {
		let step = self.config.wheel_step;
		let factor = if delta_y > 0.0 { 1.0 / step } else { step };
		self.zoom_at(px, py, factor, graph_size);
	}

	/// Move to a new screen-space translation at the current scale.
	pub fn pan_to(&mut self, x: f64, y: f64, graph_size: Option<(f64, f64)>) {
		let k = self.transform.k;
		self.apply(ViewTransform::new(x, y, k), graph_size);
	}

	/// Reapply the remembered centre fraction and scale to a new viewport.
	pub fn resize(&mut self, width: f64, height: f64, graph_size: Option<(f64, f64)>) {
		self.viewport = (width, height);
		let (cx, cy) = self.center;
		let proposed = ViewTransform::new(width * cx, height * cy, self.transform.k);
		self.apply(proposed, graph_size);
	}
}
