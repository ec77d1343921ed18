//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node metadata, the
//! pan/zoom state, hover tracking and a cooling schedule that lets the layout
//! come to rest.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::{info, warn};

use super::scale::{ScaleConfig, ScaledValues};
use super::theme::{Color, OrdinalScale, Theme};
use super::tooltip::{TooltipContent, TooltipPosition};
use super::types::GraphData;
use super::zoom::{Extent, ZoomConfig, ZoomState};

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// Record id of the person.
	pub id: String,
	/// Drawn beside the marker and used as the tooltip title.
	pub label: Option<String>,
	/// Category text shown under `Position:`.
	pub category: Option<String>,
	/// Image URL for the tooltip.
	pub photo: Option<String>,
	/// Fill colour picked from the category.
	pub color: Color,
}

/// Layout forces.
#[derive(Clone, Debug)]
pub struct ForceSettings {
	/// Many-body strength; negative values repel.
	pub charge_strength: f32,
	/// Rest length of a link, world units.
	pub link_distance: f32,
	/// Point the centering force keeps the centroid on.
	pub center: (f32, f32),
}

impl Default for ForceSettings {
	fn default() -> Self {
		Self {
			charge_strength: -50.0,
			link_distance: 30.0,
			center: (0.0, 0.0),
		}
	}
}

impl ForceSettings {
	/// Translate into `force_graph` parameters at full strength.
	///
	/// The library spring has no rest length, so it is switched off and links
	/// are held at `link_distance` by [`ForceGraphState::apply_links`] instead.
	pub fn parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: -self.charge_strength * 3.0,
			force_spring: 0.0,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		}
	}
}

/// Cooling schedule: `alpha` decays from 1 toward 0 and scales every step.
/// The simulation ends once alpha falls below `alpha_min`.
#[derive(Clone, Debug)]
pub struct SimulationClock {
	/// Current cooling factor, starting at 1.
	pub alpha: f64,
	/// Alpha below which the simulation ends.
	pub alpha_min: f64,
	/// Fraction of the remaining alpha removed per step.
	pub alpha_decay: f64,
	ended: bool,
}

impl Default for SimulationClock {
	fn default() -> Self {
		let alpha_min: f64 = 0.001;
		Self {
			alpha: 1.0,
			alpha_min,
			// reach alpha_min in 300 steps
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			ended: false,
		}
	}
}

impl SimulationClock {
	/// Advance one step. Returns the alpha to integrate with, or `None` once ended.
	pub fn step(&mut self) -> Option<f64> {
		if self.ended {
			return None;
		}
		self.alpha += (0.0 - self.alpha) * self.alpha_decay;
		if self.alpha < self.alpha_min {
			self.ended = true;
			return None;
		}
		Some(self.alpha)
	}

	/// `true` once alpha has dropped below `alpha_min`.
	pub fn has_ended(&self) -> bool {
		self.ended
	}
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// Whether the pointer is down.
	pub active: bool,
	/// Pointer position at pan start.
	pub start_x: f64,
	pub start_y: f64,
	/// Transform translation at pan start.
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// One link held at the configured distance.
///
/// `strength` is the share of the length error corrected per step and `bias`
/// how much of that correction moves the target rather than the source. Both
/// follow endpoint degree so hubs move less than leaves.
#[derive(Clone, Copy, Debug)]
struct LinkSpring {
	source: DefaultNodeIdx,
	target: DefaultNodeIdx,
	strength: f32,
	bias: f32,
}

/// Hovered node plus a smoothed per-node growth intensity.
///
/// The hovered node's intensity eases toward 1.0, every other node's decays
/// toward 0.0 and is dropped once invisible, which restores the exact base
/// radius.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	/// Node under the pointer, if any.
	pub hovered: Option<DefaultNodeIdx>,
	intensity: HashMap<DefaultNodeIdx, f64>,
}

impl HoverState {
	const FADE_IN_SPEED: f64 = 12.0;
	const FADE_OUT_SPEED: f64 = 8.0;

	/// Returns `true` if the hovered node changed.
	pub fn set(&mut self, node: Option<DefaultNodeIdx>) -> bool {
		if self.hovered == node {
			return false;
		}
		self.hovered = node;
		if let Some(idx) = node {
			self.intensity.entry(idx).or_insert(0.0);
		}
		true
	}

	/// Ease intensities toward their targets over `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		let fade_in = 1.0 - (-Self::FADE_IN_SPEED * dt).exp();
		let fade_out = (-Self::FADE_OUT_SPEED * dt).exp();
		let hovered = self.hovered;
		self.intensity.retain(|idx, t| {
			if hovered == Some(*idx) {
				*t += (1.0 - *t) * fade_in;
				true
			} else {
				*t *= fade_out;
				*t > 0.005
			}
		});
	}

	/// Growth intensity of `idx`, 0 when at rest.
	pub fn intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.intensity.get(&idx).copied().unwrap_or(0.0)
	}
}

/// Core graph state combining physics simulation with interaction tracking.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop.
pub struct ForceGraphState {
	/// Physics simulation holding node positions.
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Pan/zoom transform.
	pub zoom: ZoomState,
	pub pan: PanState,
	pub hover: HoverState,
	/// Cooling schedule.
	pub clock: SimulationClock,
	pub settings: ForceSettings,
	/// Canvas width in pixels.
	pub width: f64,
	pub height: f64,
	links: Vec<LinkSpring>,
}

impl ForceGraphState {
	/// Build the simulation with default forces.
	pub fn new(data: &GraphData, width: f64, height: f64, theme: &Theme) -> Self {
		Self::with_settings(data, width, height, theme, ForceSettings::default())
	}

	/// Build the simulation with explicit forces.
	pub fn with_settings(
		data: &GraphData,
		width: f64,
		height: f64,
		theme: &Theme,
		settings: ForceSettings,
	) -> Self {
		let mut graph = ForceGraph::new(settings.parameters());
		let mut colors = OrdinalScale::new(theme.palette);
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();
		let mut degree: HashMap<DefaultNodeIdx, u32> = HashMap::new();

		let (cx, cy) = settings.center;
		for (i, node) in data.nodes.iter().enumerate() {
			let color = colors.color(node.category.as_deref().unwrap_or_default());
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (
				cx + (100.0 * angle.cos()) as f32,
				cy + (100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.name.clone(),
					category: node.category.clone(),
					photo: node.photo.clone(),
					color,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		let resolve = |id: &Option<String>| id.as_deref().and_then(|id| id_to_idx.get(id).copied());
		for link in &data.links {
			match (resolve(&link.source), resolve(&link.target)) {
				(Some(src), Some(tgt)) => {
					graph.add_edge(src, tgt, EdgeData::default());
					edges.push((src, tgt));
					*degree.entry(src).or_default() += 1;
					*degree.entry(tgt).or_default() += 1;
				}
				_ => warn!(
					"people-graph: skipping relationship {} ({:?} -> {:?}), endpoint not found",
					link.id, link.source, link.target
				),
			}
		}
		info!(
			"people-graph: simulating {} nodes, {} links",
			data.nodes.len(),
			edges.len()
		);

		let links = edges
			.into_iter()
			.map(|(source, target)| {
				let (ds, dt) = (degree[&source] as f32, degree[&target] as f32);
				LinkSpring {
					source,
					target,
					strength: 1.0 / ds.min(dt),
					bias: ds / (ds + dt),
				}
			})
			.collect();

		Self {
			graph,
			links,
			zoom: ZoomState::new(ZoomConfig::default(), width, height),
			pan: PanState::default(),
			hover: HoverState::default(),
			clock: SimulationClock::default(),
			settings,
			width,
			height,
		}
	}

	/// Whether the cooling schedule has run out and the layout is frozen.
	pub fn is_converged(&self) -> bool {
		self.clock.has_ended()
	}

	/// World-space size of the laid-out graph, available once it has settled.
	pub fn settled_size(&self, config: &ScaleConfig) -> Option<(f64, f64)> {
		if !self.is_converged() {
			return None;
		}
		self.bounds(config.node.radius)
			.map(|b| (b.x1 - b.x0, b.y1 - b.y0))
	}

	/// Bounding box of all markers, padded by `radius`.
	pub fn bounds(&self, radius: f64) -> Option<Extent> {
		let mut extent: Option<Extent> = None;
		self.graph.visit_nodes(|node| {
			let (x, y) = (node.x() as f64, node.y() as f64);
			extent = Some(match extent {
				None => Extent {
					x0: x - radius,
					y0: y - radius,
					x1: x + radius,
					y1: y + radius,
				},
				Some(e) => Extent {
					x0: e.x0.min(x - radius),
					y0: e.y0.min(y - radius),
					x1: e.x1.max(x + radius),
					y1: e.y1.max(y + radius),
				},
			});
		});
		extent
	}

	/// Current radius of a node's marker, including hover growth.
	pub fn marker_radius(&self, idx: DefaultNodeIdx, base: f64, growth: f64) -> f64 {
		base * (1.0 + (growth - 1.0) * self.hover.intensity(idx))
	}

	/// A hovered node's label is hidden so it does not overlap the enlarged marker.
	pub fn label_visible(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.hovered != Some(idx)
	}

	/// Node whose marker contains the screen point `(sx, sy)`.
	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.zoom.transform.invert(sx, sy);
		let scale = ScaledValues::new(config, self.zoom.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let hit = self.marker_radius(node.index(), scale.hit_radius, config.node.hover_growth);
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(node.index());
			}
		});
		found
	}

	/// Returns `true` if the hovered node changed.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) -> bool {
		self.hover.set(node)
	}

	/// Display metadata for `idx`.
	pub fn node_info(&self, idx: DefaultNodeIdx) -> Option<NodeInfo> {
		let mut info = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				info = Some(node.data.user_data.clone());
			}
		});
		info
	}

	/// World position of `idx`.
	pub fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut pos = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pos = Some((node.x() as f64, node.y() as f64));
			}
		});
		pos
	}

	/// Tooltip content for the hovered node.
	pub fn hovered_tooltip(&self) -> Option<TooltipContent> {
		let idx = self.hover.hovered?;
		self.node_info(idx).map(|info| TooltipContent::from_node(&info))
	}

	/// Where the tooltip goes for the hovered node, in canvas pixels.
	pub fn tooltip_position(&self, config: &ScaleConfig) -> Option<TooltipPosition> {
		let idx = self.hover.hovered?;
		let (wx, wy) = self.node_position(idx)?;
		let k = self.zoom.transform.k;
		let base = ScaledValues::new(config, k).node_radius;
		let marker = self.marker_radius(idx, base, config.node.hover_growth);
		Some(TooltipPosition::beside_marker(
			self.zoom.transform.apply(wx, wy),
			marker * k,
			base * k,
		))
	}

	/// Advance physics, centering and hover animation by `dt` seconds.
	///
	/// Alpha weakens the repulsion as the layout cools. The integration step
	/// stays `dt` so nodes keep moving until the clock runs out.
	pub fn tick(&mut self, dt: f32) {
		let was_running = !self.clock.has_ended();
		match self.clock.step() {
			Some(alpha) => {
				self.graph.parameters.force_charge =
					self.settings.parameters().force_charge * alpha as f32;
				self.graph.update(dt);
				self.apply_links();
				self.apply_centering();
			}
			None if was_running => info!("people-graph: layout settled"),
			None => {}
		}
		self.hover.tick(dt as f64);
	}

	/// Pull or push each link's endpoints toward `link_distance`.
	///
	/// Links are relaxed in order, each seeing the positions left by the
	/// previous one.
	pub fn apply_links(&mut self) {
		if self.links.is_empty() {
			return;
		}
		let mut pos: HashMap<DefaultNodeIdx, (f32, f32)> = HashMap::new();
		self.graph.visit_nodes(|node| {
			pos.insert(node.index(), (node.x(), node.y()));
		});

		let distance = self.settings.link_distance;
		for link in &self.links {
			let (Some(&(sx, sy)), Some(&(tx, ty))) = (pos.get(&link.source), pos.get(&link.target))
			else {
				continue;
			};
			let (dx, dy) = (tx - sx, ty - sy);
			let d = (dx * dx + dy * dy).sqrt();
			if d == 0.0 {
				continue;
			}
			let l = (d - distance) / d * link.strength;
			let (cx, cy) = (dx * l, dy * l);
			pos.insert(link.target, (tx - cx * link.bias, ty - cy * link.bias));
			if let Some(p) = pos.get_mut(&link.source) {
				p.0 += cx * (1.0 - link.bias);
				p.1 += cy * (1.0 - link.bias);
			}
		}

		self.graph.visit_nodes_mut(|node| {
			if let Some(&(x, y)) = pos.get(&node.index()) {
				node.data.x = x;
				node.data.y = y;
			}
		});
	}

	/// Shift every node so the centroid lands on the configured centre.
	pub fn apply_centering(&mut self) {
		let (mut sx, mut sy, mut n) = (0.0f32, 0.0f32, 0usize);
		self.graph.visit_nodes(|node| {
			sx += node.x();
			sy += node.y();
			n += 1;
		});
		if n == 0 {
			return;
		}
		let (cx, cy) = self.settings.center;
		let (dx, dy) = (cx - sx / n as f32, cy - sy / n as f32);
		self.graph.visit_nodes_mut(|node| {
			node.data.x += dx;
			node.data.y += dy;
		});
	}

	/// Follow a canvas resize, keeping the framing.
	pub fn resize(&mut self, width: f64, height: f64, config: &ScaleConfig) {
		self.width = width;
		self.height = height;
		let settled = self.settled_size(config);
		self.zoom.resize(width, height, settled);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn node(id: &str, name: &str, category: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			name: Some(name.into()),
			category: Some(category.into()),
			..Default::default()
		}
	}

	fn link(id: &str, source: Option<&str>, target: Option<&str>) -> GraphLink {
		GraphLink {
			id: id.into(),
			source: source.map(Into::into),
			target: target.map(Into::into),
			..Default::default()
		}
	}

	fn sample() -> GraphData {
		GraphData {
			nodes: vec![
				node("a", "Ada", "Engineer"),
				node("b", "Brian", "Designer"),
				node("c", "Cleo", "Engineer"),
			],
			links: vec![link("l1", Some("a"), Some("b")), link("l2", Some("b"), Some("c"))],
		}
	}

	fn index_of(state: &ForceGraphState, id: &str) -> DefaultNodeIdx {
		let mut found = None;
		state.graph.visit_nodes(|n| {
			if n.data.user_data.id == id {
				found = Some(n.index());
			}
		});
		found.unwrap()
	}

	#[test]
	fn links_resolve_by_id_and_skip_dangling() {
		let mut data = sample();
		data.links.push(link("l3", None, Some("a")));
		data.links.push(link("l4", Some("a"), Some("nobody")));
		let state = ForceGraphState::new(&data, 800.0, 600.0, &Theme::default());
		assert_eq!(state.links.len(), 2);

		let mut pairs = Vec::new();
		state.graph.visit_edges(|n1, n2, _| {
			let (a, b) = (n1.data.user_data.id.clone(), n2.data.user_data.id.clone());
			pairs.push(if a <= b { (a, b) } else { (b, a) })
		});
		pairs.sort();
		assert_eq!(
			pairs,
			[("a".to_string(), "b".to_string()), ("b".to_string(), "c".to_string())]
		);
	}

	#[test]
	fn colors_follow_category() {
		let state = ForceGraphState::new(&sample(), 800.0, 600.0, &Theme::default());
		let color = |id| state.node_info(index_of(&state, id)).unwrap().color;
		assert_eq!(color("a"), color("c"));
		assert_ne!(color("a"), color("b"));
	}

	#[test]
	fn hover_enter_and_exit_restores_marker_and_label() {
		let mut state = ForceGraphState::new(&sample(), 800.0, 600.0, &Theme::default());
		let idx = index_of(&state, "b");
		let before = (state.marker_radius(idx, 11.0, 2.0), state.label_visible(idx));
		assert_eq!(before, (11.0, true));

		assert!(state.set_hover(Some(idx)));
		assert!(!state.label_visible(idx));
		for _ in 0..60 {
			state.hover.tick(0.016);
		}
		assert!((state.marker_radius(idx, 11.0, 2.0) - 22.0).abs() < 0.01);

		assert!(state.set_hover(None));
		for _ in 0..120 {
			state.hover.tick(0.016);
		}
		assert_eq!(
			(state.marker_radius(idx, 11.0, 2.0), state.label_visible(idx)),
			before
		);
	}

	#[test]
	fn tooltip_content_for_hovered_node() {
		let mut state = ForceGraphState::new(&sample(), 800.0, 600.0, &Theme::default());
		assert!(state.hovered_tooltip().is_none());
		assert!(state.tooltip_position(&ScaleConfig::default()).is_none());

		state.set_hover(Some(index_of(&state, "a")));
		let content = state.hovered_tooltip().unwrap();
		assert_eq!(content.title, "Ada");
		assert_eq!(content.category, "Engineer");
		assert!(state.tooltip_position(&ScaleConfig::default()).is_some());
	}

	#[test]
	fn hit_testing_uses_view_transform() {
		let state = ForceGraphState::new(&sample(), 800.0, 600.0, &Theme::default());
		let config = ScaleConfig::default();
		let idx = index_of(&state, "a");
		let (wx, wy) = state.node_position(idx).unwrap();
		let (sx, sy) = state.zoom.transform.apply(wx, wy);
		assert_eq!(state.node_at_position(sx, sy, &config), Some(idx));
		assert_eq!(state.node_at_position(sx + 500.0, sy + 500.0, &config), None);
	}

	fn settle(state: &mut ForceGraphState) -> usize {
		let mut ticks = 0;
		while !state.is_converged() {
			state.tick(0.016);
			ticks += 1;
			assert!(ticks <= 400, "simulation did not settle");
		}
		ticks
	}

	fn link_lengths(state: &ForceGraphState) -> Vec<f64> {
		let mut lengths = Vec::new();
		state.graph.visit_edges(|n1, n2, _| {
			let (dx, dy) = (n2.x() as f64 - n1.x() as f64, n2.y() as f64 - n1.y() as f64);
			lengths.push((dx * dx + dy * dy).sqrt());
		});
		lengths
	}

	fn star(leaves: usize) -> GraphData {
		GraphData {
			nodes: (0..=leaves)
				.map(|i| node(&format!("n{i}"), "", "Engineer"))
				.collect(),
			links: (1..=leaves)
				.map(|i| {
					let leaf = format!("n{i}");
					link(&format!("l{i}"), Some("n0"), Some(leaf.as_str()))
				})
				.collect(),
		}
	}

	fn chain(len: usize) -> GraphData {
		GraphData {
			nodes: (0..len).map(|i| node(&format!("n{i}"), "", "Engineer")).collect(),
			links: (1..len)
				.map(|i| {
					let (prev, next) = (format!("n{}", i - 1), format!("n{i}"));
					link(&format!("l{i}"), Some(prev.as_str()), Some(next.as_str()))
				})
				.collect(),
		}
	}

	#[test]
	fn simulation_cools_and_stays_centred() {
		let mut state = ForceGraphState::new(&sample(), 800.0, 600.0, &Theme::default());
		let config = ScaleConfig::default();
		assert!(state.settled_size(&config).is_none());

		settle(&mut state);

		let (mut sx, mut sy) = (0.0, 0.0);
		state.graph.visit_nodes(|n| {
			sx += n.x() as f64;
			sy += n.y() as f64;
		});
		assert!((sx / 3.0).abs() < 0.01 && (sy / 3.0).abs() < 0.01);
		assert!(state.settled_size(&config).is_some());
	}

	#[test]
	fn star_hub_settles_at_centre() {
		let data = star(10);
		let mut state = ForceGraphState::new(&data, 800.0, 600.0, &Theme::default());
		let hub = index_of(&state, "n0");
		let (hx, hy) = state.node_position(hub).unwrap();
		assert!((hx * hx + hy * hy).sqrt() > 99.0);

		settle(&mut state);

		let (hx, hy) = state.node_position(hub).unwrap();
		assert!((hx * hx + hy * hy).sqrt() < 2.0, "hub at ({hx}, {hy})");
		for length in link_lengths(&state) {
			assert!((length - 30.0).abs() < 1.0, "link length {length}");
		}
	}

	#[test]
	fn links_settle_at_link_distance() {
		for len in [2, 5, 20] {
			let mut state = ForceGraphState::new(&chain(len), 800.0, 600.0, &Theme::default());
			settle(&mut state);
			let lengths = link_lengths(&state);
			let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
			assert!((mean - 30.0).abs() < 1.0, "chain of {len}: mean link {mean}");
		}
	}

	#[test]
	fn longer_link_distance_spreads_layout() {
		let settings = ForceSettings {
			link_distance: 60.0,
			..Default::default()
		};
		let mut state =
			ForceGraphState::with_settings(&chain(5), 800.0, 600.0, &Theme::default(), settings);
		settle(&mut state);
		let lengths = link_lengths(&state);
		let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
		assert!((mean - 60.0).abs() < 2.0, "mean link {mean}");
	}

	#[test]
	fn layout_is_at_rest_when_clock_ends() {
		let mut state = ForceGraphState::new(&star(6), 800.0, 600.0, &Theme::default());
		let mut ticks = 0;
		while ticks < 290 {
			state.tick(0.016);
			ticks += 1;
		}
		let before = state.bounds(0.0).unwrap();
		settle(&mut state);
		let after = state.bounds(0.0).unwrap();
		for (a, b) in [
			(before.x0, after.x0),
			(before.y0, after.y0),
			(before.x1, after.x1),
			(before.y1, after.y1),
		] {
			assert!((a - b).abs() < 0.5, "still moving: {a} -> {b}");
		}
	}

	#[test]
	fn clock_ends_after_about_three_hundred_steps() {
		let mut clock = SimulationClock::default();
		let mut steps = 0;
		while clock.step().is_some() {
			steps += 1;
		}
		assert!((295..=300).contains(&steps), "steps = {steps}");
		assert!(clock.has_ended());
		assert_eq!(clock.step(), None);
	}

	#[test]
	fn empty_graph_is_fine() {
		let mut state = ForceGraphState::new(&GraphData::default(), 800.0, 600.0, &Theme::default());
		state.tick(0.016);
		assert!(state.bounds(11.0).is_none());
		assert_eq!(state.node_at_position(400.0, 300.0, &ScaleConfig::default()), None);
	}
}
