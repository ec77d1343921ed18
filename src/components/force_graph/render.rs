//! Canvas rendering for the force graph.
//!
//! Rendering uses multiple passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Link lines (world space)
//! 3. Resting nodes, then the hovered node on top

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, NodeInfo};
use super::theme::Theme;

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let t = state.zoom.transform;
	let scale = ScaledValues::new(config, t.k);

	ctx.set_fill_style_str(&theme.background.color.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let _ = ctx.translate(t.x, t.y);
	let _ = ctx.scale(t.k, t.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, config, &scale, theme);

	ctx.restore();
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.set_stroke_style_str(&theme.edge.color.to_css());
	ctx.set_line_width(scale.edge_line_width);
	ctx.begin_path();
	state.graph.visit_edges(|n1, n2, _| {
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
	});
	ctx.stroke();
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let hovered = state.hover.hovered;

	state.graph.visit_nodes(|node| {
		if hovered != Some(node.index()) {
			draw_node(state, ctx, config, scale, theme, node);
		}
	});

	if let Some(idx) = hovered {
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				draw_node(state, ctx, config, scale, theme, node);
			}
		});
	}
}

fn draw_node(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	scale: &ScaledValues,
	theme: &Theme,
	node: &force_graph::Node<NodeInfo>,
) {
	let idx = node.index();
	let (x, y) = (node.x() as f64, node.y() as f64);
	let radius = state.marker_radius(idx, scale.node_radius, config.node.hover_growth);
	let info = &node.data.user_data;

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&info.color.to_css());
	ctx.fill();

	if theme.node.border_width > 0.0 {
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width * scale.border_scale);
		ctx.stroke();
	}

	if let Some(label) = &info.label {
		if state.label_visible(idx) {
			let (ox, oy) = scale.label_offset;
			ctx.set_fill_style_str(&theme.node.label_color.to_css());
			ctx.set_font(&scale.label_font);
			let _ = ctx.fill_text(label, x + ox, y + oy);
		}
	}
}
