//! Leptos component wrapping the force-directed graph canvas.
//!
//! The component creates an HTML canvas plus a floating tooltip panel and wires
//! up mouse/wheel handlers for hovering, panning and zooming. An animation loop
//! runs via `requestAnimationFrame`, stepping the simulation and redrawing
//! each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::scale::ScaleConfig;
use super::state::ForceGraphState;
use super::theme::Theme;
use super::tooltip::{NO_PHOTO, TooltipContent, TooltipPosition};
use super::types::GraphData;
use crate::config::ThemeChoice;

/// Seconds simulated per animation frame.
const FRAME_DT: f32 = 0.016;

/// Bundles graph simulation state with visual configuration.
struct GraphContext {
	state: ForceGraphState,
	scale: ScaleConfig,
	theme: Theme,
}

impl GraphContext {
	/// Move the tooltip next to the hovered node, if any.
	fn place_tooltip(&self, canvas: &HtmlCanvasElement, position: RwSignal<TooltipPosition>) {
		if let Some(pos) = self.state.tooltip_position(&self.scale) {
			let rect = canvas.get_bounding_client_rect();
			position.set(pos.offset(rect.left(), rect.top()));
		}
	}
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>, fallback: f64| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
	};
	(dim(window.inner_width(), 800.0), dim(window.inner_height(), 600.0))
}

/// Pointer position relative to the canvas.
fn pointer(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders an interactive force-directed graph on a canvas element.
///
/// The graph is built once from the value of `data` at mount time; later
/// changes to the signal are not picked up. The component sizes itself to its
/// parent container by default; set `fullscreen = true` to fill the viewport
/// and follow window resizes.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = ThemeChoice::Light)] theme: ThemeChoice,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let tooltip = RwSignal::new(None::<TooltipContent>);
	let tooltip_pos = RwSignal::new(TooltipPosition::default());

	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			viewport_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("people-graph: 2d canvas context unavailable");
				return;
			}
		};

		let theme = Theme::from_choice(theme);
		*context_init.borrow_mut() = Some(GraphContext {
			state: ForceGraphState::new(&data.get_untracked(), w, h, &theme),
			scale: ScaleConfig::default(),
			theme,
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = viewport_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh, &c.scale);
					c.place_tooltip(&canvas_resize, tooltip_pos);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				if window
					.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
					.is_err()
				{
					warn!("people-graph: could not listen for window resize");
				}
			}
		}

		let (context_anim, animate_inner, canvas_anim) =
			(context_init.clone(), animate_init.clone(), canvas.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(FRAME_DT);
				c.place_tooltip(&canvas_anim, tooltip_pos);
				render::render(&c.state, &ctx, &c.scale, &c.theme);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer(&canvas, &ev);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			let t = c.state.zoom.transform;
			c.state.pan.active = true;
			c.state.pan.start_x = x;
			c.state.pan.start_y = y;
			c.state.pan.transform_start_x = t.x;
			c.state.pan.transform_start_y = t.y;
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer(&canvas, &ev);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.state.pan.active {
				let settled = c.state.settled_size(&c.scale);
				let pan = &c.state.pan;
				let (nx, ny) = (
					pan.transform_start_x + (x - pan.start_x),
					pan.transform_start_y + (y - pan.start_y),
				);
				c.state.zoom.pan_to(nx, ny, settled);
			} else {
				let hovered = c.state.node_at_position(x, y, &c.scale);
				if c.state.set_hover(hovered) {
					tooltip.set(c.state.hovered_tooltip());
				}
			}
			c.place_tooltip(&canvas, tooltip_pos);
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			c.state.pan.active = false;
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.pan.active = false;
			if c.state.set_hover(None) {
				tooltip.set(None);
			}
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer(&canvas, &ev);

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let settled = c.state.settled_size(&c.scale);
			c.state.zoom.wheel(x, y, ev.delta_y(), settled);
			c.place_tooltip(&canvas, tooltip_pos);
		}
	};

	let visibility = move || {
		if tooltip.with(Option::is_some) {
			"visible"
		} else {
			"hidden"
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
		<div
			class="tooltip"
			style:visibility=visibility
			style:top=move || format!("{}px", tooltip_pos.get().top)
			style:left=move || format!("{}px", tooltip_pos.get().left)
		>
			<b>{move || tooltip.get().map(|t| t.title).unwrap_or_default()}</b>
			<div>
				<p>
					"Position:" <br />
					{move || tooltip.get().map(|t| t.category).unwrap_or_default()}
				</p>
				{move || {
					tooltip
						.get()
						.map(|t| match t.photo.clone() {
							Some(src) => view! { <img src=src alt=t.photo_alt() /> }.into_any(),
							None => view! { <small>{NO_PHOTO}</small> }.into_any(),
						})
				}}
			</div>
		</div>
	}
}
