//! Rendezvous between page load and the two collection fetches.
//!
//! Rendering needs three things: a parsed document, every People record and
//! every Relationships record. They complete in any order. [`ReadinessLatch`]
//! counts them down, and [`LoadingCoordinator`] hides the matching loading
//! indicators and runs the render trigger on the final arrival.

use std::cell::RefCell;
use std::collections::HashSet;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// One precondition for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Readiness {
	/// Document parsed.
	Document,
	/// Every People record loaded.
	Nodes,
	/// Every Relationships record loaded.
	Links,
}

impl Readiness {
	/// Everything rendering waits on.
	pub const ALL: [Readiness; 3] = [Readiness::Document, Readiness::Nodes, Readiness::Links];

	/// CSS selector of the indicator shown while this precondition is pending.
	pub fn indicator_selector(self) -> Option<&'static str> {
		match self {
			Readiness::Document => None,
			Readiness::Nodes => Some("#nodes-loading"),
			Readiness::Links => Some("#links-loading"),
		}
	}
}

/// Count-down barrier over a fixed set of keys.
///
/// [`arrive`](Self::arrive) reports completion exactly once: on the arrival
/// that empties the pending set. Later arrivals, including repeats, return
/// `false`.
#[derive(Debug)]
pub struct ReadinessLatch {
	pending: HashSet<Readiness>,
	released: bool,
}

impl ReadinessLatch {
	/// Latch waiting on every key in `keys`.
	pub fn new(keys: impl IntoIterator<Item = Readiness>) -> Self {
		Self {
			pending: keys.into_iter().collect(),
			released: false,
		}
	}

	/// Mark `key` done. `true` only on the arrival that empties the set.
	pub fn arrive(&mut self, key: Readiness) -> bool {
		self.pending.remove(&key);
		if self.pending.is_empty() && !self.released {
			self.released = true;
			return true;
		}
		false
	}

	/// Whether `key` is still outstanding.
	#[cfg(test)]
	pub fn is_pending(&self, key: Readiness) -> bool {
		self.pending.contains(&key)
	}

	/// Whether the latch has fired.
	#[cfg(test)]
	pub fn is_released(&self) -> bool {
		self.released
	}
}

/// Hides the "still loading" markers in the host page.
pub trait LoadingIndicators {
	/// Hide the indicator for `key`, if it has one.
	fn hide(&self, key: Readiness);
}

/// Indicators located by [`Readiness::indicator_selector`] in the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomIndicators;

impl LoadingIndicators for DomIndicators {
	fn hide(&self, key: Readiness) {
		let Some(selector) = key.indicator_selector() else {
			return;
		};
		let element = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.query_selector(selector).ok().flatten())
			.and_then(|e| e.dyn_into::<HtmlElement>().ok());
		match element {
			Some(el) => {
				if let Err(err) = el.style().set_property("display", "none") {
					warn!("people-graph: could not hide {selector}: {err:?}");
				}
			}
			None => warn!("people-graph: loading indicator {selector} not found"),
		}
	}
}

type RenderTrigger = Box<dyn FnOnce()>;

/// Tracks readiness and fires the render trigger once everything is loaded.
pub struct LoadingCoordinator<I: LoadingIndicators = DomIndicators> {
	latch: RefCell<ReadinessLatch>,
	on_ready: RefCell<Option<RenderTrigger>>,
	indicators: I,
}

impl<I: LoadingIndicators> LoadingCoordinator<I> {
	/// Coordinator that runs `on_ready` once everything in [`Readiness::ALL`] arrives.
	pub fn new(indicators: I, on_ready: impl FnOnce() + 'static) -> Self {
		Self {
			latch: RefCell::new(ReadinessLatch::new(Readiness::ALL)),
			on_ready: RefCell::new(Some(Box::new(on_ready))),
			indicators,
		}
	}

	/// Mark `key` as loaded. Runs the render trigger if this was the last one.
	pub fn update_loading(&self, key: Readiness) {
		let released = self.latch.borrow_mut().arrive(key);
		self.indicators.hide(key);
		debug!("people-graph: {key:?} ready");

		if !released {
			return;
		}
		// take first so the trigger may call back into the coordinator
		let trigger = self.on_ready.borrow_mut().take();
		if let Some(render) = trigger {
			render();
		}
	}

	/// Whether the render trigger has fired.
	#[cfg(test)]
	pub fn is_ready(&self) -> bool {
		self.latch.borrow().is_released()
	}

	/// Whether `key` is still outstanding.
	#[cfg(test)]
	pub fn is_pending(&self, key: Readiness) -> bool {
		self.latch.borrow().is_pending(key)
	}
}
