//! people-graph: interactive force-directed graph of people and relationships.
//!
//! This crate loads two Airtable tables, People and Relationships, into a
//! graph and renders it as a WASM canvas with physics-based layout, pan/zoom
//! and a hover tooltip. Rendering waits until the document and both tables
//! have finished loading.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod loading;

#[cfg(test)]
use wasm_bindgen_test as _;

pub use components::force_graph::{ForceGraphCanvas, GraphData, GraphLink, GraphNode};
use config::{AppConfig, ThemeChoice};
use data::{AirtableClient, Collection, SharedGraph, load_collection};
use loading::{DomIndicators, LoadingCoordinator, Readiness};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("people-graph: logging initialized");
}

/// Run `ready` once the document has been parsed.
fn on_document_ready(ready: impl FnOnce() + 'static) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		warn!("people-graph: no document, rendering will not start");
		return;
	};
	let state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
		.ok()
		.and_then(|v| v.as_string());
	if state.as_deref() != Some("loading") {
		ready();
		return;
	}

	let callback = Closure::once_into_js(ready);
	if document
		.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
		.is_err()
	{
		warn!("people-graph: could not listen for DOMContentLoaded");
	}
}

/// Fetch both collections concurrently and publish the graph into `snapshot`
/// once the document and every record are in.
fn start_loading(config: AppConfig, snapshot: RwSignal<Option<GraphData>>) {
	let graph = SharedGraph::default();
	let rendered = graph.clone();
	let coordinator = Rc::new(LoadingCoordinator::new(DomIndicators, move || {
		let data = rendered.snapshot();
		info!(
			"people-graph: rendering {} nodes, {} links",
			data.nodes.len(),
			data.links.len()
		);
		snapshot.set(Some(data));
	}));

	let client = Rc::new(AirtableClient::new(config.airtable.clone()));
	let config = Rc::new(config);
	for collection in [Collection::People, Collection::Relationships] {
		let (client, config, graph, coordinator) = (
			client.clone(),
			config.clone(),
			graph.clone(),
			coordinator.clone(),
		);
		wasm_bindgen_futures::spawn_local(async move {
			let loaded = load_collection(
				client.as_ref(),
				collection,
				&config.airtable,
				&config.fields,
				&graph,
			)
			.await;
			match loaded {
				Ok(_) => coordinator.update_loading(collection.readiness()),
				Err(e) => error::report(&e),
			}
		});
	}

	on_document_ready(move || coordinator.update_loading(Readiness::Document));
}

/// Main application component.
/// Starts the Airtable fetches and renders the graph once everything is loaded.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let snapshot = RwSignal::new(None::<GraphData>);
	let theme = match AppConfig::load() {
		Ok(config) => {
			let theme = config.theme;
			start_loading(config, snapshot);
			theme
		}
		Err(e) => {
			error::report(&e);
			ThemeChoice::default()
		}
	};
	let data = Signal::derive(move || snapshot.get().unwrap_or_default());
	let data_theme = match theme {
		ThemeChoice::Light => "light",
		ThemeChoice::Dark => "dark",
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=data_theme />
		<Title text="People Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<Show when=move || snapshot.with(Option::is_some)>
				<ForceGraphCanvas data=data theme=theme fullscreen=true />
			</Show>
			<div class="graph-overlay">
				<h1>"People"</h1>
				<p class="subtitle">"Hover a person for details. Scroll to zoom. Drag to pan."</p>
			</div>
		</div>
	}
}
