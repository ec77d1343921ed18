//! Paging through the two collections into the shared graph.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use super::airtable::{PageSource, Record};
use super::transform;
use crate::components::force_graph::GraphData;
use crate::config::{AirtableConfig, FieldNames};
use crate::error::FetchError;
use crate::loading::Readiness;

/// The two tables that make up the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
	/// People table, the graph nodes.
	People,
	/// Relationships table, the graph links.
	Relationships,
}

impl Collection {
	/// Table name for this collection.
	pub fn table(self, config: &AirtableConfig) -> &str {
		match self {
			Collection::People => &config.people_table,
			Collection::Relationships => &config.relationships_table,
		}
	}

	/// Readiness key signalled once this collection is fully loaded.
	pub fn readiness(self) -> Readiness {
		match self {
			Collection::People => Readiness::Nodes,
			Collection::Relationships => Readiness::Links,
		}
	}
}

/// Graph under construction, appended to page by page.
#[derive(Clone, Debug, Default)]
pub struct SharedGraph(Rc<RefCell<GraphData>>);

impl SharedGraph {
	/// Transform `records` and append them to the list `collection` feeds.
	pub fn append(&self, collection: Collection, records: Vec<Record>, names: &FieldNames) {
		let mut graph = self.0.borrow_mut();
		match collection {
			Collection::People => graph
				.nodes
				.extend(records.into_iter().map(|r| transform::person(r, names))),
			Collection::Relationships => graph
				.links
				.extend(records.into_iter().map(|r| transform::relationship(r, names))),
		}
	}

	/// Copy of everything appended so far.
	pub fn snapshot(&self) -> GraphData {
		self.0.borrow().clone()
	}
}

/// Walk every page of `table`, handing each page's records to `on_page` in
/// arrival order. Stops at the first error.
pub async fn each_page<S: PageSource + ?Sized>(
	source: &S,
	table: &str,
	mut on_page: impl FnMut(Vec<Record>),
) -> Result<(), FetchError> {
	let mut offset: Option<String> = None;
	loop {
		let page = source.fetch_page(table, offset.as_deref()).await?;
		on_page(page.records);
		match page.offset {
			Some(next) => offset = Some(next),
			None => return Ok(()),
		}
	}
}

/// Load one collection completely into `graph`. Returns the record count.
pub async fn load_collection<S: PageSource + ?Sized>(
	source: &S,
	collection: Collection,
	config: &AirtableConfig,
	names: &FieldNames,
	graph: &SharedGraph,
) -> Result<usize, FetchError> {
	let mut count = 0;
	each_page(source, collection.table(config), |records| {
		count += records.len();
		graph.append(collection, records, names);
	})
	.await?;
	info!("people-graph: loaded {count} {collection:?} records");
	Ok(count)
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use std::future::Future;
	use std::pin::pin;
	use std::task::{Context, Poll, Waker};

	use serde_json::json;

	use super::*;
	use crate::data::airtable::RecordPage;
	use crate::loading::LoadingCoordinator;
	use crate::loading::tests::RecordingIndicators;

	/// Drive a future whose awaits all resolve immediately.
	fn block_on<F: Future>(fut: F) -> F::Output {
		let mut fut = pin!(fut);
		let mut cx = Context::from_waker(Waker::noop());
		loop {
			if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
				return out;
			}
		}
	}

	/// Serves canned pages; the cursor is the index of the next page.
	#[derive(Default)]
	struct CannedSource {
		tables: HashMap<String, Vec<Vec<Record>>>,
		fail_at: Option<(String, usize)>,
		calls: RefCell<Vec<(String, Option<String>)>>,
	}

	impl CannedSource {
		fn with_table(mut self, table: &str, pages: Vec<Vec<Record>>) -> Self {
			self.tables.insert(table.to_string(), pages);
			self
		}
	}

	impl PageSource for CannedSource {
		async fn fetch_page(
			&self,
			table: &str,
			offset: Option<&str>,
		) -> Result<RecordPage, FetchError> {
			self.calls
				.borrow_mut()
				.push((table.to_string(), offset.map(str::to_string)));
			let index: usize = offset.map_or(0, |o| o.parse().unwrap());
			if self.fail_at.as_ref() == Some(&(table.to_string(), index)) {
				return Err(FetchError::Api {
					status: 429,
					message: "RATE_LIMITED".into(),
				});
			}
			let pages = &self.tables[table];
			Ok(RecordPage {
				records: pages[index].clone(),
				offset: (index + 1 < pages.len()).then(|| (index + 1).to_string()),
			})
		}
	}

	fn person(id: &str, name: &str) -> Record {
		Record {
			id: id.into(),
			fields: json!({"Person": name, "Position": "Staff"})
				.as_object()
				.cloned()
				.unwrap(),
			created_time: None,
		}
	}

	fn relationship(id: &str, source: &str, target: &str) -> Record {
		Record {
			id: id.into(),
			fields: json!({"source": [source], "target": [target]})
				.as_object()
				.cloned()
				.unwrap(),
			created_time: None,
		}
	}

	#[test]
	fn each_page_follows_cursor_in_order() {
		let source = CannedSource::default().with_table(
			"People",
			vec![
				vec![person("r1", "A")],
				vec![person("r2", "B"), person("r3", "C")],
				vec![],
			],
		);
		let mut seen = Vec::new();
		block_on(each_page(&source, "People", |records| {
			seen.extend(records.into_iter().map(|r| r.id))
		}))
		.unwrap();

		assert_eq!(seen, ["r1", "r2", "r3"]);
		assert_eq!(
			*source.calls.borrow(),
			vec![
				("People".to_string(), None),
				("People".to_string(), Some("1".to_string())),
				("People".to_string(), Some("2".to_string())),
			]
		);
	}

	#[test]
	fn error_aborts_collection() {
		let mut source = CannedSource::default().with_table(
			"People",
			vec![vec![person("r1", "A")], vec![person("r2", "B")]],
		);
		source.fail_at = Some(("People".into(), 1));
		let graph = SharedGraph::default();

		let result = block_on(load_collection(
			&source,
			Collection::People,
			&AirtableConfig::default(),
			&FieldNames::default(),
			&graph,
		));

		assert!(matches!(result, Err(FetchError::Api { status: 429, .. })));
		// pages that arrived before the failure stay accumulated
		assert_eq!(graph.snapshot().nodes.len(), 1);
	}

	#[test]
	fn failed_collection_never_signals_ready() {
		let mut source = CannedSource::default()
			.with_table("People", vec![vec![person("r1", "A")]])
			.with_table("Relationships", vec![vec![]]);
		source.fail_at = Some(("Relationships".into(), 0));
		let config = AirtableConfig::default();
		let names = FieldNames::default();
		let graph = SharedGraph::default();
		let coordinator = LoadingCoordinator::new(RecordingIndicators::default(), || {
			panic!("must not render")
		});
		coordinator.update_loading(Readiness::Document);

		for collection in [Collection::People, Collection::Relationships] {
			let loaded = block_on(load_collection(&source, collection, &config, &names, &graph));
			if loaded.is_ok() {
				coordinator.update_loading(collection.readiness());
			}
		}

		assert!(!coordinator.is_ready());
		assert!(coordinator.is_pending(Readiness::Links));
	}

	#[test]
	fn two_people_pages_and_one_relationship_page() {
		let source = CannedSource::default()
			.with_table(
				"People",
				vec![
					vec![person("recA", "Ada"), person("recB", "Brian")],
					vec![person("recC", "Cleo")],
				],
			)
			.with_table(
				"Relationships",
				vec![vec![relationship("recL", "recA", "recC")]],
			);
		let config = AirtableConfig::default();
		let names = FieldNames::default();
		let graph = SharedGraph::default();

		let rendered: Rc<RefCell<Option<GraphData>>> = Rc::default();
		let (graph_at_render, slot) = (graph.clone(), rendered.clone());
		let coordinator = LoadingCoordinator::new(RecordingIndicators::default(), move || {
			*slot.borrow_mut() = Some(graph_at_render.snapshot());
		});
		coordinator.update_loading(Readiness::Document);

		for collection in [Collection::People, Collection::Relationships] {
			block_on(load_collection(&source, collection, &config, &names, &graph)).unwrap();
			coordinator.update_loading(collection.readiness());
		}

		let data = rendered.borrow().clone().expect("rendered");
		let ids: Vec<_> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["recA", "recB", "recC"]);
		assert_eq!(data.links.len(), 1);
		assert_eq!(data.links[0].source.as_deref(), Some("recA"));
		assert_eq!(data.links[0].target.as_deref(), Some("recC"));
	}

	#[test]
	fn collections_map_to_tables_and_readiness() {
		let mut config = AirtableConfig::default();
		config.relationships_table = "Links".into();
		assert_eq!(Collection::People.table(&config), "People");
		assert_eq!(Collection::Relationships.table(&config), "Links");
		assert_eq!(Collection::People.readiness(), Readiness::Nodes);
		assert_eq!(Collection::Relationships.readiness(), Readiness::Links);
	}
}
