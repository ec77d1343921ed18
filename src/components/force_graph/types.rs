//! Graph data structures for input to the force graph component.

use serde_json::{Map, Value};

/// A person in the graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphNode {
	/// Record identifier. Links reference nodes by this value.
	pub id: String,
	/// Display name, drawn as the node label and the tooltip title.
	pub name: Option<String>,
	/// Categorical attribute used for colouring.
	pub category: Option<String>,
	/// Image URL shown in the tooltip.
	pub photo: Option<String>,
	/// Every field of the source record plus `id`.
	pub fields: Map<String, Value>,
}

/// A relationship between two people.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphLink {
	/// Record identifier.
	pub id: String,
	/// Source node ID, `None` when the record has no source reference.
	pub source: Option<String>,
	/// Target node ID, `None` when the record has no target reference.
	pub target: Option<String>,
	/// Every field of the source record, with `source`/`target` resolved, plus `id`.
	pub fields: Map<String, Value>,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// People, in load order.
	pub nodes: Vec<GraphNode>,
	/// Relationships, in load order.
	pub links: Vec<GraphLink>,
}
