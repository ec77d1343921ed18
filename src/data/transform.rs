//! Record-to-graph transforms.
//!
//! A record's field map and its id are flattened into a single map (the id
//! wins over a field that happens to be called `id`); typed attributes are then
//! read from that map by configured field name.

use serde_json::{Map, Value};

use super::airtable::Record;
use crate::components::force_graph::{GraphLink, GraphNode};
use crate::config::FieldNames;

fn flatten(record: Record) -> Map<String, Value> {
	let mut fields = record.fields;
	fields.insert("id".to_string(), Value::String(record.id));
	fields
}

fn text(fields: &Map<String, Value>, name: &str) -> Option<String> {
	match fields.get(name)? {
		Value::String(s) => Some(s.clone()),
		Value::Null => None,
		Value::Array(items) => items.first().and_then(|v| v.as_str()).map(str::to_string),
		other => Some(other.to_string()),
	}
}

/// Image URL from either a plain URL field or an attachment list.
fn photo_url(fields: &Map<String, Value>, name: &str) -> Option<String> {
	match fields.get(name)? {
		Value::String(url) if !url.is_empty() => Some(url.clone()),
		Value::Array(attachments) => attachments
			.first()
			.and_then(|a| a.get("url"))
			.and_then(Value::as_str)
			.map(str::to_string),
		_ => None,
	}
}

/// First element of a linked-record array, or `None` if absent or empty.
pub fn first_reference(value: Option<&Value>) -> Option<String> {
	match value?.as_array()?.first()? {
		Value::String(id) => Some(id.clone()),
		Value::Null => None,
		other => Some(other.to_string()),
	}
}

/// Build a node from a People record.
pub fn person(record: Record, names: &FieldNames) -> GraphNode {
	let id = record.id.clone();
	let fields = flatten(record);
	GraphNode {
		id,
		name: text(&fields, &names.name),
		category: text(&fields, &names.category),
		photo: photo_url(&fields, &names.photo),
		fields,
	}
}

/// Build a link from a Relationships record.
pub fn relationship(record: Record, names: &FieldNames) -> GraphLink {
	let id = record.id.clone();
	let mut fields = flatten(record);
	let source = first_reference(fields.get(&names.source));
	let target = first_reference(fields.get(&names.target));

	let as_value = |r: &Option<String>| r.clone().map_or(Value::Null, Value::String);
	fields.insert(names.source.clone(), as_value(&source));
	fields.insert(names.target.clone(), as_value(&target));
	// the flattened id always wins, even over a reference field named `id`
	fields.insert("id".to_string(), Value::String(id.clone()));

	GraphLink {
		id,
		source,
		target,
		fields,
	}
}
