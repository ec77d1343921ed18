//! Runtime configuration for the Airtable connection and the graph view.
//!
//! Credentials are baked in at build time from `AIRTABLE_API_KEY` and
//! `AIRTABLE_DB_ID`. A host page can override any field by embedding a JSON
//! document in `<script id="graph-config" type="application/json">`; fields it
//! leaves out keep their defaults.

use log::info;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::error::ConfigError;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "graph-config";

/// Largest page Airtable will return.
const MAX_PAGE_SIZE: u32 = 100;

/// Where and how to read records.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AirtableConfig {
	/// Personal access token sent as a Bearer credential.
	pub api_key: String,
	/// Base (database) id.
	pub base_id: String,
	/// API origin, without the `/v0` version prefix.
	pub endpoint_url: String,
	/// View applied to both tables.
	pub view: String,
	/// Table holding people.
	pub people_table: String,
	/// Table holding relationships.
	pub relationships_table: String,
	/// Records per page. `None` lets Airtable choose (100).
	pub page_size: Option<u32>,
}

impl Default for AirtableConfig {
	fn default() -> Self {
		Self {
			api_key: option_env!("AIRTABLE_API_KEY").unwrap_or_default().to_string(),
			base_id: option_env!("AIRTABLE_DB_ID").unwrap_or_default().to_string(),
			endpoint_url: "https://api.airtable.com".to_string(),
			view: "Grid view".to_string(),
			people_table: "People".to_string(),
			relationships_table: "Relationships".to_string(),
			page_size: None,
		}
	}
}

/// Record field names read by the transforms.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldNames {
	/// Display name of a person; also the node label.
	pub name: String,
	/// Categorical attribute that picks the node colour.
	pub category: String,
	/// Image URL or attachment list.
	pub photo: String,
	/// Linked-record field holding a relationship's source person.
	pub source: String,
	/// Linked-record field holding a relationship's target person.
	pub target: String,
}

impl Default for FieldNames {
	fn default() -> Self {
		Self {
			name: "Person".to_string(),
			category: "Position".to_string(),
			photo: "Photo".to_string(),
			source: "source".to_string(),
			target: "target".to_string(),
		}
	}
}

/// Named visual theme.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
	/// White background.
	#[default]
	Light,
	/// Dark background.
	Dark,
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
	/// Connection settings.
	pub airtable: AirtableConfig,
	/// Field names read from records.
	pub fields: FieldNames,
	/// Colour scheme.
	pub theme: ThemeChoice,
}

impl AppConfig {
	/// Resolve the configuration from build-time defaults and the host page.
	pub fn load() -> Result<Self, ConfigError> {
		let config = match read_override() {
			Some(json) => {
				info!("people-graph: applying #{CONFIG_ELEMENT_ID} overrides");
				Self::from_json(&json)?
			}
			None => Self::default(),
		};
		config.validate()?;
		Ok(config)
	}

	/// Parse a JSON override document on top of the defaults.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Reject missing credentials and out-of-range page sizes.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.airtable.api_key.trim().is_empty() {
			return Err(ConfigError::Missing("AIRTABLE_API_KEY"));
		}
		if self.airtable.base_id.trim().is_empty() {
			return Err(ConfigError::Missing("AIRTABLE_DB_ID"));
		}
		if let Some(size) = self.airtable.page_size {
			if size == 0 || size > MAX_PAGE_SIZE {
				return Err(ConfigError::PageSize(size));
			}
		}
		Ok(())
	}
}

fn read_override() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}
