//! Error types for configuration and remote record fetching.

use std::fmt::Display;

use log::error;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Problems resolving the Airtable connection settings.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// A required setting is empty.
	#[error("missing configuration value `{0}`")]
	Missing(&'static str),

	/// Page size outside Airtable's limits.
	#[error("page size must be between 1 and 100, got {0}")]
	PageSize(u32),

	/// The override block is not valid JSON.
	#[error("invalid graph configuration JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// Failure while paging through a remote collection.
#[derive(Debug, Error)]
pub enum FetchError {
	/// Not running in a browser window.
	#[error("no browser window available")]
	NoWindow,

	/// A rejected promise or throwing browser API (network failure, CORS, ...).
	#[error("request failed: {0}")]
	Js(String),

	/// Non-2xx response.
	#[error("Airtable responded with HTTP {status}: {message}")]
	Api { status: u16, message: String },

	/// Body was not a record page.
	#[error("malformed Airtable response: {0}")]
	Decode(#[from] serde_json::Error),
}

impl From<JsValue> for FetchError {
	fn from(value: JsValue) -> Self {
		let message = value
			.as_string()
			.or_else(|| {
				js_sys::Reflect::get(&value, &JsValue::from_str("message"))
					.ok()
					.and_then(|m| m.as_string())
			})
			.unwrap_or_else(|| format!("{value:?}"));
		FetchError::Js(message)
	}
}

/// Logs an error to the console and surfaces it in a blocking alert.
pub fn report(err: &impl Display) {
	error!("people-graph: {err}");
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(&err.to_string());
	}
}
