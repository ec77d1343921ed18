//! Minimal Airtable REST client built on the browser `fetch` API.
//!
//! Only the list-records endpoint is used. Each call returns one page and the
//! continuation cursor (`offset`) for the next one.

use serde::Deserialize;
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::AirtableConfig;
use crate::error::FetchError;

/// One row of a table.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Record {
	/// Record id, `rec...`.
	pub id: String,
	/// Field values keyed by field name.
	#[serde(default)]
	pub fields: Map<String, Value>,
	/// Creation timestamp, ISO 8601.
	#[serde(rename = "createdTime", default)]
	pub created_time: Option<String>,
}

/// One page of a list-records response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RecordPage {
	/// Records on this page.
	#[serde(default)]
	pub records: Vec<Record>,
	/// Cursor for the next page; absent on the last page.
	pub offset: Option<String>,
}

/// Anything that can hand out pages of a named table.
#[allow(async_fn_in_trait, reason = "single-threaded wasm, futures are never sent")]
pub trait PageSource {
	/// Fetch the page of `table` that starts at `offset` (`None` for the first page).
	async fn fetch_page(
		&self,
		table: &str,
		offset: Option<&str>,
	) -> Result<RecordPage, FetchError>;
}

/// Airtable error bodies come in two shapes.
#[derive(Deserialize)]
struct ErrorBody {
	error: ErrorDetail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
	Code(String),
	Typed {
		#[serde(rename = "type")]
		kind: String,
		message: Option<String>,
	},
}

/// Turn a non-2xx response body into a human readable message.
pub fn api_error_message(body: &str, status_text: &str) -> String {
	match serde_json::from_str::<ErrorBody>(body) {
		Ok(ErrorBody {
			error: ErrorDetail::Code(code),
		}) => code,
		Ok(ErrorBody {
			error: ErrorDetail::Typed {
				kind,
				message: Some(message),
			},
		}) => format!("{kind}: {message}"),
		Ok(ErrorBody {
			error: ErrorDetail::Typed { kind, message: None },
		}) => kind,
		Err(_) if !status_text.is_empty() => status_text.to_string(),
		Err(_) => "unknown error".to_string(),
	}
}

/// Reads records from one Airtable base.
pub struct AirtableClient {
	config: AirtableConfig,
}

impl AirtableClient {
	/// Client for the base described by `config`.
	pub fn new(config: AirtableConfig) -> Self {
		Self { config }
	}

	/// Request URL for one page of `table`, continuing from `offset` if given.
	pub fn page_url(&self, table: &str, offset: Option<&str>) -> String {
		let encode = |s: &str| String::from(js_sys::encode_uri_component(s));
		let mut url = format!(
			"{}/v0/{}/{}?view={}",
			self.config.endpoint_url.trim_end_matches('/'),
			encode(&self.config.base_id),
			encode(table),
			encode(&self.config.view),
		);
		if let Some(size) = self.config.page_size {
			url.push_str(&format!("&pageSize={size}"));
		}
		if let Some(offset) = offset {
			url.push_str("&offset=");
			url.push_str(&encode(offset));
		}
		url
	}
}

impl PageSource for AirtableClient {
	async fn fetch_page(
		&self,
		table: &str,
		offset: Option<&str>,
	) -> Result<RecordPage, FetchError> {
		let window = web_sys::window().ok_or(FetchError::NoWindow)?;

		let opts = RequestInit::new();
		opts.set_method("GET");
		opts.set_mode(RequestMode::Cors);
		let request = Request::new_with_str_and_init(&self.page_url(table, offset), &opts)?;
		request
			.headers()
			.set("Authorization", &format!("Bearer {}", self.config.api_key))?;

		let response: Response = JsFuture::from(window.fetch_with_request(&request))
			.await?
			.dyn_into()?;
		let body = JsFuture::from(response.text()?)
			.await?
			.as_string()
			.unwrap_or_default();

		if !response.ok() {
			return Err(FetchError::Api {
				status: response.status(),
				message: api_error_message(&body, &response.status_text()),
			});
		}
		Ok(serde_json::from_str(&body)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn page_decodes_records_and_cursor() {
		let page: RecordPage = serde_json::from_str(
			r#"{
				"records": [
					{"id": "rec1", "createdTime": "2020-01-01T00:00:00.000Z", "fields": {"Person": "Ada"}},
					{"id": "rec2", "fields": {}}
				],
				"offset": "itr1/rec2"
			}"#,
		)
		.unwrap();

		assert_eq!(page.records.len(), 2);
		assert_eq!(page.records[0].fields["Person"], "Ada");
		assert_eq!(
			page.records[0].created_time.as_deref(),
			Some("2020-01-01T00:00:00.000Z")
		);
		assert_eq!(page.offset.as_deref(), Some("itr1/rec2"));
	}

	#[test]
	fn last_page_has_no_cursor() {
		let page: RecordPage = serde_json::from_str(r#"{"records": []}"#).unwrap();
		assert!(page.records.is_empty());
		assert!(page.offset.is_none());
	}

	#[test]
	fn error_bodies_become_messages() {
		assert_eq!(
			api_error_message(r#"{"error": "NOT_FOUND"}"#, "Not Found"),
			"NOT_FOUND"
		);
		assert_eq!(
			api_error_message(
				r#"{"error": {"type": "AUTHENTICATION_REQUIRED", "message": "Authentication required"}}"#,
				"Unauthorized"
			),
			"AUTHENTICATION_REQUIRED: Authentication required"
		);
		assert_eq!(
			api_error_message(r#"{"error": {"type": "INVALID_PERMISSIONS"}}"#, ""),
			"INVALID_PERMISSIONS"
		);
		assert_eq!(api_error_message("<html>", "Bad Gateway"), "Bad Gateway");
		assert_eq!(api_error_message("", ""), "unknown error");
	}
}
