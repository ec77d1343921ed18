//! Remote record loading: the Airtable client, record transforms and the
//! paging loop that fills the shared graph.

pub mod airtable;
pub mod fetcher;
pub mod transform;

pub use airtable::{AirtableClient, PageSource, Record, RecordPage};
pub use fetcher::{Collection, SharedGraph, each_page, load_collection};
