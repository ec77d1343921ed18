//! Force-directed graph visualization component.
//!
//! Renders people and their relationships on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan and zoom bounded by the laid-out graph
//! - Per-category node colours and a hover tooltip with name, position and photo
//! - Light and dark themes
//!
//! # Example
//!
//! ```ignore
//! use people_graph::{ForceGraphCanvas, GraphData, GraphLink, GraphNode};
//!
//! let data = GraphData {
//!     nodes: vec![
//!         GraphNode { id: "recA".into(), name: Some("Ada".into()), ..Default::default() },
//!         GraphNode { id: "recB".into(), name: Some("Grace".into()), ..Default::default() },
//!     ],
//!     links: vec![GraphLink {
//!         id: "recL".into(),
//!         source: Some("recA".into()),
//!         target: Some("recB".into()),
//!         ..Default::default()
//!     }],
//! };
//!
//! view! { <ForceGraphCanvas data=data fullscreen=true /> }
//! ```

mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;
pub mod tooltip;
mod types;
pub mod zoom;

pub use component::ForceGraphCanvas;
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode};
