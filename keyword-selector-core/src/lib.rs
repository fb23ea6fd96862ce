//! Keyword Selector Core Library
//!
//! Platform-independent presentation logic for the keyword/title selection
//! flow of a short-form content tool:
//! - Wire types of the analysis backend (`types`)
//! - Backend abstraction and its HTTP implementation (`traits`, `http_client`)
//! - Ordered keyword/title catalog and the user's selection (`catalog`, `selection`)
//! - The view-level state machine tying them together (`controller`)
//!
//! The analysis and script generation themselves happen on the server; this
//! crate only validates input, issues the two requests and keeps the
//! selection consistent with what is displayed.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod http_client;
pub mod selection;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use catalog::{Catalog, KeywordEntry, KeywordSource, TitleEntry};
pub use controller::{Phase, SelectionController, SelectionSummary};
pub use error::{RequestError, SelectorError, SelectorResult, ValidationError};
pub use http_client::HttpBackend;
pub use selection::SelectionState;
pub use traits::ScriptBackend;
