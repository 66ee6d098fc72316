//! HTTP API module for the ZIP Code Eligibility Engine.
//!
//! This module provides the REST endpoint for searching job postings by
//! ZIP code. ZIP validation happens here, at the boundary; the engine
//! assumes well-formed five-digit input.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SearchRequest;
pub use response::{ApiError, SearchResponse};
pub use state::AppState;
