//! Synchronous API client core for the item service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip, which
//! keeps this crate deterministic and lets the CLI swap transports in tests.
//!
//! # Design
//! - `ItemClient` is stateless and holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response).
//! - DTOs are defined independently from the server crate; the integration
//!   test against a live server catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ItemClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Item, MessageResponse, NewItem};
