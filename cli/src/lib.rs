//! Interactive commands for the item service.
//!
//! Each command performs exactly one HTTP round trip: prompt for fields,
//! build the request with `item_core::ItemClient`, hand it to a `Transport`,
//! then print a one-line summary. Nothing is retried.

pub mod commands;
pub mod console;
pub mod error;
pub mod transport;

pub use commands::Session;
pub use console::Console;
pub use error::CliError;
pub use transport::{Transport, UreqTransport};

/// Where the client looks for the server unless `ITEM_SERVER_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
