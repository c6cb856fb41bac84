//! Wire DTOs for the item API.
//!
//! These mirror the server's schema but are defined independently so the
//! client never links against axum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalog item as returned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Item {
    pub item_id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Price: {}", self.item_id, self.name, self.price)
    }
}

/// Payload for create and update. The server assigns or path-derives the id,
/// so none is sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: i64,
}

/// Body of update and delete success responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
