//! In-memory item store.
//!
//! # Design
//! `ItemStore` owns the id -> item map and the next-id counter behind one
//! `RwLock`. Callers only see the CRUD methods below; the lock never escapes.
//! Ids start at 1, grow by one per `create`, and are never reused.

use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;

use crate::Item;

/// Handle shared by every request handler.
pub type SharedStore = Arc<ItemStore>;

#[derive(Debug)]
pub struct ItemStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    items: BTreeMap<i64, Item>,
    next_id: i64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Convenience for building a store ready to hand to `app`.
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Insert `item` under the next id and return that id. Any id carried by
    /// `item` is overwritten.
    pub async fn create(&self, mut item: Item) -> i64 {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        item.item_id = id;
        inner.items.insert(id, item);
        inner.next_id += 1;
        id
    }

    pub async fn read(&self, id: i64) -> Option<Item> {
        self.inner.read().await.items.get(&id).cloned()
    }

    /// Replace the fields of an existing item, keeping its id. Returns `false`
    /// and changes nothing when `id` is absent.
    pub async fn update(&self, id: i64, mut item: Item) -> bool {
        let mut inner = self.inner.write().await;
        match inner.items.get_mut(&id) {
            Some(slot) => {
                item.item_id = id;
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub async fn delete(&self, id: i64) -> bool {
        self.inner.write().await.items.remove(&id).is_some()
    }

    /// All items in ascending id order.
    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.items.values().cloned().collect()
    }
}
