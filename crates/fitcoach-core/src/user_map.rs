// Per-user state slots
//
// Every user gets their own mutex; the outer map lock is only held long
// enough to find or insert a slot. Two handlers touching the same user are
// serialized, handlers for different users never wait on each other.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Map of user id to independently locked state
#[derive(Debug)]
pub struct UserMap<T> {
    slots: RwLock<HashMap<String, Arc<Mutex<T>>>>,
}

impl<T> Default for UserMap<T> {
    fn default() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Default> UserMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the user's state under that user's lock, creating an
    /// empty slot on first use.
    pub async fn update<R>(&self, user: &str, f: impl FnOnce(&mut T) -> R) -> R {
        let slot = self.slot_or_insert(user).await;
        let mut state = slot.lock().await;
        f(&mut state)
    }

    /// Run `f` against the user's state, or return `None` for an unknown user.
    pub async fn read<R>(&self, user: &str, f: impl FnOnce(&T) -> R) -> Option<R> {
        let slot = self.slots.read().await.get(user).cloned()?;
        let state = slot.lock().await;
        Some(f(&state))
    }

    pub async fn contains(&self, user: &str) -> bool {
        self.slots.read().await.contains_key(user)
    }

    /// Known user ids, unordered
    pub async fn users(&self) -> Vec<String> {
        self.slots.read().await.keys().cloned().collect()
    }

    async fn slot_or_insert(&self, user: &str) -> Arc<Mutex<T>> {
        if let Some(slot) = self.slots.read().await.get(user) {
            return slot.clone();
        }
        self.slots
            .write()
            .await
            .entry(user.to_string())
            .or_default()
            .clone()
    }
}
