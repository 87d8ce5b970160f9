//! Persistent value mirror
//!
//! A single string kept in memory and echoed to a `KeyValueStore` on every
//! change. The stored value wins over the default on creation; an empty stored
//! string counts as "nothing stored".

use anyhow::Result;

use crate::storage::KeyValueStore;

/// A string value mirrored to durable storage under a fixed key
#[derive(Debug)]
pub struct PersistentValue<S: KeyValueStore> {
    store: S,
    key: String,
    value: String,
}

impl<S: KeyValueStore> PersistentValue<S> {
    /// Read `key` from `store`, falling back to `default`
    ///
    /// The resolved value is written back immediately so storage and memory
    /// agree from the start.
    pub fn init(mut store: S, key: impl Into<String>, default: &str) -> Result<Self> {
        let key = key.into();
        let value = match store.get(&key)? {
            Some(stored) if !stored.is_empty() => {
                log::debug!("Restored {:?} = {:?} from storage", key, stored);
                stored
            }
            _ => default.to_string(),
        };

        store.set(&key, &value)?;

        Ok(Self { store, key, value })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Update the in-memory value and write it through to storage
    ///
    /// The in-memory value changes even when the write fails.
    pub fn set(&mut self, value: impl Into<String>) -> Result<()> {
        self.value = value.into();
        self.store.set(&self.key, &self.value)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
