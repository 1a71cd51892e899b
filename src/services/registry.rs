use std::collections::HashMap;
use std::hash::Hash;

use crate::config::Config;
use crate::models::error::ResizeError;
use crate::services::filter::{ResizeFilter, Surface};
use crate::utils::debounce::Scheduler;

/// Something attached to a surface that can be released.
pub trait Detach {
    fn release(self);
}

impl<E, S, T> Detach for ResizeFilter<E, S, T>
where
    E: 'static,
    S: Surface + 'static,
    T: Scheduler + 'static,
{
    fn release(self) {
        self.detach();
    }
}

/// Outcome of [`ResizeRegistry::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    Attached,
    /// The surface already had an attachment; nothing was built.
    AlreadyAttached,
    /// The builder produced nothing (no callback configured).
    Inert,
}

/// One attachment per surface, with explicit attach/detach.
pub struct ResizeRegistry<K, H> {
    entries: HashMap<K, H>,
}

impl<K, H> Default for ResizeRegistry<K, H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K, H> ResizeRegistry<K, H>
where
    K: Eq + Hash + std::fmt::Display,
    H: Detach,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and stores an attachment for `key` unless one exists already.
    pub fn attach<F>(&mut self, key: K, build: F) -> Result<Attach, ResizeError>
    where
        F: FnOnce() -> Result<Option<H>, ResizeError>,
    {
        if self.entries.contains_key(&key) {
            log::debug!(target: Config::LOG_TARGET, "{key} already observed");
            return Ok(Attach::AlreadyAttached);
        }

        match build()? {
            Some(handle) => {
                log::debug!(target: Config::LOG_TARGET, "observing {key}");
                self.entries.insert(key, handle);
                Ok(Attach::Attached)
            }
            None => Ok(Attach::Inert),
        }
    }

    /// Releases the attachment for `key`. Returns false if there was none.
    pub fn detach(&mut self, key: &K) -> bool {
        match self.entries.remove(key) {
            Some(handle) => {
                log::debug!(target: Config::LOG_TARGET, "stopped observing {key}");
                handle.release();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &K) -> Option<&H> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Detaches everything.
    pub fn clear(&mut self) {
        for (_, handle) in self.entries.drain() {
            handle.release();
        }
    }
}
