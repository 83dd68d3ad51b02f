//! Ownership and durability of the check-in state

use shared::{STORAGE_KEY, process_debug, process_info, process_warn};

use crate::core::State;
use crate::error::StoreResult;
use crate::traits::KeyValueStore;

/// What happened during [`StateStore::load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing persisted under the key; state untouched
    Absent,
    /// Persisted state adopted
    Loaded { attendees: usize },
    /// Persisted value failed parsing or validation; state untouched
    Rejected { reason: String },
    /// Medium could not be read; state untouched
    Unavailable { reason: String },
}

/// Owns the canonical [`State`] and its durable copy
pub struct StateStore<K: KeyValueStore> {
    medium: K,
    key: String,
    state: State,
}

impl<K: KeyValueStore> StateStore<K> {
    /// Create a store with empty state over `medium`
    pub fn new(medium: K, key: impl Into<String>) -> Self {
        Self {
            medium,
            key: key.into(),
            state: State::new(),
        }
    }

    /// Create a store using the application's storage key
    pub fn with_default_key(medium: K) -> Self {
        Self::new(medium, STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read access for the engine and renderers
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn medium(&self) -> &K {
        &self.medium
    }

    pub(crate) fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Replace the in-memory state with the persisted one if it is valid.
    ///
    /// Never fails: read errors and corrupt payloads are logged and the
    /// current state is kept.
    pub fn load(&mut self) -> LoadOutcome {
        let raw = match self.medium.get_item(&self.key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => {
                process_debug!(shared::ProcessId::current(), "No saved state under '{}'", self.key);
                return LoadOutcome::Absent;
            }
            Err(e) => {
                process_warn!(shared::ProcessId::current(), "Could not load saved state: {}", e);
                return LoadOutcome::Unavailable { reason: e.to_string() };
            }
        };

        match State::from_persisted(&raw) {
            Ok(state) => {
                let attendees = state.attendees().len();
                self.state = state;
                process_info!(
                    shared::ProcessId::current(),
                    "📂 Loaded saved state: {} attendees",
                    attendees
                );
                LoadOutcome::Loaded { attendees }
            }
            Err(e) => {
                process_warn!(shared::ProcessId::current(), "Discarding saved state: {}", e);
                LoadOutcome::Rejected { reason: e.to_string() }
            }
        }
    }

    /// Write the whole state to the medium.
    ///
    /// The in-memory state is unaffected by a failure; callers log it.
    pub fn save(&self) -> StoreResult<()> {
        let raw = self.state.to_persisted()?;
        self.medium.set_item(&self.key, &raw)?;
        process_debug!(
            shared::ProcessId::current(),
            "💾 Saved state: {} attendees",
            self.state.total()
        );
        Ok(())
    }
}
