//! The entry store.
//!
//! `EntryStore` owns the ordered entry sequence and keeps the persisted
//! document in step with it. Every mutation updates memory first and then
//! rewrites the whole document. Storage failures are logged and swallowed:
//! memory stays the source of truth and the next successful save catches the
//! document up.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::error::Result;
use crate::query;
use crate::storage::document;
use crate::storage::json_file::JsonFileBackend;
use crate::storage::traits::DocumentBackend;
use crate::storage::types::Entry;
use crate::storage::validation::validate_entry_fields;

/// Externally visible lifecycle of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Constructed, document not loaded yet
    Uninitialized,
    /// Document loaded (or found missing/unreadable); stays here for the session
    Ready,
}

/// Callback invoked with the full sequence after each successful mutation.
///
/// Listeners run with no store lock held, so they may call back into the
/// store, including `subscribe` and further mutations.
pub type ChangeListener = Arc<dyn Fn(&[Entry]) + Send + Sync>;

struct Inner {
    state: StoreState,
    entries: Vec<Entry>,
}

/// In-memory entry sequence backed by a single persisted document.
pub struct EntryStore<B: DocumentBackend = JsonFileBackend> {
    backend: B,
    inner: Mutex<Inner>,
    listeners: Mutex<Vec<ChangeListener>>,
}

impl EntryStore<JsonFileBackend> {
    /// Open the store for the JSON document at `path`.
    ///
    /// A missing or unreadable document yields an empty store; this never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_backend(JsonFileBackend::new(path))
    }
}

impl<B: DocumentBackend> EntryStore<B> {
    /// Create an uninitialized store. Call [`EntryStore::load`] before use,
    /// or let the first operation load it.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            inner: Mutex::new(Inner {
                state: StoreState::Uninitialized,
                entries: Vec::new(),
            }),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Create a store and load its document immediately.
    pub fn with_backend(backend: B) -> Self {
        let store = Self::new(backend);
        store.load();
        store
    }

    /// Lock the sequence. Poisoning is ignored: no mutation leaves `Inner`
    /// half-updated.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the sequence, loading the document first if needed.
    fn lock_ready(&self) -> MutexGuard<'_, Inner> {
        let mut inner = self.lock();
        if inner.state == StoreState::Uninitialized {
            self.load_into(&mut inner);
        }
        inner
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StoreState {
        self.lock().state
    }

    /// The backend this store persists through.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Human-readable location of the persisted document.
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Load the persisted document into memory.
    ///
    /// A missing document, an unreadable one, or one that does not decode as
    /// an entry array all leave the store empty. The failure is logged and the
    /// store becomes `Ready` regardless. Calls after the first are no-ops.
    pub fn load(&self) {
        let mut inner = self.lock();
        if inner.state == StoreState::Uninitialized {
            self.load_into(&mut inner);
        }
    }

    fn load_into(&self, inner: &mut Inner) {
        inner.entries = match self.backend.read() {
            Ok(Some(bytes)) => match document::decode(&bytes) {
                Ok(entries) => {
                    tracing::debug!(
                        location = %self.backend.location(),
                        count = entries.len(),
                        "loaded entries"
                    );
                    entries
                }
                Err(err) => {
                    tracing::warn!(
                        location = %self.backend.location(),
                        error = %err,
                        "document could not be decoded; starting empty"
                    );
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::debug!(
                    location = %self.backend.location(),
                    "no saved document; starting empty"
                );
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(
                    location = %self.backend.location(),
                    error = %err,
                    "document could not be read; starting empty"
                );
                Vec::new()
            }
        };
        inner.state = StoreState::Ready;
    }

    /// Persist the whole sequence, replacing the previous document.
    ///
    /// Failures are logged, not returned.
    pub fn save(&self) {
        let inner = self.lock_ready();
        self.save_entries(&inner.entries);
    }

    fn save_entries(&self, entries: &[Entry]) {
        let result = document::encode(entries).and_then(|bytes| self.backend.write(&bytes));
        match result {
            Ok(()) => tracing::debug!(
                location = %self.backend.location(),
                count = entries.len(),
                "saved entries"
            ),
            Err(err) => tracing::error!(
                location = %self.backend.location(),
                error = %err,
                "failed to save entries; keeping in-memory state"
            ),
        }
    }

    /// Validate, append, and persist a new entry.
    ///
    /// # Returns
    ///
    /// Returns the identifier of the new entry.
    ///
    /// # Errors
    ///
    /// Returns `WordbookError::Validation` if `word` or `explanation` is empty
    /// or whitespace-only. The sequence is unchanged in that case.
    pub fn add(&self, word: &str, explanation: &str) -> Result<Uuid> {
        validate_entry_fields(word, explanation)?;

        let entry = Entry::create(word, explanation);
        let id = entry.id;
        let snapshot = {
            let mut inner = self.lock_ready();
            inner.entries.push(entry);
            self.save_entries(&inner.entries);
            inner.entries.clone()
        };
        self.notify(&snapshot);
        Ok(id)
    }

    /// Remove the entries at `positions` and persist the result.
    ///
    /// Positions are zero-based indices into the full sequence. Out-of-range
    /// positions are skipped with a warning and the rest are still removed.
    ///
    /// # Returns
    ///
    /// Returns the removed entries in their original order. Nothing is saved
    /// when nothing was removed.
    pub fn remove(&self, positions: &BTreeSet<usize>) -> Vec<Entry> {
        let (removed, snapshot) = {
            let mut inner = self.lock_ready();
            let len = inner.entries.len();
            let skipped: Vec<usize> = positions.range(len..).copied().collect();
            if !skipped.is_empty() {
                tracing::warn!(?skipped, len, "ignoring out-of-range positions");
            }

            let mut removed: Vec<Entry> = positions
                .range(..len)
                .rev()
                .map(|&position| inner.entries.remove(position))
                .collect();
            if removed.is_empty() {
                return removed;
            }
            removed.reverse();

            self.save_entries(&inner.entries);
            (removed, inner.entries.clone())
        };
        self.notify(&snapshot);
        removed
    }

    /// Entries matching `search_text`, in insertion order.
    ///
    /// See [`crate::query`] for the matching rules. Reads memory only.
    pub fn query(&self, search_text: &str) -> Vec<Entry> {
        query::filter(&self.lock_ready().entries, search_text)
    }

    /// Like [`EntryStore::query`], with each entry's position in the full
    /// sequence. Positions can be passed straight to [`EntryStore::remove`].
    pub fn query_indexed(&self, search_text: &str) -> Vec<(usize, Entry)> {
        query::filter_indexed(&self.lock_ready().entries, search_text)
    }

    /// Entry at `position`, if any.
    pub fn get(&self, position: usize) -> Option<Entry> {
        self.lock_ready().entries.get(position).cloned()
    }

    /// Entry with identifier `id`, if any.
    pub fn find(&self, id: &Uuid) -> Option<Entry> {
        self.lock_ready()
            .entries
            .iter()
            .find(|entry| entry.id == *id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.lock_ready().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a callback for changes to the sequence.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&[Entry]) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn notify(&self, snapshot: &[Entry]) {
        let listeners: Vec<ChangeListener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in &listeners {
            listener(snapshot);
        }
    }

    // --- Presentation interface ---

    /// Add an entry. Alias of [`EntryStore::add`].
    pub fn add_entry(&self, word: &str, explanation: &str) -> Result<Uuid> {
        self.add(word, explanation)
    }

    /// Snapshot of the full sequence.
    pub fn get_all(&self) -> Vec<Entry> {
        self.lock_ready().entries.clone()
    }

    /// Filtered view. Alias of [`EntryStore::query`].
    pub fn search(&self, text: &str) -> Vec<Entry> {
        self.query(text)
    }

    /// Remove by position. Alias of [`EntryStore::remove`].
    pub fn delete_at<I>(&self, indices: I) -> Vec<Entry>
    where
        I: IntoIterator<Item = usize>,
    {
        let positions: BTreeSet<usize> = indices.into_iter().collect();
        self.remove(&positions)
    }
}
