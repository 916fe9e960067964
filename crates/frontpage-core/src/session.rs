//! Editing sessions.
//!
//! An [`EditingSession`] owns the arrangement being edited for one edition,
//! the catalogs it draws from, and the last published edition. It is not
//! synchronized; wrap it in a [`SharedSession`] when more than one call
//! site may edit it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use frontpage_layout::{CommandOutcome, LayoutCommand, PlacementStore};
use frontpage_scoring::ContentCatalog;
use frontpage_types::{EconomicResult, EditionBaseline, PublishedEdition};

use crate::publish::{PublishError, Publisher};

/// One editor's working state.
#[derive(Debug, Clone)]
pub struct EditingSession {
    store: PlacementStore,
    catalog: ContentCatalog,
    publisher: Publisher,
    previous: Option<PublishedEdition>,
}

impl EditingSession {
    /// Start a session on an empty page with no edition published yet.
    pub fn new(catalog: ContentCatalog, publisher: Publisher) -> Self {
        Self {
            store: PlacementStore::new(),
            catalog,
            publisher,
            previous: None,
        }
    }

    /// Continue from an already published edition.
    #[must_use]
    pub fn with_previous(mut self, previous: PublishedEdition) -> Self {
        self.previous = Some(previous);
        self
    }

    /// The arrangement being edited.
    pub const fn store(&self) -> &PlacementStore {
        &self.store
    }

    /// The catalogs placements are scored against.
    pub const fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// The baseline the current edition will be scored from.
    pub fn baseline(&self) -> EditionBaseline {
        self.publisher.baseline(self.previous.as_ref())
    }

    /// Replace the arrangement with a restored draft.
    pub fn restore(&mut self, store: PlacementStore) {
        debug!(items = store.occupied_count(), "Draft restored");
        self.store = store;
    }

    /// Apply one layout edit.
    pub fn apply(&mut self, command: LayoutCommand) -> CommandOutcome {
        self.store.apply(command)
    }

    /// Apply layout edits in order.
    pub fn apply_all<I>(&mut self, commands: I) -> Vec<CommandOutcome>
    where
        I: IntoIterator<Item = LayoutCommand>,
    {
        self.store.apply_all(commands)
    }

    /// Score the current arrangement without publishing it.
    pub fn preview(&self) -> EconomicResult {
        self.publisher
            .preview(&self.store, &self.catalog, self.previous.as_ref())
    }

    /// Publish the current arrangement and start the next edition on an
    /// empty page.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the edition cannot be numbered. The
    /// arrangement is kept in that case.
    pub fn publish(&mut self) -> Result<PublishedEdition, PublishError> {
        let edition = self
            .publisher
            .publish(&self.store, &self.catalog, self.previous.as_ref())?;
        self.previous = Some(edition.clone());
        self.store.clear();
        Ok(edition)
    }
}

/// An [`EditingSession`] behind a mutex, cloneable across call sites.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<EditingSession>>,
}

impl SharedSession {
    /// Share a session.
    pub fn new(session: EditingSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Apply one layout edit.
    pub fn apply(&self, command: LayoutCommand) -> CommandOutcome {
        self.lock().apply(command)
    }

    /// Score the current arrangement without publishing it.
    pub fn preview(&self) -> EconomicResult {
        self.lock().preview()
    }

    /// Publish the current arrangement.
    ///
    /// # Errors
    ///
    /// See [`EditingSession::publish`].
    pub fn publish(&self) -> Result<PublishedEdition, PublishError> {
        self.lock().publish()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut EditingSession) -> R) -> R {
        f(&mut self.lock())
    }

    // Every edit leaves the store consistent, so a poisoned lock still
    // guards a usable session.
    fn lock(&self) -> MutexGuard<'_, EditingSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
