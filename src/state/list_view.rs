use crate::api::{ApiError, EntityApi};
use crate::entity::{filter_records, Draft, Entity, Stat};
use crate::state::Notifier;
use leptos::prelude::*;

/// View state for one entity list: collection, search, dialog draft.
///
/// All fields are signals so a copy can be moved into any event handler.
/// The async operations never hold a borrow across an await; each one reads
/// what it needs untracked, talks to the API, then writes results back.
pub(crate) struct ListView<E: Entity> {
    pub records: RwSignal<Vec<E>>,
    pub related: RwSignal<E::Related>,
    pub search: RwSignal<String>,
    pub scope: RwSignal<E::Scope>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub dialog_open: RwSignal<bool>,
    pub editing: RwSignal<bool>,
    pub draft: RwSignal<E::Draft>,
    pub saving: RwSignal<bool>,
    pub notifier: Notifier,
    /// Bumped per fetch; a response for an older ticket is dropped.
    fetch_ticket: RwSignal<u64>,
}

impl<E: Entity> Clone for ListView<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for ListView<E> {}

impl<E: Entity> ListView<E> {
    pub fn new(notifier: Notifier, scope: E::Scope) -> Self {
        Self {
            records: RwSignal::new(Vec::new()),
            related: RwSignal::new(E::Related::default()),
            search: RwSignal::new(String::new()),
            scope: RwSignal::new(scope),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            dialog_open: RwSignal::new(false),
            editing: RwSignal::new(false),
            draft: RwSignal::new(E::Draft::default()),
            saving: RwSignal::new(false),
            notifier,
            fetch_ticket: RwSignal::new(0),
        }
    }

    /// Tracked: reruns when the search term or the collection changes.
    pub fn filtered(&self) -> Vec<E> {
        let term = self.search.get();
        self.records.with(|records| filter_records(records, &term))
    }

    /// Always over the full collection, never the filtered one.
    pub fn stats(&self) -> Vec<Stat> {
        self.records.with(|records| E::stats(records))
    }

    pub fn open_dialog(&self, record: Option<&E>) {
        self.draft
            .set(record.map(E::to_draft).unwrap_or_default());
        self.editing.set(record.is_some());
        self.dialog_open.set(true);
    }

    pub fn close_dialog(&self) {
        self.dialog_open.set(false);
    }

    pub fn set_field(&self, field: &str, value: String) {
        self.draft.update(|d| Draft::set(d, field, value));
    }

    /// Refetches the primary collection for the current scope.
    pub async fn refresh<A: EntityApi<E>>(&self, api: &A) -> bool {
        self.loading.set(true);
        let scope = self.scope.get_untracked();
        let ticket = self.fetch_ticket.get_untracked().wrapping_add(1);
        self.fetch_ticket.set(ticket);

        let result = api.list(&scope).await;
        if self.fetch_ticket.get_untracked() != ticket {
            tracing::debug!(entity = E::PLURAL, "dropping superseded response");
            return false;
        }

        let ok = match result {
            Ok(records) => {
                tracing::debug!(entity = E::PLURAL, count = records.len(), "collection loaded");
                self.records.set(records);
                self.error.set(None);
                true
            }
            Err(e) => {
                tracing::warn!(entity = E::PLURAL, error = %e, "collection fetch failed");
                let message = format!("Failed to fetch {}", E::PLURAL);
                self.error.set(Some(message.clone()));
                self.notifier.error(message);
                false
            }
        };

        self.loading.set(false);
        ok
    }

    /// Cross-reference lookups. Failure degrades display names, nothing else.
    pub async fn load_related<A: EntityApi<E>>(&self, api: &A) {
        match api.related().await {
            Ok(related) => self.related.set(related),
            Err(e) => {
                tracing::warn!(entity = E::PLURAL, error = %e, "cross-reference fetch failed");
            }
        }
    }

    /// Create or update from the draft, then refetch and close.
    /// On failure the dialog stays open with the draft intact.
    pub async fn save<A: EntityApi<E>>(&self, api: &A) -> bool {
        let draft = self.draft.get_untracked();
        let editing = self.editing.get_untracked();
        let payload = E::payload(&draft);

        self.saving.set(true);
        let result = if editing {
            match draft.id() {
                Some(id) => api.update(id, &payload).await,
                None => Err(ApiError::MissingId),
            }
        } else {
            api.create(&payload).await
        };

        let ok = match result {
            Ok(()) => {
                let verb = if editing { "updated" } else { "created" };
                tracing::info!(entity = E::NOUN, verb, "record saved");
                self.notifier
                    .success(format!("{} {verb} successfully!", E::TITLE));
                self.refresh(api).await;
                self.close_dialog();
                true
            }
            Err(e) => {
                tracing::warn!(entity = E::NOUN, error = %e, "save failed");
                self.notifier
                    .error(e.user_message(&format!("Failed to save {}", E::NOUN)));
                false
            }
        };

        self.saving.set(false);
        ok
    }

    /// Deletes after `confirm` agrees; declining makes no request.
    pub async fn delete<A: EntityApi<E>>(
        &self,
        api: &A,
        id: i64,
        confirm: impl FnOnce(&str) -> bool,
    ) -> bool {
        let prompt = format!("Are you sure you want to delete this {}?", E::NOUN);
        if !confirm(&prompt) {
            return false;
        }

        match api.delete(id).await {
            Ok(()) => {
                tracing::info!(entity = E::NOUN, id, "record deleted");
                self.notifier
                    .success(format!("{} deleted successfully!", E::TITLE));
                self.refresh(api).await;
                true
            }
            Err(e) => {
                tracing::warn!(entity = E::NOUN, id, error = %e, "delete failed");
                self.notifier
                    .error(e.user_message(&format!("Failed to delete {}", E::NOUN)));
                false
            }
        }
    }
}
