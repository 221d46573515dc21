//! # Client Session
//!
//! The orchestration layer: it runs each records operation and mirrors the
//! outcome into the [`ClientStore`].
//!
//! Every operation follows the same sequence:
//!
//! 1. `is_loading = true`, `error = None`
//! 2. await the records call
//! 3. on success, apply the matching store mutator
//!    (`set_all`, `add`, `update`, `remove`)
//! 4. on failure, copy the error message into `error` and return the error
//! 5. `is_loading = false`, whatever happened
//!
//! Failures therefore reach both passive observers (through the store) and
//! the caller (through the `Result`). A failed call never reaches the
//! client list.
//!
//! ## Concurrency
//!
//! Operations take `&self` and are neither queued nor isolated from each
//! other. If two of them are in flight, their results land in the store in
//! the order the records calls resolve, and the flags end up reflecting
//! whichever settled last. Nothing can be cancelled once started; dropping
//! the future is the only way to ignore a result.

use crate::error::Result;
use crate::model::{ClientInput, ClientPatch, ClientRecord};
use crate::records::RecordsApi;
use crate::store::ClientStore;
use std::future::Future;
use std::sync::Arc;
use uuid::Uuid;

pub struct ClientSession<R: RecordsApi> {
    records: R,
    store: Arc<ClientStore>,
}

impl<R: RecordsApi> ClientSession<R> {
    /// Builds a session without touching the records backend.
    pub fn new(records: R, store: Arc<ClientStore>) -> Self {
        Self { records, store }
    }

    /// Builds a session and loads the client list once.
    ///
    /// A failed initial load is not returned: it is left in the store's
    /// `error` for the presentation layer to show.
    pub async fn start(records: R, store: Arc<ClientStore>) -> Self {
        let session = Self::new(records, store);
        if let Err(e) = session.load_clients().await {
            tracing::warn!(error = %e, "initial client load failed");
        }
        session
    }

    pub fn store(&self) -> &Arc<ClientStore> {
        &self.store
    }

    pub fn records(&self) -> &R {
        &self.records
    }

    pub async fn load_clients(&self) -> Result<Vec<ClientRecord>> {
        self.track("list", self.records.list(), |store, clients| {
            store.set_all(clients.clone());
        })
        .await
    }

    pub async fn create_client(&self, input: ClientInput) -> Result<ClientRecord> {
        self.track("create", self.records.create(input), |store, client| {
            store.add(client.clone());
        })
        .await
    }

    pub async fn update_client(&self, id: Uuid, input: ClientInput) -> Result<ClientRecord> {
        self.track("update", self.records.update(&id, input), |store, client| {
            store.update(&client.id, ClientPatch::from(client));
        })
        .await
    }

    pub async fn delete_client(&self, id: Uuid) -> Result<()> {
        self.track("delete", self.records.delete(&id), |store, _| {
            store.remove(&id);
        })
        .await
    }

    async fn track<T, Fut>(
        &self,
        operation: &'static str,
        call: Fut,
        apply: impl FnOnce(&ClientStore, &T),
    ) -> Result<T>
    where
        Fut: Future<Output = Result<T>>,
    {
        self.store.set_loading(true);
        self.store.set_error(None);
        tracing::debug!(operation, "records call started");

        let outcome = call.await;
        match &outcome {
            Ok(value) => {
                apply(self.store.as_ref(), value);
                tracing::debug!(operation, "records call succeeded");
            }
            Err(e) => {
                self.store.set_error(Some(e.to_string()));
                tracing::warn!(operation, error = %e, "records call failed");
            }
        }

        self.store.set_loading(false);
        outcome
    }
}
