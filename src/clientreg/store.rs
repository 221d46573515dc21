//! # Client Collection Store
//!
//! The in-memory collection the presentation layer renders from: the sorted
//! list of clients plus the `is_loading` and `error` flags of the last
//! operation.
//!
//! The store is an ordinary value. Construct one per session, share it with
//! `Arc`, and give tests their own instance.
//!
//! ## Ordering
//!
//! `clients` is always sorted ascending by name (see [`crate::collation`]).
//! `set_all`, `add` and `update` re-sort; `remove` keeps the order of the
//! remaining clients.
//!
//! ## Missing ids
//!
//! `update` and `remove` silently ignore ids that are not present. Strict
//! not-found reporting belongs to the records API, not to this mirror.
//!
//! ## Subscriptions
//!
//! Every mutator notifies subscribers synchronously, once the mutation is
//! complete and the lock is released, with the new state. Callbacks may read
//! or mutate the store again; they must not assume they run on any
//! particular thread.

use crate::collation::compare_names;
use crate::model::{ClientPatch, ClientRecord};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientsState {
    pub clients: Vec<ClientRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&ClientsState) + Send + Sync>;

#[derive(Default)]
pub struct ClientStore {
    state: RwLock<ClientsState>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
}

impl std::fmt::Debug for ClientStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientStore")
            .field("state", &*self.state.read())
            .field("subscribers", &self.subscribers.lock().len())
            .finish()
    }
}

fn sort_clients(clients: &mut [ClientRecord]) {
    clients.sort_by(|a, b| compare_names(&a.name, &b.name));
}

impl ClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutators ---

    pub fn set_all(&self, clients: Vec<ClientRecord>) {
        self.mutate(|state| {
            state.clients = clients;
            sort_clients(&mut state.clients);
        });
    }

    pub fn add(&self, client: ClientRecord) {
        self.mutate(|state| {
            state.clients.push(client);
            sort_clients(&mut state.clients);
        });
    }

    pub fn update(&self, id: &Uuid, patch: ClientPatch) {
        self.mutate(|state| {
            if let Some(client) = state.clients.iter_mut().find(|c| c.id == *id) {
                client.apply(patch);
            }
            sort_clients(&mut state.clients);
        });
    }

    pub fn remove(&self, id: &Uuid) {
        self.mutate(|state| state.clients.retain(|c| c.id != *id));
    }

    pub fn set_loading(&self, loading: bool) {
        self.mutate(|state| state.is_loading = loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.mutate(|state| state.error = error);
    }

    // --- Readers ---

    pub fn get_by_id(&self, id: &Uuid) -> Option<ClientRecord> {
        self.state.read().clients.iter().find(|c| c.id == *id).cloned()
    }

    pub fn snapshot(&self) -> ClientsState {
        self.state.read().clone()
    }

    pub fn clients(&self) -> Vec<ClientRecord> {
        self.state.read().clients.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    // --- Subscriptions ---

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ClientsState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers.lock().push((id, Arc::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    fn mutate(&self, f: impl FnOnce(&mut ClientsState)) {
        let snapshot = {
            let mut state = self.state.write();
            f(&mut state);
            state.clone()
        };

        let subscribers: Vec<Subscriber> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, s)| Arc::clone(s))
            .collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}
