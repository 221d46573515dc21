use super::{Latency, Operation, RecordsApi, apply_create, apply_delete, apply_update, demo_records, sorted};
use crate::error::Result;
use crate::model::{ClientInput, ClientRecord};
use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

/// In-memory records backend for tests and demos.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryRecords {
    records: Mutex<Vec<ClientRecord>>,
    latency: Latency,
}

impl InMemoryRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_data() -> Self {
        Self::with_records(demo_records())
    }

    pub fn with_records(records: Vec<ClientRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            latency: Latency::none(),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Puts the backend back to its demo contents.
    pub fn reset(&self) {
        *self.records.lock() = demo_records();
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl RecordsApi for InMemoryRecords {
    async fn list(&self) -> Result<Vec<ClientRecord>> {
        self.latency.wait(Operation::List).await;
        Ok(sorted(&self.records.lock()))
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<ClientRecord>> {
        self.latency.wait(Operation::Get).await;
        Ok(self.records.lock().iter().find(|r| r.id == *id).cloned())
    }

    async fn create(&self, input: ClientInput) -> Result<ClientRecord> {
        self.latency.wait(Operation::Create).await;
        apply_create(&mut self.records.lock(), input)
    }

    async fn update(&self, id: &Uuid, input: ClientInput) -> Result<ClientRecord> {
        self.latency.wait(Operation::Update).await;
        apply_update(&mut self.records.lock(), id, input)
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        self.latency.wait(Operation::Delete).await;
        apply_delete(&mut self.records.lock(), id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Valid, distinct CPFs for building fixtures.
    pub const CPFS: [&str; 6] = [
        "111.444.777-35",
        "529.982.247-25",
        "354.135.150-06",
        "900.532.050-81",
        "589.017.390-11",
        "384.076.030-58",
    ];

    pub fn client_input(name: &str, cpf: &str) -> ClientInput {
        ClientInput::new(name, "(11) 98765-4321", cpf, "ABC-1234")
    }

    pub struct RecordsFixture {
        records: Vec<ClientRecord>,
        latency: Latency,
    }

    impl Default for RecordsFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RecordsFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
                latency: Latency::none(),
            }
        }

        /// Adds `names.len()` clients, each with its own CPF from [`CPFS`].
        pub fn with_clients(mut self, names: &[&str]) -> Self {
            for name in names {
                let cpf = CPFS[self.records.len() % CPFS.len()];
                self.records.push(ClientRecord::new(client_input(name, cpf)));
            }
            self
        }

        pub fn with_latency(mut self, latency: Latency) -> Self {
            self.latency = latency;
            self
        }

        pub fn build(self) -> InMemoryRecords {
            InMemoryRecords::with_records(self.records).with_latency(self.latency)
        }
    }
}
