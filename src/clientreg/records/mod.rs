//! # Records API
//!
//! The persistence collaborator the orchestration layer talks to. The
//! [`RecordsApi`] trait is the whole contract; the rest of the crate never
//! touches storage directly.
//!
//! ## Contract
//!
//! - `list` returns every record, sorted by name.
//! - `create` rejects a CPF that is already registered
//!   ([`ClientRegError::DuplicateNationalId`]).
//! - `update` replaces every editable field and keeps `id` and `created_at`.
//!   It rejects unknown ids ([`ClientRegError::ClientNotFound`]) and a CPF
//!   that belongs to a *different* record.
//! - `delete` rejects unknown ids.
//!
//! The rules live in the `apply_*` helpers below so every backend enforces
//! them identically.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryRecords`]: mock backend, optionally seeded with demo
//!   clients.
//! - [`fs::FileRecords`]: a JSON file, used by the CLI.
//!
//! Both can be slowed down with a [`Latency`] to exercise loading states.

use crate::collation::compare_names;
use crate::error::{ClientRegError, Result};
use crate::model::{ClientInput, ClientRecord};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::time::Duration;
use uuid::Uuid;

pub mod fs;
pub mod memory;

#[async_trait]
pub trait RecordsApi: Send + Sync {
    /// All records, sorted by name.
    async fn list(&self) -> Result<Vec<ClientRecord>>;

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<ClientRecord>>;

    async fn create(&self, input: ClientInput) -> Result<ClientRecord>;

    async fn update(&self, id: &Uuid, input: ClientInput) -> Result<ClientRecord>;

    async fn delete(&self, id: &Uuid) -> Result<()>;
}

/// Which records operation is about to run, for per-operation delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// Artificial delay applied before each operation of a backend.
///
/// Delays are awaited with `tokio::time::sleep`, so tests running on a
/// paused tokio clock advance through them instantly and deterministically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self::default()
    }

    /// Delays of a slow remote backend.
    pub fn simulated() -> Self {
        Self {
            list: Duration::from_millis(500),
            get: Duration::from_millis(300),
            create: Duration::from_millis(800),
            update: Duration::from_millis(500),
            delete: Duration::from_millis(400),
        }
    }

    pub fn for_operation(&self, op: Operation) -> Duration {
        match op {
            Operation::List => self.list,
            Operation::Get => self.get,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }

    pub async fn wait(&self, op: Operation) {
        let delay = self.for_operation(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

// --- Shared rules ---

pub(crate) fn sorted(records: &[ClientRecord]) -> Vec<ClientRecord> {
    let mut records = records.to_vec();
    records.sort_by(|a, b| compare_names(&a.name, &b.name));
    records
}

pub(crate) fn apply_create(records: &mut Vec<ClientRecord>, input: ClientInput) -> Result<ClientRecord> {
    if records.iter().any(|r| r.national_id == input.national_id) {
        return Err(ClientRegError::DuplicateNationalId(input.national_id));
    }
    let record = ClientRecord::new(input);
    records.push(record.clone());
    Ok(record)
}

pub(crate) fn apply_update(
    records: &mut [ClientRecord],
    id: &Uuid,
    input: ClientInput,
) -> Result<ClientRecord> {
    let idx = records
        .iter()
        .position(|r| r.id == *id)
        .ok_or(ClientRegError::ClientNotFound(*id))?;

    if records
        .iter()
        .any(|r| r.national_id == input.national_id && r.id != *id)
    {
        return Err(ClientRegError::DuplicateNationalId(input.national_id));
    }

    records[idx].replace(input);
    Ok(records[idx].clone())
}

pub(crate) fn apply_delete(records: &mut Vec<ClientRecord>, id: &Uuid) -> Result<()> {
    let before = records.len();
    records.retain(|r| r.id != *id);
    if records.len() == before {
        return Err(ClientRegError::ClientNotFound(*id));
    }
    Ok(())
}

/// Ids of the demo clients. Fixed, so a backend that rebuilds the seed on
/// every read still hands out the same ids.
pub const DEMO_IDS: [Uuid; 2] = [
    Uuid::from_u128(0x3a9d_52c4_8e1f_4b07_a2c5_6d90_1e3f_7b21),
    Uuid::from_u128(0xc41e_07b8_2f6a_4d93_8b1c_e5a0_94d2_3f68),
];

/// The two clients a fresh demo registry starts with.
pub fn demo_records() -> Vec<ClientRecord> {
    let seed = |id: Uuid, name: &str, phone: &str, cpf: &str, plate: &str, (y, m, d): (i32, u32, u32)| {
        let mut record = ClientRecord::new(ClientInput::new(name, phone, cpf, plate));
        record.id = id;
        if let Some(at) = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single() {
            record.created_at = at;
        }
        record
    };
    vec![
        seed(
            DEMO_IDS[0],
            "João Silva",
            "(11) 98765-4321",
            "529.982.247-25",
            "ABC-1234",
            (2024, 1, 15),
        ),
        seed(
            DEMO_IDS[1],
            "Maria Santos",
            "(21) 99876-5432",
            "111.444.777-35",
            "XYZ-9876",
            (2024, 1, 20),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::schema;

    fn input(name: &str, cpf: &str) -> ClientInput {
        ClientInput::new(name, "(11) 98765-4321", cpf, "ABC-1234")
    }

    #[test]
    fn create_rejects_duplicate_cpf() {
        let mut records = Vec::new();
        apply_create(&mut records, input("Ana", "111.444.777-35")).unwrap();
        let err = apply_create(&mut records, input("Bia", "111.444.777-35")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn update_allows_keeping_own_cpf() {
        let mut records = Vec::new();
        let ana = apply_create(&mut records, input("Ana", "111.444.777-35")).unwrap();
        let updated = apply_update(&mut records, &ana.id, input("Ana Maria", "111.444.777-35")).unwrap();
        assert_eq!(updated.id, ana.id);
        assert_eq!(updated.created_at, ana.created_at);
        assert_eq!(updated.name, "Ana Maria");
    }

    #[test]
    fn update_rejects_cpf_of_another_record() {
        let mut records = Vec::new();
        let ana = apply_create(&mut records, input("Ana", "111.444.777-35")).unwrap();
        apply_create(&mut records, input("Bia", "529.982.247-25")).unwrap();

        let err = apply_update(&mut records, &ana.id, input("Ana", "529.982.247-25")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(records[0].national_id, "111.444.777-35");
    }

    #[test]
    fn update_and_delete_reject_unknown_ids() {
        let mut records = Vec::new();
        let ghost = Uuid::new_v4();
        assert_eq!(
            apply_update(&mut records, &ghost, input("Ana", "111.444.777-35"))
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(apply_delete(&mut records, &ghost).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn demo_records_keep_their_ids() {
        let ids = |records: Vec<ClientRecord>| records.into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids(demo_records()), ids(demo_records()));
        assert_eq!(ids(demo_records()), DEMO_IDS.to_vec());
    }

    #[test]
    fn demo_records_are_valid() {
        for record in demo_records() {
            assert_eq!(schema::validate(&record.input()), Ok(()), "{}", record.name);
        }
    }

    #[test]
    fn simulated_latency_per_operation() {
        let latency = Latency::simulated();
        assert_eq!(latency.for_operation(Operation::Create), Duration::from_millis(800));
        assert_eq!(Latency::none().for_operation(Operation::List), Duration::ZERO);
    }
}
