use super::{Latency, Operation, RecordsApi, apply_create, apply_delete, apply_update, demo_records, sorted};
use crate::error::Result;
use crate::model::{ClientInput, ClientRecord};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Records kept in a single JSON file.
///
/// Every operation reads the file, applies the change and writes it back
/// through a temporary file and a rename, so readers never see a half
/// written file. A missing file reads as empty, or as the demo clients when
/// seeding is enabled.
#[derive(Debug)]
pub struct FileRecords {
    path: PathBuf,
    seed_demo: bool,
    latency: Latency,
    // Serializes read-modify-write cycles within this process.
    io: Mutex<()>,
}

impl FileRecords {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed_demo: false,
            latency: Latency::none(),
            io: Mutex::new(()),
        }
    }

    pub fn with_demo_seed(mut self, seed: bool) -> Self {
        self.seed_demo = seed;
        self
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<ClientRecord>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), seed = self.seed_demo, "records file missing");
            return Ok(if self.seed_demo { demo_records() } else { Vec::new() });
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, records: &[ClientRecord]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "records saved");
        Ok(())
    }

    fn modify<T>(&self, f: impl FnOnce(&mut Vec<ClientRecord>) -> Result<T>) -> Result<T> {
        let _guard = self.io.lock();
        let mut records = self.load()?;
        let out = f(&mut records)?;
        self.save(&records)?;
        Ok(out)
    }
}

#[async_trait]
impl RecordsApi for FileRecords {
    async fn list(&self) -> Result<Vec<ClientRecord>> {
        self.latency.wait(Operation::List).await;
        let _guard = self.io.lock();
        Ok(sorted(&self.load()?))
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<ClientRecord>> {
        self.latency.wait(Operation::Get).await;
        let _guard = self.io.lock();
        Ok(self.load()?.into_iter().find(|r| r.id == *id))
    }

    async fn create(&self, input: ClientInput) -> Result<ClientRecord> {
        self.latency.wait(Operation::Create).await;
        self.modify(|records| apply_create(records, input))
    }

    async fn update(&self, id: &Uuid, input: ClientInput) -> Result<ClientRecord> {
        self.latency.wait(Operation::Update).await;
        self.modify(|records| apply_update(records, id, input))
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        self.latency.wait(Operation::Delete).await;
        self.modify(|records| apply_delete(records, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::records::memory::fixtures::{CPFS, client_input};
    use crate::session::ClientSession;
    use crate::store::ClientStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn records_in(dir: &TempDir) -> FileRecords {
        FileRecords::new(dir.path().join("data").join("clients.json"))
    }

    #[tokio::test]
    async fn missing_file_lists_empty() {
        let dir = TempDir::new().unwrap();
        let records = records_in(&dir);
        assert!(records.list().await.unwrap().is_empty());
        assert!(!records.path().exists());
    }

    #[tokio::test]
    async fn missing_file_lists_demo_when_seeding() {
        let dir = TempDir::new().unwrap();
        let records = records_in(&dir).with_demo_seed(true);
        let names: Vec<String> = records.list().await.unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["João Silva", "Maria Santos"]);
    }

    #[tokio::test]
    async fn listed_demo_clients_can_be_edited_and_deleted() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(ClientStore::new());
        let session = ClientSession::start(records_in(&dir).with_demo_seed(true), Arc::clone(&store)).await;
        assert!(!session.records().path().exists());

        let joao = store.clients()[0].clone();
        let mut input = joao.input();
        input.plate = "JKL-5555".into();
        session.update_client(joao.id, input).await.unwrap();
        assert_eq!(store.get_by_id(&joao.id).unwrap().plate, "JKL-5555");

        let maria = store.clients()[1].clone();
        session.delete_client(maria.id).await.unwrap();

        let names: Vec<String> = records_in(&dir).list().await.unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["João Silva"]);
    }

    #[tokio::test]
    async fn writes_survive_reopening() {
        let dir = TempDir::new().unwrap();
        let created = records_in(&dir).create(client_input("Ana", CPFS[0])).await.unwrap();

        let reopened = records_in(&dir);
        assert_eq!(reopened.get_by_id(&created.id).await.unwrap(), Some(created.clone()));

        let updated = reopened
            .update(&created.id, client_input("Ana Paula", CPFS[0]))
            .await
            .unwrap();
        assert_eq!(updated.created_at, created.created_at);

        reopened.delete(&created.id).await.unwrap();
        assert!(records_in(&dir).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_write_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let records = records_in(&dir);
        records.create(client_input("Ana", CPFS[0])).await.unwrap();
        let before = fs::read_to_string(records.path()).unwrap();

        let err = records.create(client_input("Bia", CPFS[0])).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(fs::read_to_string(records.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let records = records_in(&dir);
        fs::create_dir_all(records.path().parent().unwrap()).unwrap();
        fs::write(records.path(), "{not json").unwrap();

        let err = records.list().await.unwrap_err();
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
