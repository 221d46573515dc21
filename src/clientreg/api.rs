//! # API Facade
//!
//! The single entry point for every clientreg operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching command in `commands/*.rs`
//! - **Normalizes inputs**: selector strings become [`ClientSelector`]s, raw
//!   field values are typed into a [`ClientForm`] so they are masked and
//!   validated exactly as an interactive form would
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and never prints.
//!
//! ## Generic Over RecordsApi
//!
//! `ClientRegApi<R: RecordsApi>` is generic over the records backend:
//! - Production: `ClientRegApi<FileRecords>`
//! - Testing: `ClientRegApi<InMemoryRecords>`
//!
//! The underlying [`ClientStore`] is exposed so a presentation layer can
//! subscribe to it and redraw on every change.

use crate::commands;
use crate::error::{ClientRegError, Result};
use crate::form::ClientForm;
use crate::index::{ClientSelector, parse_selector, parse_selectors};
use crate::model::Field;
use crate::records::RecordsApi;
use crate::session::ClientSession;
use crate::store::{ClientStore, ClientsState};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct ClientRegApi<R: RecordsApi> {
    session: ClientSession<R>,
    config_dir: PathBuf,
}

impl<R: RecordsApi> ClientRegApi<R> {
    /// Wires the backend to a fresh store and performs the initial load.
    pub async fn start(records: R, config_dir: impl Into<PathBuf>) -> Self {
        let session = ClientSession::start(records, Arc::new(ClientStore::new())).await;
        Self {
            session,
            config_dir: config_dir.into(),
        }
    }

    pub fn list_clients(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn search_clients(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.session, query)
    }

    pub fn view_clients<I: AsRef<str>>(&self, targets: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(targets)?;
        commands::view::run(&self.session, &selectors)
    }

    pub async fn create_client(&self, values: &[(Field, String)]) -> Result<commands::CmdResult> {
        let mut form = ClientForm::new();
        for (field, value) in values {
            form.set(*field, value);
        }
        commands::create::run(&self.session, &form).await
    }

    /// `target` must point at exactly one client.
    pub async fn update_client(
        &self,
        target: &str,
        changes: &[(Field, String)],
    ) -> Result<commands::CmdResult> {
        let selector = single_selector(target)?;
        commands::update::run(&self.session, &selector, changes).await
    }

    pub async fn delete_clients<I: AsRef<str>>(&self, targets: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(targets)?;
        commands::delete::run(&self.session, &selectors).await
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn state(&self) -> ClientsState {
        self.session.store().snapshot()
    }

    pub fn store(&self) -> &Arc<ClientStore> {
        self.session.store()
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn single_selector(target: &str) -> Result<ClientSelector> {
    let mut selectors = parse_selector(target)?;
    if selectors.len() != 1 {
        return Err(ClientRegError::Api(format!(
            "Expected a single client, got {}",
            target
        )));
    }
    Ok(selectors.remove(0))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
