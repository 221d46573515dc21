//! # Commands
//!
//! Business logic for each user-facing operation. Commands run against a
//! [`ClientSession`](crate::session::ClientSession), read listings from its
//! store, and return a [`CmdResult`]: the clients they touched or listed plus
//! messages for the user. They never print.

use crate::config::ClientRegConfig;
use crate::index::DisplayClient;
use crate::model::ClientRecord;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_clients: Vec<ClientRecord>,
    pub listed_clients: Vec<DisplayClient>,
    pub messages: Vec<CmdMessage>,
    pub config: Option<ClientRegConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_clients(mut self, clients: Vec<ClientRecord>) -> Self {
        self.affected_clients = clients;
        self
    }

    pub fn with_listed_clients(mut self, clients: Vec<DisplayClient>) -> Self {
        self.listed_clients = clients;
        self
    }

    pub fn with_config(mut self, config: ClientRegConfig) -> Self {
        self.config = Some(config);
        self
    }
}
