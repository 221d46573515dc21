//! # Clientreg Architecture
//!
//! Clientreg is a **UI-agnostic client registry library**: customers with a
//! name, a phone number, a CPF and a car plate. The `clientreg` binary is one
//! client of it; a web or desktop front end would sit on the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selectors, raw field values → form)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per operation, returns CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs) + Store (store.rs)                    │
//! │  - Runs records calls, mirrors results, loading and errors  │
//! │    into the observable, name-sorted client collection       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Records Layer (records/)                                   │
//! │  - Async RecordsApi trait                                   │
//! │  - FileRecords (production), InMemoryRecords (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Beside the layers sit the pure helpers every UI needs while the user
//! types: [`masks`] formats phone, CPF and plate input, [`national_id`]
//! checks CPF check digits, [`schema`] validates a whole record, and
//! [`form`] combines the three into live form state. [`filter`] implements
//! the free-text search and [`collation`] the locale-aware name order.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit` and never assumes a terminal. Async is confined to
//! the records calls; everything else is synchronous.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`session`]: Orchestration of records calls against the store
//! - [`store`]: Observable client collection
//! - [`records`]: Records backends and the shared persistence rules
//! - [`model`]: Core data types (`ClientRecord`, `ClientInput`, `Field`)
//! - [`index`]: Display indexing and selector parsing
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod collation;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod index;
pub mod masks;
pub mod model;
pub mod national_id;
pub mod records;
pub mod schema;
pub mod session;
pub mod store;
