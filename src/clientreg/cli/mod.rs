//! # CLI Layer
//!
//! One possible UI client for clientreg. This is the only place that parses
//! arguments, touches stdout/stderr and decides exit codes; everything it
//! does goes through [`clientreg::api::ClientRegApi`].

mod args;
mod commands;
mod print;

pub use commands::run;
