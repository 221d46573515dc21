//! # Display Indexes
//!
//! Client ids are UUIDs, which nobody wants to type. Listings number clients
//! `1..n` in their sorted order, and commands accept either that number or
//! the start of the id.
//!
//! ## Selector Grammar
//!
//! - **Index**: `N` (e.g. `1`, `12`), the position in the current listing
//! - **Range**: `N-M` (e.g. `2-4`), expands to `N, N+1, ..., M`; start must be
//!   ≤ end
//! - **Id**: anything else is treated as an id prefix (e.g. `3f2a`, or a full
//!   UUID); it must match exactly one client
//!
//! Indexes are only stable while the list does not change: adding `Ana` to a
//! registry of `Bruno, Carla` renumbers both.

use crate::error::{ClientRegError, Result};
use crate::model::ClientRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayClient {
    pub index: usize,
    pub client: ClientRecord,
}

/// Numbers clients `1..n` in the order given (the store's name order).
pub fn index_clients(clients: Vec<ClientRecord>) -> Vec<DisplayClient> {
    clients
        .into_iter()
        .enumerate()
        .map(|(i, client)| DisplayClient {
            index: i + 1,
            client,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientSelector {
    Index(usize),
    Id(String),
}

impl std::fmt::Display for ClientSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientSelector::Index(i) => write!(f, "{}", i),
            ClientSelector::Id(prefix) => write!(f, "{}", prefix),
        }
    }
}

fn is_index(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Parses one selector argument, expanding ranges.
pub fn parse_selector(s: &str) -> Result<Vec<ClientSelector>> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ClientRegError::Api("Empty client selector".into()));
    }

    if let Some((start, end)) = s.split_once('-') {
        if is_index(start) && is_index(end) {
            let (start, end) = (parse_index(start)?, parse_index(end)?);
            if start > end {
                return Err(ClientRegError::Api(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                )));
            }
            return Ok((start..=end).map(ClientSelector::Index).collect());
        }
    }

    if is_index(s) {
        return Ok(vec![ClientSelector::Index(parse_index(s)?)]);
    }
    Ok(vec![ClientSelector::Id(s.to_lowercase())])
}

fn parse_index(s: &str) -> Result<usize> {
    match s.parse::<usize>() {
        Ok(0) | Err(_) => Err(ClientRegError::Api(format!("Invalid index: {}", s))),
        Ok(n) => Ok(n),
    }
}

/// Parses every argument, dropping repeats while keeping first-seen order.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ClientSelector>> {
    let mut selectors: Vec<ClientSelector> = Vec::new();
    for input in inputs {
        for selector in parse_selector(input.as_ref())? {
            if !selectors.contains(&selector) {
                selectors.push(selector);
            }
        }
    }
    Ok(selectors)
}

/// Finds the client a selector points at within an indexed listing.
pub fn resolve<'a>(listing: &'a [DisplayClient], selector: &ClientSelector) -> Result<&'a DisplayClient> {
    match selector {
        ClientSelector::Index(i) => listing
            .iter()
            .find(|dc| dc.index == *i)
            .ok_or_else(|| ClientRegError::Api(format!("No client at index {}", i))),
        ClientSelector::Id(prefix) => {
            let mut found = listing
                .iter()
                .filter(|dc| dc.client.id.to_string().starts_with(prefix.as_str()));
            match (found.next(), found.next()) {
                (Some(dc), None) => Ok(dc),
                (None, _) => Err(ClientRegError::Api(format!("No client with id {}", prefix))),
                (Some(_), Some(_)) => Err(ClientRegError::Api(format!(
                    "Id prefix {} matches more than one client",
                    prefix
                ))),
            }
        }
    }
}
