use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::matches;
use crate::index::index_clients;
use crate::records::RecordsApi;
use crate::session::ClientSession;

/// Filters the listing by `query`. Matches keep the index they have in the
/// full listing, so they can be passed straight to `view`, `edit` or
/// `delete`.
pub fn run<R: RecordsApi>(session: &ClientSession<R>, query: &str) -> Result<CmdResult> {
    let listed: Vec<_> = index_clients(session.store().clients())
        .into_iter()
        .filter(|dc| matches(&dc.client, query))
        .collect();

    let mut result = CmdResult::default();
    if let Some(warning) = super::list::stale_warning(session) {
        result.add_message(warning);
    }
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nenhum cliente encontrado para \"{}\"",
            query
        )));
    }
    Ok(result.with_listed_clients(listed))
}
