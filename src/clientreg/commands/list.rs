use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_clients;
use crate::records::RecordsApi;
use crate::session::ClientSession;

/// Lists what the store currently holds, numbered in name order.
///
/// If the last records call failed (typically the initial load), the listing
/// may be stale and carries a warning with the failure.
pub fn run<R: RecordsApi>(session: &ClientSession<R>) -> Result<CmdResult> {
    let listed = index_clients(session.store().clients());
    let mut result = CmdResult::default();
    if let Some(warning) = stale_warning(session) {
        result.add_message(warning);
    }
    Ok(result.with_listed_clients(listed))
}

pub(crate) fn stale_warning<R: RecordsApi>(session: &ClientSession<R>) -> Option<CmdMessage> {
    session
        .store()
        .error()
        .map(|error| CmdMessage::warning(format!("Lista possivelmente desatualizada: {}", error)))
}
