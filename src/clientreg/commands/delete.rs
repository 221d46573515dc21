use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{ClientSelector, index_clients, resolve};
use crate::records::RecordsApi;
use crate::session::ClientSession;

/// Deletes the selected clients, one after another.
///
/// Every selector is resolved against the listing before anything is
/// deleted, so `delete 1 2` removes the first two clients as listed rather
/// than chasing shifting indexes. The first failure stops the run.
pub async fn run<R: RecordsApi>(
    session: &ClientSession<R>,
    selectors: &[ClientSelector],
) -> Result<CmdResult> {
    let listing = index_clients(session.store().clients());
    let targets = selectors
        .iter()
        .map(|s| resolve(&listing, s).map(|dc| dc.client.clone()))
        .collect::<Result<Vec<_>>>()?;

    let mut result = CmdResult::default();
    for client in &targets {
        session.delete_client(client.id).await?;
        result.add_message(CmdMessage::success(format!(
            "Cliente removido: {}",
            client.name
        )));
    }
    Ok(result.with_affected_clients(targets))
}
