use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{ClientSelector, index_clients, resolve};
use crate::records::RecordsApi;
use crate::session::ClientSession;

pub fn run<R: RecordsApi>(
    session: &ClientSession<R>,
    selectors: &[ClientSelector],
) -> Result<CmdResult> {
    let listing = index_clients(session.store().clients());
    let listed = selectors
        .iter()
        .map(|s| resolve(&listing, s).cloned())
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_clients(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::memory::InMemoryRecords;
    use crate::store::ClientStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn views_by_index_and_id() {
        let session =
            ClientSession::start(InMemoryRecords::with_demo_data(), Arc::new(ClientStore::new())).await;
        let maria_id = session.store().clients()[1].id.to_string();

        let result = run(
            &session,
            &[ClientSelector::Index(1), ClientSelector::Id(maria_id[..8].to_string())],
        )
        .unwrap();

        assert_eq!(result.listed_clients[0].client.name, "João Silva");
        assert_eq!(result.listed_clients[1].client.name, "Maria Santos");
    }

    #[tokio::test]
    async fn unknown_index_fails() {
        let session =
            ClientSession::start(InMemoryRecords::with_demo_data(), Arc::new(ClientStore::new())).await;
        assert!(run(&session, &[ClientSelector::Index(9)]).is_err());
    }
}
