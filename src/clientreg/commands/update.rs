use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::ClientForm;
use crate::index::{ClientSelector, index_clients, resolve};
use crate::model::Field;
use crate::records::RecordsApi;
use crate::session::ClientSession;

/// Edits one client. The form starts from the stored record, `changes` are
/// typed into it (and masked), and the complete result replaces the record.
pub async fn run<R: RecordsApi>(
    session: &ClientSession<R>,
    selector: &ClientSelector,
    changes: &[(Field, String)],
) -> Result<CmdResult> {
    let listing = index_clients(session.store().clients());
    let target = resolve(&listing, selector)?;

    let mut form = ClientForm::from_record(&target.client);
    for (field, value) in changes {
        form.set(*field, value);
    }
    let input = form.submit()?;

    let mut result = CmdResult::default();
    if input == target.client.input() {
        result.add_message(CmdMessage::info(format!(
            "Nada a alterar em {}",
            target.client.name
        )));
        return Ok(result);
    }

    let client = session.update_client(target.client.id, input).await?;
    result.add_message(CmdMessage::success(format!(
        "Cliente atualizado: {}",
        client.name
    )));
    Ok(result.with_affected_clients(vec![client]))
}
