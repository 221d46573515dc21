use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::ClientForm;
use crate::records::RecordsApi;
use crate::session::ClientSession;

/// Submits a filled-in form. Validation failures stop here and never reach
/// the records backend.
pub async fn run<R: RecordsApi>(session: &ClientSession<R>, form: &ClientForm) -> Result<CmdResult> {
    let input = form.submit()?;
    let client = session.create_client(input).await?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cliente criado: {}",
        client.name
    )));
    Ok(result.with_affected_clients(vec![client]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::Field;
    use crate::records::memory::InMemoryRecords;
    use crate::store::ClientStore;
    use std::sync::Arc;

    fn filled_form(cpf: &str) -> ClientForm {
        let mut form = ClientForm::new();
        form.set(Field::Name, "Ana Souza");
        form.set(Field::Phone, "31988887777");
        form.set(Field::NationalId, cpf);
        form.set(Field::Plate, "hgf4321");
        form
    }

    #[tokio::test]
    async fn creates_a_client() {
        let store = Arc::new(ClientStore::new());
        let session = ClientSession::start(InMemoryRecords::with_demo_data(), Arc::clone(&store)).await;

        let result = run(&session, &filled_form("35413515006")).await.unwrap();

        let created = &result.affected_clients[0];
        assert_eq!(created.phone, "(31) 98888-7777");
        assert_eq!(created.national_id, "354.135.150-06");
        assert_eq!(created.plate, "HGF-4321");
        assert_eq!(store.clients()[0].name, "Ana Souza");
        assert_eq!(result.messages[0].content, "Cliente criado: Ana Souza");
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_backend() {
        let store = Arc::new(ClientStore::new());
        let session = ClientSession::start(InMemoryRecords::with_demo_data(), Arc::clone(&store)).await;

        let err = run(&session, &filled_form("35413515007")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(session.records().len(), 2);
        // validation errors stay local to the form
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn duplicate_cpf_is_a_conflict() {
        let store = Arc::new(ClientStore::new());
        let session = ClientSession::start(InMemoryRecords::with_demo_data(), Arc::clone(&store)).await;
        let before = store.clients();

        let err = run(&session, &filled_form("11144477735")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(store.clients(), before);
    }
}
