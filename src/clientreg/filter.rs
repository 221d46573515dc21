use crate::masks::{unmask_national_id, unmask_phone, unmask_plate};
use crate::model::ClientRecord;

/// Returns whether `query` appears, case-insensitively, in any searchable
/// representation of `client`: its name, and its phone, CPF and plate in
/// both masked and bare form. An empty query matches everything.
pub fn matches(client: &ClientRecord, query: &str) -> bool {
    let query = query.to_lowercase();
    let bare = [
        unmask_phone(&client.phone),
        unmask_national_id(&client.national_id),
        unmask_plate(&client.plate),
    ];
    [&client.name, &client.phone, &client.national_id, &client.plate]
        .into_iter()
        .chain(bare.iter())
        .any(|value| value.to_lowercase().contains(&query))
}

/// Keeps the clients that match `query`, in the order given.
pub fn filter_clients<'a>(clients: &'a [ClientRecord], query: &str) -> Vec<&'a ClientRecord> {
    clients.iter().filter(|c| matches(c, query)).collect()
}
