use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four user-editable fields of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Phone,
    NationalId,
    Plate,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::NationalId, Field::Plate];

    /// Label shown next to the field and in error listings.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Phone => "Telefone",
            Field::NationalId => "CPF",
            Field::Plate => "Placa",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Candidate values for a client, as submitted by a form.
///
/// Phone, national ID and plate are expected in their masked display form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInput {
    pub name: String,
    pub phone: String,
    pub national_id: String,
    pub plate: String,
}

impl ClientInput {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        national_id: impl Into<String>,
        plate: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            national_id: national_id.into(),
            plate: plate.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::NationalId => &self.national_id,
            Field::Plate => &self.plate,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::NationalId => self.national_id = value,
            Field::Plate => self.plate = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub national_id: String,
    pub plate: String,
    pub created_at: DateTime<Utc>,
}

impl ClientRecord {
    /// Builds a brand new record with a fresh id and creation time.
    pub fn new(input: ClientInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            phone: input.phone,
            national_id: input.national_id,
            plate: input.plate,
            created_at: Utc::now(),
        }
    }

    pub fn input(&self) -> ClientInput {
        ClientInput {
            name: self.name.clone(),
            phone: self.phone.clone(),
            national_id: self.national_id.clone(),
            plate: self.plate.clone(),
        }
    }

    /// Replaces every editable field. `id` and `created_at` are kept.
    pub fn replace(&mut self, input: ClientInput) {
        self.name = input.name;
        self.phone = input.phone;
        self.national_id = input.national_id;
        self.plate = input.plate;
    }

    pub fn apply(&mut self, patch: ClientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(national_id) = patch.national_id {
            self.national_id = national_id;
        }
        if let Some(plate) = patch.plate {
            self.plate = plate;
        }
    }
}

/// A partial change merged into a stored record. Identity and creation time
/// are not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub plate: Option<String>,
}

impl ClientPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl From<ClientInput> for ClientPatch {
    fn from(input: ClientInput) -> Self {
        Self {
            name: Some(input.name),
            phone: Some(input.phone),
            national_id: Some(input.national_id),
            plate: Some(input.plate),
        }
    }
}

impl From<&ClientRecord> for ClientPatch {
    fn from(record: &ClientRecord) -> Self {
        record.input().into()
    }
}
