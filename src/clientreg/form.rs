//! Live form state for creating and editing clients.
//!
//! Every [`ClientForm::set`] masks the incoming value for its field and then
//! re-validates the whole record, so the submit gate ([`ClientForm::is_valid`])
//! and the per-field messages are current after each keystroke.

use crate::masks::mask_field;
use crate::model::{ClientInput, ClientRecord, Field};
use crate::schema::{self, ValidationErrors};

#[derive(Debug, Clone)]
pub struct ClientForm {
    values: ClientInput,
    errors: ValidationErrors,
}

impl Default for ClientForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientForm {
    pub fn new() -> Self {
        Self::with_values(ClientInput::default())
    }

    /// Pre-fills the form with a stored record, for editing.
    pub fn from_record(record: &ClientRecord) -> Self {
        Self::with_values(record.input())
    }

    fn with_values(values: ClientInput) -> Self {
        let mut form = Self {
            values,
            errors: ValidationErrors::default(),
        };
        form.revalidate();
        form
    }

    /// Feeds a raw value into `field`, returning the masked value now held.
    pub fn set(&mut self, field: Field, raw: &str) -> &str {
        self.values.set(field, mask_field(field, raw));
        self.revalidate();
        self.values.get(field)
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &ClientInput {
        &self.values
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The submit gate: hands out the values only when every field passes.
    pub fn submit(&self) -> Result<ClientInput, ValidationErrors> {
        if self.is_valid() {
            Ok(self.values.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn revalidate(&mut self) {
        self.errors = match schema::validate(&self.values) {
            Ok(()) => ValidationErrors::default(),
            Err(errors) => errors,
        };
    }
}
