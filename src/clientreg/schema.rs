//! # Record Schema
//!
//! Submit-time validation of a complete [`ClientInput`]. Each field is checked
//! independently and carries at most one message: the first rule it breaks,
//! in the order *required → shape → checksum*. A record is acceptable only
//! when no field has a message.
//!
//! Shape rules expect the masked display form produced by [`crate::masks`]:
//!
//! | Field | Shape |
//! |-------|-------|
//! | name | 3 to 100 characters |
//! | phone | `^(\(\d{2}\)\s?)?\d{4,5}-\d{4}$` |
//! | CPF | `^\d{3}\.\d{3}\.\d{3}-\d{2}$`, plus [`national_id::is_valid`] |
//! | plate | `^[A-Z]{3}-\d{4}$` |

use crate::model::{ClientInput, Field};
use crate::national_id;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 100;

static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\([0-9]{2}\)\s?)?[0-9]{4,5}-[0-9]{4}$").expect("phone regex"));
static NATIONAL_ID_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").expect("cpf regex"));
static PLATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}-[0-9]{4}$").expect("plate regex"));

/// Field-level messages for a rejected record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Fields with errors, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a whole record.
pub fn validate(input: &ClientInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        if let Some(message) = validate_field(field, input.get(field)) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Returns the message for the first rule `value` breaks, if any.
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    match field {
        Field::Name => validate_name(value),
        Field::Phone => {
            if value.is_empty() {
                Some("Telefone é obrigatório".into())
            } else if !PHONE_SHAPE.is_match(value) {
                Some("Telefone inválido. Use o formato (XX) XXXXX-XXXX".into())
            } else {
                None
            }
        }
        Field::NationalId => {
            if value.is_empty() {
                Some("CPF é obrigatório".into())
            } else if !NATIONAL_ID_SHAPE.is_match(value) {
                Some("CPF inválido. Use o formato XXX.XXX.XXX-XX".into())
            } else if !national_id::is_valid(value) {
                Some("CPF inválido".into())
            } else {
                None
            }
        }
        Field::Plate => {
            if value.is_empty() {
                Some("Placa do carro é obrigatória".into())
            } else if !PLATE_SHAPE.is_match(value) {
                Some("Placa inválida. Use o formato XXX-XXXX".into())
            } else {
                None
            }
        }
    }
}

fn validate_name(value: &str) -> Option<String> {
    let len = value.chars().count();
    if len < NAME_MIN_CHARS {
        Some(format!(
            "Nome deve ter no mínimo {} caracteres",
            NAME_MIN_CHARS
        ))
    } else if len > NAME_MAX_CHARS {
        Some(format!(
            "Nome não pode ter mais de {} caracteres",
            NAME_MAX_CHARS
        ))
    } else {
        None
    }
}
