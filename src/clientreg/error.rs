use crate::schema::ValidationErrors;
use thiserror::Error;
use uuid::Uuid;

/// Broad classification of a [`ClientRegError`], for callers that only need
/// to know which family a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Other,
}

#[derive(Error, Debug)]
pub enum ClientRegError {
    #[error("Dados inválidos: {0}")]
    Validation(ValidationErrors),

    #[error("CPF já cadastrado no sistema")]
    DuplicateNationalId(String),

    #[error("Cliente não encontrado")]
    ClientNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ClientRegError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientRegError::Validation(_) => ErrorKind::Validation,
            ClientRegError::DuplicateNationalId(_) => ErrorKind::Conflict,
            ClientRegError::ClientNotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Other,
        }
    }
}

impl From<ValidationErrors> for ClientRegError {
    fn from(errors: ValidationErrors) -> Self {
        ClientRegError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, ClientRegError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    #[test]
    fn conflict_and_not_found_messages() {
        let dup = ClientRegError::DuplicateNationalId("111.444.777-35".into());
        assert_eq!(dup.to_string(), "CPF já cadastrado no sistema");
        assert_eq!(dup.kind(), ErrorKind::Conflict);

        let missing = ClientRegError::ClientNotFound(Uuid::new_v4());
        assert_eq!(missing.to_string(), "Cliente não encontrado");
        assert_eq!(missing.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn validation_errors_convert() {
        let mut errors = ValidationErrors::default();
        errors.insert(Field::Plate, "Placa inválida. Use o formato XXX-XXXX");
        let err: ClientRegError = errors.into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("Placa inválida"));
    }

    #[test]
    fn io_and_serde_failures_convert() {
        let io: ClientRegError = std::io::Error::other("disk full").into();
        assert_eq!(io.to_string(), "IO error: disk full");
        assert_eq!(io.kind(), ErrorKind::Other);

        let serde: ClientRegError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(serde.to_string().starts_with("Serialization error"));
        assert_eq!(serde.kind(), ErrorKind::Other);
    }
}
