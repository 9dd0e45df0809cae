use crate::validate::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
