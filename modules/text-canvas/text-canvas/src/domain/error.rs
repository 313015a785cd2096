use uuid::Uuid;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("no settings are marked as default")]
    NoDefaultSettings,

    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("text does not fit on the canvas")]
    TextOverflow,

    #[error("image storage failed: {0}")]
    Storage(String),

    #[error("rendering failed: {0}")]
    Render(String),

    #[error("database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn settings_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity: "Settings",
            id,
        }
    }

    #[must_use]
    pub fn canvas_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity: "Canvas",
            id,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldViolation::new(field, message)])
    }
}
