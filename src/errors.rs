use std::fmt;

use thiserror::Error;

/// Which field of a contact collided with an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Name,
    Phone,
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateField::Name => write!(f, "name"),
            DuplicateField::Phone => write!(f, "phone number"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Contact with this {field} already exists: {value}")]
    Duplicate { field: DuplicateField, value: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, AppError::Duplicate { .. })
    }
}
