use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub const PLACEMENT_REJECTED: &str = "This dinosaur is not allowed to be put in this cage";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid entry for {}: {}", self.field, self.reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Placement,
    NotFound,
    Persistence,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Placement => "placement",
            Self::NotFound => "not_found",
            Self::Persistence => "persistence",
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),
    #[error("placement rejected: {0}")]
    Placement(String),
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    pub fn placement_rejected() -> Self {
        Self::Placement(PLACEMENT_REJECTED.to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Placement(_) => ErrorKind::Placement,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Persistence(_) => ErrorKind::Persistence,
        }
    }

    /// Text meant for the caller. Persistence details are included here and
    /// must be filtered by the transport.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(errors) => join_fields(errors),
            Self::Placement(message) | Self::NotFound(message) | Self::Persistence(message) => {
                message.clone()
            }
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_field() {
        let error = DomainError::validation(vec![
            FieldError::new("dino_name", "is required"),
            FieldError::new("cage_id", "is required"),
        ]);

        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(
            error.message(),
            "invalid entry for dino_name: is required; invalid entry for cage_id: is required"
        );
        assert_eq!(error.field_errors().len(), 2);
    }

    #[test]
    fn placement_carries_fixed_reason() {
        let error = DomainError::placement_rejected();
        assert_eq!(error.kind().as_str(), "placement");
        assert_eq!(error.message(), PLACEMENT_REJECTED);
        assert!(error.field_errors().is_empty());
    }
}
