use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformErrorKind {
    InvalidResource,
    InvalidVersion,
    DuplicateRule,
    InvalidConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransformError {
    pub kind: TransformErrorKind,
    pub message: String,
}

impl TransformError {
    pub fn new(kind: TransformErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn invalid_resource(message: impl Into<String>) -> TransformError {
    TransformError::new(TransformErrorKind::InvalidResource, message)
}

pub fn invalid_version(message: impl Into<String>) -> TransformError {
    TransformError::new(TransformErrorKind::InvalidVersion, message)
}

pub fn duplicate_rule(message: impl Into<String>) -> TransformError {
    TransformError::new(TransformErrorKind::DuplicateRule, message)
}

pub fn invalid_config(message: impl Into<String>) -> TransformError {
    TransformError::new(TransformErrorKind::InvalidConfig, message)
}
