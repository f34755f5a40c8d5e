use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("item key must not be empty")]
    EmptyItemKey,
    #[error("item key {0:?} contains the reserved '#' separator")]
    ReservedKeySeparator(String),
    #[error("invalid entity reference: {0} (expected kind:id)")]
    InvalidEntityRef(String),
    #[error("unknown entity kind: {0}")]
    UnknownEntityKind(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
