use thiserror::Error;

/// Errors raised by the subset store and the hierarchy engine.
///
/// Every variant is raised before any state is touched, so a failed call
/// leaves principal, history, and the store exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsetError {
    /// A subset with this name is already registered.
    ///
    /// Also returned, on purpose, for the reserved alias names `principal`
    /// and `ultimo`: they are never available as subset names, even before
    /// any subset exists.
    #[error("subset '{0}' already exists; choose another name")]
    DuplicateName(String),

    /// No subset or alias with this name.
    #[error("subset '{0}' not found")]
    NotFound(String),

    /// The column is not part of the table schema.
    #[error("column '{0}' not found")]
    ColumnNotFound(String),
}

pub type Result<T> = std::result::Result<T, SubsetError>;
