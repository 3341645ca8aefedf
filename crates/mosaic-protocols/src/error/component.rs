//! Component registry errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("Component has no display name")]
    MissingDisplayName,

    #[error("Display name already registered by another component: {0}")]
    AlreadyRegistered(String),

    #[error("Query descriptor names neither a role nor a location")]
    EmptyQuery,
}
