use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentHubError {
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Lease not found: {0}")]
    LeaseNotFound(String),

    #[error("Cannot {action} a lease in '{status}' status")]
    InvalidTransition { action: String, status: String },

    #[error("Invalid filter: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RentHubError>;
