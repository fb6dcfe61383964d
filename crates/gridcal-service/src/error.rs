use thiserror::Error;

/// Feed registration and resolution errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Malformed feed identifier: {0}")]
    MalformedFeedId(String),

    #[error("Unknown feed: {0}")]
    UnknownFeed(String),

    #[error("Range unavailable: {0}")]
    RangeUnavailable(String),

    #[error(transparent)]
    RfcError(#[from] gridcal_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] gridcal_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
