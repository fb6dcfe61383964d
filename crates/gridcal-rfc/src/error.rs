use thiserror::Error;

/// Calendar generation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Only one of DTEND and DURATION may be specified")]
    DtendDurationConflict,

    #[error(transparent)]
    CoreError(#[from] gridcal_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
