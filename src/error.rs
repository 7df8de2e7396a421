//! Error taxonomy for registry calls and request execution

use thiserror::Error;

/// Everything that can go wrong between the editor and the wire.
///
/// Precondition variants are raised before any network I/O happens;
/// `Rejected` means the registry answered with a non-2xx status and
/// `Transport` means no response was obtained at all.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no credential present, please login first")]
    MissingCredential,

    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("an API needs at least one endpoint")]
    NoEndpoints,

    #[error("registry rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode registry response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
