//! Wire-level decoding errors.

use thiserror::Error;

/// A response was received but could not be decoded.
///
/// Distinct from transport failure (the client's `Unreachable`) and from
/// an explicit business rejection (a decoded `{"error": ...}` body): this
/// is the remote speaking a shape we do not understand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Body is not valid JSON or does not match the expected shape.
    #[error("undecodable response body: {reason}")]
    Decode {
        /// Deserializer failure, stringified.
        reason: String,
    },

    /// Availability status string outside the known vocabulary.
    #[error("unknown availability status {status:?}")]
    UnknownStatus {
        /// The unrecognized status value.
        status: String,
    },

    /// Body decoded but carries neither the expected status nor an error.
    #[error("response missing expected field {field:?}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode { reason: err.to_string() }
    }
}
