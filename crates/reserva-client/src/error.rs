//! Client error taxonomy.

use reserva_proto::ProtocolError;
use thiserror::Error;

/// A remote operation failed.
///
/// `Unreachable` and `Malformed` are deliberately distinct: the first is a
/// connectivity defect (and drives the connection monitor to `Error`), the
/// second means a response arrived but could not be decoded (connectivity
/// is fine). An explicit business rejection is not an error at this layer:
/// it decodes into `BookOutcome::Rejected`/`CancelOutcome::Rejected`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: the remote could not be reached or the
    /// connection died before a response was fully received.
    #[error("remote unreachable: {source}")]
    Unreachable {
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but could not be decoded.
    #[error("malformed response: {source}")]
    Malformed {
        /// Wire-level decoding failure.
        #[from]
        source: ProtocolError,
    },

    /// The configured base address is not a valid URL.
    #[error("invalid base address: {source}")]
    BaseUrl {
        /// URL parse failure.
        #[from]
        source: url::ParseError,
    },
}

impl ClientError {
    /// True if this is a connectivity (not decoding/configuration) defect.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}
