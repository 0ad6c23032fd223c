//! Local validation errors.
//!
//! Everything here is caught before a remote call is issued; transport and
//! decoding failures live in `reserva-client`/`reserva-proto`.

use thiserror::Error;

/// Invalid or incomplete local input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date string does not match the strict `YYYY-MM-DD` form.
    #[error("invalid calendar date {input:?}: expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// Slot key is not one of the eight canonical entries.
    #[error("unknown time slot {key:?}")]
    UnknownSlot {
        /// The rejected key.
        key: String,
    },

    /// A required draft field has not been filled in yet.
    #[error("missing {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}
