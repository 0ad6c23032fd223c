//! Actions produced by the coordinator.

use crate::state::{BookingParams, CheckParams};

/// A user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text.
    pub text: String,
    /// True for confirmations and positive answers.
    pub success: bool,
}

impl Notice {
    /// A positive notice.
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), success: true }
    }

    /// A failure or negative-answer notice.
    pub fn failure(text: impl Into<String>) -> Self {
        Self { text: text.into(), success: false }
    }
}

/// Instructions for the driver to execute.
///
/// The coordinator performs no I/O: `Perform*` actions name the remote
/// call to make, and the driver feeds the result back as the matching
/// completion event with the same parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorAction {
    /// Run an advisory availability check.
    PerformCheck {
        /// Parameters to check.
        params: CheckParams,
    },

    /// Submit a booking to the remote.
    PerformBooking {
        /// Parameters to book.
        params: BookingParams,
    },

    /// Cancel an existing booking on the remote.
    PerformCancel {
        /// Parameters identifying the booking.
        params: BookingParams,
    },

    /// Surface a status message to the user.
    Notify {
        /// The message.
        notice: Notice,
    },
}
