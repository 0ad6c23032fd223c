//! Events fed into the coordinator.

use reserva_core::{CalendarDate, RoomId, TimeSlot};
use reserva_proto::{Availability, BookOutcome, CancelOutcome};

use crate::state::{BookingParams, CheckParams};

/// Inputs to the [`Coordinator`](crate::Coordinator) state machine.
///
/// Selection events come from the user; completion events come from the
/// driver after it executed the matching
/// [`CoordinatorAction`](crate::CoordinatorAction). Completions carry the
/// parameters the request was issued for, so the machine can detect and
/// drop responses that no longer match the current selection. Failures
/// arrive pre-rendered as strings - the coordinator surfaces them, it does
/// not retry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorEvent {
    /// User selected a room.
    SelectRoom {
        /// The selected room.
        room_id: RoomId,
    },

    /// User selected a date.
    SelectDate {
        /// The selected date.
        date: CalendarDate,
    },

    /// User selected a slot.
    SelectSlot {
        /// The selected slot.
        slot: TimeSlot,
    },

    /// User entered a holder name.
    SetHolder {
        /// The entered name.
        holder: String,
    },

    /// User asked for an advisory availability check.
    CheckRequested,

    /// The driver finished an availability check.
    CheckCompleted {
        /// Parameters the check was issued for.
        params: CheckParams,
        /// Remote answer, or a rendered transport/decoding failure.
        result: Result<Availability, String>,
    },

    /// User asked to submit the booking.
    BookRequested,

    /// The driver finished a booking submission.
    BookCompleted {
        /// Parameters the booking was issued for.
        params: BookingParams,
        /// Remote outcome, or a rendered transport/decoding failure.
        result: Result<BookOutcome, String>,
    },

    /// User asked to cancel the reservation described by the draft.
    CancelRequested,

    /// The driver finished a cancellation.
    CancelCompleted {
        /// Parameters the cancellation was issued for.
        params: BookingParams,
        /// Remote outcome, or a rendered transport/decoding failure.
        result: Result<CancelOutcome, String>,
    },
}
