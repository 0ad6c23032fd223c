//! Typed request bodies POSTed to the remote base address.

use reserva_core::{CalendarDate, RoomId, TimeSlot};
use serde::{Deserialize, Serialize};

/// A command body, tagged by its `"type"` field on the wire.
///
/// Every variant serializes to exactly the JSON the remote expects, with
/// dates and slots already validated by construction - a [`Request`] can
/// only be built from the strict core types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// List the room ids known to the remote.
    #[serde(rename = "REQ_LIST")]
    List,

    /// Advisory availability check for one (room, date, slot).
    #[serde(rename = "REQ_CHECK")]
    Check {
        /// Room to check.
        room_id: RoomId,
        /// Date to check.
        date: CalendarDate,
        /// Slot to check.
        time_slot: TimeSlot,
    },

    /// Book a slot. The remote is the sole arbiter of conflicts.
    #[serde(rename = "REQ_BOOK")]
    Book {
        /// Room to book.
        room_id: RoomId,
        /// Name of the booking holder.
        user: String,
        /// Date to book.
        date: CalendarDate,
        /// Slot to book.
        time_slot: TimeSlot,
    },

    /// Cancel an existing booking identified by all four fields.
    #[serde(rename = "REQ_CANCEL")]
    Cancel {
        /// Room of the booking.
        room_id: RoomId,
        /// Holder named on the booking.
        user: String,
        /// Date of the booking.
        date: CalendarDate,
        /// Slot of the booking.
        time_slot: TimeSlot,
    },
}
