//! Free/taken resolution over an occupancy snapshot.
//!
//! Pure set logic with no failure mode: the calendar domain minus the slot
//! keys occupied by reservations, preserving calendar order. An empty or
//! missing occupancy yields the full calendar.

use crate::{Reservation, RoomOccupancy, SlotCalendar, TimeSlot};

/// Display status of a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStatus {
    /// Slot has no reservation.
    Free,
    /// Slot is reserved.
    Taken {
        /// Name of the reservation holder.
        holder: String,
    },
}

impl SlotStatus {
    /// True for [`SlotStatus::Free`].
    #[must_use]
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }
}

/// Slots of `calendar` not occupied by any of `reservations`, in calendar
/// order.
#[must_use]
pub fn free_slots(reservations: &[Reservation], calendar: &[TimeSlot]) -> Vec<TimeSlot> {
    calendar
        .iter()
        .copied()
        .filter(|slot| !reservations.iter().any(|r| r.slot == *slot))
        .collect()
}

/// Status of one slot within a room's reservation list.
///
/// Linear in the number of reservations for the room (at most one per
/// slot, so effectively bounded by the calendar size).
#[must_use]
pub fn status_of(reservations: &[Reservation], slot: TimeSlot) -> SlotStatus {
    reservations
        .iter()
        .find(|r| r.slot == slot)
        .map_or(SlotStatus::Free, |r| SlotStatus::Taken { holder: r.holder.clone() })
}

impl RoomOccupancy {
    /// Free slots for a room against the standard calendar.
    #[must_use]
    pub fn free_slots(&self, room_id: &str) -> Vec<TimeSlot> {
        free_slots(self.for_room(room_id), &SlotCalendar::slots())
    }

    /// Status of one slot for a room.
    #[must_use]
    pub fn slot_status(&self, room_id: &str, slot: TimeSlot) -> SlotStatus {
        status_of(self.for_room(room_id), slot)
    }
}
