//! Rooms, reservations, and the per-date occupancy snapshot.

use std::collections::BTreeMap;

use crate::{CalendarDate, TimeSlot};

/// Opaque room identifier assigned by the remote authority.
pub type RoomId = String;

/// A bookable room.
///
/// Attribute-free beyond its id; capacity and features are not modeled.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Room {
    /// Remote-assigned identifier.
    pub id: RoomId,
}

impl Room {
    /// Wrap a remote-assigned room id.
    pub fn new(id: impl Into<RoomId>) -> Self {
        Self { id: id.into() }
    }
}

/// One confirmed booking: a holder occupying a slot in a room on a date.
///
/// At most one reservation exists per (room, date, slot). The remote
/// authority enforces this at write time; locally it is advisory and
/// re-checked, never assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Room the slot belongs to.
    pub room_id: RoomId,
    /// Date of the booking.
    pub date: CalendarDate,
    /// The occupied slot.
    pub slot: TimeSlot,
    /// Name of the person holding the booking.
    pub holder: String,
}

/// Per-room reservations for the date currently in view.
///
/// Rebuilt wholesale on every fetch and replaced, never merged: the remote
/// authority is the sole writer, so an incremental patch has nothing
/// trustworthy to patch against. Rooms iterate in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomOccupancy {
    rooms: BTreeMap<RoomId, Vec<Reservation>>,
}

impl RoomOccupancy {
    /// Empty snapshot (no rooms, no reservations).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reservation list for a room.
    pub fn insert(&mut self, room_id: impl Into<RoomId>, reservations: Vec<Reservation>) {
        self.rooms.insert(room_id.into(), reservations);
    }

    /// Reservations for a room, in remote order.
    ///
    /// An unknown room yields an empty slice: absence of data is absence
    /// of reservations, never an error.
    #[must_use]
    pub fn for_room(&self, room_id: &str) -> &[Reservation] {
        self.rooms.get(room_id).map_or(&[], Vec::as_slice)
    }

    /// Iterate (room id, reservations) pairs in room-id order.
    pub fn rooms(&self) -> impl Iterator<Item = (&RoomId, &[Reservation])> {
        self.rooms.iter().map(|(id, rs)| (id, rs.as_slice()))
    }

    /// Room ids present in the snapshot, in order.
    pub fn room_ids(&self) -> impl Iterator<Item = &RoomId> {
        self.rooms.keys()
    }

    /// Number of rooms in the snapshot.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// True if the snapshot holds no rooms at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
