//! Booking phase and draft state.

use reserva_core::{CalendarDate, RoomId, TimeSlot, ValidationError};

/// Where the booking workflow currently stands.
///
/// `Succeeded` and `Failed` are resting states: the next user action
/// re-enters the machine as from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPhase {
    /// Nothing in flight.
    Idle,
    /// Advisory availability check in flight.
    Checking,
    /// Mutation (booking or cancellation) in flight.
    Booking,
    /// Last mutation was confirmed by the remote.
    Succeeded,
    /// Last mutation was rejected or failed; draft kept for retry.
    Failed,
}

/// Parameters of an availability check, captured at dispatch time.
///
/// Completions carry these back so stale responses can be detected by
/// comparison against the current draft, not by arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckParams {
    /// Room the check was issued for.
    pub room_id: RoomId,
    /// Date the check was issued for.
    pub date: CalendarDate,
    /// Slot the check was issued for.
    pub slot: TimeSlot,
}

/// Parameters of a booking or cancellation, captured at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingParams {
    /// Room the mutation targets.
    pub room_id: RoomId,
    /// Date the mutation targets.
    pub date: CalendarDate,
    /// Slot the mutation targets.
    pub slot: TimeSlot,
    /// Holder named on the booking.
    pub holder: String,
}

/// The user's in-progress, not-yet-submitted selection.
///
/// Mutated field by field and consumed exactly once by a successful
/// submission. Slot validity is scoped to a (room, date) occupancy
/// snapshot, so changing either clears the slot selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    room_id: Option<RoomId>,
    date: Option<CalendarDate>,
    slot: Option<TimeSlot>,
    holder: Option<String>,
}

impl BookingDraft {
    /// Empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected room, if any.
    #[must_use]
    pub fn room_id(&self) -> Option<&RoomId> {
        self.room_id.as_ref()
    }

    /// Selected date, if any.
    #[must_use]
    pub fn date(&self) -> Option<&CalendarDate> {
        self.date.as_ref()
    }

    /// Selected slot, if any.
    #[must_use]
    pub fn slot(&self) -> Option<TimeSlot> {
        self.slot
    }

    /// Holder name, if set.
    #[must_use]
    pub fn holder(&self) -> Option<&str> {
        self.holder.as_deref()
    }

    /// Select a room. Switching rooms invalidates the slot selection.
    pub fn select_room(&mut self, room_id: RoomId) {
        if self.room_id.as_ref() != Some(&room_id) {
            self.slot = None;
        }
        self.room_id = Some(room_id);
    }

    /// Select a date. Switching dates invalidates the slot selection.
    pub fn select_date(&mut self, date: CalendarDate) {
        if self.date.as_ref() != Some(&date) {
            self.slot = None;
        }
        self.date = Some(date);
    }

    /// Select a slot.
    pub fn select_slot(&mut self, slot: TimeSlot) {
        self.slot = Some(slot);
    }

    /// Set the holder name.
    pub fn set_holder(&mut self, holder: String) {
        self.holder = Some(holder);
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parameters for an availability check, if the draft is complete
    /// enough (room, date, slot).
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingField`] naming the first unfilled field.
    pub fn check_params(&self) -> Result<CheckParams, ValidationError> {
        let room_id =
            self.room_id.clone().ok_or(ValidationError::MissingField { field: "room" })?;
        let date = self.date.clone().ok_or(ValidationError::MissingField { field: "date" })?;
        let slot = self.slot.ok_or(ValidationError::MissingField { field: "time slot" })?;
        Ok(CheckParams { room_id, date, slot })
    }

    /// Parameters for a booking or cancellation: a complete check draft
    /// plus a non-blank holder name.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingField`] naming the first unfilled field.
    pub fn booking_params(&self) -> Result<BookingParams, ValidationError> {
        let CheckParams { room_id, date, slot } = self.check_params()?;
        let holder = self
            .holder
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(ValidationError::MissingField { field: "holder name" })?
            .to_string();
        Ok(BookingParams { room_id, date, slot, holder })
    }

    /// True if the draft still describes exactly this mutation.
    #[must_use]
    pub fn matches(&self, params: &BookingParams) -> bool {
        self.booking_params().is_ok_and(|current| current == *params)
    }
}
