//! Occupancy view with stale-response suppression.

use reserva_core::{CalendarDate, RoomOccupancy, SlotStatus, TimeSlot};

/// The occupancy snapshot for the date currently in view.
///
/// Snapshots are replaced wholesale, never merged. Responses are applied
/// only if the date they were requested for still matches the current
/// selection - a fetch superseded by a date change is dropped on arrival,
/// regardless of arrival order. A failed read degrades to an empty
/// snapshot plus an error, never to silently-stale data presented as
/// current.
#[derive(Debug, Clone, Default)]
pub struct ScheduleView {
    date: Option<CalendarDate>,
    occupancy: RoomOccupancy,
    error: Option<String>,
}

impl ScheduleView {
    /// Empty view with no date selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Date currently in view, if any.
    #[must_use]
    pub fn date(&self) -> Option<&CalendarDate> {
        self.date.as_ref()
    }

    /// Last applied snapshot.
    #[must_use]
    pub fn occupancy(&self) -> &RoomOccupancy {
        &self.occupancy
    }

    /// Error from the last failed read, if the view is degraded.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch the view to a date. Changing dates discards the snapshot:
    /// the old data describes a day no longer in view.
    pub fn select_date(&mut self, date: CalendarDate) {
        if self.date.as_ref() != Some(&date) {
            self.occupancy = RoomOccupancy::new();
            self.error = None;
        }
        self.date = Some(date);
    }

    /// Apply a fetch result tagged with the date it was requested for.
    ///
    /// Returns `false` if the response was stale (tag no longer matches
    /// the current selection) and was dropped untouched.
    pub fn apply(
        &mut self,
        requested: &CalendarDate,
        result: Result<RoomOccupancy, String>,
    ) -> bool {
        if self.date.as_ref() != Some(requested) {
            tracing::warn!(%requested, "dropping occupancy response for a superseded date");
            return false;
        }

        match result {
            Ok(occupancy) => {
                self.occupancy = occupancy;
                self.error = None;
            },
            Err(reason) => {
                tracing::warn!(%requested, %reason, "occupancy fetch failed, degrading to empty");
                self.occupancy = RoomOccupancy::new();
                self.error = Some(reason);
            },
        }
        true
    }

    /// Free slots for a room against the standard calendar.
    #[must_use]
    pub fn free_slots(&self, room_id: &str) -> Vec<TimeSlot> {
        self.occupancy.free_slots(room_id)
    }

    /// Status of one slot for a room.
    #[must_use]
    pub fn slot_status(&self, room_id: &str, slot: TimeSlot) -> SlotStatus {
        self.occupancy.slot_status(room_id, slot)
    }
}
