//! Strict decoding of remote responses.
//!
//! Each decoder takes the raw body text and produces either a typed value
//! or a [`ProtocolError`]. The extra `"type"` discriminator the remote
//! includes (`RES_LIST`, `RES_STATUS`, ...) is ignored; unknown status
//! vocabulary is not.

use std::collections::BTreeMap;

use reserva_core::{CalendarDate, Reservation, Room, RoomId, RoomOccupancy, TimeSlot};
use serde::Deserialize;

use crate::error::ProtocolError;

/// Status the remote uses for a free slot.
const STATUS_AVAILABLE: &str = "disponível";

/// Statuses the remote uses for an occupied slot.
///
/// The deployed server answers `"indisponível"`; older clients were
/// written against `"reservado"`. Both decode to [`Availability::Taken`].
const STATUS_TAKEN: [&str; 2] = ["reservado", "indisponível"];

/// Status confirming a booking.
const STATUS_CONFIRMED: &str = "confirmed";

/// Status confirming a cancellation.
const STATUS_CANCELLED: &str = "cancelled";

/// Advisory answer to an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Slot is free (as of the check).
    Available,
    /// Slot already holds a reservation.
    Taken,
}

/// Outcome of a booking submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOutcome {
    /// Remote accepted and recorded the booking.
    Confirmed,
    /// Remote explicitly refused.
    Rejected {
        /// Remote-supplied reason (e.g. the slot was taken in between).
        reason: String,
    },
}

/// Outcome of a cancellation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Remote removed the reservation.
    Cancelled,
    /// Remote explicitly refused (e.g. no such reservation).
    Rejected {
        /// Remote-supplied reason.
        reason: String,
    },
}

#[derive(Deserialize)]
struct RoomListBody {
    rooms: Vec<RoomId>,
}

#[derive(Deserialize)]
struct StatusBody {
    status: String,
}

#[derive(Deserialize)]
struct OutcomeBody {
    status: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct ReservationRow {
    user: String,
    date: CalendarDate,
    time_slot: TimeSlot,
}

#[derive(Deserialize)]
struct OccupancyBody {
    rooms: BTreeMap<RoomId, Vec<ReservationRow>>,
}

/// Decode the `REQ_LIST` response into rooms.
pub fn decode_rooms(body: &str) -> Result<Vec<Room>, ProtocolError> {
    let parsed: RoomListBody = serde_json::from_str(body)?;
    Ok(parsed.rooms.into_iter().map(Room::new).collect())
}

/// Decode the `REQ_CHECK` response.
pub fn decode_availability(body: &str) -> Result<Availability, ProtocolError> {
    let parsed: StatusBody = serde_json::from_str(body)?;

    if parsed.status == STATUS_AVAILABLE {
        Ok(Availability::Available)
    } else if STATUS_TAKEN.contains(&parsed.status.as_str()) {
        Ok(Availability::Taken)
    } else {
        Err(ProtocolError::UnknownStatus { status: parsed.status })
    }
}

/// Decode the `REQ_BOOK` response.
///
/// An explicit `{"error": ...}` body is a business rejection, not a
/// decoding failure; only a body carrying neither a known status nor an
/// error is malformed.
pub fn decode_book_outcome(body: &str) -> Result<BookOutcome, ProtocolError> {
    let parsed: OutcomeBody = serde_json::from_str(body)?;

    match (parsed.status, parsed.error) {
        (Some(status), _) if status == STATUS_CONFIRMED => Ok(BookOutcome::Confirmed),
        (_, Some(reason)) => Ok(BookOutcome::Rejected { reason }),
        (Some(status), None) => Err(ProtocolError::UnknownStatus { status }),
        (None, None) => Err(ProtocolError::MissingField { field: "status" }),
    }
}

/// Decode the `REQ_CANCEL` response.
pub fn decode_cancel_outcome(body: &str) -> Result<CancelOutcome, ProtocolError> {
    let parsed: OutcomeBody = serde_json::from_str(body)?;

    match (parsed.status, parsed.error) {
        (Some(status), _) if status == STATUS_CANCELLED => Ok(CancelOutcome::Cancelled),
        (_, Some(reason)) => Ok(CancelOutcome::Rejected { reason }),
        (Some(status), None) => Err(ProtocolError::UnknownStatus { status }),
        (None, None) => Err(ProtocolError::MissingField { field: "status" }),
    }
}

/// Decode the `GET /salas?date=...` snapshot into a [`RoomOccupancy`].
///
/// Every row is bound to the room id it was keyed under; a row whose
/// `time_slot` falls outside the closed calendar domain fails the whole
/// decode rather than being dropped.
pub fn decode_occupancy(body: &str) -> Result<RoomOccupancy, ProtocolError> {
    let parsed: OccupancyBody = serde_json::from_str(body)?;

    let mut occupancy = RoomOccupancy::new();
    for (room_id, rows) in parsed.rooms {
        let reservations = rows
            .into_iter()
            .map(|row| Reservation {
                room_id: room_id.clone(),
                date: row.date,
                slot: row.time_slot,
                holder: row.user,
            })
            .collect();
        occupancy.insert(room_id, reservations);
    }

    Ok(occupancy)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_room_list_and_ignores_the_type_field() {
        let rooms =
            decode_rooms(r#"{"type": "RES_LIST", "rooms": ["101", "102", "Auditório"]}"#).unwrap();
        assert_eq!(rooms.len(), 3);
        assert_eq!(rooms[2].id, "Auditório");
    }

    #[test]
    fn empty_room_list_is_valid() {
        assert!(decode_rooms(r#"{"rooms": []}"#).unwrap().is_empty());
    }

    #[test]
    fn availability_accepts_both_taken_spellings() {
        let free = decode_availability(r#"{"type": "RES_STATUS", "status": "disponível"}"#);
        assert_eq!(free.unwrap(), Availability::Available);

        assert_eq!(
            decode_availability(r#"{"status": "reservado"}"#).unwrap(),
            Availability::Taken
        );
        assert_eq!(
            decode_availability(r#"{"status": "indisponível"}"#).unwrap(),
            Availability::Taken
        );
    }

    #[test]
    fn availability_rejects_unknown_vocabulary() {
        assert!(matches!(
            decode_availability(r#"{"status": "maybe"}"#),
            Err(ProtocolError::UnknownStatus { .. })
        ));
        assert!(matches!(
            decode_availability(r#"{"ok": true}"#),
            Err(ProtocolError::Decode { .. })
        ));
    }

    #[test]
    fn book_outcome_distinguishes_confirmation_from_rejection() {
        assert_eq!(
            decode_book_outcome(r#"{"type": "RES_CONFIRM", "room_id": "101", "status": "confirmed"}"#)
                .unwrap(),
            BookOutcome::Confirmed
        );
        assert_eq!(
            decode_book_outcome(r#"{"type": "RES_ERROR", "error": "Conflito de horário"}"#)
                .unwrap(),
            BookOutcome::Rejected { reason: "Conflito de horário".to_string() }
        );
    }

    #[test]
    fn book_outcome_without_status_or_error_is_malformed() {
        assert!(matches!(
            decode_book_outcome(r#"{"type": "RES_CONFIRM"}"#),
            Err(ProtocolError::MissingField { field: "status" })
        ));
        assert!(matches!(
            decode_book_outcome(r#"{"status": "pending"}"#),
            Err(ProtocolError::UnknownStatus { .. })
        ));
    }

    #[test]
    fn cancel_outcome_decodes() {
        assert_eq!(
            decode_cancel_outcome(r#"{"type": "RES_CANCEL", "status": "cancelled"}"#).unwrap(),
            CancelOutcome::Cancelled
        );
        assert_eq!(
            decode_cancel_outcome(r#"{"error": "Reserva não encontrada"}"#).unwrap(),
            CancelOutcome::Rejected { reason: "Reserva não encontrada".to_string() }
        );
    }

    #[test]
    fn occupancy_binds_rows_to_their_room() {
        let body = r#"{
            "rooms": {
                "101": [{"user": "Ana", "date": "2024-06-01", "time_slot": "08:00-09:30"}],
                "102": []
            }
        }"#;

        let occupancy = decode_occupancy(body).unwrap();
        assert_eq!(occupancy.room_count(), 2);

        let rows = occupancy.for_room("101");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].room_id, "101");
        assert_eq!(rows[0].holder, "Ana");
        assert_eq!(rows[0].slot.as_str(), "08:00-09:30");
        assert!(occupancy.for_room("102").is_empty());
    }

    #[test]
    fn occupancy_with_an_unknown_slot_fails_wholesale() {
        let body = r#"{
            "rooms": {
                "101": [{"user": "Ana", "date": "2024-06-01", "time_slot": "23:00-23:45"}]
            }
        }"#;
        assert!(matches!(decode_occupancy(body), Err(ProtocolError::Decode { .. })));
    }

    #[test]
    fn occupancy_with_a_sloppy_date_fails_wholesale() {
        let body = r#"{
            "rooms": {
                "101": [{"user": "Ana", "date": "2024-6-1", "time_slot": "08:00-09:30"}]
            }
        }"#;
        assert!(matches!(decode_occupancy(body), Err(ProtocolError::Decode { .. })));
    }
}
