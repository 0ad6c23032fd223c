//! I/O abstraction between the coordinator runtime and the remote.

use std::future::Future;

use reserva_client::{ConnectionMonitor, ReservationClient};
use reserva_core::{CalendarDate, Room, RoomOccupancy};
use reserva_proto::{Availability, BookOutcome, CancelOutcome};

use crate::state::{BookingParams, CheckParams};

/// Abstracts the remote operations the [`Runtime`](crate::Runtime)
/// executes.
///
/// The production implementation is [`ReservationClient`]; tests provide a
/// scripted mock, so the same orchestration logic runs in both. All calls
/// are non-blocking; the runtime awaits them one at a time, which keeps
/// shared state single-writer without locks.
pub trait ReservationBackend: Send {
    /// Backend-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Room ids known to the remote.
    fn rooms(&self) -> impl Future<Output = Result<Vec<Room>, Self::Error>> + Send;

    /// Occupancy snapshot for all rooms on a date.
    fn occupancy(
        &self,
        date: &CalendarDate,
    ) -> impl Future<Output = Result<RoomOccupancy, Self::Error>> + Send;

    /// Advisory availability check.
    fn check(
        &self,
        params: &CheckParams,
    ) -> impl Future<Output = Result<Availability, Self::Error>> + Send;

    /// Submit a booking.
    fn book(
        &self,
        params: &BookingParams,
    ) -> impl Future<Output = Result<BookOutcome, Self::Error>> + Send;

    /// Cancel an existing booking.
    fn cancel(
        &self,
        params: &BookingParams,
    ) -> impl Future<Output = Result<CancelOutcome, Self::Error>> + Send;

    /// Session-wide connectivity handle.
    fn monitor(&self) -> ConnectionMonitor;
}

impl ReservationBackend for ReservationClient {
    type Error = reserva_client::ClientError;

    fn rooms(&self) -> impl Future<Output = Result<Vec<Room>, Self::Error>> + Send {
        self.list_rooms()
    }

    fn occupancy(
        &self,
        date: &CalendarDate,
    ) -> impl Future<Output = Result<RoomOccupancy, Self::Error>> + Send {
        self.fetch_occupancy(date)
    }

    fn check(
        &self,
        params: &CheckParams,
    ) -> impl Future<Output = Result<Availability, Self::Error>> + Send {
        self.check_availability(&params.room_id, &params.date, params.slot)
    }

    fn book(
        &self,
        params: &BookingParams,
    ) -> impl Future<Output = Result<BookOutcome, Self::Error>> + Send {
        self.submit_booking(&params.room_id, &params.date, params.slot, &params.holder)
    }

    fn cancel(
        &self,
        params: &BookingParams,
    ) -> impl Future<Output = Result<CancelOutcome, Self::Error>> + Send {
        self.cancel_booking(&params.room_id, &params.date, params.slot, &params.holder)
    }

    fn monitor(&self) -> ConnectionMonitor {
        self.connection().clone()
    }
}
