//! Core domain for the Reserva reservation coordinator.
//!
//! This crate is pure: no I/O, no async, no clocks. It defines the closed
//! slot domain of a bookable day, validated calendar dates, the reservation
//! data model, and availability resolution over a fetched occupancy
//! snapshot. Everything that talks to the network lives in
//! `reserva-client`; everything that sequences a booking lives in
//! `reserva-app`.
//!
//! # Components
//!
//! - [`SlotCalendar`] / [`TimeSlot`]: the fixed, ordered, non-overlapping
//!   8-slot day domain
//! - [`CalendarDate`]: strictly validated `YYYY-MM-DD` dates
//! - [`Reservation`] / [`RoomOccupancy`]: the per-date snapshot fetched
//!   from the remote authority
//! - [`availability`]: free/taken resolution against the slot domain

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod availability;
mod date;
mod error;
mod reservation;
mod slot;

pub use availability::SlotStatus;
pub use date::CalendarDate;
pub use error::ValidationError;
pub use reservation::{Reservation, Room, RoomId, RoomOccupancy};
pub use slot::{SLOT_COUNT, SlotCalendar, TimeSlot};
