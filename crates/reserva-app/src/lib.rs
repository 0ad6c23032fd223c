//! Booking coordinator for Reserva.
//!
//! The [`Coordinator`] is a pure state machine: it consumes
//! [`CoordinatorEvent`] inputs and produces [`CoordinatorAction`]
//! instructions, performing no I/O itself. The generic [`Runtime`]
//! executes those actions against a [`ReservationBackend`] (the HTTP
//! client in production, a scripted mock in tests) and feeds completions
//! back in, so the same orchestration logic runs in both.
//!
//! Dependent read views do not poll the coordinator: a successful
//! mutation bumps the [`RefreshSignal`] counter, and subscribers refetch
//! on change. Fetched snapshots land in a [`ScheduleView`], which drops
//! responses whose request parameters no longer match the current
//! selection - arrival order is never trusted.
//!
//! # Components
//!
//! - [`Coordinator`]: booking workflow state machine
//! - [`BookingDraft`] / [`BookingPhase`]: in-progress selection and phase
//! - [`RefreshSignal`] / [`RefreshListener`]: post-mutation refetch channel
//! - [`ScheduleView`]: occupancy snapshot with stale-response suppression
//! - [`ReservationBackend`] / [`Runtime`]: I/O abstraction and driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod backend;
mod coordinator;
mod event;
mod refresh;
mod runtime;
mod schedule;
mod state;

pub use action::{CoordinatorAction, Notice};
pub use backend::ReservationBackend;
pub use coordinator::Coordinator;
pub use event::CoordinatorEvent;
pub use refresh::{RefreshListener, RefreshSignal};
pub use runtime::Runtime;
pub use schedule::ScheduleView;
pub use state::{BookingDraft, BookingParams, BookingPhase, CheckParams};
