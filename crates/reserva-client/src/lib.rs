//! HTTP client for the Reserva remote authority.
//!
//! The remote holds the single source of truth for bookings; this crate is
//! the only place that talks to it. It exposes the five remote operations
//! as typed async methods, tracks connectivity in a process-wide
//! [`ConnectionMonitor`], and keeps the base address an explicit,
//! per-instance value: [`ReservationClient::with_base_url`] returns a new
//! client rather than mutating shared state, so in-flight calls always
//! resolve against the address captured when they started.
//!
//! # Components
//!
//! - [`ReservationClient`]: the remote operations
//! - [`ConnectionMonitor`] / [`ConnectionState`]: observable connectivity
//! - [`ClientConfig`]: environment-derived base address
//! - [`ClientError`]: transport vs. decoding failure taxonomy

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod config;
mod error;
mod status;

pub use client::ReservationClient;
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use reserva_proto::{Availability, BookOutcome, CancelOutcome};
pub use status::{ConnectionMonitor, ConnectionState};
