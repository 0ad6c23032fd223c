//! Wire contract for the Reserva remote authority.
//!
//! The remote speaks JSON over HTTP: commands are POSTed to the base
//! address as `{"type": "REQ_*", ...}` bodies, and the occupancy snapshot
//! is fetched from `GET <base>/salas?date=...`. This crate owns both
//! directions of that contract - typed request bodies and strict response
//! decoding - and nothing else: no I/O, no connection state.
//!
//! Decoding is strict the way [`reserva_core`]'s domain is strict: a
//! reservation row naming a slot outside the closed domain, or a status
//! string this crate does not know, fails decoding rather than being
//! silently dropped. Responses may carry an extra `"type"` discriminator
//! (`RES_LIST`, `RES_STATUS`, ...); it is ignored.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod request;
mod response;

pub use error::ProtocolError;
pub use request::Request;
pub use response::{
    Availability, BookOutcome, CancelOutcome, decode_availability, decode_book_outcome,
    decode_cancel_outcome, decode_occupancy, decode_rooms,
};
