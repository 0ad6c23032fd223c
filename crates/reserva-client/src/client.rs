//! The remote operations.

use reserva_core::{CalendarDate, Room, RoomOccupancy, TimeSlot};
use reserva_proto::{
    Availability, BookOutcome, CancelOutcome, Request, decode_availability, decode_book_outcome,
    decode_cancel_outcome, decode_occupancy, decode_rooms,
};
use url::Url;

use crate::{
    config::ClientConfig,
    error::ClientError,
    status::{ConnectionMonitor, ConnectionState},
};

/// Path serving the per-date occupancy snapshot.
const OCCUPANCY_PATH: &str = "salas";

/// Typed client for the remote reservation authority.
///
/// Holds its base address as an immutable value; redirecting the session
/// to another remote goes through [`ReservationClient::with_base_url`],
/// which returns a new client sharing the session-wide
/// [`ConnectionMonitor`]. Calls already in flight keep the address they
/// captured at call start.
///
/// Every operation re-evaluates the connection state: `Connecting` while
/// in flight, `Connected` once a response is fully received (even one that
/// later fails to decode), `Error` on transport failure.
#[derive(Debug, Clone)]
pub struct ReservationClient {
    http: reqwest::Client,
    base: Url,
    monitor: ConnectionMonitor,
}

impl ReservationClient {
    /// Client for the configured base address.
    ///
    /// # Errors
    ///
    /// - [`ClientError::BaseUrl`] if the address does not parse.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_http(reqwest::Client::default(), config)
    }

    /// Client reusing an existing `reqwest::Client` (connection pools are
    /// shared between clones).
    ///
    /// # Errors
    ///
    /// - [`ClientError::BaseUrl`] if the address does not parse.
    pub fn with_http(http: reqwest::Client, config: &ClientConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&config.base_url)?;
        Ok(Self { http, base, monitor: ConnectionMonitor::new() })
    }

    /// Client for the environment-configured address
    /// (`RESERVA_SERVER_URL`, loopback default).
    ///
    /// # Errors
    ///
    /// - [`ClientError::BaseUrl`] if the configured address does not parse.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(&ClientConfig::from_env())
    }

    /// New client targeting a different remote, sharing this session's
    /// connection monitor and HTTP pools.
    ///
    /// # Errors
    ///
    /// - [`ClientError::BaseUrl`] if the address does not parse.
    pub fn with_base_url(&self, base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url)?;
        Ok(Self { http: self.http.clone(), base, monitor: self.monitor.clone() })
    }

    /// The base address this client targets.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Session-wide connectivity handle.
    #[must_use]
    pub fn connection(&self) -> &ConnectionMonitor {
        &self.monitor
    }

    /// Room ids known to the remote.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unreachable`] on transport failure
    /// - [`ClientError::Malformed`] if the body cannot be decoded
    pub async fn list_rooms(&self) -> Result<Vec<Room>, ClientError> {
        let body = self.post_command(&Request::List).await?;
        Ok(decode_rooms(&body)?)
    }

    /// Occupancy snapshot for every room on a date. Read-only.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unreachable`] on transport failure
    /// - [`ClientError::Malformed`] if the body cannot be decoded
    pub async fn fetch_occupancy(&self, date: &CalendarDate) -> Result<RoomOccupancy, ClientError> {
        let target = self.occupancy_url(date)?;

        self.monitor.set(ConnectionState::Connecting);
        tracing::debug!(%target, "fetching occupancy snapshot");

        let response = self
            .http
            .get(target)
            .send()
            .await
            .map_err(|source| self.transport_failure(source))?;
        let body = response.text().await.map_err(|source| self.transport_failure(source))?;
        self.monitor.set(ConnectionState::Connected);

        Ok(decode_occupancy(&body)?)
    }

    /// Advisory availability check for one (room, date, slot).
    ///
    /// The answer is a snapshot; the remote re-arbitrates at booking time.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unreachable`] on transport failure
    /// - [`ClientError::Malformed`] if the body cannot be decoded
    pub async fn check_availability(
        &self,
        room_id: &str,
        date: &CalendarDate,
        slot: TimeSlot,
    ) -> Result<Availability, ClientError> {
        let request = Request::Check {
            room_id: room_id.to_string(),
            date: date.clone(),
            time_slot: slot,
        };
        let body = self.post_command(&request).await?;
        Ok(decode_availability(&body)?)
    }

    /// Submit a booking. The only operation that writes, and the remote is
    /// the sole arbiter: an explicit rejection comes back as
    /// [`BookOutcome::Rejected`], never as a locally assumed success.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unreachable`] on transport failure
    /// - [`ClientError::Malformed`] if the body cannot be decoded
    pub async fn submit_booking(
        &self,
        room_id: &str,
        date: &CalendarDate,
        slot: TimeSlot,
        holder: &str,
    ) -> Result<BookOutcome, ClientError> {
        let request = Request::Book {
            room_id: room_id.to_string(),
            user: holder.to_string(),
            date: date.clone(),
            time_slot: slot,
        };
        let body = self.post_command(&request).await?;
        Ok(decode_book_outcome(&body)?)
    }

    /// Cancel an existing booking identified by all four fields.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unreachable`] on transport failure
    /// - [`ClientError::Malformed`] if the body cannot be decoded
    pub async fn cancel_booking(
        &self,
        room_id: &str,
        date: &CalendarDate,
        slot: TimeSlot,
        holder: &str,
    ) -> Result<CancelOutcome, ClientError> {
        let request = Request::Cancel {
            room_id: room_id.to_string(),
            user: holder.to_string(),
            date: date.clone(),
            time_slot: slot,
        };
        let body = self.post_command(&request).await?;
        Ok(decode_cancel_outcome(&body)?)
    }

    /// POST a command body to the base address and return the raw
    /// response text.
    async fn post_command(&self, request: &Request) -> Result<String, ClientError> {
        // Capture the address now: a concurrent with_base_url must not
        // retarget this call.
        let target = self.base.clone();

        self.monitor.set(ConnectionState::Connecting);
        tracing::debug!(%target, ?request, "dispatching command");

        let response = self
            .http
            .post(target)
            .json(request)
            .send()
            .await
            .map_err(|source| self.transport_failure(source))?;
        let body = response.text().await.map_err(|source| self.transport_failure(source))?;
        self.monitor.set(ConnectionState::Connected);

        Ok(body)
    }

    fn occupancy_url(&self, date: &CalendarDate) -> Result<Url, ClientError> {
        let mut target = self.base.join(OCCUPANCY_PATH)?;
        target.query_pairs_mut().append_pair("date", date.as_str());
        Ok(target)
    }

    fn transport_failure(&self, source: reqwest::Error) -> ClientError {
        self.monitor.set(ConnectionState::Error);
        tracing::warn!(error = %source, "remote unreachable");
        ClientError::Unreachable { source }
    }
}
