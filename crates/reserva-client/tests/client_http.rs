//! Client tests against a canned in-process HTTP responder.
//!
//! The responder accepts a single connection, reads the full request, and
//! replies with a fixed body - enough to exercise the real transport path
//! (reqwest over loopback TCP) without a reservation server.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;

use reserva_client::{
    Availability, BookOutcome, CancelOutcome, ClientConfig, ClientError, ConnectionState,
    ReservationClient,
};
use reserva_core::{CalendarDate, SlotCalendar};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    sync::oneshot,
};

/// Serve exactly one HTTP exchange, returning the bound address and a
/// channel yielding the raw request the client sent.
async fn serve_once(body: &str) -> (SocketAddr, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = oneshot::channel();

    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        body.len(),
        body
    );

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();
        let _ = request_tx.send(request);
    });

    (addr, request_rx)
}

/// Read one HTTP request: headers, then `content-length` bytes of body.
async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

fn client_for(addr: SocketAddr) -> ReservationClient {
    ReservationClient::new(&ClientConfig::new(format!("http://{addr}"))).unwrap()
}

fn date() -> CalendarDate {
    CalendarDate::parse("2024-06-01").unwrap()
}

#[tokio::test]
async fn list_rooms_decodes_and_marks_connected() {
    let (addr, request_rx) = serve_once(r#"{"type": "RES_LIST", "rooms": ["101", "102"]}"#).await;
    let client = client_for(addr);

    let rooms = client.list_rooms().await.unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].id, "101");
    assert_eq!(client.connection().current(), ConnectionState::Connected);

    let request = request_rx.await.unwrap();
    assert!(request.starts_with("POST / HTTP/1.1"));
    assert!(request.contains(r#""type":"REQ_LIST""#));
}

#[tokio::test]
async fn unreachable_remote_marks_error() {
    // Bind to learn a free port, then close it again.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let result = client.list_rooms().await;

    assert!(matches!(result, Err(ClientError::Unreachable { .. })));
    assert_eq!(client.connection().current(), ConnectionState::Error);
}

#[tokio::test]
async fn malformed_body_is_not_a_connectivity_defect() {
    let (addr, _request_rx) = serve_once("definitely not json").await;
    let client = client_for(addr);

    let result = client.list_rooms().await;
    assert!(matches!(result, Err(ClientError::Malformed { .. })));
    // A response was received; connectivity is fine.
    assert_eq!(client.connection().current(), ConnectionState::Connected);
}

#[tokio::test]
async fn check_availability_decodes_the_server_vocabulary() {
    let (addr, request_rx) =
        serve_once(r#"{"type": "RES_STATUS", "status": "indisponível"}"#).await;
    let client = client_for(addr);
    let slot = SlotCalendar::slots()[1];

    let availability = client.check_availability("101", &date(), slot).await.unwrap();
    assert_eq!(availability, Availability::Taken);

    let request = request_rx.await.unwrap();
    assert!(request.contains(r#""type":"REQ_CHECK""#));
    assert!(request.contains(r#""room_id":"101""#));
    assert!(request.contains(r#""date":"2024-06-01""#));
    assert!(request.contains(r#""time_slot":"09:45-11:15""#));
}

#[tokio::test]
async fn submit_booking_reports_exactly_what_the_remote_returns() {
    let (addr, request_rx) =
        serve_once(r#"{"type": "RES_CONFIRM", "room_id": "101", "status": "confirmed"}"#).await;
    let client = client_for(addr);
    let slot = SlotCalendar::slots()[1];

    let outcome = client.submit_booking("101", &date(), slot, "Bia").await.unwrap();
    assert_eq!(outcome, BookOutcome::Confirmed);

    let request = request_rx.await.unwrap();
    assert!(request.contains(r#""type":"REQ_BOOK""#));
    assert!(request.contains(r#""user":"Bia""#));
}

#[tokio::test]
async fn rejected_booking_is_an_outcome_not_an_error() {
    let (addr, _request_rx) =
        serve_once(r#"{"type": "RES_ERROR", "error": "Conflito de horário"}"#).await;
    let client = client_for(addr);
    let slot = SlotCalendar::slots()[1];

    let outcome = client.submit_booking("101", &date(), slot, "Bia").await.unwrap();
    assert_eq!(outcome, BookOutcome::Rejected { reason: "Conflito de horário".to_string() });
    assert_eq!(client.connection().current(), ConnectionState::Connected);
}

#[tokio::test]
async fn cancel_booking_decodes() {
    let (addr, request_rx) =
        serve_once(r#"{"type": "RES_CANCEL", "status": "cancelled"}"#).await;
    let client = client_for(addr);
    let slot = SlotCalendar::slots()[0];

    let outcome = client.cancel_booking("101", &date(), slot, "Ana").await.unwrap();
    assert_eq!(outcome, CancelOutcome::Cancelled);

    let request = request_rx.await.unwrap();
    assert!(request.contains(r#""type":"REQ_CANCEL""#));
}

#[tokio::test]
async fn fetch_occupancy_uses_the_snapshot_endpoint() {
    let body = r#"{
        "rooms": {
            "101": [{"user": "Ana", "date": "2024-06-01", "time_slot": "08:00-09:30"}],
            "102": []
        }
    }"#;
    let (addr, request_rx) = serve_once(body).await;
    let client = client_for(addr);

    let occupancy = client.fetch_occupancy(&date()).await.unwrap();
    assert_eq!(occupancy.room_count(), 2);
    assert_eq!(occupancy.for_room("101").len(), 1);
    assert_eq!(occupancy.free_slots("101").len(), 7);

    let request = request_rx.await.unwrap();
    assert!(request.starts_with("GET /salas?date=2024-06-01 HTTP/1.1"));
}

#[tokio::test]
async fn refetching_an_unchanged_day_yields_an_equal_snapshot() {
    let body = r#"{
        "rooms": {
            "101": [{"user": "Ana", "date": "2024-06-01", "time_slot": "08:00-09:30"}]
        }
    }"#;

    let (first_addr, _rx1) = serve_once(body).await;
    let first = client_for(first_addr).fetch_occupancy(&date()).await.unwrap();

    let (second_addr, _rx2) = serve_once(body).await;
    let second = client_for(second_addr).fetch_occupancy(&date()).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn reconfigured_client_targets_the_new_remote() {
    let dead = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        addr
    };

    let first = client_for(dead);
    assert!(first.list_rooms().await.is_err());
    assert_eq!(first.connection().current(), ConnectionState::Error);

    let (live, _request_rx) = serve_once(r#"{"rooms": ["201"]}"#).await;
    let second = first.with_base_url(&format!("http://{live}")).unwrap();

    let rooms = second.list_rooms().await.unwrap();
    assert_eq!(rooms[0].id, "201");

    // The monitor is session-wide: the first handle observes the recovery.
    assert_eq!(first.connection().current(), ConnectionState::Connected);
}
