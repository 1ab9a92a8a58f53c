//! Tests for `HttpSheetsClient` against a one-shot loopback HTTP server.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use common::orders;
use order_sheets::error::SheetSyncError;
use order_sheets::{
    build_create_request, BatchUpdateRequest, Config, HttpSheetsClient, SheetsHelper, SheetsRpc,
    SpreadsheetRef,
};
use pretty_assertions::assert_eq;

/// Accept one connection, answer it with `response`, and hand back the raw request.
fn serve_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).unwrap();
        request
    });
    (format!("http://{addr}"), handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut request = String::new();
    let mut content_length = 0;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap() == 0 {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap();
            }
        }
        request.push_str(&line);
        if line == "\r\n" {
            break;
        }
    }
    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).unwrap();
    request.push_str(&String::from_utf8(body).unwrap());
    request
}

fn response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn client(base_url: &str) -> HttpSheetsClient {
    let config = Config::new("ya29.test-token")
        .with_api_base_url(base_url)
        .with_timeout(Duration::from_secs(5));
    HttpSheetsClient::new(&config).unwrap()
}

#[test]
fn test_create_posts_body_with_bearer_token() {
    let body = r#"{"spreadsheetId": "abc123", "sheets": [
        {"properties": {"sheetId": 0, "title": "Data"}},
        {"properties": {"sheetId": 42, "title": "Pivot"}}
    ]}"#;
    let (base_url, server) = serve_once(response("200 OK", body));

    let spreadsheet = client(&base_url)
        .create(&build_create_request("Orders").unwrap())
        .unwrap();
    assert_eq!(spreadsheet.spreadsheet_id.as_deref(), Some("abc123"));
    assert_eq!(spreadsheet.sheets.len(), 2);

    let request = server.join().unwrap();
    let lower = request.to_ascii_lowercase();
    assert!(request.starts_with("POST /v4/spreadsheets HTTP/1.1\r\n"));
    assert!(lower.contains("authorization: bearer ya29.test-token\r\n"));
    assert!(request.contains(r#""title":"Orders""#));
}

#[test]
fn test_error_envelope_becomes_api_error() {
    let body = r#"{"error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}}"#;
    let (base_url, server) = serve_once(response("403 Forbidden", body));

    let err = client(&base_url)
        .batch_update("abc123", &BatchUpdateRequest::new(Vec::new()))
        .unwrap_err();
    match err {
        SheetSyncError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(
                message,
                "PERMISSION_DENIED: The caller does not have permission"
            );
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /v4/spreadsheets/abc123:batchUpdate HTTP/1.1\r\n"));
}

#[test]
fn test_unreadable_error_body_uses_status_reason() {
    // Declared length exceeds what is sent before the connection closes
    let truncated =
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial"
            .to_string();
    let (base_url, server) = serve_once(truncated);

    let err = client(&base_url)
        .batch_update("abc123", &BatchUpdateRequest::new(Vec::new()))
        .unwrap_err();
    match err {
        SheetSyncError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn test_helper_sync_over_http() {
    let (base_url, server) = serve_once(response(
        "200 OK",
        r#"{"spreadsheetId": "abc123", "replies": [{}, {}]}"#,
    ));
    let reference = SpreadsheetRef {
        spreadsheet_id: "abc123".to_string(),
        data_sheet_id: 0,
        pivot_sheet_id: 42,
        spreadsheet_url: None,
    };

    let reply = SheetsHelper::new(client(&base_url))
        .sync(&reference, &orders(2))
        .unwrap();
    assert_eq!(reply.replies.len(), 2);

    let request = server.join().unwrap();
    assert!(request.contains(r#""updateSheetProperties""#));
    assert!(request.contains(r#""rowCount":3"#));
}
