//! Tests for the suggestion HTTP client.
//!
//! The happy paths run against a canned loopback server so no network or
//! external process is involved.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::JoinHandle;
use std::time::Duration;

use super::*;

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Serve exactly one canned HTTP response, returning what the client sent
fn spawn_stub(status_line: &str, body: &str) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status_line = status_line.to_string();
    let body = body.to_string();

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    });

    (addr, handle)
}

/// Read one HTTP request (head plus content-length body) off the stream
fn read_request(stream: &mut TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut head = String::new();
    let mut content_length = 0usize;

    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap();
        }
        let done = line == "\r\n";
        head.push_str(&line);
        if done {
            break;
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).unwrap();
    head.push_str(&String::from_utf8_lossy(&body));
    head
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let result = SuggestClient::new("not a url", TEST_TIMEOUT);
    assert!(matches!(
        result,
        Err(crate::error::TypeaheadError::InvalidEndpoint { .. })
    ));
}

#[test]
fn test_endpoint_path_is_fixed() {
    let client = SuggestClient::new("http://127.0.0.1:5000", TEST_TIMEOUT).unwrap();
    assert_eq!(client.endpoint().path(), "/autocomplete");
    assert_eq!(
        client.endpoint().as_str(),
        "http://127.0.0.1:5000/autocomplete"
    );
}

#[tokio::test]
async fn test_fetch_posts_the_query_and_decodes_the_response() {
    let (addr, handle) = spawn_stub(
        "HTTP/1.1 200 OK",
        r#"{"status":"OK","suggestions":["Beatles","Beethoven"]}"#,
    );

    let client = SuggestClient::new(&format!("http://{addr}"), TEST_TIMEOUT).unwrap();
    let response = client.fetch("beat").await.unwrap();

    assert_eq!(response.status, "OK");
    assert_eq!(response.suggestions, vec!["Beatles", "Beethoven"]);

    let request = handle.join().unwrap();
    assert!(request.starts_with("POST /autocomplete HTTP/1.1\r\n"));
    assert!(request.to_ascii_lowercase().contains("application/json"));
    assert!(request.ends_with(r#"{"search":"beat"}"#));
}

#[tokio::test]
async fn test_server_error_status_is_an_api_error() {
    let (addr, handle) = spawn_stub("HTTP/1.1 500 Internal Server Error", "{}");

    let client = SuggestClient::new(&format!("http://{addr}"), TEST_TIMEOUT).unwrap();
    let result = client.fetch("beat").await;

    assert!(matches!(result, Err(SuggestError::Api { code: 500 })));
    handle.join().unwrap();
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let (addr, handle) = spawn_stub("HTTP/1.1 200 OK", "not json");

    let client = SuggestClient::new(&format!("http://{addr}"), TEST_TIMEOUT).unwrap();
    let result = client.fetch("beat").await;

    assert!(matches!(result, Err(SuggestError::Decode(_))));
    handle.join().unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    // Bind a port and drop it again so nothing is listening there
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let client = SuggestClient::new(&format!("http://{addr}"), TEST_TIMEOUT).unwrap();
    let result = client.fetch("beat").await;

    assert!(matches!(result, Err(SuggestError::Network(_))));
}
