//! In-process fake of the remote mail API
//!
//! Speaks just enough HTTP/1.1 to serve the two read-only endpoints
//! the transport uses:
//!
//! ```text
//!   GET /?action=getMessages&login=<l>&domain=<d>
//!       -> JSON array of {id, from, subject, date}
//!   GET /?action=readMessage&login=<l>&domain=<d>&id=<n>
//!       -> {id, from, subject, date, textBody, htmlBody} or 404
//! ```
//!
//! Every connection carries exactly one request and is closed after
//! the response, matching the connectionless request/response model
//! the client assumes.

use super::mailbox::{Mailbox, TestMessage};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// A fake mail API server on localhost with an OS-assigned port.
///
/// The server runs until the `FakeMailServer` is dropped (the tokio
/// task is aborted). Tests mutate the shared mailbox through the
/// accessor methods to simulate mail arriving, expiring, or the
/// service failing.
pub struct FakeMailServer {
    port: u16,
    mailbox: Arc<Mutex<Mailbox>>,
    /// Handle to the background task so it lives as long as the server.
    _handle: tokio::task::JoinHandle<()>,
}

impl FakeMailServer {
    /// Start a fake server with the given mailbox state.
    ///
    /// Binds to `127.0.0.1:0` -- the OS picks a free port -- and
    /// spawns a tokio task that accepts connections and answers one
    /// request each.
    pub async fn start(mailbox: Mailbox) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind to ephemeral port");
        let port = listener.local_addr().unwrap().port();
        let mailbox = Arc::new(Mutex::new(mailbox));

        let shared = mailbox.clone();
        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _addr)) = listener.accept().await else {
                    break;
                };
                let shared = shared.clone();
                tokio::spawn(async move {
                    handle_connection(stream, &shared).await;
                });
            }
        });

        Self {
            port,
            mailbox,
            _handle: handle,
        }
    }

    /// The base URL tests point `SessionConfig::api_base` at.
    pub fn api_base(&self) -> String {
        format!("http://127.0.0.1:{}/", self.port)
    }

    /// Requests served so far.
    pub fn hits(&self) -> u64 {
        self.mailbox.lock().unwrap().hits
    }

    /// Deliver a message to the remote mailbox.
    pub fn push_message(&self, id: u64, from: &str, subject: &str, body: &str) {
        self.mailbox.lock().unwrap().messages.push(TestMessage {
            id,
            from: from.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
    }

    /// Remove a message, as if it expired on the remote.
    pub fn remove_message(&self, id: u64) {
        self.mailbox.lock().unwrap().messages.retain(|m| m.id != id);
    }

    /// Make every subsequent listing fail with HTTP 500.
    pub fn set_fail_listing(&self, fail: bool) {
        self.mailbox.lock().unwrap().fail_listing = fail;
    }

    /// Make every subsequent listing return a payload with required
    /// fields missing.
    pub fn set_malformed_listing(&self, malformed: bool) {
        self.mailbox.lock().unwrap().malformed_listing = malformed;
    }
}

/// Answer a single request on `stream` from a snapshot of the mailbox.
async fn handle_connection(stream: TcpStream, mailbox: &Mutex<Mailbox>) {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    match reader.read_line(&mut request_line).await {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    // Drain headers; both endpoints are GET-only, so no body follows.
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header).await {
            Ok(0) | Err(_) => return,
            Ok(_) if header == "\r\n" || header == "\n" => break,
            Ok(_) => {}
        }
    }

    let snapshot = {
        let mut guard = mailbox.lock().unwrap();
        guard.hits += 1;
        guard.clone()
    };

    let (status, body) = respond(&request_line, &snapshot);
    let response = format!(
        "HTTP/1.1 {status}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    );

    let stream = reader.get_mut();
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Route one request line to a `(status, body)` pair.
fn respond(request_line: &str, mailbox: &Mailbox) -> (&'static str, String) {
    let Some(query) = request_line
        .split_whitespace()
        .nth(1)
        .and_then(|target| target.split_once('?'))
        .map(|(_, query)| query)
    else {
        return (
            "400 Bad Request",
            json!({"error": "missing query"}).to_string(),
        );
    };

    let params: HashMap<&str, &str> = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .collect();

    match params.get("action").copied() {
        Some("getMessages") => list_messages(mailbox),
        Some("readMessage") => read_message(&params, mailbox),
        _ => (
            "400 Bad Request",
            json!({"error": "unknown action"}).to_string(),
        ),
    }
}

fn list_messages(mailbox: &Mailbox) -> (&'static str, String) {
    if mailbox.fail_listing {
        return (
            "500 Internal Server Error",
            json!({"error": "listing failed"}).to_string(),
        );
    }

    if mailbox.malformed_listing {
        // Summaries stripped of the required `from`/`subject` fields.
        let entries: Vec<_> = mailbox
            .messages
            .iter()
            .map(|m| json!({"id": m.id}))
            .collect();
        return ("200 OK", serde_json::Value::Array(entries).to_string());
    }

    let entries: Vec<_> = mailbox
        .messages
        .iter()
        .map(|m| {
            json!({
                "id": m.id,
                "from": m.from,
                "subject": m.subject,
                "date": "2024-01-01 12:00:00",
            })
        })
        .collect();
    ("200 OK", serde_json::Value::Array(entries).to_string())
}

fn read_message(params: &HashMap<&str, &str>, mailbox: &Mailbox) -> (&'static str, String) {
    let id = params.get("id").and_then(|v| v.parse::<u64>().ok());
    let message = id.and_then(|id| mailbox.messages.iter().find(|m| m.id == id));

    message.map_or_else(
        || {
            (
                "404 Not Found",
                json!({"error": "message not found"}).to_string(),
            )
        },
        |m| {
            (
                "200 OK",
                json!({
                    "id": m.id,
                    "from": m.from,
                    "subject": m.subject,
                    "date": "2024-01-01 12:00:00",
                    "textBody": m.body,
                    "htmlBody": "",
                })
                .to_string(),
            )
        },
    )
}
