//! Minimal HTTP/1.1 server standing in for the animals API in integration tests.
//!
//! Serves a fixed body with a fixed status to every GET and records each
//! request head (request line + headers) so tests can assert the query string
//! and the `X-Api-Key` header.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct ApiServerOptions {
    /// Status line sent to every request, e.g. "200 OK" or "401 Unauthorized".
    pub status: &'static str,
    /// Response body (normally a JSON array of records).
    pub body: String,
}

impl Default for ApiServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            body: "[]".to_string(),
        }
    }
}

/// Request heads seen by the server, in arrival order.
pub type CapturedRequests = Arc<Mutex<Vec<String>>>;

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/") and the captured request log.
/// The server runs until the process exits.
pub fn start(opts: ApiServerOptions) -> (String, CapturedRequests) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let captured: CapturedRequests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&captured);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &opts, &log));
        }
    });
    (format!("http://127.0.0.1:{}/", port), captured)
}

fn handle(mut stream: std::net::TcpStream, opts: &ApiServerOptions, log: &CapturedRequests) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    if let Ok(head) = std::str::from_utf8(&buf[..n]) {
        log.lock().unwrap().push(head.to_string());
    }
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        opts.status,
        opts.body.len(),
        opts.body
    );
    let _ = stream.write_all(response.as_bytes());
}
