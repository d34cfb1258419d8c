//! Minimal HTTP/1.1 stand-in for a Save Page Now endpoint.
//!
//! Answers every GET under `/save/` with a fixed status (or a per-target
//! override) and records the archived targets it was asked for.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct SaveServerOptions {
    /// Status returned for targets without an override.
    pub status: u16,
    /// Per-target status overrides, keyed by the archived URL.
    pub overrides: HashMap<String, u16>,
}

impl Default for SaveServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            overrides: HashMap::new(),
        }
    }
}

pub struct SaveServer {
    /// Endpoint prefix to configure the archiver with, e.g. "http://127.0.0.1:12345/save/".
    pub endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl SaveServer {
    /// Archived targets received so far, in arrival order.
    pub fn targets(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server that answers 200 to everything.
pub fn start() -> SaveServer {
    start_with_options(SaveServerOptions::default())
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start_with_options(opts: SaveServerOptions) -> SaveServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let opts = Arc::new(opts);
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &opts, &recorded));
        }
    });
    SaveServer {
        endpoint: format!("http://127.0.0.1:{}/save/", port),
        requests,
    }
}

fn handle(mut stream: std::net::TcpStream, opts: &SaveServerOptions, recorded: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);
    let target = match path.strip_prefix("/save/") {
        Some(t) if method.eq_ignore_ascii_case("GET") => t.to_string(),
        _ => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
            return;
        }
    };
    let status = opts.overrides.get(&target).copied().unwrap_or(opts.status);
    recorded.lock().unwrap().push(target);

    let body = b"saved";
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        520 => "Unknown Error",
        _ => "Status",
    }
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    (method, path)
}
