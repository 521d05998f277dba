//! Minimal HTTP/1.1 server that answers oEmbed GETs for integration tests.
//!
//! Every request gets the same canned status and body. Requests are counted
//! and the last request target is recorded so tests can check encoding.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: &'static str,
    pub body: String,
}

impl CannedResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: "200 OK",
            body: body.into(),
        }
    }

    pub fn thumbnail(url: &str) -> Self {
        Self::ok_json(format!(
            r#"{{"version":"1.0","type":"video","thumbnail_url":"{url}","thumbnail_width":576}}"#
        ))
    }
}

#[derive(Debug, Default)]
pub struct ServerStats {
    hits: AtomicUsize,
    last_target: Mutex<Option<String>>,
}

impl ServerStats {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_target(&self) -> Option<String> {
        self.last_target.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Returns the oEmbed endpoint URL
/// (e.g. "http://127.0.0.1:12345/oembed") and the shared request stats.
/// The server runs until the process exits.
pub fn start(response: CannedResponse) -> (String, Arc<ServerStats>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let stats = Arc::new(ServerStats::default());
    let server_stats = Arc::clone(&stats);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = response.clone();
            let stats = Arc::clone(&server_stats);
            thread::spawn(move || handle(stream, &response, &stats));
        }
    });
    (format!("http://127.0.0.1:{}/oembed", port), stats)
}

fn handle(mut stream: std::net::TcpStream, response: &CannedResponse, stats: &ServerStats) {
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
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .map(str::to_string);

    stats.hits.fetch_add(1, Ordering::SeqCst);
    *stats.last_target.lock().unwrap() = target;

    let reply = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.body.len()
    );
    let _ = stream.write_all(reply.as_bytes());
    let _ = stream.write_all(response.body.as_bytes());
}

/// Starts a server that accepts connections and never answers. Returns the
/// oEmbed endpoint URL. Accepted streams are held open until the process exits.
pub fn start_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    format!("http://127.0.0.1:{}/oembed", port)
}
