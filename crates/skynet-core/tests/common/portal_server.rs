//! Minimal HTTP/1.1 portal for integration tests.
//!
//! Accepts multipart uploads on `/skynet/skyfile` and answers with a fixed
//! skylink; serves HEAD and GET for the skylinks it was seeded with, 404
//! otherwise. Every request is recorded for assertions.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Content served under one skylink.
#[derive(Debug, Clone)]
pub struct StoredContent {
    pub content_type: String,
    pub disposition: String,
    /// Raw JSON of the `Skynet-File-Metadata` header.
    pub metadata: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, as sent.
    pub target: String,
    /// `Content-Type` request header, empty when absent.
    pub content_type: String,
    pub body: Vec<u8>,
}

pub struct PortalServer {
    /// Base URL without trailing slash, e.g. `http://127.0.0.1:12345`.
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl PortalServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts the portal in a background thread. It runs until the process exits.
pub fn start(content: HashMap<String, StoredContent>, upload_skylink: &str) -> PortalServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let content = Arc::new(content);
    let skylink = upload_skylink.to_string();
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let content = Arc::clone(&content);
            let recorded = Arc::clone(&recorded);
            let skylink = skylink.clone();
            thread::spawn(move || handle(stream, &content, &skylink, &recorded));
        }
    });
    PortalServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(
    mut stream: TcpStream,
    content: &HashMap<String, StoredContent>,
    upload_skylink: &str,
    recorded: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));
    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };
    recorded.lock().unwrap().push(request.clone());

    let path = request.target.split('?').next().unwrap_or("");
    let response = match request.method.as_str() {
        "POST" if path == "/skynet/skyfile" => {
            let body = format!("{{\"skylink\":\"{}\"}}", upload_skylink);
            simple_response("200 OK", "application/json", body.as_bytes())
        }
        "HEAD" | "GET" => match content.get(path.trim_start_matches('/')) {
            Some(c) => {
                let mut out = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Disposition: {}\r\nSkynet-File-Metadata: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    c.content_type,
                    c.disposition,
                    c.metadata,
                    c.body.len()
                )
                .into_bytes();
                if request.method == "GET" {
                    out.extend_from_slice(&c.body);
                }
                out
            }
            None if request.method == "HEAD" => {
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec()
            }
            None => simple_response("404 Not Found", "text/plain", b"not found"),
        },
        _ => simple_response("405 Method Not Allowed", "text/plain", b""),
    };
    let _ = stream.write_all(&response);
    let _ = stream.flush();
}

fn simple_response(status: &str, content_type: &str, body: &[u8]) -> Vec<u8> {
    let mut out = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    )
    .into_bytes();
    out.extend_from_slice(body);
    out
}

/// Reads headers, then as many body bytes as `Content-Length` announces.
fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];
    let header_end = loop {
        if let Some(i) = find(&buf, b"\r\n\r\n") {
            break i + 4;
        }
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = std::str::from_utf8(&buf[..header_end]).ok()?.to_string();
    let mut request_line = head.lines().next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();
    let header = |name: &str| {
        head.lines()
            .skip(1)
            .filter_map(|l| l.split_once(':'))
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(name))
            .map(|(_, v)| v.trim().to_string())
    };
    let content_length = header("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    let content_type = header("content-type").unwrap_or_default();

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = buf[header_end..].to_vec();

    Some(RecordedRequest {
        method,
        target,
        content_type,
        body,
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
