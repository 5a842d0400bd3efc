//! Minimal HTTP responder for exercising the snapshot provider offline.
//!
//! Every I/O failure inside an exchange panics the server thread. The panic
//! resurfaces in [`StubServer::finish`], so a broken exchange fails the test.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::panic;
use std::thread::{self, JoinHandle};

/// Canned reply for requests whose path starts with `prefix`.
#[derive(Debug, Clone)]
pub struct Route {
    /// Path prefix to match.
    pub prefix: &'static str,
    /// HTTP status code to answer with.
    pub status: u16,
    /// JSON response body.
    pub body: String,
}

/// Serves a fixed number of connections, answering each from `routes`.
pub struct StubServer {
    addr: SocketAddr,
    handle: Option<JoinHandle<Vec<String>>>,
}

impl StubServer {
    /// Bind an ephemeral port and answer `connections` requests.
    #[must_use]
    pub fn start(routes: Vec<Route>, connections: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        let handle = thread::spawn(move || {
            listener
                .incoming()
                .take(connections)
                .map(|stream| answer(stream.expect("accept stub connection"), &routes))
                .collect()
        });
        Self {
            addr,
            handle: Some(handle),
        }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Wait for every expected connection and return the paths served.
    ///
    /// Re-raises any panic from the server thread.
    #[must_use]
    pub fn finish(mut self) -> Vec<String> {
        let handle = self.handle.take().expect("stub server already finished");
        handle
            .join()
            .unwrap_or_else(|payload| panic::resume_unwind(payload))
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        // Never block on a thread still waiting for connections.
        if let Some(handle) = self.handle.take()
            && handle.is_finished()
            && let Err(payload) = handle.join()
            && !thread::panicking()
        {
            panic::resume_unwind(payload);
        }
    }
}

fn answer(mut stream: TcpStream, routes: &[Route]) -> String {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stub stream"));
    let mut request_line = String::new();
    let read = reader
        .read_line(&mut request_line)
        .expect("read stub request line");
    assert!(read > 0, "stub connection closed before sending a request");
    loop {
        let mut header = String::new();
        let read = reader.read_line(&mut header).expect("read stub request header");
        if read == 0 || header == "\r\n" {
            break;
        }
    }
    let path = request_line
        .split_whitespace()
        .nth(1)
        .expect("request line carries a path")
        .to_owned();
    let (status, body) = routes
        .iter()
        .find(|r| path.starts_with(r.prefix))
        .map_or((404, String::new()), |r| (r.status, r.body.clone()));
    let response = format!(
        "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream
        .write_all(response.as_bytes())
        .expect("write stub response");
    stream.flush().expect("flush stub response");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Read;

    fn exchange(server: &StubServer, path: &str) -> String {
        let url = server.url("");
        let addr = url.trim_start_matches("http://");
        let mut stream = TcpStream::connect(addr).expect("connect to stub");
        write!(stream, "GET {path} HTTP/1.1\r\nHost: {addr}\r\n\r\n").expect("send request");
        let mut response = String::new();
        stream.read_to_string(&mut response).expect("read response");
        response
    }

    #[rstest]
    fn finish_reports_served_paths() {
        let routes = vec![Route {
            prefix: "/forecast",
            status: 200,
            body: "{}".to_owned(),
        }];
        let server = StubServer::start(routes, 2);
        let hit = exchange(&server, "/forecast?latitude=45.77");
        let miss = exchange(&server, "/elsewhere");
        assert!(hit.starts_with("HTTP/1.1 200 Stub"));
        assert!(hit.ends_with("\r\n\r\n{}"));
        assert!(miss.starts_with("HTTP/1.1 404 Stub"));
        assert_eq!(server.finish(), ["/forecast?latitude=45.77", "/elsewhere"]);
    }

    #[rstest]
    #[should_panic(expected = "closed before sending a request")]
    fn finish_surfaces_broken_exchanges() {
        let server = StubServer::start(Vec::new(), 1);
        let url = server.url("");
        drop(TcpStream::connect(url.trim_start_matches("http://")).expect("connect to stub"));
        let served = server.finish();
        assert!(served.is_empty());
    }
}
