//! Shared helpers for CLI integration tests: a loopback feed server that
//! answers one request with a canned HTTP response.

use std::io::{Read, Write};
use std::net::TcpListener;

pub const FEED_BODY: &str = r##"{
    "meta": {"timestamp": "2026-08-01T00:00:00Z"},
    "content": [
        {
            "slug": "alpha",
            "title": "Alpha Chain",
            "color": {"primary": "#112233"},
            "chain": {"status": "Mainnet", "chainId": 42161, "parentChain": "Arbitrum One", "layer": 3}
        },
        {
            "slug": "testnet",
            "title": "Testnet Only",
            "chain": {"status": "Testnet", "chainId": 11111, "parentChain": "Ethereum"}
        }
    ]
}"##;

/// Bind an ephemeral port, answer exactly one request with `status_line` and
/// `body`, and return the URL to point the CLI at.
pub fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/feed")
}
