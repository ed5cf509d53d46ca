//! Short-link expansion — one GET, one redirect hop, no body fetch.

use std::time::Duration;

const USER_AGENT: &str = "GeoPin/0.3 (share-link-resolver)";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Expands shortened map links by reading the `Location` header of
/// their single redirect hop.
///
/// Holds a ureq agent with redirect-following disabled, so the 302
/// comes back to us instead of being chased. Shareable across threads;
/// no per-call state.
pub struct LinkExpander {
    agent: ureq::Agent,
}

impl LinkExpander {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// The timeout covers the whole single request; there is no retry
    /// behind it.
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .redirects(0)
            .timeout(timeout)
            .build();
        Self { agent }
    }

    /// Follow exactly one redirect hop and return its target, still
    /// percent-encoded.
    ///
    /// A 302 with a `Location` header is the only success case. Non-302
    /// status, network failure, timeout, and a missing header all
    /// collapse to `None` — the caller decides whether that is worth
    /// reporting. The returned URL is not fetched.
    pub fn expand(&self, url: &str) -> Option<String> {
        let response = self
            .agent
            .get(url)
            .set("User-Agent", USER_AGENT)
            .call()
            .ok()?;

        if response.status() != 302 {
            return None;
        }
        response.header("Location").map(str::to_string)
    }
}

impl Default for LinkExpander {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a loopback port, then exit.
    fn one_shot_server(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    fn expander() -> LinkExpander {
        LinkExpander::with_timeout(Duration::from_secs(5))
    }

    #[test]
    fn test_expand_302_returns_location() {
        let url = one_shot_server(
            "HTTP/1.1 302 Found\r\n\
             Location: https://www.google.com/maps/@40.7484,-73.9857,15z\r\n\
             Content-Length: 0\r\n\
             Connection: close\r\n\r\n",
        );
        let expanded = expander().expand(&url).unwrap();
        assert_eq!(expanded, "https://www.google.com/maps/@40.7484,-73.9857,15z");
    }

    #[test]
    fn test_expand_302_keeps_encoding() {
        let url = one_shot_server(
            "HTTP/1.1 302 Found\r\n\
             Location: https://maps.example/40%C2%B041'54.0%22N\r\n\
             Content-Length: 0\r\n\
             Connection: close\r\n\r\n",
        );
        // Verbatim — decoding is the extractor's job.
        let expanded = expander().expand(&url).unwrap();
        assert!(expanded.contains("%C2%B0"));
    }

    #[test]
    fn test_expand_200_is_none() {
        let url = one_shot_server(
            "HTTP/1.1 200 OK\r\n\
             Content-Type: text/html\r\n\
             Content-Length: 2\r\n\
             Connection: close\r\n\r\nok",
        );
        assert!(expander().expand(&url).is_none());
    }

    #[test]
    fn test_expand_301_is_none() {
        // Only 302 counts; a permanent redirect is not the share-link shape.
        let url = one_shot_server(
            "HTTP/1.1 301 Moved Permanently\r\n\
             Location: https://example.com/\r\n\
             Content-Length: 0\r\n\
             Connection: close\r\n\r\n",
        );
        assert!(expander().expand(&url).is_none());
    }

    #[test]
    fn test_expand_302_without_location_is_none() {
        let url = one_shot_server(
            "HTTP/1.1 302 Found\r\n\
             Content-Length: 0\r\n\
             Connection: close\r\n\r\n",
        );
        assert!(expander().expand(&url).is_none());
    }

    #[test]
    fn test_expand_unreachable_is_none() {
        assert!(expander().expand("not a url at all").is_none());
        assert!(expander().expand("http://127.0.0.1:1/nothing-listens-here").is_none());
    }
}
