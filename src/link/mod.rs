//! Share-link subsystem for GeoPin.
//!
//! Pipeline: shortened link → one redirect hop → percent-decode →
//! matcher cascade (3d/4d projection → DMS pair → @lat,lng fallback).
//! Every failure along the way collapses to "no coordinate".

pub mod expand;
pub mod extract;
pub mod types;

pub use expand::LinkExpander;
pub use extract::{extract, extract_detailed, percent_decode};
pub use types::{Coordinate, Direction, DmsComponent, PatternKind, ResolvedPin};

/// Run the full pipeline for one share link.
///
/// With `already_expanded` set, the redirect hop is skipped and the
/// input is fed straight to the extractor (for callers holding a full
/// maps URL rather than a short link). Otherwise extraction only runs
/// on the redirect target; a link that does not redirect yields no
/// coordinate.
pub fn resolve_share_link(
    expander: &LinkExpander,
    link: &str,
    already_expanded: bool,
) -> ResolvedPin {
    let expanded = if already_expanded {
        None
    } else {
        expander.expand(link)
    };

    let target = if already_expanded {
        Some(link)
    } else {
        expanded.as_deref()
    };
    let hit = target.and_then(extract_detailed);

    ResolvedPin {
        input: link.to_string(),
        expanded_url: expanded,
        coordinate: hit.map(|(coord, _)| coord),
        pattern: hit.map(|(_, kind)| kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_pipeline_already_expanded() {
        let expander = LinkExpander::new();
        let pin = resolve_share_link(
            &expander,
            "https://www.google.com/maps/@40.7484,-73.9857,15z",
            true,
        );
        assert!(pin.expanded_url.is_none());
        let coord = pin.coordinate.unwrap();
        assert_relative_eq!(coord.lat, 40.7484);
        assert_relative_eq!(coord.lng, -73.9857);
        assert_eq!(pin.pattern, Some(PatternKind::DecimalPair));
    }

    #[test]
    fn test_pipeline_through_redirect() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(
                    b"HTTP/1.1 302 Found\r\n\
                      Location: https://maps.example/place/x/data=!3d40.6892!4d-74.0445\r\n\
                      Content-Length: 0\r\n\
                      Connection: close\r\n\r\n",
                );
            }
        });

        let expander = LinkExpander::new();
        let pin = resolve_share_link(&expander, &format!("http://{}", addr), false);
        assert!(pin.expanded_url.is_some());
        assert_eq!(pin.pattern, Some(PatternKind::Projection));
        let coord = pin.coordinate.unwrap();
        assert_relative_eq!(coord.lat, 40.6892);
        assert_relative_eq!(coord.lng, -74.0445);
    }

    #[test]
    fn test_pipeline_no_redirect_means_no_coordinate() {
        // Even a URL with an embedded pair yields nothing when the
        // redirect hop fails and expansion was requested.
        let expander = LinkExpander::with_timeout(std::time::Duration::from_secs(2));
        let pin = resolve_share_link(&expander, "not-a-resolvable-link", false);
        assert!(pin.expanded_url.is_none());
        assert!(pin.coordinate.is_none());
        assert!(pin.pattern.is_none());
    }

    #[test]
    fn test_pipeline_expanded_url_without_pattern() {
        let expander = LinkExpander::new();
        let pin = resolve_share_link(&expander, "https://example.com/no/coords/here", true);
        assert!(pin.coordinate.is_none());
        assert_eq!(pin.input, "https://example.com/no/coords/here");
    }
}
