//! Coordinate extraction — an ordered matcher cascade over the
//! percent-decoded URL.
//!
//! Priority: 3d/4d projection → DMS pair → @lat,lng viewport center.
//! The projection segment is the pin position the provider itself
//! embedded, so it wins over DMS (whole-second precision) and over the
//! viewport center (which tracks the visible map, not the pin).

use regex::Regex;
use std::sync::OnceLock;

use super::types::{Coordinate, Direction, DmsComponent, PatternKind};

static PROJECTION_RE: OnceLock<Regex> = OnceLock::new();
static DMS_RE: OnceLock<Regex> = OnceLock::new();
static DECIMAL_PAIR_RE: OnceLock<Regex> = OnceLock::new();

fn projection_re() -> &'static Regex {
    PROJECTION_RE.get_or_init(|| Regex::new(r"3d(-?\d+\.\d+)!4d(-?\d+\.\d+)").unwrap())
}

fn dms_re() -> &'static Regex {
    DMS_RE.get_or_init(|| {
        Regex::new(r#"(\d{1,3})°(\d{1,2})'(\d{1,2}(?:\.\d+)?)"?([NSEW])"#).unwrap()
    })
}

fn decimal_pair_re() -> &'static Regex {
    DECIMAL_PAIR_RE.get_or_init(|| Regex::new(r"@(-?\d+\.\d+),(-?\d+\.\d+)").unwrap())
}

/// The cascade, in priority order. Each matcher is a pure function over
/// the decoded string; the first hit short-circuits the rest.
const MATCHERS: &[(PatternKind, fn(&str) -> Option<Coordinate>)] = &[
    (PatternKind::Projection, match_projection),
    (PatternKind::Dms, match_dms),
    (PatternKind::DecimalPair, match_decimal_pair),
];

/// Extract a coordinate from a (possibly percent-encoded) URL string.
///
/// Returns `None` when no pattern matches — an expected outcome for a
/// URL with no embedded coordinate, not an error.
pub fn extract(url: &str) -> Option<Coordinate> {
    extract_detailed(url).map(|(coord, _)| coord)
}

/// Like [`extract`], but also reports which pattern won.
pub fn extract_detailed(url: &str) -> Option<(Coordinate, PatternKind)> {
    // Decode once, up front, so encoded °, ', " and @ are visible to
    // every matcher.
    let decoded = percent_decode(url);
    MATCHERS
        .iter()
        .find_map(|(kind, matcher)| matcher(&decoded).map(|coord| (coord, *kind)))
}

fn match_projection(url: &str) -> Option<Coordinate> {
    let caps = projection_re().captures(url)?;
    Some(Coordinate {
        lat: caps[1].parse().ok()?,
        lng: caps[2].parse().ok()?,
    })
}

/// Needs at least two DMS groups. First group in the string is taken as
/// latitude, second as longitude — positional, not keyed on the compass
/// letter. A parse failure in either group fails the whole strategy.
fn match_dms(url: &str) -> Option<Coordinate> {
    let mut groups = dms_re().captures_iter(url);
    let lat = parse_dms_group(&groups.next()?)?;
    let lng = parse_dms_group(&groups.next()?)?;
    Some(Coordinate {
        lat: lat.to_decimal(),
        lng: lng.to_decimal(),
    })
}

fn parse_dms_group(caps: &regex::Captures<'_>) -> Option<DmsComponent> {
    Some(DmsComponent {
        degrees: caps[1].parse().ok()?,
        minutes: caps[2].parse().ok()?,
        seconds: caps[3].parse().ok()?,
        direction: Direction::from_char(caps[4].chars().next()?)?,
    })
}

fn match_decimal_pair(url: &str) -> Option<Coordinate> {
    let caps = decimal_pair_re().captures(url)?;
    Some(Coordinate {
        lat: caps[1].parse().ok()?,
        lng: caps[2].parse().ok()?,
    })
}

// ─── Percent-decoding (minimal, no extra dep) ───────────────────

/// Reverse %XX escapes. Malformed escapes (truncated or non-hex) pass
/// through untouched rather than failing the whole string.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
