//! Core types for the share-link subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which textual encoding produced a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// `3d<lat>!4d<lng>` tile-projection segment. Most precise.
    Projection,
    /// Two degrees-minutes-seconds groups, whole-second precision.
    Dms,
    /// `@lat,lng` viewport-center segment. Coarsest.
    DecimalPair,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Projection => write!(f, "3d/4d projection"),
            Self::Dms => write!(f, "DMS"),
            Self::DecimalPair => write!(f, "@lat,lng"),
        }
    }
}

/// A latitude/longitude pair in decimal degrees.
///
/// Both fields exist together or not at all — an extraction miss is
/// `None`, never a half-filled pair. Values are taken from the source
/// text as-is; no range clamping or validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Human-readable form, e.g. "40.7484°N, 73.9857°W".
    pub fn formatted(&self) -> String {
        let ns = if self.lat >= 0.0 { 'N' } else { 'S' };
        let ew = if self.lng >= 0.0 { 'E' } else { 'W' };
        format!("{:.4}°{}, {:.4}°{}", self.lat.abs(), ns, self.lng.abs(), ew)
    }
}

/// Compass suffix on a DMS group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// South and west carry negative sign in decimal degrees.
    pub fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

/// One degrees-minutes-seconds group. Ephemeral — built while parsing a
/// DMS match, folded straight into a decimal degree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsComponent {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub direction: Direction,
}

impl DmsComponent {
    /// Signed decimal degrees: deg + min/60 + sec/3600, negated for S/W.
    pub fn to_decimal(&self) -> f64 {
        let decimal = f64::from(self.degrees)
            + f64::from(self.minutes) / 60.0
            + self.seconds / 3600.0;
        if self.direction.is_negative() {
            -decimal
        } else {
            decimal
        }
    }
}

/// Outcome of the full expand-then-extract pipeline, as handed to the
/// CLI and HTTP collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPin {
    /// The link the caller gave us, untouched.
    pub input: String,
    /// Redirect target from the single hop, still percent-encoded.
    /// None when the link did not redirect (or expansion was skipped).
    pub expanded_url: Option<String>,
    pub coordinate: Option<Coordinate>,
    /// Which matcher won, when one did.
    pub pattern: Option<PatternKind>,
}
