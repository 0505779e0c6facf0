//! Station types: identity, occupancy, and wait times.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{EntityKind, NetworkError};

/// The identifier of a station.
///
/// Identifiers are trimmed at construction and must be non-empty afterwards.
/// Comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use brt_server::domain::StationId;
///
/// let id = StationId::new("  Portal Norte ").unwrap();
/// assert_eq!(id.as_str(), "Portal Norte");
///
/// // Blank names are rejected
/// assert!(StationId::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Create a station id, trimming surrounding whitespace.
    pub fn new(s: &str) -> Result<Self, NetworkError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(NetworkError::EmptyName(EntityKind::Station));
        }
        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How crowded a station currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OccupancyLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl OccupancyLevel {
    /// All levels, least crowded first.
    pub const ALL: [OccupancyLevel; 3] = [
        OccupancyLevel::Low,
        OccupancyLevel::Medium,
        OccupancyLevel::High,
    ];

    /// Parse a level from its exact name (`LOW`, `MEDIUM` or `HIGH`).
    pub fn parse(s: &str) -> Result<Self, NetworkError> {
        match s {
            "LOW" => Ok(OccupancyLevel::Low),
            "MEDIUM" => Ok(OccupancyLevel::Medium),
            "HIGH" => Ok(OccupancyLevel::High),
            _ => Err(NetworkError::InvalidParameter {
                parameter: "occupancy",
                value: s.to_string(),
            }),
        }
    }

    /// Returns the canonical name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            OccupancyLevel::Low => "LOW",
            OccupancyLevel::Medium => "MEDIUM",
            OccupancyLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for OccupancyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wait time in minutes for each occupancy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTimes {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl WaitTimes {
    /// Create a wait table from per-level minutes.
    pub fn new(low: u32, medium: u32, high: u32) -> Self {
        Self { low, medium, high }
    }

    /// Returns the wait in minutes at the given level.
    pub fn get(&self, level: OccupancyLevel) -> u32 {
        match level {
            OccupancyLevel::Low => self.low,
            OccupancyLevel::Medium => self.medium,
            OccupancyLevel::High => self.high,
        }
    }
}

impl Default for WaitTimes {
    fn default() -> Self {
        Self {
            low: 2,
            medium: 5,
            high: 10,
        }
    }
}

/// A station in the network.
///
/// Two stations are equal when their ids are equal; occupancy and wait
/// times do not take part in identity.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    occupancy: OccupancyLevel,
    wait_times: WaitTimes,
}

impl Station {
    /// Create a station with default wait times, starting at low occupancy.
    pub fn new(id: &str) -> Result<Self, NetworkError> {
        Self::with_wait_times(id, WaitTimes::default())
    }

    /// Create a station with custom wait times, starting at low occupancy.
    pub fn with_wait_times(id: &str, wait_times: WaitTimes) -> Result<Self, NetworkError> {
        Ok(Self {
            id: StationId::new(id)?,
            occupancy: OccupancyLevel::default(),
            wait_times,
        })
    }

    pub fn id(&self) -> &StationId {
        &self.id
    }

    pub fn occupancy(&self) -> OccupancyLevel {
        self.occupancy
    }

    pub fn wait_times(&self) -> &WaitTimes {
        &self.wait_times
    }

    /// Set the current occupancy level.
    pub fn set_occupancy(&mut self, level: OccupancyLevel) {
        self.occupancy = level;
    }

    /// Set the occupancy level from its exact name.
    ///
    /// On error the current level is left untouched.
    pub fn set_occupancy_named(&mut self, level: &str) -> Result<(), NetworkError> {
        self.occupancy = OccupancyLevel::parse(level)?;
        Ok(())
    }

    /// Returns the wait time in minutes at the current occupancy level.
    pub fn current_wait_minutes(&self) -> u32 {
        self.wait_times.get(self.occupancy)
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn level() -> impl Strategy<Value = OccupancyLevel> {
        prop::sample::select(OccupancyLevel::ALL.to_vec())
    }

    proptest! {
        /// The reported wait is always the configured minutes for the level.
        #[test]
        fn wait_matches_table(low in 0u32..60, medium in 0u32..60, high in 0u32..60, lvl in level()) {
            let mut station = Station::with_wait_times("S", WaitTimes::new(low, medium, high)).unwrap();
            station.set_occupancy(lvl);
            let expected = match lvl {
                OccupancyLevel::Low => low,
                OccupancyLevel::Medium => medium,
                OccupancyLevel::High => high,
            };
            prop_assert_eq!(station.current_wait_minutes(), expected);
        }

        /// Canonical names round-trip through the parser.
        #[test]
        fn name_roundtrip(lvl in level()) {
            prop_assert_eq!(OccupancyLevel::parse(lvl.as_str()), Ok(lvl));
        }

        /// Anything outside the level names is rejected.
        #[test]
        fn other_names_rejected(s in "[A-Z]{1,8}".prop_filter("not a level", |s| {
            !matches!(s.as_str(), "LOW" | "MEDIUM" | "HIGH")
        })) {
            prop_assert!(OccupancyLevel::parse(&s).is_err());
        }
    }
}
