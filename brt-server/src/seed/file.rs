//! JSON seed documents.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{OccupancyLevel, WaitTimes};
use crate::network::{NetworkConfig, TransitNetwork};

use super::builder::NetworkBuilder;

/// Errors from loading a seed document.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid seed JSON
    #[error("invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document describes an invalid network
    #[error("invalid network: {0}")]
    Network(#[from] crate::domain::NetworkError),
}

/// A whole network as a serializable document.
///
/// ```json
/// {
///   "stations": [{ "id": "A" }, { "id": "B", "wait_times": { "low": 1, "medium": 4, "high": 8 } }],
///   "routes": [{ "code": "R1", "stops": ["A", "B"] }],
///   "trunks": [{
///     "name": "Norte", "cruise_speed": 450.0, "stops": ["A", "B"],
///     "segments": [{ "from": "A", "to": "B", "distance": 900.0 }]
///   }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSeed {
    #[serde(default)]
    pub stations: Vec<StationSeed>,
    #[serde(default)]
    pub routes: Vec<RouteSeed>,
    #[serde(default)]
    pub trunks: Vec<TrunkSeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSeed {
    pub id: String,
    #[serde(default)]
    pub wait_times: Option<WaitTimesSeed>,
    /// Starting occupancy level name (defaults to `LOW`).
    #[serde(default)]
    pub occupancy: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitTimesSeed {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSeed {
    pub code: String,
    pub stops: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrunkSeed {
    pub name: String,
    pub cruise_speed: f64,
    #[serde(default)]
    pub stops: Vec<String>,
    #[serde(default)]
    pub segments: Vec<SegmentSeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSeed {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl NetworkSeed {
    /// Parse a seed document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a seed document from a file.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build a network from this document.
    pub fn build(&self, config: NetworkConfig) -> Result<TransitNetwork, SeedError> {
        let mut builder = NetworkBuilder::new().config(config);

        for station in &self.stations {
            let wait_times = station
                .wait_times
                .map(|w| WaitTimes::new(w.low, w.medium, w.high))
                .unwrap_or_default();
            let occupancy = match &station.occupancy {
                Some(level) => OccupancyLevel::parse(level)?,
                None => OccupancyLevel::default(),
            };
            builder = builder.station_with(&station.id, wait_times, occupancy);
        }

        for route in &self.routes {
            let stops: Vec<&str> = route.stops.iter().map(String::as_str).collect();
            builder = builder.route(&route.code, &stops);
        }

        for trunk in &self.trunks {
            let stops: Vec<&str> = trunk.stops.iter().map(String::as_str).collect();
            let segments: Vec<(&str, &str, f64)> = trunk
                .segments
                .iter()
                .map(|s| (s.from.as_str(), s.to.as_str(), s.distance))
                .collect();
            builder = builder.trunk_with_stops(&trunk.name, trunk.cruise_speed, &stops, &segments);
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "stations": [
            { "id": "A" },
            { "id": "B", "wait_times": { "low": 1, "medium": 4, "high": 8 }, "occupancy": "HIGH" },
            { "id": "C" }
        ],
        "routes": [
            { "code": "R1", "stops": ["A", "B", "C"] },
            { "code": "R2", "stops": ["A", "C"] }
        ],
        "trunks": [
            {
                "name": "Norte",
                "cruise_speed": 500.0,
                "stops": ["A", "B", "C"],
                "segments": [
                    { "from": "A", "to": "B", "distance": 1000.0 },
                    { "from": "B", "to": "C", "distance": 500.0 }
                ]
            }
        ]
    }"#;

    #[test]
    fn parse_and_build() {
        let seed = NetworkSeed::from_json(SAMPLE).unwrap();
        assert_eq!(seed.stations.len(), 3);
        assert_eq!(seed.routes.len(), 2);

        let net = seed.build(NetworkConfig::default()).unwrap();
        assert_eq!(net.station_count(), 3);
        assert_eq!(net.wait_time("A"), Ok(2));
        assert_eq!(net.wait_time("B"), Ok(8));
        assert_eq!(net.route_names(), vec!["R1", "R2"]);
        assert_eq!(net.direct_routes("A", "C").unwrap().codes(), vec!["R2", "R1"]);
        assert_eq!(net.travel_time("Norte", "A", "B"), Ok(2.0));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let seed = NetworkSeed::from_json("{}").unwrap();
        assert_eq!(seed, NetworkSeed::default());
        let net = seed.build(NetworkConfig::default()).unwrap();
        assert_eq!(net.station_count(), 0);
    }

    #[test]
    fn reject_bad_json() {
        let err = NetworkSeed::from_json("{ \"stations\": [").unwrap_err();
        assert!(matches!(err, SeedError::Json(_)));
    }

    #[test]
    fn reject_bad_occupancy() {
        let seed = NetworkSeed::from_json(r#"{ "stations": [{ "id": "A", "occupancy": "URGENT" }] }"#)
            .unwrap();
        match seed.build(NetworkConfig::default()).unwrap_err() {
            SeedError::Network(e) => assert_eq!(e.kind(), ErrorKind::InvalidParameter),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn occupancy_must_be_exact() {
        let seed = NetworkSeed::from_json(r#"{ "stations": [{ "id": "A", "occupancy": "medium" }] }"#)
            .unwrap();
        match seed.build(NetworkConfig::default()).unwrap_err() {
            SeedError::Network(e) => assert_eq!(e.kind(), ErrorKind::InvalidParameter),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reject_invalid_network() {
        let seed = NetworkSeed::from_json(r#"{ "routes": [{ "code": "R", "stops": ["A"] }] }"#)
            .unwrap();
        let err = seed.build(NetworkConfig::default()).unwrap_err();
        assert!(matches!(err, SeedError::Network(_)));
        assert_eq!(
            err.to_string(),
            "invalid network: route R has 1 stops, at least 2 are required"
        );
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let seed = NetworkSeed::from_path(file.path()).unwrap();
        assert_eq!(seed.trunks.len(), 1);
        assert_eq!(seed.trunks[0].segments.len(), 2);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = NetworkSeed::from_path(&path).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
