//! Fluent builder for transit networks.

use crate::domain::{NetworkError, OccupancyLevel, Route, Station, StationId, TrunkCorridor, WaitTimes};
use crate::network::{NetworkConfig, TransitNetwork};

/// A trunk segment: two adjacent stations and the distance between them.
pub type Segment<'a> = (&'a str, &'a str, f64);

/// Builder for creating transit networks.
///
/// Items can be added in any order. [`build`](Self::build) registers
/// stations first, then routes, then trunks, and stops at the first error.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    config: NetworkConfig,
    stations: Vec<(String, WaitTimes, OccupancyLevel)>,
    routes: Vec<(String, Vec<String>)>,
    trunks: Vec<TrunkEntry>,
}

#[derive(Debug)]
struct TrunkEntry {
    name: String,
    cruise_speed: f64,
    stops: Vec<String>,
    segments: Vec<(String, String, f64)>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given network configuration.
    pub fn config(mut self, config: NetworkConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a station with default wait times.
    pub fn station(self, id: &str) -> Self {
        self.station_with(id, WaitTimes::default(), OccupancyLevel::default())
    }

    /// Add a station with custom wait times and starting occupancy.
    pub fn station_with(mut self, id: &str, wait_times: WaitTimes, occupancy: OccupancyLevel) -> Self {
        self.stations.push((id.to_string(), wait_times, occupancy));
        self
    }

    /// Add a route.
    pub fn route(mut self, code: &str, stops: &[&str]) -> Self {
        self.routes.push((
            code.to_string(),
            stops.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Add a trunk whose stations are taken from its segments, in order.
    ///
    /// Segments must chain: each one starts where the previous one ended.
    pub fn trunk(mut self, name: &str, cruise_speed: f64, segments: &[Segment<'_>]) -> Self {
        let mut stops: Vec<String> = Vec::with_capacity(segments.len() + 1);
        for (from, to, _) in segments {
            if stops.last().map(String::as_str) != Some(*from) {
                stops.push(from.to_string());
            }
            stops.push(to.to_string());
        }

        self.trunks.push(TrunkEntry {
            name: name.to_string(),
            cruise_speed,
            stops,
            segments: segments
                .iter()
                .map(|(a, b, d)| (a.to_string(), b.to_string(), *d))
                .collect(),
        });
        self
    }

    /// Add a trunk with an explicit station list and segment table.
    pub fn trunk_with_stops(
        mut self,
        name: &str,
        cruise_speed: f64,
        stops: &[&str],
        segments: &[Segment<'_>],
    ) -> Self {
        self.trunks.push(TrunkEntry {
            name: name.to_string(),
            cruise_speed,
            stops: stops.iter().map(|s| s.to_string()).collect(),
            segments: segments
                .iter()
                .map(|(a, b, d)| (a.to_string(), b.to_string(), *d))
                .collect(),
        });
        self
    }

    /// Build the network.
    pub fn build(self) -> Result<TransitNetwork, NetworkError> {
        let mut network = TransitNetwork::with_config(self.config);

        for (id, wait_times, occupancy) in self.stations {
            let mut station = Station::with_wait_times(&id, wait_times)?;
            station.set_occupancy(occupancy);
            network.register_station(station)?;
        }

        for (code, stops) in self.routes {
            let stops = stops
                .iter()
                .map(|s| StationId::new(s))
                .collect::<Result<Vec<_>, _>>()?;
            network.register_route(Route::new(&code, stops)?)?;
        }

        for entry in self.trunks {
            let mut trunk = TrunkCorridor::new(&entry.name, entry.cruise_speed)?;
            for stop in &entry.stops {
                trunk.add_station(StationId::new(stop)?);
            }
            for (from, to, distance) in &entry.segments {
                trunk.add_segment(StationId::new(from)?, StationId::new(to)?, *distance)?;
            }
            network.register_trunk(trunk)?;
        }

        Ok(network)
    }
}
