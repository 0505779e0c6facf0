//! The transit network registry and its query engine.
//!
//! A [`TransitNetwork`] owns every station, route and trunk corridor. It is
//! populated in dependency order (stations, then routes, then trunks) and
//! then answers four queries:
//!
//! 1. the current wait at a station,
//! 2. all route codes in alphabetical order,
//! 3. the intermediate stop count between two stations on a route,
//! 4. the routes that connect two stations without a transfer, ranked by
//!    stop count and then by code.
//!
//! Registration validates everything before touching any index, so a
//! rejected call leaves the network exactly as it was.

mod adjacency;
mod config;
mod rank;


use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::domain::{EntityKind, NetworkError, Route, RouteCode, Station, StationId, TrunkCorridor};

pub use adjacency::{Adjacency, Edge};
pub use config::NetworkConfig;
pub use rank::{DirectRoutes, RankedRoute, rank_routes};

/// A bus-rapid-transit network.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    config: NetworkConfig,
    stations: HashMap<StationId, Station>,
    /// Ordered by code, so listing and scanning are deterministic.
    routes: BTreeMap<RouteCode, Route>,
    trunks: BTreeMap<String, TrunkCorridor>,
    adjacency: Adjacency,
}

impl TransitNetwork {
    /// Create an empty network with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty network with the given configuration.
    pub fn with_config(config: NetworkConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration the network was built with.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register a station.
    pub fn register_station(&mut self, station: Station) -> Result<(), NetworkError> {
        if self.stations.contains_key(station.id()) {
            return Err(NetworkError::DuplicateId {
                kind: EntityKind::Station,
                id: station.id().to_string(),
            });
        }

        debug!(station = %station.id(), "registering station");
        self.adjacency.add_station(station.id().clone());
        self.stations.insert(station.id().clone(), station);
        Ok(())
    }

    /// Register a route.
    ///
    /// Every consecutive pair of stops becomes an adjacency edge. Its travel
    /// time comes from the first trunk (by name) with a segment for the
    /// pair, or the configured default when no trunk covers it.
    pub fn register_route(&mut self, route: Route) -> Result<(), NetworkError> {
        if route.len() < 2 {
            return Err(NetworkError::InsufficientStops {
                route: route.code().clone(),
                count: route.len(),
            });
        }
        if self.routes.contains_key(route.code()) {
            return Err(NetworkError::DuplicateId {
                kind: EntityKind::Route,
                id: route.code().to_string(),
            });
        }

        for stop in route.stops() {
            if !self.stations.contains_key(stop) {
                warn!(route = %route.code(), station = %stop, "route references unregistered station");
            }
        }

        let hops: Vec<(StationId, StationId, f64)> = route
            .stops()
            .windows(2)
            .map(|pair| {
                let minutes = self.segment_minutes(&pair[0], &pair[1]);
                (pair[0].clone(), pair[1].clone(), minutes)
            })
            .collect();

        debug!(route = %route.code(), stops = route.len(), "registering route");
        for (from, to, minutes) in &hops {
            self.adjacency.connect(from, to, *minutes, route.code());
        }
        self.routes.insert(route.code().clone(), route);
        Ok(())
    }

    /// Register a trunk corridor.
    ///
    /// For every consecutive pair of trunk stations that has a segment, the
    /// first route (by code) serving both gets its edge time replaced with
    /// the trunk's real travel time.
    pub fn register_trunk(&mut self, trunk: TrunkCorridor) -> Result<(), NetworkError> {
        if self.trunks.contains_key(trunk.name()) {
            return Err(NetworkError::DuplicateId {
                kind: EntityKind::Trunk,
                id: trunk.name().to_string(),
            });
        }

        for stop in trunk.stops() {
            if !self.stations.contains_key(stop) {
                warn!(trunk = trunk.name(), station = %stop, "trunk references unregistered station");
            }
        }

        let mut hops: Vec<(StationId, StationId, f64, RouteCode)> = Vec::new();
        for pair in trunk.stops().windows(2) {
            let (from, to) = (&pair[0], &pair[1]);

            let minutes = match trunk.travel_time(from, to) {
                Ok(minutes) => minutes,
                Err(e) => {
                    debug!(trunk = trunk.name(), error = %e, "skipping trunk pair");
                    continue;
                }
            };

            let Some(route) = self
                .routes
                .values()
                .find(|r| r.connects(from.as_str(), to.as_str()))
            else {
                debug!(trunk = trunk.name(), %from, %to, "no route serves trunk pair");
                continue;
            };

            hops.push((from.clone(), to.clone(), minutes, route.code().clone()));
        }

        debug!(trunk = trunk.name(), edges = hops.len(), "registering trunk");
        for (from, to, minutes, route) in &hops {
            self.adjacency.connect(from, to, *minutes, route);
        }
        self.trunks.insert(trunk.name().to_string(), trunk);
        Ok(())
    }

    /// Travel time for a hop between two stations, using trunk data when
    /// available.
    fn segment_minutes(&self, from: &StationId, to: &StationId) -> f64 {
        self.trunks
            .values()
            .find_map(|t| t.travel_time(from, to).ok())
            .unwrap_or(self.config.default_segment_minutes)
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    /// Get a station by id.
    pub fn station(&self, id: &str) -> Result<&Station, NetworkError> {
        self.stations
            .get(id)
            .ok_or_else(|| NetworkError::StationNotFound(id.to_string()))
    }

    /// Get a route by code.
    pub fn route(&self, code: &str) -> Result<&Route, NetworkError> {
        self.routes
            .get(code)
            .ok_or_else(|| NetworkError::RouteNotFound(code.to_string()))
    }

    /// Get a trunk by name.
    pub fn trunk(&self, name: &str) -> Result<&TrunkCorridor, NetworkError> {
        self.trunks
            .get(name)
            .ok_or_else(|| NetworkError::TrunkNotFound(name.to_string()))
    }

    /// Get the adjacency edges leaving a station.
    pub fn neighbors(&self, station: &str) -> &[Edge] {
        self.adjacency.neighbors(station)
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn trunk_count(&self) -> usize {
        self.trunks.len()
    }

    // ------------------------------------------------------------------
    // Updates
    // ------------------------------------------------------------------

    /// Set a station's occupancy level from its name.
    ///
    /// Returns the new wait in minutes.
    pub fn set_occupancy(&mut self, station: &str, level: &str) -> Result<u32, NetworkError> {
        let station = self
            .stations
            .get_mut(station)
            .ok_or_else(|| NetworkError::StationNotFound(station.to_string()))?;
        station.set_occupancy_named(level)?;
        Ok(station.current_wait_minutes())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Current wait in minutes at a station.
    pub fn wait_time(&self, station: &str) -> Result<u32, NetworkError> {
        Ok(self.station(station)?.current_wait_minutes())
    }

    /// All route codes in ascending order.
    pub fn route_names(&self) -> Vec<String> {
        self.routes.keys().map(|c| c.to_string()).collect()
    }

    /// Number of stations strictly between `origin` and `destination` on a
    /// route.
    ///
    /// Fails with `StationNotFound` when an endpoint is unknown to the
    /// network, and with `RouteDoesNotConnect` when it is known but the
    /// route does not call there.
    pub fn stop_count(
        &self,
        route: &str,
        origin: &str,
        destination: &str,
    ) -> Result<usize, NetworkError> {
        let route = self.route(route)?;
        let origin = self.station(origin)?.id();
        let destination = self.station(destination)?.id();
        if origin == destination {
            return Err(NetworkError::EqualEndpoints(origin.clone()));
        }

        route.intermediate_stop_count(origin, destination)
    }

    /// Routes that serve both stations, ranked by intermediate stops and
    /// then by code.
    ///
    /// A route whose stop count cannot be computed is skipped and counted
    /// in [`DirectRoutes::skipped`]. An empty result is an error.
    pub fn direct_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DirectRoutes, NetworkError> {
        let origin = self.station(origin)?.id();
        let destination = self.station(destination)?.id();
        if origin == destination {
            return Err(NetworkError::EqualEndpoints(origin.clone()));
        }

        let mut candidates = Vec::new();
        let mut skipped = 0;

        for route in self.routes.values() {
            if !route.connects(origin.as_str(), destination.as_str()) {
                continue;
            }

            match route.intermediate_stop_count(origin, destination) {
                Ok(intermediate_stops) => candidates.push(RankedRoute {
                    code: route.code().clone(),
                    intermediate_stops,
                }),
                Err(e) => {
                    warn!(route = %route.code(), error = %e, "skipping direct route candidate");
                    skipped += 1;
                }
            }
        }

        if candidates.is_empty() {
            return Err(NetworkError::NoPathAvailable {
                origin: origin.clone(),
                destination: destination.clone(),
            });
        }

        Ok(DirectRoutes {
            routes: rank_routes(candidates),
            skipped,
        })
    }

    /// Travel time in minutes between two stations on a trunk segment.
    pub fn travel_time(&self, trunk: &str, from: &str, to: &str) -> Result<f64, NetworkError> {
        let trunk = self.trunk(trunk)?;
        let from = StationId::new(from)?;
        let to = StationId::new(to)?;
        trunk.travel_time(&from, &to)
    }
}
