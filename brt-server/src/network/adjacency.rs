//! Adjacency index between stations.
//!
//! The index is built as routes and trunks are registered. It records which
//! stations follow each other on some route and how long the hop takes.
//! Nothing in the network traverses it; it is kept for inspection.

use std::collections::HashMap;

use crate::domain::{RouteCode, StationId};

/// A hop from one station to a neighbouring one on a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// The neighbouring station.
    pub to: StationId,
    /// Estimated travel time in minutes.
    pub minutes: f64,
    /// The route that makes the hop.
    pub route: RouteCode,
}

/// Map from station to its outgoing edges.
///
/// Edges are symmetric: connecting A to B also connects B to A with the same
/// travel time and route.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    edges: HashMap<StationId, Vec<Edge>>,
}

impl Adjacency {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a station has an entry, even with no edges.
    pub fn add_station(&mut self, station: StationId) {
        self.edges.entry(station).or_default();
    }

    /// Connect two stations in both directions.
    ///
    /// If the pair is already connected by the same route, the travel time
    /// is replaced rather than a second edge added.
    pub fn connect(&mut self, a: &StationId, b: &StationId, minutes: f64, route: &RouteCode) {
        self.upsert(a, b, minutes, route);
        self.upsert(b, a, minutes, route);
    }

    fn upsert(&mut self, from: &StationId, to: &StationId, minutes: f64, route: &RouteCode) {
        let edges = self.edges.entry(from.clone()).or_default();
        match edges.iter_mut().find(|e| &e.to == to && &e.route == route) {
            Some(edge) => edge.minutes = minutes,
            None => edges.push(Edge {
                to: to.clone(),
                minutes,
                route: route.clone(),
            }),
        }
    }

    /// Get the edges leaving a station.
    pub fn neighbors(&self, station: &str) -> &[Edge] {
        self.edges
            .get(station)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Check if a station has an entry in the index.
    pub fn contains_station(&self, station: &str) -> bool {
        self.edges.contains_key(station)
    }

    /// Returns the number of stations with an entry.
    pub fn station_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|v| v.len()).sum()
    }
}
