//! Bus-rapid-transit network server.
//!
//! Models stations, routes and trunk corridors, and answers four queries:
//! the wait at a station, all route codes, the stops between two stations
//! on a route, and the direct routes between two stations.

pub mod config;
pub mod domain;
pub mod network;
pub mod seed;
pub mod web;
