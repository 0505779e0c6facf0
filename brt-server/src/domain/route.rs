//! Routes: named stop sequences with a position index.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use super::{Endpoint, EntityKind, NetworkError, StationId};

/// The code of a route (e.g. `B74`).
///
/// Codes are trimmed at construction and must be non-empty afterwards.
/// Ordering is lexicographic on the code string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteCode(String);

impl RouteCode {
    /// Create a route code, trimming surrounding whitespace.
    pub fn new(s: &str) -> Result<Self, NetworkError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(NetworkError::EmptyName(EntityKind::Route));
        }
        Ok(RouteCode(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteCode({})", self.0)
    }
}

impl fmt::Display for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A route: an ordered sequence of stations served without transfers.
///
/// The route keeps an inverse index from station to offset so membership
/// and position lookups are O(1). If a station appears more than once, the
/// index holds its last offset.
///
/// A route may hold any number of stops. The two-stop minimum applies only
/// when the route is registered into a network.
///
/// # Examples
///
/// ```
/// use brt_server::domain::{Route, StationId};
///
/// let stops = ["A", "B", "C", "D"].map(|s| StationId::new(s).unwrap());
/// let route = Route::new("R1", stops).unwrap();
///
/// let a = StationId::new("A").unwrap();
/// let d = StationId::new("D").unwrap();
/// assert_eq!(route.intermediate_stop_count(&a, &d).unwrap(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    code: RouteCode,
    stops: Vec<StationId>,
    positions: HashMap<StationId, usize>,
}

impl Route {
    /// Create a route from its code and full stop sequence.
    pub fn new(
        code: &str,
        stops: impl IntoIterator<Item = StationId>,
    ) -> Result<Self, NetworkError> {
        let code = RouteCode::new(code)?;
        let stops: Vec<StationId> = stops.into_iter().collect();

        let mut positions = HashMap::with_capacity(stops.len());
        for (idx, station) in stops.iter().enumerate() {
            positions.insert(station.clone(), idx);
        }

        Ok(Self {
            code,
            stops,
            positions,
        })
    }

    pub fn code(&self) -> &RouteCode {
        &self.code
    }

    /// Returns the stops in service order.
    pub fn stops(&self) -> &[StationId] {
        &self.stops
    }

    /// Returns the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Check if the route calls at a station.
    pub fn contains_station(&self, station: &str) -> bool {
        self.positions.contains_key(station)
    }

    /// Get the zero-based offset of a station, if the route calls there.
    pub fn position_of(&self, station: &str) -> Option<usize> {
        self.positions.get(station).copied()
    }

    /// Check if the route calls at both stations, in either order.
    pub fn connects(&self, origin: &str, destination: &str) -> bool {
        self.contains_station(origin) && self.contains_station(destination)
    }

    /// Number of stations strictly between `origin` and `destination`.
    ///
    /// The count is symmetric: direction of travel does not matter.
    pub fn intermediate_stop_count(
        &self,
        origin: &StationId,
        destination: &StationId,
    ) -> Result<usize, NetworkError> {
        if origin == destination {
            return Err(NetworkError::EqualEndpoints(origin.clone()));
        }

        let origin_pos = self.position_of(origin.as_str()).ok_or_else(|| {
            NetworkError::RouteDoesNotConnect {
                route: self.code.clone(),
                station: origin.clone(),
                endpoint: Endpoint::Origin,
            }
        })?;
        let destination_pos = self.position_of(destination.as_str()).ok_or_else(|| {
            NetworkError::RouteDoesNotConnect {
                route: self.code.clone(),
                station: destination.clone(),
                endpoint: Endpoint::Destination,
            }
        })?;

        let distance = origin_pos.abs_diff(destination_pos);
        if distance == 0 {
            return Err(NetworkError::InternalInconsistency(format!(
                "route {} indexes {} and {} at the same offset {}",
                self.code, origin, destination, origin_pos
            )));
        }

        Ok(distance - 1)
    }

    /// Overwrite an index entry without touching the stop list.
    #[cfg(test)]
    pub(crate) fn corrupt_position(&mut self, station: StationId, position: usize) {
        self.positions.insert(station, position);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Routes with 2..12 distinct stops.
    fn distinct_stops() -> impl Strategy<Value = Vec<String>> {
        prop::collection::hash_set("[A-Z][a-z]{0,5}", 2..12)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }

    fn build(stops: &[String]) -> Route {
        Route::new("R", stops.iter().map(|s| StationId::new(s).unwrap())).unwrap()
    }

    proptest! {
        /// Without repeats, positions are exactly 0..len.
        #[test]
        fn positions_are_bijection(stops in distinct_stops()) {
            let r = build(&stops);
            let positions: HashSet<usize> = stops
                .iter()
                .map(|s| r.position_of(s).unwrap())
                .collect();
            prop_assert_eq!(positions, (0..stops.len()).collect::<HashSet<_>>());
            for (idx, s) in stops.iter().enumerate() {
                prop_assert_eq!(r.position_of(s), Some(idx));
            }
        }

        /// Stop counts are the same in both directions.
        #[test]
        fn count_is_symmetric(stops in distinct_stops(), i in any::<prop::sample::Index>(), j in any::<prop::sample::Index>()) {
            let r = build(&stops);
            let a = StationId::new(&stops[i.index(stops.len())]).unwrap();
            let b = StationId::new(&stops[j.index(stops.len())]).unwrap();
            prop_assume!(a != b);

            let forward = r.intermediate_stop_count(&a, &b).unwrap();
            let backward = r.intermediate_stop_count(&b, &a).unwrap();
            prop_assert_eq!(forward, backward);
            prop_assert!(forward <= stops.len() - 2);
        }
    }
}
