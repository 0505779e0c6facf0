//! Trunk corridors: physical infrastructure with real distances.

use std::collections::HashMap;

use super::{EntityKind, NetworkError, StationId};

/// A trunk corridor.
///
/// A trunk has an ordered list of stations, a table of distances between
/// adjacent stations, and a cruising speed in distance units per minute.
/// Segments are symmetric: the distance from A to B is the distance from
/// B to A.
#[derive(Debug, Clone)]
pub struct TrunkCorridor {
    name: String,
    cruise_speed: f64,
    stops: Vec<StationId>,
    /// Map from (from, to) to distance. Stored in both directions for O(1)
    /// lookup.
    segments: HashMap<(StationId, StationId), f64>,
}

impl TrunkCorridor {
    /// Create an empty trunk.
    ///
    /// The name is trimmed and must be non-empty. The speed must be a
    /// finite, positive number.
    pub fn new(name: &str, cruise_speed: f64) -> Result<Self, NetworkError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NetworkError::EmptyName(EntityKind::Trunk));
        }
        if !cruise_speed.is_finite() || cruise_speed <= 0.0 {
            return Err(NetworkError::InvalidParameter {
                parameter: "cruise speed",
                value: cruise_speed.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            cruise_speed,
            stops: Vec::new(),
            segments: HashMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cruise_speed(&self) -> f64 {
        self.cruise_speed
    }

    /// Returns the trunk's stations in corridor order.
    pub fn stops(&self) -> &[StationId] {
        &self.stops
    }

    /// Append a station to the corridor.
    pub fn add_station(&mut self, station: StationId) {
        self.stops.push(station);
    }

    /// Add a segment between two stations.
    ///
    /// The segment is stored symmetrically. Adding a segment that already
    /// exists replaces its distance.
    pub fn add_segment(
        &mut self,
        from: StationId,
        to: StationId,
        distance: f64,
    ) -> Result<(), NetworkError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(NetworkError::InvalidParameter {
                parameter: "segment distance",
                value: distance.to_string(),
            });
        }
        self.segments.insert((from.clone(), to.clone()), distance);
        self.segments.insert((to, from), distance);
        Ok(())
    }

    /// Get the distance between two stations, if they share a segment.
    pub fn distance_between(&self, from: &StationId, to: &StationId) -> Option<f64> {
        self.segments.get(&(from.clone(), to.clone())).copied()
    }

    /// Check if the trunk has a segment between two stations.
    pub fn has_segment(&self, from: &StationId, to: &StationId) -> bool {
        self.distance_between(from, to).is_some()
    }

    /// Travel time in minutes between two stations on the same segment.
    pub fn travel_time(&self, from: &StationId, to: &StationId) -> Result<f64, NetworkError> {
        let distance =
            self.distance_between(from, to)
                .ok_or_else(|| NetworkError::SegmentNotFound {
                    trunk: self.name.clone(),
                    from: from.clone(),
                    to: to.clone(),
                })?;
        Ok(distance / self.cruise_speed)
    }

    /// Returns the number of segments (counting A→B and B→A as one).
    pub fn segment_count(&self) -> usize {
        let loops = self.segments.keys().filter(|(a, b)| a == b).count();
        (self.segments.len() - loops) / 2 + loops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StationId {
        StationId::new(s).unwrap()
    }

    fn caracas() -> TrunkCorridor {
        let mut trunk = TrunkCorridor::new("Caracas", 500.0).unwrap();
        for s in ["Calle 76", "Calle 72", "Flores"] {
            trunk.add_station(id(s));
        }
        trunk
            .add_segment(id("Calle 76"), id("Calle 72"), 1000.0)
            .unwrap();
        trunk.add_segment(id("Calle 72"), id("Flores"), 750.0).unwrap();
        trunk
    }

    #[test]
    fn reject_bad_construction() {
        assert_eq!(
            TrunkCorridor::new(" ", 10.0).unwrap_err(),
            NetworkError::EmptyName(EntityKind::Trunk)
        );
        assert!(TrunkCorridor::new("T", 0.0).is_err());
        assert!(TrunkCorridor::new("T", -3.0).is_err());
        assert!(TrunkCorridor::new("T", f64::NAN).is_err());
        assert!(TrunkCorridor::new("T", f64::INFINITY).is_err());
    }

    #[test]
    fn stations_keep_order() {
        let trunk = caracas();
        assert_eq!(trunk.name(), "Caracas");
        assert_eq!(trunk.stops(), &[id("Calle 76"), id("Calle 72"), id("Flores")]);
    }

    #[test]
    fn segments_are_symmetric() {
        let trunk = caracas();
        assert_eq!(
            trunk.distance_between(&id("Calle 76"), &id("Calle 72")),
            Some(1000.0)
        );
        assert_eq!(
            trunk.distance_between(&id("Calle 72"), &id("Calle 76")),
            Some(1000.0)
        );
        assert_eq!(trunk.segment_count(), 2);
    }

    #[test]
    fn missing_segment_is_none() {
        let trunk = caracas();
        // Not adjacent, so no segment even though both are on the trunk
        assert_eq!(trunk.distance_between(&id("Calle 76"), &id("Flores")), None);
        assert!(!trunk.has_segment(&id("Calle 76"), &id("Flores")));
    }

    #[test]
    fn travel_time_divides_by_speed() {
        let trunk = caracas();
        assert_eq!(trunk.travel_time(&id("Calle 76"), &id("Calle 72")), Ok(2.0));
        assert_eq!(trunk.travel_time(&id("Flores"), &id("Calle 72")), Ok(1.5));
    }

    #[test]
    fn travel_time_without_segment_fails() {
        let trunk = caracas();
        assert_eq!(
            trunk.travel_time(&id("Calle 76"), &id("Flores")),
            Err(NetworkError::SegmentNotFound {
                trunk: "Caracas".into(),
                from: id("Calle 76"),
                to: id("Flores"),
            })
        );
    }

    #[test]
    fn reject_bad_distance() {
        let mut trunk = caracas();
        assert!(trunk.add_segment(id("A"), id("B"), -1.0).is_err());
        assert!(trunk.add_segment(id("A"), id("B"), f64::NAN).is_err());
        assert!(!trunk.has_segment(&id("A"), &id("B")));
    }

    #[test]
    fn replacing_segment_updates_both_directions() {
        let mut trunk = caracas();
        trunk
            .add_segment(id("Calle 72"), id("Calle 76"), 250.0)
            .unwrap();
        assert_eq!(
            trunk.distance_between(&id("Calle 76"), &id("Calle 72")),
            Some(250.0)
        );
        assert_eq!(trunk.segment_count(), 2);
    }
}
