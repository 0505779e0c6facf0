//! Configuration for network construction.

/// Configuration parameters for a transit network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    /// Travel time assumed between consecutive route stops (minutes) when
    /// no trunk corridor has a real distance for the pair.
    pub default_segment_minutes: f64,
}

impl NetworkConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(default_segment_minutes: f64) -> Self {
        Self {
            default_segment_minutes,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            default_segment_minutes: 3.0,
        }
    }
}
