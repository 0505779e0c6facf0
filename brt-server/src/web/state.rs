//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::TransitNetwork;

/// The network shared between request handlers.
///
/// Queries take a read lock. The only writes after startup are occupancy
/// updates.
pub type SharedNetwork = Arc<RwLock<TransitNetwork>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The transit network being served
    pub network: SharedNetwork,
}

impl AppState {
    /// Create a new app state around a fully built network.
    pub fn new(network: TransitNetwork) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
        }
    }
}
