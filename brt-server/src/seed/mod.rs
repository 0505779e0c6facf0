//! Network ingestion.
//!
//! Networks are built either from a JSON seed document or from the
//! built-in demo data used when no seed file is configured.

mod builder;
mod file;

pub use builder::{NetworkBuilder, Segment};
pub use file::{NetworkSeed, RouteSeed, SeedError, SegmentSeed, StationSeed, TrunkSeed, WaitTimesSeed};

use crate::domain::NetworkError;
use crate::network::{NetworkConfig, TransitNetwork};

/// Create the built-in demo network.
///
/// A small slice of a BRT system: the north and Caracas trunks, the
/// Calle 80 trunk, and a handful of local and express routes over them.
/// Distances are approximate metres; speeds are metres per minute.
pub fn demo_network(config: NetworkConfig) -> Result<TransitNetwork, NetworkError> {
    NetworkBuilder::new()
        .config(config)
        .station("Portal Norte")
        .station("Toberín")
        .station("Calle 146")
        .station("Calle 100")
        .station("Calle 76")
        .station("Calle 72")
        .station("Calle 45")
        .station("Marly")
        .station("Calle 26")
        .station("Av. Jiménez")
        .station("Tercer Milenio")
        .station("Ricaurte")
        .station("Portal 80")
        .station("Minuto de Dios")
        .station("Avenida Boyacá")
        // Local: every stop on the north and Caracas trunks
        .route(
            "B13",
            &[
                "Portal Norte",
                "Toberín",
                "Calle 146",
                "Calle 100",
                "Calle 76",
                "Calle 72",
                "Calle 45",
                "Marly",
                "Calle 26",
                "Av. Jiménez",
            ],
        )
        // Express
        .route(
            "B74",
            &["Portal Norte", "Calle 100", "Calle 76", "Av. Jiménez"],
        )
        .route(
            "J72",
            &["Toberín", "Calle 72", "Calle 26", "Tercer Milenio"],
        )
        .route(
            "D20",
            &[
                "Portal 80",
                "Minuto de Dios",
                "Avenida Boyacá",
                "Calle 76",
                "Calle 72",
            ],
        )
        .route(
            "K10",
            &["Calle 26", "Av. Jiménez", "Tercer Milenio", "Ricaurte"],
        )
        .trunk(
            "Autonorte",
            450.0,
            &[
                ("Portal Norte", "Toberín", 1800.0),
                ("Toberín", "Calle 146", 1200.0),
                ("Calle 146", "Calle 100", 2600.0),
                ("Calle 100", "Calle 76", 1900.0),
            ],
        )
        .trunk(
            "Caracas",
            400.0,
            &[
                ("Calle 76", "Calle 72", 700.0),
                ("Calle 72", "Calle 45", 1600.0),
                ("Calle 45", "Marly", 900.0),
                ("Marly", "Calle 26", 1500.0),
                ("Calle 26", "Av. Jiménez", 1300.0),
                ("Av. Jiménez", "Tercer Milenio", 800.0),
                ("Tercer Milenio", "Ricaurte", 1400.0),
            ],
        )
        .trunk(
            "Calle 80",
            420.0,
            &[
                ("Portal 80", "Minuto de Dios", 2200.0),
                ("Minuto de Dios", "Avenida Boyacá", 1700.0),
                ("Avenida Boyacá", "Calle 76", 3000.0),
            ],
        )
        .build()
}
