//! Ranking for direct-route results.

use std::cmp::Ordering;

use crate::domain::RouteCode;

/// A route that serves both ends of a query, with its stop count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRoute {
    pub code: RouteCode,
    /// Stations strictly between origin and destination.
    pub intermediate_stops: usize,
}

/// Result of a direct-route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectRoutes {
    /// Routes ranked best-first.
    pub routes: Vec<RankedRoute>,

    /// Number of candidate routes dropped because their stop count could
    /// not be computed.
    pub skipped: usize,
}

impl DirectRoutes {
    /// Returns the route codes in rank order.
    pub fn codes(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.code.as_str()).collect()
    }
}

/// Rank routes by preference.
///
/// Routes are ranked by:
/// 1. Intermediate stops (fewer is better)
/// 2. Route code (alphabetical)
///
/// Returns routes sorted best-first.
pub fn rank_routes(mut routes: Vec<RankedRoute>) -> Vec<RankedRoute> {
    routes.sort_by(|a, b| {
        let stops_cmp = a.intermediate_stops.cmp(&b.intermediate_stops);
        if stops_cmp != Ordering::Equal {
            return stops_cmp;
        }

        a.code.cmp(&b.code)
    });

    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(code: &str, stops: usize) -> RankedRoute {
        RankedRoute {
            code: RouteCode::new(code).unwrap(),
            intermediate_stops: stops,
        }
    }

    fn codes(routes: &[RankedRoute]) -> Vec<&str> {
        routes.iter().map(|r| r.code.as_str()).collect()
    }

    #[test]
    fn empty() {
        assert!(rank_routes(vec![]).is_empty());
    }

    #[test]
    fn fewer_stops_first() {
        let result = rank_routes(vec![ranked("R1", 2), ranked("R2", 1)]);
        assert_eq!(codes(&result), vec!["R2", "R1"]);
    }

    #[test]
    fn ties_break_alphabetically() {
        let result = rank_routes(vec![
            ranked("K10", 3),
            ranked("B74", 3),
            ranked("G43", 0),
            ranked("D20", 3),
        ]);
        assert_eq!(codes(&result), vec!["G43", "B74", "D20", "K10"]);
    }

    #[test]
    fn direct_routes_codes() {
        let direct = DirectRoutes {
            routes: vec![ranked("R2", 1), ranked("R1", 2)],
            skipped: 0,
        };
        assert_eq!(direct.codes(), vec!["R2", "R1"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn routes() -> impl Strategy<Value = Vec<RankedRoute>> {
        prop::collection::btree_map("[A-Z][0-9]{1,2}", 0usize..20, 0..15).prop_map(|m| {
            m.into_iter()
                .map(|(code, stops)| RankedRoute {
                    code: RouteCode::new(&code).unwrap(),
                    intermediate_stops: stops,
                })
                .collect()
        })
    }

    proptest! {
        /// Output is ordered by (stops, code) and is a permutation of the input.
        #[test]
        fn ordered_by_stops_then_code(input in routes()) {
            let ranked = rank_routes(input.clone());
            prop_assert_eq!(ranked.len(), input.len());
            for pair in ranked.windows(2) {
                let key_a = (pair[0].intermediate_stops, &pair[0].code);
                let key_b = (pair[1].intermediate_stops, &pair[1].code);
                prop_assert!(key_a < key_b);
            }
        }

        /// Input order does not affect the result.
        #[test]
        fn deterministic(input in routes().prop_shuffle()) {
            let mut sorted_input = input.clone();
            sorted_input.sort_by(|a, b| a.code.cmp(&b.code));
            prop_assert_eq!(rank_routes(input), rank_routes(sorted_input));
        }
    }
}
