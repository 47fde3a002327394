//! Route planning module for metro pathfinding.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (BFS, Dijkstra, dense Dijkstra)
//! - [`RouteConstraints`] - Constraints applied during route planning
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! The routing module uses the Strategy pattern via the [`RoutePlanner`] trait.
//! Each algorithm is encapsulated in its own planner struct, allowing new
//! algorithms to be added without modifying the core orchestration logic.
//!
//! # Example
//!
//! ```ignore
//! use spbmetro_lib::{ensure_map, plan_route, RouteRequest};
//!
//! let map = ensure_map(None)?;
//! let request = RouteRequest::new("Девяткино", "Купчино");
//! let plan = plan_route(&map, &request)?;
//! println!("Route: {} stops", plan.stop_count());
//! ```

mod planner;

pub use planner::{select_planner, BfsPlanner, DensePlanner, DijkstraPlanner, RoutePlanner};

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::map::{MetroMap, StationId};
use crate::path::SearchConstraints;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search (fewest stops, ignores travel minutes).
    Bfs,
    /// Dijkstra's algorithm over adjacency lists (fewest minutes).
    #[default]
    Dijkstra,
    /// Dijkstra's algorithm over the dense travel-time matrix.
    Dense,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::Dense => "dense",
        };
        f.write_str(value)
    }
}

/// Constraints applied during route planning.
#[derive(Debug, Clone, Default)]
pub struct RouteConstraints {
    /// Station names that must not appear in the planned route.
    pub avoid_stations: Vec<String>,
}

impl RouteConstraints {
    fn to_search_constraints(&self, avoided: HashSet<StationId>) -> SearchConstraints {
        SearchConstraints {
            avoided_stations: avoided,
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
    pub algorithm: RouteAlgorithm,
    pub constraints: RouteConstraints,
}

impl RouteRequest {
    /// Convenience constructor using the default algorithm and no constraints.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            algorithm: RouteAlgorithm::default(),
            constraints: RouteConstraints::default(),
        }
    }

    /// Switch the request to a specific algorithm.
    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: StationId,
    pub goal: StationId,
    pub steps: Vec<StationId>,
    pub total_minutes: u32,
    pub transfers: usize,
}

impl RoutePlan {
    /// Number of stops ridden along the route.
    pub fn stop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a station name to its identifier, with fuzzy suggestions on miss.
fn resolve_station(map: &MetroMap, name: &str) -> Result<StationId> {
    map.station_id_by_name(name).ok_or_else(|| {
        let suggestions = map.fuzzy_station_matches(name, 3);
        Error::UnknownStation {
            name: name.to_string(),
            suggestions,
        }
    })
}

/// Resolve avoided station names to the full set of matching identifiers.
///
/// A name shared by interchange halls on several lines avoids every one of
/// them.
fn resolve_avoided_stations(map: &MetroMap, avoided: &[String]) -> Result<HashSet<StationId>> {
    let mut resolved = HashSet::new();
    for name in avoided {
        let ids = map.station_ids_by_name(name);
        if ids.is_empty() {
            return Err(Error::UnknownStation {
                name: name.clone(),
                suggestions: map.fuzzy_station_matches(name, 3),
            });
        }
        resolved.extend(ids);
    }
    Ok(resolved)
}

/// Sum the cheapest link minutes over consecutive step pairs.
fn total_minutes(map: &MetroMap, steps: &[StationId]) -> u32 {
    steps
        .windows(2)
        .filter_map(|pair| map.link_minutes(pair[0], pair[1]))
        .sum()
}

/// Count the line changes along a step sequence.
fn count_transfers(map: &MetroMap, steps: &[StationId]) -> usize {
    steps
        .windows(2)
        .filter(|pair| match (map.station(pair[0]), map.station(pair[1])) {
            (Some(a), Some(b)) => a.line != b.line,
            _ => false,
        })
        .count()
}

/// Compute a route using the requested algorithm and constraints.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves station names to identifiers
/// 2. Resolves avoided names and rejects avoided endpoints
/// 3. Runs the selected planner strategy
/// 4. Derives total minutes and transfer counts from the step sequence
pub fn plan_route(map: &MetroMap, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = resolve_station(map, &request.from)?;
    let goal_id = resolve_station(map, &request.to)?;

    let avoided = resolve_avoided_stations(map, &request.constraints.avoid_stations)?;
    let constraints = request.constraints.to_search_constraints(avoided);

    if constraints.avoided_stations.contains(&start_id)
        || constraints.avoided_stations.contains(&goal_id)
    {
        return Err(Error::RouteNotFound {
            start: request.from.clone(),
            goal: request.to.clone(),
        });
    }

    let planner = select_planner(request);
    let steps = planner
        .find_path(map, start_id, goal_id, &constraints)
        .ok_or_else(|| Error::RouteNotFound {
            start: request.from.clone(),
            goal: request.to.clone(),
        })?;

    let plan = RoutePlan {
        algorithm: request.algorithm,
        start: start_id,
        goal: goal_id,
        total_minutes: total_minutes(map, &steps),
        transfers: count_transfers(map, &steps),
        steps,
    };

    debug!(
        algorithm = %plan.algorithm,
        stops = plan.stop_count(),
        minutes = plan.total_minutes,
        transfers = plan.transfers,
        "planned route"
    );

    Ok(plan)
}
