//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and implementations for the
//! supported algorithms (BFS, heap Dijkstra, dense Dijkstra). The strategy
//! pattern allows adding new algorithms without modifying the `plan_route`
//! orchestrator.

use crate::graph::{build_graph, build_matrix};
use crate::map::{MetroMap, StationId};
use crate::path::{
    find_route_bfs, reconstruct_path, shortest_paths, shortest_paths_dense, SearchConstraints,
};

use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
///
/// Each implementation encapsulates a specific pathfinding algorithm and the
/// network representation it runs against.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm against the loaded map.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(
        &self,
        map: &MetroMap,
        start: StationId,
        goal: StationId,
        constraints: &SearchConstraints,
    ) -> Option<Vec<StationId>>;
}

/// Breadth-first search planner for unweighted traversal.
///
/// BFS finds the path with the fewest stops but does not consider travel
/// minutes.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(
        &self,
        map: &MetroMap,
        start: StationId,
        goal: StationId,
        constraints: &SearchConstraints,
    ) -> Option<Vec<StationId>> {
        let graph = build_graph(map);
        find_route_bfs(&graph, start, goal, constraints)
    }
}

/// Dijkstra planner over adjacency lists.
///
/// Minimises travel minutes with a binary-heap queue; the graph is shared
/// with the map, so setup is free.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        map: &MetroMap,
        start: StationId,
        goal: StationId,
        constraints: &SearchConstraints,
    ) -> Option<Vec<StationId>> {
        let graph = build_graph(map);
        let paths = shortest_paths(&graph, start, goal, constraints);
        reconstruct_path(&paths, start, goal)
    }
}

/// Dijkstra planner over the dense travel-time matrix.
///
/// Builds the matrix on demand, trading setup cost for a scan whose running
/// time does not depend on link counts.
#[derive(Debug, Clone, Default)]
pub struct DensePlanner;

impl RoutePlanner for DensePlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dense
    }

    fn find_path(
        &self,
        map: &MetroMap,
        start: StationId,
        goal: StationId,
        constraints: &SearchConstraints,
    ) -> Option<Vec<StationId>> {
        let matrix = build_matrix(map);
        let paths = shortest_paths_dense(&matrix, start, goal, constraints);
        reconstruct_path(&paths, start, goal)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Bfs => Box::new(BfsPlanner),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::Dense => Box::new(DensePlanner),
    }
}
