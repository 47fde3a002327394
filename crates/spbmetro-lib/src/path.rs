use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::time::Instant;

use tracing::debug;

use crate::graph::{RouteGraph, TravelMatrix, UNREACHABLE};
use crate::map::StationId;

/// Constraints applied during pathfinding.
#[derive(Debug, Default, Clone)]
pub struct SearchConstraints {
    /// Set of station identifiers that must not appear in the resulting path.
    pub avoided_stations: HashSet<StationId>,
}

impl SearchConstraints {
    fn allows(&self, station: StationId) -> bool {
        !self.avoided_stations.contains(&station)
    }
}

/// Distances and predecessor links produced by a shortest-path search.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// Travel minutes from the start station, [`UNREACHABLE`] when unvisited.
    pub dist: Vec<u32>,
    /// Predecessor of each station on its cheapest known path.
    pub prev: Vec<Option<StationId>>,
}

impl ShortestPaths {
    /// Travel minutes to `station`, if the search reached it.
    pub fn minutes_to(&self, station: StationId) -> Option<u32> {
        self.dist
            .get(station)
            .copied()
            .filter(|&minutes| minutes < UNREACHABLE)
    }
}

/// Find a route between `start` and `goal` using breadth-first search without
/// additional constraints.
pub fn find_route(graph: &RouteGraph, start: StationId, goal: StationId) -> Option<Vec<StationId>> {
    let constraints = SearchConstraints::default();
    find_route_bfs(graph, start, goal, &constraints)
}

/// Run breadth-first search with optional constraints.
///
/// Returns the route with the fewest stops, ignoring travel minutes.
pub fn find_route_bfs(
    graph: &RouteGraph,
    start: StationId,
    goal: StationId,
    constraints: &SearchConstraints,
) -> Option<Vec<StationId>> {
    if start == goal {
        return Some(vec![start]);
    }

    let started = Instant::now();
    let mut visited = vec![false; graph.len()];
    let mut prev: Vec<Option<StationId>> = vec![None; graph.len()];
    let mut queue = VecDeque::new();
    let mut iterations = 0usize;

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        iterations += 1;
        for link in graph.neighbours(current) {
            let next = link.target;
            if visited[next] || !constraints.allows(next) {
                continue;
            }

            visited[next] = true;
            prev[next] = Some(current);
            if next == goal {
                debug!(
                    iterations,
                    elapsed_us = started.elapsed().as_micros() as u64,
                    "bfs reached goal"
                );
                return walk_prev(&prev, start, goal);
            }
            queue.push_back(next);
        }
    }

    debug!(
        iterations,
        elapsed_us = started.elapsed().as_micros() as u64,
        "bfs found no route"
    );
    None
}

/// Run Dijkstra's algorithm over adjacency lists with a binary heap.
///
/// Settles stations in cost order and stops early once `goal` is settled.
/// Distances for stations the search never reached stay at [`UNREACHABLE`].
pub fn shortest_paths(
    graph: &RouteGraph,
    start: StationId,
    goal: StationId,
    constraints: &SearchConstraints,
) -> ShortestPaths {
    let started = Instant::now();
    let mut dist = vec![UNREACHABLE; graph.len()];
    let mut prev: Vec<Option<StationId>> = vec![None; graph.len()];
    let mut queue = BinaryHeap::new();
    let mut iterations = 0usize;

    dist[start] = 0;
    queue.push(QueueEntry {
        station: start,
        minutes: 0,
    });

    while let Some(entry) = queue.pop() {
        iterations += 1;
        if entry.minutes > dist[entry.station] {
            continue; // stale heap entry
        }
        if entry.station == goal {
            break;
        }

        for link in graph.neighbours(entry.station) {
            let next = link.target;
            if !constraints.allows(next) {
                continue;
            }

            let candidate = entry.minutes + link.minutes;
            if candidate < dist[next] {
                dist[next] = candidate;
                prev[next] = Some(entry.station);
                queue.push(QueueEntry {
                    station: next,
                    minutes: candidate,
                });
            }
        }
    }

    debug!(
        iterations,
        elapsed_us = started.elapsed().as_micros() as u64,
        "dijkstra search finished"
    );
    ShortestPaths { dist, prev }
}

/// Run the dense Dijkstra variant over the travel-time matrix.
///
/// Scans for the cheapest unvisited station each round, so the whole search
/// stays O(V²) regardless of how many links the network has.
pub fn shortest_paths_dense(
    matrix: &TravelMatrix,
    start: StationId,
    goal: StationId,
    constraints: &SearchConstraints,
) -> ShortestPaths {
    let started = Instant::now();
    let size = matrix.len();
    let mut dist = vec![UNREACHABLE; size];
    let mut prev: Vec<Option<StationId>> = vec![None; size];
    let mut visited = vec![false; size];
    let mut iterations = 0usize;

    dist[start] = 0;

    for _ in 0..size {
        let mut current: Option<StationId> = None;
        for station in 0..size {
            if visited[station] || !constraints.allows(station) {
                continue;
            }
            if current.map_or(true, |best| dist[station] < dist[best]) {
                current = Some(station);
            }
        }

        let Some(current) = current else { break };
        if dist[current] >= UNREACHABLE || current == goal {
            break;
        }

        visited[current] = true;
        iterations += 1;

        for next in 0..size {
            if visited[next] || !constraints.allows(next) {
                continue;
            }
            let direct = matrix.minutes(current, next);
            if direct == UNREACHABLE {
                continue;
            }

            let candidate = dist[current] + direct;
            if candidate < dist[next] {
                dist[next] = candidate;
                prev[next] = Some(current);
            }
        }
    }

    debug!(
        iterations,
        elapsed_us = started.elapsed().as_micros() as u64,
        "dense dijkstra search finished"
    );
    ShortestPaths { dist, prev }
}

/// Rebuild the station sequence recorded in `paths`, start to goal.
///
/// Returns `None` when the search never reached the goal.
pub fn reconstruct_path(
    paths: &ShortestPaths,
    start: StationId,
    goal: StationId,
) -> Option<Vec<StationId>> {
    paths.minutes_to(goal)?;
    walk_prev(&paths.prev, start, goal)
}

fn walk_prev(
    prev: &[Option<StationId>],
    start: StationId,
    goal: StationId,
) -> Option<Vec<StationId>> {
    let mut path = Vec::new();
    let mut current = goal;
    loop {
        path.push(current);
        if current == start {
            break;
        }
        current = prev.get(current).copied().flatten()?;
    }
    path.reverse();
    Some(path)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    station: StationId,
    minutes: u32,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .minutes
            .cmp(&self.minutes)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
