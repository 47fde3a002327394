use std::sync::Arc;

use crate::map::{Link, MetroMap, StationId};

/// Sentinel travel time for unreachable matrix cells.
///
/// Half of `u32::MAX` so relaxation sums never overflow.
pub const UNREACHABLE: u32 = u32::MAX / 2;

/// Adjacency-list routing graph shared with the loaded map.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: Arc<Vec<Vec<Link>>>,
}

impl RouteGraph {
    /// Number of stations covered by the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph covers any stations at all.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Return the outgoing links for a given station.
    pub fn neighbours(&self, station: StationId) -> &[Link] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Build the adjacency-list routing graph for a loaded map.
pub fn build_graph(map: &MetroMap) -> RouteGraph {
    RouteGraph {
        adjacency: Arc::clone(&map.adjacency),
    }
}

/// Dense travel-time matrix used by the O(V²) search variant.
///
/// Cells hold minutes between directly linked stations, zero on the
/// diagonal, and [`UNREACHABLE`] everywhere else. Parallel links collapse to
/// the cheapest.
#[derive(Debug, Clone)]
pub struct TravelMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl TravelMatrix {
    /// Matrix dimension (station count).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers any stations at all.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Travel minutes between two stations, [`UNREACHABLE`] when no direct
    /// link exists.
    pub fn minutes(&self, from: StationId, to: StationId) -> u32 {
        self.cells[from * self.size + to]
    }

    /// Count of direct links over the upper triangle.
    pub fn connection_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.size {
            for col in (row + 1)..self.size {
                if self.minutes(row, col) != UNREACHABLE {
                    count += 1;
                }
            }
        }
        count
    }

    /// Longest direct link in the matrix, if any.
    pub fn max_minutes(&self) -> Option<u32> {
        self.cells
            .iter()
            .copied()
            .filter(|&cell| cell != UNREACHABLE && cell != 0)
            .max()
    }

    /// Number of cells holding the [`UNREACHABLE`] sentinel.
    pub fn unreachable_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == UNREACHABLE)
            .count()
    }
}

/// Build the dense travel-time matrix for a loaded map.
pub fn build_matrix(map: &MetroMap) -> TravelMatrix {
    let size = map.stations.len();
    let mut cells = vec![UNREACHABLE; size * size];

    for station in 0..size {
        cells[station * size + station] = 0;
    }

    for (from, links) in map.adjacency.iter().enumerate() {
        for link in links {
            let cell = &mut cells[from * size + link.target];
            if link.minutes < *cell {
                *cell = link.minutes;
            }
        }
    }

    TravelMatrix { size, cells }
}
