use serde::Serialize;

use crate::graph::{build_matrix, UNREACHABLE};
use crate::map::MetroMap;

/// Per-line slice of the network report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineReport {
    pub number: u32,
    pub name: String,
    pub color: String,
    pub stations: usize,
}

/// Aggregate statistics for a loaded network.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NetworkReport {
    pub stations: usize,
    pub lines: usize,
    pub connections: usize,
    pub transfer_links: usize,
    pub longest_link_minutes: u32,
    pub matrix_dimension: usize,
    pub unreachable_cells: usize,
    pub lines_detail: Vec<LineReport>,
}

impl NetworkReport {
    /// Gather statistics for a loaded map.
    pub fn for_map(map: &MetroMap) -> Self {
        let matrix = build_matrix(map);

        let mut transfer_links = 0usize;
        for from in 0..matrix.len() {
            for to in (from + 1)..matrix.len() {
                if matrix.minutes(from, to) == UNREACHABLE {
                    continue;
                }
                let crosses = match (map.station(from), map.station(to)) {
                    (Some(a), Some(b)) => a.line != b.line,
                    _ => false,
                };
                if crosses {
                    transfer_links += 1;
                }
            }
        }

        let mut lines_detail: Vec<LineReport> = map
            .lines
            .iter()
            .zip(map.line_station_counts())
            .map(|(line, (_, stations))| LineReport {
                number: line.number,
                name: line.name.clone(),
                color: line.color.clone(),
                stations,
            })
            .collect();
        lines_detail.sort_by_key(|line| line.number);

        Self {
            stations: map.stations.len(),
            lines: map.lines.len(),
            connections: matrix.connection_count(),
            transfer_links,
            longest_link_minutes: matrix.max_minutes().unwrap_or(0),
            matrix_dimension: matrix.len(),
            unreachable_cells: matrix.unreachable_cells(),
            lines_detail,
        }
    }
}
