use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Dense zero-based index of a station within the loaded network.
pub type StationId = usize;

/// A single metro station.
///
/// Interchange halls appear once per line they serve, so two stations may
/// share a name while carrying different identifiers and line numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub line: u32,
}

/// Display metadata for a metro line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: u32,
    pub name: String,
    pub color: String,
}

/// Direct connection to a neighbouring station, in whole minutes.
///
/// Transfers between lines are ordinary links whose endpoints lie on
/// different lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub target: StationId,
    pub minutes: u32,
}

/// In-memory representation of the metro network.
#[derive(Debug, Clone, Default)]
pub struct MetroMap {
    pub stations: Vec<Station>,
    pub lines: Vec<Line>,
    pub name_to_id: HashMap<String, StationId>,
    pub adjacency: Arc<Vec<Vec<Link>>>,
}

impl MetroMap {
    /// Lookup a station by identifier.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Lookup a station name by identifier.
    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.stations.get(id).map(|station| station.name.as_str())
    }

    /// Lookup a station identifier by its case-insensitive name.
    ///
    /// When several stations share a name the lowest identifier wins.
    pub fn station_id_by_name(&self, name: &str) -> Option<StationId> {
        self.name_to_id.get(&normalize_name(name)).copied()
    }

    /// Collect every station identifier sharing a name (case-insensitive).
    ///
    /// Avoiding an interchange hall by name must cover the station on each
    /// line it serves, not just the lowest identifier.
    pub fn station_ids_by_name(&self, name: &str) -> Vec<StationId> {
        let needle = normalize_name(name);
        self.stations
            .iter()
            .enumerate()
            .filter(|(_, station)| normalize_name(&station.name) == needle)
            .map(|(id, _)| id)
            .collect()
    }

    /// Lookup line metadata by its public number.
    pub fn line_by_number(&self, number: u32) -> Option<&Line> {
        self.lines.iter().find(|line| line.number == number)
    }

    /// Stations belonging to a line, in map order.
    pub fn stations_on_line(&self, number: u32) -> Result<Vec<(StationId, &Station)>> {
        if !self.lines.iter().any(|line| line.number == number) {
            return Err(Error::UnknownLine { number });
        }
        Ok(self
            .stations
            .iter()
            .enumerate()
            .filter(|(_, station)| station.line == number)
            .collect())
    }

    /// Number of stations on each line, in map order.
    pub fn line_station_counts(&self) -> Vec<(u32, usize)> {
        self.lines
            .iter()
            .map(|line| {
                let count = self
                    .stations
                    .iter()
                    .filter(|station| station.line == line.number)
                    .count();
                (line.number, count)
            })
            .collect()
    }

    /// Direct links leaving a station.
    pub fn links(&self, station: StationId) -> &[Link] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Minutes of the cheapest direct link between two stations, if any.
    pub fn link_minutes(&self, from: StationId, to: StationId) -> Option<u32> {
        self.adjacency
            .get(from)?
            .iter()
            .filter(|link| link.target == to)
            .map(|link| link.minutes)
            .min()
    }

    /// Return up to `limit` station names closest to `name`, best match first.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        const MIN_SIMILARITY: f64 = 0.7;

        let needle = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .stations
            .iter()
            .map(|station| {
                (
                    strsim::jaro_winkler(&needle, &normalize_name(&station.name)),
                    station.name.as_str(),
                )
            })
            .filter(|(score, _)| *score >= MIN_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut names: Vec<String> = Vec::new();
        for (_, candidate) in scored {
            if names.iter().any(|existing| existing == candidate) {
                continue;
            }
            names.push(candidate.to_string());
            if names.len() == limit {
                break;
            }
        }
        names
    }
}

#[derive(Debug, Deserialize)]
struct RawMap {
    lines: Vec<RawLine>,
    stations: Vec<Vec<String>>,
    connections: Vec<RawConnection>,
}

#[derive(Debug, Deserialize)]
struct RawLine {
    number: u32,
    name: String,
    color: String,
}

#[derive(Debug, Deserialize)]
struct RawConnection {
    from: usize,
    to: usize,
    weight: u32,
}

/// Load the metro map from a JSON file on disk.
pub fn load_map(path: &Path) -> Result<MetroMap> {
    if !path.exists() {
        return Err(Error::MapNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading metro map");
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

/// Parse a map document from its JSON text.
///
/// Station identifiers are assigned by position: the i-th `stations` array
/// belongs to the i-th `lines` entry, and identifiers increase sequentially
/// across all lines in document order. Connections are bidirectional; the
/// adjacency lists carry both directions, sorted and deduplicated per
/// station.
pub fn parse_map(json: &str) -> Result<MetroMap> {
    let raw: RawMap = serde_json::from_str(json)?;

    if raw.lines.len() != raw.stations.len() {
        return Err(Error::InvalidMap {
            message: format!(
                "lines and stations are misaligned: {} lines, {} station groups",
                raw.lines.len(),
                raw.stations.len()
            ),
        });
    }

    let mut seen_numbers = HashSet::new();
    for line in &raw.lines {
        if !seen_numbers.insert(line.number) {
            return Err(Error::InvalidMap {
                message: format!("duplicate line number: {}", line.number),
            });
        }
    }

    let mut stations = Vec::new();
    let mut lines = Vec::with_capacity(raw.lines.len());
    for (line, names) in raw.lines.into_iter().zip(raw.stations) {
        for name in names {
            stations.push(Station {
                name,
                line: line.number,
            });
        }
        lines.push(Line {
            number: line.number,
            name: line.name,
            color: line.color,
        });
    }

    if stations.is_empty() {
        return Err(Error::InvalidMap {
            message: "map contains no stations".to_string(),
        });
    }

    let mut adjacency: Vec<Vec<Link>> = vec![Vec::new(); stations.len()];
    for connection in &raw.connections {
        for endpoint in [connection.from, connection.to] {
            if endpoint >= stations.len() {
                return Err(Error::InvalidMap {
                    message: format!(
                        "connection endpoint {} out of range (network has {} stations)",
                        endpoint,
                        stations.len()
                    ),
                });
            }
        }
        if connection.weight == 0 {
            return Err(Error::InvalidMap {
                message: format!(
                    "connection between {} and {} has zero travel time",
                    connection.from, connection.to
                ),
            });
        }
        if connection.from == connection.to {
            return Err(Error::InvalidMap {
                message: format!("connection from station {} to itself", connection.from),
            });
        }

        adjacency[connection.from].push(Link {
            target: connection.to,
            minutes: connection.weight,
        });
        adjacency[connection.to].push(Link {
            target: connection.from,
            minutes: connection.weight,
        });
    }

    for links in &mut adjacency {
        links.sort_unstable_by_key(|link| (link.target, link.minutes));
        links.dedup();
    }

    let mut name_to_id = HashMap::new();
    for (id, station) in stations.iter().enumerate() {
        name_to_id.entry(normalize_name(&station.name)).or_insert(id);
    }

    debug!(
        stations = stations.len(),
        lines = lines.len(),
        connections = raw.connections.len(),
        "parsed metro map"
    );

    Ok(MetroMap {
        stations,
        lines,
        name_to_id,
        adjacency: Arc::new(adjacency),
    })
}

/// Normalize a station name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
