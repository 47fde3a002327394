//! Stations command handler for listing the network's stations.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use spbmetro_lib::{ensure_map, MetroMap};

use crate::output::{render_json, OutputFormat};

/// One line's slice of a station listing.
#[derive(Debug, Clone, Serialize)]
pub struct LineStations {
    /// Line number.
    pub number: u32,
    /// Line name.
    pub name: String,
    /// Display colour.
    pub color: String,
    /// Station names in file order.
    pub stations: Vec<String>,
}

/// Result of a station listing query.
#[derive(Debug, Clone, Serialize)]
pub struct StationListing {
    /// Number of stations listed.
    pub total: usize,
    /// Per-line groups, ordered by line number.
    pub lines: Vec<LineStations>,
}

/// Handle the stations subcommand.
///
/// Lists stations grouped by line, optionally restricted to a single line
/// number. Formats other than `json` render the text listing.
pub fn handle_stations_command(
    map_path: Option<&Path>,
    format: OutputFormat,
    line: Option<u32>,
) -> Result<()> {
    let map = ensure_map(map_path).context("failed to load the metro map")?;
    let listing = build_listing(&map, line).context("failed to build the station listing")?;

    if format.is_machine_readable() {
        return render_json(&listing).context("failed to render station listing");
    }

    render_listing_text(&listing);
    Ok(())
}

fn build_listing(map: &MetroMap, filter: Option<u32>) -> spbmetro_lib::Result<StationListing> {
    let numbers: Vec<u32> = match filter {
        Some(number) => vec![number],
        None => {
            let mut all: Vec<u32> = map.lines.iter().map(|line| line.number).collect();
            all.sort_unstable();
            all
        }
    };

    let mut total = 0usize;
    let mut lines = Vec::with_capacity(numbers.len());
    for number in numbers {
        let stations: Vec<String> = map
            .stations_on_line(number)?
            .into_iter()
            .map(|(_, station)| station.name.clone())
            .collect();
        total += stations.len();

        let line = map.line_by_number(number);
        lines.push(LineStations {
            number,
            name: line.map(|l| l.name.clone()).unwrap_or_default(),
            color: line.map(|l| l.color.clone()).unwrap_or_default(),
            stations,
        });
    }

    Ok(StationListing { total, lines })
}

fn render_listing_text(listing: &StationListing) {
    for line in &listing.lines {
        println!(
            "Line {} {} ({} stations):",
            line.number,
            line.name,
            line.stations.len()
        );
        for station in &line.stations {
            println!(" - {}", station);
        }
        println!();
    }
    println!("{} stations total", listing.total);
}

#[cfg(test)]
mod tests {
    use super::*;

    use spbmetro_lib::parse_map;

    const TWO_LINE_MAP: &str = r#"{
        "lines": [
            { "number": 2, "name": "South", "color": "#00F" },
            { "number": 1, "name": "North", "color": "#F00" }
        ],
        "stations": [
            ["Harbour", "Bridge"],
            ["Bridge", "Meadow", "Forest"]
        ],
        "connections": [
            { "from": 0, "to": 1, "weight": 3 },
            { "from": 2, "to": 3, "weight": 2 },
            { "from": 3, "to": 4, "weight": 2 },
            { "from": 1, "to": 3, "weight": 1 }
        ]
    }"#;

    #[test]
    fn listing_orders_groups_by_line_number() {
        let map = parse_map(TWO_LINE_MAP).expect("valid map");
        let listing = build_listing(&map, None).expect("listing");

        assert_eq!(listing.total, 5);
        let numbers: Vec<u32> = listing.lines.iter().map(|line| line.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(listing.lines[0].name, "North");
        assert_eq!(
            listing.lines[0].stations,
            vec!["Bridge", "Meadow", "Forest"]
        );
    }

    #[test]
    fn listing_filters_to_one_line() {
        let map = parse_map(TWO_LINE_MAP).expect("valid map");
        let listing = build_listing(&map, Some(2)).expect("listing");

        assert_eq!(listing.total, 2);
        assert_eq!(listing.lines.len(), 1);
        assert_eq!(listing.lines[0].color, "#00F");
        assert_eq!(listing.lines[0].stations, vec!["Harbour", "Bridge"]);
    }

    #[test]
    fn listing_rejects_unknown_line() {
        let map = parse_map(TWO_LINE_MAP).expect("valid map");
        let err = build_listing(&map, Some(9)).expect_err("unknown line");
        assert!(err.to_string().contains("unknown line"));
    }
}
