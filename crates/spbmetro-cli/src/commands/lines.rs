//! Lines command handler for listing metro lines.

use std::path::Path;

use anyhow::{Context, Result};

use spbmetro_lib::{ensure_map, LineReport, MetroMap};

use crate::output::{render_json, OutputFormat};

/// Handle the lines subcommand.
///
/// Lists every line with its number, name, colour, and station count.
/// Formats other than `json` render the text listing.
pub fn handle_lines_command(map_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let map = ensure_map(map_path).context("failed to load the metro map")?;
    let lines = collect_lines(&map);

    if format.is_machine_readable() {
        return render_json(&lines).context("failed to render line listing");
    }

    println!("Lines ({}):", lines.len());
    for line in &lines {
        println!(
            " {}. {} [{}] {} stations",
            line.number, line.name, line.color, line.stations
        );
    }
    Ok(())
}

fn collect_lines(map: &MetroMap) -> Vec<LineReport> {
    let mut lines: Vec<LineReport> = map
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
    lines.sort_by_key(|line| line.number);
    lines
}
