//! Info command handler for summarising the loaded network.

use std::path::Path;

use anyhow::{Context, Result};

use spbmetro_lib::{ensure_map, NetworkReport};

use crate::output::{render_json, OutputFormat};

/// Handle the info subcommand.
///
/// Renders aggregate statistics of the loaded network, including the
/// dense travel matrix dimensions. Formats other than `json` render the
/// text report.
pub fn handle_info_command(map_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let map = ensure_map(map_path).context("failed to load the metro map")?;
    let report = NetworkReport::for_map(&map);

    if format.is_machine_readable() {
        return render_json(&report).context("failed to render network report");
    }

    println!("Network summary:");
    println!("  Stations:           {}", report.stations);
    println!("  Lines:              {}", report.lines);
    println!("  Connections:        {}", report.connections);
    println!("  Transfer links:     {}", report.transfer_links);
    println!("  Longest link:       {} min", report.longest_link_minutes);
    println!("  Matrix dimension:   {0} x {0}", report.matrix_dimension);
    println!("  Unreachable cells:  {}", report.unreachable_cells);
    println!();
    println!("Lines:");
    for line in &report.lines_detail {
        println!(
            "  {}. {} [{}] {} stations",
            line.number, line.name, line.color, line.stations
        );
    }
    Ok(())
}
