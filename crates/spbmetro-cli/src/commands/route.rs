//! Route command handler for computing paths between stations.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use spbmetro_lib::{
    ensure_map, plan_route, Error as RouteError, RouteAlgorithm, RouteConstraints, RouteRequest,
    RouteSummary,
};

use crate::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting station name.
    pub from: String,
    /// Destination station name.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithmArg,
    /// Stations to avoid.
    pub avoid: Vec<String>,
}

/// Algorithm choice exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RouteAlgorithmArg {
    /// Fewest stops, ignoring travel times.
    Bfs,
    /// Cheapest travel time over the adjacency lists.
    #[default]
    Dijkstra,
    /// Cheapest travel time over the dense travel matrix.
    Dense,
}

impl From<RouteAlgorithmArg> for RouteAlgorithm {
    fn from(value: RouteAlgorithmArg) -> Self {
        match value {
            RouteAlgorithmArg::Bfs => RouteAlgorithm::Bfs,
            RouteAlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            RouteAlgorithmArg::Dense => RouteAlgorithm::Dense,
        }
    }
}

impl RouteCommandArgs {
    /// Convert CLI args to a library `RouteRequest`.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            from: self.from.clone(),
            to: self.to.clone(),
            algorithm: self.algorithm.into(),
            constraints: RouteConstraints {
                avoid_stations: self.avoid.clone(),
            },
        }
    }
}

/// Handle the route subcommand.
///
/// Plans a route between two stations on the loaded network and renders
/// it in the selected output format.
pub fn handle_route_command(
    map_path: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let map = ensure_map(map_path).context("failed to load the metro map")?;

    let request = args.to_request();
    let plan = match plan_route(&map, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(&request, err)),
    };

    let summary = RouteSummary::from_plan(&map, &plan)
        .context("failed to build route summary for display")?;

    format
        .render_route_result(&summary)
        .context("failed to render route output")
}

fn handle_route_failure(request: &RouteRequest, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownStation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_station_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => anyhow::anyhow!(
            format_route_not_found_message(&start, &goal, &request.constraints)
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_station_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown station '{}'.", name);
    if !suggestions.is_empty() {
        let formatted = if suggestions.len() == 1 {
            let suggestion = suggestions.first().expect("len checked above");
            format!("Did you mean '{suggestion}'?")
        } else {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Did you mean one of: {}?", joined)
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

fn format_route_not_found_message(
    start: &str,
    goal: &str,
    constraints: &RouteConstraints,
) -> String {
    let mut message = format!("No route found between {} and {}.", start, goal);
    if constraints.avoid_stations.is_empty() {
        message.push_str(" The stations sit on disconnected parts of the network.");
    } else {
        message.push_str(" Try omitting some --avoid stations.");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_station_message_with_one_suggestion() {
        let message = format_unknown_station_message("Polyarnya", &["Polyarnaya".to_string()]);
        assert_eq!(
            message,
            "Unknown station 'Polyarnya'. Did you mean 'Polyarnaya'?"
        );
    }

    #[test]
    fn unknown_station_message_with_many_suggestions() {
        let message = format_unknown_station_message(
            "Ploshchad",
            &["Ploshchad Mira".to_string(), "Ploshchad Lenina".to_string()],
        );
        assert!(message.starts_with("Unknown station 'Ploshchad'."));
        assert!(message.contains("Did you mean one of: 'Ploshchad Mira', 'Ploshchad Lenina'?"));
    }

    #[test]
    fn unknown_station_message_without_suggestions() {
        let message = format_unknown_station_message("Xyz", &[]);
        assert_eq!(message, "Unknown station 'Xyz'.");
    }

    #[test]
    fn route_not_found_message_mentions_avoided_stations() {
        let constraints = RouteConstraints {
            avoid_stations: vec!["Ploshchad Mira".to_string()],
        };
        let message = format_route_not_found_message("A", "B", &constraints);
        assert!(message.contains("No route found between A and B."));
        assert!(message.contains("Try omitting some --avoid stations."));
    }

    #[test]
    fn route_not_found_message_without_constraints() {
        let message = format_route_not_found_message("A", "B", &RouteConstraints::default());
        assert!(message.contains("disconnected parts of the network"));
    }

    #[test]
    fn algorithm_args_map_to_library_algorithms() {
        assert_eq!(RouteAlgorithm::from(RouteAlgorithmArg::Bfs), RouteAlgorithm::Bfs);
        assert_eq!(
            RouteAlgorithm::from(RouteAlgorithmArg::Dijkstra),
            RouteAlgorithm::Dijkstra
        );
        assert_eq!(
            RouteAlgorithm::from(RouteAlgorithmArg::Dense),
            RouteAlgorithm::Dense
        );
    }

    #[test]
    fn request_carries_avoided_stations() {
        let args = RouteCommandArgs {
            from: "A".to_string(),
            to: "B".to_string(),
            algorithm: RouteAlgorithmArg::default(),
            avoid: vec!["C".to_string()],
        };
        let request = args.to_request();
        assert_eq!(request.from, "A");
        assert_eq!(request.to, "B");
        assert_eq!(request.algorithm, RouteAlgorithm::Dijkstra);
        assert_eq!(request.constraints.avoid_stations, vec!["C".to_string()]);
    }
}
