//! SpbMetro library entry points.
//!
//! This crate exposes helpers to locate the metro map, load the network into
//! memory, build graph representations, and run pathfinding algorithms.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod map;
pub mod output;
pub mod path;
pub mod routing;
pub mod source;
pub mod stats;

pub use error::{Error, Result};
pub use graph::{build_graph, build_matrix, RouteGraph, TravelMatrix};
pub use map::{load_map, parse_map, Line, Link, MetroMap, Station, StationId};
pub use output::{RouteEndpoint, RouteStep, RouteSummary};
pub use path::find_route;
pub use routing::{plan_route, RouteAlgorithm, RouteConstraints, RoutePlan, RouteRequest};
pub use source::{embedded_map, ensure_map, MAP_ENV_VAR};
pub use stats::{LineReport, NetworkReport};
