use serde::Serialize;

use crate::error::{Error, Result};
use crate::map::{MetroMap, Station, StationId};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: StationId,
    pub name: String,
    pub line: u32,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: StationId,
    pub name: String,
    pub line: u32,
    /// Minutes of the link arriving at this step; `None` for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_minutes: Option<u32>,
    /// Marks a step reached by changing lines.
    pub transfer: bool,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub stops: usize,
    pub transfers: usize,
    pub total_minutes: u32,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary with resolved station names.
    pub fn from_plan(map: &MetroMap, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut previous: Option<(StationId, u32)> = None;
        for (index, &id) in plan.steps.iter().enumerate() {
            let station = resolve_step(map, id)?;
            steps.push(RouteStep {
                index,
                id,
                name: station.name.clone(),
                line: station.line,
                leg_minutes: previous.and_then(|(prev_id, _)| map.link_minutes(prev_id, id)),
                transfer: previous.map_or(false, |(_, prev_line)| prev_line != station.line),
            });
            previous = Some((id, station.line));
        }

        let first = steps.first().expect("validated non-empty steps");
        let last = steps.last().expect("validated non-empty steps");
        let start = RouteEndpoint {
            id: first.id,
            name: first.name.clone(),
            line: first.line,
        };
        let goal = RouteEndpoint {
            id: last.id,
            name: last.name.clone(),
            line: last.line,
        };

        Ok(Self {
            algorithm: plan.algorithm,
            stops: plan.stop_count(),
            transfers: plan.transfers,
            total_minutes: plan.total_minutes,
            start,
            goal,
            steps,
        })
    }
}

fn resolve_step(map: &MetroMap, id: StationId) -> Result<&Station> {
    map.station(id).ok_or_else(|| Error::InvalidMap {
        message: format!("route step references unknown station id {id}"),
    })
}
