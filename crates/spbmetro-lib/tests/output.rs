use std::path::PathBuf;

use spbmetro_lib::{
    load_map, plan_route, MetroMap, RouteAlgorithm, RoutePlan, RouteRequest, RouteSummary,
};

fn fixture_map() -> MetroMap {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/mini_map.json");
    load_map(&path).expect("fixture loads")
}

#[test]
fn summary_rejects_empty_plans() {
    let map = fixture_map();
    let plan = RoutePlan {
        algorithm: RouteAlgorithm::Bfs,
        start: 0,
        goal: 0,
        steps: Vec::new(),
        total_minutes: 0,
        transfers: 0,
    };

    let err = RouteSummary::from_plan(&map, &plan).expect_err("empty plans are rejected");
    assert_eq!(format!("{err}"), "route plan was empty");
}

#[test]
fn summary_annotates_steps_with_legs_and_transfers() {
    let map = fixture_map();
    let request = RouteRequest::new("Polyarnaya", "Vostochnaya");
    let plan = plan_route(&map, &request).expect("route exists");
    let summary = RouteSummary::from_plan(&map, &plan).expect("summary builds");

    assert_eq!(summary.stops, 3);
    assert_eq!(summary.transfers, 1);
    assert_eq!(summary.total_minutes, 9);

    assert_eq!(summary.start.name, "Polyarnaya");
    assert_eq!(summary.start.line, 1);
    assert_eq!(summary.goal.name, "Vostochnaya");
    assert_eq!(summary.goal.line, 2);

    let legs: Vec<_> = summary.steps.iter().map(|step| step.leg_minutes).collect();
    assert_eq!(legs, vec![None, Some(3), Some(2), Some(4)]);

    let transfers: Vec<_> = summary.steps.iter().map(|step| step.transfer).collect();
    assert_eq!(transfers, vec![false, false, true, false]);

    let indices: Vec<_> = summary.steps.iter().map(|step| step.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn summary_serialises_stable_field_names() {
    let map = fixture_map();
    let request = RouteRequest::new("Polyarnaya", "Vostochnaya");
    let plan = plan_route(&map, &request).expect("route exists");
    let summary = RouteSummary::from_plan(&map, &plan).expect("summary builds");

    let value = serde_json::to_value(&summary).expect("summary serialises");
    assert_eq!(value["algorithm"], "dijkstra");
    assert_eq!(value["stops"], 3);
    assert_eq!(value["transfers"], 1);
    assert_eq!(value["total_minutes"], 9);
    assert_eq!(value["start"]["name"], "Polyarnaya");
    assert_eq!(value["goal"]["line"], 2);

    let steps = value["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 4);
    assert!(
        steps[0].get("leg_minutes").is_none(),
        "first step has no arriving leg"
    );
    assert_eq!(steps[2]["transfer"], true);
    assert_eq!(steps[2]["line"], 2);
}

#[test]
fn single_station_summary_has_no_legs() {
    let map = fixture_map();
    let request = RouteRequest::new("Pristan", "Pristan");
    let plan = plan_route(&map, &request).expect("trivial route exists");
    let summary = RouteSummary::from_plan(&map, &plan).expect("summary builds");

    assert_eq!(summary.stops, 0);
    assert_eq!(summary.steps.len(), 1);
    assert_eq!(summary.steps[0].leg_minutes, None);
    assert!(!summary.steps[0].transfer);
    assert_eq!(summary.start, summary.goal);
}
