use std::path::PathBuf;

use spbmetro_lib::{embedded_map, load_map, MetroMap, NetworkReport};

fn fixture_map() -> MetroMap {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/mini_map.json");
    load_map(&path).expect("fixture loads")
}

#[test]
fn report_counts_match_fixture() {
    let map = fixture_map();
    let report = NetworkReport::for_map(&map);

    assert_eq!(report.stations, 8);
    assert_eq!(report.lines, 3);
    assert_eq!(report.connections, 7);
    assert_eq!(report.transfer_links, 1);
    assert_eq!(report.longest_link_minutes, 6);
    assert_eq!(report.matrix_dimension, 8);
    assert_eq!(report.unreachable_cells, 42);
}

#[test]
fn report_lists_lines_in_number_order() {
    let map = fixture_map();
    let report = NetworkReport::for_map(&map);

    let numbers: Vec<_> = report.lines_detail.iter().map(|line| line.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let first = &report.lines_detail[0];
    assert_eq!(first.name, "Severnaya");
    assert_eq!(first.color, "#C8102E");
    assert_eq!(first.stations, 3);
}

#[test]
fn report_serialises_for_json_output() {
    let map = fixture_map();
    let report = NetworkReport::for_map(&map);

    let value = serde_json::to_value(&report).expect("report serialises");
    assert_eq!(value["stations"], 8);
    assert_eq!(value["lines_detail"][2]["name"], "Rechnaya");
}

#[test]
fn embedded_network_report_is_consistent() {
    let map = embedded_map().expect("embedded map parses");
    let report = NetworkReport::for_map(&map);

    assert_eq!(report.stations, map.stations.len());
    assert_eq!(report.lines, 5);
    assert!(report.transfer_links >= report.lines - 1, "lines interconnect");
    assert!(report.longest_link_minutes >= 1);
}
