use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use spbmetro_lib::{embedded_map, plan_route, MetroMap, RouteAlgorithm, RouteRequest};
use std::hint::black_box;

static MAP: Lazy<MetroMap> = Lazy::new(|| embedded_map().expect("embedded map parses"));
static BFS_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::new("Девяткино", "Купчино").with_algorithm(RouteAlgorithm::Bfs)
});
static DIJKSTRA_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new("Девяткино", "Купчино"));
static DENSE_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::new("Девяткино", "Купчино").with_algorithm(RouteAlgorithm::Dense)
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let map = &*MAP;

    c.bench_function("bfs_devyatkino_kupchino", |b| {
        let request = &*BFS_REQUEST;
        b.iter(|| {
            let plan = plan_route(map, request).expect("route exists");
            black_box(plan.stop_count())
        });
    });

    c.bench_function("dijkstra_devyatkino_kupchino", |b| {
        let request = &*DIJKSTRA_REQUEST;
        b.iter(|| {
            let plan = plan_route(map, request).expect("route exists");
            black_box((plan.total_minutes, plan.transfers))
        });
    });

    c.bench_function("dense_devyatkino_kupchino", |b| {
        let request = &*DENSE_REQUEST;
        b.iter(|| {
            let plan = plan_route(map, request).expect("route exists");
            black_box(plan.steps.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
