use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fib_sssp::algorithm::{FibDijkstra, PointToPointAlgorithm};
use fib_sssp::graph::DirectedGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Function to generate a random directed graph with specified parameters
fn generate_random_graph(num_vertices: usize, edge_factor: usize) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_capacity(num_vertices);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..(num_vertices * edge_factor) {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..100u64)).unwrap();
        }
    }

    graph
}

fn bench_point_to_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("fib_dijkstra");
    let algo = FibDijkstra::new();

    for &num_vertices in &[1_000usize, 10_000, 50_000] {
        let graph = generate_random_graph(num_vertices, 4);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_vertices),
            &graph,
            |b, graph| {
                b.iter(|| {
                    algo.shortest_distance(graph, 0, num_vertices - 1)
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_point_to_point);
criterion_main!(benches);
