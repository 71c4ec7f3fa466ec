use std::env;
use std::process;

use fib_sssp::algorithm::{FibDijkstra, PointToPointAlgorithm};
use fib_sssp::graph::load_graph;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <graph_file> <source> <target>", args[0]);
        process::exit(1);
    }

    let source = parse_vertex(&args[2]);
    let target = parse_vertex(&args[3]);

    let graph = match load_graph::<u64, _>(&args[1]) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}: {}", args[1], err);
            process::exit(1);
        }
    };

    match FibDijkstra::new().shortest_distance(&graph, source, target) {
        Ok(Some(distance)) => println!("{}", distance),
        Ok(None) => println!("-1"),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn parse_vertex(arg: &str) -> usize {
    match arg.parse() {
        Ok(vertex) => vertex,
        Err(_) => {
            eprintln!("invalid vertex id: {}", arg);
            process::exit(1);
        }
    }
}
