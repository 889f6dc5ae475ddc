use std::{fs, path::PathBuf};

use graph_rs::graph::MatrixGraph;
use portreach::input::Problem;

pub fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("resources")
        .join(name)
}

pub fn setup() -> (Problem, MatrixGraph<String>) {
    let bytes = fs::read(resource("ports.txt")).unwrap();
    let problem = Problem::from_bytes(&bytes).unwrap();
    let graph = problem.build_graph().unwrap();

    (problem, graph)
}
