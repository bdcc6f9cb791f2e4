use log::info;
use simple_logger::SimpleLogger;

use matroid_mis::algorithms::{DynamicAlgorithm, DynamicSolver};
use matroid_mis::matroid::examples::complete_graph;
use matroid_mis::matroid::{Edge, Matroid};

fn main() {
    SimpleLogger::new().init().unwrap();

    info!("Starting dynamic_updates");

    let mut graph = complete_graph(4);
    graph.set_weight(Edge::new(0, 1), 2.0).unwrap();
    graph.set_weight(Edge::new(2, 3), 4.5).unwrap();
    graph.set_weight(Edge::new(1, 2), -1.0).unwrap();

    let mut solver = DynamicSolver::naive(graph);
    println!(
        "initial solution: {:?} (weight {})",
        solver.current(),
        solver.matroid().total_weight(solver.current())
    );

    solver.remove_element(&Edge::new(2, 3)).unwrap();
    println!(
        "after removing the heaviest edge: {:?} (weight {})",
        solver.current(),
        solver.matroid().total_weight(solver.current())
    );

    solver.add_element(Edge::new(1, 3), Some(3.0)).unwrap();
    println!(
        "after adding a heavy edge: {:?} (weight {})",
        solver.current(),
        solver.matroid().total_weight(solver.current())
    );
}
