// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use longpath_graph::graph::{Graph, GraphBuilder};
use longpath_graph::path::Path;
use longpath_graph::vertex::{Vertex, FIRST_VERTEX};
use longpath_search::engine::PathSearchEngine;
use longpath_search::meta::gradient_descent::GradientDescent;
use longpath_search::meta::metropolis::{AcceptanceRule, Metropolis};
use longpath_search::monitor::recorder::TrialRecorder;
use longpath_search::result::PathSearchTerminationReason;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn build_graph(num_vertices: usize, edges: &[(usize, usize)]) -> Graph {
    let mut builder = GraphBuilder::with_capacity(num_vertices);
    for i in 0..num_vertices {
        builder.add_vertex(FIRST_VERTEX.offset(i));
    }
    builder.add_edges(
        edges
            .iter()
            .filter(|&&(u, v)| u < num_vertices && v < num_vertices && u != v)
            .map(|&(u, v)| (FIRST_VERTEX.offset(u), FIRST_VERTEX.offset(v))),
    );
    builder.build()
}

fn graph_strategy() -> impl Strategy<Value = Graph> {
    let edges = proptest::collection::vec((0..25usize, 0..25usize), 0..80);
    (1..25usize, edges).prop_map(|(n, edges)| build_graph(n, &edges))
}

proptest! {
    #[test]
    fn prop_path_moves_keep_simple_path(
        graph in graph_strategy(),
        moves in proptest::collection::vec((any::<bool>(), 0..25usize), 0..200),
        seed in any::<u64>()
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut path = Path::random(&graph, &mut rng).unwrap();

        for (grow, idx) in moves {
            let vertex = Vertex::new(FIRST_VERTEX.get() + idx);
            if path.is_empty() {
                prop_assert!(path.reinitialize(&mut rng));
            }
            if grow {
                let _ = path.extend(vertex, &mut rng);
            } else {
                let _ = path.contract(vertex);
            }
            prop_assert!(path.is_valid());
        }
    }

    #[test]
    fn prop_extend_then_contract_restores(
        graph in graph_strategy(),
        idx in 0..25usize,
        seed in any::<u64>()
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut path = Path::random(&graph, &mut rng).unwrap();
        for &v in graph.vertices() {
            let _ = path.extend(v, &mut rng);
        }
        let before = path.to_vec();
        let vertex = Vertex::new(FIRST_VERTEX.get() + idx);

        if let Some(grown) = path.extend(vertex, &mut rng) {
            prop_assert_eq!(path.contract(vertex), Some(grown));
            prop_assert_eq!(path.to_vec(), before);
        } else {
            prop_assert_eq!(path.to_vec(), before);
        }
    }

    #[test]
    fn prop_metropolis_paths_stay_simple(
        graph in graph_strategy(),
        k in 0.01f64..10.0,
        temperature in 0.01f64..10_000.0,
        fire in any::<bool>(),
        truncated in any::<bool>(),
        seed in any::<u64>()
    ) {
        let acceptance = if truncated {
            AcceptanceRule::Truncated
        } else {
            AcceptanceRule::Exponential
        };
        let mut metropolis = Metropolis::with_fire(k, temperature, fire)
            .with_acceptance(acceptance)
            .with_max_iterations(300);
        let mut engine = PathSearchEngine::new();
        let mut recorder = TrialRecorder::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let outcome = engine.run(&graph, &mut metropolis, &mut recorder, &mut rng);

        prop_assert_eq!(outcome.termination_reason(), &PathSearchTerminationReason::IterationLimit);
        prop_assert_eq!(recorder.len(), 300);
        prop_assert!(outcome.path().is_valid());
        prop_assert!(recorder.costs().iter().all(|&c| c <= graph.num_vertices()));
        prop_assert!(Path::try_from_vertices(&graph, outcome.longest().iter().copied()).is_some());
    }

    #[test]
    fn prop_descent_is_monotone(graph in graph_strategy(), seed in any::<u64>()) {
        let mut engine = PathSearchEngine::new();
        let mut recorder = TrialRecorder::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let outcome = engine.run(&graph, &mut GradientDescent::new(), &mut recorder, &mut rng);

        prop_assert!(recorder.is_non_decreasing());
        prop_assert_eq!(outcome.termination_reason(), &PathSearchTerminationReason::LocalOptimum);
        prop_assert!(outcome.path().is_valid());
        prop_assert_eq!(outcome.cost(), recorder.last().unwrap_or(1));
    }

    #[test]
    fn prop_equal_seeds_are_deterministic(graph in graph_strategy(), seed in any::<u64>()) {
        let run = |seed: u64| {
            let mut engine = PathSearchEngine::new();
            let mut recorder = TrialRecorder::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut metropolis = Metropolis::annealing(1.0, 1000.0).with_max_iterations(200);
            let outcome = engine.run(&graph, &mut metropolis, &mut recorder, &mut rng);
            (recorder.into_costs(), outcome.path().to_vec())
        };
        prop_assert_eq!(run(seed), run(seed));
    }
}
