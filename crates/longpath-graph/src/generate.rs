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

//! Graph generators used by the benchmarks and the trial harness.
//!
//! Generated vertices are numbered contiguously from `FIRST_VERTEX`.

use crate::{
    graph::{Graph, GraphBuilder},
    vertex::FIRST_VERTEX,
};
use rand::Rng;

/// Generates a uniform random graph `G(n, p)`.
///
/// Every unordered pair of the `num_vertices` vertices is joined independently
/// with probability `edge_probability`. Pairs are visited in ascending order,
/// so the result is a pure function of the generator state.
///
/// # Panics
///
/// Panics if `edge_probability` is not within `[0.0, 1.0]`.
pub fn random_graph<R>(num_vertices: usize, edge_probability: f64, rng: &mut R) -> Graph
where
    R: Rng + ?Sized,
{
    assert!(
        (0.0..=1.0).contains(&edge_probability),
        "called `random_graph()` with invalid edge probability: {}. Must be in [0.0, 1.0]",
        edge_probability
    );

    let mut builder = GraphBuilder::with_capacity(num_vertices);
    for i in 0..num_vertices {
        builder.add_vertex(FIRST_VERTEX.offset(i));
    }
    for i in 0..num_vertices {
        let u = FIRST_VERTEX.offset(i);
        for j in (i + 1)..num_vertices {
            if rng.random::<f64>() < edge_probability {
                builder.add_edge(u, FIRST_VERTEX.offset(j));
            }
        }
    }
    builder.build()
}

/// Generates a star graph on `num_vertices` vertices.
///
/// `FIRST_VERTEX` is the center and every other vertex is a leaf joined only
/// to it. A single vertex yields an isolated center; zero vertices yield the
/// empty graph.
pub fn star_graph(num_vertices: usize) -> Graph {
    let mut builder = GraphBuilder::with_capacity(num_vertices);
    if num_vertices == 0 {
        return builder.build();
    }
    builder.add_vertex(FIRST_VERTEX);
    for i in 1..num_vertices {
        builder.add_edge(FIRST_VERTEX, FIRST_VERTEX.offset(i));
    }
    builder.build()
}

/// Generates a graph with `num_vertices` vertices and no edges.
pub fn edgeless_graph(num_vertices: usize) -> Graph {
    let mut builder = GraphBuilder::with_capacity(num_vertices);
    for i in 0..num_vertices {
        builder.add_vertex(FIRST_VERTEX.offset(i));
    }
    builder.build()
}

/// Generates the path graph `FIRST_VERTEX - ... - FIRST_VERTEX + n - 1`.
pub fn path_graph(num_vertices: usize) -> Graph {
    let mut builder = GraphBuilder::with_capacity(num_vertices);
    for i in 0..num_vertices {
        builder.add_vertex(FIRST_VERTEX.offset(i));
    }
    for i in 1..num_vertices {
        builder.add_edge(FIRST_VERTEX.offset(i - 1), FIRST_VERTEX.offset(i));
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Vertex;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_graph_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let empty = random_graph(10, 0.0, &mut rng);
        assert_eq!(empty.num_vertices(), 10);
        assert_eq!(empty.num_edges(), 0);

        let complete = random_graph(10, 1.0, &mut rng);
        assert_eq!(complete.num_vertices(), 10);
        assert_eq!(complete.num_edges(), 45);
    }

    #[test]
    fn test_random_graph_uses_contiguous_ids() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let graph = random_graph(5, 0.5, &mut rng);
        for id in 1..=5 {
            assert!(graph.contains_vertex(Vertex::new(id)));
        }
        assert!(!graph.contains_vertex(Vertex::new(0)));
        assert!(!graph.contains_vertex(Vertex::new(6)));
    }

    #[test]
    fn test_random_graph_is_reproducible() {
        let a = random_graph(40, 0.1, &mut ChaCha8Rng::seed_from_u64(99));
        let b = random_graph(40, 0.1, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "invalid edge probability")]
    fn test_random_graph_rejects_bad_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let _ = random_graph(3, 1.5, &mut rng);
    }

    #[test]
    fn test_star_graph_shape() {
        let graph = star_graph(10);
        assert_eq!(graph.num_vertices(), 10);
        assert_eq!(graph.num_edges(), 9);
        assert_eq!(graph.degree(FIRST_VERTEX), 9);
        for i in 1..10 {
            let leaf = FIRST_VERTEX.offset(i);
            assert_eq!(graph.neighbors(leaf), &[FIRST_VERTEX]);
        }
    }

    #[test]
    fn test_star_graph_degenerate_sizes() {
        assert!(star_graph(0).is_empty());

        let single = star_graph(1);
        assert_eq!(single.num_vertices(), 1);
        assert_eq!(single.num_edges(), 0);
    }

    #[test]
    fn test_edgeless_and_path_graph() {
        let edgeless = edgeless_graph(4);
        assert_eq!(edgeless.num_vertices(), 4);
        assert_eq!(edgeless.num_edges(), 0);

        let path = path_graph(4);
        assert_eq!(path.num_edges(), 3);
        assert!(path.is_adjacent(Vertex::new(2), Vertex::new(3)));
        assert!(!path.is_adjacent(Vertex::new(1), Vertex::new(4)));
    }
}
