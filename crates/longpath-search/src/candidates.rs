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

//! Candidate sets for the next path move.
//!
//! For a path with endpoints `F` and `B`, the growth candidates are the
//! neighbors of `F` and `B` that are not yet on the path. Strategies that can
//! also shrink the path additionally consider `F` and `B` themselves.
//!
//! `CandidateSet` is a reusable buffer: `collect` clears and refills it, so
//! the engine allocates once per run instead of once per iteration. The order
//! of the collected vertices is a pure function of the graph and the path,
//! which keeps seeded runs reproducible.

use longpath_graph::{path::Path, vertex::Vertex};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Which vertices a strategy wants to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CandidatePolicy {
    /// Neighbors of the endpoints that are not on the path.
    #[default]
    GrowthOnly,
    /// Growth candidates plus the endpoints themselves.
    GrowthAndEndpoints,
}

impl std::fmt::Display for CandidatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidatePolicy::GrowthOnly => write!(f, "GrowthOnly"),
            CandidatePolicy::GrowthAndEndpoints => write!(f, "GrowthAndEndpoints"),
        }
    }
}

/// A deduplicated, ordered set of candidate vertices.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    vertices: Vec<Vertex>,
    seen: FxHashSet<Vertex>,
}

impl CandidateSet {
    /// Creates an empty candidate set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty candidate set with room for `capacity` vertices.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut seen = FxHashSet::default();
        seen.reserve(capacity);
        Self {
            vertices: Vec::with_capacity(capacity),
            seen,
        }
    }

    /// Replaces the contents with the candidates of `path` under `policy`.
    ///
    /// Growth candidates come first (front neighbors, then back neighbors),
    /// followed by the endpoints if the policy asks for them. An empty path
    /// has no candidates.
    pub fn collect(&mut self, path: &Path<'_>, policy: CandidatePolicy) {
        self.clear();

        let Some((front, back)) = path.endpoints() else {
            return;
        };
        let graph = path.graph();

        for &vertex in graph.neighbors(front).iter().chain(graph.neighbors(back)) {
            if !path.contains(vertex) && self.seen.insert(vertex) {
                self.vertices.push(vertex);
            }
        }

        if policy == CandidatePolicy::GrowthAndEndpoints {
            for endpoint in [front, back] {
                if self.seen.insert(endpoint) {
                    self.vertices.push(endpoint);
                }
            }
        }
    }

    /// Removes all candidates.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.seen.clear();
    }

    /// Returns the number of candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if there are no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if `vertex` is a candidate.
    #[inline]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.seen.contains(&vertex)
    }

    /// Returns the candidates in collection order.
    #[inline]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Draws one candidate uniformly at random, or `None` if the set is empty.
    #[inline]
    pub fn sample<R>(&self, rng: &mut R) -> Option<Vertex>
    where
        R: Rng + ?Sized,
    {
        if self.vertices.is_empty() {
            return None;
        }
        Some(self.vertices[rng.random_range(0..self.vertices.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use longpath_graph::{
        generate::{edgeless_graph, star_graph},
        graph::{Graph, GraphBuilder},
        vertex::FIRST_VERTEX,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn v(id: usize) -> Vertex {
        Vertex::new(id)
    }

    /// 1 - 2 - 3 - 4 plus the pendant 5 on 2 and the chord 1 - 4.
    fn sample_graph() -> Graph {
        let mut builder = GraphBuilder::new();
        builder
            .add_edge(v(1), v(2))
            .add_edge(v(2), v(3))
            .add_edge(v(3), v(4))
            .add_edge(v(2), v(5))
            .add_edge(v(1), v(4));
        builder.build()
    }

    fn sorted(vs: &[Vertex]) -> Vec<Vertex> {
        let mut out = vs.to_vec();
        out.sort();
        out
    }

    #[test]
    fn test_growth_only_excludes_path_vertices() {
        let graph = sample_graph();
        let path = Path::try_from_vertices(&graph, [v(2), v(3)]).unwrap();
        let mut candidates = CandidateSet::new();
        candidates.collect(&path, CandidatePolicy::GrowthOnly);

        assert_eq!(sorted(candidates.as_slice()), vec![v(1), v(4), v(5)]);
        assert!(!candidates.contains(v(2)));
        assert!(!candidates.contains(v(3)));
    }

    #[test]
    fn test_shared_neighbors_are_deduplicated() {
        // 1 is adjacent to both endpoints of [2, 3, 4].
        let graph = sample_graph();
        let path = Path::try_from_vertices(&graph, [v(2), v(3), v(4)]).unwrap();
        let mut candidates = CandidateSet::new();
        candidates.collect(&path, CandidatePolicy::GrowthOnly);

        assert_eq!(sorted(candidates.as_slice()), vec![v(1), v(5)]);
    }

    #[test]
    fn test_growth_and_endpoints_appends_endpoints() {
        let graph = sample_graph();
        let path = Path::try_from_vertices(&graph, [v(2), v(3)]).unwrap();
        let mut candidates = CandidateSet::new();
        candidates.collect(&path, CandidatePolicy::GrowthAndEndpoints);

        assert_eq!(candidates.len(), 5);
        assert_eq!(&candidates.as_slice()[3..], &[v(2), v(3)]);
        assert_eq!(sorted(&candidates.as_slice()[..3]), vec![v(1), v(4), v(5)]);
    }

    #[test]
    fn test_single_vertex_path_lists_endpoint_once() {
        let graph = edgeless_graph(3);
        let path = Path::from_vertex(&graph, FIRST_VERTEX);
        let mut candidates = CandidateSet::new();

        candidates.collect(&path, CandidatePolicy::GrowthOnly);
        assert!(candidates.is_empty());

        candidates.collect(&path, CandidatePolicy::GrowthAndEndpoints);
        assert_eq!(candidates.as_slice(), &[FIRST_VERTEX]);
    }

    #[test]
    fn test_star_leaf_path_has_no_growth() {
        let graph = star_graph(10);
        let path = Path::try_from_vertices(&graph, [FIRST_VERTEX, v(2)]).unwrap();
        let mut candidates = CandidateSet::new();
        candidates.collect(&path, CandidatePolicy::GrowthOnly);

        // The center is on the path and leaves only touch the center.
        assert_eq!(
            sorted(candidates.as_slice()),
            (3..=10).map(v).collect::<Vec<_>>()
        );

        let path = Path::try_from_vertices(&graph, [v(2), FIRST_VERTEX, v(3)]).unwrap();
        candidates.collect(&path, CandidatePolicy::GrowthOnly);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_empty_path_has_no_candidates() {
        let graph = sample_graph();
        let path = Path::empty(&graph);
        let mut candidates = CandidateSet::with_capacity(8);
        candidates.collect(&path, CandidatePolicy::GrowthAndEndpoints);
        assert!(candidates.is_empty());

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(candidates.sample(&mut rng), None);
    }

    #[test]
    fn test_collect_replaces_previous_contents() {
        let graph = sample_graph();
        let mut candidates = CandidateSet::new();

        let long = Path::try_from_vertices(&graph, [v(5), v(2), v(3)]).unwrap();
        candidates.collect(&long, CandidatePolicy::GrowthAndEndpoints);
        let short = Path::from_vertex(&graph, v(4));
        candidates.collect(&short, CandidatePolicy::GrowthOnly);

        assert_eq!(sorted(candidates.as_slice()), vec![v(1), v(3)]);
        assert!(!candidates.contains(v(5)));
    }

    #[test]
    fn test_sample_covers_every_candidate() {
        let graph = sample_graph();
        let path = Path::from_vertex(&graph, v(2));
        let mut candidates = CandidateSet::new();
        candidates.collect(&path, CandidatePolicy::GrowthAndEndpoints);

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut drawn = FxHashSet::default();
        for _ in 0..500 {
            let vertex = candidates.sample(&mut rng).unwrap();
            assert!(candidates.contains(vertex));
            drawn.insert(vertex);
        }
        assert_eq!(drawn.len(), candidates.len());
    }
}
