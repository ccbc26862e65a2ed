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

//! Undirected, unweighted graphs.
//!
//! Graphs are assembled through a `GraphBuilder` and then frozen into an
//! immutable `Graph`. The builder keeps hash sets per vertex so that repeated
//! `add_vertex`/`add_edge` calls are idempotent; `build` turns every neighbor
//! set into a sorted slice. The frozen layout gives the search loop cheap,
//! deterministic iteration over neighbors and `O(log d)` adjacency queries,
//! and makes the graph trivially shareable across threads.
//!
//! Vertex identifiers are arbitrary `usize` values. Each vertex is mapped to
//! a dense slot on insertion, and slot order (insertion order) is the order in
//! which `Graph::vertices` reports them.

use crate::vertex::Vertex;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};

/// An immutable undirected graph.
#[derive(Clone, PartialEq, Eq)]
pub struct Graph {
    slots: FxHashMap<Vertex, usize>,
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Vertex>>, // Sorted, deduplicated neighbor lists
    num_edges: usize,
}

impl Graph {
    /// Returns the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected edges. A self-loop counts once.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns all vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns `true` if `vertex` is part of the graph, isolated or not.
    ///
    /// `neighbors` answers with an empty slice for both unknown and isolated
    /// vertices; this is the call that tells them apart.
    #[inline]
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.slots.contains_key(&vertex)
    }

    /// Returns the sorted neighbors of `vertex`, or an empty slice if the
    /// vertex is unknown.
    #[inline]
    pub fn neighbors(&self, vertex: Vertex) -> &[Vertex] {
        match self.slots.get(&vertex) {
            Some(&slot) => &self.adjacency[slot],
            None => &[],
        }
    }

    /// Returns the number of neighbors of `vertex`.
    #[inline]
    pub fn degree(&self, vertex: Vertex) -> usize {
        self.neighbors(vertex).len()
    }

    /// Returns `true` if `u` and `v` are joined by an edge.
    #[inline]
    pub fn is_adjacent(&self, u: Vertex, v: Vertex) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }

    /// Draws a vertex uniformly at random, or `None` if the graph is empty.
    #[inline]
    pub fn random_vertex<R>(&self, rng: &mut R) -> Option<Vertex>
    where
        R: Rng + ?Sized,
    {
        if self.vertices.is_empty() {
            return None;
        }
        Some(self.vertices[rng.random_range(0..self.vertices.len())])
    }
}

impl Default for Graph {
    fn default() -> Self {
        GraphBuilder::new().build()
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("num_vertices", &self.num_vertices())
            .field("num_edges", &self.num_edges)
            .finish()
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph(vertices: {}, edges: {})",
            self.num_vertices(),
            self.num_edges
        )
    }
}

/// Mutable construction side of a `Graph`.
///
/// # Examples
///
/// ```rust
/// use longpath_graph::graph::GraphBuilder;
/// use longpath_graph::vertex::Vertex;
///
/// let mut builder = GraphBuilder::new();
/// builder
///     .add_edge(Vertex::new(1), Vertex::new(2))
///     .add_edge(Vertex::new(2), Vertex::new(1))
///     .add_vertex(Vertex::new(9));
/// let graph = builder.build();
///
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 1);
/// assert!(graph.neighbors(Vertex::new(9)).is_empty());
/// ```
#[derive(Clone, Default)]
pub struct GraphBuilder {
    slots: FxHashMap<Vertex, usize>,
    vertices: Vec<Vertex>,
    adjacency: Vec<FxHashSet<Vertex>>,
    num_edges: usize,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `num_vertices` vertices.
    #[inline]
    pub fn with_capacity(num_vertices: usize) -> Self {
        let mut slots = FxHashMap::default();
        slots.reserve(num_vertices);
        Self {
            slots,
            vertices: Vec::with_capacity(num_vertices),
            adjacency: Vec::with_capacity(num_vertices),
            num_edges: 0,
        }
    }

    /// Returns the number of vertices added so far.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of distinct edges added so far.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Ensures `vertex` exists. Adding a known vertex is a no-op.
    #[inline]
    pub fn add_vertex(&mut self, vertex: Vertex) -> &mut Self {
        self.slot(vertex);
        self
    }

    /// Joins `u` and `v`, creating either vertex if absent.
    /// Adding an existing edge, in either direction, is a no-op.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> &mut Self {
        let su = self.slot(u);
        let sv = self.slot(v);
        if self.adjacency[su].insert(v) {
            self.adjacency[sv].insert(u);
            self.num_edges += 1;
        }
        self
    }

    /// Adds every edge yielded by `edges`.
    pub fn add_edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
        self
    }

    /// Freezes the builder into an immutable `Graph`.
    pub fn build(self) -> Graph {
        let adjacency = self
            .adjacency
            .into_iter()
            .map(|set| {
                let mut neighbors: Vec<Vertex> = set.into_iter().collect();
                neighbors.sort_unstable();
                neighbors
            })
            .collect();

        Graph {
            slots: self.slots,
            vertices: self.vertices,
            adjacency,
            num_edges: self.num_edges,
        }
    }

    fn slot(&mut self, vertex: Vertex) -> usize {
        if let Some(&slot) = self.slots.get(&vertex) {
            return slot;
        }
        let slot = self.vertices.len();
        self.slots.insert(vertex, slot);
        self.vertices.push(vertex);
        self.adjacency.push(FxHashSet::default());
        slot
    }
}

impl std::fmt::Debug for GraphBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphBuilder")
            .field("num_vertices", &self.num_vertices())
            .field("num_edges", &self.num_edges)
            .finish()
    }
}

impl From<GraphBuilder> for Graph {
    fn from(builder: GraphBuilder) -> Self {
        builder.build()
    }
}
