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

//! Simple paths that grow and shrink at their endpoints.
//!
//! A `Path` is an ordered sequence of pairwise distinct vertices of one
//! `Graph` in which consecutive vertices are adjacent. The only mutations are
//! pushing a vertex onto either end (`extend`) and popping either end
//! (`contract`), so the simple-path invariant is checked locally on every
//! mutation instead of being re-validated over the whole sequence.
//!
//! The sequence lives in a `VecDeque` for `O(1)` operations at both ends and
//! is mirrored by a hash set for `O(1)` membership queries, which the candidate
//! construction issues once per neighbor of each endpoint.
//!
//! A path may shrink to zero vertices. Endpoint accessors panic in that state;
//! callers check `is_empty` and `reinitialize` first.

use crate::{graph::Graph, vertex::Vertex};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// One of the two ends of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathEnd {
    Front,
    Back,
}

impl std::fmt::Display for PathEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathEnd::Front => write!(f, "Front"),
            PathEnd::Back => write!(f, "Back"),
        }
    }
}

/// A simple path over a borrowed `Graph`.
#[derive(Clone)]
pub struct Path<'g> {
    graph: &'g Graph,
    vertices: VecDeque<Vertex>,
    members: FxHashSet<Vertex>,
}

impl<'g> Path<'g> {
    /// Creates an empty path over `graph`.
    #[inline]
    pub fn empty(graph: &'g Graph) -> Self {
        Self {
            graph,
            vertices: VecDeque::new(),
            members: FxHashSet::default(),
        }
    }

    /// Creates a single-vertex path starting at a uniformly random vertex of
    /// `graph`, or `None` if the graph has no vertices.
    #[inline]
    pub fn random<R>(graph: &'g Graph, rng: &mut R) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        let start = graph.random_vertex(rng)?;
        Some(Self::from_vertex(graph, start))
    }

    /// Creates a single-vertex path at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a vertex of `graph`.
    pub fn from_vertex(graph: &'g Graph, start: Vertex) -> Self {
        assert!(
            graph.contains_vertex(start),
            "called `Path::from_vertex()` with {} which is not a vertex of the graph",
            start
        );
        let mut path = Self::empty(graph);
        path.push_back(start);
        path
    }

    /// Creates a path from an explicit vertex sequence, or `None` if the
    /// sequence is not a simple path of `graph`.
    pub fn try_from_vertices<I>(graph: &'g Graph, vertices: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut path = Self::empty(graph);
        for vertex in vertices {
            if !graph.contains_vertex(vertex) || path.contains(vertex) {
                return None;
            }
            if let Some(back) = path.vertices.back() {
                if !graph.is_adjacent(*back, vertex) {
                    return None;
                }
            }
            path.push_back(vertex);
        }
        Some(path)
    }

    /// Replaces the contents with a fresh random single-vertex path.
    /// Returns `false`, leaving the path empty, if the graph has no vertices.
    pub fn reinitialize<R>(&mut self, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        self.vertices.clear();
        self.members.clear();
        match self.graph.random_vertex(rng) {
            Some(start) => {
                self.push_back(start);
                true
            }
            None => false,
        }
    }

    /// Returns the graph this path lives on.
    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Returns the number of vertices on the path.
    #[inline]
    pub fn cost(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the path has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the front endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    #[inline]
    pub fn front(&self) -> Vertex {
        match self.vertices.front() {
            Some(&vertex) => vertex,
            None => panic!("called `Path::front()` on an empty path"),
        }
    }

    /// Returns the back endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    #[inline]
    pub fn back(&self) -> Vertex {
        match self.vertices.back() {
            Some(&vertex) => vertex,
            None => panic!("called `Path::back()` on an empty path"),
        }
    }

    /// Returns `(front, back)`, or `None` if the path is empty.
    /// Both are the same vertex on a single-vertex path.
    #[inline]
    pub fn endpoints(&self) -> Option<(Vertex, Vertex)> {
        match (self.vertices.front(), self.vertices.back()) {
            (Some(&front), Some(&back)) => Some((front, back)),
            _ => None,
        }
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[inline]
    pub fn is_endpoint(&self, vertex: Vertex) -> bool {
        matches!(self.endpoints(), Some((front, back)) if vertex == front || vertex == back)
    }

    /// Returns `true` if `vertex` is on the path.
    #[inline]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.members.contains(&vertex)
    }

    /// Iterates the vertices from front to back.
    #[inline]
    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = Vertex> + ExactSizeIterator + '_ {
        self.vertices.iter().copied()
    }

    /// Returns the vertices from front to back as a vector.
    #[inline]
    pub fn to_vec(&self) -> Vec<Vertex> {
        self.vertices.iter().copied().collect()
    }

    /// Pushes `vertex` onto an end it is adjacent to.
    ///
    /// If `vertex` is adjacent to both endpoints, a fair coin drawn from `rng`
    /// picks the end. Vertices adjacent to neither endpoint, vertices already
    /// on the path, and any vertex offered to an empty path are ignored.
    /// Returns the end that grew.
    pub fn extend<R>(&mut self, vertex: Vertex, rng: &mut R) -> Option<PathEnd>
    where
        R: Rng + ?Sized,
    {
        let (front, back) = self.endpoints()?;
        if self.contains(vertex) {
            return None;
        }

        let at_front = self.graph.is_adjacent(front, vertex);
        let at_back = self.graph.is_adjacent(back, vertex);

        let end = match (at_front, at_back) {
            (true, true) => {
                if rng.random_bool(0.5) {
                    PathEnd::Front
                } else {
                    PathEnd::Back
                }
            }
            (true, false) => PathEnd::Front,
            (false, true) => PathEnd::Back,
            (false, false) => return None,
        };

        match end {
            PathEnd::Front => self.push_front(vertex),
            PathEnd::Back => self.push_back(vertex),
        }
        Some(end)
    }

    /// Removes `vertex` if it is an endpoint, preferring the front.
    /// Returns the end that shrank, or `None` if `vertex` is not an endpoint.
    pub fn contract(&mut self, vertex: Vertex) -> Option<PathEnd> {
        let (front, back) = self.endpoints()?;
        let end = if vertex == front {
            self.vertices.pop_front();
            PathEnd::Front
        } else if vertex == back {
            self.vertices.pop_back();
            PathEnd::Back
        } else {
            return None;
        };
        self.members.remove(&vertex);
        Some(end)
    }

    /// Checks the simple-path invariant against the owning graph: all
    /// vertices are distinct and every consecutive pair is an edge.
    pub fn is_valid(&self) -> bool {
        if self.members.len() != self.vertices.len() {
            return false;
        }
        let mut seen = FxHashSet::default();
        seen.reserve(self.vertices.len());
        if !self.vertices.iter().all(|v| seen.insert(*v)) {
            return false;
        }
        self.vertices
            .iter()
            .zip(self.vertices.iter().skip(1))
            .all(|(&u, &v)| self.graph.is_adjacent(u, v))
    }

    #[inline]
    fn push_front(&mut self, vertex: Vertex) {
        self.members.insert(vertex);
        self.vertices.push_front(vertex);
    }

    #[inline]
    fn push_back(&mut self, vertex: Vertex) {
        self.members.insert(vertex);
        self.vertices.push_back(vertex);
    }
}

impl PartialEq for Path<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.vertices == other.vertices
    }
}

impl Eq for Path<'_> {}

impl std::fmt::Debug for Path<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.vertices.iter().map(|v| v.get()))
            .finish()
    }
}

impl std::fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Path(cost: {}) [", self.cost())?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " - ")?;
            }
            write!(f, "{}", vertex.get())?;
        }
        write!(f, "]")
    }
}
