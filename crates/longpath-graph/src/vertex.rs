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

//! # Vertex Identifiers
//!
//! `Vertex` is a transparent wrapper around `usize` naming a vertex of a
//! `Graph`. Identifiers may be dense or sparse; the graph only requires them
//! to be unique. Wrapping the raw integer keeps vertex identifiers from being
//! confused with positions inside a path or with iteration counters.
//!
//! ## Usage
//!
//! ```rust
//! use longpath_graph::vertex::Vertex;
//!
//! let v = Vertex::new(3);
//! assert_eq!(v.get(), 3);
//! assert_eq!(format!("{}", v), "Vertex(3)");
//! ```

/// The identifier the built-in generators assign to their first vertex.
///
/// Generated graphs number their vertices contiguously starting here, so a
/// graph of `n` vertices spans `FIRST_VERTEX..FIRST_VERTEX + n`.
pub const FIRST_VERTEX: Vertex = Vertex::new(1);

/// A vertex identifier.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    id: usize,
}

impl Vertex {
    /// Creates a new `Vertex` with the given identifier.
    #[inline(always)]
    pub const fn new(id: usize) -> Self {
        Self { id }
    }

    /// Returns the underlying identifier.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.id
    }

    /// Returns the vertex `offset` identifiers after this one.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the identifier overflows.
    #[inline(always)]
    pub const fn offset(&self, offset: usize) -> Self {
        Self::new(self.id + offset)
    }
}

impl std::fmt::Debug for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex({})", self.id)
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex({})", self.id)
    }
}

impl From<usize> for Vertex {
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<Vertex> for usize {
    fn from(vertex: Vertex) -> Self {
        vertex.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let v = Vertex::new(10);
        assert_eq!(v.get(), 10);
    }

    #[test]
    fn test_conversions() {
        let v: Vertex = 42.into();
        assert_eq!(v.get(), 42);

        let raw: usize = v.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_debug_and_display() {
        let v = Vertex::new(7);
        assert_eq!(format!("{}", v), "Vertex(7)");
        assert_eq!(format!("{:?}", v), "Vertex(7)");
    }

    #[test]
    fn test_offset_from_first_vertex() {
        assert_eq!(FIRST_VERTEX.get(), 1);
        assert_eq!(FIRST_VERTEX.offset(4), Vertex::new(5));
    }

    #[test]
    fn test_ordering_follows_identifier() {
        let mut vs = vec![Vertex::new(3), Vertex::new(1), Vertex::new(2)];
        vs.sort();
        assert_eq!(vs, vec![Vertex::new(1), Vertex::new(2), Vertex::new(3)]);
    }
}
