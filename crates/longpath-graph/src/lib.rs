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

//! # Longpath Graph
//!
//! **The data model of the long simple path search.**
//!
//! This crate defines the undirected graph the search runs on and the simple
//! path it grows. It is the shared vocabulary between the graph generators,
//! the search engine (`longpath_search`) and the trial harness.
//!
//! ## Architecture
//!
//! * **`vertex`**: the `Vertex` identifier and the `FIRST_VERTEX` numbering convention of the generators.
//! * **`graph`**: `GraphBuilder` (mutable, idempotent inserts) and `Graph` (immutable, sorted adjacency).
//! * **`path`**: `Path`, a simple path that is only mutated at its two endpoints.
//! * **`generate`**: uniform random, star, edgeless and path graph generators.
//!
//! ## Design Philosophy
//!
//! 1.  **Read-only graphs**: once built, a `Graph` is never mutated, so one instance can be shared by any number of concurrent searches.
//! 2.  **Local invariants**: a `Path` refuses any mutation that would break the simple-path property, checking only the touched endpoint.
//! 3.  **Explicit randomness**: every random choice takes a caller-supplied `rand::Rng`, which keeps seeded runs reproducible.

pub mod generate;
pub mod graph;
pub mod path;
pub mod vertex;
