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

//! # Longpath Search
//!
//! Stochastic local search for long simple paths in undirected graphs. A run
//! starts from a single random vertex and repeatedly grows the path at one of
//! its endpoints, optionally shrinking it again, under the control of a
//! pluggable strategy.
//!
//! ## Modules
//!
//! - `candidates`: the reusable candidate buffer and the candidate policies.
//! - `engine`: the search loop shared by every strategy.
//! - `meta`: `GradientDescent`, `Metropolis` and the `PathMetaheuristic` trait.
//! - `monitor`: lifecycle hooks, the cost recorder, time limits and logging.
//! - `result`: run outcomes and termination reasons.
//! - `stats`: counters collected during a run.
//!
//! ## Motivation
//!
//! Finding a longest simple path is NP-hard. Cheap randomized growth finds
//! long paths quickly, and comparing a greedy strategy against annealed and
//! constant-temperature Metropolis variants on the same graphs shows how much
//! occasional backtracking buys.

pub mod candidates;
pub mod engine;
pub mod meta;
pub mod monitor;
pub mod result;
pub mod stats;
