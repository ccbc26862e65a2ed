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

//! Strategies that steer the path search engine.
//!
//! The engine owns the loop skeleton (restart an empty path, collect the
//! candidates, apply a move, notify monitors). A strategy decides which
//! candidates it wants to see, when the run has nothing left to do, and
//! which move to make from a sampled candidate.
//!
//! Provided strategies:
//! - `gradient_descent`: greedy growth only, stops on the first dead end.
//! - `metropolis`: growth plus probabilistic shrinking at the endpoints,
//!   with a pluggable temperature schedule.

pub mod gradient_descent;
pub mod metaheuristic;
pub mod metropolis;
