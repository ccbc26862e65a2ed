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

//! # Path Search Monitors
//!
//! Pluggable observers and controllers for a path search run. Monitors can
//! record the cost series, log progress, and enforce budgets by issuing a
//! termination command.
//!
//! ## Submodules
//!
//! - `search_monitor`: Core trait (`PathSearchMonitor`) and `SearchCommand`.
//! - `composite`: Aggregate multiple monitors into one.
//! - `log`: Rate-limited progress events through `tracing`.
//! - `no_op`: A monitor that does nothing.
//! - `recorder`: `TrialRecorder`, the per-iteration cost series of one run.
//! - `time`: Wall-clock time budget with step-filtered clock checks.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod recorder;
pub mod search_monitor;
pub mod time;
