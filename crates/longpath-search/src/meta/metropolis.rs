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

//! Metropolis search with endpoint shrinking.
//!
//! Besides the growth candidates, the two endpoints of the path are candidates
//! as well. Sampling a growth candidate always extends the path. Sampling an
//! endpoint is a shrink proposal, accepted with probability
//! $\exp(-1 / (K \cdot T))$, which lets the search back out of a dead end
//! instead of stopping there. The temperature $T$ is read from a
//! `TemperatureSchedule` and updated after every iteration.
//!
//! `SquareRootAnnealing` replaces $T$ by $\sqrt{T}$ on each update, so the
//! temperature converges to `1.0` from either side. `ConstantTemperature`
//! keeps $T$ fixed.
//!
//! The comparison against the acceptance probability is selected by
//! `AcceptanceRule`. `Exponential` draws a uniform `f64`. `Truncated`
//! divides a `u32` draw by `u32::MAX` in integer arithmetic before
//! comparing, which accepts every proposal except on the single maximal
//! draw; it exists to reproduce the runs of older tooling.

use crate::{
    candidates::{CandidatePolicy, CandidateSet},
    meta::metaheuristic::{Move, PathMetaheuristic, DEFAULT_MAX_ITERATIONS},
};
use longpath_graph::{graph::Graph, path::Path};
use rand::{Rng, RngCore};

/// Controls the temperature of a Metropolis search.
pub trait TemperatureSchedule: Send + Sync + std::fmt::Debug {
    /// Resets the temperature to its initial value.
    /// Called once at the start of the search.
    fn on_start(&mut self);

    /// Updates the temperature for the next iteration.
    fn update(&mut self);

    /// Returns the current temperature ($T$).
    fn current(&self) -> f64;
}

impl<S> TemperatureSchedule for Box<S>
where
    S: TemperatureSchedule + ?Sized,
{
    #[inline]
    fn on_start(&mut self) {
        (**self).on_start()
    }

    #[inline]
    fn update(&mut self) {
        (**self).update()
    }

    #[inline]
    fn current(&self) -> f64 {
        (**self).current()
    }
}

#[inline(always)]
fn assert_valid_temperature(temperature: f64, caller: &str) {
    assert!(
        temperature.is_finite() && temperature > 0.0,
        "called `{}` with invalid temperature: {}. Must be finite and positive",
        caller,
        temperature
    );
}

/// Annealing by repeated square roots: $T_{k+1} = \sqrt{T_k}$.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRootAnnealing {
    initial: f64,
    current: f64,
}

impl SquareRootAnnealing {
    /// Creates a new square root annealing schedule.
    ///
    /// # Panics
    ///
    /// Panics if `initial` is not finite and positive.
    #[inline]
    pub fn new(initial: f64) -> Self {
        assert_valid_temperature(initial, "SquareRootAnnealing::new()");
        Self {
            initial,
            current: initial,
        }
    }

    /// Returns the initial temperature.
    #[inline]
    pub fn initial(&self) -> f64 {
        self.initial
    }
}

impl TemperatureSchedule for SquareRootAnnealing {
    #[inline]
    fn on_start(&mut self) {
        self.current = self.initial;
    }

    #[inline]
    fn update(&mut self) {
        self.current = self.current.sqrt();
    }

    #[inline]
    fn current(&self) -> f64 {
        self.current
    }
}

/// A fixed temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantTemperature {
    temperature: f64,
}

impl ConstantTemperature {
    /// Creates a new constant schedule.
    ///
    /// # Panics
    ///
    /// Panics if `temperature` is not finite and positive.
    #[inline]
    pub fn new(temperature: f64) -> Self {
        assert_valid_temperature(temperature, "ConstantTemperature::new()");
        Self { temperature }
    }
}

impl TemperatureSchedule for ConstantTemperature {
    #[inline]
    fn on_start(&mut self) {}

    #[inline]
    fn update(&mut self) {}

    #[inline]
    fn current(&self) -> f64 {
        self.temperature
    }
}

/// How a shrink proposal is compared against its acceptance probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AcceptanceRule {
    /// A uniform draw from `[0, 1)` below the probability accepts.
    #[default]
    Exponential,
    /// An integer draw divided by its maximum in integer arithmetic.
    Truncated,
}

impl AcceptanceRule {
    /// Decides a proposal that should be accepted with `probability`.
    #[inline]
    pub fn accept<R>(&self, probability: f64, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        match self {
            AcceptanceRule::Exponential => rng.random::<f64>() < probability,
            AcceptanceRule::Truncated => ((rng.next_u32() / u32::MAX) as f64) < probability,
        }
    }
}

impl std::fmt::Display for AcceptanceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcceptanceRule::Exponential => write!(f, "Exponential"),
            AcceptanceRule::Truncated => write!(f, "Truncated"),
        }
    }
}

/// Returns $\exp(-1 / (K \cdot T))$, or `0.0` if $K \cdot T$ is not positive.
#[inline]
pub fn shrink_probability(k: f64, temperature: f64) -> f64 {
    let kt = k * temperature;
    if kt > 0.0 {
        (-1.0 / kt).exp()
    } else {
        0.0
    }
}

/// The Metropolis path search.
#[derive(Debug, Clone)]
pub struct Metropolis<S>
where
    S: TemperatureSchedule,
{
    k: f64,
    schedule: S,
    acceptance: AcceptanceRule,
    max_iterations: u64,
}

impl<S> Metropolis<S>
where
    S: TemperatureSchedule,
{
    /// Creates a Metropolis search with constant `k` and the given schedule.
    ///
    /// # Panics
    ///
    /// Panics if `k` is not finite and positive.
    #[inline]
    pub fn new(k: f64, schedule: S) -> Self {
        assert!(
            k.is_finite() && k > 0.0,
            "called `Metropolis::new()` with invalid constant k: {}. Must be finite and positive",
            k
        );
        Self {
            k,
            schedule,
            acceptance: AcceptanceRule::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the acceptance rule.
    #[inline]
    pub fn with_acceptance(mut self, acceptance: AcceptanceRule) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Sets the iteration budget.
    #[inline]
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns the constant `k`.
    #[inline]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Returns the current temperature.
    #[inline]
    pub fn temperature(&self) -> f64 {
        self.schedule.current()
    }

    /// Returns the acceptance rule.
    #[inline]
    pub fn acceptance(&self) -> AcceptanceRule {
        self.acceptance
    }

    /// Returns the temperature schedule.
    #[inline]
    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    /// Returns the probability with which a shrink proposal is accepted now.
    #[inline]
    pub fn shrink_probability(&self) -> f64 {
        shrink_probability(self.k, self.schedule.current())
    }
}

impl Metropolis<SquareRootAnnealing> {
    /// Metropolis search whose temperature is annealed from `temperature`.
    #[inline]
    pub fn annealing(k: f64, temperature: f64) -> Self {
        Self::new(k, SquareRootAnnealing::new(temperature))
    }
}

impl Metropolis<ConstantTemperature> {
    /// Metropolis search at the fixed `temperature`.
    #[inline]
    pub fn constant(k: f64, temperature: f64) -> Self {
        Self::new(k, ConstantTemperature::new(temperature))
    }
}

impl Metropolis<Box<dyn TemperatureSchedule>> {
    /// Annealing if `fire` is set, a constant temperature otherwise.
    pub fn with_fire(k: f64, temperature: f64, fire: bool) -> Self {
        let schedule: Box<dyn TemperatureSchedule> = if fire {
            Box::new(SquareRootAnnealing::new(temperature))
        } else {
            Box::new(ConstantTemperature::new(temperature))
        };
        Self::new(k, schedule)
    }
}

impl<S> PathMetaheuristic for Metropolis<S>
where
    S: TemperatureSchedule,
{
    fn name(&self) -> &str {
        "Metropolis"
    }

    #[inline]
    fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    #[inline]
    fn candidate_policy(&self) -> CandidatePolicy {
        CandidatePolicy::GrowthAndEndpoints
    }

    fn on_start(&mut self, _graph: &Graph) {
        self.schedule.on_start();
    }

    #[inline]
    fn should_terminate(&self, _candidates: &CandidateSet) -> bool {
        false
    }

    fn select_move(
        &mut self,
        path: &Path<'_>,
        candidates: &CandidateSet,
        rng: &mut dyn RngCore,
    ) -> Option<Move> {
        let vertex = candidates.sample(rng)?;
        if !path.is_endpoint(vertex) {
            return Some(Move::Extend(vertex));
        }

        if self.acceptance.accept(self.shrink_probability(), rng) {
            Some(Move::Contract(vertex))
        } else {
            Some(Move::Reject(vertex))
        }
    }

    #[inline]
    fn on_iteration_end(&mut self) {
        self.schedule.update();
    }
}

impl<S> std::fmt::Display for Metropolis<S>
where
    S: TemperatureSchedule,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Metropolis(k: {}, temperature: {}, acceptance: {}, max_iterations: {})",
            self.k,
            self.schedule.current(),
            self.acceptance,
            self.max_iterations
        )
    }
}
