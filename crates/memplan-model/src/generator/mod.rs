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

//! Seeded synthetic workloads.
//!
//! Every generated problem is well-formed by construction: lifespans lie
//! within `[0, horizon]`, gaps sit strictly inside their lifespan and are
//! separated from each other, and gap windows fit inside the buffer.

pub mod config;
pub mod err;

use crate::{
    buffer::{Buffer, Gap, Window},
    problem::Problem,
};
use config::ProblemGenConfig;
use memplan_core::{
    TimeVariable,
    space::{SpaceOffset, SpaceSize},
    time::{TimeInterval, TimePoint},
};
use num_traits::NumCast;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Uniform, uniform::SampleUniform};
use tracing::{debug, instrument};

pub struct ProblemGenerator<T>
where
    T: TimeVariable + SampleUniform,
{
    config: ProblemGenConfig<T>,
    rng: ChaCha8Rng,
    size_distribution: Uniform<usize>,
    lifespan_distribution: Exp<f64>,
}

impl<T> From<ProblemGenConfig<T>> for ProblemGenerator<T>
where
    T: TimeVariable + SampleUniform,
{
    fn from(config: ProblemGenConfig<T>) -> Self {
        Self::new(config)
    }
}

impl<T> ProblemGenerator<T>
where
    T: TimeVariable + SampleUniform,
{
    pub fn new(config: ProblemGenConfig<T>) -> Self {
        let seed = config.seed();
        Self {
            size_distribution: Uniform::new_inclusive(
                config.min_size.value(),
                config.max_size.value(),
            )
            .expect("valid [min_size, max_size]"),
            lifespan_distribution: Exp::new(1.0 / config.mean_lifespan)
                .expect("positive mean lifespan"),
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ProblemGenConfig<T> {
        &self.config
    }

    #[instrument(level = "debug", skip_all, fields(buffers = self.config.amount_buffers, seed = self.config.seed))]
    pub fn generate(&mut self) -> Problem<T> {
        let buffers: Vec<Buffer<T>> = (0..self.config.amount_buffers)
            .map(|_| self.sample_buffer())
            .collect();
        let problem = Problem::from_parts_unchecked(buffers, self.config.capacity);
        debug!(gaps = problem.gap_count(), "generated problem");
        problem
    }

    fn sample_buffer(&mut self) -> Buffer<T> {
        let size = SpaceSize::new(self.size_distribution.sample(&mut self.rng));
        let lifespan = self.sample_lifespan();
        let gaps = self.sample_gaps(lifespan, size);
        Buffer::from_parts_unchecked(lifespan, size, gaps)
    }

    fn sample_lifespan(&mut self) -> TimeInterval<T> {
        let horizon = self.config.horizon.value();
        let min_len = self.config.min_lifespan.value();
        let drawn: f64 = self.lifespan_distribution.sample(&mut self.rng);
        let drawn: T = NumCast::from(drawn.round()).unwrap_or(horizon);
        let len = drawn.max(min_len).min(horizon);

        let latest_start = horizon - len;
        let start = if latest_start > T::zero() {
            self.rng.random_range(T::zero()..=latest_start)
        } else {
            T::zero()
        };
        TimeInterval::new(TimePoint::new(start), TimePoint::new(start + len))
    }

    fn sample_gaps(&mut self, lifespan: TimeInterval<T>, size: SpaceSize) -> Vec<Gap<T>> {
        let mut gaps = Vec::new();
        // Gaps stay one tick clear of the lifespan bounds and of each other.
        let mut cursor = lifespan.lower().value() + T::one();
        let last = lifespan.upper().value() - T::one();
        while last - cursor >= T::one() && self.rng.random_bool(self.config.gap_probability) {
            let lower = self.rng.random_range(cursor..last);
            let upper = self.rng.random_range(lower + T::one()..=last);
            let window = self
                .rng
                .random_bool(self.config.windowed_gap_probability)
                .then(|| self.sample_window(size));
            gaps.push(Gap::new(
                TimeInterval::new(TimePoint::new(lower), TimePoint::new(upper)),
                window,
            ));
            cursor = upper + T::one();
        }
        gaps
    }

    fn sample_window(&mut self, size: SpaceSize) -> Window {
        let total = size.value();
        let offset = self.rng.random_range(0..total);
        let extent = self.rng.random_range(1..=total - offset);
        Window::new(SpaceOffset::new(offset), SpaceSize::new(extent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::config::ProblemGenConfigBuilder;
    use memplan_core::time::TimeDelta;

    type T = i64;

    fn config(seed: u64) -> ProblemGenConfig<T> {
        ProblemGenConfigBuilder::new()
            .capacity(SpaceSize::new(64))
            .min_size(SpaceSize::new(2))
            .max_size(SpaceSize::new(32))
            .amount_buffers(200)
            .horizon(TimePoint::new(400))
            .mean_lifespan(40.0)
            .min_lifespan(TimeDelta::new(2))
            .gap_probability(0.6)
            .windowed_gap_probability(0.5)
            .seed(seed)
            .build()
            .expect("valid config")
    }

    #[test]
    fn test_same_seed_same_problem() {
        let a = ProblemGenerator::from(config(11)).generate();
        let b = ProblemGenerator::from(config(11)).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_problem() {
        let a = ProblemGenerator::from(config(11)).generate();
        let b = ProblemGenerator::from(config(12)).generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_buffers_are_well_formed() {
        for seed in 0..8 {
            let cfg = config(seed);
            let problem = ProblemGenerator::from(cfg.clone()).generate();
            assert_eq!(problem.len(), cfg.amount_buffers());
            assert_eq!(problem.capacity(), cfg.capacity());

            let horizon = TimeInterval::new(TimePoint::zero(), cfg.horizon());
            for (_, buffer) in problem.iter() {
                assert!(buffer.size() >= cfg.min_size() && buffer.size() <= cfg.max_size());
                assert!(horizon.contains_interval(&buffer.lifespan()));
                assert!(buffer.lifespan().length::<TimeDelta<T>>() >= cfg.min_lifespan());

                let revalidated =
                    Buffer::new(buffer.lifespan(), buffer.size(), buffer.gaps().to_vec());
                assert_eq!(revalidated.as_ref(), Ok(buffer));

                for gap in buffer.gaps() {
                    if let Some(w) = gap.window() {
                        assert!(!w.size().is_zero());
                        assert!(w.upper().value() <= buffer.size().value());
                    }
                }
            }
            assert!(Problem::new(problem.buffers().to_vec(), problem.capacity()).is_ok());
        }
    }

    #[test]
    fn test_generator_produces_both_gap_kinds() {
        let problem = ProblemGenerator::from(config(3)).generate();
        let gaps: Vec<_> = problem.buffers().iter().flat_map(|b| b.gaps()).collect();
        assert!(gaps.iter().any(|g| g.window().is_some()));
        assert!(gaps.iter().any(|g| g.window().is_none()));
    }

    #[test]
    fn test_zero_gap_probability_yields_no_gaps() {
        let cfg = ProblemGenConfigBuilder::<T>::new()
            .capacity(SpaceSize::new(16))
            .amount_buffers(50)
            .horizon(TimePoint::new(100))
            .gap_probability(0.0)
            .seed(5)
            .build()
            .unwrap();
        let problem = ProblemGenerator::from(cfg).generate();
        assert_eq!(problem.gap_count(), 0);
    }
}
