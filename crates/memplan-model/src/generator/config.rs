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

use std::cmp::Ordering;
use std::fmt::Display;

use memplan_core::{
    TimeVariable,
    space::SpaceSize,
    time::{TimeDelta, TimePoint},
};
use num_traits::NumCast;
use rand::Rng;

use super::err::{
    CapacityTooSmallError, HorizonTooShortError, ProbabilityOutOfRangeError,
    ProblemGenConfigBuildError,
};

/// Configuration for synthetic problem generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemGenConfig<T: TimeVariable> {
    pub(crate) capacity: SpaceSize,
    pub(crate) min_size: SpaceSize,
    pub(crate) max_size: SpaceSize,
    pub(crate) amount_buffers: usize,

    pub(crate) horizon: TimePoint<T>,
    pub(crate) mean_lifespan: f64,
    pub(crate) min_lifespan: TimeDelta<T>,

    pub(crate) gap_probability: f64,
    pub(crate) windowed_gap_probability: f64,

    pub(crate) seed: u64,
}

impl<T: TimeVariable> Default for ProblemGenConfig<T> {
    fn default() -> Self {
        #[inline]
        fn to_t<T: TimeVariable>(v: i64) -> T {
            NumCast::from(v).expect("default fits the time type")
        }

        Self {
            capacity: SpaceSize::new(1024),
            min_size: SpaceSize::new(1),
            max_size: SpaceSize::new(256),
            amount_buffers: 64,

            horizon: TimePoint::new(to_t::<T>(1000)),
            mean_lifespan: 60.0,
            min_lifespan: TimeDelta::new(to_t::<T>(1)),

            gap_probability: 0.25,
            windowed_gap_probability: 0.5,

            seed: 42,
        }
    }
}

impl<T: TimeVariable> ProblemGenConfig<T> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        capacity: SpaceSize,
        unord_min_size: SpaceSize,
        unord_max_size: SpaceSize,
        amount_buffers: usize,
        horizon: TimePoint<T>,
        mean_lifespan: f64,
        min_lifespan: TimeDelta<T>,
        gap_probability: f64,
        windowed_gap_probability: f64,
        seed: u64,
    ) -> Result<Self, ProblemGenConfigBuildError<T>> {
        let (min_size, max_size) = match unord_min_size.cmp(&unord_max_size) {
            Ordering::Greater => (unord_max_size, unord_min_size),
            _ => (unord_min_size, unord_max_size),
        };

        if min_size.is_zero() {
            return Err(ProblemGenConfigBuildError::ZeroMinSize);
        }
        if capacity < max_size {
            return Err(CapacityTooSmallError::new(capacity, max_size).into());
        }
        if !min_lifespan.is_positive() {
            return Err(ProblemGenConfigBuildError::NonPositiveMinLifespan);
        }
        if horizon.value() < min_lifespan.value() {
            return Err(HorizonTooShortError::new(horizon, min_lifespan).into());
        }
        if !mean_lifespan.is_finite() || mean_lifespan <= 0.0 {
            return Err(ProblemGenConfigBuildError::InvalidMeanLifespan(mean_lifespan));
        }
        for (name, value) in [
            ("gap_probability", gap_probability),
            ("windowed_gap_probability", windowed_gap_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProbabilityOutOfRangeError::new(name, value).into());
            }
        }

        Ok(Self {
            capacity,
            min_size,
            max_size,
            amount_buffers,
            horizon,
            mean_lifespan,
            min_lifespan,
            gap_probability,
            windowed_gap_probability,
            seed,
        })
    }

    #[inline]
    pub fn capacity(&self) -> SpaceSize {
        self.capacity
    }
    #[inline]
    pub fn min_size(&self) -> SpaceSize {
        self.min_size
    }
    #[inline]
    pub fn max_size(&self) -> SpaceSize {
        self.max_size
    }
    #[inline]
    pub fn amount_buffers(&self) -> usize {
        self.amount_buffers
    }
    #[inline]
    pub fn horizon(&self) -> TimePoint<T> {
        self.horizon
    }
    #[inline]
    pub fn mean_lifespan(&self) -> f64 {
        self.mean_lifespan
    }
    #[inline]
    pub fn min_lifespan(&self) -> TimeDelta<T> {
        self.min_lifespan
    }
    #[inline]
    pub fn gap_probability(&self) -> f64 {
        self.gap_probability
    }
    #[inline]
    pub fn windowed_gap_probability(&self) -> f64 {
        self.windowed_gap_probability
    }
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<T: TimeVariable> Display for ProblemGenConfig<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ProblemGenConfig {{ \
             capacity: {}, min_size: {}, max_size: {}, amount_buffers: {}, \
             horizon: {}, mean_lifespan: {:.2}, min_lifespan: {}, \
             gap_probability: {:.3}, windowed_gap_probability: {:.3}, seed: {} \
             }}",
            self.capacity,
            self.min_size,
            self.max_size,
            self.amount_buffers,
            self.horizon,
            self.mean_lifespan,
            self.min_lifespan,
            self.gap_probability,
            self.windowed_gap_probability,
            self.seed
        )
    }
}

/// Builder for `ProblemGenConfig`.
pub struct ProblemGenConfigBuilder<T: TimeVariable> {
    // Required
    capacity: Option<SpaceSize>,
    amount_buffers: Option<usize>,
    horizon: Option<TimePoint<T>>,

    // Optional with defaults
    min_size: SpaceSize,
    max_size: Option<SpaceSize>,
    mean_lifespan: f64,
    min_lifespan: TimeDelta<T>,
    gap_probability: f64,
    windowed_gap_probability: f64,
    seed: u64,
}

impl<T: TimeVariable> Default for ProblemGenConfigBuilder<T> {
    fn default() -> Self {
        Self {
            capacity: None,
            amount_buffers: None,
            horizon: None,
            min_size: SpaceSize::new(1),
            max_size: None,
            mean_lifespan: 60.0,
            min_lifespan: TimeDelta::new(T::one()),
            gap_probability: 0.25,
            windowed_gap_probability: 0.5,
            seed: rand::rng().random(),
        }
    }
}

impl<T: TimeVariable> ProblemGenConfigBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(mut self, v: SpaceSize) -> Self {
        self.capacity = Some(v);
        self
    }
    pub fn amount_buffers(mut self, v: usize) -> Self {
        self.amount_buffers = Some(v);
        self
    }
    pub fn horizon(mut self, v: TimePoint<T>) -> Self {
        self.horizon = Some(v);
        self
    }
    pub fn min_size(mut self, v: SpaceSize) -> Self {
        self.min_size = v;
        self
    }
    /// Defaults to the capacity when unset.
    pub fn max_size(mut self, v: SpaceSize) -> Self {
        self.max_size = Some(v);
        self
    }
    pub fn mean_lifespan(mut self, v: f64) -> Self {
        self.mean_lifespan = v;
        self
    }
    pub fn min_lifespan(mut self, v: TimeDelta<T>) -> Self {
        self.min_lifespan = v;
        self
    }
    pub fn gap_probability(mut self, v: f64) -> Self {
        self.gap_probability = v;
        self
    }
    pub fn windowed_gap_probability(mut self, v: f64) -> Self {
        self.windowed_gap_probability = v;
        self
    }
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    pub fn build(self) -> Result<ProblemGenConfig<T>, ProblemGenConfigBuildError<T>> {
        use ProblemGenConfigBuildError::*;
        let capacity = self.capacity.ok_or(MissingCapacity)?;
        let amount_buffers = self.amount_buffers.ok_or(MissingAmountBuffers)?;
        let horizon = self.horizon.ok_or(MissingHorizon)?;

        ProblemGenConfig::new(
            capacity,
            self.min_size,
            self.max_size.unwrap_or(capacity),
            amount_buffers,
            horizon,
            self.mean_lifespan,
            self.min_lifespan,
            self.gap_probability,
            self.windowed_gap_probability,
            self.seed,
        )
    }
}
