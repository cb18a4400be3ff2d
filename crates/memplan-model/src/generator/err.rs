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

use memplan_core::{
    TimeVariable,
    space::SpaceSize,
    time::{TimeDelta, TimePoint},
};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityTooSmallError {
    capacity: SpaceSize,
    max_size: SpaceSize,
}

impl CapacityTooSmallError {
    pub fn new(capacity: SpaceSize, max_size: SpaceSize) -> Self {
        Self { capacity, max_size }
    }
    pub fn capacity(&self) -> SpaceSize {
        self.capacity
    }
    pub fn max_size(&self) -> SpaceSize {
        self.max_size
    }
}

impl Display for CapacityTooSmallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CapacityTooSmallError: capacity {} is smaller than max buffer size {}",
            self.capacity, self.max_size
        )
    }
}

impl std::error::Error for CapacityTooSmallError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizonTooShortError<T: TimeVariable> {
    horizon: TimePoint<T>,
    min_lifespan: TimeDelta<T>,
}

impl<T: TimeVariable> HorizonTooShortError<T> {
    pub fn new(horizon: TimePoint<T>, min_lifespan: TimeDelta<T>) -> Self {
        Self {
            horizon,
            min_lifespan,
        }
    }
    pub fn horizon(&self) -> TimePoint<T> {
        self.horizon
    }
    pub fn min_lifespan(&self) -> TimeDelta<T> {
        self.min_lifespan
    }
}

impl<T: TimeVariable> Display for HorizonTooShortError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HorizonTooShortError: horizon {} cannot hold a lifespan of {}",
            self.horizon, self.min_lifespan
        )
    }
}

impl<T: TimeVariable> std::error::Error for HorizonTooShortError<T> {}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityOutOfRangeError {
    name: &'static str,
    value: f64,
}

impl ProbabilityOutOfRangeError {
    pub fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Display for ProbabilityOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ProbabilityOutOfRangeError: {} = {} is not within [0, 1]",
            self.name, self.value
        )
    }
}

impl std::error::Error for ProbabilityOutOfRangeError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ProblemGenConfigBuildError<T: TimeVariable> {
    CapacityTooSmall(CapacityTooSmallError),
    HorizonTooShort(HorizonTooShortError<T>),
    ProbabilityOutOfRange(ProbabilityOutOfRangeError),
    ZeroMinSize,
    NonPositiveMinLifespan,
    InvalidMeanLifespan(f64),
    MissingCapacity,
    MissingAmountBuffers,
    MissingHorizon,
}

impl<T: TimeVariable> Display for ProblemGenConfigBuildError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ProblemGenConfigBuildError::*;
        match self {
            CapacityTooSmall(e) => write!(f, "{}", e),
            HorizonTooShort(e) => write!(f, "{}", e),
            ProbabilityOutOfRange(e) => write!(f, "{}", e),
            ZeroMinSize => write!(f, "min_size must be at least 1"),
            NonPositiveMinLifespan => write!(f, "min_lifespan must be positive"),
            InvalidMeanLifespan(v) => write!(f, "mean_lifespan {} must be finite and positive", v),
            MissingCapacity => write!(f, "Missing capacity"),
            MissingAmountBuffers => write!(f, "Missing amount_buffers"),
            MissingHorizon => write!(f, "Missing horizon"),
        }
    }
}

impl<T: TimeVariable> std::error::Error for ProblemGenConfigBuildError<T> {}

impl<T: TimeVariable> From<CapacityTooSmallError> for ProblemGenConfigBuildError<T> {
    fn from(err: CapacityTooSmallError) -> Self {
        Self::CapacityTooSmall(err)
    }
}

impl<T: TimeVariable> From<HorizonTooShortError<T>> for ProblemGenConfigBuildError<T> {
    fn from(err: HorizonTooShortError<T>) -> Self {
        Self::HorizonTooShort(err)
    }
}

impl<T: TimeVariable> From<ProbabilityOutOfRangeError> for ProblemGenConfigBuildError<T> {
    fn from(err: ProbabilityOutOfRangeError) -> Self {
        Self::ProbabilityOutOfRange(err)
    }
}
