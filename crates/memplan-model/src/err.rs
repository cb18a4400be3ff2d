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

use crate::id::BufferId;
use memplan_core::{
    TimeVariable,
    space::SpaceSize,
    time::{TimeInterval, TimePoint},
};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyLifespanError<T: TimeVariable> {
    at: TimePoint<T>,
}

impl<T: TimeVariable> EmptyLifespanError<T> {
    #[inline]
    pub fn new(at: TimePoint<T>) -> Self {
        Self { at }
    }

    #[inline]
    pub fn at(&self) -> TimePoint<T> {
        self.at
    }
}

impl<T: TimeVariable> Display for EmptyLifespanError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Buffer lifespan starting at {} is empty", self.at)
    }
}

impl<T: TimeVariable> std::error::Error for EmptyLifespanError<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyGapError<T: TimeVariable> {
    gap_index: usize,
    at: TimePoint<T>,
}

impl<T: TimeVariable> EmptyGapError<T> {
    #[inline]
    pub fn new(gap_index: usize, at: TimePoint<T>) -> Self {
        Self { gap_index, at }
    }

    #[inline]
    pub fn gap_index(&self) -> usize {
        self.gap_index
    }

    #[inline]
    pub fn at(&self) -> TimePoint<T> {
        self.at
    }
}

impl<T: TimeVariable> Display for EmptyGapError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gap {} starting at {} is empty", self.gap_index, self.at)
    }
}

impl<T: TimeVariable> std::error::Error for EmptyGapError<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GapNotInteriorError<T: TimeVariable> {
    gap_index: usize,
    gap: TimeInterval<T>,
    lifespan: TimeInterval<T>,
}

impl<T: TimeVariable> GapNotInteriorError<T> {
    #[inline]
    pub fn new(gap_index: usize, gap: TimeInterval<T>, lifespan: TimeInterval<T>) -> Self {
        Self {
            gap_index,
            gap,
            lifespan,
        }
    }

    #[inline]
    pub fn gap_index(&self) -> usize {
        self.gap_index
    }

    #[inline]
    pub fn gap(&self) -> TimeInterval<T> {
        self.gap
    }

    #[inline]
    pub fn lifespan(&self) -> TimeInterval<T> {
        self.lifespan
    }
}

impl<T: TimeVariable> Display for GapNotInteriorError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gap {} {} does not lie strictly inside the buffer lifespan {}",
            self.gap_index, self.gap, self.lifespan
        )
    }
}

impl<T: TimeVariable> std::error::Error for GapNotInteriorError<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlappingGapsError<T: TimeVariable> {
    gap_index: usize,
    previous: TimeInterval<T>,
    gap: TimeInterval<T>,
}

impl<T: TimeVariable> OverlappingGapsError<T> {
    #[inline]
    pub fn new(gap_index: usize, previous: TimeInterval<T>, gap: TimeInterval<T>) -> Self {
        Self {
            gap_index,
            previous,
            gap,
        }
    }

    #[inline]
    pub fn gap_index(&self) -> usize {
        self.gap_index
    }

    #[inline]
    pub fn previous(&self) -> TimeInterval<T> {
        self.previous
    }

    #[inline]
    pub fn gap(&self) -> TimeInterval<T> {
        self.gap
    }
}

impl<T: TimeVariable> Display for OverlappingGapsError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gap {} {} does not start after the previous gap {} ends",
            self.gap_index, self.gap, self.previous
        )
    }
}

impl<T: TimeVariable> std::error::Error for OverlappingGapsError<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferBuildError<T: TimeVariable> {
    EmptyLifespan(EmptyLifespanError<T>),
    EmptyGap(EmptyGapError<T>),
    GapNotInterior(GapNotInteriorError<T>),
    OverlappingGaps(OverlappingGapsError<T>),
}

impl<T: TimeVariable> Display for BufferBuildError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BufferBuildError::*;
        match self {
            EmptyLifespan(e) => write!(f, "{}", e),
            EmptyGap(e) => write!(f, "{}", e),
            GapNotInterior(e) => write!(f, "{}", e),
            OverlappingGaps(e) => write!(f, "{}", e),
        }
    }
}

impl<T: TimeVariable> std::error::Error for BufferBuildError<T> {}

impl<T: TimeVariable> From<EmptyLifespanError<T>> for BufferBuildError<T> {
    fn from(err: EmptyLifespanError<T>) -> Self {
        Self::EmptyLifespan(err)
    }
}

impl<T: TimeVariable> From<EmptyGapError<T>> for BufferBuildError<T> {
    fn from(err: EmptyGapError<T>) -> Self {
        Self::EmptyGap(err)
    }
}

impl<T: TimeVariable> From<GapNotInteriorError<T>> for BufferBuildError<T> {
    fn from(err: GapNotInteriorError<T>) -> Self {
        Self::GapNotInterior(err)
    }
}

impl<T: TimeVariable> From<OverlappingGapsError<T>> for BufferBuildError<T> {
    fn from(err: OverlappingGapsError<T>) -> Self {
        Self::OverlappingGaps(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferExceedsCapacityError {
    id: BufferId,
    size: SpaceSize,
    capacity: SpaceSize,
}

impl BufferExceedsCapacityError {
    #[inline]
    pub fn new(id: BufferId, size: SpaceSize, capacity: SpaceSize) -> Self {
        Self { id, size, capacity }
    }

    #[inline]
    pub fn id(&self) -> BufferId {
        self.id
    }

    #[inline]
    pub fn size(&self) -> SpaceSize {
        self.size
    }

    #[inline]
    pub fn capacity(&self) -> SpaceSize {
        self.capacity
    }
}

impl Display for BufferExceedsCapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Buffer {} has size {} exceeding the capacity {}",
            self.id, self.size, self.capacity
        )
    }
}

impl std::error::Error for BufferExceedsCapacityError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemBuildError {
    BufferExceedsCapacity(BufferExceedsCapacityError),
}

impl Display for ProblemBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemBuildError::BufferExceedsCapacity(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemBuildError {}

impl From<BufferExceedsCapacityError> for ProblemBuildError {
    fn from(err: BufferExceedsCapacityError) -> Self {
        Self::BufferExceedsCapacity(err)
    }
}
