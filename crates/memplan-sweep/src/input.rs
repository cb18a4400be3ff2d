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

use memplan_core::{TimeVariable, space::SpaceSize, time::TimeInterval};
use memplan_model::buffer::{Buffer, Gap};

/// What the sweep needs to know about a buffer.
///
/// `effective_size` must be pure: the sweep may ask for the same pair more
/// than once and expects the same answer.
pub trait SweepBuffer {
    type Time: TimeVariable;

    fn lifespan(&self) -> TimeInterval<Self::Time>;

    fn size(&self) -> SpaceSize;

    /// Gaps in chronological order, non-overlapping and inside the lifespan.
    fn gaps(&self) -> &[Gap<Self::Time>];

    /// The footprint `self` imposes on `other` while both need space, or
    /// `None` if none is owed.
    fn effective_size(&self, other: &Self) -> Option<SpaceSize>;
}

impl<T: TimeVariable> SweepBuffer for Buffer<T> {
    type Time = T;

    #[inline]
    fn lifespan(&self) -> TimeInterval<T> {
        Buffer::lifespan(self)
    }

    #[inline]
    fn size(&self) -> SpaceSize {
        Buffer::size(self)
    }

    #[inline]
    fn gaps(&self) -> &[Gap<T>] {
        Buffer::gaps(self)
    }

    #[inline]
    fn effective_size(&self, other: &Self) -> Option<SpaceSize> {
        Buffer::effective_size(self, other)
    }
}
