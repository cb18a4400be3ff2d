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

//! # Space Axis
//!
//! `SpaceOffset` is a position in the planned memory region, `SpaceSize`
//! an extent. An offset plus a size is an offset; two sizes add to a size.

use crate::primitives::Interval;
use std::ops::{Add, AddAssign, Sub};

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct SpaceOffset(usize);

pub type SpaceInterval = Interval<SpaceOffset>;

impl SpaceOffset {
    #[inline]
    pub const fn new(v: usize) -> Self {
        SpaceOffset(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        SpaceOffset(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub fn checked_add(self, size: SpaceSize) -> Option<Self> {
        self.0.checked_add(size.0).map(SpaceOffset)
    }

    /// Distance from `base` up to `self`, or zero if `self` lies below `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use memplan_core::space::{SpaceOffset, SpaceSize};
    ///
    /// assert_eq!(SpaceOffset::new(7).saturating_distance_from(SpaceOffset::new(3)), SpaceSize::new(4));
    /// assert_eq!(SpaceOffset::new(3).saturating_distance_from(SpaceOffset::new(7)), SpaceSize::new(0));
    /// ```
    #[inline]
    pub const fn saturating_distance_from(self, base: SpaceOffset) -> SpaceSize {
        SpaceSize(self.0.saturating_sub(base.0))
    }

    #[inline]
    pub fn span_of(self, size: SpaceSize) -> Option<SpaceInterval> {
        self.checked_add(size)
            .map(|end| SpaceInterval::new(self, end))
    }
}

impl std::fmt::Display for SpaceOffset {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpaceOffset({})", self.0)
    }
}

impl From<usize> for SpaceOffset {
    #[inline]
    fn from(v: usize) -> Self {
        SpaceOffset(v)
    }
}

impl Add<SpaceSize> for SpaceOffset {
    type Output = SpaceOffset;

    #[inline]
    fn add(self, rhs: SpaceSize) -> Self::Output {
        SpaceOffset(
            self.0
                .checked_add(rhs.0)
                .expect("overflow in SpaceOffset + SpaceSize"),
        )
    }
}

impl Sub for SpaceOffset {
    type Output = SpaceSize;

    #[inline]
    fn sub(self, rhs: SpaceOffset) -> Self::Output {
        SpaceSize(
            self.0
                .checked_sub(rhs.0)
                .expect("underflow in SpaceOffset - SpaceOffset"),
        )
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct SpaceSize(usize);

impl SpaceSize {
    #[inline]
    pub const fn new(v: usize) -> Self {
        SpaceSize(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        SpaceSize(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(SpaceSize)
    }

    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        SpaceSize(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Display for SpaceSize {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpaceSize({})", self.0)
    }
}

impl From<usize> for SpaceSize {
    #[inline]
    fn from(v: usize) -> Self {
        SpaceSize(v)
    }
}

impl Add for SpaceSize {
    type Output = SpaceSize;

    #[inline]
    fn add(self, rhs: SpaceSize) -> Self::Output {
        SpaceSize(
            self.0
                .checked_add(rhs.0)
                .expect("overflow in SpaceSize + SpaceSize"),
        )
    }
}

impl AddAssign for SpaceSize {
    #[inline]
    fn add_assign(&mut self, rhs: SpaceSize) {
        *self = *self + rhs;
    }
}

impl Sub for SpaceSize {
    type Output = SpaceSize;

    #[inline]
    fn sub(self, rhs: SpaceSize) -> Self::Output {
        SpaceSize(
            self.0
                .checked_sub(rhs.0)
                .expect("underflow in SpaceSize - SpaceSize"),
        )
    }
}

impl std::iter::Sum for SpaceSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(SpaceSize::zero(), |acc, s| acc + s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_plus_size() {
        assert_eq!(SpaceOffset::new(2) + SpaceSize::new(4), SpaceOffset::new(6));
    }

    #[test]
    #[should_panic(expected = "overflow in SpaceOffset + SpaceSize")]
    fn test_offset_plus_size_overflow_panics() {
        let _ = SpaceOffset::new(usize::MAX) + SpaceSize::new(1);
    }

    #[test]
    fn test_span_of_builds_interval() {
        let span = SpaceOffset::new(2).span_of(SpaceSize::new(4)).unwrap();
        assert_eq!(span.lower(), SpaceOffset::new(2));
        assert_eq!(span.upper(), SpaceOffset::new(6));
        assert_eq!(span.length::<SpaceSize>(), SpaceSize::new(4));
    }

    #[test]
    fn test_size_arithmetic() {
        let mut s = SpaceSize::new(3);
        s += SpaceSize::new(2);
        assert_eq!(s, SpaceSize::new(5));
        assert_eq!(s - SpaceSize::new(5), SpaceSize::zero());
        assert_eq!(SpaceSize::new(1).saturating_sub(s), SpaceSize::zero());
        assert!(SpaceSize::zero().is_zero());
    }

    #[test]
    #[should_panic(expected = "underflow in SpaceSize - SpaceSize")]
    fn test_size_sub_underflow_panics() {
        let _ = SpaceSize::new(1) - SpaceSize::new(2);
    }

    #[test]
    fn test_size_sum() {
        let total: SpaceSize = [1usize, 2, 3].into_iter().map(SpaceSize::new).sum();
        assert_eq!(total, SpaceSize::new(6));
    }
}
