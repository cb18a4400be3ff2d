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

//! # Core Primitives
//!
//! Generic building blocks used across the planner. The central type is
//! [`Interval`], a half-open range `[lower, upper)` that models buffer
//! lifetimes, gap extents, space extents and ranges of section indices.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

/// A half-open interval `[lower, upper)`.
///
/// The lower bound is inclusive and the upper bound is exclusive, so the
/// interval holds every `x` with `lower <= x < upper`. Two intervals that
/// merely touch (`a.upper() == b.lower()`) do not intersect, which is what
/// lets a buffer that dies at `t` share space with one born at `t`.
///
/// # Examples
///
/// ```
/// use memplan_core::primitives::Interval;
///
/// let interval = Interval::new(1, 5);
/// assert_eq!(interval.lower(), 1);
/// assert_eq!(interval.upper(), 5);
/// assert!(interval.contains(3));
/// assert!(!interval.contains(5));
/// assert_eq!(interval.length(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: T,
    upper: T,
}

impl<T> Interval<T> {
    /// Creates the interval spanned by `a` and `b`.
    ///
    /// The bounds are normalized, so `Interval::new(5, 3)` is `[3, 5)`.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` are not comparable.
    ///
    /// # Examples
    ///
    /// ```
    /// use memplan_core::primitives::Interval;
    ///
    /// let interval = Interval::new(5, 3);
    /// assert_eq!(interval.lower(), 3);
    /// assert_eq!(interval.upper(), 5);
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Self
    where
        T: PartialOrd + Copy,
    {
        let ord = a
            .partial_cmp(&b)
            .expect("Interval::new: non-comparable bounds");
        match ord {
            Ordering::Greater => Self { lower: b, upper: a },
            _ => Self { lower: a, upper: b },
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn lower(&self) -> T
    where
        T: Copy,
    {
        self.lower
    }

    /// Returns the exclusive upper bound.
    #[inline]
    pub fn upper(&self) -> T
    where
        T: Copy,
    {
        self.upper
    }

    /// Returns `true` if the interval holds no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use memplan_core::primitives::Interval;
    ///
    /// assert!(Interval::new(4, 4).is_empty());
    /// assert!(!Interval::new(4, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool
    where
        T: PartialEq,
    {
        self.lower == self.upper
    }

    /// Returns `true` if `x` lies within `[lower, upper)`.
    #[inline]
    pub fn contains(&self, x: T) -> bool
    where
        T: PartialOrd,
    {
        x >= self.lower && x < self.upper
    }

    /// Returns `true` if `other` lies entirely within this interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use memplan_core::primitives::Interval;
    ///
    /// let lifespan = Interval::new(0, 10);
    /// assert!(lifespan.contains_interval(&Interval::new(3, 6)));
    /// assert!(lifespan.contains_interval(&lifespan));
    /// assert!(!lifespan.contains_interval(&Interval::new(8, 12)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        other.lower >= self.lower && other.upper <= self.upper
    }

    /// Returns `true` if the two intervals share at least one value.
    ///
    /// # Examples
    ///
    /// ```
    /// use memplan_core::primitives::Interval;
    ///
    /// let a = Interval::new(0, 5);
    /// assert!(a.intersects(&Interval::new(4, 8)));
    /// assert!(!a.intersects(&Interval::new(5, 8))); // touching only
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        self.intersection(other).is_some()
    }

    /// Returns the common part of both intervals, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use memplan_core::primitives::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert_eq!(a.intersection(&Interval::new(5, 15)), Some(Interval::new(5, 10)));
    /// assert_eq!(a.intersection(&Interval::new(10, 15)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Self>
    where
        T: PartialOrd + Copy,
    {
        let lower = if self.lower > other.lower {
            self.lower
        } else {
            other.lower
        };
        let upper = if self.upper < other.upper {
            self.upper
        } else {
            other.upper
        };
        (lower < upper).then_some(Self { lower, upper })
    }

    /// Returns `upper - lower`.
    #[inline]
    pub fn length<D>(&self) -> D
    where
        T: Copy + Sub<Output = D>,
    {
        self.upper - self.lower
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<T>
    where
        T: Copy,
    {
        self.lower..self.upper
    }
}

impl<T: Default> Default for Interval<T> {
    #[inline]
    fn default() -> Self {
        Self {
            lower: T::default(),
            upper: T::default(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

impl<T: Copy + PartialOrd> From<std::ops::Range<T>> for Interval<T> {
    #[inline]
    fn from(r: std::ops::Range<T>) -> Self {
        Interval::new(r.start, r.end)
    }
}
