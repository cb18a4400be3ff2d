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

//! # memplan-core
//!
//! Typed primitives shared by the planner crates: half-open intervals,
//! time points and durations, and space offsets and sizes.
//!
//! The distinct newtypes keep the two axes of a memory plan apart at
//! compile time, so a time value can never be used as an offset.

use num_traits::{PrimInt, Signed, Zero};
use std::fmt::{Debug, Display};

pub mod primitives;
pub mod space;
pub mod time;

/// Numeric bound for every generic time parameter in the planner.
pub trait TimeVariable: PrimInt + Signed + Zero + Send + Sync + Debug + Display {}
impl<T> TimeVariable for T where T: PrimInt + Signed + Zero + Send + Sync + Debug + Display {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        primitives::Interval,
        space::{SpaceOffset, SpaceSize},
        time::{TimeDelta, TimePoint},
    };
    use static_assertions::assert_impl_all;

    assert_impl_all!(TimePoint<i64>: Send, Sync, Copy, Ord);
    assert_impl_all!(TimeDelta<i32>: Send, Sync, Copy, Ord);
    assert_impl_all!(Interval<TimePoint<i64>>: Send, Sync, Copy);
    assert_impl_all!(SpaceOffset: Send, Sync, Copy, Ord);
    assert_impl_all!(SpaceSize: Send, Sync, Copy, Ord);

    fn requires_time_variable<T: TimeVariable>() {}

    #[test]
    fn test_signed_primitives_are_time_variables() {
        requires_time_variable::<i32>();
        requires_time_variable::<i64>();
        requires_time_variable::<i128>();
    }
}
