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

//! # Memory Planning Sweep (`memplan-sweep`)
//!
//! A plane sweep over the lifespans of a set of buffers. It prepares the
//! input of a static memory planner by answering three questions:
//!
//! - **Sections**: at which instants does the set of buffers that need
//!   space change, and what is that set in between?
//! - **Partitions**: which groups of buffers are connected through
//!   overlapping lifespans and can be planned separately?
//! - **Overlaps**: for each pair that needs space at the same time, how
//!   much room must one leave for the other?
//!
//! Each buffer also receives its [`SectionSpan`](result::SectionSpan)s, the
//! runs of sections it occupies together with the window it occupies them
//! with. [`SweepResult::calculate_cuts`](result::SweepResult::calculate_cuts)
//! then counts the buffers crossing each section boundary.
//!
//! The sweep works on anything implementing [`SweepBuffer`](input::SweepBuffer).
//! [`memplan_model::buffer::Buffer`] implements it out of the box.

pub mod cuts;
pub mod event;
pub mod input;
pub mod result;
pub mod sweep;

pub mod prelude {
    pub use crate::event::{Event, EventKind, build_events};
    pub use crate::input::SweepBuffer;
    pub use crate::result::{
        BufferData, CutCount, Overlap, Partition, Section, SectionIdx, SectionRange, SectionSpan,
        SweepResult,
    };
    pub use crate::sweep::{sweep, sweep_problem};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(EventKind: Send, Sync, Copy, Ord);
    assert_impl_all!(Event<i64>: Send, Sync, Copy);
    assert_impl_all!(SectionSpan: Send, Sync, Copy);
    assert_impl_all!(Overlap: Send, Sync, Copy, Ord);
    assert_impl_all!(BufferData: Send, Sync, Clone, Default);
    assert_impl_all!(Partition: Send, Sync, Clone);
    assert_impl_all!(SweepResult: Send, Sync, Clone, Default);
    assert_impl_all!(memplan_model::buffer::Buffer<i64>: SweepBuffer);
}
