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

//! # Memory Planning Model (`memplan-model`)
//!
//! The input side of the planner. A [`Problem`](problem::Problem) is a list
//! of [`Buffer`](buffer::Buffer)s plus the capacity of the region they are
//! packed into.
//!
//! ## Key Data Structures
//!
//! - **`BufferId`**: a buffer's position in its problem.
//! - **`Window`**: an `(offset, size)` footprint relative to the buffer's
//!   own offset. The default window of a buffer is `(0, size)`.
//! - **`Gap<T>`**: a sub-interval of a buffer's lifespan during which it
//!   either needs no space at all (no window) or a different footprint.
//! - **`Buffer<T>`**: a lifespan `[lower, upper)`, a size, and ordered gaps.
//!   [`Buffer::effective_size`](buffer::Buffer::effective_size) measures the
//!   space one buffer imposes on another while both are present.
//! - **`Problem<T>`**: the validated collection of buffers.
//!
//! The [`generator`] module produces seeded synthetic problems for tests
//! and benchmarks.
//!
//! ## Genericity
//!
//! Everything time-related is generic over a signed integer `T`
//! (defaulting to `i64`).

pub mod buffer;
pub mod err;
pub mod generator;
pub mod id;
pub mod problem;

pub mod prelude {
    pub use crate::buffer::{Buffer, Gap, Window};
    pub use crate::err::{
        BufferBuildError, BufferExceedsCapacityError, EmptyGapError, EmptyLifespanError,
        GapNotInteriorError, OverlappingGapsError, ProblemBuildError,
    };
    pub use crate::generator::{
        ProblemGenerator,
        config::{ProblemGenConfig, ProblemGenConfigBuilder},
        err::ProblemGenConfigBuildError,
    };
    pub use crate::id::BufferId;
    pub use crate::problem::Problem;
}
