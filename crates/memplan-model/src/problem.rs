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

use crate::{
    buffer::Buffer,
    err::{BufferExceedsCapacityError, ProblemBuildError},
    id::BufferId,
};
use memplan_core::{TimeVariable, space::SpaceSize};
use std::fmt::Display;

/// A planning instance: the buffers to place and the size of the region
/// they must fit in. A buffer's [`BufferId`] is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem<T: TimeVariable = i64> {
    buffers: Vec<Buffer<T>>,
    capacity: SpaceSize,
}

impl<T: TimeVariable> Problem<T> {
    pub fn new(buffers: Vec<Buffer<T>>, capacity: SpaceSize) -> Result<Self, ProblemBuildError> {
        for (idx, buffer) in buffers.iter().enumerate() {
            if buffer.size() > capacity {
                return Err(BufferExceedsCapacityError::new(
                    BufferId::new(idx),
                    buffer.size(),
                    capacity,
                )
                .into());
            }
        }
        Ok(Self::from_parts_unchecked(buffers, capacity))
    }

    #[inline]
    pub(crate) fn from_parts_unchecked(buffers: Vec<Buffer<T>>, capacity: SpaceSize) -> Self {
        Self { buffers, capacity }
    }

    #[inline]
    pub fn buffers(&self) -> &[Buffer<T>] {
        &self.buffers
    }

    #[inline]
    pub fn buffer(&self, id: BufferId) -> Option<&Buffer<T>> {
        self.buffers.get(id.index())
    }

    #[inline]
    pub fn capacity(&self) -> SpaceSize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (BufferId, &Buffer<T>)> {
        self.buffers
            .iter()
            .enumerate()
            .map(|(idx, b)| (BufferId::new(idx), b))
    }

    #[inline]
    pub fn gap_count(&self) -> usize {
        self.buffers.iter().map(|b| b.gaps().len()).sum()
    }
}

impl<T: TimeVariable> Display for Problem<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Problem(buffers: {}, gaps: {}, capacity: {})",
            self.len(),
            self.gap_count(),
            self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Gap;
    use memplan_core::time::{TimeInterval, TimePoint};

    type T = i64;

    fn t(a: T, b: T) -> TimeInterval<T> {
        TimeInterval::new(TimePoint::new(a), TimePoint::new(b))
    }

    fn buf(lower: T, upper: T, size: usize) -> Buffer<T> {
        Buffer::new(t(lower, upper), SpaceSize::new(size), vec![]).expect("valid buffer")
    }

    #[test]
    fn test_new_accepts_buffers_within_capacity() {
        let p = Problem::new(vec![buf(0, 5, 4), buf(2, 8, 4)], SpaceSize::new(4)).unwrap();
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());
        assert_eq!(p.capacity(), SpaceSize::new(4));
    }

    #[test]
    fn test_new_rejects_oversized_buffer() {
        let err = Problem::new(vec![buf(0, 5, 4), buf(2, 8, 5)], SpaceSize::new(4)).unwrap_err();
        let ProblemBuildError::BufferExceedsCapacity(e) = err;
        assert_eq!(e.id(), BufferId::new(1));
        assert_eq!(e.size(), SpaceSize::new(5));
        assert_eq!(e.capacity(), SpaceSize::new(4));
    }

    #[test]
    fn test_empty_problem_is_valid() {
        let p = Problem::<T>::new(vec![], SpaceSize::new(1)).unwrap();
        assert!(p.is_empty());
        assert_eq!(p.iter().count(), 0);
    }

    #[test]
    fn test_iter_pairs_ids_with_positions() {
        let p = Problem::new(vec![buf(0, 5, 1), buf(2, 8, 2)], SpaceSize::new(4)).unwrap();
        let ids: Vec<_> = p.iter().map(|(id, b)| (id, b.size())).collect();
        assert_eq!(
            ids,
            vec![
                (BufferId::new(0), SpaceSize::new(1)),
                (BufferId::new(1), SpaceSize::new(2))
            ]
        );
        assert_eq!(p.buffer(BufferId::new(1)).map(|b| b.size()), Some(SpaceSize::new(2)));
        assert!(p.buffer(BufferId::new(2)).is_none());
    }

    #[test]
    fn test_display_counts_gaps() {
        let gapped = Buffer::new(t(0, 10), SpaceSize::new(1), vec![Gap::unwindowed(t(2, 4))])
            .expect("valid buffer");
        let p = Problem::new(vec![gapped, buf(0, 3, 1)], SpaceSize::new(2)).unwrap();
        assert_eq!(
            format!("{}", p),
            "Problem(buffers: 2, gaps: 1, capacity: SpaceSize(2))"
        );
    }
}
