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

use crate::err::{
    BufferBuildError, EmptyGapError, EmptyLifespanError, GapNotInteriorError,
    OverlappingGapsError,
};
use memplan_core::{
    TimeVariable,
    space::{SpaceInterval, SpaceOffset, SpaceSize},
    time::TimeInterval,
};
use std::fmt::Display;

/// The footprint a buffer occupies relative to its own offset.
///
/// A buffer of size `s` occupies `(0, s)` unless a gap overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Window {
    offset: SpaceOffset,
    size: SpaceSize,
}

impl Window {
    #[inline]
    pub const fn new(offset: SpaceOffset, size: SpaceSize) -> Self {
        Self { offset, size }
    }

    /// The footprint `(0, size)` of a buffer with no override in effect.
    #[inline]
    pub const fn default_for(size: SpaceSize) -> Self {
        Self::new(SpaceOffset::zero(), size)
    }

    #[inline]
    pub const fn offset(&self) -> SpaceOffset {
        self.offset
    }

    #[inline]
    pub const fn size(&self) -> SpaceSize {
        self.size
    }

    #[inline]
    pub const fn lower(&self) -> SpaceOffset {
        self.offset
    }

    #[inline]
    pub fn upper(&self) -> SpaceOffset {
        self.offset + self.size
    }

    #[inline]
    pub fn as_interval(&self) -> SpaceInterval {
        SpaceInterval::new(self.lower(), self.upper())
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Window({}, {})", self.offset.value(), self.size.value())
    }
}

/// A sub-interval of a buffer's lifespan with an optional footprint override.
///
/// Without a window the buffer needs no space for the duration of the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gap<T: TimeVariable> {
    lifespan: TimeInterval<T>,
    window: Option<Window>,
}

impl<T: TimeVariable> Gap<T> {
    #[inline]
    pub fn new(lifespan: TimeInterval<T>, window: Option<Window>) -> Self {
        Self { lifespan, window }
    }

    #[inline]
    pub fn unwindowed(lifespan: TimeInterval<T>) -> Self {
        Self::new(lifespan, None)
    }

    #[inline]
    pub fn windowed(lifespan: TimeInterval<T>, window: Window) -> Self {
        Self::new(lifespan, Some(window))
    }

    #[inline]
    pub fn lifespan(&self) -> TimeInterval<T> {
        self.lifespan
    }

    #[inline]
    pub fn window(&self) -> Option<Window> {
        self.window
    }
}

/// A logical allocation request: alive over `lifespan`, needing `size`
/// units of space except where its gaps say otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Buffer<T: TimeVariable = i64> {
    lifespan: TimeInterval<T>,
    size: SpaceSize,
    gaps: Vec<Gap<T>>,
}

impl<T: TimeVariable> Buffer<T> {
    /// Creates a buffer after checking its gaps.
    ///
    /// The lifespan must be non-empty. Every gap must be non-empty, lie
    /// strictly inside the lifespan, and start strictly after the previous
    /// gap ends. A gap touching a lifespan bound or another gap would make
    /// two events of the same buffer coincide in time.
    ///
    /// # Examples
    ///
    /// ```
    /// use memplan_core::{space::SpaceSize, time::{TimeInterval, TimePoint}};
    /// use memplan_model::buffer::{Buffer, Gap};
    ///
    /// let t = |a: i64, b: i64| TimeInterval::new(TimePoint::new(a), TimePoint::new(b));
    /// let buffer = Buffer::new(t(0, 10), SpaceSize::new(4), vec![Gap::unwindowed(t(3, 6))]);
    /// assert!(buffer.is_ok());
    ///
    /// let touching = Buffer::new(t(0, 10), SpaceSize::new(4), vec![Gap::unwindowed(t(0, 6))]);
    /// assert!(touching.is_err());
    /// ```
    pub fn new(
        lifespan: TimeInterval<T>,
        size: SpaceSize,
        gaps: Vec<Gap<T>>,
    ) -> Result<Self, BufferBuildError<T>> {
        if lifespan.is_empty() {
            return Err(EmptyLifespanError::new(lifespan.lower()).into());
        }

        let mut previous: Option<TimeInterval<T>> = None;
        for (gap_index, gap) in gaps.iter().enumerate() {
            let extent = gap.lifespan();
            if extent.is_empty() {
                return Err(EmptyGapError::new(gap_index, extent.lower()).into());
            }
            if extent.lower() <= lifespan.lower() || extent.upper() >= lifespan.upper() {
                return Err(GapNotInteriorError::new(gap_index, extent, lifespan).into());
            }
            if let Some(prev) = previous {
                if extent.lower() <= prev.upper() {
                    return Err(OverlappingGapsError::new(gap_index, prev, extent).into());
                }
            }
            previous = Some(extent);
        }

        Ok(Self::from_parts_unchecked(lifespan, size, gaps))
    }

    #[inline]
    pub(crate) fn from_parts_unchecked(
        lifespan: TimeInterval<T>,
        size: SpaceSize,
        gaps: Vec<Gap<T>>,
    ) -> Self {
        Self {
            lifespan,
            size,
            gaps,
        }
    }

    #[inline]
    pub fn lifespan(&self) -> TimeInterval<T> {
        self.lifespan
    }

    #[inline]
    pub fn size(&self) -> SpaceSize {
        self.size
    }

    #[inline]
    pub fn gaps(&self) -> &[Gap<T>] {
        &self.gaps
    }

    #[inline]
    pub fn default_window(&self) -> Window {
        Window::default_for(self.size)
    }

    /// Chronological pieces of the buffer's footprint.
    ///
    /// Outside its gaps a buffer occupies its default window; inside a
    /// windowed gap it occupies that gap's window; inside an unwindowed gap
    /// it occupies nothing and contributes no piece.
    pub fn pieces(&self) -> Vec<(TimeInterval<T>, Window)> {
        let mut pieces = Vec::with_capacity(2 * self.gaps.len() + 1);
        let mut cursor = self.lifespan.lower();
        for gap in &self.gaps {
            let extent = gap.lifespan();
            if cursor < extent.lower() {
                pieces.push((TimeInterval::new(cursor, extent.lower()), self.default_window()));
            }
            if let Some(window) = gap.window() {
                pieces.push((extent, window));
            }
            cursor = extent.upper();
        }
        if cursor < self.lifespan.upper() {
            pieces.push((
                TimeInterval::new(cursor, self.lifespan.upper()),
                self.default_window(),
            ));
        }
        pieces
    }

    /// The spatial footprint this buffer imposes on `other`.
    ///
    /// If `other` sits directly above `self`, its offset must exceed
    /// `self`'s offset by at least the returned amount. This is the maximum,
    /// over every pair of pieces that are alive at the same time, of how far
    /// `self`'s piece reaches past the bottom of `other`'s piece. Returns
    /// `None` when no pair of pieces is ever simultaneously present.
    ///
    /// # Examples
    ///
    /// ```
    /// use memplan_core::{space::SpaceSize, time::{TimeInterval, TimePoint}};
    /// use memplan_model::buffer::Buffer;
    ///
    /// let t = |a: i64, b: i64| TimeInterval::new(TimePoint::new(a), TimePoint::new(b));
    /// let a = Buffer::new(t(0, 10), SpaceSize::new(4), vec![]).unwrap();
    /// let b = Buffer::new(t(5, 15), SpaceSize::new(2), vec![]).unwrap();
    /// let c = Buffer::new(t(10, 15), SpaceSize::new(2), vec![]).unwrap();
    /// assert_eq!(a.effective_size(&b), Some(SpaceSize::new(4)));
    /// assert_eq!(b.effective_size(&a), Some(SpaceSize::new(2)));
    /// assert_eq!(a.effective_size(&c), None);
    /// ```
    pub fn effective_size(&self, other: &Buffer<T>) -> Option<SpaceSize> {
        if !self.lifespan.intersects(&other.lifespan) {
            return None;
        }
        let theirs = other.pieces();
        let mut effective: Option<SpaceSize> = None;
        for (mine_extent, mine_window) in self.pieces() {
            for (their_extent, their_window) in &theirs {
                if !mine_extent.intersects(their_extent) {
                    continue;
                }
                let reach = mine_window
                    .upper()
                    .saturating_distance_from(their_window.lower());
                effective = Some(effective.map_or(reach, |e| e.max(reach)));
            }
        }
        effective
    }
}

impl<T: TimeVariable> Display for Buffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let gaps = self
            .gaps
            .iter()
            .map(|g| match g.window() {
                Some(w) => format!("{} {}", g.lifespan(), w),
                None => format!("{}", g.lifespan()),
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Buffer(lifespan: {}, size: {}, gaps: [{}])",
            self.lifespan, self.size, gaps
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memplan_core::time::TimePoint;

    type T = i64;

    fn t(a: T, b: T) -> TimeInterval<T> {
        TimeInterval::new(TimePoint::new(a), TimePoint::new(b))
    }

    fn sz(v: usize) -> SpaceSize {
        SpaceSize::new(v)
    }

    fn win(offset: usize, size: usize) -> Window {
        Window::new(SpaceOffset::new(offset), SpaceSize::new(size))
    }

    fn buf(lower: T, upper: T, size: usize, gaps: Vec<Gap<T>>) -> Buffer<T> {
        Buffer::new(t(lower, upper), sz(size), gaps).expect("valid buffer")
    }

    #[test]
    fn test_window_bounds() {
        let w = win(2, 4);
        assert_eq!(w.lower(), SpaceOffset::new(2));
        assert_eq!(w.upper(), SpaceOffset::new(6));
        assert_eq!(Window::default_for(sz(3)), win(0, 3));
        assert_eq!(format!("{}", w), "Window(2, 4)");
    }

    #[test]
    fn test_new_rejects_empty_lifespan() {
        let err = Buffer::<T>::new(t(4, 4), sz(1), vec![]).unwrap_err();
        assert!(matches!(err, BufferBuildError::EmptyLifespan(e) if e.at() == TimePoint::new(4)));
    }

    #[test]
    fn test_new_rejects_empty_gap() {
        let err = Buffer::new(t(0, 10), sz(1), vec![Gap::unwindowed(t(3, 3))]).unwrap_err();
        assert!(matches!(err, BufferBuildError::EmptyGap(e) if e.gap_index() == 0));
    }

    #[test]
    fn test_new_rejects_gap_touching_lifespan_bounds() {
        let at_start = Buffer::new(t(0, 10), sz(1), vec![Gap::unwindowed(t(0, 3))]);
        let at_end = Buffer::new(t(0, 10), sz(1), vec![Gap::windowed(t(6, 10), win(0, 1))]);
        let outside = Buffer::new(t(0, 10), sz(1), vec![Gap::unwindowed(t(8, 12))]);
        assert!(matches!(at_start, Err(BufferBuildError::GapNotInterior(_))));
        assert!(matches!(at_end, Err(BufferBuildError::GapNotInterior(_))));
        assert!(matches!(outside, Err(BufferBuildError::GapNotInterior(_))));
    }

    #[test]
    fn test_new_rejects_overlapping_or_touching_gaps() {
        let overlapping = Buffer::new(
            t(0, 20),
            sz(1),
            vec![Gap::unwindowed(t(2, 6)), Gap::unwindowed(t(5, 8))],
        );
        let touching = Buffer::new(
            t(0, 20),
            sz(1),
            vec![Gap::unwindowed(t(2, 6)), Gap::unwindowed(t(6, 8))],
        );
        let unsorted = Buffer::new(
            t(0, 20),
            sz(1),
            vec![Gap::unwindowed(t(10, 12)), Gap::unwindowed(t(2, 6))],
        );
        for result in [overlapping, touching, unsorted] {
            match result {
                Err(BufferBuildError::OverlappingGaps(e)) => assert_eq!(e.gap_index(), 1),
                other => panic!("expected OverlappingGaps, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_pieces_without_gaps_is_whole_lifespan() {
        let b = buf(0, 10, 4, vec![]);
        assert_eq!(b.pieces(), vec![(t(0, 10), win(0, 4))]);
    }

    #[test]
    fn test_pieces_skip_unwindowed_gaps_and_keep_windowed_ones() {
        let b = buf(
            0,
            20,
            4,
            vec![Gap::unwindowed(t(3, 6)), Gap::windowed(t(10, 12), win(1, 2))],
        );
        assert_eq!(
            b.pieces(),
            vec![
                (t(0, 3), win(0, 4)),
                (t(6, 10), win(0, 4)),
                (t(10, 12), win(1, 2)),
                (t(12, 20), win(0, 4)),
            ]
        );
    }

    #[test]
    fn test_effective_size_disjoint_lifespans_is_none() {
        let a = buf(0, 5, 2, vec![]);
        let b = buf(5, 10, 2, vec![]);
        assert_eq!(a.effective_size(&b), None);
        assert_eq!(b.effective_size(&a), None);
    }

    #[test]
    fn test_effective_size_plain_overlap_is_own_size() {
        let a = buf(0, 10, 3, vec![]);
        let b = buf(5, 10, 7, vec![]);
        assert_eq!(a.effective_size(&b), Some(sz(3)));
        assert_eq!(b.effective_size(&a), Some(sz(7)));
    }

    #[test]
    fn test_effective_size_none_when_overlap_falls_in_unwindowed_gap() {
        let a = buf(0, 10, 3, vec![Gap::unwindowed(t(2, 8))]);
        let b = buf(3, 7, 5, vec![]);
        assert_eq!(a.effective_size(&b), None);
        assert_eq!(b.effective_size(&a), None);
    }

    #[test]
    fn test_effective_size_uses_gap_window_during_gap() {
        let a = buf(0, 10, 8, vec![Gap::windowed(t(2, 8), win(0, 2))]);
        let b = buf(3, 7, 5, vec![]);
        assert_eq!(a.effective_size(&b), Some(sz(2)));
    }

    #[test]
    fn test_effective_size_saturates_when_windows_do_not_reach() {
        let a = buf(0, 10, 2, vec![]);
        let b = buf(
            2,
            20,
            8,
            vec![Gap::windowed(t(3, 12), win(4, 4))],
        );
        // b occupies [0, 8) only during [2, 3) and [12, 20); a reaches 2.
        assert_eq!(a.effective_size(&b), Some(sz(2)));
        let c = buf(4, 9, 8, vec![Gap::windowed(t(5, 8), win(4, 4))]);
        let d = buf(5, 8, 2, vec![]);
        // During [5, 8) c sits at [4, 8), so d's top at 2 never reaches it.
        assert_eq!(d.effective_size(&c), Some(sz(0)));
        assert_eq!(c.effective_size(&d), Some(sz(8)));
    }

    #[test]
    fn test_display_lists_gaps() {
        let b = buf(0, 10, 4, vec![Gap::windowed(t(3, 6), win(2, 4))]);
        assert_eq!(
            format!("{}", b),
            "Buffer(lifespan: [TimePoint(0), TimePoint(10)), size: SpaceSize(4), \
             gaps: [[TimePoint(3), TimePoint(6)) Window(2, 4)])"
        );
    }
}
