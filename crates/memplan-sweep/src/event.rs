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

//! Typed, time-stamped sweep events.
//!
//! Each buffer contributes a `Begin` and an `End`, and each of its gaps a
//! `GapBegin` and a `GapEnd`. Events are ordered by time, then by kind in
//! the order `GapBegin < End < Begin < GapEnd`, then by buffer. Handling
//! every departure at an instant before any arrival at the same instant
//! keeps a buffer that ends at `t` out of the overlap checks of a buffer
//! that begins at `t`.

use crate::input::SweepBuffer;
use memplan_core::{TimeVariable, time::TimePoint};
use memplan_model::{buffer::Window, id::BufferId};

/// Declaration order is the tie-break order at equal timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    GapBegin,
    End,
    Begin,
    GapEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event<T: TimeVariable> {
    time: TimePoint<T>,
    kind: EventKind,
    buffer: BufferId,
    window: Option<Window>,
}

impl<T: TimeVariable> Event<T> {
    #[inline]
    pub fn new(time: TimePoint<T>, kind: EventKind, buffer: BufferId, window: Option<Window>) -> Self {
        Self {
            time,
            kind,
            buffer,
            window,
        }
    }

    #[inline]
    pub fn time(&self) -> TimePoint<T> {
        self.time
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    #[inline]
    pub fn buffer(&self) -> BufferId {
        self.buffer
    }

    #[inline]
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    #[inline]
    pub fn sort_key(&self) -> (TimePoint<T>, EventKind, BufferId) {
        (self.time, self.kind, self.buffer)
    }

    /// Events that may close a section: `End`, any `GapBegin`, and a
    /// windowed `GapEnd`.
    #[inline]
    pub fn is_closing(&self) -> bool {
        match self.kind {
            EventKind::End | EventKind::GapBegin => true,
            EventKind::GapEnd => self.window.is_some(),
            EventKind::Begin => false,
        }
    }

    /// Events that add the buffer to the space-active set: `Begin` and an
    /// unwindowed `GapEnd`.
    #[inline]
    pub fn is_opening(&self) -> bool {
        match self.kind {
            EventKind::Begin => true,
            EventKind::GapEnd => self.window.is_none(),
            EventKind::End | EventKind::GapBegin => false,
        }
    }

    /// Events that remove the buffer from the space-active set: `End` and
    /// an unwindowed `GapBegin`.
    #[inline]
    pub fn is_vacating(&self) -> bool {
        match self.kind {
            EventKind::End => true,
            EventKind::GapBegin => self.window.is_none(),
            EventKind::Begin | EventKind::GapEnd => false,
        }
    }

    /// Events after which the buffer starts a new span.
    #[inline]
    pub fn starts_span(&self) -> bool {
        match self.kind {
            EventKind::Begin | EventKind::GapEnd => true,
            EventKind::GapBegin => self.window.is_some(),
            EventKind::End => false,
        }
    }
}

/// Builds the sorted event stream for `buffers`.
pub fn build_events<B: SweepBuffer>(buffers: &[B]) -> Vec<Event<B::Time>> {
    let gap_count: usize = buffers.iter().map(|b| b.gaps().len()).sum();
    let mut events = Vec::with_capacity(2 * (buffers.len() + gap_count));
    for (idx, buffer) in buffers.iter().enumerate() {
        let id = BufferId::new(idx);
        let lifespan = buffer.lifespan();
        events.push(Event::new(lifespan.lower(), EventKind::Begin, id, None));
        for gap in buffer.gaps() {
            let extent = gap.lifespan();
            events.push(Event::new(extent.lower(), EventKind::GapBegin, id, gap.window()));
            events.push(Event::new(extent.upper(), EventKind::GapEnd, id, gap.window()));
        }
        events.push(Event::new(lifespan.upper(), EventKind::End, id, None));
    }
    events.sort_by_key(Event::sort_key);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use memplan_core::{
        space::{SpaceOffset, SpaceSize},
        time::TimeInterval,
    };
    use memplan_model::buffer::{Buffer, Gap};

    type T = i64;

    fn t(a: T, b: T) -> TimeInterval<T> {
        TimeInterval::new(TimePoint::new(a), TimePoint::new(b))
    }

    fn win(offset: usize, size: usize) -> Window {
        Window::new(SpaceOffset::new(offset), SpaceSize::new(size))
    }

    fn buf(lower: T, upper: T, gaps: Vec<Gap<T>>) -> Buffer<T> {
        Buffer::new(t(lower, upper), SpaceSize::new(8), gaps).expect("valid buffer")
    }

    fn summary(events: &[Event<T>]) -> Vec<(T, EventKind, usize)> {
        events
            .iter()
            .map(|e| (e.time().value(), e.kind(), e.buffer().index()))
            .collect()
    }

    #[test]
    fn test_kind_order_puts_departures_first() {
        assert!(EventKind::GapBegin < EventKind::End);
        assert!(EventKind::End < EventKind::Begin);
        assert!(EventKind::Begin < EventKind::GapEnd);
    }

    #[test]
    fn test_build_events_emits_two_per_buffer_and_gap() {
        let buffers = vec![
            buf(0, 10, vec![Gap::unwindowed(t(2, 4)), Gap::windowed(t(6, 8), win(1, 2))]),
            buf(3, 5, vec![]),
        ];
        assert_eq!(build_events(&buffers).len(), 2 * (2 + 2));
    }

    #[test]
    fn test_build_events_orders_ties_by_kind_then_buffer() {
        let buffers = vec![
            buf(5, 10, vec![]),
            buf(0, 5, vec![]),
            buf(0, 20, vec![Gap::unwindowed(t(5, 7))]),
            buf(5, 9, vec![]),
        ];
        let events = build_events(&buffers);
        assert_eq!(
            summary(&events),
            vec![
                (0, EventKind::Begin, 1),
                (0, EventKind::Begin, 2),
                (5, EventKind::GapBegin, 2),
                (5, EventKind::End, 1),
                (5, EventKind::Begin, 0),
                (5, EventKind::Begin, 3),
                (7, EventKind::GapEnd, 2),
                (9, EventKind::End, 3),
                (10, EventKind::End, 0),
                (20, EventKind::End, 2),
            ]
        );
    }

    #[test]
    fn test_gap_events_carry_the_gap_window() {
        let buffers = vec![buf(0, 10, vec![Gap::windowed(t(3, 6), win(2, 4))])];
        let events = build_events(&buffers);
        let gap_windows: Vec<_> = events
            .iter()
            .filter(|e| matches!(e.kind(), EventKind::GapBegin | EventKind::GapEnd))
            .map(|e| e.window())
            .collect();
        assert_eq!(gap_windows, vec![Some(win(2, 4)), Some(win(2, 4))]);
        assert!(
            events
                .iter()
                .filter(|e| matches!(e.kind(), EventKind::Begin | EventKind::End))
                .all(|e| e.window().is_none())
        );
    }

    #[test]
    fn test_classification_of_each_event_shape() {
        let id = BufferId::new(0);
        let at = TimePoint::<T>::new(0);
        let w = Some(win(0, 1));
        let begin = Event::new(at, EventKind::Begin, id, None);
        let end = Event::new(at, EventKind::End, id, None);
        let gap_begin = Event::new(at, EventKind::GapBegin, id, None);
        let gap_end = Event::new(at, EventKind::GapEnd, id, None);
        let windowed_gap_begin = Event::new(at, EventKind::GapBegin, id, w);
        let windowed_gap_end = Event::new(at, EventKind::GapEnd, id, w);

        let shape = |e: &Event<T>| (e.is_closing(), e.is_opening(), e.is_vacating(), e.starts_span());
        assert_eq!(shape(&begin), (false, true, false, true));
        assert_eq!(shape(&end), (true, false, true, false));
        assert_eq!(shape(&gap_begin), (true, false, true, false));
        assert_eq!(shape(&gap_end), (false, true, false, true));
        assert_eq!(shape(&windowed_gap_begin), (true, false, false, true));
        assert_eq!(shape(&windowed_gap_end), (true, false, false, true));
    }

    #[test]
    fn test_no_buffers_no_events() {
        let buffers: Vec<Buffer<T>> = vec![];
        assert!(build_events(&buffers).is_empty());
    }
}
