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

//! The sweep over buffer events.
//!
//! Events are applied in order to a small state machine that tracks which
//! buffers are alive and which of them need space. A section boundary is
//! materialized only at closing events, and only when time has advanced
//! since the previous boundary. A buffer that joins part way through an
//! interval is therefore attributed to the whole section that ends at the
//! next boundary. Downstream solvers rely on this exact granularity.

use crate::{
    event::{Event, EventKind, build_events},
    input::SweepBuffer,
    result::{BufferData, Overlap, Partition, Section, SectionIdx, SectionRange, SectionSpan, SweepResult},
};
use memplan_core::{TimeVariable, time::TimePoint};
use memplan_model::{buffer::Window, id::BufferId, problem::Problem};
use std::collections::BTreeSet;
use tracing::{debug, instrument, trace};

/// Sweeps `buffers` and returns sections, partitions and per-buffer data.
///
/// Buffer `i` is identified by `BufferId::new(i)` throughout the result.
///
/// # Examples
///
/// ```
/// use memplan_core::{space::SpaceSize, time::{TimeInterval, TimePoint}};
/// use memplan_model::buffer::Buffer;
/// use memplan_sweep::sweep::sweep;
///
/// let lifespan = |a, b| TimeInterval::new(TimePoint::new(a), TimePoint::new(b));
/// let buffers = vec![
///     Buffer::new(lifespan(0, 10), SpaceSize::new(4), vec![]).unwrap(),
///     Buffer::new(lifespan(5, 15), SpaceSize::new(2), vec![]).unwrap(),
/// ];
/// let result = sweep(&buffers);
/// assert_eq!(result.sections().len(), 2);
/// assert_eq!(result.partitions().len(), 1);
/// ```
#[instrument(level = "debug", skip_all, fields(buffers = buffers.len()))]
pub fn sweep<B: SweepBuffer>(buffers: &[B]) -> SweepResult {
    let events = build_events(buffers);
    trace!(events = events.len(), "Built event stream");

    let mut state = SweepState::new(buffers);
    for event in &events {
        state.apply(event);
    }
    let result = state.finish();

    debug!(
        sections = result.sections().len(),
        partitions = result.partitions().len(),
        "Sweep complete"
    );
    result
}

/// Sweeps the buffers of `problem`.
#[inline]
pub fn sweep_problem<T: TimeVariable>(problem: &Problem<T>) -> SweepResult {
    sweep(problem.buffers())
}

struct SweepState<'b, B: SweepBuffer> {
    buffers: &'b [B],
    sections: Vec<Section>,
    partitions: Vec<Partition>,
    buffer_data: Vec<BufferData>,
    /// Buffers that currently need space.
    space_active: BTreeSet<BufferId>,
    /// Buffers between `Begin` and `End`, gaps included.
    alive: BTreeSet<BufferId>,
    last_boundary: Option<TimePoint<B::Time>>,
    partition_start: SectionIdx,
    span_starts: Vec<Option<SectionIdx>>,
    windows: Vec<Window>,
}

impl<'b, B: SweepBuffer> SweepState<'b, B> {
    fn new(buffers: &'b [B]) -> Self {
        Self {
            buffers,
            sections: Vec::new(),
            partitions: Vec::new(),
            buffer_data: vec![BufferData::default(); buffers.len()],
            space_active: BTreeSet::new(),
            alive: BTreeSet::new(),
            last_boundary: None,
            partition_start: 0,
            span_starts: vec![None; buffers.len()],
            windows: buffers
                .iter()
                .map(|b| Window::default_for(b.size()))
                .collect(),
        }
    }

    fn apply(&mut self, event: &Event<B::Time>) {
        let id = event.buffer();
        let kind = event.kind();
        // The first event seeds the boundary, so nothing before it is a section.
        let last_boundary = *self.last_boundary.get_or_insert(event.time());

        if kind == EventKind::GapBegin && event.window().is_some() {
            self.windows[id.index()] = Window::default_for(self.buffers[id.index()].size());
        }
        if event.is_closing() && event.time() > last_boundary {
            self.materialize_section(event.time());
        }
        if event.is_vacating() {
            self.space_active.remove(&id);
        }
        if kind == EventKind::End {
            self.alive.remove(&id);
        }
        if event.is_closing() {
            self.close_span(id);
        }
        if kind == EventKind::End && self.alive.is_empty() {
            self.close_partition();
        }
        if let (EventKind::GapEnd, Some(window)) = (kind, event.window()) {
            self.windows[id.index()] = window;
        }
        if event.is_opening() {
            if self.alive.is_empty() {
                self.partitions.push(Partition::open(self.sections.len()));
            }
            if kind == EventKind::Begin {
                self.push_partition_member(id);
            }
            self.record_overlaps(id);
            self.space_active.insert(id);
        }
        if kind == EventKind::Begin {
            self.alive.insert(id);
        }
        if event.starts_span() {
            self.span_starts[id.index()] = Some(self.sections.len());
        }
    }

    fn materialize_section(&mut self, at: TimePoint<B::Time>) {
        trace!(
            section = self.sections.len(),
            at = %at,
            active = self.space_active.len(),
            "Materialized section"
        );
        self.sections.push(self.space_active.clone());
        self.last_boundary = Some(at);
    }

    fn close_span(&mut self, id: BufferId) {
        let Some(start) = self.span_starts[id.index()].take() else {
            return;
        };
        let span = SectionSpan::new(
            SectionRange::new(start, self.sections.len()),
            self.windows[id.index()],
        );
        self.buffer_data[id.index()].push_span(span);
    }

    fn close_partition(&mut self) {
        let range = SectionRange::new(self.partition_start, self.sections.len());
        if let Some(partition) = self.partitions.last_mut() {
            partition.close(range);
            trace!(members = partition.buffer_ids().len(), sections = %range, "Closed partition");
        }
        self.partition_start = self.sections.len();
    }

    fn push_partition_member(&mut self, id: BufferId) {
        debug_assert!(!self.partitions.is_empty(), "{} begins outside a partition", id);
        if let Some(partition) = self.partitions.last_mut() {
            partition.push_member(id);
        }
    }

    /// Records the effective sizes between `id` and every buffer already
    /// needing space, in both directions.
    fn record_overlaps(&mut self, id: BufferId) {
        let buffers = self.buffers;
        let arriving = &buffers[id.index()];
        for &other_id in &self.space_active {
            if other_id == id {
                continue;
            }
            let other = &buffers[other_id.index()];
            if let Some(size) = other.effective_size(arriving) {
                self.buffer_data[other_id.index()].insert_overlap(Overlap::new(id, size));
            }
            if let Some(size) = arriving.effective_size(other) {
                self.buffer_data[id.index()].insert_overlap(Overlap::new(other_id, size));
            }
        }
    }

    fn finish(self) -> SweepResult {
        debug_assert!(self.alive.is_empty() && self.space_active.is_empty());
        SweepResult::new(self.sections, self.partitions, self.buffer_data)
    }
}
