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

//! What a sweep produces.
//!
//! A section is a maximal run of time during which the set of buffers
//! that need space does not change, as seen at the sweep's closing
//! boundaries. Sections are stored as snapshots of buffer identifiers
//! and referred to by their position in [`SweepResult::sections`].

use memplan_core::{primitives::Interval, space::SpaceSize};
use memplan_model::{buffer::Window, id::BufferId};
use std::{collections::BTreeSet, fmt::Display};

pub type SectionIdx = usize;

/// Half-open range of section indices.
pub type SectionRange = Interval<SectionIdx>;

/// The buffers that need space during one section.
pub type Section = BTreeSet<BufferId>;

/// Number of buffers crossing one section boundary.
pub type CutCount = usize;

/// A run of sections during which a buffer occupies one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionSpan {
    section_range: SectionRange,
    window: Window,
}

impl SectionSpan {
    #[inline]
    pub fn new(section_range: SectionRange, window: Window) -> Self {
        Self {
            section_range,
            window,
        }
    }

    #[inline]
    pub fn section_range(&self) -> SectionRange {
        self.section_range
    }

    #[inline]
    pub fn window(&self) -> Window {
        self.window
    }
}

impl Display for SectionSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SectionSpan({}, {})", self.section_range, self.window)
    }
}

/// The space one buffer must leave for a partner while both are active.
///
/// Ordered by partner first, so the overlaps of a buffer can be searched
/// by partner id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Overlap {
    buffer_id: BufferId,
    effective_size: SpaceSize,
}

impl Overlap {
    #[inline]
    pub fn new(buffer_id: BufferId, effective_size: SpaceSize) -> Self {
        Self {
            buffer_id,
            effective_size,
        }
    }

    #[inline]
    pub fn buffer_id(&self) -> BufferId {
        self.buffer_id
    }

    #[inline]
    pub fn effective_size(&self) -> SpaceSize {
        self.effective_size
    }
}

impl Display for Overlap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Overlap({}, {})", self.buffer_id, self.effective_size)
    }
}

/// Per-buffer output of a sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferData {
    section_spans: Vec<SectionSpan>,
    overlaps: BTreeSet<Overlap>,
}

impl BufferData {
    /// Spans in chronological order. They never share a section.
    #[inline]
    pub fn section_spans(&self) -> &[SectionSpan] {
        &self.section_spans
    }

    #[inline]
    pub fn overlaps(&self) -> &BTreeSet<Overlap> {
        &self.overlaps
    }

    /// The effective size recorded for `partner`, if any.
    pub fn overlap_with(&self, partner: BufferId) -> Option<SpaceSize> {
        self.overlaps
            .range(Overlap::new(partner, SpaceSize::zero())..)
            .next()
            .filter(|o| o.buffer_id() == partner)
            .map(|o| o.effective_size())
    }

    /// From the first section of the first span to the end of the last.
    pub fn active_range(&self) -> Option<SectionRange> {
        let first = self.section_spans.first()?;
        let last = self.section_spans.last()?;
        Some(SectionRange::new(
            first.section_range().lower(),
            last.section_range().upper(),
        ))
    }

    pub(crate) fn push_span(&mut self, span: SectionSpan) {
        debug_assert!(
            !span.section_range().is_empty(),
            "empty section span {}",
            span
        );
        debug_assert!(
            self.section_spans
                .last()
                .is_none_or(|prev| prev.section_range().upper() <= span.section_range().lower()),
            "section span {} starts before its predecessor ends",
            span
        );
        self.section_spans.push(span);
    }

    /// Returns `false` if `partner` was already recorded.
    pub(crate) fn insert_overlap(&mut self, overlap: Overlap) -> bool {
        if let Some(existing) = self.overlap_with(overlap.buffer_id()) {
            debug_assert_eq!(
                existing,
                overlap.effective_size(),
                "conflicting effective sizes towards {}",
                overlap.buffer_id()
            );
            return false;
        }
        self.overlaps.insert(overlap)
    }
}

/// A maximal group of buffers linked by overlapping lifespans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    buffer_ids: Vec<BufferId>,
    section_range: SectionRange,
}

impl Partition {
    pub(crate) fn open(start: SectionIdx) -> Self {
        Self {
            buffer_ids: Vec::new(),
            section_range: SectionRange::new(start, start),
        }
    }

    pub(crate) fn push_member(&mut self, id: BufferId) {
        self.buffer_ids.push(id);
    }

    pub(crate) fn close(&mut self, section_range: SectionRange) {
        self.section_range = section_range;
    }

    /// Members in the order their lifespans begin.
    #[inline]
    pub fn buffer_ids(&self) -> &[BufferId] {
        &self.buffer_ids
    }

    #[inline]
    pub fn section_range(&self) -> SectionRange {
        self.section_range
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Partition(buffers: {}, sections: {})",
            self.buffer_ids.len(),
            self.section_range
        )
    }
}

/// Sections, partitions and per-buffer data of one sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepResult {
    sections: Vec<Section>,
    partitions: Vec<Partition>,
    buffer_data: Vec<BufferData>,
}

impl SweepResult {
    pub(crate) fn new(
        sections: Vec<Section>,
        partitions: Vec<Partition>,
        buffer_data: Vec<BufferData>,
    ) -> Self {
        Self {
            sections,
            partitions,
            buffer_data,
        }
    }

    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[inline]
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Indexed by [`BufferId::index`].
    #[inline]
    pub fn buffer_data(&self) -> &[BufferData] {
        &self.buffer_data
    }

    #[inline]
    pub fn buffer(&self, id: BufferId) -> Option<&BufferData> {
        self.buffer_data.get(id.index())
    }
}

impl Display for SweepResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SweepResult(sections: {}, partitions: {}, buffers: {})",
            self.sections.len(),
            self.partitions.len(),
            self.buffer_data.len()
        )
    }
}
