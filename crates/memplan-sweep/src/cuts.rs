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

//! Section boundary cut counts.
//!
//! Boundary `k` sits between section `k` and section `k + 1`. A buffer
//! crosses it when its active range, from its first span to its last,
//! reaches over both sections. A boundary nobody crosses splits the
//! problem into parts that can be solved independently.

use crate::result::{CutCount, SectionRange, SweepResult};
use tracing::{instrument, trace};

impl SweepResult {
    /// Number of buffers crossing each section boundary.
    ///
    /// The result has one entry per adjacent pair of sections, so it is
    /// empty when there are fewer than two sections. Buffers with no spans
    /// cross nothing.
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
    /// assert_eq!(sweep(&buffers).calculate_cuts(), vec![1]);
    /// ```
    #[instrument(level = "trace", skip_all, fields(sections = self.sections().len()))]
    pub fn calculate_cuts(&self) -> Vec<CutCount> {
        let mut cuts = vec![0; self.sections().len().saturating_sub(1)];
        for data in self.buffer_data() {
            let Some(range) = data.active_range() else {
                continue;
            };
            for cut in &mut cuts[range.lower()..range.upper() - 1] {
                *cut += 1;
            }
        }
        trace!(zero = cuts.iter().filter(|&&c| c == 0).count(), "Counted cuts");
        cuts
    }

    /// Splits all sections into maximal ranges separated by zero cuts.
    ///
    /// The ranges are consecutive and together cover every section. No
    /// buffer is active in more than one of them.
    pub fn independent_ranges(&self) -> Vec<SectionRange> {
        let total = self.sections().len();
        if total == 0 {
            return Vec::new();
        }
        let mut ranges = Vec::new();
        let mut lower = 0;
        for (boundary, &count) in self.calculate_cuts().iter().enumerate() {
            if count == 0 {
                ranges.push(SectionRange::new(lower, boundary + 1));
                lower = boundary + 1;
            }
        }
        ranges.push(SectionRange::new(lower, total));
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{sweep, sweep_problem};
    use memplan_core::{
        space::SpaceSize,
        time::{TimeInterval, TimePoint},
    };
    use memplan_model::{
        buffer::{Buffer, Gap},
        generator::{ProblemGenerator, config::ProblemGenConfigBuilder},
    };

    type T = i64;

    fn t(a: T, b: T) -> TimeInterval<T> {
        TimeInterval::new(TimePoint::new(a), TimePoint::new(b))
    }

    fn buf(lower: T, upper: T, gaps: Vec<Gap<T>>) -> Buffer<T> {
        Buffer::new(t(lower, upper), SpaceSize::new(4), gaps).expect("valid buffer")
    }

    #[test]
    fn test_no_sections_no_cuts() {
        let result = SweepResult::default();
        assert!(result.calculate_cuts().is_empty());
        assert!(result.independent_ranges().is_empty());
    }

    #[test]
    fn test_single_section_has_no_boundaries() {
        let result = sweep(&[buf(0, 10, vec![]), buf(5, 10, vec![])]);
        assert_eq!(result.sections().len(), 1);
        assert!(result.calculate_cuts().is_empty());
        assert_eq!(result.independent_ranges(), vec![SectionRange::new(0, 1)]);
    }

    #[test]
    fn test_disjoint_buffers_leave_a_zero_cut() {
        let result = sweep(&[buf(0, 5, vec![]), buf(5, 10, vec![])]);
        assert_eq!(result.calculate_cuts(), vec![0]);
        assert_eq!(
            result.independent_ranges(),
            vec![SectionRange::new(0, 1), SectionRange::new(1, 2)]
        );
    }

    #[test]
    fn test_unwindowed_gap_is_still_crossed() {
        let result = sweep(&[buf(0, 10, vec![Gap::unwindowed(t(3, 6))])]);
        assert_eq!(result.calculate_cuts(), vec![1]);
        assert_eq!(result.independent_ranges(), vec![SectionRange::new(0, 2)]);
    }

    #[test]
    fn test_cuts_count_every_crossing_buffer() {
        let result = sweep(&[
            buf(0, 20, vec![Gap::unwindowed(t(3, 10))]),
            buf(0, 6, vec![]),
        ]);
        assert_eq!(result.sections().len(), 3);
        assert_eq!(result.calculate_cuts(), vec![2, 1]);
    }

    #[test]
    fn test_generated_zero_cuts_separate_active_ranges() {
        for seed in 0..16 {
            let config = ProblemGenConfigBuilder::<T>::new()
                .capacity(SpaceSize::new(32))
                .amount_buffers(30)
                .horizon(TimePoint::new(600))
                .mean_lifespan(20.0)
                .seed(seed)
                .build()
                .expect("valid generator config");
            let problem = ProblemGenerator::new(config).generate();
            let result = sweep_problem(&problem);
            let cuts = result.calculate_cuts();
            assert_eq!(cuts.len(), result.sections().len().saturating_sub(1));

            for (boundary, &count) in cuts.iter().enumerate() {
                let crossing = result
                    .buffer_data()
                    .iter()
                    .filter_map(|d| d.active_range())
                    .filter(|r| r.lower() <= boundary && boundary + 1 < r.upper())
                    .count();
                assert_eq!(count, crossing, "seed {seed}, boundary {boundary}");
            }

            let ranges = result.independent_ranges();
            assert_eq!(ranges.first().map(|r| r.lower()), Some(0));
            assert_eq!(ranges.last().map(|r| r.upper()), Some(result.sections().len()));
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].upper(), pair[1].lower());
            }
            for partition in result.partitions() {
                let range = partition.section_range();
                assert!(
                    ranges.iter().any(|r| r.lower() == range.lower()),
                    "seed {seed}: partition {partition} starts inside an independent range"
                );
            }
        }
    }
}
