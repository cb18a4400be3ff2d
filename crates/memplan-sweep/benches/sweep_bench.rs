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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use memplan_core::{space::SpaceSize, time::TimePoint};
use memplan_model::{
    generator::{ProblemGenerator, config::ProblemGenConfigBuilder},
    problem::Problem,
};
use memplan_sweep::sweep::sweep_problem;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn gen_problem(buffers: usize, gap_probability: f64, rng: &mut impl Rng) -> Problem<i64> {
    let config = ProblemGenConfigBuilder::<i64>::new()
        .capacity(SpaceSize::new(1 << 16))
        .max_size(SpaceSize::new(4096))
        .amount_buffers(buffers)
        .horizon(TimePoint::new((buffers as i64) * 8))
        .mean_lifespan(64.0)
        .gap_probability(gap_probability)
        .seed(rng.random())
        .build()
        .expect("valid bench config");
    ProblemGenerator::new(config).generate()
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_CAFE);

    for &n in &[100usize, 1_000, 10_000] {
        for &(label, gap_probability) in &[("no_gaps", 0.0), ("gaps", 0.5)] {
            let problem = gen_problem(n, gap_probability, &mut rng);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::new(label, n), &problem, |b, p| {
                b.iter(|| black_box(sweep_problem(black_box(p))));
            });
        }
    }
    group.finish();
}

fn bench_cuts(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_cuts");
    let mut rng = ChaCha8Rng::seed_from_u64(0xC075);

    for &n in &[100usize, 1_000, 10_000] {
        let result = sweep_problem(&gen_problem(n, 0.5, &mut rng));
        group.throughput(Throughput::Elements(result.sections().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &result, |b, r| {
            b.iter(|| black_box(r.calculate_cuts()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep, bench_cuts);
criterion_main!(benches);
