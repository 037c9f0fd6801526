//! Criterion micro-benchmarks comparing the settle variants.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use std::hint::black_box;
use talus_bench::{cleared_band_profile, reference_profile, towers_profile};
use talus_grid::Grid;
use talus_settle::{
    BaselineSettler, EventDrivenSettler, GreedySettler, IncrementalSettler, Propagation, Settler,
};

fn settlers() -> Vec<Box<dyn Settler>> {
    vec![
        Box::new(BaselineSettler),
        Box::new(IncrementalSettler),
        Box::new(GreedySettler),
        Box::new(EventDrivenSettler::new(Propagation::Neighbourhood)),
        Box::new(EventDrivenSettler::new(Propagation::StraightUp)),
    ]
}

fn bench_board(c: &mut Criterion, group_name: &str, board: &Grid) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(board.len() as u64));
    for settler in settlers() {
        group.bench_function(settler.name(), |b| {
            b.iter_batched_ref(
                || board.clone(),
                |g| {
                    let stats = settler.settle(&mut g.view_mut()).unwrap();
                    black_box(stats);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

/// Benchmark: settle a 128x128 random board from scratch.
fn bench_reference(c: &mut Criterion) {
    bench_board(c, "settle_reference_128", &reference_profile(42));
}

/// Benchmark: re-settle a 128x128 board after clearing an 8-row band.
fn bench_cleared_band(c: &mut Criterion) {
    bench_board(c, "settle_cleared_band_128", &cleared_band_profile(128, 128, 8, 42));
}

/// Benchmark: 64x64 towers, every token slides sideways.
fn bench_towers(c: &mut Criterion) {
    bench_board(c, "settle_towers_64", &towers_profile(64, 64));
}

/// Benchmark: settling an already-settled board, the no-op fast path.
fn bench_settled(c: &mut Criterion) {
    let mut board = reference_profile(7);
    IncrementalSettler.settle(&mut board.view_mut()).unwrap();
    bench_board(c, "settle_already_settled_128", &board);
}

criterion_group!(
    benches,
    bench_reference,
    bench_cleared_band,
    bench_towers,
    bench_settled
);
criterion_main!(benches);
