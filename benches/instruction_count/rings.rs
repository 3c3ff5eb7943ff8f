use std::hint::black_box;

use iai_callgrind::library_benchmark;
use iai_callgrind::library_benchmark_group;
use iai_callgrind::main;
use spsc_ring::BoundedRing;
use spsc_ring::LossyRing;

#[library_benchmark]
fn bench_bounded() {
    let ring = BoundedRing::new(64);
    for i in 0..10_000u64 {
        ring.write(i);
        black_box(ring.read());
    }
}

#[library_benchmark]
fn bench_lossy() {
    let ring = LossyRing::new(64);
    for i in 0..10_000u64 {
        ring.write(i);
        black_box(ring.read());
    }
}

#[library_benchmark]
fn bench_lossy_overwrite() {
    let ring = LossyRing::new(64);
    for i in 0..10_000u64 {
        ring.write(i);
    }
    black_box(ring.read());
}

#[library_benchmark]
fn bench_rtrb() {
    let (mut tx, mut rx) = rtrb::RingBuffer::new(64);
    for i in 0..10_000u64 {
        let _ = tx.push(i);
        black_box(rx.pop().ok());
    }
}

library_benchmark_group!(
    name = bench_group;
    benchmarks = bench_bounded, bench_lossy, bench_lossy_overwrite, bench_rtrb
);
main!(library_benchmark_groups = bench_group);
