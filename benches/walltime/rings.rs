use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use spsc_ring::BoundedRing;
use spsc_ring::LossyRing;

fn bounded_harness(n: usize) {
    let ring = BoundedRing::new(64);
    for i in 0..n as u64 {
        ring.write(i);
        std::hint::black_box(ring.read());
    }
}

fn lossy_harness(n: usize) {
    let ring = LossyRing::new(64);
    for i in 0..n as u64 {
        ring.write(i);
        std::hint::black_box(ring.read());
    }
}

fn lossy_overwrite_harness(n: usize) {
    // No reads: once the ring fills, every write takes the eviction path.
    let ring = LossyRing::new(64);
    for i in 0..n as u64 {
        ring.write(i);
    }
    std::hint::black_box(ring.read());
}

fn rtrb_harness(n: usize) {
    let (mut tx, mut rx) = rtrb::RingBuffer::new(64);
    for i in 0..n as u64 {
        let _ = tx.push(i);
        std::hint::black_box(rx.pop().ok());
    }
}

fn ring_comparison(c: &mut Criterion) {
    let mut bgroup = c.benchmark_group("rings");

    for n in &[10000, 100000, 1000000] {
        bgroup.bench_function(format!("bounded/{n}"), |b| b.iter(|| bounded_harness(*n)));
        bgroup.bench_function(format!("lossy/{n}"), |b| b.iter(|| lossy_harness(*n)));
        bgroup.bench_function(format!("lossy_overwrite/{n}"), |b| {
            b.iter(|| lossy_overwrite_harness(*n))
        });
        bgroup.bench_function(format!("rtrb/{n}"), |b| b.iter(|| rtrb_harness(*n)));
    }

    bgroup.finish();
}

criterion_group!(benches, ring_comparison);
criterion_main!(benches);
