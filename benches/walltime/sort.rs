use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BatchSize;
use criterion::Criterion;
use heapsort::heap_sort;

fn scrambled(len: usize) -> Vec<u64> {
    // xorshift64; deterministic across runs.
    let mut state = 0x9E3779B97F4A7C15u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

fn presorted(len: usize) -> Vec<u64> {
    let mut data = scrambled(len);
    data.sort_unstable();
    data
}

fn reversed(len: usize) -> Vec<u64> {
    let mut data = presorted(len);
    data.reverse();
    data
}

fn sort_comparison(c: &mut Criterion) {
    let mut bgroup = c.benchmark_group("sort");

    for n in &[1000, 100000] {
        let shapes = [
            ("scrambled", scrambled(*n)),
            ("presorted", presorted(*n)),
            ("reversed", reversed(*n)),
        ];
        for (shape, input) in &shapes {
            bgroup.bench_function(format!("heap_sort/{shape}/{n}"), |b| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| {
                        heap_sort(&mut data);
                        data
                    },
                    BatchSize::SmallInput,
                )
            });
            bgroup.bench_function(format!("sort_unstable/{shape}/{n}"), |b| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| {
                        data.sort_unstable();
                        data
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    bgroup.finish();
}

criterion_group!(benches, sort_comparison);
criterion_main!(benches);
