use iai_callgrind::library_benchmark;
use iai_callgrind::library_benchmark_group;
use iai_callgrind::main;

fn scrambled(len: usize) -> Vec<u64> {
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

#[library_benchmark]
#[bench::ten_k(args = (10_000), setup = scrambled)]
fn bench_heap_sort(mut data: Vec<u64>) -> Vec<u64> {
    heapsort::heap_sort(&mut data);
    data
}

#[library_benchmark]
#[bench::ten_k(args = (10_000), setup = scrambled)]
fn bench_sort_unstable(mut data: Vec<u64>) -> Vec<u64> {
    data.sort_unstable();
    data
}

library_benchmark_group!(
    name = bench_group;
    benchmarks = bench_heap_sort, bench_sort_unstable
);
main!(library_benchmark_groups = bench_group);
