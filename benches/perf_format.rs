//! Benchmark: formatting large random paragraphs at a typical terminal width.
//!
//! Run with:
//! `cargo bench --bench perf_format`
//!
//! Memory deltas are reported on stderr; the DP keeps two `num + 1` tables and
//! a prefix table, so growth should be linear in the word count.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use para_dp::Partitioner;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_words(rng: &mut StdRng, count: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"etaoinshrdlucmfwyp";
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=10);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_format_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_width_80");
    let partitioner = Partitioner::new(80).unwrap();
    for &count in &[1_000usize, 10_000, 100_000] {
        group.bench_function(format!("words_{count}"), |b| {
            b.iter_batched(
                || random_words(&mut StdRng::seed_from_u64(42), count),
                |words| {
                    let before = rss_kib();
                    let partition = partitioner.run(&words).unwrap();
                    let after = rss_kib();
                    criterion::black_box(partition.total_cost());
                    eprintln!(
                        "RSS KiB delta (words {count}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_format_perf);
criterion_main!(benches);
