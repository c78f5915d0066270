// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use quiesce::debounce;
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::advance;

const BURST: u64 = 100;

pub fn bench_debounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce_call_overhead");
    let durations = [Duration::from_millis(10), Duration::from_secs(1)];

    for &duration in &durations {
        group.throughput(Throughput::Elements(BURST));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{duration:?}")),
            &duration,
            |bencher, &duration| {
                bencher.iter(|| {
                    // 1. Setup a lightweight, paused runtime
                    let rt = Builder::new_current_thread()
                        .enable_time()
                        .start_paused(true)
                        .build()
                        .unwrap();

                    rt.block_on(async {
                        // 2. Wrap a trivial closure
                        let wrapped = debounce(|n: u64| n, duration);

                        // 3. Burst of calls, all coalesced into one window
                        for n in 0..BURST {
                            black_box(wrapped.call(n));
                        }

                        // 4. Close the window and observe the result
                        advance(duration).await;
                        black_box(wrapped.flush());
                    });
                });
            },
        );
    }
    group.finish();
}
