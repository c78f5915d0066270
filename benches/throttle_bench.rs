// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use quiesce::throttle;
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::advance;

const BURST: u64 = 100;

pub fn bench_throttle(c: &mut Criterion) {
    let mut group = c.benchmark_group("throttle_call_overhead");
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
                        // 2. Throttle emits on the leading edge only
                        let wrapped = throttle(|n: u64| n, duration);

                        // 3. First call fires, the rest coalesce
                        for n in 0..BURST {
                            black_box(wrapped.call(n));
                        }

                        // 4. Clear the window before tearing down
                        advance(duration).await;
                        wrapped.cancel();
                    });
                });
            },
        );
    }
    group.finish();
}
