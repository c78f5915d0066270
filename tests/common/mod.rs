// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared helpers for the wrapper tests.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::yield_now;

/// Returns a recording closure and the log of arguments it was invoked
/// with. The closure returns `n * 10` so tests can tell fresh results from
/// stale ones.
pub fn recorder() -> (Arc<Mutex<Vec<i32>>>, impl FnMut(i32) -> i32 + Send + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&calls);
    let func = move |n: i32| {
        log.lock().push(n);
        n * 10
    };
    (calls, func)
}

/// Lets spawned timer tasks run: newly armed timers register their sleep,
/// and timers woken by `advance` perform their window-close work.
///
/// Call this after arming (so the countdown starts at the current mocked
/// instant) and after advancing past a deadline.
pub async fn run_timers() {
    for _ in 0..8 {
        yield_now().await;
    }
}
