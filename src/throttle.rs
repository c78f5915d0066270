// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle wrapper: a configuration alias for leading-only debounce.
//!
//! `throttle` here is **not** classic fixed-rate throttling. It is the same
//! sliding-window state machine as [`crate::debounce`] with
//! `{leading: true, trailing: false}`: the first call of a burst invokes
//! the closure immediately, and every further call restarts the window, so
//! the closure stays silent until the calls have stopped for the full
//! delay. Callers expecting one invocation per fixed interval under a
//! sustained call rate will not get that behavior.

use core::time::Duration;

use crate::debounce::{debounce_with_options, DebounceOptions, Debounced};

/// Wraps `func` so that the first call of a burst invokes it immediately
/// and the rest of the burst is ignored.
///
/// Alias for [`debounce_with_options`] with
/// `{leading: true, trailing: false}`; see the module docs for how this
/// differs from fixed-rate throttling.
///
/// # Arguments
///
/// * `func` - The closure to wrap
/// * `delay` - The sliding-window duration
pub fn throttle<F, A, R>(func: F, delay: Duration) -> Debounced<F, A, R>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    debounce_with_options(
        func,
        delay,
        DebounceOptions {
            leading: true,
            trailing: false,
        },
    )
}
