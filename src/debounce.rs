// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce wrapper coalescing bursts of calls into fewer invocations.
//!
//! [`debounce`] wraps a closure so that repeated calls arriving less than
//! the configured delay apart collapse into at most one actual invocation
//! (or two, when both edges are enabled), always using the arguments of the
//! *last* call for the trailing edge:
//!
//! - Every call records its arguments and restarts the countdown
//!   (sliding window, not a fixed interval).
//! - With `leading` enabled, the first call of a burst invokes the closure
//!   immediately.
//! - With `trailing` enabled, the closure runs once the calls have stopped
//!   for the full delay, unless the leading edge already covered a
//!   single-call burst.
//! - Calls that do not themselves trigger an invocation return the result
//!   of the most recent actual invocation, stale by design.

use core::time::Duration;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::logging::trace;

/// Edge configuration for [`debounce_with_options`].
///
/// The default is trailing-only: the wrapped closure runs once per burst,
/// after the delay has elapsed following the last call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceOptions {
    /// Invoke on the first call of a burst, before the delay elapses.
    pub leading: bool,
    /// Invoke after the delay elapses following the last call of a burst.
    pub trailing: bool,
}

impl Default for DebounceOptions {
    fn default() -> Self {
        Self {
            leading: false,
            trailing: true,
        }
    }
}

/// Per-wrapper state behind the lock.
///
/// Invariant: at most one timer task is armed at a time; `epoch` is bumped
/// on every arm, cancel and flush so a timer task that woke just before
/// being aborted sees the stale epoch and does nothing.
struct Shared<F, A, R> {
    func: F,
    pending: Option<A>,
    armed: Option<JoinHandle<()>>,
    last_result: Option<R>,
    fired_on_leading: bool,
    epoch: u64,
}

/// A debounced wrapper around a closure `F: FnMut(A) -> R`.
///
/// Produced by [`debounce`], [`debounce_with_options`] or
/// [`crate::throttle`]. One instance owns one timer slot, one
/// pending-arguments slot and one last-result slot; the intended lifetime
/// is one instance per live subscription, with [`Debounced::cancel`] called
/// at teardown.
///
/// Multi-argument closures take a tuple as `A`. The closure may return a
/// future; the wrapper never awaits it, so overlapping executions are the
/// closure's own concern.
pub struct Debounced<F, A, R> {
    shared: Arc<Mutex<Shared<F, A, R>>>,
    delay: Duration,
    options: DebounceOptions,
}

impl<F, A, R> Debounced<F, A, R>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    fn new(func: F, delay: Duration, options: DebounceOptions) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                func,
                pending: None,
                armed: None,
                last_result: None,
                fired_on_leading: false,
                epoch: 0,
            })),
            delay,
            options,
        }
    }

    /// Calls the wrapper with the given arguments.
    ///
    /// Records `args` as the pending invocation (last write wins within a
    /// burst) and restarts the countdown. Returns the result of the most
    /// recent actual invocation: fresh when the leading edge fires on this
    /// call, stale otherwise, `None` before the closure has ever run.
    ///
    /// Must be called from within a Tokio runtime; the countdown is a
    /// spawned timer task. If the closure panics on the leading edge the
    /// panic propagates to this caller.
    ///
    /// The closure runs while the wrapper's internal lock is held, so it
    /// must not call back into the same wrapper.
    pub fn call(&self, args: A) -> Option<R> {
        let mut shared = self.shared.lock();
        shared.pending = Some(args);

        if let Some(handle) = shared.armed.take() {
            // Mid-window call: restart the countdown, and clear the
            // leading-edge flag so the trailing edge covers this new call.
            handle.abort();
            shared.fired_on_leading = false;
            let handle = self.arm(&mut shared);
            shared.armed = Some(handle);
            trace!("debounce window restarted");
            return shared.last_result.clone();
        }

        // First call of a new window.
        let handle = self.arm(&mut shared);
        shared.armed = Some(handle);
        trace!("debounce window armed for {:?}", self.delay);

        if self.options.leading {
            if let Some(args) = shared.pending.take() {
                let result = (shared.func)(args);
                shared.last_result = Some(result);
                shared.fired_on_leading = true;
                trace!("leading edge fired");
            }
        }

        shared.last_result.clone()
    }

    /// Clears any armed timer and discards the pending invocation.
    ///
    /// Leaves the wrapper as freshly constructed, except that the last
    /// result is kept. Idempotent: cancelling with nothing armed is a
    /// no-op. Callers owning a wrapper for the lifetime of a subscription
    /// are expected to call this at teardown so the closure cannot run
    /// after its owner is gone.
    pub fn cancel(&self) {
        let mut shared = self.shared.lock();
        shared.epoch = shared.epoch.wrapping_add(1);
        if let Some(handle) = shared.armed.take() {
            handle.abort();
            trace!("debounce window cancelled");
        }
        shared.pending = None;
        shared.fired_on_leading = false;
    }

    /// Performs the pending trailing invocation now instead of waiting out
    /// the delay.
    ///
    /// With a timer armed, runs the window-close logic synchronously (the
    /// trailing edge fires unless it is disabled or the leading edge
    /// already covered a single-call burst) and returns the resulting last
    /// result. With nothing armed, returns the current last result without
    /// invoking the closure.
    pub fn flush(&self) -> Option<R> {
        let mut shared = self.shared.lock();
        shared.epoch = shared.epoch.wrapping_add(1);
        if let Some(handle) = shared.armed.take() {
            handle.abort();
            trace!("debounce window flushed");
            Self::close_window(&mut shared, self.options.trailing);
        }
        shared.last_result.clone()
    }

    /// Arms the countdown timer and returns its task handle.
    ///
    /// The caller stores the handle in `shared.armed` and is responsible
    /// for aborting it on re-arm, cancel and flush.
    fn arm(&self, shared: &mut Shared<F, A, R>) -> JoinHandle<()> {
        shared.epoch = shared.epoch.wrapping_add(1);
        let epoch = shared.epoch;
        let state = Arc::clone(&self.shared);
        let delay = self.delay;
        let trailing = self.options.trailing;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut shared = state.lock();
            // The window was re-armed, cancelled or flushed after this
            // task woke but before it took the lock.
            if shared.epoch != epoch {
                return;
            }
            shared.armed = None;
            Self::close_window(&mut shared, trailing);
        })
    }

    /// Window-close logic shared by the timer task and `flush`.
    ///
    /// Fires the trailing edge unless it is disabled or the leading edge
    /// already covered this window, then resets the per-window state so the
    /// next call starts a fresh window.
    fn close_window(shared: &mut Shared<F, A, R>, trailing: bool) {
        let covered_by_leading = core::mem::replace(&mut shared.fired_on_leading, false);
        let pending = shared.pending.take();

        if trailing && !covered_by_leading {
            if let Some(args) = pending {
                let result = (shared.func)(args);
                shared.last_result = Some(result);
                trace!("trailing edge fired");
                return;
            }
        }
        trace!("trailing edge suppressed");
    }
}

/// Wraps `func` so that bursts of calls spaced less than `delay` apart
/// collapse into a single trailing invocation with the last call's
/// arguments.
///
/// Equivalent to [`debounce_with_options`] with [`DebounceOptions::default`].
///
/// # Arguments
///
/// * `func` - The closure to wrap
/// * `delay` - The duration of required inactivity before the closure runs
pub fn debounce<F, A, R>(func: F, delay: Duration) -> Debounced<F, A, R>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    debounce_with_options(func, delay, DebounceOptions::default())
}

/// Wraps `func` with explicit leading/trailing edge configuration.
///
/// With both edges disabled the wrapper never invokes the closure; that
/// configuration is legal but inert, and no fallback behavior is added.
///
/// # Arguments
///
/// * `func` - The closure to wrap
/// * `delay` - The sliding-window duration
/// * `options` - Which edges of the window invoke the closure
pub fn debounce_with_options<F, A, R>(
    func: F,
    delay: Duration,
    options: DebounceOptions,
) -> Debounced<F, A, R>
where
    F: FnMut(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    Debounced::new(func, delay, options)
}
