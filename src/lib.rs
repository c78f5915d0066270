// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading/trailing-edge debounce and throttle wrappers for coalescing
//! bursty callbacks.
//!
//! A [`Debounced`] wrapper turns a burst of calls into at most one actual
//! invocation of the wrapped closure (two when both edges are enabled),
//! with a sliding window that restarts on every call. It is meant to sit
//! in front of an expensive routine driven by a chatty notification
//! source, with [`Debounced::cancel`] called when the owning subscription
//! is torn down and [`Debounced::flush`] available when the effect must
//! happen before some other action.
//!
//! # Overview
//!
//! - **[`debounce`]** - trailing-only wrapper: the closure runs once the
//!   calls have stopped for the full delay, with the last call's arguments
//! - **[`debounce_with_options`]** - explicit [`DebounceOptions`] control
//!   over the leading and trailing edges
//! - **[`throttle`]** - alias for leading-only debounce (immediate first
//!   call, silence until the burst ends); not fixed-rate throttling
//! - **[`Debounced`]** - the wrapper handle: [`call`](Debounced::call),
//!   [`cancel`](Debounced::cancel), [`flush`](Debounced::flush)
//!
//! Calls that do not trigger an invocation return the previous result
//! (`None` before the closure has ever run). Timers run on Tokio, so the
//! wrapper must be used from within a Tokio runtime.
//!
//! # Example
//!
//! ```rust,no_run
//! use quiesce::debounce;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let recompute = debounce(
//!         |circle: String| {
//!             // several document reads and a summary computation
//!             println!("recomputing aggregates for {circle}");
//!         },
//!         Duration::from_millis(250),
//!     );
//!
//!     // Each change notification restarts the window; only the last
//!     // arguments survive the burst.
//!     recompute.call("friends".to_string());
//!     recompute.call("friends".to_string());
//!
//!     // At teardown, make sure the closure cannot run afterwards.
//!     recompute.cancel();
//! }
//! ```

mod debounce;
mod logging;
mod throttle;

pub mod prelude;

pub use debounce::{debounce, debounce_with_options, DebounceOptions, Debounced};
pub use throttle::throttle;
