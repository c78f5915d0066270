// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used types and constructors.
//!
//! ```ignore
//! use quiesce::prelude::*;
//!
//! let recompute = debounce(|id: u64| load_and_aggregate(id), Duration::from_millis(250));
//! ```

pub use crate::debounce::{debounce, debounce_with_options, DebounceOptions, Debounced};
pub use crate::throttle::throttle;
