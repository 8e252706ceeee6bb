//! Helpers bounding how often filtering and UI callbacks recompute

pub mod debounce;
pub mod memoize;
pub mod throttle;

pub use debounce::Debouncer;
pub use memoize::Memoized;
pub use throttle::Throttler;
