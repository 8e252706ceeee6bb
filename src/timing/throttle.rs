//! Leading-edge throttling

use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Rate-limit calls to at most one per `limit`
///
/// The first call runs immediately and opens a window; calls inside the
/// window are dropped, not queued. The first call after the window closes
/// runs and opens the next one.
///
/// Time is read from [`tokio::time::Instant`] so a paused test clock
/// controls it.
pub struct Throttler<A> {
    limit: Duration,
    f: Box<dyn Fn(A) + Send + Sync>,
    window_start: Mutex<Option<Instant>>,
}

impl<A> Throttler<A> {
    /// Create a throttler around `f`
    pub fn new(limit: Duration, f: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self {
            limit,
            f: Box::new(f),
            window_start: Mutex::new(None),
        }
    }

    /// Run `f(args)` unless a window is open; returns whether it ran
    pub fn call(&self, args: A) -> bool {
        let now = Instant::now();
        let open = match self.window_start.lock() {
            Ok(mut window_start) => {
                let open = window_start.is_none_or(|start| now.duration_since(start) >= self.limit);
                if open {
                    *window_start = Some(now);
                }
                open
            }
            Err(_) => false,
        };

        if open {
            (self.f)(args);
        }
        open
    }

    /// Close the current window so the next call runs immediately
    pub fn reset(&self) {
        if let Ok(mut window_start) = self.window_start.lock() {
            *window_start = None;
        }
    }

    /// Configured window length
    pub fn limit(&self) -> Duration {
        self.limit
    }
}
