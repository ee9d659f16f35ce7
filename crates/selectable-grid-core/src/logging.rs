//! Logging facilities for the selectable grid.
//!
//! The grid is instrumented with the `tracing` crate. To see logs, install a
//! subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("selectable_grid=debug")
//!     .init();
//! ```
//!
//! Mutations of the selection log at `debug`, refused requests at `trace`,
//! and suspicious input (such as duplicate catalog entries) at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "selectable_grid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "selectable_grid_core::signal";
    /// Selection model target.
    pub const MODEL: &str = "selectable_grid::model";
    /// Configuration loading target.
    pub const CONFIG: &str = "selectable_grid::config";
    /// Presentation controller target.
    pub const PRESENTER: &str = "selectable_grid::presenter";
}

/// A guard that logs how long a scope took when dropped.
///
/// Only records at `trace` level, so it costs a timestamp when tracing is off.
///
/// ```
/// use selectable_grid_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("rebuild_positions");
///     // ... work ...
/// }
/// ```
#[derive(Debug)]
pub struct PerfSpan {
    name: &'static str,
    start: std::time::Instant,
}

impl PerfSpan {
    /// Start timing a named scope.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: std::time::Instant::now(),
        }
    }

    /// Time elapsed since the span started.
    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for PerfSpan {
    fn drop(&mut self) {
        tracing::trace!(
            target: targets::CORE,
            span = self.name,
            elapsed_us = self.start.elapsed().as_micros() as u64,
            "perf span finished"
        );
    }
}
