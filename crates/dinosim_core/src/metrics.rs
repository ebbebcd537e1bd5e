//! Tick metrics for the simulation.
//!
//! Provides structured logging and counters for monitoring a running world.

use crate::tick::TickReport;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// How often the periodic summary is logged.
const SUMMARY_INTERVAL: u64 = 1000;

/// Metrics collector for simulation statistics.
pub struct Metrics {
    tick_count: AtomicU64,
    dino_count: AtomicU64,
    plant_count: AtomicU64,
    births: AtomicU64,
    deaths: AtomicU64,
    aborted: AtomicU64,
    tick_nanos: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            dino_count: AtomicU64::new(0),
            plant_count: AtomicU64::new(0),
            births: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            aborted: AtomicU64::new(0),
            tick_nanos: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration and outcome.
    pub fn record_tick(&self, duration: Duration, report: &TickReport, dinos: usize, plants: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.dino_count.store(dinos as u64, Ordering::Relaxed);
        self.plant_count.store(plants as u64, Ordering::Relaxed);
        self.births.fetch_add(report.births as u64, Ordering::Relaxed);
        self.deaths.fetch_add(report.deaths() as u64, Ordering::Relaxed);
        self.aborted.fetch_add(report.aborted as u64, Ordering::Relaxed);
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.tick_nanos.fetch_add(nanos, Ordering::Relaxed);

        if tick % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                tick = tick,
                dinos = dinos,
                plants = plants,
                births = self.births(),
                deaths = self.deaths(),
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Gets the current tick count.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn dino_count(&self) -> u64 {
        self.dino_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn plant_count(&self) -> u64 {
        self.plant_count.load(Ordering::Relaxed)
    }

    /// Total births since creation.
    #[must_use]
    pub fn births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    /// Total deaths since creation.
    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn aborted_updates(&self) -> u64 {
        self.aborted.load(Ordering::Relaxed)
    }

    /// Mean wall time per recorded tick.
    #[must_use]
    pub fn mean_tick_duration(&self) -> Duration {
        let ticks = self.tick_count();
        if ticks == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.tick_nanos.load(Ordering::Relaxed) / ticks)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Logs go to stderr. `RUST_LOG` takes precedence over `default_level`.
/// Calling this more than once is harmless.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.mean_tick_duration(), Duration::ZERO);
    }

    #[test]
    fn test_record_tick() {
        let metrics = Metrics::new();
        let report = TickReport {
            births: 2,
            starved: 1,
            out_of_bounds: 1,
            ..TickReport::default()
        };
        metrics.record_tick(Duration::from_millis(16), &report, 10, 50);
        metrics.record_tick(Duration::from_millis(4), &TickReport::default(), 9, 48);
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.dino_count(), 9);
        assert_eq!(metrics.plant_count(), 48);
        assert_eq!(metrics.births(), 2);
        assert_eq!(metrics.deaths(), 2);
        assert_eq!(metrics.mean_tick_duration(), Duration::from_millis(10));
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging("warn");
        init_logging("debug");
    }
}
