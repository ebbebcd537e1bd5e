//! Headless run loop.
//!
//! Drives a [`World`] until it goes extinct, reaches a tick limit, or a stop
//! is requested through a [`StopHandle`].

use crate::model::config::SimConfig;
use crate::model::world::World;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why [`App::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Extinct,
    TickLimit,
    Requested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub reason: StopReason,
}

/// Cloneable flag that asks a running [`App`] to stop after the current tick.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
        tracing::info!("Stop requested");
    }

    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct App {
    pub world: World,
    pub running: bool,
    pub max_ticks: Option<u64>,
    /// Minimum wall time per tick; `None` runs as fast as possible.
    pub throttle: Option<Duration>,
    stop: StopHandle,
}

impl App {
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        let throttle = frame_budget(config.target_fps);
        let world = World::new(config)?;
        Ok(Self {
            world,
            running: true,
            max_ticks: None,
            throttle,
            stop: StopHandle::default(),
        })
    }

    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Drops the frame budget so ticks run back to back.
    #[must_use]
    pub fn unthrottled(mut self) -> Self {
        self.throttle = None;
        self
    }

    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Ticks the world until a stop condition holds.
    pub fn run(&mut self) -> RunSummary {
        let start_tick = self.world.tick;
        let reason = loop {
            if let Some(reason) = self.stop_reason() {
                break reason;
            }
            let frame_start = Instant::now();
            self.world.update();

            if let Some(budget) = self.throttle {
                let spent = frame_start.elapsed();
                if spent < budget {
                    std::thread::sleep(budget - spent);
                }
            }
        };
        self.running = false;

        let summary = RunSummary {
            ticks: self.world.tick - start_tick,
            reason,
        };
        let metrics = self.world.metrics();
        tracing::info!(
            ticks = summary.ticks,
            reason = ?summary.reason,
            dinos = self.world.population_count(),
            plants = self.world.plant_count(),
            births = metrics.births(),
            deaths = metrics.deaths(),
            mean_tick_us = metrics.mean_tick_duration().as_micros() as u64,
            "Simulation finished"
        );
        summary
    }

    fn stop_reason(&self) -> Option<StopReason> {
        if self.stop.is_stop_requested() {
            Some(StopReason::Requested)
        } else if self.world.is_extinct() {
            Some(StopReason::Extinct)
        } else if self.max_ticks.is_some_and(|max| self.world.tick >= max) {
            Some(StopReason::TickLimit)
        } else {
            None
        }
    }
}

fn frame_budget(target_fps: u64) -> Option<Duration> {
    (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / target_fps as f64))
}
