//! Startup Trend Simulator
//!
//! An AI call seeds a `TrendSeries` (12 labels, 12 values); a background
//! task then extends it every 2.5 seconds with a bounded random walk and
//! publishes snapshots over a watch channel. The walk has a floor at zero
//! and an asymmetric jitter range (-1.8..2.2) whose upward skew is part of
//! the behavior, not an accident. The series keeps at most 20 points; the
//! oldest pair is evicted first.
//!
//! The simulator is an explicitly owned, cancellable task: `stop` consumes
//! the handle and dropping it aborts the task, so a discarded series can
//! never be updated by a leaked tick.

use std::time::Duration;

use chrono::Local;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{AdvisorError, Result};

/// Maximum points kept in the FIFO window
pub const MAX_POINTS: usize = 20;

/// Period between simulator ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(2500);

/// Lower bound of the per-tick jitter
pub const JITTER_MIN: f64 = -1.8;

/// Upper bound of the per-tick jitter (upward bias is intentional)
pub const JITTER_MAX: f64 = 2.2;

/// A windowed (label, value) time series for the growth chart.
///
/// Invariant: `labels.len() == values.len() <= MAX_POINTS`, and the series
/// is never empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

/// Shape of the JSON the trend prompt asks the AI for
#[derive(Debug, Deserialize)]
struct RawTrend {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl TrendSeries {
    /// Build a series, enforcing the shape invariant
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(AdvisorError::TrendShape {
                labels: labels.len(),
                values: values.len(),
            });
        }
        if labels.is_empty() {
            return Err(AdvisorError::EmptyTrend);
        }

        Ok(Self { labels, values })
    }

    /// Parse an AI chart-seed payload.
    ///
    /// The text is expected to be JSON, optionally wrapped in fenced-code
    /// markers which are stripped first. Parse failures surface as
    /// [`AdvisorError::MalformedTrend`]; they are never silently defaulted.
    pub fn from_ai_json(raw: &str) -> Result<Self> {
        let stripped = strip_code_fences(raw);
        let parsed: RawTrend = serde_json::from_str(&stripped)
            .map_err(|e| AdvisorError::MalformedTrend(e.to_string()))?;

        Self::new(parsed.labels, parsed.values)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent value (0.0 for a series that was never seeded)
    pub fn last_value(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// Append one point, evicting the oldest pair beyond [`MAX_POINTS`]
    pub fn push(&mut self, label: String, value: f64) {
        self.labels.push(label);
        self.values.push(value);

        if self.values.len() > MAX_POINTS {
            self.labels.remove(0);
            self.values.remove(0);
        }
    }

    /// One random-walk tick: `max(0, last + uniform(JITTER_MIN, JITTER_MAX))`
    /// labelled with the current local time.
    pub fn step(&mut self, rng: &mut impl Rng) {
        let jitter = rng.gen_range(JITTER_MIN..JITTER_MAX);
        self.step_with(jitter, Local::now().format("%H:%M").to_string());
    }

    fn step_with(&mut self, jitter: f64, label: String) {
        let next = (self.last_value() + jitter).max(0.0);
        self.push(label, next);
    }
}

/// Strip the literal fenced-code delimiters the AI wraps JSON in
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Owned handle to a running trend simulation.
///
/// The background task is the sole mutator of the series; everything else
/// observes snapshots through the watch channel. At most one simulator
/// should run per view; callers must stop (or drop) the previous one
/// before spawning a replacement.
pub struct TrendSimulator {
    task: JoinHandle<()>,
    rx: watch::Receiver<TrendSeries>,
}

impl TrendSimulator {
    /// Start ticking a seeded series at the standard period
    pub fn spawn(seed: TrendSeries) -> Self {
        Self::spawn_with_interval(seed, TICK_INTERVAL)
    }

    /// Start ticking at a custom period (tests)
    pub fn spawn_with_interval(seed: TrendSeries, period: Duration) -> Self {
        let (tx, rx) = watch::channel(seed.clone());

        let task = tokio::spawn(async move {
            let mut series = seed;
            let mut rng = SmallRng::from_entropy();
            let mut ticker = tokio::time::interval(period);
            // interval fires immediately; consume that so the first
            // published point lands one full period after the seed
            ticker.tick().await;

            loop {
                ticker.tick().await;
                series.step(&mut rng);
                if tx.send(series.clone()).is_err() {
                    break;
                }
            }
        });

        Self { task, rx }
    }

    /// Subscribe to series snapshots
    pub fn subscribe(&self) -> watch::Receiver<TrendSeries> {
        self.rx.clone()
    }

    /// Latest snapshot
    pub fn series(&self) -> TrendSeries {
        self.rx.borrow().clone()
    }

    /// Stop the simulation, consuming the handle
    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for TrendSimulator {
    fn drop(&mut self) {
        self.task.abort();
    }
}
