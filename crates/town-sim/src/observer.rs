//! Simulation observer trait for UI refresh and data collection.

use town_agent::AgentStore;
use town_core::{EventLog, GameTime};
use town_schedule::JobRegistry;

/// Callbacks invoked by [`Sim::frame`][crate::Sim::frame] at key points in
/// the frame loop.  This is the notify half of the render boundary: a UI
/// registers one of these instead of polling.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — day printer
///
/// ```rust,ignore
/// struct DayPrinter;
///
/// impl SimObserver for DayPrinter {
///     fn on_day(&mut self, time: &GameTime, agents: &AgentStore, _jobs: &JobRegistry) {
///         println!("{time}: {} residents", agents.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// A simulated minute passed.  Called after every agent's minute hook.
    fn on_minute(&mut self, _time: &GameTime) {}

    /// A simulated hour passed.
    fn on_hour(&mut self, _time: &GameTime) {}

    /// The day rolled over.  Called after daily counters are reset and
    /// before the state is persisted.
    fn on_day(&mut self, _time: &GameTime, _agents: &AgentStore, _jobs: &JobRegistry) {}

    /// Called at the end of every frame, after all agents updated.  `log`
    /// includes everything written during the frame; diff
    /// [`EventLog::appended`] to find the new entries.
    fn on_frame_end(&mut self, _time: &GameTime, _log: &EventLog) {}

    /// The frame failed and the clock was stopped.
    fn on_halt(&mut self, _time: &GameTime, _reason: &str) {}

    /// Called once by [`Sim::run_frames`][crate::Sim::run_frames] after the
    /// last frame, whether or not it succeeded.
    fn on_sim_end(&mut self, _time: &GameTime) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
