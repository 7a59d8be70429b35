//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use town_agent::AgentStore;
use town_core::{EventLog, GameTime};
use town_schedule::JobRegistry;
use town_sim::SimObserver;

use crate::row::{DailySnapshotRow, NarrativeRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Streams new narrative entries after every frame and a resident snapshot
/// at every day rollover.
///
/// `SimObserver` methods return nothing, so the first write error is kept
/// and later ones dropped.  Check [`take_error`][Self::take_error] after the
/// run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    /// `EventLog::appended` value already written.
    log_mark:   u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Entries already in the log (the founding "moved into town" lines)
    /// are written with the first frame.
    pub fn new(writer: W) -> Self {
        Self { writer, log_mark: 0, last_error: None }
    }

    /// Skip everything the log already holds.
    pub fn starting_after(writer: W, log: &EventLog) -> Self {
        Self { writer, log_mark: log.appended(), last_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_day(&mut self, time: &GameTime, agents: &AgentStore, jobs: &JobRegistry) {
        let rows: Vec<DailySnapshotRow> = agents
            .iter()
            .map(|a| {
                let title = jobs.job(a.career.job).map_or("?", |j| j.title.as_str());
                DailySnapshotRow::of(time.day, a, title)
            })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_frame_end(&mut self, _time: &GameTime, log: &EventLog) {
        if log.appended() == self.log_mark {
            return;
        }
        let rows: Vec<NarrativeRow> = log.since(self.log_mark).map(NarrativeRow::from).collect();
        self.log_mark = log.appended();
        let result = self.writer.write_narrative(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _time: &GameTime) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
