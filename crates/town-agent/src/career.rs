//! Job assignment and progress toward promotion.

use town_core::JobId;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Career {
    pub job:         JobId,
    /// Accumulated per shift; a promotion attempt is made once it passes the
    /// threshold, after which it resets.
    pub performance: f32,
    /// Day on which the agent left work early; the rest of that day's shift
    /// is skipped.
    pub left_early:  Option<u32>,
}

impl Default for Career {
    fn default() -> Self {
        Self::unemployed()
    }
}

impl Career {
    pub fn unemployed() -> Self {
        Self { job: JobId(0), performance: 0.0, left_early: None }
    }

    pub fn with_job(job: JobId) -> Self {
        Self { job, ..Self::unemployed() }
    }

    #[inline]
    pub fn is_unemployed(&self) -> bool {
        self.job == JobId(0)
    }

    /// Move to `job` and start over on performance.
    pub fn assign(&mut self, job: JobId) {
        self.job = job;
        self.performance = 0.0;
    }

    /// Whether the early-leave marker blocks work on `day`.
    #[inline]
    pub fn skipped_today(&self, day: u32) -> bool {
        self.left_early == Some(day)
    }
}
