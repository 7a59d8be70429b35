//! Movement step results.

/// Kind of trip being started.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Travel {
    /// Ordinary walk to an object, partner or wander point.
    Walk,
    /// Travel to the work desk; subject to the commute cap.
    Commute,
}

/// What one call to `MobilityEngine::step` or `commute_minute` did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// No target set; nothing moved.
    Stationary,
    /// Moved, still short of the target.
    EnRoute,
    /// Reached the target this step; position now equals the old target.
    Arrived,
    /// Commute cap exceeded; the agent was placed on the target.
    Teleported,
}

impl StepOutcome {
    /// The agent is now at its destination and should start interacting.
    #[inline]
    pub fn reached(self) -> bool {
        matches!(self, StepOutcome::Arrived | StepOutcome::Teleported)
    }
}
