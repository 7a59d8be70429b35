//! Behaviour state: what an agent is doing and with whom.

use std::fmt;

use town_core::{AgentId, ObjectId, Vec2};

// ── Action ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    #[default]
    Idle,
    Moving,
    Wandering,
    Commuting,
    Working,
    Sleeping,
    Eating,
    Talking,
    Using,
    WatchingMovie,
    Phone,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Idle          => "idle",
            Action::Moving        => "moving",
            Action::Wandering     => "wandering",
            Action::Commuting     => "commuting",
            Action::Working       => "working",
            Action::Sleeping      => "sleeping",
            Action::Eating        => "eating",
            Action::Talking       => "talking",
            Action::Using         => "using",
            Action::WatchingMovie => "watching_movie",
            Action::Phone         => "phone",
        }
    }

    /// Unavailable for socialising.
    #[inline]
    pub fn is_unavailable(self) -> bool {
        matches!(self, Action::Sleeping | Action::Working)
    }

    /// Part of the work shift (travelling to or sitting at the desk).
    #[inline]
    pub fn is_on_the_job(self) -> bool {
        matches!(self, Action::Working | Action::Commuting)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Interaction target ────────────────────────────────────────────────────────

/// Targets with no catalog object behind them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VirtualTarget {
    /// A shift with no free desk: work happens standing at a fixed spot.
    StandingWork,
}

/// What an agent is travelling to or interacting with.  Stores ids only;
/// the object or agent is looked up when needed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InteractionTarget {
    Object(ObjectId),
    Agent(AgentId),
    Virtual(VirtualTarget),
}

impl InteractionTarget {
    #[inline]
    pub fn object(self) -> Option<ObjectId> {
        match self {
            InteractionTarget::Object(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn agent(self) -> Option<AgentId> {
        match self {
            InteractionTarget::Agent(id) => Some(id),
            _ => None,
        }
    }
}

/// Income activity an unemployed agent is heading to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SideHustle {
    Fishing,
    Computer,
    Garden,
}

// ── Behavior ──────────────────────────────────────────────────────────────────

/// The behaviour state machine's registers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Behavior {
    pub action:      Action,
    /// Point being walked to.  `None` when stationary.
    pub target:      Option<Vec2>,
    /// Timer units left in the current action; 0 means no action running.
    pub timer:       f32,
    pub interaction: Option<InteractionTarget>,
    /// Set when the current object interaction pays out as a side hustle.
    pub side_hustle: Option<SideHustle>,
    /// Simulated minutes spent commuting so far.
    pub commute_minutes: u32,
}

impl Behavior {
    /// The only cancellation primitive: clears target, interaction, action,
    /// and timer together (plus the side-hustle tag and commute counter).
    pub fn reset(&mut self) {
        *self = Behavior::default();
    }

    /// No movement target and no timer running.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.target.is_none() && self.timer <= 0.0
    }

    #[inline]
    pub fn interacting_with_object(&self) -> Option<ObjectId> {
        self.interaction.and_then(InteractionTarget::object)
    }

    #[inline]
    pub fn interacting_with_agent(&self) -> Option<AgentId> {
        self.interaction.and_then(InteractionTarget::agent)
    }
}

// ── Bubble ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BubbleTone {
    #[default]
    Normal,
    Act,
    Money,
    Love,
    Bad,
}

impl BubbleTone {
    pub fn as_str(self) -> &'static str {
        match self {
            BubbleTone::Normal => "normal",
            BubbleTone::Act    => "act",
            BubbleTone::Money  => "money",
            BubbleTone::Love   => "love",
            BubbleTone::Bad    => "bad",
        }
    }
}

/// Transient speech bubble.  Counts down in rendered frames, not game time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bubble {
    pub text:   Option<String>,
    pub frames: u32,
    pub tone:   BubbleTone,
}

impl Bubble {
    pub fn show(&mut self, text: impl Into<String>, tone: BubbleTone, frames: u32) {
        self.text = Some(text.into());
        self.frames = frames;
        self.tone = tone;
    }

    /// One rendered frame passes.
    pub fn tick(&mut self) {
        self.frames = self.frames.saturating_sub(1);
    }

    /// The text while the bubble is still on screen.
    pub fn visible(&self) -> Option<&str> {
        if self.frames > 0 { self.text.as_deref() } else { None }
    }
}
