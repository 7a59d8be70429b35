//! Read-only per-agent state for renderers.

use town_agent::{Action, Agent, BubbleTone};
use town_core::{AgentId, Vec2};

/// A speech bubble that is still on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleView {
    pub text:        String,
    pub frames_left: u32,
    pub tone:        BubbleTone,
}

/// What a renderer needs to draw one resident.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentView {
    pub id:       AgentId,
    pub name:     String,
    pub pos:      Vec2,
    pub action:   Action,
    pub bubble:   Option<BubbleView>,
    pub selected: bool,
}

impl AgentView {
    pub fn of(agent: &Agent, selected: Option<AgentId>) -> Self {
        let bubble = agent.bubble.visible().map(|text| BubbleView {
            text:        text.to_owned(),
            frames_left: agent.bubble.frames,
            tone:        agent.bubble.tone,
        });
        Self {
            id: agent.id,
            name: agent.name.clone(),
            pos: agent.pos,
            action: agent.behavior.action,
            bubble,
            selected: selected == Some(agent.id),
        }
    }
}
