//! Speech-bubble lines for social actions.

use town_agent::Agent;

/// Source of speech-bubble text for a social action.
///
/// An external text generator can sit behind this trait.  Returning `None`
/// (not configured, timed out, nothing to say) is always fine: the engine
/// then uses [`CannedDialogue`].  Implementations must answer immediately;
/// the frame loop never waits on them.
pub trait DialogueProvider {
    /// A line for `speaker` opening social action `action` (e.g. `"flirt"`)
    /// toward `listener`.
    fn line(&self, action: &str, speaker: &Agent, listener: &Agent) -> Option<String>;
}

/// The built-in table.  Always answers.
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedDialogue;

impl CannedDialogue {
    pub fn text(action: &str) -> &'static str {
        match action {
            "greet"     => "Hello!",
            "chat"      => "How have you been?",
            "joke"      => "Hahaha!",
            "argue"     => "Get lost!",
            "gossip"    => "Did you hear?",
            "flirt"     => "You look charming~",
            "kiss"      => "Mwah!",
            "pickup"    => "Hi, can I get to know you?",
            "deep_talk" => "What's your dream?",
            "hug"       => "Hug~",
            "propose"   => "Will you marry me?",
            _           => "~",
        }
    }

    /// The listener's answer.
    pub fn reply(action: &str) -> &'static str {
        if action == "argue" { "Hmph!" } else { "..." }
    }
}

impl DialogueProvider for CannedDialogue {
    fn line(&self, action: &str, _speaker: &Agent, _listener: &Agent) -> Option<String> {
        Some(Self::text(action).to_owned())
    }
}

/// Ask `provider`, falling back to the canned table.
pub fn line_for(provider: &dyn DialogueProvider, action: &str, speaker: &Agent, listener: &Agent) -> String {
    provider
        .line(action, speaker, listener)
        .unwrap_or_else(|| CannedDialogue::text(action).to_owned())
}
