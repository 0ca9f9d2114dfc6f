//! Canned replies for the simulated partner.
//!
//! Replies rotate through a fixed list so the demo is deterministic. A very
//! short prompt gets a nudge instead of the next scripted line.

/// Prompts shorter than this (after trimming) get the nudge reply.
const SHORT_PROMPT_CHARS: usize = 3;

const NUDGE_REPLY: &str = "Go on, I'm listening.";

const SCRIPTED_REPLIES: &[&str] = &[
    "That's a great point. Tell me more about it.",
    "Interesting! I hadn't thought of it that way.",
    "Makes sense to me. What happens next?",
    "I see what you mean. Let's dig into the details.",
    "Noted. Want me to summarize what we have so far?",
];

/// Deterministic reply source for the simulated partner.
#[derive(Debug, Clone, Default)]
pub struct ReplyScript {
    next_index: usize,
}

impl ReplyScript {
    /// Picks the reply for an outgoing prompt and advances the rotation.
    pub fn next_reply(&mut self, prompt: &str) -> String {
        if prompt.trim().chars().count() < SHORT_PROMPT_CHARS {
            return NUDGE_REPLY.to_owned();
        }

        let reply = SCRIPTED_REPLIES[self.next_index % SCRIPTED_REPLIES.len()];
        self.next_index += 1;
        reply.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_rotate_through_the_scripted_list() {
        let mut script = ReplyScript::default();

        let first = script.next_reply("How was your day?");
        let second = script.next_reply("Anything else?");

        assert_eq!(first, SCRIPTED_REPLIES[0]);
        assert_eq!(second, SCRIPTED_REPLIES[1]);
    }

    #[test]
    fn rotation_wraps_around() {
        let mut script = ReplyScript::default();
        for _ in 0..SCRIPTED_REPLIES.len() {
            script.next_reply("A long enough prompt");
        }

        assert_eq!(script.next_reply("Another prompt"), SCRIPTED_REPLIES[0]);
    }

    #[test]
    fn short_prompt_gets_the_nudge_without_advancing_rotation() {
        let mut script = ReplyScript::default();

        assert_eq!(script.next_reply("ok"), NUDGE_REPLY);
        assert_eq!(script.next_reply("  hm  "), NUDGE_REPLY);
        assert_eq!(script.next_reply("A real question"), SCRIPTED_REPLIES[0]);
    }
}
