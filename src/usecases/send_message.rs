//! Draft validation and construction of outgoing messages.

use crate::domain::{composer_state::Draft, message::Message};

/// Domain-level errors for the send operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMessageError {
    /// Draft text is empty after trimming and nothing is attached.
    EmptyDraft,
}

/// Builds the outgoing message for a composer draft.
///
/// Trims the text; a blank draft with no attachment is rejected and must not
/// produce a message.
pub fn build_outgoing(id: u64, draft: Draft, now_ms: i64) -> Result<Message, SendMessageError> {
    let text = draft.text.trim();
    if text.is_empty() && draft.attachment.is_none() {
        return Err(SendMessageError::EmptyDraft);
    }

    let mut message = Message::outgoing(id, text, now_ms);
    message.attachment = draft.attachment;
    Ok(message)
}
