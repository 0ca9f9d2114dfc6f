//! Static demo data: the thread list and the seed transcript.

use crate::domain::{
    conversation_state::ConversationState,
    message::{Attachment, AttachmentKind, DeliveryStatus, Message},
    thread::ThreadSummary,
    thread_list_state::ThreadListState,
};

/// Ids of seed messages stay below this bound; ids minted at runtime start here.
pub const FIRST_RUNTIME_MESSAGE_ID: u64 = 1_000;

pub fn demo_thread_list() -> ThreadListState {
    ThreadListState::with_threads(vec![
        ThreadSummary::new(1, "Aria")
            .with_preview("Noted. Want me to summarize what we have so far?")
            .pinned(),
        ThreadSummary::new(2, "Weekend plans")
            .with_preview("Saturday works for me")
            .with_unread(2),
        ThreadSummary::new(3, "Design crit")
            .with_preview("[Image] mockup-v3.png")
            .with_unread(5),
        ThreadSummary::new(4, "Reading club").with_preview("Chapter six was wild"),
        ThreadSummary::new(5, "Trip photos").with_preview("[Image] lake-sunrise.jpg"),
    ])
}

/// Seed transcript for the active conversation, timestamped shortly before
/// `now_ms` so the date separators and clocks look alive.
pub fn seed_conversation(now_ms: i64) -> ConversationState {
    let mut opener = Message::outgoing(1, "Hey Aria, got a minute?", now_ms - 6 * 60_000);
    opener.advance_status(DeliveryStatus::Read);

    let mut photo = Message::outgoing(3, "Here's the view from this morning", now_ms - 4 * 60_000)
        .with_attachment(Attachment::new(AttachmentKind::Image, "lake-sunrise.jpg"));
    photo.advance_status(DeliveryStatus::Read);

    ConversationState::with_messages(vec![
        opener,
        Message::incoming(2, "Always. What's up?", now_ms - 5 * 60_000),
        photo,
        Message::incoming(4, "Gorgeous! That mist over the water is unreal.", now_ms - 3 * 60_000),
    ])
}
