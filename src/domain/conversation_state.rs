use super::message::{DeliveryStatus, Message};

/// Scroll margin - number of items to keep visible above/below cursor before scrolling.
const SCROLL_MARGIN: usize = 5;

/// The visible transcript plus typing indicator and scroll bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationState {
    messages: Vec<Message>,
    bot_typing: bool,
    selected_index: Option<usize>,
    scroll_offset: usize,
}

impl ConversationState {
    pub fn with_messages(messages: Vec<Message>) -> Self {
        let selected_index = last_index(&messages);
        Self {
            messages,
            bot_typing: false,
            selected_index,
            scroll_offset: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_bot_typing(&self) -> bool {
        self.bot_typing
    }

    pub fn set_bot_typing(&mut self, typing: bool) {
        self.bot_typing = typing;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Appends a message and snaps the selection to it so the view follows
    /// the newest bubble.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.selected_index = last_index(&self.messages);
    }

    /// Applies a scheduled delivery transition. Returns false when the message
    /// is gone (conversation cleared) or the transition is stale.
    pub fn advance_status(&mut self, message_id: u64, status: DeliveryStatus) -> bool {
        self.messages
            .iter_mut()
            .find(|message| message.id == message_id)
            .is_some_and(|message| message.advance_status(status))
    }

    /// Empties the transcript. The empty-state view becomes visible.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.bot_typing = false;
        self.selected_index = None;
        self.scroll_offset = 0;
    }

    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(idx) if idx + 1 < self.messages.len() => Some(idx + 1),
            Some(idx) => Some(idx),
        };
    }

    pub fn select_previous(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => last_index(&self.messages),
            Some(0) => Some(0),
            Some(idx) => Some(idx - 1),
        };
    }

    /// Keeps the cursor visible with SCROLL_MARGIN rows above/below.
    ///
    /// `element_index` is the visual index in the rendered list (bubbles plus
    /// separators), `viewport_height` the number of visible rows.
    pub fn update_scroll_offset(&mut self, element_index: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        let effective_margin = SCROLL_MARGIN.min(viewport_height / 2);

        if element_index < self.scroll_offset + effective_margin {
            self.scroll_offset = element_index.saturating_sub(effective_margin);
        }

        let visible_bottom = self.scroll_offset + viewport_height;
        if element_index + effective_margin >= visible_bottom {
            self.scroll_offset =
                (element_index + effective_margin + 1).saturating_sub(viewport_height);
        }
    }
}

fn last_index(messages: &[Message]) -> Option<usize> {
    if messages.is_empty() {
        None
    } else {
        Some(messages.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outgoing(id: u64, text: &str) -> Message {
        Message::outgoing(id, text, 1000)
    }

    #[test]
    fn default_state_is_empty_and_not_typing() {
        let state = ConversationState::default();

        assert!(state.is_empty());
        assert!(!state.is_bot_typing());
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn with_messages_selects_the_last_message() {
        let state =
            ConversationState::with_messages(vec![outgoing(1, "one"), outgoing(2, "two")]);

        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn append_snaps_selection_to_newest_message() {
        let mut state = ConversationState::with_messages(vec![outgoing(1, "one")]);
        state.select_previous();

        state.append(outgoing(2, "two"));

        assert_eq!(state.selected_index(), Some(1));
        assert_eq!(state.messages().len(), 2);
    }

    #[test]
    fn advance_status_updates_matching_message() {
        let mut state = ConversationState::with_messages(vec![outgoing(1, "one")]);

        assert!(state.advance_status(1, DeliveryStatus::Sent));
        assert_eq!(state.messages()[0].status, DeliveryStatus::Sent);
    }

    #[test]
    fn advance_status_for_missing_message_is_a_noop() {
        let mut state = ConversationState::with_messages(vec![outgoing(1, "one")]);

        assert!(!state.advance_status(99, DeliveryStatus::Sent));
    }

    #[test]
    fn advance_status_rejects_stale_transition() {
        let mut state = ConversationState::with_messages(vec![outgoing(1, "one")]);
        state.advance_status(1, DeliveryStatus::Delivered);

        assert!(!state.advance_status(1, DeliveryStatus::Sent));
        assert_eq!(state.messages()[0].status, DeliveryStatus::Delivered);
    }

    #[test]
    fn clear_empties_transcript_and_resets_typing() {
        let mut state = ConversationState::with_messages(vec![outgoing(1, "one")]);
        state.set_bot_typing(true);

        state.clear();

        assert!(state.is_empty());
        assert!(!state.is_bot_typing());
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn selection_stays_within_bounds() {
        let mut state = ConversationState::with_messages(vec![
            outgoing(1, "a"),
            outgoing(2, "b"),
            outgoing(3, "c"),
        ]);

        state.select_next();
        assert_eq!(state.selected_index(), Some(2));

        state.select_previous();
        state.select_previous();
        state.select_previous();
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn update_scroll_offset_follows_cursor_near_bottom() {
        let mut state = ConversationState::default();

        state.update_scroll_offset(18, 20);

        assert!(state.scroll_offset() > 0);
    }

    #[test]
    fn update_scroll_offset_ignores_zero_viewport() {
        let mut state = ConversationState::default();
        state.update_scroll_offset(18, 20);
        let offset = state.scroll_offset();

        state.update_scroll_offset(30, 0);

        assert_eq!(state.scroll_offset(), offset);
    }
}
