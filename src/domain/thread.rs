/// One row of the sidebar thread list.
///
/// The list is a static demo fixture. Moving the selection only moves the
/// highlight; opening a thread clears its unread badge. Neither swaps the
/// visible transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadSummary {
    pub thread_id: u64,
    pub title: String,
    pub last_message_preview: Option<String>,
    pub unread_count: u32,
    pub is_pinned: bool,
}

impl ThreadSummary {
    pub fn new(thread_id: u64, title: impl Into<String>) -> Self {
        Self {
            thread_id,
            title: title.into(),
            last_message_preview: None,
            unread_count: 0,
            is_pinned: false,
        }
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.last_message_preview = Some(preview.into());
        self
    }

    pub fn with_unread(mut self, count: u32) -> Self {
        self.unread_count = count;
        self
    }

    pub fn pinned(mut self) -> Self {
        self.is_pinned = true;
        self
    }
}
