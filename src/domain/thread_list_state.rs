use super::thread::ThreadSummary;

/// Selection state over the sidebar thread list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThreadListState {
    threads: Vec<ThreadSummary>,
    selected_index: Option<usize>,
}

impl ThreadListState {
    pub fn with_threads(threads: Vec<ThreadSummary>) -> Self {
        let selected_index = if threads.is_empty() { None } else { Some(0) };
        Self {
            threads,
            selected_index,
        }
    }

    pub fn threads(&self) -> &[ThreadSummary] {
        &self.threads
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_thread(&self) -> Option<&ThreadSummary> {
        self.selected_index.and_then(|index| self.threads.get(index))
    }

    /// Replaces the thread list, keeping the selection on the same thread id
    /// when it survives the swap.
    pub fn set_threads(&mut self, threads: Vec<ThreadSummary>) {
        let previous_id = self.selected_thread().map(|thread| thread.thread_id);
        self.threads = threads;
        self.selected_index = resolve_selection_index(&self.threads, previous_id);
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        let last_index = self.threads.len().saturating_sub(1);
        self.selected_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        self.selected_index = Some(index.saturating_sub(1));
    }

    /// Clears the unread badge on the selected thread. Opening a thread counts
    /// as reading it.
    pub fn mark_selected_read(&mut self) {
        if let Some(index) = self.selected_index {
            if let Some(thread) = self.threads.get_mut(index) {
                thread.unread_count = 0;
            }
        }
    }
}

fn resolve_selection_index(
    threads: &[ThreadSummary],
    previous_id: Option<u64>,
) -> Option<usize> {
    if threads.is_empty() {
        return None;
    }

    previous_id
        .and_then(|id| threads.iter().position(|thread| thread.thread_id == id))
        .or(Some(0))
}
