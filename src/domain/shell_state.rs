use super::{
    composer_state::ComposerState, conversation_state::ConversationState, theme::Theme,
    thread_list_state::ThreadListState,
};

/// Pane that currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Threads,
    Conversation,
    Composer,
}

/// Root UI state: one container, three panes, one overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    active_pane: ActivePane,
    theme: Theme,
    settings_open: bool,
    thread_list: ThreadListState,
    conversation: ConversationState,
    composer: ComposerState,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            active_pane: ActivePane::default(),
            theme: Theme::default(),
            settings_open: false,
            thread_list: ThreadListState::default(),
            conversation: ConversationState::default(),
            composer: ComposerState::default(),
        }
    }
}

impl ShellState {
    pub fn with_demo_data(
        theme: Theme,
        thread_list: ThreadListState,
        conversation: ConversationState,
    ) -> Self {
        Self {
            running: true,
            active_pane: ActivePane::default(),
            theme,
            settings_open: false,
            thread_list,
            conversation,
            composer: ComposerState::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    pub fn thread_list(&self) -> &ThreadListState {
        &self.thread_list
    }

    pub fn thread_list_mut(&mut self) -> &mut ThreadListState {
        &mut self.thread_list
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut ConversationState {
        &mut self.conversation
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ComposerState {
        &mut self.composer
    }
}
