//! Event orchestration for the shell: pane keymaps, the settings overlay,
//! and application of due simulation events.

use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        message::{Attachment, AttachmentKind, Message},
        shell_state::{ActivePane, ShellState},
    },
    sim::{
        fixtures::FIRST_RUNTIME_MESSAGE_ID,
        replies::ReplyScript,
        timeline::{SimEvent, SimPacing, SimTimeline},
    },
};

use super::{
    contracts::{Clock, ShellOrchestrator},
    send_message::{build_outgoing, SendMessageError},
};

/// Attachments the composer cycles through with ctrl+a. Demo data; there is
/// no file picker in a simulated screen.
const STAGED_ATTACHMENTS: &[(AttachmentKind, &str)] = &[
    (AttachmentKind::Image, "sunset.png"),
    (AttachmentKind::File, "notes.pdf"),
    (AttachmentKind::Audio, "voice-memo.m4a"),
];

pub struct DefaultShellOrchestrator<C>
where
    C: Clock,
{
    state: ShellState,
    timeline: SimTimeline,
    script: ReplyScript,
    clock: C,
    next_message_id: u64,
    /// Thread the transcript belongs to. Selection moves never rebind it, so
    /// late sim events cannot write a preview onto the wrong sidebar row.
    conversation_thread_id: Option<u64>,
    /// Pane that opened the composer; esc returns there.
    composer_origin: ActivePane,
}

impl<C> DefaultShellOrchestrator<C>
where
    C: Clock,
{
    pub fn new(state: ShellState, pacing: SimPacing, clock: C) -> Self {
        let conversation_thread_id = state
            .thread_list()
            .selected_thread()
            .map(|thread| thread.thread_id);

        Self {
            state,
            timeline: SimTimeline::new(pacing),
            script: ReplyScript::default(),
            clock,
            next_message_id: FIRST_RUNTIME_MESSAGE_ID,
            conversation_thread_id,
            composer_origin: ActivePane::Threads,
        }
    }

    fn mint_message_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }

    fn handle_key(&mut self, key: KeyInput) -> Result<()> {
        if self.state.is_settings_open() {
            self.handle_settings_key(&key);
            return Ok(());
        }

        match self.state.active_pane() {
            ActivePane::Threads => self.handle_threads_key(&key),
            ActivePane::Conversation => self.handle_conversation_key(&key),
            ActivePane::Composer => self.handle_composer_key(key),
        }

        Ok(())
    }

    fn handle_settings_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "t" => self.state.toggle_theme(),
            "s" | "esc" | "q" => self.state.close_settings(),
            _ => {}
        }
    }

    fn handle_threads_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "j" => self.state.thread_list_mut().select_next(),
            "k" => self.state.thread_list_mut().select_previous(),
            "l" | "enter" => {
                if self.state.thread_list().selected_thread().is_some() {
                    self.state.thread_list_mut().mark_selected_read();
                    self.state.set_active_pane(ActivePane::Conversation);
                }
            }
            "i" => self.open_composer(ActivePane::Threads),
            "t" => self.state.toggle_theme(),
            "s" => self.state.toggle_settings(),
            "q" => self.state.stop(),
            _ => {}
        }
    }

    fn handle_conversation_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "j" => self.state.conversation_mut().select_next(),
            "k" => self.state.conversation_mut().select_previous(),
            "i" => self.open_composer(ActivePane::Conversation),
            "c" => {
                // A pending reply must not repopulate a cleared transcript.
                self.timeline.cancel_all();
                self.state.conversation_mut().clear();
                tracing::info!("conversation cleared");
            }
            "h" | "esc" => self.state.set_active_pane(ActivePane::Threads),
            "t" => self.state.toggle_theme(),
            "s" => self.state.toggle_settings(),
            "q" => self.state.stop(),
            _ => {}
        }
    }

    fn handle_composer_key(&mut self, key: KeyInput) {
        if key.ctrl && key.key == "a" {
            self.cycle_staged_attachment();
            return;
        }

        match key.key.as_str() {
            "enter" => self.send_draft(),
            "esc" => {
                self.state.composer_mut().clear();
                self.state.set_active_pane(self.composer_origin);
            }
            "backspace" => self.state.composer_mut().delete_char_before(),
            "delete" => self.state.composer_mut().delete_char_at(),
            "left" => self.state.composer_mut().move_cursor_left(),
            "right" => self.state.composer_mut().move_cursor_right(),
            "home" => self.state.composer_mut().move_cursor_home(),
            "end" => self.state.composer_mut().move_cursor_end(),
            _ => {
                let mut chars = key.key.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    if !key.ctrl {
                        self.state.composer_mut().insert_char(ch);
                    }
                }
            }
        }
    }

    fn open_composer(&mut self, origin: ActivePane) {
        self.composer_origin = origin;
        self.state.set_active_pane(ActivePane::Composer);
    }

    fn cycle_staged_attachment(&mut self) {
        let composer = self.state.composer_mut();
        let next = match composer.attachment() {
            None => Some(0),
            Some(current) => STAGED_ATTACHMENTS
                .iter()
                .position(|(kind, name)| *kind == current.kind && *name == current.name)
                .map(|index| index + 1)
                .filter(|index| *index < STAGED_ATTACHMENTS.len()),
        };

        composer.stage_attachment(
            next.map(|index| Attachment::new(STAGED_ATTACHMENTS[index].0, STAGED_ATTACHMENTS[index].1)),
        );
    }

    fn send_draft(&mut self) {
        if self.state.composer().is_empty() {
            return;
        }

        let now_ms = self.clock.now_ms();
        let draft = self.state.composer_mut().take_draft();
        let id = self.mint_message_id();

        let message = match build_outgoing(id, draft, now_ms as i64) {
            Ok(message) => message,
            Err(SendMessageError::EmptyDraft) => {
                tracing::debug!("blank draft discarded");
                return;
            }
        };

        let reply = self.script.next_reply(&message.text);
        self.update_thread_preview(&message);
        tracing::info!(message_id = message.id, "outgoing message appended");

        self.state.conversation_mut().append(message);
        self.timeline.schedule_outgoing(id, reply, now_ms);
    }

    /// Keeps the sidebar preview of the thread that owns the transcript in
    /// step with the newest message.
    fn update_thread_preview(&mut self, message: &Message) {
        let Some(thread_id) = self.conversation_thread_id else {
            return;
        };

        let preview = match (&message.attachment, message.text.is_empty()) {
            (Some(attachment), true) => attachment.display_label(),
            (Some(attachment), false) => {
                format!("{} {}", attachment.kind.display_label(), message.text)
            }
            (None, _) => message.text.clone(),
        };

        let mut threads = self.state.thread_list().threads().to_vec();
        if let Some(thread) = threads
            .iter_mut()
            .find(|thread| thread.thread_id == thread_id)
        {
            thread.last_message_preview = Some(preview);
            self.state.thread_list_mut().set_threads(threads);
        }
    }

    fn apply_sim_event(&mut self, event: SimEvent, now_ms: u64) {
        match event {
            SimEvent::StatusAdvanced { message_id, status } => {
                let advanced = self
                    .state
                    .conversation_mut()
                    .advance_status(message_id, status);
                if advanced {
                    tracing::debug!(message_id, status = status.as_label(), "status advanced");
                }
            }
            SimEvent::TypingStarted => self.state.conversation_mut().set_bot_typing(true),
            SimEvent::TypingStopped => self.state.conversation_mut().set_bot_typing(false),
            SimEvent::BotReply { text } => {
                let id = self.mint_message_id();
                let message = Message::incoming(id, text, now_ms as i64);
                self.update_thread_preview(&message);
                self.state.conversation_mut().append(message);
                tracing::info!(message_id = id, "bot reply appended");
            }
        }
    }
}

impl<C> ShellOrchestrator for DefaultShellOrchestrator<C>
where
    C: Clock,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {
                let now_ms = self.clock.now_ms();
                for sim_event in self.timeline.drain_due(now_ms) {
                    self.apply_sim_event(sim_event, now_ms);
                }
            }
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        domain::{message::DeliveryStatus, theme::Theme},
        sim::fixtures,
    };

    #[derive(Debug, Default)]
    struct ManualClock {
        now_ms: Cell<u64>,
    }

    impl ManualClock {
        fn advance(&self, delta_ms: u64) {
            self.now_ms.set(self.now_ms.get() + delta_ms);
        }
    }

    impl Clock for &ManualClock {
        fn now_ms(&self) -> u64 {
            self.now_ms.get()
        }
    }

    fn orchestrator(clock: &ManualClock) -> DefaultShellOrchestrator<&ManualClock> {
        let state = ShellState::with_demo_data(
            Theme::Dark,
            fixtures::demo_thread_list(),
            crate::domain::conversation_state::ConversationState::default(),
        );
        DefaultShellOrchestrator::new(state, SimPacing::default(), clock)
    }

    fn key(name: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::plain(name))
    }

    fn type_text(orchestrator: &mut DefaultShellOrchestrator<&ManualClock>, text: &str) {
        for ch in text.chars() {
            orchestrator
                .handle_event(key(&ch.to_string()))
                .expect("char key must be handled");
        }
    }

    fn focus_composer(orchestrator: &mut DefaultShellOrchestrator<&ManualClock>) {
        orchestrator
            .handle_event(key("i"))
            .expect("i key must be handled");
        assert_eq!(orchestrator.state().active_pane(), ActivePane::Composer);
    }

    #[test]
    fn stops_on_quit_event() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("event must be handled");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn sending_text_appends_exactly_one_user_message() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        focus_composer(&mut orchestrator);
        type_text(&mut orchestrator, "Hello Aria");

        orchestrator.handle_event(key("enter")).expect("send");

        let messages = orchestrator.state().conversation().messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_outgoing());
        assert_eq!(messages[0].text, "Hello Aria");
        assert_eq!(messages[0].status, DeliveryStatus::Sending);
    }

    #[test]
    fn delay_chain_produces_exactly_one_bot_reply() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        focus_composer(&mut orchestrator);
        type_text(&mut orchestrator, "Hello Aria");
        orchestrator.handle_event(key("enter")).expect("send");

        clock.advance(60_000);
        orchestrator.handle_event(AppEvent::Tick).expect("tick");

        let messages = orchestrator.state().conversation().messages();
        assert_eq!(messages.len(), 2);
        assert!(!messages[1].is_outgoing());
        assert_eq!(messages[0].status, DeliveryStatus::Read);
        assert!(!orchestrator.state().conversation().is_bot_typing());

        // No further replies once the chain is exhausted.
        clock.advance(60_000);
        orchestrator.handle_event(AppEvent::Tick).expect("tick");
        assert_eq!(orchestrator.state().conversation().messages().len(), 2);
    }

    #[test]
    fn statuses_advance_step_by_step_with_the_clock() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        focus_composer(&mut orchestrator);
        type_text(&mut orchestrator, "Hello Aria");
        orchestrator.handle_event(key("enter")).expect("send");

        clock.advance(400);
        orchestrator.handle_event(AppEvent::Tick).expect("tick");
        assert_eq!(
            orchestrator.state().conversation().messages()[0].status,
            DeliveryStatus::Sent
        );

        clock.advance(600);
        orchestrator.handle_event(AppEvent::Tick).expect("tick");
        assert_eq!(
            orchestrator.state().conversation().messages()[0].status,
            DeliveryStatus::Delivered
        );

        clock.advance(1_000);
        orchestrator.handle_event(AppEvent::Tick).expect("tick");
        assert_eq!(
            orchestrator.state().conversation().messages()[0].status,
            DeliveryStatus::Read
        );
        assert!(orchestrator.state().conversation().is_bot_typing());
    }

    #[test]
    fn blank_draft_produces_no_message() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        focus_composer(&mut orchestrator);
        type_text(&mut orchestrator, "   ");

        orchestrator.handle_event(key("enter")).expect("send");
        clock.advance(60_000);
        orchestrator.handle_event(AppEvent::Tick).expect("tick");

        assert!(orchestrator.state().conversation().is_empty());
    }

    #[test]
    fn theme_toggle_is_idempotent_under_two_toggles() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        orchestrator.handle_event(key("t")).expect("toggle");
        assert_eq!(orchestrator.state().theme(), Theme::Light);

        orchestrator.handle_event(key("t")).expect("toggle");
        assert_eq!(orchestrator.state().theme(), Theme::Dark);
    }

    #[test]
    fn clearing_conversation_empties_list_and_cancels_pending_reply() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        orchestrator.handle_event(key("enter")).expect("open thread");
        focus_composer(&mut orchestrator);
        type_text(&mut orchestrator, "Hello Aria");
        orchestrator.handle_event(key("enter")).expect("send");
        orchestrator.handle_event(key("esc")).expect("back");
        assert_eq!(
            orchestrator.state().active_pane(),
            ActivePane::Conversation
        );

        orchestrator.handle_event(key("c")).expect("clear");
        clock.advance(60_000);
        orchestrator.handle_event(AppEvent::Tick).expect("tick");

        assert!(orchestrator.state().conversation().is_empty());
    }

    #[test]
    fn opening_thread_clears_unread_badge_and_focuses_conversation() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        orchestrator.handle_event(key("j")).expect("move");
        orchestrator.handle_event(key("enter")).expect("open");

        assert_eq!(
            orchestrator.state().active_pane(),
            ActivePane::Conversation
        );
        let threads = orchestrator.state().thread_list().threads();
        assert_eq!(threads[1].unread_count, 0);
        // Other badges are untouched.
        assert!(threads[2].unread_count > 0);
    }

    #[test]
    fn settings_overlay_captures_pane_keys() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        orchestrator.handle_event(key("s")).expect("open settings");
        assert!(orchestrator.state().is_settings_open());

        let selected = orchestrator.state().thread_list().selected_index();
        orchestrator.handle_event(key("j")).expect("captured key");
        assert_eq!(orchestrator.state().thread_list().selected_index(), selected);

        orchestrator.handle_event(key("q")).expect("close settings");
        assert!(!orchestrator.state().is_settings_open());
        assert!(orchestrator.state().is_running());
    }

    #[test]
    fn settings_overlay_toggles_theme() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        orchestrator.handle_event(key("s")).expect("open settings");

        orchestrator.handle_event(key("t")).expect("toggle");

        assert_eq!(orchestrator.state().theme(), Theme::Light);
        assert!(orchestrator.state().is_settings_open());
    }

    #[test]
    fn q_in_composer_types_instead_of_quitting() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        focus_composer(&mut orchestrator);

        orchestrator.handle_event(key("q")).expect("typed q");

        assert!(orchestrator.state().is_running());
        assert_eq!(orchestrator.state().composer().text(), "q");
    }

    #[test]
    fn ctrl_a_cycles_staged_attachments_back_to_none() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        focus_composer(&mut orchestrator);
        let ctrl_a = AppEvent::InputKey(KeyInput::new("a", true));

        orchestrator.handle_event(ctrl_a.clone()).expect("stage");
        assert_eq!(
            orchestrator
                .state()
                .composer()
                .attachment()
                .map(|a| a.name.clone()),
            Some("sunset.png".to_owned())
        );

        orchestrator.handle_event(ctrl_a.clone()).expect("stage");
        orchestrator.handle_event(ctrl_a.clone()).expect("stage");
        orchestrator.handle_event(ctrl_a).expect("unstage");
        assert!(orchestrator.state().composer().attachment().is_none());
    }

    #[test]
    fn sending_updates_the_sidebar_preview() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        focus_composer(&mut orchestrator);
        type_text(&mut orchestrator, "Fresh preview");
        orchestrator.handle_event(key("enter")).expect("send");

        let preview = orchestrator
            .state()
            .thread_list()
            .selected_thread()
            .and_then(|thread| thread.last_message_preview.clone());

        assert_eq!(preview, Some("Fresh preview".to_owned()));
    }

    #[test]
    fn late_reply_updates_the_owning_thread_even_after_selection_moves() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);
        focus_composer(&mut orchestrator);
        type_text(&mut orchestrator, "Hello Aria");
        orchestrator.handle_event(key("enter")).expect("send");
        orchestrator.handle_event(key("esc")).expect("back to threads");
        orchestrator.handle_event(key("j")).expect("move selection");

        clock.advance(60_000);
        orchestrator.handle_event(AppEvent::Tick).expect("tick");

        let threads = orchestrator.state().thread_list().threads();
        // The newly selected row keeps its own preview.
        assert_eq!(
            threads[1].last_message_preview.as_deref(),
            Some("Saturday works for me")
        );
        // The reply lands on the thread the transcript belongs to.
        assert_eq!(
            threads[0].last_message_preview.as_deref(),
            Some("That's a great point. Tell me more about it.")
        );
    }

    #[test]
    fn composer_esc_returns_to_the_pane_that_opened_it() {
        let clock = ManualClock::default();
        let mut orchestrator = orchestrator(&clock);

        focus_composer(&mut orchestrator);
        orchestrator.handle_event(key("esc")).expect("cancel");
        assert_eq!(orchestrator.state().active_pane(), ActivePane::Threads);

        orchestrator.handle_event(key("enter")).expect("open thread");
        focus_composer(&mut orchestrator);
        orchestrator.handle_event(key("esc")).expect("cancel");
        assert_eq!(
            orchestrator.state().active_pane(),
            ActivePane::Conversation
        );
    }
}
