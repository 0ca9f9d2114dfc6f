use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::{
    shell_state::{ActivePane, ShellState},
    theme::Theme,
    thread::ThreadSummary,
};

use super::bubbles::{
    build_transcript_elements, element_to_list_item, message_index_to_element_index,
};
use super::composer::render_composer;
use super::styles;

const EMPTY_STATE_TEXT: &str = "No messages yet. Press 'i' to write the first one.";

/// Fraction of the transcript width a bubble's text may occupy.
const BUBBLE_WIDTH_NUM: usize = 3;
const BUBBLE_WIDTH_DEN: usize = 5;

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState) {
    let theme = state.theme();
    frame.render_widget(
        Block::default().style(styles::screen_style(theme)),
        frame.area(),
    );

    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let [threads_area, conversation_with_composer_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .areas(content_area);

    // 3 rows for the composer: border + text line + border.
    let [transcript_area, composer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(conversation_with_composer_area);

    let active_pane = state.active_pane();
    render_thread_panel(frame, threads_area, state, active_pane);
    render_transcript_panel(frame, transcript_area, state, active_pane);
    render_composer(frame, composer_area, state.composer(), active_pane, theme);

    let status = Paragraph::new(status_line(state)).style(styles::status_bar_style(theme));
    frame.render_widget(status, status_area);

    if state.is_settings_open() {
        render_settings_overlay(frame, content_area, theme);
    }
}

fn render_thread_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ShellState,
    active_pane: ActivePane,
) {
    let theme = state.theme();
    let is_active = active_pane == ActivePane::Threads && !state.is_settings_open();
    let border_style = if is_active {
        styles::active_panel_border_style(theme)
    } else {
        styles::inactive_panel_border_style(theme)
    };

    let threads = state.thread_list().threads();
    let inner_width = area.width.saturating_sub(2) as usize;
    let items = build_thread_list_items(threads, inner_width, theme);

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Threads ({})", threads.len()))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD));

    let visual_index = state
        .thread_list()
        .selected_index()
        .and_then(|idx| compute_visual_index(threads, idx));

    let mut list_state = ListState::default();
    list_state.select(visual_index);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Builds the sidebar rows including section headers, pinned threads first.
fn build_thread_list_items(
    threads: &[ThreadSummary],
    width: usize,
    theme: Theme,
) -> Vec<ListItem<'static>> {
    let (pinned, regular): (Vec<_>, Vec<_>) = threads.iter().partition(|t| t.is_pinned);

    let mut items = Vec::new();
    let has_pinned = !pinned.is_empty();

    if has_pinned {
        items.push(section_header_item("Pinned", theme));
        for thread in &pinned {
            items.push(thread_list_item(thread, width, theme));
        }
    }

    if !regular.is_empty() || !has_pinned {
        items.push(section_header_item("All Threads", theme));
        for thread in &regular {
            items.push(thread_list_item(thread, width, theme));
        }
    }

    items
}

/// Computes the visual index in the rendered list, following the same
/// pinned-first partition as `build_thread_list_items` so the highlight stays
/// on the right row wherever a pinned thread sits in the underlying vector.
fn compute_visual_index(threads: &[ThreadSummary], thread_index: usize) -> Option<usize> {
    let target = threads.get(thread_index)?;
    let pinned_count = threads.iter().filter(|t| t.is_pinned).count();

    let visual = if target.is_pinned {
        // After the "Pinned" header.
        1 + threads[..thread_index].iter().filter(|t| t.is_pinned).count()
    } else {
        let header_rows = if pinned_count > 0 { pinned_count + 2 } else { 1 };
        header_rows
            + threads[..thread_index]
                .iter()
                .filter(|t| !t.is_pinned)
                .count()
    };

    Some(visual)
}

fn section_header_item(title: &str, theme: Theme) -> ListItem<'static> {
    let line = Line::from(vec![Span::styled(
        format!("-- {} --", title),
        styles::section_header_style(theme),
    )]);
    ListItem::new(line)
}

fn thread_list_item(thread: &ThreadSummary, width: usize, theme: Theme) -> ListItem<'static> {
    ListItem::new(thread_list_lines(thread, width, theme))
}

/// Two rows per thread: bold title with an optional unread badge, then the
/// dimmed last-message preview.
fn thread_list_lines(thread: &ThreadSummary, width: usize, theme: Theme) -> Vec<Line<'static>> {
    let mut title_spans = vec![Span::styled(
        thread.title.clone(),
        styles::thread_title_style(theme),
    )];

    if thread.unread_count > 0 {
        title_spans.push(Span::styled(
            format!(" [{}]", thread.unread_count),
            styles::unread_badge_style(theme),
        ));
    }

    let preview = thread
        .last_message_preview
        .as_deref()
        .map(normalize_preview)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "No messages yet".to_owned());

    let preview_line = Line::from(vec![Span::styled(
        truncate_to_width(&preview, width),
        styles::thread_preview_style(theme),
    )]);

    vec![Line::from(title_spans), preview_line]
}

fn normalize_preview(preview: &str) -> String {
    preview.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_to_width(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width || width < 4 {
        return text.to_owned();
    }

    let truncated: String = chars.iter().take(width - 3).collect();
    format!("{}...", truncated)
}

fn render_transcript_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut ShellState,
    active_pane: ActivePane,
) {
    let theme = state.theme();
    let is_active = active_pane == ActivePane::Conversation && !state.is_settings_open();
    let border_style = if is_active {
        styles::active_panel_border_style(theme)
    } else {
        styles::inactive_panel_border_style(theme)
    };

    let title = transcript_title(state);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let conversation = state.conversation();
    if conversation.is_empty() && !conversation.is_bot_typing() {
        let empty = Paragraph::new(EMPTY_STATE_TEXT)
            .style(styles::empty_state_style(theme))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let max_text_width = (inner_width * BUBBLE_WIDTH_NUM / BUBBLE_WIDTH_DEN).max(1);

    let elements =
        build_transcript_elements(conversation.messages(), conversation.is_bot_typing(), max_text_width);
    let items: Vec<ListItem<'static>> = elements
        .iter()
        .map(|element| element_to_list_item(element, theme))
        .collect();

    let viewport_height = area.height.saturating_sub(2) as usize;
    let element_index = conversation
        .selected_index()
        .and_then(|msg_idx| message_index_to_element_index(&elements, msg_idx));

    if let Some(idx) = element_index {
        state
            .conversation_mut()
            .update_scroll_offset(idx, viewport_height);
    }
    let scroll_offset = state.conversation().scroll_offset();

    let list = List::new(items).block(block);

    let mut list_state = ListState::default();
    list_state.select(element_index);
    *list_state.offset_mut() = scroll_offset;
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn transcript_title(state: &ShellState) -> String {
    match state.thread_list().selected_thread() {
        Some(thread) => thread.title.clone(),
        None => "Conversation".to_owned(),
    }
}

fn status_line(state: &ShellState) -> String {
    let theme = state.theme().as_label();

    if state.is_settings_open() {
        return format!("theme: {theme} | settings | t: toggle theme | esc: close");
    }

    let hints = match state.active_pane() {
        ActivePane::Threads => "j/k: move | enter: open | i: compose | t: theme | s: settings | q: quit",
        ActivePane::Conversation => {
            "j/k: scroll | i: compose | c: clear | esc: threads | t: theme | s: settings | q: quit"
        }
        ActivePane::Composer => "enter: send | esc: cancel | ctrl+a: attach | type your message",
    };

    format!("theme: {theme} | {hints}")
}

fn render_settings_overlay(frame: &mut Frame<'_>, area: Rect, theme: Theme) {
    let overlay_area = overlay_rect(area, 60, 60);

    frame.render_widget(Clear, overlay_area);

    let lines = settings_lines(theme);
    let panel = Paragraph::new(lines)
        .style(styles::screen_style(theme))
        .block(
            Block::default()
                .title("Settings")
                .borders(Borders::ALL)
                .border_style(styles::active_panel_border_style(theme)),
        );
    frame.render_widget(panel, overlay_area);
}

fn settings_lines(theme: Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  Theme: {} (press t to toggle)", theme.as_label()),
            styles::overlay_title_style(theme),
        )),
        Line::default(),
        Line::from(Span::styled(
            "  Keys".to_owned(),
            styles::overlay_title_style(theme),
        )),
        overlay_text("  j/k     move / scroll", theme),
        overlay_text("  enter   open thread / send message", theme),
        overlay_text("  i       focus the composer", theme),
        overlay_text("  c       clear the conversation", theme),
        overlay_text("  ctrl+a  cycle staged attachment", theme),
        overlay_text("  ctrl+c  quit from anywhere", theme),
        Line::default(),
        overlay_text("  press esc to close", theme),
    ]
}

fn overlay_text(text: &'static str, theme: Theme) -> Line<'static> {
    Line::from(Span::styled(text, styles::overlay_text_style(theme)))
}

/// Centers a percent-sized rectangle inside `area`.
fn overlay_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, vertical, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .areas(area);

    let [_, horizontal, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .areas(vertical);

    horizontal
}
