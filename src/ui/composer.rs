//! Composer rendering: prompt, draft text, placeholder, staged attachment.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{
    composer_state::ComposerState,
    shell_state::ActivePane,
    theme::Theme,
};

use super::styles;

/// Placeholder text shown when the composer is not focused and empty.
const PLACEHOLDER_TEXT: &str = "Press 'i' to type a message...";

/// Prompt symbol shown before the draft text.
const PROMPT_SYMBOL: &str = "> ";

pub fn render_composer(
    frame: &mut Frame<'_>,
    area: Rect,
    composer: &ComposerState,
    active_pane: ActivePane,
    theme: Theme,
) {
    let is_focused = active_pane == ActivePane::Composer;

    let border_style = if is_focused {
        styles::active_panel_border_style(theme)
    } else {
        styles::inactive_panel_border_style(theme)
    };

    let block = Block::default()
        .title(composer_title(composer))
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(build_composer_line(composer, is_focused, theme)).block(block);
    frame.render_widget(paragraph, area);

    if is_focused {
        let prefix_width = cursor_prefix_width(composer);
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.width() as u16)
            .saturating_add(prefix_width.min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Border title; surfaces the staged attachment without eating input width.
fn composer_title(composer: &ComposerState) -> String {
    match composer.attachment() {
        Some(attachment) => format!("Compose \u{2014} {}", attachment.display_label()),
        None => "Compose".to_owned(),
    }
}

fn build_composer_line(composer: &ComposerState, is_focused: bool, theme: Theme) -> Line<'static> {
    let prompt = Span::styled(
        PROMPT_SYMBOL.to_owned(),
        styles::composer_prompt_style(theme),
    );

    if !is_focused && composer.is_empty() {
        return Line::from(vec![
            prompt,
            Span::styled(
                PLACEHOLDER_TEXT.to_owned(),
                styles::composer_placeholder_style(theme),
            ),
        ]);
    }

    Line::from(vec![
        prompt,
        Span::styled(
            composer.text().to_owned(),
            styles::composer_text_style(theme),
        ),
    ])
}

/// Display width of the draft up to the cursor; wide glyphs move the cursor
/// by their full column count.
fn cursor_prefix_width(composer: &ComposerState) -> usize {
    let prefix: String = composer
        .text()
        .chars()
        .take(composer.cursor_position())
        .collect();
    prefix.width()
}
