//! Style definitions for the UI components. Every style is derived from the
//! active theme, so the whole screen flips with one toggle.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::theme::Theme;

fn text_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

fn dim_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::DarkGray,
        Theme::Light => Color::Gray,
    }
}

fn accent_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Cyan,
        Theme::Light => Color::Blue,
    }
}

/// Background fill for the whole screen.
pub fn screen_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().bg(Color::Black).fg(Color::White),
        Theme::Light => Style::default().bg(Color::White).fg(Color::Black),
    }
}

// =============================================================================
// Panels
// =============================================================================

pub fn active_panel_border_style(theme: Theme) -> Style {
    Style::default().fg(accent_color(theme))
}

pub fn inactive_panel_border_style(theme: Theme) -> Style {
    Style::default().fg(dim_color(theme))
}

// =============================================================================
// Thread list
// =============================================================================

/// Style for thread titles (bold).
pub fn thread_title_style(theme: Theme) -> Style {
    Style::default()
        .fg(text_color(theme))
        .add_modifier(Modifier::BOLD)
}

/// Style for last-message preview text (dimmed).
pub fn thread_preview_style(theme: Theme) -> Style {
    Style::default().fg(dim_color(theme))
}

/// Style for unread count badges.
pub fn unread_badge_style(_theme: Theme) -> Style {
    Style::default().fg(Color::Green)
}

/// Style for section headers like "-- Pinned --".
pub fn section_header_style(theme: Theme) -> Style {
    Style::default().fg(dim_color(theme))
}

// =============================================================================
// Transcript
// =============================================================================

/// Bubble body for your own messages.
pub fn bubble_you_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().bg(Color::Blue).fg(Color::White),
        Theme::Light => Style::default().bg(Color::Cyan).fg(Color::Black),
    }
}

/// Bubble body for the partner's messages.
pub fn bubble_bot_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().bg(Color::DarkGray).fg(Color::White),
        Theme::Light => Style::default().bg(Color::Gray).fg(Color::Black),
    }
}

/// Time and delivery glyph under a bubble.
pub fn bubble_meta_style(theme: Theme) -> Style {
    Style::default().fg(dim_color(theme))
}

/// Delivery glyph once the message is read.
pub fn read_receipt_style(theme: Theme) -> Style {
    Style::default().fg(accent_color(theme))
}

/// Attachment labels like [Image] sunset.png.
pub fn attachment_style(theme: Theme) -> Style {
    Style::default().fg(accent_color(theme))
}

pub fn date_separator_style(theme: Theme) -> Style {
    Style::default().fg(dim_color(theme))
}

pub fn typing_indicator_style(theme: Theme) -> Style {
    Style::default()
        .fg(dim_color(theme))
        .add_modifier(Modifier::ITALIC)
}

pub fn empty_state_style(theme: Theme) -> Style {
    Style::default().fg(dim_color(theme))
}

// =============================================================================
// Composer and chrome
// =============================================================================

pub fn composer_prompt_style(theme: Theme) -> Style {
    Style::default().fg(accent_color(theme))
}

pub fn composer_text_style(theme: Theme) -> Style {
    Style::default().fg(text_color(theme))
}

pub fn composer_placeholder_style(theme: Theme) -> Style {
    Style::default().fg(dim_color(theme))
}

pub fn status_bar_style(theme: Theme) -> Style {
    Style::default().fg(dim_color(theme))
}

pub fn overlay_title_style(theme: Theme) -> Style {
    Style::default()
        .fg(text_color(theme))
        .add_modifier(Modifier::BOLD)
}

pub fn overlay_text_style(theme: Theme) -> Style {
    Style::default().fg(text_color(theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_styles_differ_between_themes() {
        assert_ne!(screen_style(Theme::Dark), screen_style(Theme::Light));
    }

    #[test]
    fn thread_title_style_is_bold() {
        for theme in [Theme::Dark, Theme::Light] {
            assert!(thread_title_style(theme)
                .add_modifier
                .contains(Modifier::BOLD));
        }
    }

    #[test]
    fn unread_badge_is_green_in_both_themes() {
        assert_eq!(unread_badge_style(Theme::Dark).fg, Some(Color::Green));
        assert_eq!(unread_badge_style(Theme::Light).fg, Some(Color::Green));
    }

    #[test]
    fn bubble_bodies_keep_text_readable_on_light_background() {
        assert_eq!(bubble_you_style(Theme::Light).fg, Some(Color::Black));
        assert_eq!(bubble_bot_style(Theme::Light).fg, Some(Color::Black));
    }

    #[test]
    fn typing_indicator_is_italic() {
        assert!(typing_indicator_style(Theme::Dark)
            .add_modifier
            .contains(Modifier::ITALIC));
    }
}
