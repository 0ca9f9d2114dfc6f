//! Transcript rendering: message bubbles, date separators, and the typing
//! indicator row.
//!
//! Your messages sit on the right, the partner's on the left. Each bubble is
//! a block of wrapped text lines followed by a meta line (time plus delivery
//! glyph for outgoing messages).

use chrono::{Local, TimeZone};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    message::{DeliveryStatus, Message, Sender},
    theme::Theme,
};

use super::styles;

/// A visual element of the transcript list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptElement {
    /// Date separator line (e.g. "——— 14 Feb 2026 ———").
    DateSeparator(String),
    Bubble {
        outgoing: bool,
        text_lines: Vec<String>,
        attachment: Option<String>,
        time: String,
        status: Option<DeliveryStatus>,
    },
    TypingIndicator,
}

/// Builds the transcript elements: date separators between days, one bubble
/// per message, and a typing row at the end while the partner is typing.
pub fn build_transcript_elements(
    messages: &[Message],
    bot_typing: bool,
    max_text_width: usize,
) -> Vec<TranscriptElement> {
    let mut elements = Vec::new();
    let mut prev_date: Option<chrono::NaiveDate> = None;

    for message in messages {
        let msg_date = timestamp_to_date(message.timestamp_ms);

        if prev_date != Some(msg_date) {
            elements.push(TranscriptElement::DateSeparator(format_date(msg_date)));
        }

        elements.push(bubble_element(message, max_text_width));
        prev_date = Some(msg_date);
    }

    if bot_typing {
        elements.push(TranscriptElement::TypingIndicator);
    }

    elements
}

fn bubble_element(message: &Message, max_text_width: usize) -> TranscriptElement {
    let mut text_lines = Vec::new();
    for raw_line in message.text.lines() {
        text_lines.extend(wrap_text(raw_line, max_text_width));
    }

    let status = if message.is_outgoing() {
        Some(message.status)
    } else {
        None
    };

    TranscriptElement::Bubble {
        outgoing: message.is_outgoing(),
        text_lines,
        attachment: message
            .attachment
            .as_ref()
            .map(|attachment| attachment.display_label()),
        time: format_time(message.timestamp_ms),
        status,
    }
}

/// Maps a message index to its element index, skipping separators and the
/// typing row. Returns `None` when the index is out of range.
pub fn message_index_to_element_index(
    elements: &[TranscriptElement],
    message_index: usize,
) -> Option<usize> {
    let mut bubble_count = 0;

    for (elem_idx, element) in elements.iter().enumerate() {
        if matches!(element, TranscriptElement::Bubble { .. }) {
            if bubble_count == message_index {
                return Some(elem_idx);
            }
            bubble_count += 1;
        }
    }

    None
}

/// Converts a transcript element to a ListItem for ratatui rendering.
pub fn element_to_list_item(element: &TranscriptElement, theme: Theme) -> ListItem<'static> {
    match element {
        TranscriptElement::DateSeparator(date) => date_separator_item(date, theme),
        TranscriptElement::Bubble {
            outgoing,
            text_lines,
            attachment,
            time,
            status,
        } => bubble_item(
            *outgoing,
            text_lines,
            attachment.as_deref(),
            time,
            *status,
            theme,
        ),
        TranscriptElement::TypingIndicator => typing_indicator_item(theme),
    }
}

fn date_separator_item(date: &str, theme: Theme) -> ListItem<'static> {
    let separator = format!("——— {} ———", date);
    let line = Line::from(vec![Span::styled(
        separator,
        styles::date_separator_style(theme),
    )])
    .alignment(Alignment::Center);
    ListItem::new(vec![Line::default(), line, Line::default()])
}

fn bubble_item(
    outgoing: bool,
    text_lines: &[String],
    attachment: Option<&str>,
    time: &str,
    status: Option<DeliveryStatus>,
    theme: Theme,
) -> ListItem<'static> {
    let alignment = if outgoing {
        Alignment::Right
    } else {
        Alignment::Left
    };
    let body_style = if outgoing {
        styles::bubble_you_style(theme)
    } else {
        styles::bubble_bot_style(theme)
    };

    let mut lines: Vec<Line<'static>> = Vec::new();

    if let Some(label) = attachment {
        lines.push(
            Line::from(vec![Span::styled(
                format!(" {} ", label),
                styles::attachment_style(theme),
            )])
            .alignment(alignment),
        );
    }

    for text_line in text_lines {
        lines.push(
            Line::from(vec![Span::styled(format!(" {} ", text_line), body_style)])
                .alignment(alignment),
        );
    }

    lines.push(meta_line(time, status, alignment, theme));
    lines.push(Line::default());

    ListItem::new(lines)
}

fn meta_line(
    time: &str,
    status: Option<DeliveryStatus>,
    alignment: Alignment,
    theme: Theme,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        time.to_owned(),
        styles::bubble_meta_style(theme),
    )];

    if let Some(status) = status {
        let glyph_style = if status == DeliveryStatus::Read {
            styles::read_receipt_style(theme)
        } else {
            styles::bubble_meta_style(theme)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(status.glyph().to_owned(), glyph_style));
    }

    Line::from(spans).alignment(alignment)
}

fn typing_indicator_item(theme: Theme) -> ListItem<'static> {
    let line = Line::from(vec![Span::styled(
        format!("{} is typing \u{00B7}\u{00B7}\u{00B7}", Sender::Bot.display_name()),
        styles::typing_indicator_style(theme),
    )]);
    ListItem::new(vec![line, Line::default()])
}

/// Greedy word wrap by display width. Words wider than the limit are split
/// mid-word so CJK and emoji heavy text still fits.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_owned()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let sep_width = usize::from(!current.is_empty());

        if current_width + sep_width + word_width <= max_width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // Split an oversized word by character width.
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > max_width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

fn timestamp_to_date(timestamp_ms: i64) -> chrono::NaiveDate {
    match Local.timestamp_millis_opt(timestamp_ms) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => dt.date_naive(),
        chrono::LocalResult::None => Local::now().date_naive(),
    }
}

fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

fn format_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            dt.format("%H:%M").to_string()
        }
        chrono::LocalResult::None => "--:--".to_owned(),
    }
}
