use std::{borrow::Cow, cmp::Ordering};

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::data::NoticeKind;

#[inline]
pub fn header() -> Style {
    Style::default().fg(Color::Gray)
}

#[inline]
pub fn gray() -> Style {
    Style::default().fg(Color::Gray)
}

#[inline]
pub fn dark_gray() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[inline]
pub fn label() -> Style {
    Style::default().fg(Color::Gray)
}

#[inline]
pub fn text() -> Style {
    Style::default().fg(Color::Reset)
}

#[inline]
pub fn primary() -> Style {
    Style::default().fg(Color::White)
}

#[inline]
pub fn text_selected() -> Style {
    text().add_modifier(Modifier::REVERSED)
}

#[inline]
pub fn title() -> Style {
    text()
}

#[inline]
pub fn border() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style by comparison against a reference value: green up, red down.
#[inline]
pub fn up(val: Ordering) -> Style {
    match val {
        Ordering::Less => Style::default().fg(Color::LightRed),
        Ordering::Equal => Style::default().fg(Color::Reset),
        Ordering::Greater => Style::default().fg(Color::LightGreen),
    }
}

#[inline]
pub fn chart_line() -> Style {
    Style::default().fg(Color::LightBlue)
}

#[inline]
pub fn notice(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Info => Style::default().fg(Color::LightGreen),
        NoticeKind::Warn => Style::default().fg(Color::Yellow),
    }
}

#[allow(clippy::needless_pass_by_value)]
pub fn item<'a>(label: String, value: impl Into<Cow<'a, str>>) -> ListItem<'a> {
    let spans = Line::from(vec![
        Span::styled(format!("{label}: "), self::label()),
        Span::styled(value, self::text()),
    ]);
    ListItem::new(spans)
}
