use ratatui::{
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::ui::styles;

pub fn render(frame: &mut Frame, rect: Rect) {
    let rect = crate::ui::rect::centered(58, 18, rect);

    let spans = vec![
        Line::from("\n"),
        Line::styled(
            concat!("  Stonks Terminal v", env!("CARGO_PKG_VERSION")),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from("\n"),
        Line::from("  1 / 2 / 3      switch tab"),
        Line::from("  Tab / S-Tab    cycle tabs"),
        Line::from("  j / k          move selection"),
        Line::from("  b / B          buy 1 / 5 of the selected team"),
        Line::from("  s / S          sell 1 / 5 of the selected holding"),
        Line::from("  r              refresh the current tab"),
        Line::from("  ?              toggle this help"),
        Line::from("  q / Ctrl-C     quit"),
    ];
    let paragraph = Paragraph::new(spans).style(styles::text()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border())
            .padding(Padding::horizontal(2))
            .title(Span::styled(" Help ", styles::title())),
    );
    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}
