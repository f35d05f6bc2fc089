use ratatui::{
    prelude::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::ui::styles;

const KEY_HINTS: &str = "j/k move  r refresh  b/B buy 1/5  s/S sell 1/5";

pub fn render(frame: &mut Frame, rect: Rect, base_url: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rect);

    // latest notice wins the left slot, otherwise show the key hints
    let left = match &*crate::app::NOTICE.read().expect("poison") {
        Some(notice) => Span::styled(format!(" {}", notice.text), styles::notice(notice.kind)),
        None => Span::styled(format!(" {KEY_HINTS}"), styles::dark_gray()),
    };
    frame.render_widget(Paragraph::new(left), chunks[0]);

    let right = Span::styled(format!("{base_url} "), styles::dark_gray());
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        chunks[1],
    );
}
