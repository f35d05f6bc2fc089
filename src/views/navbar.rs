use ratatui::{
    prelude::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::{app::AppState, ui::styles};

pub fn render(frame: &mut Frame, rect: Rect, state: AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rect);

    let tabs = vec![
        Line::from(" Portfolio [1] "),
        Line::from(" Market [2] "),
        Line::from(" Leaderboard [3] "),
    ];

    let tabs = Tabs::new(tabs)
        .style(styles::text())
        .highlight_style(styles::text_selected())
        .divider("|")
        .select(match state {
            AppState::Market => 1,
            AppState::Leaderboard => 2,
            _ => 0,
        });

    let nickname = crate::app::SESSION
        .read()
        .expect("poison")
        .as_ref()
        .map_or_else(String::new, |session| session.username.clone());
    let dark_gray_style = styles::dark_gray();
    let user_info = Paragraph::new(Line::from(vec![
        Span::styled(format!("Welcome, {nickname}"), dark_gray_style),
        Span::styled(" | ", dark_gray_style),
        Span::styled("[?] Help", dark_gray_style),
        Span::styled(" ", dark_gray_style),
        Span::styled("[q] Quit", dark_gray_style),
    ]))
    .alignment(Alignment::Right);

    frame.render_widget(tabs, chunks[0]);
    frame.render_widget(user_info, chunks[1]);
}
