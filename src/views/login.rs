use ratatui::{
    prelude::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::Notice;
use crate::ui::{assets, rect, styles};
use crate::widgets::{Field, LoadingWidget, LoginForm};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    form: &LoginForm,
    spinner: Option<LoadingWidget>,
    notice: Option<&Notice>,
) {
    let boxed = rect::centered(46, assets::BANNER_HEIGHT + 11, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(assets::BANNER_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(boxed);

    frame.render_widget(assets::banner(styles::primary()), chunks[0]);

    let field_block = |title: &'static str, focused: bool| {
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                styles::primary()
            } else {
                styles::border()
            })
            .title(title)
    };

    let username = Paragraph::new(form.username().to_string())
        .block(field_block(" Username ", form.focus() == Field::Username));
    frame.render_widget(username, chunks[2]);

    let password = Paragraph::new(form.masked_password())
        .block(field_block(" Password ", form.focus() == Field::Password));
    frame.render_widget(password, chunks[3]);

    if let Some(spinner) = spinner {
        frame.render_widget(spinner, chunks[4]);
    } else if let Some(notice) = notice {
        frame.render_widget(
            Paragraph::new(Span::styled(notice.text.clone(), styles::notice(notice.kind)))
                .alignment(Alignment::Center),
            chunks[4],
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Tab switch field · Enter sign in · Esc quit",
            styles::dark_gray(),
        ))
        .alignment(Alignment::Center),
        chunks[5],
    );
}
