use ratatui::{layout::Alignment, style::Style, widgets::Paragraph};

static BANNER: &str = r"  ____  _              _
 / ___|| |_ ___  _ __ | | _____
 \___ \| __/ _ \| '_ \| |/ / __|
  ___) | || (_) | | | |   <\__ \
 |____/ \__\___/|_| |_|_|\_\___/";

pub const BANNER_HEIGHT: u16 = 5;

pub fn banner(style: Style) -> Paragraph<'static> {
    Paragraph::new(BANNER)
        .alignment(Alignment::Center)
        .style(style)
}
