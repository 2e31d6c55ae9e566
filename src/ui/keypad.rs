use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Row of ten digit pills with the lit digit highlighted
pub struct Keypad {
    pub lit: Option<u8>,
}

/// Style for one pill
pub fn pill_style(digit: u8, lit: Option<u8>) -> Style {
    if lit == Some(digit) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    }
}

impl Widget for Keypad {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 10); 10])
            .split(area);

        for (digit, cell) in (0..10u8).zip(cells.iter()) {
            let style = pill_style(digit, self.lit);
            Paragraph::new(Span::styled(digit.to_string(), style))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(style))
                .render(*cell, buf);
        }
    }
}
