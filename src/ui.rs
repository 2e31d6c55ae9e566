pub mod keypad;
pub mod meter;
pub mod panel;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, Paragraph, Row, Table, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use reaction_dash::{
    celebration::{Celebration, CelebrationTone},
    clock::Clock,
    history::{HistoryItem, HistoryTone},
    input::LEGEND,
    progress::{RoundProgressItem, RoundStatus},
};

use crate::{ui::keypad::Keypad, App};

const HORIZONTAL_MARGIN: u16 = 2;
const EMPTY_HISTORY: &str = "No records yet.";

fn tone_style(tone: Option<HistoryTone>) -> Style {
    match tone {
        Some(HistoryTone::Positive) => Style::default().fg(Color::Green),
        Some(HistoryTone::Bright) => Style::default().fg(Color::Cyan),
        Some(HistoryTone::Warn) => Style::default().fg(Color::Red),
        None => Style::default(),
    }
}

fn round_status_style(status: RoundStatus) -> Style {
    match status {
        RoundStatus::Completed => Style::default().fg(Color::Green),
        RoundStatus::Current => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        RoundStatus::Pending => Style::default().fg(Color::Yellow),
        RoundStatus::Upcoming => Style::default().add_modifier(Modifier::DIM),
    }
}

/// Pure presenter for one history line
pub fn present_history_item(item: &HistoryItem) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<12}", item.label), tone_style(item.tone)),
        Span::styled(
            item.value.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
}

/// Pure presenter for the round tracker line
pub fn present_round_progress(items: &[RoundProgressItem]) -> Line<'static> {
    let spans = items
        .iter()
        .flat_map(|item| {
            [
                Span::styled(
                    format!("{} {}", item.label, item.caption),
                    round_status_style(item.status),
                ),
                Span::raw("  "),
            ]
        })
        .collect::<Vec<Span>>();
    Line::from(spans)
}

/// Text lines of the celebration overlay
pub fn celebration_lines(celebration: &Celebration) -> Vec<String> {
    let mut lines = vec![celebration.title.clone(), celebration.subtitle.clone()];
    if let Some(summary) = &celebration.summary {
        lines.push(String::new());
        lines.push(
            summary
                .rows()
                .iter()
                .map(|row| format!("{}: {}", row.label, row.value))
                .join("   "),
        );
    }
    lines
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_celebration(celebration: &Celebration, area: Rect, buf: &mut Buffer) {
    let lines = celebration_lines(celebration);
    let widest = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let overlay = centered_rect(widest + 6, lines.len() as u16 + 2, area);

    let color = match celebration.tone {
        CelebrationTone::Superb => Color::Magenta,
        CelebrationTone::Pop => Color::Cyan,
    };
    let text = lines
        .into_iter()
        .enumerate()
        .map(|(idx, l)| {
            if idx == 0 {
                Line::from(Span::styled(
                    l,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(l)
            }
        })
        .collect::<Vec<Line>>();

    Clear.render(overlay, buf);
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .render(overlay, buf);
}

impl<C: Clock> Widget for &App<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = self.engine.presenter();
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(3), // hud
                Constraint::Length(3), // enemy
                Constraint::Length(3), // keypad
                Constraint::Length(1), // status
                Constraint::Length(1), // round tracker
                Constraint::Min(4),    // scoreboard + history
                Constraint::Length(1), // legend
            ])
            .split(area);

        // hud: urgency meter, last reaction, combo
        let hud_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(18),
                Constraint::Length(18),
            ])
            .split(chunks[0]);

        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Reaction Dash - {}",
                self.engine.difficulty()
            )))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(meter::meter_ratio(&panel.hud))
            .label("")
            .render(hud_chunks[0], buf);
        Paragraph::new(Span::styled(panel.hud.speed_text(), bold_style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("last"))
            .render(hud_chunks[1], buf);
        Paragraph::new(Span::styled(panel.hud.combo_text(), bold_style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("combo"))
            .render(hud_chunks[2], buf);

        if let Some(enemy) = &panel.enemy {
            let hp_color = if enemy.is_low() {
                Color::Red
            } else {
                Color::Green
            };
            Gauge::default()
                .block(Block::default().borders(Borders::ALL).title(enemy.name()))
                .gauge_style(Style::default().fg(hp_color))
                .ratio(enemy.hp_ratio().clamp(0.0, 1.0))
                .label(enemy.hp_text())
                .render(chunks[1], buf);
        }

        Keypad { lit: panel.cue }.render(chunks[2], buf);

        Paragraph::new(Span::styled(panel.status.clone(), bold_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[3], buf);

        Paragraph::new(present_round_progress(&panel.round_progress))
            .alignment(Alignment::Center)
            .render(chunks[4], buf);

        let lower = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[5]);

        let rows = panel
            .stats
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.label.clone()),
                    Cell::from(Span::styled(row.value.clone(), bold_style)),
                ])
            })
            .collect::<Vec<Row>>();
        Widget::render(
            Table::new(rows, [Constraint::Length(10), Constraint::Min(8)])
                .block(Block::default().borders(Borders::ALL).title("Scoreboard")),
            lower[0],
            buf,
        );

        let history_block = Block::default()
            .borders(Borders::ALL)
            .title("Reaction log (last 6)");
        if panel.history.is_empty() {
            Paragraph::new(Span::styled(EMPTY_HISTORY, italic_style))
                .block(history_block)
                .render(lower[1], buf);
        } else {
            let items = panel
                .history
                .iter()
                .map(present_history_item)
                .collect::<Vec<ListItem>>();
            Widget::render(List::new(items).block(history_block), lower[1], buf);
        }

        Paragraph::new(Span::styled(LEGEND, italic_style)).render(chunks[6], buf);

        if let Some(celebration) = &panel.celebration {
            render_celebration(celebration, area, buf);
        }
    }
}
