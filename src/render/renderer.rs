use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::picture::{GameOverSummary, Picture, Tile};
use super::style::{SegmentStyle, StyleKind};
use crate::game::RunState;

/// Values shown around the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: u32,
    pub high_score: u32,
    /// Latest notification from the game
    pub message: Option<String>,
}

pub struct Renderer {
    style: Box<dyn SegmentStyle>,
    show_grid: bool,
}

impl Renderer {
    pub fn new(style: Box<dyn SegmentStyle>, show_grid: bool) -> Self {
        Self { style, show_grid }
    }

    pub fn render(&self, frame: &mut Frame, picture: &Picture, hud: &HudSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(picture, hud), chunks[0]);

        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match picture.overlay {
            Some(summary) => frame.render_widget(self.render_game_over(summary), board_area),
            None => frame.render_widget(self.render_grid(picture), board_area),
        }

        frame.render_widget(self.render_controls(hud), chunks[2]);
    }

    fn render_grid(&self, picture: &Picture) -> Paragraph<'static> {
        let empty = if self.show_grid {
            Span::styled(". ", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("  ")
        };

        let lines: Vec<Line> = picture
            .rows()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|&tile| match tile {
                        Tile::Empty => empty.clone(),
                        occupied => self.style.span(occupied),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, picture: &Picture, hud: &HudSnapshot) -> Paragraph<'static> {
        let status_color = match picture.run_state {
            RunState::Running => Color::Green,
            RunState::Paused => Color::Yellow,
            RunState::GameOver => Color::Red,
            RunState::Idle => Color::Gray,
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                hud.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled(
                picture.run_state.label(),
                Style::default().fg(status_color),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, summary: GameOverSummary) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    summary.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    summary.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to reset or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, hud: &HudSnapshot) -> Paragraph<'static> {
        let mut text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" start | "),
            Span::styled("Space", Style::default().fg(Color::Yellow)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" reset | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        if let Some(message) = &hud.message {
            text.push(Line::from(Span::styled(
                message.clone(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(StyleKind::default().boxed(), true)
    }
}
