use clap::ValueEnum;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use serde::{Deserialize, Serialize};

use super::picture::Tile;

/// How snake segments and food are painted
pub trait SegmentStyle {
    /// Span for an occupied tile; `Tile::Empty` is painted by the renderer
    fn span(&self, tile: Tile) -> Span<'static>;
}

/// Head stands out, every other segment looks the same
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl SegmentStyle for PlainStyle {
    fn span(&self, tile: Tile) -> Span<'static> {
        match tile {
            Tile::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            Tile::Body | Tile::Tail => Span::styled("■ ", Style::default().fg(Color::Green)),
            Tile::Food => food(),
            Tile::Empty => Span::raw("  "),
        }
    }
}

/// Head and tail both accented, body drawn hollow
#[derive(Debug, Clone, Copy, Default)]
pub struct AccentedStyle;

impl SegmentStyle for AccentedStyle {
    fn span(&self, tile: Tile) -> Span<'static> {
        match tile {
            Tile::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Tile::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
            Tile::Tail => Span::styled("▪ ", Style::default().fg(Color::Yellow)),
            Tile::Food => food(),
            Tile::Empty => Span::raw("  "),
        }
    }
}

fn food() -> Span<'static> {
    Span::styled(
        "● ",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )
}

/// Selectable segment style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Plain,
    #[default]
    Accented,
}

impl StyleKind {
    pub fn boxed(self) -> Box<dyn SegmentStyle> {
        match self {
            StyleKind::Plain => Box::new(PlainStyle),
            StyleKind::Accented => Box::new(AccentedStyle),
        }
    }
}
