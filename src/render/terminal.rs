use anyhow::{Context, Result};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::{Cell, RefCell};
use std::io::Stderr;
use std::rc::Rc;

use super::picture::Picture;
use super::renderer::{HudSnapshot, Renderer};
use super::surface::Surface;

/// Score, high score and last notification, shared between the game's
/// display hooks and the terminal surface
#[derive(Debug, Clone, Default)]
pub struct Hud {
    pub score: Rc<Cell<u32>>,
    pub high_score: Rc<Cell<u32>>,
    pub message: Rc<RefCell<Option<String>>>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&self, message: impl Into<String>) {
        *self.message.borrow_mut() = Some(message.into());
    }

    pub fn clear_message(&self) {
        self.message.borrow_mut().take();
    }

    pub fn snapshot(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score.get(),
            high_score: self.high_score.get(),
            message: self.message.borrow().clone(),
        }
    }
}

/// Surface drawing the board into the terminal
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    renderer: Renderer,
    hud: Hud,
}

impl TerminalSurface {
    pub fn new(terminal: Terminal<CrosstermBackend<Stderr>>, renderer: Renderer, hud: Hud) -> Self {
        Self {
            terminal,
            renderer,
            hud,
        }
    }
}

impl Surface for TerminalSurface {
    fn present(&mut self, picture: &Picture) -> Result<()> {
        let hud = self.hud.snapshot();
        self.terminal
            .draw(|frame| self.renderer.render(frame, picture, &hud))
            .context("Failed to draw frame")?;
        Ok(())
    }
}
