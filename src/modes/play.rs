use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stderr;

use crate::config::AppConfig;
use crate::game::{Command, GameBuilder, GameEvent, IntervalScheduler, Scheduler, SnakeGame};
use crate::input::{InputHandler, KeyAction};
use crate::render::{Hud, Renderer, TerminalSurface};
use crate::storage::FileStore;

pub struct PlayMode {
    config: AppConfig,
    input_handler: InputHandler,
    hud: Hud,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            input_handler: InputHandler::new(),
            hud: Hud::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        // Run game with cleanup
        let result = self.play().await;

        // Cleanup terminal
        finish(result, restore_terminal())
    }

    async fn play(&mut self) -> Result<()> {
        let backend = CrosstermBackend::new(stderr());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let hud = self.hud.clone();
        let renderer = Renderer::new(
            self.config.display.style.boxed(),
            self.config.display.show_grid,
        );

        let mut game = GameBuilder::new(self.config.game.clone())
            .surface(TerminalSurface::new(terminal, renderer, hud.clone()))
            .store(FileStore::new(self.config.storage.dir.clone()))
            .score_display(hud.score.clone())
            .high_score_display(hud.high_score.clone())
            .build(IntervalScheduler::new())?;

        let toast = hud.clone();
        game.subscribe(move |event| {
            match event {
                GameEvent::ScoreChanged(_) => {}
                GameEvent::NewHighScore(_) | GameEvent::GameOver { .. } => {
                    toast.set_message(event.to_string());
                }
            }
            log::info!("{}", event);
        });

        self.run_game_loop(&mut game).await
    }

    async fn run_game_loop(&mut self, game: &mut SnakeGame<IntervalScheduler>) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(game, event)?,
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game tick
                handle = game.scheduler_mut().next_tick() => {
                    game.on_tick(handle)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event<S: Scheduler>(&mut self, game: &mut SnakeGame<S>, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Game(command) => {
                        if command == Command::Reset {
                            self.hud.clear_message();
                        }
                        game.apply(command)?;
                        game.draw()?;
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                    }
                    KeyAction::None => {}
                }
            }
            Event::Resize(_, _) => game.draw()?,
            _ => {}
        }

        Ok(())
    }
}

/// Outcome of a session once the terminal has been handed back.
///
/// A failed restore is only logged when the game itself already failed, so
/// the game's error is the one reported.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            log::error!("Failed to restore terminal: {:#}", restore_err);
            Err(err)
        }
        (Ok(()), restored) => restored,
        (result, Ok(())) => result,
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    let mut stderr = stderr();
    execute!(stderr, LeaveAlternateScreen, Show)
        .context("Failed to leave alternate screen")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, ManualScheduler, RunState};
    use crate::render::{Picture, Surface};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    struct NullSurface;

    impl Surface for NullSurface {
        fn present(&mut self, _picture: &Picture) -> Result<()> {
            Ok(())
        }
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn game() -> SnakeGame<ManualScheduler> {
        GameBuilder::new(Default::default())
            .surface(NullSurface)
            .build(ManualScheduler::new())
            .unwrap()
    }

    #[test]
    fn test_keys_drive_the_game() {
        let mut mode = PlayMode::new(AppConfig::default());
        let mut game = game();

        mode.handle_event(&mut game, key(KeyCode::Enter, KeyEventKind::Press))
            .unwrap();
        assert_eq!(game.run_state(), RunState::Running);

        mode.handle_event(&mut game, key(KeyCode::Down, KeyEventKind::Press))
            .unwrap();
        assert_eq!(game.state().heading, Some(Direction::Down));

        mode.handle_event(&mut game, key(KeyCode::Char(' '), KeyEventKind::Press))
            .unwrap();
        assert_eq!(game.run_state(), RunState::Paused);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut mode = PlayMode::new(AppConfig::default());
        let mut game = game();

        mode.handle_event(&mut game, key(KeyCode::Enter, KeyEventKind::Release))
            .unwrap();
        assert_eq!(game.run_state(), RunState::Idle);
    }

    #[test]
    fn test_reset_clears_game_over_message() {
        let mut mode = PlayMode::new(AppConfig::default());
        let mut game = game();
        mode.hud.set_message("Game Over! Score: 0");

        mode.handle_event(&mut game, key(KeyCode::Char('r'), KeyEventKind::Press))
            .unwrap();
        assert_eq!(game.run_state(), RunState::Idle);
        assert_eq!(mode.hud.snapshot().message, None);
    }

    #[test]
    fn test_pause_keeps_message() {
        let mut mode = PlayMode::new(AppConfig::default());
        let mut game = game();
        mode.hud.set_message("New High Score: 30!");

        mode.handle_event(&mut game, key(KeyCode::Char(' '), KeyEventKind::Press))
            .unwrap();
        assert!(mode.hud.snapshot().message.is_some());
    }

    #[test]
    fn test_game_error_survives_failed_restore() {
        let err = finish(
            Err(anyhow::anyhow!("tick failed")),
            Err(anyhow::anyhow!("raw mode stuck")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "tick failed");

        let err = finish(Ok(()), Err(anyhow::anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode stuck");

        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_quit_key() {
        let mut mode = PlayMode::new(AppConfig::default());
        let mut game = game();

        mode.handle_event(&mut game, key(KeyCode::Char('q'), KeyEventKind::Press))
            .unwrap();
        assert!(mode.should_quit);
    }
}
