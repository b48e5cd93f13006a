use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::{Command, Direction},
    config::GameConfig,
    events::{GameEvent, Listener},
    state::{Cell, GameState, RunState, Snake},
    timer::{Scheduler, TimerHandle},
};
use crate::render::{Picture, ScoreDisplay, Surface};
use crate::storage::{HighScoreRecord, KeyValueStore, MemoryStore};

/// Resamples allowed before food is placed on whatever cell was drawn last
pub const FOOD_RETRY_CAP: u32 = 100;

/// Pick a random cell for food, avoiding the snake.
///
/// Gives up after [`FOOD_RETRY_CAP`] resamples and keeps the last draw even if
/// it is occupied, so a nearly full board cannot stall the tick.
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, tile_count: i32, snake: &Snake) -> Cell {
    let mut attempts = 0;
    loop {
        let cell = Cell::new(rng.gen_range(0..tile_count), rng.gen_range(0..tile_count));
        if !snake.occupies(cell) || attempts >= FOOD_RETRY_CAP {
            return cell;
        }
        attempts += 1;
    }
}

/// Collects what a game is bound to before it is built
pub struct GameBuilder {
    config: GameConfig,
    surface: Option<Box<dyn Surface>>,
    store: Option<Box<dyn KeyValueStore>>,
    score_display: Option<Box<dyn ScoreDisplay>>,
    high_score_display: Option<Box<dyn ScoreDisplay>>,
}

impl GameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            surface: None,
            store: None,
            score_display: None,
            high_score_display: None,
        }
    }

    pub fn surface(mut self, surface: impl Surface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    /// Storage for the high score; a session-only store is used when unset
    pub fn store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn score_display(mut self, display: impl ScoreDisplay + 'static) -> Self {
        self.score_display = Some(Box::new(display));
        self
    }

    pub fn high_score_display(mut self, display: impl ScoreDisplay + 'static) -> Self {
        self.high_score_display = Some(Box::new(display));
        self
    }

    /// Validate the wiring, load the high score and draw the first frame
    pub fn build<S: Scheduler>(self, scheduler: S) -> Result<SnakeGame<S>> {
        self.config.validate().context("Invalid game configuration")?;
        let surface = self
            .surface
            .context("A game needs a rendering surface to draw on")?;

        let store: Box<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => Box::new(MemoryStore::new()),
        };
        let high_score = HighScoreRecord::load(store, self.config.high_score_key.clone());

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let tile_count = self.config.tile_count();
        let snake = Snake::new(self.config.start());
        let food = place_food(&mut rng, tile_count, &snake);

        let mut game = SnakeGame {
            config: self.config,
            state: GameState::new(snake, food, tile_count),
            high_score,
            scheduler,
            timer: None,
            surface,
            score_display: self.score_display,
            high_score_display: self.high_score_display,
            listeners: Vec::new(),
            rng,
        };

        game.show_score();
        game.show_high_score();
        game.draw()?;

        log::debug!(
            "Snake game ready on a {}x{} board, high score {}",
            tile_count,
            tile_count,
            game.high_score()
        );

        Ok(game)
    }
}

/// The game engine: simulation state, tick timer and notifications
pub struct SnakeGame<S: Scheduler> {
    config: GameConfig,
    state: GameState,
    high_score: HighScoreRecord,
    scheduler: S,
    timer: Option<TimerHandle>,
    surface: Box<dyn Surface>,
    score_display: Option<Box<dyn ScoreDisplay>>,
    high_score_display: Option<Box<dyn ScoreDisplay>>,
    listeners: Vec<Listener>,
    rng: StdRng,
}

impl<S: Scheduler> SnakeGame<S> {
    /// Register a callback for score, record and game over notifications
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.value()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Route a host command to the matching operation
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Reset => return self.reset(),
            Command::Steer(direction) => self.set_direction(direction),
        }
        Ok(())
    }

    /// Leave the idle state and start moving right
    pub fn start(&mut self) {
        if self.state.run_state != RunState::Idle {
            return;
        }

        self.state.heading = Some(Direction::Right);
        self.state.run_state = RunState::Running;
        self.arm_timer();
        log::debug!("Snake game started");
    }

    /// Toggle between running and paused
    pub fn pause(&mut self) {
        match self.state.run_state {
            RunState::Running => {
                self.cancel_timer();
                self.state.run_state = RunState::Paused;
                log::debug!("Snake game paused");
            }
            RunState::Paused => {
                self.state.run_state = RunState::Running;
                self.arm_timer();
                log::debug!("Snake game resumed");
            }
            RunState::Idle | RunState::GameOver => {}
        }
    }

    /// Back to a fresh idle board; the high score is kept
    pub fn reset(&mut self) -> Result<()> {
        self.cancel_timer();

        let had_score = self.state.score != 0;
        let snake = Snake::new(self.config.start());
        let food = place_food(&mut self.rng, self.state.tile_count, &snake);
        self.state = GameState::new(snake, food, self.config.tile_count());

        self.show_score();
        if had_score {
            self.emit(GameEvent::ScoreChanged(0));
        }
        log::debug!("Snake game reset");

        self.draw()
    }

    /// Steer the snake; ignored unless running or when the request lies on
    /// the axis the snake is currently heading along
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.state.is_running() {
            return;
        }

        let blocked = self
            .state
            .heading
            .is_some_and(|heading| heading.shares_axis(direction));
        if !blocked {
            self.state.heading = Some(direction);
        }
    }

    /// Timer callback: advance one tick and redraw.
    ///
    /// Ticks from a timer that is no longer armed are dropped.
    pub fn on_tick(&mut self, handle: TimerHandle) -> Result<()> {
        if self.timer != Some(handle) {
            log::trace!("Dropping stale tick from {:?}", handle);
            return Ok(());
        }

        self.update();
        self.draw()
    }

    /// Advance the simulation by one step
    pub fn update(&mut self) {
        if !self.state.is_running() {
            return;
        }
        let Some(direction) = self.state.heading else {
            return;
        };

        let next = self
            .state
            .snake
            .head()
            .stepped(direction)
            .wrapped(self.state.tile_count);

        if self.state.snake.occupies(next) {
            self.game_over();
            return;
        }

        let ate_food = next == self.state.food;
        self.state.snake.advance(next, ate_food);

        if ate_food {
            self.state.score += self.config.food_reward;
            self.state.food = place_food(&mut self.rng, self.state.tile_count, &self.state.snake);
            self.show_score();
            self.emit(GameEvent::ScoreChanged(self.state.score));
        }
    }

    /// Present the current state to the bound surface
    pub fn draw(&mut self) -> Result<()> {
        let picture = Picture::project(&self.state, self.high_score.value());
        self.surface
            .present(&picture)
            .context("Failed to draw the board")
    }

    fn game_over(&mut self) {
        self.cancel_timer();
        self.state.run_state = RunState::GameOver;

        let final_score = self.state.score;
        let new_record = self.high_score.submit(final_score);
        self.show_high_score();
        if new_record {
            log::info!("New high score: {}", final_score);
            self.emit(GameEvent::NewHighScore(final_score));
        }

        log::info!("Game over, final score {}", final_score);
        self.emit(GameEvent::GameOver { final_score });
    }

    fn arm_timer(&mut self) {
        self.cancel_timer();
        self.timer = Some(self.scheduler.schedule_repeating(self.config.tick_interval()));
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn show_score(&mut self) {
        if let Some(display) = self.score_display.as_mut() {
            display.show(self.state.score);
        }
    }

    fn show_high_score(&mut self) {
        let value = self.high_score.value();
        if let Some(display) = self.high_score_display.as_mut() {
            display.show(value);
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
