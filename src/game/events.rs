use std::fmt;

/// Notification emitted by the engine to its subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score after food was eaten, or after a reset cleared it
    ScoreChanged(u32),
    /// The finished game set a new record
    NewHighScore(u32),
    GameOver { final_score: u32 },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::ScoreChanged(score) => write!(f, "Score: {}", score),
            GameEvent::NewHighScore(score) => write!(f, "New High Score: {}!", score),
            GameEvent::GameOver { final_score } => {
                write!(f, "Game Over! Final Score: {}", final_score)
            }
        }
    }
}

pub(crate) type Listener = Box<dyn FnMut(&GameEvent)>;
