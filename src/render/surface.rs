use anyhow::Result;
use std::cell::Cell;
use std::rc::Rc;

use super::picture::Picture;

/// Drawing target a game is bound to
pub trait Surface {
    fn present(&mut self, picture: &Picture) -> Result<()>;
}

/// Display target for a single number, such as the score
pub trait ScoreDisplay {
    fn show(&mut self, value: u32);
}

impl ScoreDisplay for Rc<Cell<u32>> {
    fn show(&mut self, value: u32) {
        self.set(value);
    }
}
