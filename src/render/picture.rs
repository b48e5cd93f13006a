use crate::game::{Cell, GameState, RunState};

/// What occupies one tile of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Head,
    Body,
    Tail,
    Food,
}

/// Score summary shown over the board once the game is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub high_score: u32,
}

/// Snapshot of the board, ready to be drawn by any surface
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    tile_count: usize,
    tiles: Vec<Tile>,
    pub run_state: RunState,
    pub overlay: Option<GameOverSummary>,
}

impl Picture {
    /// Project game state onto the board.
    ///
    /// Food is laid over the snake, so it stays visible in the rare case the
    /// placement fallback put it on an occupied cell.
    pub fn project(state: &GameState, high_score: u32) -> Self {
        let tile_count = state.tile_count.max(0) as usize;
        let mut picture = Self {
            tile_count,
            tiles: vec![Tile::Empty; tile_count * tile_count],
            run_state: state.run_state,
            overlay: None,
        };

        let last = state.snake.len() - 1;
        for (index, &cell) in state.snake.cells().iter().enumerate() {
            let tile = match index {
                0 => Tile::Head,
                i if i == last => Tile::Tail,
                _ => Tile::Body,
            };
            picture.put(cell, tile);
        }
        picture.put(state.food, Tile::Food);

        if state.run_state == RunState::GameOver {
            picture.overlay = Some(GameOverSummary {
                score: state.score,
                high_score,
            });
        }

        picture
    }

    fn put(&mut self, cell: Cell, tile: Tile) {
        if cell.is_within(self.tile_count as i32) {
            let index = cell.y as usize * self.tile_count + cell.x as usize;
            self.tiles[index] = tile;
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn tile(&self, cell: Cell) -> Tile {
        if cell.is_within(self.tile_count as i32) {
            self.tiles[cell.y as usize * self.tile_count + cell.x as usize]
        } else {
            Tile::Empty
        }
    }

    /// Rows of tiles, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.tile_count.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Snake;

    fn state_with(cells: Vec<Cell>, food: Cell) -> GameState {
        GameState::new(Snake::from_cells(cells).unwrap(), food, 10)
    }

    #[test]
    fn test_segment_roles() {
        let state = state_with(
            vec![Cell::new(5, 5), Cell::new(6, 5), Cell::new(6, 6)],
            Cell::new(1, 1),
        );
        let picture = Picture::project(&state, 0);

        assert_eq!(picture.tile(Cell::new(5, 5)), Tile::Head);
        assert_eq!(picture.tile(Cell::new(6, 5)), Tile::Body);
        assert_eq!(picture.tile(Cell::new(6, 6)), Tile::Tail);
        assert_eq!(picture.tile(Cell::new(1, 1)), Tile::Food);
        assert_eq!(picture.tile(Cell::new(0, 0)), Tile::Empty);
        assert_eq!(picture.rows().count(), 10);
    }

    #[test]
    fn test_single_cell_snake_is_just_a_head() {
        let state = state_with(vec![Cell::new(3, 3)], Cell::new(1, 1));
        let picture = Picture::project(&state, 0);
        assert_eq!(picture.tile(Cell::new(3, 3)), Tile::Head);
    }

    #[test]
    fn test_overlay_only_when_game_over() {
        let mut state = state_with(vec![Cell::new(3, 3)], Cell::new(1, 1));
        state.score = 40;
        assert_eq!(Picture::project(&state, 90).overlay, None);

        state.run_state = RunState::GameOver;
        assert_eq!(
            Picture::project(&state, 90).overlay,
            Some(GameOverSummary {
                score: 40,
                high_score: 90
            })
        );
    }

    #[test]
    fn test_projection_leaves_state_untouched() {
        let state = state_with(vec![Cell::new(3, 3), Cell::new(2, 3)], Cell::new(1, 1));
        let before = state.clone();
        let first = Picture::project(&state, 0);
        let second = Picture::project(&state, 0);

        assert_eq!(state, before);
        assert_eq!(first, second);
    }
}
