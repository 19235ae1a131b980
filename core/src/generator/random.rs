use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Rejection sampler: draws random positions until enough of them land outside the safe zone
/// on a cell without a mine.
///
/// The RNG stream carries over between games, so a single seed drives a whole sequence of
/// different layouts.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer {
    rng: SmallRng,
    mines: CellCount,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            mines: TOTAL_MINES,
        }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn mine_count(&self) -> CellCount {
        self.mines
    }

    fn place_mines(&mut self, board: &mut Board, first: Coord2) -> Result<()> {
        let first = board.validate_coords(first)?;

        let free_cells = board
            .iter_coords()
            .filter(|&pos| !board[pos].is_mine && !is_within_one(pos, first))
            .count();
        if usize::from(self.mines) > free_cells {
            log::warn!(
                "Cannot keep start safe, requested {} mines but only {} cells are free",
                self.mines,
                free_cells
            );
            return Err(GameError::TooManyMines);
        }

        let (rows, cols) = board.size();
        let mut mines_placed = 0;
        while mines_placed < self.mines {
            let pos = (
                self.rng.random_range(0..rows),
                self.rng.random_range(0..cols),
            );
            if board[pos].is_mine || is_within_one(pos, first) {
                continue;
            }
            board[pos].is_mine = true;
            mines_placed += 1;
        }

        board.recount_adjacent();
        log::debug!("placed {} mines, safe zone at {:?}", mines_placed, first);
        Ok(())
    }
}
