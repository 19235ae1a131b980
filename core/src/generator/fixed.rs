use alloc::vec::Vec;

use super::*;

/// Places the same predetermined mines every game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMinePlacer {
    mines: Vec<Coord2>,
}

impl FixedMinePlacer {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        let mut mines = mines.into();
        mines.sort_unstable();
        mines.dedup();
        Self { mines }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MinePlacer for FixedMinePlacer {
    fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    fn place_mines(&mut self, board: &mut Board, first: Coord2) -> Result<()> {
        let first = board.validate_coords(first)?;

        for &coords in &self.mines {
            board.validate_coords(coords)?;
            if is_within_one(coords, first) {
                return Err(GameError::MineInSafeZone);
            }
        }

        for &coords in &self.mines {
            board[coords].is_mine = true;
        }
        board.recount_adjacent();
        log::debug!("placed {} preset mines", self.mines.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_collapsed() {
        let placer = FixedMinePlacer::new([(2, 2), (0, 9), (2, 2)]);

        assert_eq!(placer.mine_count(), 2);
        assert_eq!(placer.mines(), &[(0, 9), (2, 2)]);
    }

    #[test]
    fn places_listed_mines() {
        let mut board = Board::default();
        let mut placer = FixedMinePlacer::new([(10, 10), (10, 11)]);

        placer.place_mines(&mut board, (0, 0)).unwrap();

        assert_eq!(board.mine_count(), 2);
        assert!(board[(10, 11)].is_mine);
        assert_eq!(board[(9, 10)].adjacent_mines, 2);
    }

    #[test]
    fn rejects_mine_next_to_start() {
        let mut board = Board::default();
        let mut placer = FixedMinePlacer::new([(10, 10), (1, 1)]);

        let result = placer.place_mines(&mut board, (0, 0));

        assert_eq!(result, Err(GameError::MineInSafeZone));
        assert_eq!(board.mine_count(), 0);
    }

    #[test]
    fn rejects_mine_off_the_board() {
        let mut board = Board::default();
        let mut placer = FixedMinePlacer::new([(20, 1)]);

        let result = placer.place_mines(&mut board, (0, 0));

        assert_eq!(result, Err(GameError::InvalidCoords));
    }
}
