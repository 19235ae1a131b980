use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Puts mines on a fresh board once the first click is known.
pub trait MinePlacer {
    /// Mines a successful placement puts on the board.
    fn mine_count(&self) -> CellCount;

    /// Places mines on `board` while keeping the 3x3 block around `first` clear, then fills in
    /// the adjacency counts. On error the board is left untouched.
    fn place_mines(&mut self, board: &mut Board, first: Coord2) -> Result<()>;
}
