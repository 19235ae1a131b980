use alloc::collections::VecDeque;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Grid of cells indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

impl Board {
    /// All-hidden board without mines.
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// Builds a board with mines at `mine_coords` and adjacency counts filled in.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size);

        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board[coords].is_mine = true;
        }
        board.recount_adjacent();

        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        self.cells.get_mut(coords.to_nd_index())
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Row-major iterator over every position on the board.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_mine)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_revealed)
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }

    /// Number of mines among the neighbors of `coords`, clipped to the board.
    pub fn count_adjacent(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }

    /// Fills in `adjacent_mines` for every cell from the current mine layout.
    pub fn recount_adjacent(&mut self) {
        for coords in self.iter_coords() {
            let count = self.count_adjacent(coords);
            self[coords].adjacent_mines = count;
        }
    }

    /// Opens `coords` and flood-fills through zero-count cells, returning how many cells were
    /// newly revealed.
    ///
    /// Out of bounds, revealed or flagged targets are left alone. Numbered cells are opened
    /// but not expanded, and flags stop the fill.
    pub fn reveal(&mut self, coords: Coord2) -> CellCount {
        let mut revealed = 0;
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let Some(cell) = self.get_mut(visit_coords) else {
                continue;
            };
            if !cell.is_closed() {
                continue;
            }

            cell.is_revealed = true;
            revealed += 1;

            if cell.adjacent_mines == 0 {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| self[pos].is_closed()),
                );
            }
        }

        revealed
    }

    /// Exposes every mine on the board without flood-filling.
    pub fn reveal_all_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_revealed = true;
        }
    }

    pub fn all_safe_revealed(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_mine || cell.is_revealed)
    }

    pub fn view(&self) -> Array2<CellView> {
        self.cells.map(|cell| cell.view())
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
