use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a front end needs to draw a session, with hidden mines kept hidden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: GameStatus,
    pub mines_left: isize,
    pub first_click_pending: bool,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_session<P: MinePlacer>(session: &GameSession<P>) -> Self {
        Self {
            status: session.status(),
            mines_left: session.mines_left(),
            first_click_pending: session.is_first_click_pending(),
            cells: session.board().view(),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_hides_unrevealed_mines() {
        let board = Board::from_mine_coords(BOARD_SIZE, &[(0, 1), (7, 7)]).unwrap();
        let mut session = GameSession::from_board(board, RandomMinePlacer::new(0));
        session.handle_click((0, 0));
        session.toggle_flag((0, 1));

        let snapshot = session.snapshot();

        assert_eq!(snapshot.size(), BOARD_SIZE);
        assert_eq!(snapshot.mines_left, 1);
        assert!(!snapshot.first_click_pending);
        assert_eq!(snapshot.cell_at((0, 0)), Some(CellView::Revealed(1)));
        assert_eq!(snapshot.cell_at((0, 1)), Some(CellView::Flagged));
        assert_eq!(snapshot.cell_at((7, 7)), Some(CellView::Hidden));
        assert_eq!(snapshot.cell_at((16, 16)), None);
    }

    #[test]
    fn snapshot_serializes_for_the_front_end() {
        let board = Board::from_mine_coords(BOARD_SIZE, &[(0, 1)]).unwrap();
        let mut session = GameSession::from_board(board, RandomMinePlacer::new(0));
        session.handle_click((0, 1));

        let json = serde_json::to_value(session.snapshot()).unwrap();

        assert_eq!(json["status"], "Lost");
        assert_eq!(json["mines_left"], 1);
        assert_eq!(json["first_click_pending"], false);
        assert_eq!(json["cells"]["dim"], serde_json::json!([16, 16]));
        assert_eq!(json["cells"]["data"][0], "Hidden");
        assert_eq!(json["cells"]["data"][1], "Mine");
    }

    #[test]
    fn oversized_grid_reports_saturated_size() {
        let snapshot = Snapshot {
            status: GameStatus::Playing,
            mines_left: 0,
            first_click_pending: true,
            cells: Array2::default([300, 2]),
        };

        assert_eq!(snapshot.size(), (Coord::MAX, 2));
        assert_eq!(snapshot.cell_at((255, 2)), None);
        assert_eq!(snapshot.cell_at((254, 1)), Some(CellView::Hidden));
    }

    #[test]
    fn revealed_count_serializes_as_tagged_value() {
        let json = serde_json::to_value(CellView::Revealed(3)).unwrap();

        assert_eq!(json, serde_json::json!({ "Revealed": 3 }));
    }
}
