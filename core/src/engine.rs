use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// One game of minesweeper: the board plus everything needed to play it.
///
/// Mines are only placed on the first click, so that click and its neighbors are always safe.
/// Once the game is won or lost every move is ignored until [`GameSession::reset`].
#[derive(Clone, Debug)]
pub struct GameSession<P = RandomMinePlacer> {
    board: Board,
    status: GameStatus,
    mines_left: isize,
    first_click_pending: bool,
    placer: P,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        Self::with_placer(RandomMinePlacer::new(seed))
    }
}

impl<P: MinePlacer> GameSession<P> {
    pub fn with_placer(placer: P) -> Self {
        Self {
            board: Board::default(),
            status: GameStatus::Playing,
            mines_left: placer.mine_count() as isize,
            first_click_pending: true,
            placer,
        }
    }

    /// Continues from an already laid out board, skipping first-click placement.
    ///
    /// `placer` is only used once the session is reset.
    pub fn from_board(board: Board, placer: P) -> Self {
        let mines_left = board.mine_count() as isize - board.flagged_count() as isize;
        Self {
            board,
            status: GameStatus::Playing,
            mines_left,
            first_click_pending: false,
            placer,
        }
    }

    /// Throws away the current game and starts over with an empty, all-hidden board.
    pub fn reset(&mut self) {
        self.board = Board::default();
        self.status = GameStatus::Playing;
        self.mines_left = self.placer.mine_count() as isize;
        self.first_click_pending = true;
        log::debug!("new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn mines_left(&self) -> isize {
        self.mines_left
    }

    pub fn is_first_click_pending(&self) -> bool {
        self.first_click_pending
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.board.get(coords).copied()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }

    /// Primary action on a cell.
    pub fn handle_click(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if self.status.is_finished() {
            return NoChange;
        }
        if !self.board.get(coords).is_some_and(|cell| cell.is_closed()) {
            return NoChange;
        }

        if self.first_click_pending {
            if let Err(err) = self.placer.place_mines(&mut self.board, coords) {
                log::error!("failed to place mines around {:?}: {}", coords, err);
                return NoChange;
            }
            self.first_click_pending = false;
        }

        if self.board[coords].is_mine {
            self.board[coords].is_revealed = true;
            self.board.reveal_all_mines();
            self.status = GameStatus::Lost;
            log::info!("hit mine at {:?}", coords);
            return HitMine;
        }

        let revealed = self.board.reveal(coords);
        log::trace!("revealed {} cells from {:?}", revealed, coords);

        if self.check_win() { Won } else { Revealed }
    }

    /// Marks the game as won when every cell without a mine is revealed. Flags play no part.
    pub fn check_win(&mut self) -> bool {
        if self.status == GameStatus::Playing && self.board.all_safe_revealed() {
            self.status = GameStatus::Won;
            log::info!("all safe cells revealed");
        }
        self.status == GameStatus::Won
    }

    /// Secondary action on a cell. The mine counter follows the flags, right or wrong.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.status.is_finished() {
            return MarkOutcome::NoChange;
        }
        let Some(cell) = self.board.get_mut(coords) else {
            return MarkOutcome::NoChange;
        };
        if cell.is_revealed {
            return MarkOutcome::NoChange;
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.mines_left -= 1;
            MarkOutcome::Flagged
        } else {
            self.mines_left += 1;
            MarkOutcome::Unflagged
        }
    }
}
