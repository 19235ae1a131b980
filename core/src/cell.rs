use serde::{Deserialize, Serialize};

/// Full state of a single board position, including the hidden parts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    /// Whether a reveal or a click may open this cell.
    pub const fn is_closed(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub const fn view(self) -> CellView {
        if self.is_flagged {
            CellView::Flagged
        } else if !self.is_revealed {
            CellView::Hidden
        } else if self.is_mine {
            CellView::Mine
        } else {
            CellView::Revealed(self.adjacent_mines)
        }
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Mine,
    Revealed(u8),
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
