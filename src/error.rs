//! Errors produced when parsing boards and symbols from text.

/// Error returned when text cannot be turned into a [`Symbol`](crate::boards::tic_tac_toe::Symbol)
/// or a [`TicTacToe`](crate::boards::tic_tac_toe::TicTacToe) position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// The text does not name a player symbol.
    #[display("Unknown player symbol {:?}", _0)]
    UnknownSymbol(String),

    /// A board row does not have exactly three cells.
    #[display("Row {} has {} cells, expected 3", row, len)]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of cells found.
        len: usize,
    },

    /// A board cell holds a character that is neither a symbol nor an empty marker.
    #[display("Unexpected character {:?} at ({},{})", found, row, col)]
    UnknownCell {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The character found there.
        found: char,
    },

    /// The marker counts cannot arise from alternating play with X moving first.
    #[display("Impossible marker counts: {} X and {} O", x, o)]
    ImpossibleCounts {
        /// Number of X markers.
        x: usize,
        /// Number of O markers.
        o: usize,
    },
}

impl std::error::Error for ParseError {}
