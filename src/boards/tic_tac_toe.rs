use crate::board::{Game, Side};
use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Utility of a won game for the winner.
pub const WIN_UTILITY: i32 = 10;
/// Utility of a lost game for the loser.
pub const LOSS_UTILITY: i32 = -10;
/// Utility of a drawn (or undecided) game.
pub const DRAW_UTILITY: i32 = 0;

const SIZE: usize = 3;

/// The eight winning lines: rows, then columns, then the two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A player's mark. `X` moves first on a fresh board.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, derive_more::Display)]
pub enum Symbol {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub const fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl Side for Symbol {
    fn opponent(self) -> Self {
        Symbol::opponent(self)
    }
}

impl TryFrom<char> for Symbol {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' | 'x' => Ok(Symbol::X),
            'O' | 'o' => Ok(Symbol::O),
            other => Err(ParseError::UnknownSymbol(other.to_string())),
        }
    }
}

impl FromStr for Symbol {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::try_from(c),
            _ => Err(ParseError::UnknownSymbol(s.to_string())),
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Symbol),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str("."),
            Cell::Taken(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// A cell coordinate. Both components are in `0..=2` for cells on the board.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, derive_more::Display)]
#[display("({row},{col})")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

/// A decided game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Outcome {
    /// Three in a row for the given symbol.
    Win(Symbol),
    /// Full board, no line completed.
    Draw,
}

/// Result category of a position, suitable for showing to a user.
#[derive(Debug, PartialEq, Eq, Copy, Clone, derive_more::Display)]
pub enum GameStatus {
    #[display("Game in progress")]
    InProgress,
    #[display("Player {_0} wins!")]
    Won(Symbol),
    #[display("It's a draw!")]
    Draw,
}

/// A Tic-Tac-Toe position: the 3x3 grid plus the player to move.
///
/// This is a plain value type. The search clones it freely to explore hypothetical
/// futures, so nothing done during a search can reach the instance a caller holds.
///
/// The only transition is [`TicTacToe::apply_move`], which places the current player's
/// symbol and hands the turn to the opponent.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToe {
    cells: [[Cell; SIZE]; SIZE],
    current_player: Symbol,
}

impl Default for TicTacToe {
    /// Creates an empty board with `X` to move.
    fn default() -> Self {
        TicTacToe::new()
    }
}

impl TicTacToe {
    /// Creates an empty board with `X` to move.
    pub const fn new() -> Self {
        TicTacToe::with_first_player(Symbol::X)
    }

    /// Creates an empty board with `first` to move.
    pub const fn with_first_player(first: Symbol) -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
            current_player: first,
        }
    }

    /// Parses a position from three rows of text.
    ///
    /// Each row holds exactly three characters: `X`, `O` (either case), or one of
    /// ` `, `.`, `_` for an empty cell. The player to move follows from the marker
    /// counts, assuming `X` moved first.
    ///
    /// ```rust
    /// use minimax_ttt::boards::tic_tac_toe::{Symbol, TicTacToe};
    ///
    /// let state = TicTacToe::from_rows(["XO.", ".X.", "..O"]).unwrap();
    /// assert_eq!(state.current_player(), Symbol::X);
    /// ```
    pub fn from_rows(rows: [&str; SIZE]) -> Result<Self, ParseError> {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        let (mut x, mut o) = (0, 0);

        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != SIZE {
                return Err(ParseError::RowLength {
                    row,
                    len: chars.len(),
                });
            }

            for (col, &c) in chars.iter().enumerate() {
                cells[row][col] = match c {
                    ' ' | '.' | '_' => Cell::Empty,
                    other => {
                        let symbol = Symbol::try_from(other)
                            .map_err(|_| ParseError::UnknownCell { row, col, found: c })?;
                        match symbol {
                            Symbol::X => x += 1,
                            Symbol::O => o += 1,
                        }
                        Cell::Taken(symbol)
                    }
                };
            }
        }

        let current_player = if x == o {
            Symbol::X
        } else if x == o + 1 {
            Symbol::O
        } else {
            return Err(ParseError::ImpossibleCounts { x, o });
        };

        Ok(Self {
            cells,
            current_player,
        })
    }

    /// Returns a copy of the grid, indexed `[row][col]`.
    pub fn board(&self) -> [[Cell; SIZE]; SIZE] {
        self.cells
    }

    /// Returns the cell at `pos`, or `None` when `pos` is off the board.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Symbol {
        self.current_player
    }

    /// Returns the number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Returns every empty cell in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Position::new(row, col)))
            .filter(|pos| self.cells[pos.row][pos.col] == Cell::Empty)
            .collect()
    }

    /// Returns `true` iff `(row, col)` is on the board and empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        row < SIZE && col < SIZE && self.cells[row][col] == Cell::Empty
    }

    /// Places the current player's symbol at `(row, col)` and passes the turn.
    ///
    /// Returns `false` without touching the state when the move is off the board or the
    /// cell is taken.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        if !self.is_valid_move(row, col) {
            return false;
        }

        self.cells[row][col] = Cell::Taken(self.current_player);
        self.current_player = self.current_player.opponent();
        true
    }

    /// Returns the decided outcome, or `None` while the game is in progress.
    ///
    /// Lines are checked rows first, then columns, then diagonals. In a game reached by
    /// alternating play at most one symbol can own a complete line.
    pub fn check_winner(&self) -> Option<Outcome> {
        if let Some(line) = self.find_winning_line() {
            let (row, col) = line[0];
            if let Cell::Taken(symbol) = self.cells[row][col] {
                return Some(Outcome::Win(symbol));
            }
        }

        if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Returns the cells of the completed line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.find_winning_line()
            .map(|line| line.map(Position::from))
    }

    /// Returns `true` once the game is won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.check_winner().is_some() || self.legal_moves().is_empty()
    }

    /// Returns the outcome value from `player`'s perspective.
    ///
    /// `+10` if `player` won, `-10` if the opponent won, `0` for a draw. A state that is
    /// still in progress also yields `0`: the value is undefined there, not a midgame score.
    pub fn utility(&self, player: Symbol) -> i32 {
        match self.check_winner() {
            Some(Outcome::Win(winner)) if winner == player => WIN_UTILITY,
            Some(Outcome::Win(_)) => LOSS_UTILITY,
            Some(Outcome::Draw) | None => DRAW_UTILITY,
        }
    }

    /// Returns the result category of the position.
    pub fn status(&self) -> GameStatus {
        match self.check_winner() {
            None => GameStatus::InProgress,
            Some(Outcome::Win(symbol)) => GameStatus::Won(symbol),
            Some(Outcome::Draw) => GameStatus::Draw,
        }
    }

    fn find_winning_line(&self) -> Option<[(usize, usize); 3]> {
        LINES.iter().copied().find(|line| {
            let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
            a != Cell::Empty && a == b && b == c
        })
    }

    fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }
}

impl Game for TicTacToe {
    type Move = Position;
    type Side = Symbol;

    fn current_player(&self) -> Symbol {
        self.current_player
    }

    fn available_moves(&self) -> Vec<Position> {
        self.legal_moves()
    }

    fn perform_move(&mut self, m: Position) -> bool {
        self.apply_move(m.row, m.col)
    }

    fn is_terminal(&self) -> bool {
        TicTacToe::is_terminal(self)
    }

    fn utility(&self, player: Symbol) -> i32 {
        TicTacToe::utility(self, player)
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            write!(f, "{}|{}|{}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
