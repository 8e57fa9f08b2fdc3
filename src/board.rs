use std::fmt::Debug;

/// A participant in a two-player game.
///
/// The search agent only needs to know who it plays for and who the adversary is.
pub trait Side: Copy + Eq + Debug {
    /// Returns the other participant.
    fn opponent(self) -> Self;
}

/// The central trait of the library, defining the interface for a game state.
///
/// Any deterministic, turn-based, zero-sum game with perfect information can be searched
/// by [`SearchAgent`](crate::minimax::SearchAgent) once it implements this trait.
/// Implementations must behave like plain values: the search clones the state once per
/// branch and mutates only the clone.
pub trait Game: Clone {
    /// The type representing a move in the game.
    type Move: Copy + Eq + Debug;
    /// The type identifying a player.
    type Side: Side;

    /// Returns the player whose turn it is to make a move.
    fn current_player(&self) -> Self::Side;

    /// Returns all legal moves from the current state, in a stable order.
    ///
    /// The order is the tie-break order of the search: among equally good moves the first
    /// one listed wins.
    fn available_moves(&self) -> Vec<Self::Move>;

    /// Applies a move for the current player. Returns `false` and leaves the state untouched
    /// when the move is illegal.
    fn perform_move(&mut self, m: Self::Move) -> bool;

    /// Returns `true` when the game is over.
    fn is_terminal(&self) -> bool;

    /// Returns the outcome value of the state from `player`'s perspective.
    ///
    /// Non-terminal states evaluate to `0`.
    fn utility(&self, player: Self::Side) -> i32;
}
