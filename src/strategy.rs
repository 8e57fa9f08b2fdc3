use crate::board::Game;
use crate::minimax::SearchAgent;

/// Anything that can pick a move for the player to move in a given state.
pub trait Strategy<G: Game> {
    /// Returns the move to play, or `None` when there is nothing to play.
    fn choose_move(&mut self, state: &G) -> Option<G::Move>;

    /// Nodes expanded by the last call to [`Strategy::choose_move`]. Zero for strategies
    /// that do not search.
    fn nodes_expanded(&self) -> u64 {
        0
    }
}

impl<G: Game> Strategy<G> for SearchAgent<G::Side> {
    fn choose_move(&mut self, state: &G) -> Option<G::Move> {
        self.best_move(state)
    }

    fn nodes_expanded(&self) -> u64 {
        SearchAgent::nodes_expanded(self)
    }
}
