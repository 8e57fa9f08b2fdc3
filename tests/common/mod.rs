#![allow(dead_code)]

use minimax_ttt::boards::tic_tac_toe::TicTacToe;
use std::collections::HashSet;

/// Every position reachable from the empty board by alternating play, X first.
pub fn reachable_states() -> Vec<TicTacToe> {
    let mut seen = HashSet::new();
    let mut stack = vec![TicTacToe::new()];
    let mut states = Vec::new();

    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        states.push(state);
        if state.is_terminal() {
            continue;
        }
        for pos in state.legal_moves() {
            let mut child = state;
            child.apply_move(pos.row, pos.col);
            stack.push(child);
        }
    }

    states
}
