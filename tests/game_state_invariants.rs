mod common;

use minimax_ttt::boards::tic_tac_toe::{Cell, Outcome, Symbol};

#[test]
fn reachable_state_space_has_known_size() {
    let states = common::reachable_states();
    let non_terminal = states.iter().filter(|s| !s.is_terminal()).count();

    assert_eq!(states.len(), 5478);
    assert_eq!(non_terminal, 4520);
}

#[test]
fn marker_counts_follow_turn_alternation() {
    for state in common::reachable_states() {
        let cells = state.board();
        let count = |symbol| {
            cells
                .iter()
                .flatten()
                .filter(|cell| **cell == Cell::Taken(symbol))
                .count()
        };
        let (x, o) = (count(Symbol::X), count(Symbol::O));

        assert!(x == o || x == o + 1, "bad counts in\n{state}");
        let expected = if x == o { Symbol::X } else { Symbol::O };
        assert_eq!(state.current_player(), expected);
    }
}

#[test]
fn terminal_iff_decided_or_full() {
    for state in common::reachable_states() {
        let decided = state.check_winner().is_some();
        let full = state.legal_moves().is_empty();

        assert_eq!(state.is_terminal(), decided || full);
        if state.check_winner() == Some(Outcome::Draw) {
            assert!(full);
            assert_eq!(state.winning_line(), None);
        }
        if let Some(Outcome::Win(symbol)) = state.check_winner() {
            let line = state.winning_line().unwrap();
            assert!(line.iter().all(|pos| state.cell(*pos) == Some(Cell::Taken(symbol))));
            assert_eq!(state.utility(symbol), 10);
            assert_eq!(state.utility(symbol.opponent()), -10);
        }
    }
}

#[test]
fn legal_moves_are_exactly_the_valid_ones() {
    for state in common::reachable_states() {
        let legal = state.legal_moves();
        for row in 0..3 {
            for col in 0..3 {
                let pos = (row, col).into();
                assert_eq!(state.is_valid_move(row, col), legal.contains(&pos));
            }
        }
    }
}
