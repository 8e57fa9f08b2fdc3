mod common;

use minimax_ttt::boards::tic_tac_toe::{GameStatus, Symbol, TicTacToe};
use minimax_ttt::minimax::SearchAgent;
use minimax_ttt::random::{CustomNumberGenerator, RandomPlayer};
use minimax_ttt::session::GameSession;

#[test]
fn pruning_never_changes_the_move_and_never_costs_more() {
    for state in common::reachable_states() {
        if state.is_terminal() {
            continue;
        }
        let player = state.current_player();
        let mut plain = SearchAgent::new(player, false);
        let mut pruned = SearchAgent::new(player, true);

        let plain_report = plain.search(&state);
        let pruned_report = pruned.search(&state);

        assert_eq!(plain_report.best_move, pruned_report.best_move, "in\n{state}");
        assert_eq!(plain_report.value, pruned_report.value, "in\n{state}");
        assert!(pruned_report.nodes_expanded <= plain_report.nodes_expanded);
    }
}

#[test]
fn chosen_move_is_always_playable() {
    for state in common::reachable_states() {
        if state.is_terminal() {
            continue;
        }
        let mut agent = SearchAgent::new(state.current_player(), true);
        let before = state;

        let pos = agent.best_move(&state).unwrap();

        assert_eq!(state, before);
        assert!(state.is_valid_move(pos.row, pos.col));
        let mut next = state;
        assert!(next.apply_move(pos.row, pos.col));
    }
}

#[test]
fn optimal_play_from_every_opening_is_a_draw() {
    for first in TicTacToe::new().legal_moves() {
        let mut state = TicTacToe::new();
        state.apply_move(first.row, first.col);

        let mut session = GameSession::new(
            state,
            SearchAgent::new(Symbol::X, true),
            SearchAgent::new(Symbol::O, true),
        );

        assert_eq!(session.play_to_end(), GameStatus::Draw, "opening {first}");
    }
}

#[test]
fn agent_never_loses_to_random_play() {
    for seed in 0..100 {
        let mut as_x = GameSession::new(
            TicTacToe::new(),
            SearchAgent::new(Symbol::X, true),
            RandomPlayer::new(CustomNumberGenerator::new(seed)),
        );
        let mut as_o = GameSession::new(
            TicTacToe::new(),
            RandomPlayer::new(CustomNumberGenerator::new(seed)),
            SearchAgent::new(Symbol::O, true),
        );

        assert_ne!(as_x.play_to_end(), GameStatus::Won(Symbol::O), "seed {seed}");
        assert_ne!(as_o.play_to_end(), GameStatus::Won(Symbol::X), "seed {seed}");
    }
}

#[test]
fn agent_with_o_moving_first_still_draws() {
    let mut session = GameSession::new(
        TicTacToe::with_first_player(Symbol::O),
        SearchAgent::new(Symbol::X, false),
        SearchAgent::new(Symbol::O, true),
    );

    assert_eq!(session.play_to_end(), GameStatus::Draw);
    assert_eq!(session.history()[0].player, Symbol::O);
}
