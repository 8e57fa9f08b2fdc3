extern crate minimax_ttt;

use minimax_ttt::boards::tic_tac_toe::{Symbol, TicTacToe};
use minimax_ttt::minimax::SearchAgent;
use minimax_ttt::random::{RandomPlayer, StandardRandomGenerator};
use minimax_ttt::session::GameSession;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Two optimal agents: one plain, one pruned
    let mut session = GameSession::new(
        TicTacToe::new(),
        SearchAgent::builder(Symbol::X)
            .with_alpha_beta_pruning(false)
            .build(),
        SearchAgent::builder(Symbol::O).build(),
    );
    let status = session.play_to_end();

    for record in session.history() {
        println!("{record}");
    }
    println!("{}", session.state());
    println!("{status}");

    let stats = session.stats();
    println!(
        "Total nodes: {}, search time: {:.2?}, avg nodes/move: {:.1}",
        stats.total_nodes,
        stats.total_search_time,
        stats.average_nodes_per_move().unwrap_or_default()
    );

    // The agent against a random opponent
    let mut session = GameSession::new(
        TicTacToe::new(),
        RandomPlayer::new(StandardRandomGenerator),
        SearchAgent::builder(Symbol::O).build(),
    );
    let status = session.play_to_end();
    println!("{}", session.state());
    println!("{status}");
    assert_ne!(status.to_string(), "Player X wins!");
}
