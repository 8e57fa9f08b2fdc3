//! Perfect-play Tic-Tac-Toe.
//!
//! This library provides a Tic-Tac-Toe game model and an agent that chooses
//! game-theoretically optimal moves by searching the complete game tree with minimax,
//! optionally with alpha-beta pruning. The board is small enough that every search runs
//! to the terminal positions; there is no heuristic evaluation.
//!
//! # Example
//!
//! ```rust
//! use minimax_ttt::boards::tic_tac_toe::{Symbol, TicTacToe};
//! use minimax_ttt::minimax::SearchAgent;
//!
//! // Create a new board with X to move
//! let mut game = TicTacToe::new();
//! game.apply_move(1, 1);
//!
//! // Create an agent playing O, with alpha-beta pruning enabled
//! let mut agent = SearchAgent::builder(Symbol::O)
//!     .with_alpha_beta_pruning(true)
//!     .build();
//!
//! // Ask for the optimal reply and play it
//! let reply = agent.best_move(&game).unwrap();
//! assert!(game.apply_move(reply.row, reply.col));
//!
//! println!("O plays {} after expanding {} nodes", reply, agent.nodes_expanded());
//! ```

/// Contains the `Game` and `Side` traits that the search is written against.
pub mod board;
/// Contains implementations of the `Game` trait.
pub mod boards;
/// Errors produced when parsing boards and symbols.
pub mod error;
/// The core module of the library, containing the `SearchAgent` implementation.
pub mod minimax;
/// Random number sources and a random-move opponent.
pub mod random;
/// Headless matches between two strategies, with history and metrics.
pub mod session;
/// Contains the `Strategy` trait for anything that picks moves.
pub mod strategy;
