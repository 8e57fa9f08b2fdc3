//! Contains implementations of the `Game` trait.

/// A `Game` implementation for Tic-Tac-Toe.
pub mod tic_tac_toe;
