//! Headless game orchestration between two strategies, with move history and search
//! metrics.

use crate::boards::tic_tac_toe::{GameStatus, Position, Symbol, TicTacToe};
use crate::strategy::Strategy;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// One move played during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("#{ply} {player} -> {position} [{nodes_expanded} nodes]")]
pub struct MoveRecord {
    /// 1-based move number.
    pub ply: usize,
    pub player: Symbol,
    pub position: Position,
    /// Nodes the strategy expanded to choose this move.
    pub nodes_expanded: u64,
    /// Time the strategy took to choose this move.
    pub elapsed: Duration,
}

/// Running totals over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Moves played so far.
    pub moves: usize,
    /// Moves chosen by a searching strategy.
    pub searched_moves: usize,
    pub total_nodes: u64,
    pub total_search_time: Duration,
}

impl SessionStats {
    /// Average nodes expanded per searched move, or `None` before any search.
    pub fn average_nodes_per_move(&self) -> Option<f64> {
        if self.searched_moves == 0 {
            None
        } else {
            Some(self.total_nodes as f64 / self.searched_moves as f64)
        }
    }

    fn record(&mut self, record: &MoveRecord) {
        self.moves += 1;
        if record.nodes_expanded > 0 {
            self.searched_moves += 1;
            self.total_nodes += record.nodes_expanded;
            self.total_search_time += record.elapsed;
        }
    }
}

/// A single game between two strategies.
///
/// The session owns the authoritative [`TicTacToe`] state. Strategies only ever see it by
/// shared reference, and their chosen moves go through [`TicTacToe::apply_move`].
pub struct GameSession {
    state: TicTacToe,
    x: Box<dyn Strategy<TicTacToe>>,
    o: Box<dyn Strategy<TicTacToe>>,
    history: Vec<MoveRecord>,
    stats: SessionStats,
}

impl GameSession {
    /// Starts a session from `state`, with `x` playing `X` and `o` playing `O`.
    pub fn new(
        state: TicTacToe,
        x: impl Strategy<TicTacToe> + 'static,
        o: impl Strategy<TicTacToe> + 'static,
    ) -> Self {
        Self {
            state,
            x: Box::new(x),
            o: Box::new(o),
            history: Vec::new(),
            stats: SessionStats::default(),
        }
    }

    pub fn state(&self) -> &TicTacToe {
        &self.state
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Lets the player to move choose and play one move.
    ///
    /// Returns `None` and leaves the state untouched when the game is already over or the
    /// strategy fails to produce a legal move.
    #[instrument(skip(self), fields(ply = self.history.len() + 1))]
    pub fn step(&mut self) -> Option<MoveRecord> {
        if self.state.is_terminal() {
            return None;
        }

        let player = self.state.current_player();
        let strategy = match player {
            Symbol::X => &mut self.x,
            Symbol::O => &mut self.o,
        };

        let started = Instant::now();
        let chosen = strategy.choose_move(&self.state);
        let elapsed = started.elapsed();
        let nodes_expanded = strategy.nodes_expanded();

        let Some(position) = chosen else {
            warn!(%player, "strategy returned no move");
            return None;
        };
        if !self.state.apply_move(position.row, position.col) {
            warn!(%player, %position, "strategy returned an illegal move");
            return None;
        }

        let record = MoveRecord {
            ply: self.history.len() + 1,
            player,
            position,
            nodes_expanded,
            elapsed,
        };
        self.stats.record(&record);
        self.history.push(record);

        if self.state.is_terminal() {
            info!(
                status = %self.state.status(),
                moves = self.stats.moves,
                total_nodes = self.stats.total_nodes,
                "game over"
            );
        }

        Some(record)
    }

    /// Plays until the game is over or a strategy gets stuck, and returns the final status.
    pub fn play_to_end(&mut self) -> GameStatus {
        while self.step().is_some() {}
        self.state.status()
    }
}
