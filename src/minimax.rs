use crate::board::{Game, Side};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// An agent that picks provably optimal moves by exhaustive adversarial search.
///
/// The agent explores the whole game tree below the state it is given, down to every
/// terminal leaf, and chooses the move that maximises its own guaranteed utility
/// assuming the opponent plays optimally. Plain minimax and alpha-beta pruning share a
/// single recursion; pruning only skips work and never changes the chosen move.
///
/// The agent holds no reference to any game state between calls. Every branch of the
/// search is explored on its own clone, so the caller's state is never modified.
#[derive(Debug, Clone)]
pub struct SearchAgent<S: Side> {
    player: S,
    opponent: S,
    use_alpha_beta_pruning: bool,
    nodes_expanded: u64,
}

/// A builder for creating instances of `SearchAgent`.
pub struct SearchAgentBuilder<S: Side> {
    player: S,
    use_alpha_beta_pruning: bool,
}

impl<S: Side> SearchAgentBuilder<S> {
    /// Creates a new builder for an agent searching on behalf of `player`.
    pub fn new(player: S) -> Self {
        Self {
            player,
            use_alpha_beta_pruning: true,
        }
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.use_alpha_beta_pruning = use_abp;
        self
    }

    /// Builds the `SearchAgent` instance with the configured parameters.
    pub fn build(self) -> SearchAgent<S> {
        SearchAgent::new(self.player, self.use_alpha_beta_pruning)
    }
}

/// Result of one top-level search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<M> {
    /// The chosen move. `None` when the searched state had no legal moves.
    pub best_move: Option<M>,
    /// The minimax value of the searched state for the agent's player.
    pub value: i32,
    /// Number of MAX and MIN evaluations performed.
    pub nodes_expanded: u64,
    /// Wall-clock time the search took.
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Max,
    Min,
}

impl Layer {
    fn next(self) -> Self {
        match self {
            Layer::Max => Layer::Min,
            Layer::Min => Layer::Max,
        }
    }
}

/// The (alpha, beta) bounds threaded down the recursion.
#[derive(Debug, Clone, Copy)]
struct Window {
    alpha: i32,
    beta: i32,
}

impl Window {
    const FULL: Window = Window {
        alpha: i32::MIN,
        beta: i32::MAX,
    };
}

impl<S: Side> SearchAgent<S> {
    /// Returns a new builder for `SearchAgent`. Pruning is enabled by default.
    pub fn builder(player: S) -> SearchAgentBuilder<S> {
        SearchAgentBuilder::new(player)
    }

    /// Creates a new agent searching on behalf of `player`.
    pub fn new(player: S, use_alpha_beta_pruning: bool) -> Self {
        Self {
            player,
            opponent: player.opponent(),
            use_alpha_beta_pruning,
            nodes_expanded: 0,
        }
    }

    /// The player this agent maximises for.
    pub fn player(&self) -> S {
        self.player
    }

    /// The adversary this agent minimises for.
    pub fn opponent(&self) -> S {
        self.opponent
    }

    pub fn uses_alpha_beta(&self) -> bool {
        self.use_alpha_beta_pruning
    }

    /// Number of nodes expanded by the most recent search.
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Returns the optimal move for the agent's player in `state`.
    ///
    /// `state` should not be terminal and should have the agent's player to move. The
    /// search does not check the latter: the root is always a MAX layer for the agent's
    /// player, whoever the state says is on turn. A state without legal moves yields
    /// `None`.
    pub fn best_move<G>(&mut self, state: &G) -> Option<G::Move>
    where
        G: Game<Side = S>,
    {
        self.search(state).best_move
    }

    /// Runs a full search from `state` and reports the chosen move with its value.
    ///
    /// Resets the node counter before searching.
    #[instrument(skip(self, state), fields(player = ?self.player, alpha_beta = self.use_alpha_beta_pruning))]
    pub fn search<G>(&mut self, state: &G) -> SearchReport<G::Move>
    where
        G: Game<Side = S>,
    {
        let started = Instant::now();
        self.nodes_expanded = 0;

        let (value, best_move) = self.evaluate(state, Layer::Max, Window::FULL);
        let elapsed = started.elapsed();

        debug!(
            ?best_move,
            value,
            nodes = self.nodes_expanded,
            ?elapsed,
            "search finished"
        );

        SearchReport {
            best_move,
            value,
            nodes_expanded: self.nodes_expanded,
            elapsed,
        }
    }

    /// One MAX or MIN node. Returns the node's value and the move that produced it.
    ///
    /// Ties keep the first move enumerated. With pruning enabled, a MAX node stops once
    /// its best value reaches beta and a MIN node stops once its best value drops to alpha.
    fn evaluate<G>(&mut self, state: &G, layer: Layer, mut window: Window) -> (i32, Option<G::Move>)
    where
        G: Game<Side = S>,
    {
        self.nodes_expanded += 1;
        if state.is_terminal() {
            return (state.utility(self.player), None);
        }

        let mut best_value = match layer {
            Layer::Max => i32::MIN,
            Layer::Min => i32::MAX,
        };
        let mut best_move = None;

        for candidate in state.available_moves() {
            let mut child = state.clone();
            child.perform_move(candidate);
            let (value, _) = self.evaluate(&child, layer.next(), window);

            let improves = match layer {
                Layer::Max => value > best_value,
                Layer::Min => value < best_value,
            };
            if improves {
                best_value = value;
                best_move = Some(candidate);
            }

            if self.use_alpha_beta_pruning {
                match layer {
                    Layer::Max => {
                        if best_value >= window.beta {
                            return (best_value, best_move);
                        }
                        window.alpha = window.alpha.max(best_value);
                    }
                    Layer::Min => {
                        if best_value <= window.alpha {
                            return (best_value, best_move);
                        }
                        window.beta = window.beta.min(best_value);
                    }
                }
            }
        }

        (best_value, best_move)
    }
}

#[cfg(test)]
mod tests {
    use crate::boards::tic_tac_toe::{Position, Symbol, TicTacToe, WIN_UTILITY};
    use crate::minimax::SearchAgent;

    #[test]
    fn test1_plain_from_empty_board() {
        // arrange
        let state = TicTacToe::new();
        let mut agent = SearchAgent::builder(Symbol::X)
            .with_alpha_beta_pruning(false)
            .build();

        // act
        let report = agent.search(&state);

        // assert
        assert_eq!(report.best_move, Some(Position::new(0, 0)));
        assert_eq!(report.value, 0);
        assert_eq!(report.nodes_expanded, 549_946);
        assert_eq!(agent.nodes_expanded(), 549_946);
        assert_eq!(state, TicTacToe::new());
    }

    #[test]
    fn test2_abp_from_empty_board() {
        // arrange
        let state = TicTacToe::new();
        let mut agent = SearchAgent::builder(Symbol::X).build();

        // act
        let report = agent.search(&state);

        // assert
        assert!(agent.uses_alpha_beta());
        assert_eq!(report.best_move, Some(Position::new(0, 0)));
        assert_eq!(report.value, 0);
        assert_eq!(report.nodes_expanded, 18_297);
    }

    #[test]
    fn test3_takes_immediate_win() {
        for use_abp in [false, true] {
            // arrange
            let state = TicTacToe::from_rows(["...", "OO.", "XX."]).unwrap();
            let mut agent = SearchAgent::new(Symbol::X, use_abp);

            // act
            let report = agent.search(&state);

            // assert
            assert_eq!(report.best_move, Some(Position::new(2, 2)));
            assert_eq!(report.value, WIN_UTILITY);
        }
    }

    #[test]
    fn test4_blocks_the_only_threat() {
        for use_abp in [false, true] {
            // arrange
            let state = TicTacToe::from_rows(["X..", ".X.", "O.."]).unwrap();
            let mut agent = SearchAgent::new(Symbol::O, use_abp);

            // act
            let best = agent.best_move(&state);

            // assert
            assert_eq!(best, Some(Position::new(2, 2)));
        }
    }

    #[test]
    fn test5_counter_resets_between_searches() {
        // arrange
        let state = TicTacToe::from_rows(["X..", ".X.", "O.."]).unwrap();
        let mut agent = SearchAgent::new(Symbol::O, false);

        // act
        agent.best_move(&state);
        let first = agent.nodes_expanded();
        agent.best_move(&state);
        let second = agent.nodes_expanded();

        // assert
        assert_eq!(first, 933);
        assert_eq!(first, second);
    }

    #[test]
    fn test6_terminal_state_yields_no_move() {
        // arrange
        let state = TicTacToe::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        let mut agent = SearchAgent::new(Symbol::O, true);

        // act
        let report = agent.search(&state);

        // assert
        assert_eq!(report.best_move, None);
        assert_eq!(report.value, 0);
        assert_eq!(report.nodes_expanded, 1);
    }

    #[test]
    fn test7_opponent_is_derived() {
        let agent = SearchAgent::new(Symbol::O, true);
        assert_eq!(agent.player(), Symbol::O);
        assert_eq!(agent.opponent(), Symbol::X);
        assert_eq!(agent.nodes_expanded(), 0);
    }
}
