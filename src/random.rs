use crate::board::Game;
use crate::strategy::Strategy;
use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of random numbers for opponents that do not search.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> u32;

    /// Returns an index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }
}

/// Backed by the thread-local generator of `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> u32 {
        rand::random()
    }

    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// A seeded linear congruential generator, for reproducible games.
#[derive(Debug, Clone, Copy)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(i32::MAX as i64),
        }
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> u32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as u32
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.next() as usize % len
    }
}

/// An opponent that plays a uniformly random legal move.
#[derive(Debug, Default, Clone)]
pub struct RandomPlayer<K: RandomGenerator = StandardRandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomPlayer<K> {
    pub fn new(random: K) -> Self {
        Self { random }
    }
}

impl<G: Game, K: RandomGenerator> Strategy<G> for RandomPlayer<K> {
    fn choose_move(&mut self, state: &G) -> Option<G::Move> {
        if state.is_terminal() {
            return None;
        }
        self.random.choose(&state.available_moves()).copied()
    }
}
