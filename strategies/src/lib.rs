pub mod kind;

use std::fmt::Debug;

use rand::Rng;
use types::{GameRng, Strategy, TableView};

pub use crate::kind::{ParseStrategyError, StrategyKind};

/// Keeps drawing new cards as long as the rules allow.
#[derive(Debug, Default)]
pub struct AlwaysDraw;

impl Strategy for AlwaysDraw {
    fn draw_again(&mut self, _view: &TableView) -> bool {
        true
    }
}

/// Always passes.
#[derive(Debug, Default)]
pub struct NeverDraw;

impl Strategy for NeverDraw {
    fn draw_again(&mut self, _view: &TableView) -> bool {
        false
    }
}

/// Wraps a plain `FnMut() -> bool`, for strategies that keep their own
/// state and do not look at the table.
pub struct FnStrategy<F> {
    name: &'static str,
    decide: F,
}

impl<F: FnMut() -> bool> FnStrategy<F> {
    pub fn new(name: &'static str, decide: F) -> Self {
        Self { name, decide }
    }
}

impl<F> Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStrategy").field("name", &self.name).finish()
    }
}

impl<F: FnMut() -> bool> Strategy for FnStrategy<F> {
    fn draw_again(&mut self, _view: &TableView) -> bool {
        (self.decide)()
    }
}

/// Draws again with a fixed probability.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: GameRng,
    probability: f64,
}

impl RandomStrategy {
    /// `probability` is clamped to `[0, 1]`; NaN falls back to an even chance.
    pub fn new(probability: f64, rng: GameRng) -> Self {
        let probability = if probability.is_nan() {
            log::warn!("Draw probability is NaN, using 0.5");
            0.5
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { rng, probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new(0.5, GameRng::from_entropy())
    }
}

impl Strategy for RandomStrategy {
    fn draw_again(&mut self, _view: &TableView) -> bool {
        self.rng.gen_bool(self.probability)
    }
}

/// Keeps drawing only while holding fewer than `threshold` fish, or while
/// some opponent is closer to winning.
#[derive(Debug)]
pub struct CautiousStrategy {
    threshold: usize,
}

impl CautiousStrategy {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl Default for CautiousStrategy {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Strategy for CautiousStrategy {
    fn draw_again(&mut self, view: &TableView) -> bool {
        let own = view.own_octopus().fish_count();
        let leader = view.most_fish_among_opponents();
        log::trace!("Cautious at {own} fish, leading opponent at {leader}");
        own < self.threshold || leader > own
    }
}
