use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;
use types::{Deck, GameError, GameRng, GameState};
use uuid::Uuid;

use crate::{run_game, RunOptions, SimulationConfig};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeatSummary {
    pub name: String,
    pub strategy: String,
    pub wins: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialSummary {
    pub seed: u64,
    pub games: usize,
    pub seats: Vec<SeatSummary>,
    pub total_turns: usize,
    pub total_draws: usize,
    pub total_reshuffles: usize,
}

impl TrialSummary {
    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games as f64
    }

    pub fn average_draws(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_draws as f64 / self.games as f64
    }
}

impl Display for TrialSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seats_str = self
            .seats
            .iter()
            .enumerate()
            .map(|(idx, seat)| {
                format!(
                    "{}. {} ({}): {} wins",
                    idx + 1,
                    seat.name,
                    seat.strategy,
                    seat.wins
                )
            })
            .join("\n");
        write!(
            f,
            "{} games (seed {})\n{}\n{:.1} turns avg, {:.1} draws avg, {} reshuffles",
            self.games,
            self.seed,
            seats_str,
            self.average_turns(),
            self.average_draws(),
            self.total_reshuffles
        )
    }
}

/// Plays `config.games` independent games with the configured seats. Each
/// game gets a freshly shuffled deck and fresh strategies; all randomness
/// derives from the configured seed so a series can be replayed.
pub fn run_trials(config: &SimulationConfig) -> Result<TrialSummary, GameError> {
    if config.players.is_empty() {
        return Err(GameError::NoPlayers);
    }
    let base_rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let ids: Vec<_> = config.players.iter().map(|_| Uuid::new_v4()).collect();
    let options = RunOptions {
        max_turns: config.max_turns,
        delay_ms: config.delay_ms,
    };

    let mut summary = TrialSummary {
        seed: base_rng.seed(),
        games: 0,
        seats: config
            .players
            .iter()
            .map(|p| SeatSummary {
                name: p.name.clone(),
                strategy: p.strategy.to_string(),
                wins: 0,
            })
            .collect(),
        total_turns: 0,
        total_draws: 0,
        total_reshuffles: 0,
    };

    for game in 0..config.games {
        let mut rng = base_rng.stream(game as u64);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let player_inputs = config
            .players
            .iter()
            .zip(&ids)
            .enumerate()
            .map(|(seat, (p, &id))| (id, p.name.clone(), p.strategy.build(rng.stream(seat as u64))))
            .collect();

        let mut game_state = GameState::new(deck, player_inputs)?.with_history(false);
        let outcome = run_game(&mut game_state, &mut rng, options)?;
        log::debug!("Game {}: {outcome:?}", game + 1);

        summary.games += 1;
        summary.seats[outcome.winner].wins += 1;
        summary.total_turns += outcome.turns;
        summary.total_draws += outcome.draws;
        summary.total_reshuffles += outcome.reshuffles;
    }

    log::info!("Finished {} games", summary.games);
    Ok(summary)
}
