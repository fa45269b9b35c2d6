pub mod config;
pub mod trials;

use std::{thread::sleep, time::Duration};

use rand::Rng;
use serde::Serialize;
use types::{GameError, GameState};
use uuid::Uuid;

pub use config::{ConfigError, PlayerConfig, SimulationConfig};
pub use trials::{run_trials, SeatSummary, TrialSummary};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Give up with `GameError::TurnLimitExceeded` once this many turns have
    /// passed without a winner. `None` plays until someone wins, which has no
    /// upper bound; `GameState::history` grows by one event per draw meanwhile.
    pub max_turns: Option<usize>,
    /// Pause before every draw, for following a game in the logs.
    pub delay_ms: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    pub winner: usize,
    pub winner_id: Uuid,
    pub winner_name: String,
    pub turns: usize,
    pub draws: usize,
    pub reshuffles: usize,
}

/// Plays `game_state` until some octopus is full. A turn lasts as long as
/// the drawn cards allow another draw and the player's strategy takes it.
///
/// Play starts with a new turn for `game_state.current`, so a game that was
/// partly played by hand resumes correctly when handed over between turns.
pub fn run_game<R: Rng + ?Sized>(
    game_state: &mut GameState,
    rng: &mut R,
    options: RunOptions,
) -> Result<GameOutcome, GameError> {
    let initial_shuffles = game_state.deck.shuffles();
    loop {
        if let Some(max_turns) = options.max_turns {
            if game_state.turns >= max_turns {
                log::warn!("No winner after {max_turns} turns, giving up");
                return Err(GameError::TurnLimitExceeded(max_turns));
            }
        }
        game_state.begin_turn();
        loop {
            if let Some(ms) = options.delay_ms {
                sleep(Duration::from_millis(ms));
            }
            let resolution = game_state.draw_and_resolve(rng);
            if let Some(winner) = game_state.winner() {
                let player = game_state.current_player();
                log::info!("{} wins in {} turns", player.name, game_state.turns);
                return Ok(GameOutcome {
                    winner,
                    winner_id: player.id,
                    winner_name: player.name.clone(),
                    turns: game_state.turns,
                    draws: game_state.draws,
                    reshuffles: game_state.deck.shuffles() - initial_shuffles,
                });
            }
            if !resolution.can_draw || !game_state.wants_to_draw_again(resolution.card) {
                break;
            }
        }
        log::trace!("{game_state}");
        game_state.next_players_turn();
    }
}
