use std::fmt::Display;

use itertools::Itertools;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    card::{Action, Card, Style},
    deck::Deck,
    error::GameError,
    octopus::Octopus,
    player::{Player, Strategy},
    steal::steal,
};

/// What a single drawn card did to the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    GainedFish(Style),
    LostFish(Style),
    /// Staring eyes on an empty slot.
    EyesAverted(Style),
    /// Tentacle on a slot the player already holds.
    TentacleIgnored(Style),
    Stole { style: Style, from: Uuid },
    NothingToSteal(Style),
    LostAllFish,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::GainedFish(style) => write!(f, "picks a {style} fish"),
            Outcome::LostFish(style) => write!(f, "loses the {style} fish"),
            Outcome::EyesAverted(style) => write!(f, "has no {style} fish to lose"),
            Outcome::TentacleIgnored(style) => write!(f, "already has a {style} fish"),
            Outcome::Stole { style, from } => write!(f, "steals a {style} fish from {from}"),
            Outcome::NothingToSteal(style) => write!(f, "finds no {style} fish to steal"),
            Outcome::LostAllFish => write!(f, "loses all fish"),
        }
    }
}

#[derive(Copy, Clone, Debug, Serialize)]
pub struct Event {
    pub player_id: Uuid,
    pub turn: usize,
    pub card: Card,
    pub outcome: Outcome,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub card: Card,
    pub outcome: Outcome,
    pub can_draw: bool,
}

/// Read-only snapshot handed to a strategy when it may draw again.
#[derive(Debug)]
pub struct TableView<'a> {
    pub seat: usize,
    pub turn: usize,
    pub draws_this_turn: usize,
    pub last_card: Card,
    pub octopi: &'a [Octopus],
}

impl TableView<'_> {
    pub fn own_octopus(&self) -> &Octopus {
        &self.octopi[self.seat]
    }

    pub fn opponents(&self) -> impl Iterator<Item = (usize, &Octopus)> + '_ {
        self.octopi
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx != self.seat)
    }

    pub fn most_fish_among_opponents(&self) -> usize {
        self.opponents()
            .map(|(_, octopus)| octopus.fish_count())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug)]
pub struct GameState {
    pub deck: Deck,
    pub table: Vec<Player>,
    pub octopi: Vec<Octopus>,
    pub current: usize,
    pub turns: usize,
    pub draws: usize,
    pub draws_this_turn: usize,
    /// One event per draw while `record_history` is set. Uncapped games grow
    /// this without bound, so long batch runs switch it off.
    pub history: Vec<Event>,
    pub record_history: bool,
}

impl GameState {
    /// Seats the players in the given order. The deck is used as handed in,
    /// so shuffle it first unless a fixed order is wanted.
    pub fn new(
        deck: Deck,
        player_inputs: Vec<(Uuid, String, Box<dyn Strategy>)>,
    ) -> Result<Self, GameError> {
        if player_inputs.is_empty() {
            return Err(GameError::NoPlayers);
        }
        log::info!("Num players: {}", player_inputs.len());
        let table: Vec<_> = player_inputs
            .into_iter()
            .map(|(id, name, strategy)| Player::new_with_id(id, name, strategy))
            .collect();
        let octopi = vec![Octopus::new(); table.len()];

        Ok(Self {
            deck,
            table,
            octopi,
            current: 0,
            turns: 0,
            draws: 0,
            draws_this_turn: 0,
            history: Vec::new(),
            record_history: true,
        })
    }

    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    pub fn num_players(&self) -> usize {
        self.table.len()
    }

    pub fn current_player(&self) -> &Player {
        &self.table[self.current]
    }

    pub fn current_octopus(&self) -> &Octopus {
        &self.octopi[self.current]
    }

    pub fn get_player(&self, id: Uuid) -> Option<&Player> {
        self.table.iter().find(|p| p.id == id)
    }

    pub fn begin_turn(&mut self) {
        self.turns += 1;
        self.draws_this_turn = 0;
        log::debug!("Turn {} for {}", self.turns, self.current_player().name);
    }

    /// Draws the next card and applies it to the current player.
    pub fn draw_and_resolve<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Resolution {
        let card = self.deck.draw(rng);
        self.draws += 1;
        self.draws_this_turn += 1;
        let resolution = self.resolve(card);

        let player_id = self.current_player().id;
        log::debug!(
            "{} draws {card} and {}, now has {} fish",
            self.current_player().name,
            resolution.outcome,
            self.current_octopus().fish_count()
        );
        if self.record_history {
            self.history.push(Event {
                player_id,
                turn: self.turns,
                card,
                outcome: resolution.outcome,
            });
        }
        resolution
    }

    fn resolve(&mut self, card: Card) -> Resolution {
        let seat = self.current;
        let style = card.style;
        let (outcome, can_draw) = match card.action {
            Action::Pattern => {
                self.octopi[seat].give_fish(style);
                (Outcome::GainedFish(style), true)
            }
            Action::StaringEyes => {
                if self.octopi[seat].has_fish(style) {
                    self.octopi[seat].take_fish(style);
                    (Outcome::LostFish(style), false)
                } else {
                    (Outcome::EyesAverted(style), true)
                }
            }
            Action::Tentacle => {
                if self.octopi[seat].has_fish(style) {
                    (Outcome::TentacleIgnored(style), true)
                } else {
                    let outcome = match steal(seat, style, &mut self.octopi) {
                        Some(victim) => Outcome::Stole {
                            style,
                            from: self.table[victim].id,
                        },
                        None => Outcome::NothingToSteal(style),
                    };
                    (outcome, false)
                }
            }
            Action::StaringOctopus => {
                self.octopi[seat].clear();
                (Outcome::LostAllFish, false)
            }
        };
        Resolution {
            card,
            outcome,
            can_draw,
        }
    }

    /// The current player's seat if their octopus is full.
    pub fn winner(&self) -> Option<usize> {
        self.current_octopus().is_complete().then_some(self.current)
    }

    pub fn wants_to_draw_again(&mut self, last_card: Card) -> bool {
        let seat = self.current;
        let view = TableView {
            seat,
            turn: self.turns,
            draws_this_turn: self.draws_this_turn,
            last_card,
            octopi: &self.octopi,
        };
        let decision = self.table[seat].strategy.draw_again(&view);
        if decision {
            log::debug!("{} chooses to draw", self.table[seat].name);
        } else {
            log::debug!("{} chooses to pass", self.table[seat].name);
        }
        decision
    }

    pub fn next_players_turn(&mut self) {
        self.current = (self.current + 1) % self.table.len();
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let players_str = self
            .table
            .iter()
            .zip(&self.octopi)
            .map(|(player, octopus)| {
                format!(
                    "{}: {} ({} fish)",
                    player.name,
                    octopus,
                    octopus.fish_count()
                )
            })
            .join("\n");
        write!(
            f,
            "\nTurn: {} Draws: {}\nTable:\n{}",
            self.turns, self.draws, players_str
        )
    }
}
