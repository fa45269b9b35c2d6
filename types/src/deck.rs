use std::fmt::Display;

use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

use crate::{
    card::{Card, Style::*},
    error::GameError,
};

pub const DECK_SIZE: usize = 32;

const CANONICAL_ORDER: [Card; DECK_SIZE] = [
    // four pattern cards for each style
    Card::pattern(Balloons),
    Card::pattern(Balloons),
    Card::pattern(Balloons),
    Card::pattern(Balloons),
    Card::pattern(Fireworks),
    Card::pattern(Fireworks),
    Card::pattern(Fireworks),
    Card::pattern(Fireworks),
    Card::pattern(Stars),
    Card::pattern(Stars),
    Card::pattern(Stars),
    Card::pattern(Stars),
    Card::pattern(Relaxed),
    Card::pattern(Relaxed),
    Card::pattern(Relaxed),
    Card::pattern(Relaxed),
    Card::pattern(Favourite),
    Card::pattern(Favourite),
    Card::pattern(Favourite),
    Card::pattern(Favourite),
    // one staring eyes card for each style
    Card::staring_eyes(Balloons),
    Card::staring_eyes(Fireworks),
    Card::staring_eyes(Stars),
    Card::staring_eyes(Relaxed),
    Card::staring_eyes(Favourite),
    // one tentacle for each style
    Card::tentacle(Balloons),
    Card::tentacle(Fireworks),
    Card::tentacle(Stars),
    Card::tentacle(Relaxed),
    Card::tentacle(Favourite),
    // two staring octopus cards, style irrelevant
    Card::staring_octopus(),
    Card::staring_octopus(),
];

/// The shared draw pile. Its length is fixed by the type; cards are only ever reordered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    cursor: usize,
    shuffles: usize,
}

/// Canonical, unshuffled deck.
pub fn build_deck() -> Deck {
    Deck::new()
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self::from_cards(CANONICAL_ORDER)
    }

    /// Deck in a caller-chosen order, e.g. for replaying a known sequence.
    pub fn from_cards(cards: [Card; DECK_SIZE]) -> Self {
        Self {
            cards,
            cursor: 0,
            shuffles: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) -> Result<(), GameError> {
        if cursor >= DECK_SIZE {
            return Err(GameError::CursorOutOfRange(cursor));
        }
        self.cursor = cursor;
        Ok(())
    }

    /// How many times this deck has been shuffled since it was built.
    pub fn shuffles(&self) -> usize {
        self.shuffles
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.shuffles += 1;
    }

    /// Takes the card under the cursor. Once the last card is taken the
    /// cursor wraps to the top and the whole deck is shuffled for later draws.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        let card = self.cards[self.cursor];
        self.cursor += 1;
        if self.cursor == self.cards.len() {
            self.cursor = 0;
            log::info!("Deck exhausted, re-shuffling");
            self.shuffle(rng);
        }
        card
    }
}

impl Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] (next: {})",
            self.cards.iter().map(|c| c.to_string()).join(", "),
            self.cursor
        )
    }
}
