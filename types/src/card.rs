use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Style {
    Balloons,
    Fireworks,
    Stars,
    Relaxed,
    Favourite,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Balloons,
        Style::Fireworks,
        Style::Stars,
        Style::Relaxed,
        Style::Favourite,
    ];

    /// Slot index of this style on an octopus.
    pub fn index(&self) -> usize {
        match self {
            Style::Balloons => 0,
            Style::Fireworks => 1,
            Style::Stars => 2,
            Style::Relaxed => 3,
            Style::Favourite => 4,
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Style::Balloons => write!(f, "balloons"),
            Style::Fireworks => write!(f, "fireworks"),
            Style::Stars => write!(f, "stars"),
            Style::Relaxed => write!(f, "relaxed"),
            Style::Favourite => write!(f, "favourite"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Pattern,
    StaringEyes,
    Tentacle,
    StaringOctopus,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Pattern => write!(f, "pattern"),
            Action::StaringEyes => write!(f, "staring eyes"),
            Action::Tentacle => write!(f, "tentacle"),
            Action::StaringOctopus => write!(f, "staring octopus"),
        }
    }
}

/// A single card. The style of a staring octopus card carries no meaning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub style: Style,
    pub action: Action,
}

impl Card {
    pub const fn new(style: Style, action: Action) -> Self {
        Card { style, action }
    }

    pub const fn pattern(style: Style) -> Self {
        Card::new(style, Action::Pattern)
    }

    pub const fn staring_eyes(style: Style) -> Self {
        Card::new(style, Action::StaringEyes)
    }

    pub const fn tentacle(style: Style) -> Self {
        Card::new(style, Action::Tentacle)
    }

    pub const fn staring_octopus() -> Self {
        Card::new(Style::Balloons, Action::StaringOctopus)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.action {
            Action::StaringOctopus => write!(f, "{}", self.action),
            action => write!(f, "{} ({})", action, self.style),
        }
    }
}
