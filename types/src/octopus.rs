use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::card::Style;

/// One fish slot per style; `true` means the player holds a fish there.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Octopus([bool; 5]);

impl Octopus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fish(styles: &[Style]) -> Self {
        let mut octopus = Self::new();
        for &style in styles {
            octopus.give_fish(style);
        }
        octopus
    }

    pub fn fish_count(&self) -> usize {
        self.0.iter().filter(|&&arm| arm).count()
    }

    /// All arms hold a fish: the win condition.
    pub fn is_complete(&self) -> bool {
        self.fish_count() == self.0.len()
    }

    pub fn has_fish(&self, style: Style) -> bool {
        self.0[style.index()]
    }

    pub fn give_fish(&mut self, style: Style) {
        self.0[style.index()] = true;
    }

    pub fn take_fish(&mut self, style: Style) {
        self.0[style.index()] = false;
    }

    pub fn clear(&mut self) {
        self.0 = [false; 5];
    }

    pub fn styles_held(&self) -> impl Iterator<Item = Style> + '_ {
        Style::ALL
            .into_iter()
            .filter(move |&style| self.has_fish(style))
    }
}

impl Display for Octopus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for arm in self.0 {
            write!(f, "{}", if arm { '\u{1F41F}' } else { '_' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_octopus_is_empty() {
        let octopus = Octopus::new();
        assert_eq!(octopus.fish_count(), 0);
        assert!(!octopus.is_complete());
    }

    #[test]
    fn test_complete_only_when_all_arms_filled() {
        let mut octopus = Octopus::with_fish(&[
            Style::Balloons,
            Style::Fireworks,
            Style::Stars,
            Style::Relaxed,
        ]);
        assert_eq!(octopus.fish_count(), 4);
        assert!(!octopus.is_complete());

        octopus.give_fish(Style::Favourite);
        assert_eq!(octopus.fish_count(), 5);
        assert!(octopus.is_complete());
    }

    #[test]
    fn test_give_is_idempotent_and_take_clears_one_slot() {
        let mut octopus = Octopus::new();
        octopus.give_fish(Style::Stars);
        octopus.give_fish(Style::Stars);
        octopus.give_fish(Style::Relaxed);
        assert_eq!(octopus.fish_count(), 2);

        octopus.take_fish(Style::Stars);
        assert!(!octopus.has_fish(Style::Stars));
        assert!(octopus.has_fish(Style::Relaxed));
        assert_eq!(octopus.styles_held().collect::<Vec<_>>(), vec![Style::Relaxed]);

        octopus.clear();
        assert_eq!(octopus, Octopus::new());
    }
}
