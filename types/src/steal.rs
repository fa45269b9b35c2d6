use crate::{card::Style, octopus::Octopus};

/// Moves the `style` fish to `acting` from whichever other player holds one
/// and has the most fish overall. Ties go to the lowest seat. Returns the
/// victim's seat, or `None` when nobody else holds that style.
pub fn steal(acting: usize, style: Style, octopi: &mut [Octopus]) -> Option<usize> {
    log::debug!("Player {acting} wants to steal a {style} fish");
    let mut victim: Option<usize> = None;
    let mut max_fish = 0;
    for (idx, octopus) in octopi.iter().enumerate() {
        if idx == acting || !octopus.has_fish(style) {
            continue;
        }
        let fish = octopus.fish_count();
        log::debug!("Player {idx} has a matching fish ({fish} total)");
        if fish > max_fish {
            max_fish = fish;
            victim = Some(idx);
        }
    }

    match victim {
        Some(idx) => {
            log::debug!("Player {acting} steals a {style} fish from player {idx}");
            octopi[idx].take_fish(style);
            octopi[acting].give_fish(style);
        }
        None => log::debug!("Nobody has a {style} fish, bad luck for player {acting}"),
    }
    victim
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Style::*;

    #[test]
    fn test_steal_prefers_player_with_most_fish() {
        let mut octopi = [
            Octopus::new(),
            Octopus::with_fish(&[Stars]),
            Octopus::with_fish(&[Stars, Balloons, Relaxed]),
        ];

        let victim = steal(0, Stars, &mut octopi);

        assert_eq!(victim, Some(2));
        assert!(octopi[0].has_fish(Stars));
        assert!(octopi[1].has_fish(Stars));
        assert!(!octopi[2].has_fish(Stars));
        assert_eq!(octopi[2].fish_count(), 2);
        assert_eq!(octopi[0].fish_count(), 1);
    }

    #[test]
    fn test_steal_tie_goes_to_lowest_seat() {
        let mut octopi = [
            Octopus::with_fish(&[Fireworks, Stars]),
            Octopus::with_fish(&[Fireworks, Stars]),
            Octopus::new(),
            Octopus::with_fish(&[Stars, Relaxed]),
        ];

        let victim = steal(2, Stars, &mut octopi);

        assert_eq!(victim, Some(0));
        assert!(!octopi[0].has_fish(Stars));
        assert!(octopi[1].has_fish(Stars));
        assert!(octopi[3].has_fish(Stars));
        assert!(octopi[2].has_fish(Stars));
    }

    #[test]
    fn test_steal_without_matching_fish_is_noop() {
        let mut octopi = [
            Octopus::with_fish(&[Balloons]),
            Octopus::with_fish(&[Fireworks, Relaxed]),
            Octopus::with_fish(&[Favourite]),
        ];
        let before = octopi;

        assert_eq!(steal(0, Stars, &mut octopi), None);
        assert_eq!(octopi, before);
    }

    #[test]
    fn test_steal_never_takes_from_self() {
        let mut octopi = [Octopus::with_fish(&[Stars]), Octopus::new()];
        let before = octopi;

        assert_eq!(steal(0, Stars, &mut octopi), None);
        assert_eq!(octopi, before);
    }
}
