//! Property checks for the reward formulas and aggregates

use proptest::prelude::*;

use emerald_village::inhabitant::{combined_bonus, Inhabitant};
use emerald_village::village::Village;

proptest! {
    #[test]
    fn reward_never_drops_below_base(
        level in 0..1000i32,
        houses in 0..200i32,
        mob_kills in 0..1000i32,
        boss_kills in 0..100i32,
    ) {
        let villagers = [
            Inhabitant::worker("w", level, 10),
            Inhabitant::builder("b", level, 10, houses),
            Inhabitant::warrior("f", level, 10, mob_kills, boss_kills),
            Inhabitant::mage("m", level, 10),
        ];
        for villager in &villagers {
            prop_assert!(villager.reward() >= villager.base_reward());
            prop_assert!(villager.bonus() >= 0);
        }
    }

    #[test]
    fn reward_at_least_is_a_max(level in 0..1000i32, minimum in -10_000..10_000i32) {
        let mage = Inhabitant::mage("m", level, 10);
        prop_assert_eq!(mage.reward_at_least(minimum), mage.reward().max(minimum));
    }

    #[test]
    fn combined_bonus_commutes(
        level_a in 0..1000i32,
        level_b in 0..1000i32,
        houses in 0..200i32,
    ) {
        let a = Inhabitant::builder("a", level_a, 10, houses);
        let b = Inhabitant::mage("b", level_b, 10);
        prop_assert_eq!(combined_bonus(&a, &b), combined_bonus(&b, &a));
        prop_assert_eq!(combined_bonus(&a, &b), a.bonus() + b.bonus());
    }

    #[test]
    fn total_emeralds_is_order_independent(
        levels in proptest::collection::vec(0..500i32, 0..12),
    ) {
        let mut village = Village::new();
        for (idx, level) in levels.iter().enumerate() {
            village
                .add(Inhabitant::worker(format!("w{idx}"), *level, 10))
                .unwrap();
        }
        let before = village.total_emeralds();
        village.sort_by_level(false);
        prop_assert_eq!(village.total_emeralds(), before);
        village.sort_by_level(true);
        prop_assert_eq!(village.total_emeralds(), before);
    }
}
