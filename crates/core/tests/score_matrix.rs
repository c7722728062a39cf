use overlords_core::{
    score_chimera_cards, score_cyclops_cards, score_pile, score_warrior_cards, score_zombie_cards,
    Card, GameConfig, ScoreTables, WarriorValue, ZombieRule,
};

fn tables() -> ScoreTables {
    ScoreTables::default()
}

macro_rules! count_case {
    ($name:ident, $scorer:ident, $count:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!($scorer($count, &tables()), $expected);
        }
    };
}

count_case!(chimera_zero, score_chimera_cards, 0, 0);
count_case!(chimera_one, score_chimera_cards, 1, 2);
count_case!(chimera_two, score_chimera_cards, 2, 4);
count_case!(chimera_full_set, score_chimera_cards, 3, 12);
count_case!(chimera_set_plus_one, score_chimera_cards, 4, 14);
count_case!(chimera_set_plus_two, score_chimera_cards, 5, 16);
count_case!(chimera_two_sets, score_chimera_cards, 6, 24);
count_case!(chimera_negative_clamps, score_chimera_cards, -1, 0);

count_case!(cyclops_zero, score_cyclops_cards, 0, 0);
count_case!(cyclops_solo_bonus, score_cyclops_cards, 1, 6);
count_case!(cyclops_two_linear, score_cyclops_cards, 2, 4);
count_case!(cyclops_three_linear, score_cyclops_cards, 3, 6);
count_case!(cyclops_five_linear, score_cyclops_cards, 5, 10);
count_case!(cyclops_negative_clamps, score_cyclops_cards, -5, 0);

count_case!(zombie_zero, score_zombie_cards, 0, 0);
count_case!(zombie_one, score_zombie_cards, 1, 1);
count_case!(zombie_two, score_zombie_cards, 2, 4);
count_case!(zombie_three, score_zombie_cards, 3, 9);
count_case!(zombie_four, score_zombie_cards, 4, 12);
count_case!(zombie_five, score_zombie_cards, 5, 18);
count_case!(zombie_six, score_zombie_cards, 6, 24);
count_case!(zombie_seven_saturates, score_zombie_cards, 7, 24);
count_case!(zombie_hundred_saturates, score_zombie_cards, 100, 24);
count_case!(zombie_negative_clamps, score_zombie_cards, -3, 0);

use WarriorValue::{One, Three, Two};

macro_rules! warrior_case {
    ($name:ident, $values:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(score_warrior_cards(&$values, &tables()), $expected);
        }
    };
}

warrior_case!(warrior_empty, [], 0);
warrior_case!(warrior_single, [Three], 3);
warrior_case!(warrior_incomplete_set, [One, Two], 3);
warrior_case!(warrior_one_set, [One, Two, Three], 12);
warrior_case!(warrior_two_sets, [One, One, Two, Two, Three, Three], 24);
warrior_case!(warrior_set_with_leftovers, [One, Two, Two, Two, Three], 16);
warrior_case!(
    warrior_max_hand,
    [One, One, One, Two, Two, Two, Two, Two, Two, Three, Three, Three],
    42
);

macro_rules! pile_case {
    ($name:ident, $cards:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let cards: Vec<Card> = $cards.to_vec();
            assert_eq!(score_pile(&cards, &tables()).total, $expected);
        }
    };
}

pile_case!(pile_empty, [], 0);
pile_case!(pile_single_zombie, [Card::Zombie], 1);
pile_case!(pile_single_cyclops, [Card::Cyclops], 6);
pile_case!(pile_chimera_set, [Card::Chimera, Card::Chimera, Card::Chimera], 12);
pile_case!(
    pile_warrior_set,
    [
        Card::UndeadWarrior(One),
        Card::UndeadWarrior(Two),
        Card::UndeadWarrior(Three)
    ],
    12
);
pile_case!(
    pile_mixed_small,
    [Card::Zombie, Card::Zombie, Card::Cyclops],
    10
);
pile_case!(
    pile_full_mix,
    [
        Card::Zombie,
        Card::Zombie,
        Card::Cyclops,
        Card::Chimera,
        Card::Chimera,
        Card::Chimera,
        Card::UndeadWarrior(One),
        Card::UndeadWarrior(Two),
        Card::UndeadWarrior(Three)
    ],
    34
);

#[test]
fn pile_breakdown_parts_sum_to_total() {
    let cards = [
        Card::Zombie,
        Card::Cyclops,
        Card::Cyclops,
        Card::Chimera,
        Card::UndeadWarrior(Two),
    ];
    let breakdown = score_pile(&cards, &tables());
    assert_eq!(
        breakdown.total,
        breakdown.zombies + breakdown.cyclopes + breakdown.chimeras + breakdown.warriors
    );
    assert_eq!(breakdown.zombies, 1);
    assert_eq!(breakdown.cyclopes, 4);
    assert_eq!(breakdown.chimeras, 2);
    assert_eq!(breakdown.warriors, 2);
}

#[test]
fn pile_score_is_order_independent() {
    let cards = vec![
        Card::Chimera,
        Card::UndeadWarrior(Three),
        Card::Zombie,
        Card::Cyclops,
        Card::UndeadWarrior(One),
        Card::Zombie,
        Card::UndeadWarrior(Two),
    ];
    let expected = score_pile(&cards, &tables()).total;

    // A few rotations stand in for all permutations.
    let mut rotated = cards.clone();
    for _ in 0..cards.len() {
        rotated.rotate_left(1);
        assert_eq!(score_pile(&rotated, &tables()).total, expected);
    }

    let mut reversed = cards;
    reversed.reverse();
    assert_eq!(score_pile(&reversed, &tables()).total, expected);
}

#[test]
fn rescoring_the_same_pile_is_idempotent() {
    let cards = vec![Card::Zombie, Card::Chimera, Card::UndeadWarrior(One)];
    let first = score_pile(&cards, &tables());
    let second = score_pile(&cards, &tables());
    assert_eq!(first, second);
}

#[test]
fn config_overrides_reach_the_tables() {
    let mut config = GameConfig::default();
    config.cyclops.solo_bonus = 10;
    config.chimera.per_set = 30;
    config.zombie = ZombieRule {
        table: vec![0, 5, 7],
    };
    let tables = ScoreTables::from_config(&config);

    assert_eq!(score_cyclops_cards(1, &tables), 10);
    assert_eq!(score_chimera_cards(3, &tables), 30);
    assert_eq!(score_zombie_cards(1, &tables), 5);
    assert_eq!(score_zombie_cards(9, &tables), 7);
}

#[test]
fn empty_zombie_table_falls_back_to_stock_progression() {
    let mut config = GameConfig::default();
    config.zombie = ZombieRule { table: Vec::new() };
    let tables = ScoreTables::from_config(&config);
    assert_eq!(score_zombie_cards(6, &tables), 24);
}
