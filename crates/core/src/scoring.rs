use crate::{Card, ChimeraRule, CyclopsRule, GameConfig, PileCounts, WarriorRule, WarriorValue};

/// Scoring tables resolved from config. Built once per run; an empty
/// zombie table falls back to the stock progression so lookups stay total.
#[derive(Debug, Clone)]
pub struct ScoreTables {
    chimera: ChimeraRule,
    cyclops: CyclopsRule,
    zombie_table: Vec<i64>,
    warrior: WarriorRule,
}

impl ScoreTables {
    pub fn from_config(config: &GameConfig) -> Self {
        let zombie_table = if config.zombie.table.is_empty() {
            crate::ZombieRule::default().table
        } else {
            config.zombie.table.clone()
        };
        Self {
            chimera: config.chimera,
            cyclops: config.cyclops,
            zombie_table,
            warrior: config.warrior,
        }
    }

    pub fn zombie_cap(&self) -> i64 {
        (self.zombie_table.len() - 1) as i64
    }
}

impl Default for ScoreTables {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Every complete group of three earns the set value; leftovers earn the
/// per-card value.
pub fn score_chimera_cards(count: i64, tables: &ScoreTables) -> i64 {
    if count <= 0 {
        return 0;
    }
    let sets = count / 3;
    let remaining = count % 3;
    sets * tables.chimera.per_set + remaining * tables.chimera.per_card
}

/// Exactly one cyclops earns the solo bonus; two or more score linearly at
/// the per-card rate, which is deliberately worse per card than the bonus.
pub fn score_cyclops_cards(count: i64, tables: &ScoreTables) -> i64 {
    if count == 1 {
        return tables.cyclops.solo_bonus;
    }
    if count >= 2 {
        return count * tables.cyclops.per_card;
    }
    0
}

/// Table lookup with saturation: counts past the last index stay at the
/// final entry.
pub fn score_zombie_cards(count: i64, tables: &ScoreTables) -> i64 {
    let index = count.clamp(0, tables.zombie_cap()) as usize;
    tables.zombie_table[index]
}

/// Base sum of face values, plus the set bonus once per complete
/// one-two-three set. Complete sets are the minimum count across the three
/// values; leftovers keep their base value only.
pub fn score_warrior_cards(values: &[WarriorValue], tables: &ScoreTables) -> i64 {
    let base: i64 = values.iter().map(|value| value.points()).sum();
    let sets = WarriorValue::ALL
        .iter()
        .map(|wanted| values.iter().filter(|value| *value == wanted).count() as i64)
        .min()
        .unwrap_or(0);
    base + sets * tables.warrior.set_bonus
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub zombies: i64,
    pub cyclopes: i64,
    pub chimeras: i64,
    pub warriors: i64,
    pub total: i64,
}

/// Scores a whole pile: partition by family, delegate, sum. Order of the
/// input never matters.
pub fn score_pile(cards: &[Card], tables: &ScoreTables) -> ScoreBreakdown {
    let counts = PileCounts::tally(cards);
    let zombies = score_zombie_cards(counts.zombies, tables);
    let cyclopes = score_cyclops_cards(counts.cyclopes, tables);
    let chimeras = score_chimera_cards(counts.chimeras, tables);
    let warriors = score_warrior_cards(&counts.warriors, tables);
    ScoreBreakdown {
        zombies,
        cyclopes,
        chimeras,
        warriors,
        total: zombies + cyclopes + chimeras + warriors,
    }
}
