//! Enemy population control: spawn timing, level-scaled caps, and the
//! weighted kind draw.
//!
//! The base stat table is deliberately mutable: `set_difficulty` escalates
//! health/damage/score *in place*, so repeated calls compound. That matches
//! the original tuning and is kept as-is (see DESIGN.md).

use convoy_core::constants::*;
use convoy_core::enums::EnemyKind;

/// One row of the spawn table: an enemy kind plus its current base stats.
/// Stats here drift upward as difficulty escalates; collision radius and
/// scale always come from `EnemyKind::base_stats`.
#[derive(Debug, Clone, Copy)]
pub struct TypeEntry {
    pub kind: EnemyKind,
    /// Level-independent baseline probability weight.
    pub base_probability: f64,
    pub health: f64,
    pub contact_damage: f64,
    pub score_value: u64,
}

/// Spawn scheduling and difficulty state for the enemy population.
#[derive(Debug, Clone)]
pub struct EnemySpawner {
    pub level: u32,
    pub spawn_timer: f64,
    pub spawn_interval: f64,
    pub max_enemies: usize,
    pub table: [TypeEntry; 3],
}

impl Default for EnemySpawner {
    fn default() -> Self {
        let mut spawner = Self {
            level: 1,
            spawn_timer: 0.0,
            spawn_interval: BASE_SPAWN_INTERVAL_SECS,
            max_enemies: BASE_MAX_ENEMIES,
            table: base_table(),
        };
        spawner.reset(1);
        spawner
    }
}

/// Fresh spawn table with un-escalated stats.
fn base_table() -> [TypeEntry; 3] {
    [
        TypeEntry {
            kind: EnemyKind::Basic,
            base_probability: 0.7,
            health: EnemyKind::Basic.base_stats().health,
            contact_damage: EnemyKind::Basic.base_stats().contact_damage,
            score_value: EnemyKind::Basic.base_stats().score_value,
        },
        TypeEntry {
            kind: EnemyKind::Fast,
            base_probability: 0.2,
            health: EnemyKind::Fast.base_stats().health,
            contact_damage: EnemyKind::Fast.base_stats().contact_damage,
            score_value: EnemyKind::Fast.base_stats().score_value,
        },
        TypeEntry {
            kind: EnemyKind::Tank,
            base_probability: 0.1,
            health: EnemyKind::Tank.base_stats().health,
            contact_damage: EnemyKind::Tank.base_stats().contact_damage,
            score_value: EnemyKind::Tank.base_stats().score_value,
        },
    ]
}

impl EnemySpawner {
    /// Rebuild for a fresh session at the given level. Unlike
    /// `set_difficulty`, this discards any accumulated escalation.
    pub fn reset(&mut self, level: u32) {
        self.level = level;
        self.spawn_timer = 0.0;
        self.table = base_table();
        self.max_enemies = BASE_MAX_ENEMIES + ENEMIES_PER_LEVEL * level as usize;
        self.spawn_interval = (BASE_SPAWN_INTERVAL_SECS
            - SPAWN_INTERVAL_STEP_SECS * level as f64)
            .max(MIN_SPAWN_INTERVAL_SECS);
    }

    /// Apply a difficulty level: recompute cap and interval, and escalate
    /// the stat table in place. Escalation compounds across calls.
    pub fn set_difficulty(&mut self, level: u32) {
        self.level = level;
        self.max_enemies = BASE_MAX_ENEMIES + ENEMIES_PER_LEVEL * level as usize;
        self.spawn_interval = (BASE_SPAWN_INTERVAL_SECS
            - SPAWN_INTERVAL_STEP_SECS * level as f64)
            .max(MIN_SPAWN_INTERVAL_SECS);

        for entry in &mut self.table {
            if level % HEALTH_ESCALATION_MODULUS == 0 {
                entry.health = (entry.health * ESCALATION_FACTOR).ceil();
            }
            if level % DAMAGE_ESCALATION_MODULUS == 0 {
                entry.contact_damage = (entry.contact_damage * ESCALATION_FACTOR).ceil();
            }
            entry.score_value = (entry.score_value as f64
                * (1.0 + SCORE_SCALE_PER_LEVEL * level as f64))
                .floor() as u64;
        }

        log::info!("spawner difficulty set to level {level}");
    }

    /// Level-adjusted kind probabilities in table order (basic, fast, tank).
    /// Re-derived from the level on every call, never cached. Normalized to
    /// sum to 1 before use.
    pub fn kind_probabilities(&self) -> [f64; 3] {
        let level = self.level as f64;
        let [basic_base, fast_base, tank_base] =
            [0, 1, 2].map(|i| self.table[i].base_probability);

        let tank = (tank_base + TANK_PROBABILITY_PER_LEVEL * level).min(TANK_PROBABILITY_CAP);
        let fast = (fast_base + FAST_PROBABILITY_PER_LEVEL * level).min(FAST_PROBABILITY_CAP);
        // Basic shrinks from its own baseline remainder, floored.
        let basic = (1.0 - basic_base - BASIC_PROBABILITY_PER_LEVEL * level)
            .max(BASIC_PROBABILITY_FLOOR);

        let total = basic + fast + tank;
        [basic / total, fast / total, tank / total]
    }

    /// Pick a table entry from a uniform [0,1) roll via the cumulative
    /// distribution of `kind_probabilities`. Falls back to the first entry
    /// if accumulation never crosses the roll (float edge).
    pub fn select_kind(&self, roll: f64) -> TypeEntry {
        let probabilities = self.kind_probabilities();
        let mut cumulative = 0.0;
        for (entry, p) in self.table.iter().zip(probabilities) {
            cumulative += p;
            if roll <= cumulative {
                return *entry;
            }
        }
        self.table[0]
    }

    /// Find the table entry for a kind.
    pub fn entry(&self, kind: EnemyKind) -> TypeEntry {
        self.table
            .iter()
            .copied()
            .find(|e| e.kind == kind)
            .unwrap_or(self.table[0])
    }
}
