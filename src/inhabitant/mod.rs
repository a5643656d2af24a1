//! Village inhabitants and their reward computation
//!
//! Every inhabitant shares the same base reward formula; each role layers
//! its own bonus on top. Rewards are whole emeralds, fractional results
//! truncate toward zero.

pub mod role;

pub use role::Role;

use std::fmt;

use crate::core::config;

/// A village member with a role and reward-earning behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inhabitant {
    pub name: String,
    pub level: i32,
    pub health: i32,
    role: Role,
}

impl Inhabitant {
    pub fn worker(name: impl Into<String>, level: i32, health: i32) -> Self {
        Self {
            name: name.into(),
            level,
            health,
            role: Role::Worker,
        }
    }

    pub fn builder(name: impl Into<String>, level: i32, health: i32, houses: i32) -> Self {
        Self {
            name: name.into(),
            level,
            health,
            role: Role::Builder { houses },
        }
    }

    pub fn warrior(
        name: impl Into<String>,
        level: i32,
        health: i32,
        mob_kills: i32,
        boss_kills: i32,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            health,
            role: Role::Warrior {
                mob_kills,
                boss_kills,
            },
        }
    }

    pub fn mage(name: impl Into<String>, level: i32, health: i32) -> Self {
        Self {
            name: name.into(),
            level,
            health,
            role: Role::Mage,
        }
    }

    /// The role this inhabitant was created with. Immutable afterwards.
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Shared reward foundation every role builds on: `5 + level * 2`.
    pub fn base_reward(&self) -> i32 {
        config::BASE_REWARD_FLAT + self.level * config::BASE_REWARD_PER_LEVEL
    }

    /// Role-specific increment over the base reward.
    ///
    /// This is the quantity that combines across inhabitants, see
    /// [`combined_bonus`].
    pub fn bonus(&self) -> i32 {
        let base = self.base_reward();
        match self.role {
            Role::Worker => scale(base, config::WORKER_BONUS_RATE),
            Role::Builder { houses } => {
                let house_pay = houses * config::EMERALDS_PER_HOUSE;
                if houses > config::LARGE_PORTFOLIO_THRESHOLD {
                    scale(house_pay, config::LARGE_PORTFOLIO_MULTIPLIER)
                } else {
                    house_pay
                }
            }
            Role::Warrior {
                mob_kills,
                boss_kills,
            } => {
                scale(base, config::WARRIOR_BONUS_RATE)
                    + config::EMERALDS_PER_MOB_KILL * mob_kills
                    + config::EMERALDS_PER_BOSS_KILL * boss_kills
            }
            Role::Mage => scale(base, config::MAGE_BONUS_RATE),
        }
    }

    /// Total emerald reward for this inhabitant.
    ///
    /// For builders past the portfolio threshold the multiplier applies to
    /// the whole base-plus-houses sum, while `bonus()` multiplies only the
    /// per-house pay. The total is therefore not `base_reward() + bonus()`
    /// in that case; the two formulas are kept separate on purpose.
    pub fn reward(&self) -> i32 {
        match self.role {
            Role::Builder { houses } => {
                let raw = self.base_reward() + houses * config::EMERALDS_PER_HOUSE;
                if houses > config::LARGE_PORTFOLIO_THRESHOLD {
                    scale(raw, config::LARGE_PORTFOLIO_MULTIPLIER)
                } else {
                    raw
                }
            }
            _ => self.base_reward() + self.bonus(),
        }
    }

    /// Reward with a guaranteed floor: `max(reward(), minimum)`.
    pub fn reward_at_least(&self, minimum: i32) -> i32 {
        self.reward().max(minimum)
    }

    /// One-line report of what this inhabitant is doing right now.
    pub fn work(&self) -> String {
        match self.role {
            Role::Worker => format!("{} is placing blocks...", self.name),
            Role::Builder { .. } => format!("{} is directing construction...", self.name),
            Role::Warrior { .. } => format!("{} is fighting enemies...", self.name),
            Role::Mage => format!("{} is brewing potions...", self.name),
        }
    }
}

impl fmt::Display for Inhabitant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Role: {}, Level: {}, Health: {}",
            self.name,
            self.role.name(),
            self.level,
            self.health
        )
    }
}

/// Value of pairing two inhabitants up on a job: the sum of their bonuses
/// (not their full rewards). Commutative, no side effects.
pub fn combined_bonus(a: &Inhabitant, b: &Inhabitant) -> i32 {
    a.bonus() + b.bonus()
}

/// Integer scaling with truncation toward zero
fn scale(amount: i32, rate: f64) -> i32 {
    (f64::from(amount) * rate) as i32
}
