//! Reward formula constants
//!
//! All payout numbers are collected here so the formulas in
//! `inhabitant` read as named quantities rather than magic values.

/// Flat part of every inhabitant's base reward
pub const BASE_REWARD_FLAT: i32 = 5;

/// Emeralds of base reward earned per level
pub const BASE_REWARD_PER_LEVEL: i32 = 2;

/// Worker bonus as a fraction of base reward
pub const WORKER_BONUS_RATE: f64 = 0.05;

/// Mage bonus as a fraction of base reward
pub const MAGE_BONUS_RATE: f64 = 0.12;

/// Warrior combat-pay fraction of base reward
pub const WARRIOR_BONUS_RATE: f64 = 0.10;

/// Emeralds per mob a warrior has killed
pub const EMERALDS_PER_MOB_KILL: i32 = 2;

/// Emeralds per boss a warrior has killed
pub const EMERALDS_PER_BOSS_KILL: i32 = 50;

/// Emeralds a builder earns per finished house
pub const EMERALDS_PER_HOUSE: i32 = 3;

/// House count above which a builder's payout is multiplied
pub const LARGE_PORTFOLIO_THRESHOLD: i32 = 10;

/// Multiplier applied past the portfolio threshold.
///
/// For `reward()` it scales the whole base-plus-houses sum; for `bonus()`
/// it scales only the per-house pay. The two are intentionally not
/// composable, see `Inhabitant::reward`.
pub const LARGE_PORTFOLIO_MULTIPLIER: f64 = 1.2;
