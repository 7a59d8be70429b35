//! Run settings and numeric tuning.
//!
//! Every balance number the engine uses lives in [`Tuning`] so that a TOML
//! file can override any subset of them (`town_sim::config::load_config`).
//! `Default` carries the shipped balance.

use crate::{MapBounds, Need, Vec2};

// ── NeedRates ─────────────────────────────────────────────────────────────────

/// One `f32` per need.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeedRates {
    pub hunger:  f32,
    pub energy:  f32,
    pub fun:     f32,
    pub social:  f32,
    pub bladder: f32,
    pub hygiene: f32,
}

impl NeedRates {
    #[inline]
    pub fn get(&self, need: Need) -> f32 {
        match need {
            Need::Hunger  => self.hunger,
            Need::Energy  => self.energy,
            Need::Fun     => self.fun,
            Need::Social  => self.social,
            Need::Bladder => self.bladder,
            Need::Hygiene => self.hygiene,
        }
    }
}

// ── PK weights ────────────────────────────────────────────────────────────────

/// Weights of the promotion contest score:
/// `performance * performance_w + mood * mood_w + key_skill * skill_w`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PkWeights {
    pub performance: f32,
    pub mood:        f32,
    pub skill:       f32,
}

impl PkWeights {
    pub const fn new(performance: f32, mood: f32, skill: f32) -> Self {
        Self { performance, mood, skill }
    }
}

/// PK weights per company category.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct PkTable {
    pub internet:   PkWeights,
    pub design:     PkWeights,
    pub business:   PkWeights,
    pub store:      PkWeights,
    pub restaurant: PkWeights,
}

impl Default for PkTable {
    fn default() -> Self {
        Self {
            internet:   PkWeights::new(1.0, 0.5, 2.0),
            design:     PkWeights::new(1.0, 0.8, 2.5),
            business:   PkWeights::new(1.2, 1.0, 1.0),
            store:      PkWeights::new(1.0, 1.2, 0.5),
            restaurant: PkWeights::new(1.0, 0.6, 2.0),
        }
    }
}

// ── Side-hustle pay ───────────────────────────────────────────────────────────

/// Payout of one completed side-hustle session: `base + per_skill * skill`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayRate {
    pub base:      f32,
    pub per_skill: f32,
}

impl PayRate {
    pub const fn new(base: f32, per_skill: f32) -> Self {
        Self { base, per_skill }
    }

    /// Whole-dollar payout for `skill`.
    #[inline]
    pub fn pay(&self, skill: f32) -> i64 {
        (self.base + self.per_skill * skill).floor() as i64
    }
}

// ── Tuning ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Tuning {
    // ── Needs ─────────────────────────────────────────────────────────────
    /// Per-need decay before metabolism scaling.
    pub base_decay:          NeedRates,
    /// `f = decay_factor * dt` is the per-frame decay step.
    pub decay_factor:        f32,
    /// Restore step `r = restore_factor * f`.
    pub restore_factor:      f32,
    /// Minutes a need-restoring interaction takes from 0 to 100.
    pub restore_minutes:     NeedRates,
    /// Floor for computed need-restoring durations.
    pub min_restore_minutes: f32,
    /// Below this, a working agent's non-energy needs are topped up.
    pub work_refill_floor:   f32,

    // ── Decision ──────────────────────────────────────────────────────────
    /// Survival needs below this skip scoring entirely.
    pub critical_threshold:  f32,
    /// Chosen scores at or below this fall back to wandering.
    pub action_threshold:    f32,
    /// Choose uniformly among this many best-scored entries.
    pub top_choices:         usize,
    /// Choose uniformly among this many nearest candidate objects.
    pub nearest_choices:     usize,
    pub wander_minutes:      f32,

    // ── Movement & proximity ──────────────────────────────────────────────
    pub object_stop_distance:  f32,
    pub partner_stop_distance: f32,
    /// Offset between a partner and the point an approaching agent walks to.
    pub social_distance:       f32,
    /// A conversation only starts if the partner is within this radius.
    pub talk_radius:           f32,
    /// Bystanders within this radius of a romantic act may get jealous.
    pub jealousy_radius:       f32,
    /// Speech bubbles stay up this many frames.
    pub bubble_frames:         u32,

    // ── Work ──────────────────────────────────────────────────────────────
    /// Commutes longer than this teleport the agent to its desk.
    pub commute_cap_minutes:   f32,
    /// A working agent below this energy leaves early.
    pub early_leave_energy:    f32,
    /// Where agents without a free desk stand to work.
    pub standing_work_spot:    Vec2,
    pub promotion_threshold:   f32,
    pub promotion_bonus:       i64,
    pub pk:                    PkTable,

    // ── Money ─────────────────────────────────────────────────────────────
    pub broke_threshold:       i64,
    pub rich_threshold:        i64,
    pub fishing_pay:           PayRate,
    /// Skill is the better of logic and creativity.
    pub computer_pay:          PayRate,
    pub garden_pay:            PayRate,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_decay: NeedRates {
                hunger:  1.0,
                energy:  0.8,
                fun:     0.8,
                social:  0.8,
                bladder: 0.8,
                hygiene: 0.5,
            },
            decay_factor:        0.0008,
            restore_factor:      2.5,
            restore_minutes: NeedRates {
                hunger:  60.0,
                energy:  480.0,
                fun:     90.0,
                social:  40.0,
                bladder: 10.0,
                hygiene: 20.0,
            },
            min_restore_minutes: 10.0,
            work_refill_floor:   30.0,

            critical_threshold:  40.0,
            action_threshold:    20.0,
            top_choices:         3,
            nearest_choices:     3,
            wander_minutes:      30.0,

            object_stop_distance:  8.0,
            partner_stop_distance: 40.0,
            social_distance:       40.0,
            talk_radius:           80.0,
            jealousy_radius:       150.0,
            bubble_frames:         150,

            commute_cap_minutes:   90.0,
            early_leave_energy:    10.0,
            standing_work_spot:    Vec2::new(800.0, 350.0),
            promotion_threshold:   300.0,
            promotion_bonus:       500,
            pk:                    PkTable::default(),

            broke_threshold:       100,
            rich_threshold:        10_000,
            fishing_pay:           PayRate::new(20.0, 3.0),
            computer_pay:          PayRate::new(30.0, 4.0),
            garden_pay:            PayRate::new(15.0, 2.0),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// `SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed:           u64,
    /// Residents spawned when no save is restored.
    pub initial_agents: usize,
    /// Speed multiplier at start (0 = paused).
    pub start_speed:    u32,
    pub map:            MapBounds,
    pub tuning:         Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:           42,
            initial_agents: 6,
            start_speed:    2,
            map:            MapBounds::default(),
            tuning:         Tuning::default(),
        }
    }
}
