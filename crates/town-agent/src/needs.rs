//! Needs and skills: fixed-size arrays clamped on every write.

use town_core::{Need, Skill};

/// Upper bound of every need and skill value.
pub const MAX_LEVEL: f32 = 100.0;

/// Six needs, each in `[0, 100]`.  100 is fully satisfied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Needs([f32; Need::COUNT]);

impl Default for Needs {
    fn default() -> Self {
        Needs([MAX_LEVEL; Need::COUNT])
    }
}

impl Needs {
    /// All needs at `value` (clamped).
    pub fn uniform(value: f32) -> Self {
        Needs([value.clamp(0.0, MAX_LEVEL); Need::COUNT])
    }

    #[inline]
    pub fn get(&self, need: Need) -> f32 {
        self.0[need.index()]
    }

    /// Set and clamp.  NaN is ignored.
    #[inline]
    pub fn set(&mut self, need: Need, value: f32) {
        if !value.is_nan() {
            self.0[need.index()] = value.clamp(0.0, MAX_LEVEL);
        }
    }

    /// Add `delta` (may be negative) and clamp.
    #[inline]
    pub fn add(&mut self, need: Need, delta: f32) {
        let v = self.get(need) + delta;
        self.set(need, v);
    }

    pub fn average(&self) -> f32 {
        self.0.iter().sum::<f32>() / Need::COUNT as f32
    }

    /// `(need, value)` pairs in `Need::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Need, f32)> + '_ {
        Need::ALL.iter().map(|&n| (n, self.get(n)))
    }

    /// Clamp every value; used after overlaying restored data.
    pub fn clamp_all(&mut self) {
        for v in &mut self.0 {
            *v = if v.is_finite() { v.clamp(0.0, MAX_LEVEL) } else { MAX_LEVEL };
        }
    }
}

/// Eight skills, each in `[0, 100]`.  Only ever increased by practice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skills([f32; Skill::COUNT]);

impl Skills {
    #[inline]
    pub fn get(&self, skill: Skill) -> f32 {
        self.0[skill.index()]
    }

    #[inline]
    pub fn set(&mut self, skill: Skill, value: f32) {
        if !value.is_nan() {
            self.0[skill.index()] = value.clamp(0.0, MAX_LEVEL);
        }
    }

    /// Practice: add a non-negative gain and clamp at 100.
    #[inline]
    pub fn gain(&mut self, skill: Skill, amount: f32) {
        let v = self.get(skill) + amount.max(0.0);
        self.set(skill, v);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skill, f32)> + '_ {
        Skill::ALL.iter().map(|&s| (s, self.get(s)))
    }

    pub fn clamp_all(&mut self) {
        for v in &mut self.0 {
            *v = if v.is_finite() { v.clamp(0.0, MAX_LEVEL) } else { 0.0 };
        }
    }
}
