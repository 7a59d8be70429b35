//! Money and the daily spending budget.

use crate::{BuffKind, Buffs, Personality};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wallet {
    pub money:         i64,
    /// What the agent is willing to spend today; purchases reduce it and it
    /// is recomputed at day rollover.
    pub daily_budget:  i64,
    pub daily_expense: i64,
    pub daily_income:  i64,
}

impl Wallet {
    pub fn new(money: i64) -> Self {
        Self { money, ..Self::default() }
    }

    /// Pay `amount` for something; counts against today's budget.
    pub fn spend(&mut self, amount: i64) {
        self.money -= amount;
        self.daily_expense += amount;
        self.daily_budget -= amount;
    }

    pub fn earn(&mut self, amount: i64) {
        self.money += amount;
        self.daily_income += amount;
    }

    /// Recompute today's budget from wealth, personality, and buffs.
    ///
    /// ```text
    /// safety     = 0.2, then 0.4 if earth or judging, then 0.1 if fire or perceiving
    /// propensity = 0.2, 0.5 with rich_feel, 0.4 with stressed (last wins)
    /// budget     = floor(max(0, money - money * safety) * propensity)
    /// ```
    pub fn recompute_budget(&mut self, p: &Personality, buffs: &Buffs) {
        use crate::Element;

        let judging = p.temperament.judging;
        let mut safety = 0.2;
        if p.element == Element::Earth || judging {
            safety = 0.4;
        }
        if p.element == Element::Fire || !judging {
            safety = 0.1;
        }

        let mut propensity = 0.2;
        if buffs.has(BuffKind::RichFeel) {
            propensity = 0.5;
        }
        if buffs.has(BuffKind::Stressed) {
            propensity = 0.4;
        }

        let money = self.money as f64;
        let disposable = (money - money * safety).max(0.0);
        self.daily_budget = (disposable * propensity).floor() as i64;
    }

    /// Day rollover: clear the per-day counters.
    pub fn reset_daily(&mut self) {
        self.daily_expense = 0;
        self.daily_income = 0;
    }
}
