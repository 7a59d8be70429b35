//! Decorative particles.  Nothing in the simulation reads them back.

use crate::Vec2;

/// Life lost per rendered frame.
const LIFE_DECAY_PER_FRAME: f32 = 0.02;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos:  Vec2,
    /// 1.0 when spawned; removed once it reaches 0.
    pub life: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Effects {
    particles: Vec<Particle>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_heart(&mut self, pos: Vec2) {
        self.particles.push(Particle { pos, life: 1.0 });
    }

    /// Age every particle by one frame and drop the expired ones.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.life -= LIFE_DECAY_PER_FRAME;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
