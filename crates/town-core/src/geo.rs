//! Map-space geometry.
//!
//! Positions are canvas pixels (`f32`), origin at the top-left corner.

/// A point (or displacement) in map pixels.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in pixels.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Squared distance, for comparisons.
    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// The point `radius` pixels away from `self` in direction `angle` (radians).
    #[inline]
    pub fn offset(self, angle: f32, radius: f32) -> Vec2 {
        Vec2::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── MapBounds ─────────────────────────────────────────────────────────────────

/// Traversable extent of the town map.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct MapBounds {
    pub width:  f32,
    pub height: f32,
    /// Agents are kept this many pixels inside every edge.
    pub margin: f32,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self { width: 1400.0, height: 1000.0, margin: 10.0 }
    }
}

impl MapBounds {
    /// Clamp `p` into `[margin, width - margin] × [margin, height - margin]`.
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.margin, self.width - self.margin),
            p.y.clamp(self.margin, self.height - self.margin),
        )
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.margin
            && p.x <= self.width - self.margin
            && p.y >= self.margin
            && p.y <= self.height - self.margin
    }
}
