//! Furniture and room geometry.

use town_core::{AgentId, ObjectId, Vec2};

use crate::Utility;

/// Axis-aligned rectangle in map pixels; `(x, y)` is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// An interactable piece of furniture.  Position and attributes are fixed
/// for the lifetime of the catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldObject {
    pub id:          ObjectId,
    pub rect:        Rect,
    /// Display label.  Also used for job desk matching and seat detection.
    pub label:       String,
    pub utility:     Utility,
    /// Several agents may use it at once (lake shore, cinema hall, kitchen).
    pub multi_user:  bool,
    /// Price charged when an interaction starts.
    pub cost:        Option<i64>,
    /// Permanent exclusive owner.  Distinct from transient occupancy.
    pub reserved_by: Option<AgentId>,
}

impl WorldObject {
    /// Where agents stand to use the object.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.rect.center()
    }

    /// Sofas and benches: seating with an energy trickle and phone breaks.
    pub fn is_seat(&self) -> bool {
        let label = self.label.to_lowercase();
        label.contains("sofa") || label.contains("bench")
    }

    /// `true` if `agent` may use the object as far as reservation goes.
    #[inline]
    pub fn reservation_allows(&self, agent: AgentId) -> bool {
        self.reserved_by.is_none_or(|owner| owner == agent)
    }

    #[inline]
    pub fn affordable(&self, money: i64) -> bool {
        self.cost.is_none_or(|c| c <= money)
    }
}

/// A named area of the map.  Purely descriptive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub name: String,
    pub rect: Rect,
}
