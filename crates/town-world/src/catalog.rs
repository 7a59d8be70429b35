//! The object catalog and its builder.
//!
//! # Indexes
//!
//! * `by_utility` maps each [`Utility`] to the objects carrying it, in
//!   catalog order.  Used for "is there any fishing spot at all" and desk
//!   counting without scanning the whole list.
//! * An R-tree (via `rstar`) over object anchor points answers "nearest few
//!   objects that pass this filter" for target selection.  The nearest-
//!   neighbour iterator yields in ascending distance, so the filter is
//!   applied lazily and the search stops after `k` hits.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use town_core::{AgentId, ObjectId, Vec2};

use crate::{Rect, Room, Utility, WorldError, WorldObject, WorldResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct ObjectEntry {
    point: [f32; 2],
    id:    ObjectId,
}

impl RTreeObject for ObjectEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ObjectEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── ObjectCatalog ─────────────────────────────────────────────────────────────

/// Immutable list of furniture plus room geometry.
///
/// Do not construct directly; use [`CatalogBuilder`] or
/// [`default_town`](crate::default_town).
pub struct ObjectCatalog {
    objects:     Vec<WorldObject>,
    rooms:       Vec<Room>,
    by_utility:  FxHashMap<Utility, Vec<ObjectId>>,
    spatial_idx: RTree<ObjectEntry>,
}

impl ObjectCatalog {
    /// A catalog with no furniture.  Every object search falls back to
    /// wandering.
    pub fn empty() -> Self {
        Self {
            objects:     Vec::new(),
            rooms:       Vec::new(),
            by_utility:  FxHashMap::default(),
            spatial_idx: RTree::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&WorldObject> {
        self.objects.get(id.index())
    }

    /// Like [`get`](Self::get) but a missing id is an error.
    pub fn object(&self, id: ObjectId) -> WorldResult<&WorldObject> {
        self.get(id).ok_or(WorldError::ObjectNotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldObject> {
        self.objects.iter()
    }

    /// Objects carrying exactly `utility`, in catalog order.
    pub fn with_utility(&self, utility: &Utility) -> &[ObjectId] {
        self.by_utility.get(utility).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// First room containing `pos`.
    pub fn room_at(&self, pos: Vec2) -> Option<&Room> {
        self.rooms.iter().find(|r| r.rect.contains(pos))
    }

    /// Up to `k` objects passing `filter`, nearest to `pos` first.
    pub fn nearest_matching<F>(&self, pos: Vec2, k: usize, mut filter: F) -> Vec<ObjectId>
    where
        F: FnMut(&WorldObject) -> bool,
    {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .filter(|e| filter(&self.objects[e.id.index()]))
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    /// Workstations whose label contains `keyword` (case-insensitive).
    pub fn work_objects<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a WorldObject> + 'a {
        let keyword = keyword.to_lowercase();
        self.with_utility(&Utility::Work)
            .iter()
            .map(|id| &self.objects[id.index()])
            .filter(move |o| o.label.to_lowercase().contains(&keyword))
    }
}

// ── CatalogBuilder ────────────────────────────────────────────────────────────

/// Collect furniture and rooms, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use town_world::{CatalogBuilder, Rect, Utility};
///
/// let mut b = CatalogBuilder::new();
/// let bed = b.add("single bed", Utility::Energy, Rect::new(20.0, 20.0, 40.0, 60.0));
/// b.add_shared("lake shore", "fishing", Rect::new(900.0, 700.0, 200.0, 80.0));
/// let catalog = b.build().unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.with_utility(&Utility::Energy), &[bed]);
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    objects: Vec<WorldObject>,
    rooms:   Vec<Room>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(
        &mut self,
        label:      &str,
        utility:    Utility,
        rect:       Rect,
        multi_user: bool,
        cost:       Option<i64>,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(WorldObject {
            id,
            rect,
            label: label.to_owned(),
            utility,
            multi_user,
            cost,
            reserved_by: None,
        });
        id
    }

    /// Add a free, single-user object.
    pub fn add(&mut self, label: &str, utility: impl Into<Utility>, rect: Rect) -> ObjectId {
        self.push(label, utility.into(), rect, false, None)
    }

    /// Add a free object several agents can use at once.
    pub fn add_shared(&mut self, label: &str, utility: impl Into<Utility>, rect: Rect) -> ObjectId {
        self.push(label, utility.into(), rect, true, None)
    }

    /// Add an object that charges `cost` when an interaction starts.
    pub fn add_priced(
        &mut self,
        label:      &str,
        utility:    impl Into<Utility>,
        rect:       Rect,
        cost:       i64,
        multi_user: bool,
    ) -> ObjectId {
        self.push(label, utility.into(), rect, multi_user, Some(cost))
    }

    /// Bind `id` permanently to `agent`.  Unknown ids are ignored.
    pub fn reserve(&mut self, id: ObjectId, agent: AgentId) -> &mut Self {
        if let Some(o) = self.objects.get_mut(id.index()) {
            o.reserved_by = Some(agent);
        }
        self
    }

    pub fn add_room(&mut self, name: &str, rect: Rect) -> &mut Self {
        self.rooms.push(Room { name: name.to_owned(), rect });
        self
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Validate and index.  Fails on negative object sizes.
    pub fn build(self) -> WorldResult<ObjectCatalog> {
        if let Some(bad) = self.objects.iter().find(|o| o.rect.w < 0.0 || o.rect.h < 0.0) {
            return Err(WorldError::InvalidRect {
                label: bad.label.clone(),
                w:     bad.rect.w,
                h:     bad.rect.h,
            });
        }

        let mut by_utility: FxHashMap<Utility, Vec<ObjectId>> = FxHashMap::default();
        for o in &self.objects {
            by_utility.entry(o.utility.clone()).or_default().push(o.id);
        }

        // Decor is never a target, so it stays out of the spatial index.
        let entries: Vec<ObjectEntry> = self
            .objects
            .iter()
            .filter(|o| o.utility.is_interactable())
            .map(|o| {
                let c = o.anchor();
                ObjectEntry { point: [c.x, c.y], id: o.id }
            })
            .collect();

        Ok(ObjectCatalog {
            objects:     self.objects,
            rooms:       self.rooms,
            by_utility,
            spatial_idx: RTree::bulk_load(entries),
        })
    }
}
