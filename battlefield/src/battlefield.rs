use crate::config::BattlefieldConfig;
use crate::error::{BattlefieldError, BattlefieldResult};
use crate::grid::{GridMapper, GridPoint, NULL_POINT};
use crate::object::{ObjectId, ObjectRef, PeerId, LOCAL_PEER};
use crate::wrapper::{ObjectWrapper, StaticWrapper, UnitWrapper};
use common::shapes::Region;
use fxhash::{FxHashMap, FxHashSet};
use quadtree::QuadTree;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use tracing::{debug, trace, warn};

// Ids in request order; the set filters repeats.
#[derive(Default)]
struct RemovalQueue {
    order: Vec<ObjectId>,
    queued: FxHashSet<ObjectId>,
}

/// Tracks every unit and static feature and keeps their spatial indices current.
///
/// Units are re-indexed from their live positions on each [`update`](Self::update)
/// when they have moved past the hysteresis threshold. Removal is deferred:
/// [`remove_unit`](Self::remove_unit) only queues the id, and the queue is
/// drained at the end of the next update, so removal may be requested while
/// iterating units.
///
/// Not thread-safe; one owner drives it from the simulation loop.
pub struct Battlefield {
    grid: GridMapper,
    units: BTreeMap<ObjectId, UnitWrapper>,
    statics: FxHashMap<ObjectId, StaticWrapper>,
    local_units: Vec<ObjectId>,
    human_units: Vec<ObjectId>,
    local_units_signature: u64,
    removals: RefCell<RemovalQueue>,
    moves: Vec<(ObjectId, GridPoint)>,
    dynamic_index: QuadTree,
    static_index: QuadTree,
    motion_index: QuadTree,
    elapsed: f64,
}

impl Battlefield {
    pub fn new(config: BattlefieldConfig) -> BattlefieldResult<Self> {
        config.validate()?;
        Ok(Self {
            grid: config.grid(),
            units: BTreeMap::new(),
            statics: FxHashMap::default(),
            local_units: Vec::new(),
            human_units: Vec::new(),
            local_units_signature: 0,
            removals: RefCell::new(RemovalQueue::default()),
            moves: Vec::new(),
            dynamic_index: QuadTree::new(config.dynamic_index),
            static_index: QuadTree::new(config.static_index),
            motion_index: QuadTree::new(config.motion_index),
            elapsed: 0.0,
        })
    }

    pub fn grid(&self) -> &GridMapper {
        &self.grid
    }

    pub fn add_unit(&mut self, object: ObjectRef, owner: PeerId) -> BattlefieldResult<()> {
        let id = object.id();
        self.check_new_unit(id)?;
        if object.is_static() {
            return Err(BattlefieldError::StaticUnit(id));
        }
        let human = object.is_human();
        let local = object.is_local();
        let point = self.grid.grid_point(&object.global_position());
        let base = ObjectWrapper::new(id, object.path().to_string(), Some(object));
        self.units
            .insert(id, UnitWrapper::new(base, owner, human, local));
        if local {
            self.local_units.push(id);
            self.local_units_signature += 1;
        }
        if human {
            self.human_units.push(id);
        }
        debug!(id, owner, human, local, "added unit");
        self.move_unit(id, point);
        Ok(())
    }

    /// Registers a unit known only by id, such as a remote contact not yet
    /// resolved locally. It stays unindexed until [`bind_object`](Self::bind_object).
    pub fn add_contact(&mut self, id: ObjectId, path: &str, owner: PeerId) -> BattlefieldResult<()> {
        self.check_new_unit(id)?;
        let base = ObjectWrapper::new(id, path.to_string(), None);
        self.units
            .insert(id, UnitWrapper::new(base, owner, false, owner == LOCAL_PEER));
        if owner == LOCAL_PEER {
            self.local_units.push(id);
            self.local_units_signature += 1;
        }
        debug!(id, owner, path, "added contact");
        Ok(())
    }

    /// Attaches the resolved object to a unit. The unit is indexed by the next update.
    pub fn bind_object(&mut self, id: ObjectId, object: ObjectRef) -> BattlefieldResult<()> {
        let unit = self
            .units
            .get_mut(&id)
            .ok_or(BattlefieldError::UnknownUnit(id))?;
        if object.is_static() {
            return Err(BattlefieldError::StaticUnit(id));
        }
        let human = object.is_human();
        let local = object.is_local();
        unit.base_mut().set_object(object);
        if local != unit.is_local() {
            unit.set_local(local);
            if local {
                self.local_units.push(id);
            } else {
                self.local_units.retain(|&other| other != id);
            }
            self.local_units_signature += 1;
        }
        if human && !unit.is_human() {
            unit.set_human(true);
            self.human_units.push(id);
        }
        debug!(id, "bound object to unit");
        Ok(())
    }

    fn check_new_unit(&self, id: ObjectId) -> BattlefieldResult<()> {
        if id == 0 {
            return Err(BattlefieldError::NullId);
        }
        if self.units.contains_key(&id) {
            return Err(BattlefieldError::DuplicateUnit(id));
        }
        Ok(())
    }

    /// Queues a unit for removal at the end of the next update. Queuing the
    /// same id again before then has no further effect.
    pub fn remove_unit(&self, id: ObjectId) {
        let mut removals = self.removals.borrow_mut();
        if removals.queued.insert(id) {
            removals.order.push(id);
        }
    }

    pub fn pending_removals(&self) -> usize {
        self.removals.borrow().order.len()
    }

    /// Re-indexes units that moved, then drains the removal queue.
    pub fn update(&mut self, dt: f64) {
        self.elapsed += dt;

        let mut moves = std::mem::take(&mut self.moves);
        for (&id, unit) in &self.units {
            if let Some(object) = unit.object() {
                let point = self.grid.grid_point(&object.global_position());
                if self.grid.has_moved(unit.point(), point) {
                    moves.push((id, point));
                }
            }
        }
        let moved = moves.len();
        for (id, point) in moves.drain(..) {
            self.move_unit(id, point);
        }
        self.moves = moves;

        let removed = self.remove_units();
        trace!(moved, removed, units = self.units.len(), "battlefield update");
    }

    fn move_unit(&mut self, id: ObjectId, point: GridPoint) {
        let unit = match self.units.get_mut(&id) {
            Some(unit) => unit,
            None => return,
        };
        let old = unit.point();
        if old != NULL_POINT {
            self.dynamic_index.remove(&*unit);
            self.motion_index.remove(&*unit);
        }
        unit.base_mut().set_point(point);
        if point != NULL_POINT {
            self.dynamic_index.insert(&*unit);
            self.motion_index.insert(&*unit);
        }
        trace!(id, %old, new = %point, "moved unit");
    }

    fn remove_units(&mut self) -> usize {
        let removals = std::mem::take(self.removals.get_mut());
        let mut removed = 0;
        for id in removals.order {
            let unit = match self.units.remove(&id) {
                Some(unit) => unit,
                None => {
                    warn!(id, "removal requested for unknown unit");
                    continue;
                }
            };
            if unit.is_indexed() {
                self.dynamic_index.remove(&unit);
                self.motion_index.remove(&unit);
            }
            if unit.is_local() {
                self.local_units.retain(|&other| other != id);
                self.local_units_signature += 1;
            }
            if unit.is_human() {
                self.human_units.retain(|&other| other != id);
            }
            debug!(id, "removed unit");
            removed += 1;
        }
        removed
    }

    /// Indexes a static feature at its current position. Statics are never moved.
    pub fn add_static(&mut self, object: ObjectRef) -> BattlefieldResult<()> {
        let id = object.id();
        if id == 0 {
            return Err(BattlefieldError::NullId);
        }
        if self.statics.contains_key(&id) {
            return Err(BattlefieldError::DuplicateStatic(id));
        }
        if !object.is_static() {
            return Err(BattlefieldError::MovingStatic(id));
        }
        let point = self.grid.grid_point(&object.global_position());
        let mut base = ObjectWrapper::new(id, object.path().to_string(), Some(object));
        base.set_point(point);
        let feature = StaticWrapper::new(base);
        if point != NULL_POINT {
            self.static_index.insert(&feature);
        }
        debug!(id, %point, "added static");
        self.statics.insert(id, feature);
        Ok(())
    }

    pub fn get_unit_by_id(&self, id: ObjectId) -> Option<&UnitWrapper> {
        self.units.get(&id)
    }

    pub fn get_static_by_id(&self, id: ObjectId) -> Option<&StaticWrapper> {
        self.statics.get(&id)
    }

    /// Units in id order.
    pub fn units(&self) -> impl Iterator<Item = &UnitWrapper> {
        self.units.values()
    }

    pub fn statics(&self) -> impl Iterator<Item = &StaticWrapper> {
        self.statics.values()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn static_count(&self) -> usize {
        self.statics.len()
    }

    pub fn local_units(&self) -> &[ObjectId] {
        &self.local_units
    }

    /// Changes whenever the local unit list does.
    pub fn local_units_signature(&self) -> u64 {
        self.local_units_signature
    }

    pub fn human_units(&self) -> &[ObjectId] {
        &self.human_units
    }

    /// Returns false if the unit is unknown.
    pub fn set_human_unit(&mut self, id: ObjectId, human: bool) -> bool {
        let unit = match self.units.get_mut(&id) {
            Some(unit) => unit,
            None => return false,
        };
        if unit.is_human() != human {
            unit.set_human(human);
            if human {
                self.human_units.push(id);
            } else {
                self.human_units.retain(|&other| other != id);
            }
        }
        true
    }

    /// Finds the next unit after `current` in id order matching every given
    /// filter, wrapping around once. `current` itself is never returned.
    /// With no `current` the scan starts from the first unit.
    pub fn get_next_unit(
        &self,
        current: Option<ObjectId>,
        human: Option<bool>,
        local: Option<bool>,
        category: Option<u32>,
    ) -> Option<ObjectId> {
        let matches = |unit: &&UnitWrapper| unit.matches(human, local, category);
        match current {
            Some(current) => self
                .units
                .range((Excluded(current), Unbounded))
                .chain(self.units.range(..current))
                .map(|(_, unit)| unit)
                .find(matches)
                .map(|unit| unit.id()),
            None => self.units.values().find(matches).map(|unit| unit.id()),
        }
    }

    pub fn units_in_region(&self, region: &Region, results: &mut Vec<ObjectId>) {
        self.dynamic_index.query_ids(region, results);
    }

    pub fn statics_in_region(&self, region: &Region, results: &mut Vec<ObjectId>) {
        self.static_index.query_ids(region, results);
    }

    pub fn motion_in_region(&self, region: &Region, results: &mut Vec<ObjectId>) {
        self.motion_index.query_ids(region, results);
    }

    /// Indexed units within `radius` metres of a world position, measured on
    /// their indexed points.
    pub fn units_near(&self, x: f64, y: f64, radius: f64) -> Vec<ObjectId> {
        Self::near(&self.grid, &self.dynamic_index, x, y, radius)
    }

    pub fn statics_near(&self, x: f64, y: f64, radius: f64) -> Vec<ObjectId> {
        Self::near(&self.grid, &self.static_index, x, y, radius)
    }

    fn near(grid: &GridMapper, index: &QuadTree, x: f64, y: f64, radius: f64) -> Vec<ObjectId> {
        let region = grid.world_region(x, y, radius);
        let radius_sq = radius * radius;
        let mut results = Vec::new();
        index.query_with(&region, |child| {
            let position = grid.global_position(child.point);
            let dx = position.x - x;
            let dy = position.y - y;
            if dx * dx + dy * dy <= radius_sq {
                results.push(child.id);
            }
        });
        results
    }

    pub fn dynamic_index(&self) -> &QuadTree {
        &self.dynamic_index
    }

    pub fn static_index(&self) -> &QuadTree {
        &self.static_index
    }

    pub fn motion_index(&self) -> &QuadTree {
        &self.motion_index
    }

    /// Total simulated time passed to [`update`](Self::update).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Drops every unit, static and pending removal.
    pub fn clear(&mut self) {
        debug!(
            units = self.units.len(),
            statics = self.statics.len(),
            "clearing battlefield"
        );
        if !self.local_units.is_empty() {
            self.local_units_signature += 1;
        }
        self.units.clear();
        self.statics.clear();
        self.local_units.clear();
        self.human_units.clear();
        *self.removals.get_mut() = RemovalQueue::default();
        self.dynamic_index.clear();
        self.static_index.clear();
        self.motion_index.clear();
    }
}
