use crate::grid::{GridPoint, NULL_POINT};
use crate::object::{ObjectId, ObjectRef, PeerId};
use quadtree::{Child, ChildId};
use std::fmt;
use std::ops::Deref;

/// Links an indexed point to the simulation object it stands for.
///
/// The object is absent for placeholders: contacts reported by a remote peer
/// that have not been resolved locally yet.
pub struct ObjectWrapper {
    id: ObjectId,
    path: String,
    object: Option<ObjectRef>,
    point: GridPoint,
}

impl ObjectWrapper {
    pub(crate) fn new(id: ObjectId, path: String, object: Option<ObjectRef>) -> Self {
        Self {
            id,
            path,
            object,
            point: NULL_POINT,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn object(&self) -> Option<&ObjectRef> {
        self.object.as_ref()
    }

    pub fn is_placeholder(&self) -> bool {
        self.object.is_none()
    }

    /// The point the wrapper is currently indexed at.
    pub fn point(&self) -> GridPoint {
        self.point
    }

    pub fn is_indexed(&self) -> bool {
        self.point != NULL_POINT
    }

    pub fn category(&self) -> Option<u32> {
        self.object.as_ref().map(|object| object.category())
    }

    pub(crate) fn set_point(&mut self, point: GridPoint) {
        self.point = point;
    }

    pub(crate) fn set_object(&mut self, object: ObjectRef) {
        if self.path.is_empty() {
            self.path = object.path().to_string();
        }
        self.object = Some(object);
    }
}

impl fmt::Debug for ObjectWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectWrapper")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("placeholder", &self.is_placeholder())
            .field("point", &self.point)
            .finish()
    }
}

#[derive(Debug)]
pub struct UnitWrapper {
    base: ObjectWrapper,
    owner: PeerId,
    human: bool,
    local: bool,
}

impl UnitWrapper {
    pub(crate) fn new(base: ObjectWrapper, owner: PeerId, human: bool, local: bool) -> Self {
        Self {
            base,
            owner,
            human,
            local,
        }
    }

    pub fn owner(&self) -> PeerId {
        self.owner
    }

    /// Locality comes from the object, or from the owner tag for an unbound
    /// contact; a unit is remote exactly when it is not local.
    pub fn is_remote(&self) -> bool {
        !self.local
    }

    pub fn is_human(&self) -> bool {
        self.human
    }

    pub fn is_local(&self) -> bool {
        self.local
    }

    pub(crate) fn set_human(&mut self, human: bool) {
        self.human = human;
    }

    pub(crate) fn set_local(&mut self, local: bool) {
        self.local = local;
    }

    pub(crate) fn base_mut(&mut self) -> &mut ObjectWrapper {
        &mut self.base
    }

    pub(crate) fn matches(
        &self,
        human: Option<bool>,
        local: Option<bool>,
        category: Option<u32>,
    ) -> bool {
        human.map_or(true, |h| h == self.human)
            && local.map_or(true, |l| l == self.local)
            && category.map_or(true, |c| self.base.category() == Some(c))
    }
}

impl Deref for UnitWrapper {
    type Target = ObjectWrapper;

    fn deref(&self) -> &ObjectWrapper {
        &self.base
    }
}

impl Child for UnitWrapper {
    fn id(&self) -> ChildId {
        self.base.id
    }

    fn point(&self) -> GridPoint {
        self.base.point
    }
}

/// A feature that never moves; indexed once when added.
#[derive(Debug)]
pub struct StaticWrapper {
    base: ObjectWrapper,
}

impl StaticWrapper {
    pub(crate) fn new(base: ObjectWrapper) -> Self {
        Self { base }
    }
}

impl Deref for StaticWrapper {
    type Target = ObjectWrapper;

    fn deref(&self) -> &ObjectWrapper {
        &self.base
    }
}

impl Child for StaticWrapper {
    fn id(&self) -> ChildId {
        self.base.id
    }

    fn point(&self) -> GridPoint {
        self.base.point
    }
}
