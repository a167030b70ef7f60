use super::Child;
use common::shapes::{Point, Region};
use smallvec::SmallVec;

pub type ChildId = u64;

pub(crate) const ROOT: u32 = 0;

/// The record a tree keeps for each linked child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildRef {
    pub id: ChildId,
    pub point: Point,
}

impl ChildRef {
    pub fn new(id: ChildId, point: Point) -> Self {
        Self { id, point }
    }

    #[inline(always)]
    pub(crate) fn of<C: Child + ?Sized>(child: &C) -> Self {
        Self {
            id: child.id(),
            point: child.point(),
        }
    }
}

impl Child for ChildRef {
    fn id(&self) -> ChildId {
        self.id
    }

    fn point(&self) -> Point {
        self.point
    }
}

/// Mutation counters, reset by `take_stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationStats {
    pub inserts: u64,
    pub removes: u64,
    pub splits: u64,
    pub merges: u64,
}

impl MutationStats {
    pub fn mutations(&self) -> u64 {
        self.inserts + self.removes
    }
}

// Branch holds the first of four contiguous children, in quadrant order.
pub(crate) enum Node {
    Leaf(Vec<ChildRef>),
    Branch(u32),
}

impl Node {
    pub(crate) fn empty_leaf() -> Self {
        Node::Leaf(Vec::new())
    }
}

pub(crate) type NodeStack = SmallVec<[(u32, Region, u8); 64]>;
