//! Fixed-point point quadtree.
//!
//! The tree never owns the objects it indexes. It links `(id, point)` records
//! taken from a [`Child`] at insertion time; the caller keeps the object and
//! must go through [`QuadTree::remove`] (or [`QuadTree::relocate`]) before its
//! point changes.

use common::shapes::{Point, Region};

mod config;
mod core;
mod dump;
mod maintenance;
mod query_rect;
mod types;

pub use config::TreeConstraint;
pub use types::{ChildId, ChildRef, MutationStats};

use types::{Node, NodeStack};

/// Anything that can be linked into a [`QuadTree`].
///
/// `id` must be unique among the children present in a tree at the same time.
pub trait Child {
    fn id(&self) -> ChildId;
    fn point(&self) -> Point;
}

pub struct QuadTree {
    nodes: Vec<Node>,
    free_blocks: Vec<u32>,
    constraint: TreeConstraint,
    root_region: Region,
    child_count: usize,
    stats: MutationStats,
}
