pub mod error;
pub mod quadtree;

pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Child, ChildId, ChildRef, MutationStats, QuadTree, TreeConstraint};
