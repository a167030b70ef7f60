use crate::error::{QuadtreeError, QuadtreeResult};

/// Shape limits for a tree, fixed for its lifetime.
///
/// Each level of the tree consumes one bit of the 32-bit coordinate, so
/// `max_depth` cannot exceed 32. A leaf at `max_depth` keeps accepting
/// children past `leaf_limit` since it cannot split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeConstraint {
    pub max_depth: u8,
    pub leaf_limit: usize,
}

impl TreeConstraint {
    pub const MAX_DEPTH: u8 = 32;

    pub fn new(max_depth: u8, leaf_limit: usize) -> QuadtreeResult<Self> {
        let constraint = TreeConstraint {
            max_depth,
            leaf_limit,
        };
        constraint.validate()?;
        Ok(constraint)
    }

    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.max_depth > Self::MAX_DEPTH || self.leaf_limit == 0 {
            return Err(QuadtreeError::InvalidConstraint {
                max_depth: self.max_depth,
                leaf_limit: self.leaf_limit,
            });
        }
        Ok(())
    }

    pub(crate) fn clamped(self) -> Self {
        TreeConstraint {
            max_depth: self.max_depth.min(Self::MAX_DEPTH),
            leaf_limit: self.leaf_limit.max(1),
        }
    }
}

impl Default for TreeConstraint {
    fn default() -> Self {
        TreeConstraint {
            max_depth: 16,
            leaf_limit: 8,
        }
    }
}
