use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadtreeError {
    InvalidConstraint { max_depth: u8, leaf_limit: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidConstraint {
                max_depth,
                leaf_limit,
            } => {
                write!(
                    f,
                    "tree constraint requires max_depth <= 32 and leaf_limit >= 1 (max_depth: {}, leaf_limit: {})",
                    max_depth, leaf_limit
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
