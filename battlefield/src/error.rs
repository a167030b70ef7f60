use crate::object::ObjectId;
use quadtree::QuadtreeError;

#[derive(Debug, thiserror::Error)]
pub enum BattlefieldError {
    #[error("object id must be non-zero")]
    NullId,
    #[error("unit {0} is already registered")]
    DuplicateUnit(ObjectId),
    #[error("static feature {0} is already registered")]
    DuplicateStatic(ObjectId),
    #[error("object {0} is static and cannot be added as a unit")]
    StaticUnit(ObjectId),
    #[error("object {0} is not static and cannot be added as a static feature")]
    MovingStatic(ObjectId),
    #[error("unit {0} is not registered")]
    UnknownUnit(ObjectId),
    #[error("invalid battlefield configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse battlefield configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Tree(#[from] QuadtreeError),
}

pub type BattlefieldResult<T> = Result<T, BattlefieldError>;
