//! Spatial bookkeeping for simulation entities on a flat battlefield.
//!
//! [`Battlefield`] maps world positions onto the fixed-point grid of the
//! `quadtree` crate and keeps three indices current: moving units, static
//! features, and a coarse motion index for consumers that only need a rough
//! picture of where things are.

pub mod battlefield;
pub mod config;
pub mod error;
pub mod grid;
pub mod object;
pub mod wrapper;

pub use battlefield::Battlefield;
pub use config::BattlefieldConfig;
pub use error::{BattlefieldError, BattlefieldResult};
pub use grid::{GridMapper, GridPoint, NULL_POINT};
pub use object::{ObjectId, ObjectRef, PeerId, SimObject, LOCAL_PEER};
pub use wrapper::{ObjectWrapper, StaticWrapper, UnitWrapper};
