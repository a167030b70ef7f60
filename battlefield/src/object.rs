use nalgebra::Vector3;
use std::rc::Rc;

pub type ObjectId = u64;

/// Opaque tag naming the peer that owns a unit.
pub type PeerId = u32;

pub const LOCAL_PEER: PeerId = 0;

/// What the battlefield needs from a simulation entity.
///
/// Positions are read through `&self` on every update, so implementors that
/// move keep their state behind interior mutability.
pub trait SimObject {
    fn id(&self) -> ObjectId;

    fn path(&self) -> &str {
        ""
    }

    fn global_position(&self) -> Vector3<f64>;

    fn velocity(&self) -> Vector3<f64> {
        Vector3::zeros()
    }

    fn is_static(&self) -> bool {
        false
    }

    fn is_human(&self) -> bool {
        false
    }

    fn is_local(&self) -> bool {
        true
    }

    fn category(&self) -> u32 {
        0
    }
}

pub type ObjectRef = Rc<dyn SimObject>;
