pub mod coordinate;
pub mod shapes;

pub use coordinate::{Coordinate, MAX_COORDINATE};
pub use shapes::{Point, Region};
