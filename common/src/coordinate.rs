//! Unsigned fixed-point scalar used on both axes of the index.
//!
//! The full `u32` range is addressable. World coordinates are mapped onto it
//! by the caller; signed grid coordinates are mapped with a sign-bit flip so
//! that ordering is preserved across the zero crossing.

pub type Coordinate = u32;

pub const MAX_COORDINATE: Coordinate = Coordinate::MAX;
pub const SIGN_BIT: Coordinate = 0x8000_0000;

#[inline(always)]
pub fn from_signed(value: i32) -> Coordinate {
    (value as u32) ^ SIGN_BIT
}

#[inline(always)]
pub fn to_signed(value: Coordinate) -> i32 {
    (value ^ SIGN_BIT) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_extremes() {
        assert_eq!(from_signed(i32::MIN), 0);
        assert_eq!(from_signed(0), SIGN_BIT);
        assert_eq!(from_signed(i32::MAX), MAX_COORDINATE);
        assert_eq!(to_signed(0), i32::MIN);
        assert_eq!(to_signed(MAX_COORDINATE), i32::MAX);
    }

    #[test]
    fn ordering_is_preserved() {
        assert!(from_signed(-1) < from_signed(0));
        assert!(from_signed(-100) < from_signed(-99));
        assert!(from_signed(5) < from_signed(6));
    }
}
