use common::shapes::*;
use common::MAX_COORDINATE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_signed_round_trip() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(7);
    for _ in 0..1000 {
        let x: i32 = rng.gen();
        let y: i32 = rng.gen();
        assert_eq!(Point::from_signed(x, y).to_signed(), (x, y));
    }
    for v in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert_eq!(Point::from_signed(v, v).to_signed(), (v, v));
    }
}

#[test]
fn test_signed_mapping_preserves_order() {
    let a = Point::from_signed(-10, -10);
    let b = Point::from_signed(0, 0);
    let c = Point::from_signed(10, 10);
    assert!(a.x < b.x && b.x < c.x);
    assert!(a.y < b.y && b.y < c.y);
}

#[test]
fn test_new_and_getters() {
    let region = Region::new(2, 3, 6, 9);
    assert_eq!(region.width(), 4);
    assert_eq!(region.height(), 6);
    assert_eq!(region.min(), Point::new(2, 3));
    assert_eq!(region.max(), Point::new(6, 9));
    assert_eq!(region.center(), Point::new(4, 6));
}

#[test]
fn test_contains_is_inclusive() {
    let region = Region::new(10, 10, 20, 20);
    assert!(region.contains(Point::new(10, 10)));
    assert!(region.contains(Point::new(20, 20)));
    assert!(region.contains(Point::new(15, 20)));
    assert!(!region.contains(Point::new(21, 15)));
    assert!(!region.contains(Point::new(9, 15)));
}

#[test]
fn test_single_point_region() {
    let region = Region::point(Point::new(5, 5));
    assert!(region.contains(Point::new(5, 5)));
    assert!(!region.contains(Point::new(5, 6)));
    assert!(!region.is_divisible());
}

#[test]
fn test_overlaps() {
    let a = Region::new(0, 0, 10, 10);
    assert!(a.overlaps(&Region::new(10, 10, 20, 20)));
    assert!(a.overlaps(&Region::new(2, 2, 3, 3)));
    assert!(!a.overlaps(&Region::new(11, 0, 20, 10)));
    assert!(!a.overlaps(&Region::new(0, 11, 10, 20)));
    assert!(Region::full().overlaps(&Region::point(Point::ORIGIN)));
}

#[test]
fn test_contains_region() {
    let outer = Region::new(0, 0, 100, 100);
    assert!(outer.contains_region(&Region::new(0, 0, 100, 100)));
    assert!(outer.contains_region(&Region::new(10, 10, 20, 20)));
    assert!(!outer.contains_region(&Region::new(50, 50, 101, 60)));
}

#[test]
fn test_expand_to_include() {
    let mut region = Region::point(Point::new(10, 10));
    region.expand_to_include(Point::new(4, 20));
    assert_eq!(region, Region::new(4, 10, 10, 20));
    region.expand_to_include_region(&Region::new(0, 0, 5, 5));
    assert_eq!(region, Region::new(0, 0, 10, 20));
}

#[test]
fn test_expand_saturates() {
    let mut region = Region::new(5, 5, MAX_COORDINATE - 5, MAX_COORDINATE - 5);
    region.expand(10);
    assert_eq!(region, Region::full());
}

#[test]
fn test_around_clips_to_range() {
    let region = Region::around(Point::new(3, MAX_COORDINATE - 1), 10);
    assert_eq!(region, Region::new(0, MAX_COORDINATE - 11, 13, MAX_COORDINATE));
}

#[test]
fn test_from_points_normalizes() {
    let region = Region::from_points(Point::new(9, 1), Point::new(2, 7));
    assert_eq!(region, Region::new(2, 1, 9, 7));
}

#[test]
fn test_quadrants_partition_region() {
    let region = Region::new(0, 0, 15, 15);
    let quads = region.split();
    assert_eq!(quads[0], Region::new(0, 0, 7, 7));
    assert_eq!(quads[1], Region::new(8, 0, 15, 7));
    assert_eq!(quads[2], Region::new(0, 8, 7, 15));
    assert_eq!(quads[3], Region::new(8, 8, 15, 15));

    let mut rng: StdRng = SeedableRng::seed_from_u64(11);
    for _ in 0..200 {
        let p = region.random_point_inside(&mut rng);
        let owners: Vec<usize> = (0..4).filter(|&i| quads[i].contains(p)).collect();
        assert_eq!(owners, vec![region.quadrant_of(p)]);
    }
}

#[test]
fn test_full_region_split_does_not_overflow() {
    let quads = Region::full().split();
    assert_eq!(quads[0].x1 + 1, quads[1].x0);
    assert_eq!(quads[3].x1, MAX_COORDINATE);
    assert_eq!(quads[3].y1, MAX_COORDINATE);
}

#[test]
fn test_boundary_point_goes_low() {
    let region = Region::new(0, 0, 15, 15);
    assert_eq!(region.quadrant_of(Point::new(7, 7)), 0);
    assert_eq!(region.quadrant_of(Point::new(8, 7)), 1);
    assert_eq!(region.quadrant_of(Point::new(7, 8)), 2);
    assert_eq!(region.quadrant_of(Point::new(8, 8)), 3);
}

#[test]
fn test_distances() {
    let a = Point::new(0, 0);
    let b = Point::new(3, 4);
    assert_eq!(a.chebyshev_distance(&b), 4);
    assert_eq!(a.distance(&b), 5.0);
}

#[test]
fn test_random_point_inside() {
    let region = Region::new(100, 200, 150, 260);
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);
    for _ in 0..10 {
        assert!(region.contains(region.random_point_inside(&mut rng)));
    }
}
