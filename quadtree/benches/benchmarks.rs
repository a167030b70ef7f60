use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::shapes::{Point, Region};
use quadtree::{ChildRef, QuadTree};
use rand::prelude::*;

fn random_children(rng: &mut StdRng, count: u64) -> Vec<ChildRef> {
    (0..count)
        .map(|id| ChildRef::new(id, Point::new(rng.gen(), rng.gen())))
        .collect()
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut quadtree = QuadTree::default();
    let mut next_id = 0u64;

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| {
            let child = ChildRef::new(next_id, Point::new(rng.gen(), rng.gen()));
            next_id += 1;
            quadtree.insert(black_box(&child));
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut quadtree = QuadTree::default();
    let children = random_children(&mut rng, 10_000);
    for child in &children {
        quadtree.insert(child);
    }

    c.bench_function("quadtree_remove_insert", |b| {
        b.iter(|| {
            let child = &children[rng.gen_range(0..children.len())];
            quadtree.remove(black_box(child));
            quadtree.insert(child);
        })
    });
}

fn relocate_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let mut quadtree = QuadTree::default();
    let mut children = random_children(&mut rng, 10_000);
    for child in &children {
        quadtree.insert(child);
    }

    c.bench_function("quadtree_relocate", |b| {
        b.iter(|| {
            let index = rng.gen_range(0..children.len());
            let point = Point::new(rng.gen(), rng.gen());
            quadtree.relocate(black_box(&children[index]), point);
            children[index].point = point;
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let mut quadtree = QuadTree::default();
    for child in random_children(&mut rng, 10_000) {
        quadtree.insert(&child);
    }
    let center = Region::full().center();
    let region = Region::around(center, 1 << 28);

    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            let mut results = Vec::new();
            quadtree.query(black_box(&region), &mut results);
            results
        })
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    remove_benchmark,
    relocate_benchmark,
    query_benchmark
);
criterion_main!(quadtree_benchmarks);
