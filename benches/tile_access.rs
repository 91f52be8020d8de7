use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tile_map::{BitGrid, SurfaceType};

fn bench_get_tile(c: &mut Criterion, size: usize) {
    let grid = BitGrid::new(size, size).unwrap();
    let last = size as i32 - 1;
    c.bench_function(&format!("get_tile_{}x{}", size, size), |b| {
        b.iter(|| grid.get_tile(black_box(last), black_box(last)))
    });
}

fn bench_get_tile_small(c: &mut Criterion) {
    bench_get_tile(c, 8);
}

fn bench_get_tile_medium(c: &mut Criterion) {
    bench_get_tile(c, 256);
}

fn bench_get_tile_large(c: &mut Criterion) {
    bench_get_tile(c, 1000);
}

fn bench_set_tile_large(c: &mut Criterion) {
    let mut grid = BitGrid::new(1000, 1000).unwrap();
    c.bench_function("set_tile_1000x1000", |b| {
        b.iter(|| grid.set_tile(black_box(500), black_box(500), black_box(SurfaceType::Mountain)))
    });
}

criterion_group!(
    benches,
    bench_get_tile_small,
    bench_get_tile_medium,
    bench_get_tile_large,
    bench_set_tile_large
);
criterion_main!(benches);
