use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tile_map::{BitGrid, Rect, SurfaceType};

fn bench_fill_region_medium(c: &mut Criterion) {
    let mut grid = BitGrid::new(1000, 1000).unwrap();
    let area = Rect::new(13, 7, 300, 200);
    c.bench_function("fill_region_300x200", |b| {
        b.iter(|| grid.fill_region(black_box(area), black_box(SurfaceType::Mountain)))
    });
}

fn bench_fill_region_full_width(c: &mut Criterion) {
    let mut grid = BitGrid::new(1000, 1000).unwrap();
    let area = Rect::new(0, 0, 1000, 1000);
    c.bench_function("fill_region_1000x1000", |b| {
        b.iter(|| grid.fill_region(black_box(area), black_box(SurfaceType::Mountain)))
    });
}

fn bench_can_place_clear(c: &mut Criterion) {
    let grid = BitGrid::new(1000, 1000).unwrap();
    let area = Rect::new(0, 0, 1000, 1000);
    c.bench_function("can_place_1000x1000_clear", |b| {
        b.iter(|| grid.can_place_object_in_area(black_box(area)))
    });
}

fn bench_can_place_parallel(c: &mut Criterion) {
    let grid = BitGrid::new(1000, 1000).unwrap();
    let area = Rect::new(0, 0, 1000, 1000);
    c.bench_function("can_place_parallel_1000x1000_clear", |b| {
        b.iter(|| grid.can_place_object_in_area_parallel(black_box(area)))
    });
}

fn bench_can_place_early_exit(c: &mut Criterion) {
    let mut grid = BitGrid::new(1000, 1000).unwrap();
    grid.set_tile(1, 1, SurfaceType::Mountain).unwrap();
    let area = Rect::new(0, 0, 400, 400);
    c.bench_function("can_place_400x400_early_exit", |b| {
        b.iter(|| grid.can_place_object_in_area(black_box(area)))
    });
}

fn bench_count_parallel(c: &mut Criterion) {
    let mut grid = BitGrid::new(1000, 1000).unwrap();
    grid.fill_region(Rect::new(100, 100, 500, 500), SurfaceType::Mountain)
        .unwrap();
    c.bench_function("count_parallel_1000x1000", |b| {
        b.iter(|| grid.count_parallel(black_box(SurfaceType::Mountain)))
    });
}

criterion_group!(
    benches,
    bench_fill_region_medium,
    bench_fill_region_full_width,
    bench_can_place_clear,
    bench_can_place_parallel,
    bench_can_place_early_exit,
    bench_count_parallel
);
criterion_main!(benches);
