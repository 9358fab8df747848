use criterion::{black_box, criterion_group, criterion_main, Criterion};
use perc_lattice::{DisjointSets, PercolationGrid};

fn union_bench(c: &mut Criterion) {
    c.bench_function("union_chain_64k", |b| {
        b.iter(|| {
            let mut sets = DisjointSets::new(65_536);
            for label in 0..65_535 {
                sets.union(label, label + 1).unwrap();
            }
            black_box(sets.connected(0, 65_535).unwrap());
        });
    });

    c.bench_function("connected_queries", |b| {
        let mut sets = DisjointSets::new(65_536);
        for label in (0..65_534).step_by(2) {
            sets.union(label, label + 2).unwrap();
        }
        b.iter(|| {
            for label in 0..1_024 {
                black_box(sets.connected(label, label + 1).unwrap());
            }
        });
    });
}

fn grid_bench(c: &mut Criterion) {
    c.bench_function("open_full_grid_128", |b| {
        b.iter(|| {
            let mut grid = PercolationGrid::new(128).unwrap();
            for row in 1..=128 {
                for col in 1..=128 {
                    grid.open(row, col).unwrap();
                }
            }
            black_box(grid.percolates());
        });
    });
}

criterion_group!(benches, union_bench, grid_bench);
criterion_main!(benches);
