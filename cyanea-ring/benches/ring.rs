use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cyanea_ring::{
    partition_rings, CyclicVertexSearch, JumboCyclicVertexSearch, Molecule, RegularCyclicVertexSearch,
    RingSearch, RingSet,
};

/// Linear chain of `count` six-membered rings fused edge to edge (acene skeleton):
/// two chains of `2 * count + 1` atoms joined by `count + 1` rungs.
fn acene(count: usize) -> Molecule {
    let n = 4 * count + 2;
    let mut edges = Vec::new();
    for i in 0..count {
        let top = 2 * i;
        let bottom = 2 * count + 1 + 2 * i;
        edges.push((top, top + 1));
        edges.push((top + 1, top + 2));
        edges.push((bottom, bottom + 1));
        edges.push((bottom + 1, bottom + 2));
    }
    for i in 0..=count {
        edges.push((2 * i, 2 * count + 1 + 2 * i));
    }
    Molecule::from_edges("acene", n, &edges).expect("valid acene skeleton")
}

/// `count` benzene rings in a chain joined by single bonds (polyphenyl).
fn polyphenyl(count: usize) -> Molecule {
    let mut edges = Vec::new();
    for r in 0..count {
        let base = 6 * r;
        edges.extend((0..6).map(|i| (base + i, base + (i + 1) % 6)));
        if r > 0 {
            edges.push((base - 3, base));
        }
    }
    Molecule::from_edges("polyphenyl", 6 * count, &edges).expect("valid polyphenyl skeleton")
}

fn bench_ring_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_search");

    for &rings in &[2usize, 10, 100] {
        let mol = polyphenyl(rings);
        group.bench_with_input(BenchmarkId::new("polyphenyl", rings), &mol, |b, mol| {
            b.iter(|| {
                let rs = RingSearch::new(black_box(mol));
                black_box(rs.isolated());
            })
        });
    }

    let mol = acene(10);
    group.bench_function("acene_10_fragments", |b| {
        b.iter(|| {
            let rs = RingSearch::new(black_box(&mol));
            black_box(rs.ring_fragments());
        })
    });

    group.finish();
}

fn bench_word_vs_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_vs_wide");
    let graph = polyphenyl(10).graph();

    group.bench_function("word", |b| {
        b.iter(|| black_box(RegularCyclicVertexSearch::new(black_box(&graph)).num_cycles()))
    });
    group.bench_function("wide", |b| {
        b.iter(|| black_box(JumboCyclicVertexSearch::new(black_box(&graph)).num_cycles()))
    });

    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let mol = polyphenyl(100);
    let paths: Vec<Vec<usize>> = (0..100).map(|r| (6 * r..6 * r + 6).collect()).collect();
    let rings = RingSet::from_paths(&mol, &paths).expect("rings follow the skeleton");

    c.bench_function("partition_100_rings", |b| {
        b.iter(|| black_box(partition_rings(black_box(&rings))))
    });
}

criterion_group!(benches, bench_ring_search, bench_word_vs_wide, bench_partition);
criterion_main!(benches);
