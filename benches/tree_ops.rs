use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use segment_tree::SegmentTree;

const LEN: usize = 65_536;

fn random_values(seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..LEN).map(|_| rng.gen_range(-1000..=1000)).collect()
}

fn bench_build(c: &mut Criterion) {
    let values = random_values(1);
    c.bench_function("build 65536", |b| {
        b.iter(|| SegmentTree::new(black_box(&values), |a, b| a + b).unwrap())
    });
}

fn bench_query(c: &mut Criterion) {
    let values = random_values(2);
    let tree = SegmentTree::new(&values, |a, b| a + b).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let ranges: Vec<(usize, usize)> = (0..1024)
        .map(|_| {
            let lo = rng.gen_range(0..LEN);
            let hi = rng.gen_range(lo..LEN);
            (lo, hi)
        })
        .collect();
    c.bench_function("query 65536 x1024", |b| {
        b.iter(|| {
            let mut total = 0;
            for &(lo, hi) in &ranges {
                total += tree.query(lo, hi).unwrap();
            }
            black_box(total)
        })
    });
}

fn bench_update(c: &mut Criterion) {
    let values = random_values(4);
    let mut tree = SegmentTree::new(&values, |a, b| a + b).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let writes: Vec<(usize, i64)> = (0..1024)
        .map(|_| (rng.gen_range(0..LEN), rng.gen_range(-1000..=1000)))
        .collect();
    c.bench_function("update 65536 x1024", |b| {
        b.iter(|| {
            for &(index, value) in &writes {
                tree.update(index, value).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_build, bench_query, bench_update);
criterion_main!(benches);
