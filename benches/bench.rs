use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tree_containers::{List, Map, Vector};

fn rng() -> StdRng { StdRng::seed_from_u64(0x5eed) }

macro_rules! map_insert_rand_bench {
    ($name: ident, $n: expr) => (
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut map = Map::new();
            // setup
            let mut rng = rng();

            for _ in 0..n {
                let i = rng.gen::<usize>() % n;
                map.insert(i, i);
            }

            // measure
            c.bench_function(stringify!($name), |b| b.iter(|| {
                let k = rng.gen::<usize>() % n;
                map.insert_or_assign(k, k);
            }));
            black_box(map);
        }
    )
}

macro_rules! map_insert_seq_bench {
    ($name: ident, $n: expr) => (
        fn $name(c: &mut Criterion) {
            let mut map = Map::new();
            let n: usize = $n;
            // setup
            for i in 0..n {
                map.insert(i * 2, i * 2);
            }

            // measure
            let mut i = 1;
            c.bench_function(stringify!($name), |b| b.iter(|| {
                map.insert_or_assign(i, i);
                i = (i + 2) % n;
            }));
            black_box(map);
        }
    )
}

macro_rules! map_find_rand_bench {
    ($name: ident, $n: expr) => (
        fn $name(c: &mut Criterion) {
            let mut map = Map::new();
            let n: usize = $n;

            // setup
            let mut rng = rng();
            let mut keys: Vec<_> = (0..n).map(|_| rng.gen::<usize>() % n).collect();

            for &k in &keys {
                map.insert(k, k);
            }

            keys.shuffle(&mut rng);

            // measure
            let mut i = 0;
            c.bench_function(stringify!($name), |b| b.iter(|| {
                let t = map.get(&keys[i]);
                i = (i + 1) % n;
                black_box(t);
            }));
        }
    )
}

macro_rules! map_iter_bench {
    ($name: ident, $n: expr) => (
        fn $name(c: &mut Criterion) {
            let mut map = Map::<u32, u32>::new();
            let n: usize = $n;
            let mut rng = rng();

            for _ in 0..n {
                map.insert(rng.gen(), rng.gen());
            }

            c.bench_function(stringify!($name), |b| b.iter(|| {
                for entry in map.iter() {
                    black_box(entry);
                }
            }));
        }
    )
}

map_insert_rand_bench!{insert_rand_100,    100}
map_insert_rand_bench!{insert_rand_10_000, 10_000}

// Sorted input degrades the unbalanced tree to a chain, so keep this one small.
map_insert_seq_bench!{insert_seq_1000, 1000}

map_find_rand_bench!{find_rand_100,    100}
map_find_rand_bench!{find_rand_10_000, 10_000}

map_iter_bench!{iter_100,     100}
map_iter_bench!{iter_100_000, 100_000}

fn list_sort_10_000(c: &mut Criterion) {
    let mut rng = rng();
    let values: Vec<u32> = (0..10_000).map(|_| rng.gen()).collect();

    c.bench_function("list_sort_10_000", |b| b.iter(|| {
        let mut list: List<u32> = values.iter().cloned().collect();
        list.sort();
        black_box(list);
    }));
}

fn vector_push_10_000(c: &mut Criterion) {
    c.bench_function("vector_push_10_000", |b| b.iter(|| {
        let mut vector = Vector::new();
        for i in 0..10_000u32 { vector.push_back(black_box(i)); }
        black_box(vector);
    }));
}

criterion_group!(map_benches,
    insert_rand_100, insert_rand_10_000, insert_seq_1000,
    find_rand_100, find_rand_10_000,
    iter_100, iter_100_000);
criterion_group!(sequence_benches, list_sort_10_000, vector_push_10_000);
criterion_main!(map_benches, sequence_benches);
