use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use packed_bits::{BitArray, BitArrayBuilder};

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

const SAMPLE_SIZE: usize = 30;
const WARM_UP_TIME: Duration = Duration::from_secs(5);
const MEASURE_TIME: Duration = Duration::from_secs(10);

const SEED_BITS: u64 = 334;
const SEED_SHIFTS: u64 = 114514;
const NUM_BITS: usize = 1 << 16;
const NUM_SHIFTS: usize = 100;
const MAX_SHIFT: usize = 130;

fn gen_random_bits(len: usize, seed: u64) -> Vec<bool> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_bool(0.5)).collect()
}

fn gen_random_shifts(len: usize, max: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..max)).collect()
}

fn configure(group: &mut BenchmarkGroup<WallTime>) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);
}

fn criterion_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing_bitarray_construction");
    configure(&mut group);

    let bits = gen_random_bits(NUM_BITS, SEED_BITS);
    group.bench_function("push_back", |b| {
        b.iter(|| {
            let mut array = BitArray::<usize>::new();
            bits.iter().for_each(|&bit| array.push_back(bit));
            array
        });
    });
    group.bench_function("builder", |b| {
        b.iter(|| {
            let mut builder = BitArrayBuilder::<usize>::new();
            builder.extend_bits(bits.iter().copied());
            builder.freeze()
        });
    });
}

fn criterion_shifts(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing_bitarray_shifts");
    configure(&mut group);

    let array: BitArray = gen_random_bits(NUM_BITS, SEED_BITS).into_iter().collect();
    let shifts = gen_random_shifts(NUM_SHIFTS, MAX_SHIFT, SEED_SHIFTS);
    group.bench_function("shift_left", |b| {
        b.iter(|| {
            let mut array = array.clone();
            for &n in &shifts {
                array.shift_left(n).unwrap();
            }
            array
        });
    });
    group.bench_function("shift_right", |b| {
        b.iter(|| {
            let mut array = array.clone();
            for &n in &shifts {
                array.shift_right(n).unwrap();
            }
            array
        });
    });
}

fn criterion_logic(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing_bitarray_logic");
    configure(&mut group);

    let left: BitArray = gen_random_bits(NUM_BITS, SEED_BITS).into_iter().collect();
    let right: BitArray = gen_random_bits(NUM_BITS, SEED_BITS + 1).into_iter().collect();
    group.bench_function("xor_assign", |b| {
        b.iter(|| {
            let mut out = left.clone();
            out.xor_assign(&right).unwrap();
            out
        });
    });
    group.bench_function("count", |b| {
        b.iter(|| left.count().unwrap());
    });
}

criterion_group!(
    benches,
    criterion_construction,
    criterion_shifts,
    criterion_logic
);
criterion_main!(benches);
