use packed_bits::{BitArray, BitArrayBuilder, Word};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

const SEED_BITS: u64 = 113;
const LENGTHS: [usize; 5] = [1, 33, 1000, 4097, 1 << 20];

fn main() {
    for len in LENGTHS {
        println!("[len = {len}]");
        let bits = gen_random_bits(len, SEED_BITS);
        show_memory::<u8>("BitArray<u8>", &bits);
        show_memory::<u32>("BitArray<u32>", &bits);
        show_memory::<u64>("BitArray<u64>", &bits);
        show_memory::<u128>("BitArray<u128>", &bits);
    }
}

fn gen_random_bits(len: usize, seed: u64) -> Vec<bool> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_bool(0.5)).collect()
}

fn show_memory<W: Word>(name: &str, bits: &[bool]) {
    let mut builder = BitArrayBuilder::<W>::with_capacity(bits.len());
    builder.extend_bits(bits.iter().copied());
    let frozen = builder.freeze();

    let mut pushed = BitArray::<W>::new();
    pushed.extend(bits.iter().copied());
    assert_eq!(frozen.capacity(), pushed.capacity());

    let bytes = std::mem::size_of_val(frozen.words());
    println!(
        "{}: {:.3} bits per bit",
        name,
        (bytes * 8) as f64 / bits.len() as f64
    );
}
