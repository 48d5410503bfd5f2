use packed_bits::bit_array::prelude::*;
use packed_bits::BitArray;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut flags = BitArray::<u32>::with_bits(8, u32::MAX);
    flags.reset(0)?;
    assert_eq!(flags.to_bit_string()?, "01111111");
    assert_eq!(flags.not()?.to_bit_string()?, "10000000");

    let a = BitArray::<u32>::with_bits(32, 0b101010);
    let b = BitArray::<u32>::with_bits(32, 0b111100);
    assert_eq!(a.and(&b)?, BitArray::with_bits(32, 0b101000));

    let mut bits = BitArray::<u64>::zeros(48);
    bits.set(36, true)?;
    bits.shift_left(20)?;
    assert!(bits.get(16)?);
    assert_eq!(bits.num_ones(), 1);

    let built = BitArray::<u64>::build_from_bits([true, false, true, true])?;
    println!("{built:?}");
    Ok(())
}
