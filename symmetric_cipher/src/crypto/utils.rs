use bitvec::prelude::*;

/// Bit permutation driven by a 1-based position table (FIPS 46-3 notation).
///
/// Output bit `i` is input bit `table[i]`, counting from the most significant
/// bit of the first byte. Unused trailing output bits stay zero.
pub fn permute<const N: usize, const M: usize>(input: &[u8; N], table: &[u8]) -> [u8; M] {
    debug_assert!(table.len() <= M * 8, "permutation table wider than output");

    let source = input.view_bits::<Msb0>();
    let mut output = [0u8; M];
    let target = output.view_bits_mut::<Msb0>();

    for (index, &position) in table.iter().enumerate() {
        target.set(index, source[usize::from(position) - 1]);
    }
    output
}

/// Rotates the leading 28 bits of a DES key half; the low nibble of the last byte is padding.
pub fn rotate_half_left(half: &mut [u8; 4], shift: usize) {
    half.view_bits_mut::<Msb0>()[..28].rotate_left(shift);
}

/// Reads `bits.len()` bits as an unsigned number, most significant first.
pub fn bits_to_value(bits: &BitSlice<u8, Msb0>) -> u8 {
    bits.iter()
        .by_vals()
        .fold(0u8, |acc, bit| (acc << 1) | u8::from(bit))
}

pub fn xor_blocks<const N: usize>(a: &[u8; N], b: &[u8; N]) -> [u8; N] {
    std::array::from_fn(|i| a[i] ^ b[i])
}

pub fn xor_in_place(target: &mut [u8], other: &[u8]) {
    for (t, o) in target.iter_mut().zip(other) {
        *t ^= o;
    }
}

pub fn split_block(block: &[u8; 8]) -> ([u8; 4], [u8; 4]) {
    let mut left = [0u8; 4];
    let mut right = [0u8; 4];
    left.copy_from_slice(&block[..4]);
    right.copy_from_slice(&block[4..]);
    (left, right)
}

pub fn join_halves(left: &[u8; 4], right: &[u8; 4]) -> [u8; 8] {
    let mut block = [0u8; 8];
    block[..4].copy_from_slice(left);
    block[4..].copy_from_slice(right);
    block
}

/// 1, если в байте чётное число единиц: дополняет байт до нечётной чётности.
pub fn odd_parity_bit(byte: u8) -> u8 {
    u8::from(byte.count_ones() % 2 == 0)
}
