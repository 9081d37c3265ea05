use num_traits::AsPrimitive;

/// Circular right rotation of a 32-bit word. Defined for every `n` in `0..32`,
/// including the degenerate `n = 0`.
#[inline(always)]
pub const fn rotate_right(word: u32, n: u32) -> u32 {
    debug_assert!(n < u32::BITS);
    word.rotate_right(n)
}

#[inline(always)]
pub const fn rotate_left(word: u32, n: u32) -> u32 {
    rotate_right(word, (u32::BITS - n) % u32::BITS)
}

/// Keeps the low bits of `value` that fit into `T`. No range check, this is only
/// meant for packing words into byte buffers.
#[inline(always)]
pub fn narrow_cast<T, U>(value: U) -> T
where
    T: Copy + 'static,
    U: AsPrimitive<T>,
{
    value.as_()
}
