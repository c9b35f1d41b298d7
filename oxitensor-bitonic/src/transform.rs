//! In-place pre-transforms that reshape a buffer before bit-plane coding.
//!
//! For IEEE-style floating layouts the exponent byte sits at the high end
//! of each little-endian word. Rotating each 16-bit group brings the
//! exponent's most significant bits into stable bit channels, and adding a
//! constant bias to the exponent byte centers its histogram, pushing the
//! per-channel probabilities toward 0 or 1 - the regime the range coder
//! compresses best.
//!
//! Every primitive has a documented inverse; the codec applies them to an
//! owned working copy, never to the caller's buffer.

/// Rotate each big-endian u16 group of `buf` right by `n` bits.
///
/// Byte `2k` is the high octet and byte `2k + 1` the low octet of group
/// `k`. The inverse of a rotation by `n` is a rotation by `16 - n`; the
/// encoder rotates by 15, the decoder by 1.
///
/// The buffer length must be even.
pub fn rotate_b16(buf: &mut [u8], n: u32) {
    debug_assert!(buf.len() % 2 == 0);
    for pair in buf.chunks_exact_mut(2) {
        let value = u16::from_be_bytes([pair[0], pair[1]]).rotate_right(n);
        pair.copy_from_slice(&value.to_be_bytes());
    }
}

/// Add `value` (mod 256) to byte `offset` of every `stride`-sized group.
///
/// The inverse is the same call with the wrapping negation of `value`.
pub fn offset_bias(buf: &mut [u8], stride: usize, offset: usize, value: u8) {
    debug_assert!(buf.len() % stride == 0 && offset < stride);
    for group in buf.chunks_exact_mut(stride) {
        group[offset] = group[offset].wrapping_add(value);
    }
}

/// Replace byte `offset` of every `stride`-sized group with its rank in
/// the symbol-frequency order, and return the permutation.
///
/// `perm[0]` is the most frequent symbol; ties break toward the smaller
/// value. The returned `perm` is what [`unsort_symbols`] needs to restore
/// the buffer: `perm[rank]` is the original symbol.
pub fn sort_symbols(buf: &mut [u8], stride: usize, offset: usize) -> [u8; 256] {
    debug_assert!(buf.len() % stride == 0 && offset < stride);

    let mut histogram = [0u64; 256];
    for group in buf.chunks_exact(stride) {
        histogram[group[offset] as usize] += 1;
    }

    let mut perm: [u8; 256] = std::array::from_fn(|i| i as u8);
    perm.sort_by_key(|&symbol| (std::cmp::Reverse(histogram[symbol as usize]), symbol));

    let mut inverse = [0u8; 256];
    for (rank, &symbol) in perm.iter().enumerate() {
        inverse[symbol as usize] = rank as u8;
    }

    for group in buf.chunks_exact_mut(stride) {
        group[offset] = inverse[group[offset] as usize];
    }
    perm
}

/// Undo [`sort_symbols`] using the permutation it returned.
pub fn unsort_symbols(buf: &mut [u8], stride: usize, offset: usize, perm: &[u8; 256]) {
    debug_assert!(buf.len() % stride == 0 && offset < stride);
    for group in buf.chunks_exact_mut(stride) {
        group[offset] = perm[group[offset] as usize];
    }
}
