use oorandom::Rand32;

/// The seed used by [`shuffle`] callers that do not provide their own.
pub const DEFAULT_SHUFFLE_SEED: u64 = 0x2545_f491_4f6c_dd1d;

/// Shuffles `elts` in-place with a Fisher-Yates shuffle driven by a PCG generator seeded with
/// `seed`.
///
/// The permutation only depends on `seed` and on `elts.len()`.
pub fn shuffle<T>(elts: &mut [T], seed: u64) {
    let mut rng = Rand32::new(seed);

    for i in (1..elts.len()).rev() {
        // Point clouds larger than `u32::MAX` only get their first `u32::MAX` slots shuffled.
        let bound = (i as u64 + 1).min(u32::MAX as u64) as u32;
        let j = rng.rand_range(0..bound) as usize;
        elts.swap(i, j);
    }
}
