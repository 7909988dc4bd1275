use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Uniform integer source the deal generator draws from.
pub trait RandomSource {
    /// Uniform value in `low..high`. `high` must be greater than `low`.
    fn draw(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn draw(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..high)
    }
}

/// Fisher-Yates shuffle driven by a [`RandomSource`].
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.draw(0, i + 1);
        items.swap(i, j);
    }
}

/// Deterministic RNG for a given (seed, deal_id) pair.
///
/// Derives a per-deal 64-bit seed as `seed ^ deal_id` rotated, then seeds a
/// PCG 64-bit generator, so batches can deal in parallel and still be
/// reproduced one deal at a time.
#[inline]
pub fn rng_for_deal(seed: u64, deal_id: u64) -> Pcg64 {
    let derived: u64 = seed ^ deal_id.rotate_left(32);
    Pcg64::seed_from_u64(derived)
}
