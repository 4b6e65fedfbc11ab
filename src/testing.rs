use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Generate `n` strictly ascending points spanning exactly `[start, stop]`
/// with random, uneven spacing.
pub fn ascending(rng: &mut StdRng, n: usize, start: f64, stop: f64) -> Vec<f64> {
    // Positive gaps in [0.1, 1.1) keep neighbours well separated
    let gaps: Vec<f64> = randn::<f64>(rng, n - 1).iter().map(|g| g + 0.1).collect();
    let total: f64 = gaps.iter().sum();

    let mut x = Vec::with_capacity(n);
    let mut acc = 0.0;
    x.push(start);
    for g in &gaps[..n - 2] {
        acc += g;
        x.push(start + (stop - start) * acc / total);
    }
    x.push(stop);
    x
}
