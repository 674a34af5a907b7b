//! Sample values for the histogram when no values file is given.
//!
//! Two overlapping clusters, generated with a linear congruential generator
//! so the demo is reproducible without pulling in `rand`.

pub const SAMPLE_SIZE: usize = 2_000;

pub fn sample_values() -> Vec<f64> {
    let mut rng = Lcg(42);
    (0..SAMPLE_SIZE)
        .map(|i| {
            // Sum of four uniforms: bell-shaped on [-2, 2]
            let bump: f64 = (0..4).map(|_| rng.next_unit() - 0.5).sum();
            if i % 3 == 0 {
                14.0 + bump * 2.0
            } else {
                6.0 + bump * 3.0
            }
        })
        .collect()
}

struct Lcg(u64);

impl Lcg {
    /// Uniform in [0, 1).
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as f64) / ((1u64 << 31) as f64)
    }
}
