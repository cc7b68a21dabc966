#[cfg(target_arch = "wasm32")]
use js_sys;

/// Seed used when the caller passes zero (xorshift has a fixed point at 0)
pub const DEFAULT_SEED: u32 = 12345;

/// Random number generator step (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Source of uniform samples. Particle spawning only depends on this trait so
/// tests can feed fixed draws.
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in [lo, hi)
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_unit()
    }

    /// Uniform index in [0, len). `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let i = (self.next_unit() * len as f64) as usize;
        i.min(len - 1)
    }
}

#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Seed from the host: `Math.random()` in the browser, the clock elsewhere.
    pub fn from_entropy() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new((js_sys::Math::random() * u32::MAX as f64) as u32)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(DEFAULT_SEED);
            Self::new(nanos)
        }
    }
}

impl RandomSource for XorShift32 {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        // Top 24 bits keep the sample strictly below 1.0
        (xorshift32(&mut self.state) >> 8) as f64 / (1u32 << 24) as f64
    }
}
