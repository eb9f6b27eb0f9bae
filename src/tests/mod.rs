pub mod quat_tests;

/// A simple deterministic RNG for tests.
pub(crate) struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed, inc: 1 }
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        let oldstate = self.state;
        self.state = oldstate.wrapping_mul(6364136223846793005).wrapping_add(self.inc);
        let xorshifted = (((oldstate >> 18) ^ oldstate) >> 27) as u32;
        let rot = (oldstate >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        ((self.next_u32() as u64) << 32) | self.next_u32() as u64
    }

    pub(crate) fn next_i128(&mut self) -> i128 {
        ((self.next_u64() as i128) << 64) | self.next_u64() as i128
    }

    /// Uniform-ish value in `[-bound, bound]`.
    pub(crate) fn next_in(&mut self, bound: i64) -> i64 {
        let span = (bound as u64) * 2 + 1;
        (self.next_u64() % span) as i64 - bound
    }
}
