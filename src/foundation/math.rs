#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Map a hash to `[-1, 1]` using its top 53 bits.
pub(crate) fn hash_to_signed_unit(h: u64) -> f64 {
    let unit = (h >> 11) as f64 / ((1u64 << 53) - 1) as f64;
    unit * 2.0 - 1.0
}

/// One first-order low-pass step: `actual + (target - actual) * k`.
pub fn approach(actual: f64, target: f64, k: f64) -> f64 {
    actual + (target - actual) * k
}

/// Per-step blend factor equivalent to a continuous exponential decay with time constant `tau_secs`.
pub fn decay_factor(dt: f64, tau_secs: f64) -> f64 {
    1.0 - (-dt / tau_secs).exp()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
