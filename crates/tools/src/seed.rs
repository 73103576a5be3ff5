//! Stable seeds and a seeded integer walk for the deterministic tools.

use sha2::{Digest, Sha256};

/// Derive a u64 seed from the leading bytes of SHA-256(input).
pub(crate) fn seed_from(input: &str) -> u64 {
    let digest = Sha256::digest(input.as_bytes());
    u64::from_be_bytes([
        digest[0], digest[1], digest[2], digest[3], digest[4], digest[5], digest[6], digest[7],
    ])
}

/// Minimal xorshift64 generator. Not for anything statistical — it only
/// has to produce a stable, varied-looking sequence from a seed.
pub(crate) struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub(crate) fn new(seed: u64) -> Self {
        // xorshift must not start at zero
        Self {
            state: seed.max(1),
        }
    }

    pub(crate) fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// A value in [-bound, bound].
    pub(crate) fn offset(&mut self, bound: i64) -> i64 {
        let span = (2 * bound + 1) as u64;
        (self.next() % span) as i64 - bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_stable() {
        assert_eq!(seed_from("SP-100"), seed_from("SP-100"));
        assert_ne!(seed_from("SP-100"), seed_from("SP-200"));
    }

    #[test]
    fn xorshift_sequence_repeats_per_seed() {
        let mut a = Xorshift64::new(42);
        let mut b = Xorshift64::new(42);
        for _ in 0..10 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn offset_stays_in_bounds() {
        let mut rng = Xorshift64::new(seed_from("Helios Dynamics"));
        for _ in 0..100 {
            let v = rng.offset(200);
            assert!((-200..=200).contains(&v));
        }
    }
}
