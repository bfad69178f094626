//! SHA-256 hashing implementation.

use sha2::{Digest as _, Sha256};

use crate::digest::Digest;

/// A hasher that computes SHA-256 digests incrementally.
///
/// SHA-256 is a Merkle–Damgård construction: bytes must be folded in exact
/// input order, which is why the streaming hasher owns exactly one of these
/// per digest computation and never reorders reads.
#[derive(Debug, Clone)]
pub struct Sha256Hasher {
    state: Sha256,
}

impl Sha256Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: Sha256::new(),
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes the state and returns the digest.
    pub fn finalize(self) -> Digest {
        Digest::new(self.state.finalize().into())
    }

    /// Convenience method to hash data in one shot.
    #[allow(dead_code)]
    pub(crate) fn hash(data: &[u8]) -> Digest {
        Digest::new(Sha256::digest(data).into())
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_answer() {
        // sha256("abc")
        let digest = Sha256Hasher::hash(b"abc");
        assert_eq!(
            digest.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_input() {
        // sha256("")
        let digest = Sha256Hasher::hash(b"");
        assert_eq!(
            digest.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_incremental_hashing() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"hello ");
        hasher.update(b"world");
        let digest = hasher.finalize();

        // Should match one-shot hashing
        let expected = Sha256Hasher::hash(b"hello world");
        assert_eq!(digest, expected);
    }

    #[test]
    fn test_different_data_different_digest() {
        assert_ne!(
            Sha256Hasher::hash(b"hello world"),
            Sha256Hasher::hash(b"hello world!")
        );
    }
}
