//! Core streaming engine - plan-driven hash accumulation.
//!
//! This module implements the second half of the pipeline: given a
//! [`ReadPlan`], request each run's blocks from a [`ByteSource`] in offset
//! order and fold every byte into a single SHA-256 state. The chunking is
//! purely a read-scheduling mechanism; the digest is identical to hashing
//! the raw byte stream directly.
//!
//! # Example
//!
//! ```
//! use disksum::{PlanConfig, StreamHasher};
//! use bytes::Bytes;
//!
//! let hasher = StreamHasher::new(PlanConfig::new(1024)?);
//! let mut source = Bytes::from(vec![0u8; 5000]);
//!
//! let digest = hasher.digest(&mut source, 5000)?;
//! println!("{digest}");
//! # Ok::<(), disksum::DigestError>(())
//! ```

use bytes::Bytes;
use tracing::debug;

use crate::buffer::BlockBuffer;
use crate::config::PlanConfig;
use crate::digest::Digest;
use crate::error::DigestError;
use crate::hash::Sha256Hasher;
use crate::plan::ReadPlan;
use crate::planner::Planner;
use crate::source::ByteSource;

/// A hasher that streams a read plan into a SHA-256 digest.
///
/// `StreamHasher` walks a plan descriptor by descriptor, requesting
/// `block_count` reads of `block_size` bytes each, mirroring block-device
/// access granularity, and feeding the bytes, in the order received, into
/// one incremental hash state. Reads are strictly sequential: hash
/// accumulation is order-dependent, so there is no concurrency, no
/// reordering, and no retry. Any failure aborts the computation with no
/// partial result.
///
/// Scratch memory is bounded by the plan's largest block size, never by the
/// total length.
///
/// # Example
///
/// ```
/// use disksum::{PlanConfig, StreamHasher};
///
/// let hasher = StreamHasher::new(PlanConfig::default());
/// let digest = hasher.digest_bytes(&b"hello world"[..])?;
/// assert_eq!(digest.to_hex().len(), 64);
/// # Ok::<(), disksum::DigestError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StreamHasher {
    config: PlanConfig,
}

impl StreamHasher {
    /// Creates a new stream hasher with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use disksum::{PlanConfig, StreamHasher};
    ///
    /// let hasher = StreamHasher::new(PlanConfig::default());
    /// ```
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this hasher.
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Plans and digests `total_len` bytes from `source`.
    ///
    /// This is the common entry point: it computes the read plan for
    /// `total_len` under this hasher's configuration, then streams it.
    ///
    /// # Errors
    ///
    /// - [`DigestError::InvalidConfig`] if the configured maximum block size
    ///   is invalid; fails before any read.
    /// - [`DigestError::Io`] if a source read fails.
    /// - [`DigestError::ShortRead`] if the source ends before `total_len`
    ///   bytes were supplied.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use disksum::{FileSource, PlanConfig, StreamHasher};
    ///
    /// let mut source = FileSource::open("data.bin")?;
    /// let digest = StreamHasher::new(PlanConfig::default()).digest(&mut source, 4096)?;
    /// println!("{digest}");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn digest<S: ByteSource>(
        &self,
        source: &mut S,
        total_len: u64,
    ) -> Result<Digest, DigestError> {
        let plan = Planner::new(self.config).plan(total_len)?;
        self.digest_plan(&plan, source)
    }

    /// Digests a precomputed plan from `source`.
    ///
    /// Runs are consumed in order, each as `block_count` reads of
    /// `block_size` bytes at strictly increasing offsets. The digest is
    /// finalized only after the last run; a failure anywhere surfaces no
    /// partial result.
    pub fn digest_plan<S: ByteSource>(
        &self,
        plan: &ReadPlan,
        source: &mut S,
    ) -> Result<Digest, DigestError> {
        let mut hasher = Sha256Hasher::new();
        let mut scratch = BlockBuffer::take(plan.max_block_size() as usize);

        for run in plan {
            debug!(
                offset = run.offset,
                block_size = run.block_size,
                block_count = run.block_count,
                "reading run"
            );

            let block = scratch.block(run.block_size as usize);
            for i in 0..run.block_count {
                let offset = run.offset + i * run.block_size;
                fill_block(source, offset, block)?;
                hasher.update(block);
            }
        }

        Ok(hasher.finalize())
    }

    /// Digests an in-memory buffer.
    ///
    /// Convenience for data that is already in memory: the buffer is its
    /// own byte source and its length is the declared total.
    ///
    /// # Example
    ///
    /// ```
    /// use disksum::{PlanConfig, StreamHasher};
    ///
    /// let hasher = StreamHasher::new(PlanConfig::default());
    /// let digest = hasher.digest_bytes(&b"abc"[..])?;
    /// assert_eq!(
    ///     digest.to_hex(),
    ///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    /// );
    /// # Ok::<(), disksum::DigestError>(())
    /// ```
    pub fn digest_bytes(&self, data: impl Into<Bytes>) -> Result<Digest, DigestError> {
        let mut data = data.into();
        let total_len = data.len() as u64;
        self.digest(&mut data, total_len)
    }
}

impl Default for StreamHasher {
    fn default() -> Self {
        Self::new(PlanConfig::default())
    }
}

/// Reads exactly `buf.len()` bytes at `offset`, looping over partial reads.
///
/// A source that reports end of input before the block is full is a
/// mismatch between the declared size and the actual readable content.
fn fill_block<S: ByteSource>(
    source: &mut S,
    offset: u64,
    buf: &mut [u8],
) -> Result<(), DigestError> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = source.read_at(offset + filled as u64, &mut buf[filled..])?;
        if n == 0 {
            return Err(DigestError::ShortRead {
                offset,
                requested: buf.len(),
                received: filled,
            });
        }
        filled += n;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Sha256Hasher;

    #[test]
    fn test_empty_plan_is_empty_digest() {
        let hasher = StreamHasher::default();
        let digest = hasher.digest_bytes(Bytes::new()).unwrap();
        assert_eq!(digest, Sha256Hasher::hash(b""));
    }

    #[test]
    fn test_single_block_path() {
        let hasher = StreamHasher::new(PlanConfig::new(1024).unwrap());
        let digest = hasher.digest_bytes(&b"abc"[..]).unwrap();
        assert_eq!(digest, Sha256Hasher::hash(b"abc"));
    }

    #[test]
    fn test_multi_run_matches_direct_hash() {
        let data: Vec<u8> = (0..5000).map(|i| (i % 251) as u8).collect();
        let hasher = StreamHasher::new(PlanConfig::new(1024).unwrap());
        let digest = hasher.digest_bytes(data.clone()).unwrap();
        assert_eq!(digest, Sha256Hasher::hash(&data));
    }

    #[test]
    fn test_short_read_detected() {
        let hasher = StreamHasher::new(PlanConfig::new(64).unwrap());
        let mut source = Bytes::from(vec![0u8; 100]);

        // Declare more than the source holds
        let err = hasher.digest(&mut source, 200).unwrap_err();
        assert!(matches!(err, DigestError::ShortRead { .. }));
    }

    #[test]
    fn test_io_error_propagates() {
        struct FailingSource;

        impl ByteSource for FailingSource {
            fn read_at(&mut self, _offset: u64, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "device unavailable",
                ))
            }
        }

        let hasher = StreamHasher::new(PlanConfig::new(64).unwrap());
        let err = hasher.digest(&mut FailingSource, 128).unwrap_err();
        assert!(matches!(err, DigestError::Io(_)));
    }
}
