//! Core planning engine - greedy power-of-two decomposition.
//!
//! This module implements the chunk-boundary decomposition: an arbitrary
//! byte length is partitioned into an ordered sequence of runs, taking the
//! largest block size that still fits at each step and halving for the
//! remainder, down to single-byte blocks.
//!
//! # Example
//!
//! ```
//! use disksum::{PlanConfig, Planner};
//!
//! let planner = Planner::new(PlanConfig::new(1024)?);
//! let plan = planner.plan(1026)?;
//!
//! // One full 1024-byte block, then the 2-byte remainder.
//! assert_eq!(plan.len(), 2);
//! assert_eq!(plan.descriptors()[1].block_size, 2);
//! # Ok::<(), disksum::DigestError>(())
//! ```

use tracing::debug;

use crate::config::PlanConfig;
use crate::error::DigestError;
use crate::plan::{ReadDescriptor, ReadPlan};

/// A planner that decomposes a total byte length into aligned read runs.
///
/// `Planner` is a pure function of `(total_len, max_block_size)`: the same
/// inputs always produce the same plan, and computing a plan performs no
/// I/O. The number of runs is at most `log2(max_block_size) + 1`, which
/// matters because each run maps to one external read invocation with
/// non-trivial fixed overhead.
///
/// # Example
///
/// ```
/// use disksum::{PlanConfig, Planner};
///
/// let planner = Planner::new(PlanConfig::default());
/// let plan = planner.plan(2_138_934)?;
/// assert_eq!(plan.total_len(), 2_138_934);
/// # Ok::<(), disksum::DigestError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Planner {
    config: PlanConfig,
}

impl Planner {
    /// Creates a new planner with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use disksum::{PlanConfig, Planner};
    ///
    /// let planner = Planner::new(PlanConfig::default());
    /// ```
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this planner.
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Computes the read plan for `total_len` bytes.
    ///
    /// The plan covers `[0, total_len)` exactly once, in strictly increasing
    /// offset order, using the largest block size possible at each step and
    /// falling back to halved sizes for remainders:
    ///
    /// - `total_len == 0` yields an empty plan.
    /// - `total_len < max_block_size` yields a single run whose one block
    ///   spans the whole length.
    /// - Otherwise runs are emitted greedily: as many whole blocks of the
    ///   current size as fit, then the size halves, until nothing remains.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidConfig`] if the configured maximum
    /// block size is zero or not a power of two; no plan is produced.
    /// [`DigestError::BlockSizeExhausted`] guards the halving loop and is
    /// unreachable for valid configurations, since halving down to
    /// single-byte blocks always divides the remainder evenly.
    ///
    /// # Example
    ///
    /// ```
    /// use disksum::{PlanConfig, Planner};
    ///
    /// let planner = Planner::new(PlanConfig::new(1024)?);
    ///
    /// let plan = planner.plan(1025)?;
    /// let runs = plan.descriptors();
    /// assert_eq!(runs.len(), 2);
    /// assert_eq!((runs[0].offset, runs[0].block_size, runs[0].block_count), (0, 1024, 1));
    /// assert_eq!((runs[1].offset, runs[1].block_size, runs[1].block_count), (1024, 1, 1));
    /// # Ok::<(), disksum::DigestError>(())
    /// ```
    pub fn plan(&self, total_len: u64) -> Result<ReadPlan, DigestError> {
        self.config.validate()?;
        let max_block_size = self.config.max_block_size();

        if total_len == 0 {
            return Ok(ReadPlan::empty());
        }

        // Small inputs: the whole length as one single block.
        if total_len < max_block_size {
            return Ok(ReadPlan::from_descriptors(vec![ReadDescriptor::new(
                0, total_len, 1,
            )]));
        }

        let mut runs = Vec::new();
        let mut remaining = total_len;
        let mut block_size = max_block_size;

        while remaining > 0 {
            if block_size == 0 {
                return Err(DigestError::BlockSizeExhausted { remaining });
            }

            let blocks = remaining / block_size;
            if blocks > 0 {
                let offset = total_len - remaining;
                runs.push(ReadDescriptor::new(offset, block_size, blocks));
                remaining -= blocks * block_size;
            }
            block_size /= 2;
        }

        debug!(total_len, runs = runs.len(), "computed read plan");
        Ok(ReadPlan::from_descriptors(runs))
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(PlanConfig::default())
    }
}
