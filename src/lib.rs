//! disksum
//!
//! Block-aligned SHA-256 digests for files and raw block devices.
//!
//! `disksum` computes the SHA-256 of a byte range whose length is declared up
//! front, reading it as a sequence of power-of-two-aligned runs. That makes
//! it suitable for targets that only support reads at fixed block
//! granularities (a raw disk behind a `dd`-style reader) while producing a
//! digest identical to hashing the plain byte stream.
//!
//! Two pieces do the work:
//!
//! - [`Planner`] partitions a total length into an ordered [`ReadPlan`] of
//!   [`ReadDescriptor`] runs, largest blocks first, halving for remainders.
//! - [`StreamHasher`] walks the plan against a [`ByteSource`] and folds every
//!   byte, in offset order, into one incremental hash state.
//!
//! The crate intentionally:
//! - does NOT verify digests against known values
//! - does NOT support any hash other than SHA-256
//! - does NOT read concurrently or out of order
//! - does NOT retry failed reads
//!
//! Memory use is bounded by the largest block size in the plan, never by the
//! total length, so devices far larger than RAM hash fine.
//!
//! # In-memory
//!
//! ```
//! use disksum::{PlanConfig, StreamHasher};
//!
//! fn main() -> Result<(), disksum::DigestError> {
//!     let hasher = StreamHasher::new(PlanConfig::default());
//!     let digest = hasher.digest_bytes(&b"abc"[..])?;
//!     assert_eq!(
//!         digest.to_hex(),
//!         "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # Files and devices
//!
//! ```no_run
//! use disksum::{FileSource, PlanConfig, StreamHasher};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut source = FileSource::open("/dev/sdb")?;
//!     // A raw device reports no useful metadata length; declare it.
//!     let digest = StreamHasher::new(PlanConfig::default()).digest(&mut source, 16_000_000_000)?;
//!     println!("{digest}");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod digest;
mod error;
mod plan;
mod planner;
mod source;
mod stream;

mod buffer; // internal (thread-local scratch reuse)
mod hash; // internal sha-256 impl

//
// Public surface (intentionally tiny)
//

pub use config::{DEFAULT_MAX_BLOCK_SIZE, PlanConfig};
pub use digest::Digest;
pub use error::DigestError;
pub use plan::{ReadDescriptor, ReadPlan};
pub use planner::Planner;
pub use source::{ByteSource, FileSource};
pub use stream::StreamHasher;
