//! Error types for disksum.

use std::fmt;

/// Errors that can occur while planning or streaming a digest.
#[derive(Debug)]
pub enum DigestError {
    /// An I/O error occurred while reading from the byte source.
    Io(std::io::Error),

    /// The byte source ended before the declared length was exhausted.
    ShortRead {
        /// Byte offset of the block being read.
        offset: u64,
        /// Bytes requested for the block.
        requested: usize,
        /// Bytes actually received before end of input.
        received: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The planner halved its block size down to zero with bytes still
    /// unassigned. Unreachable for well-formed input; guards the halving
    /// loop against ever spinning.
    BlockSizeExhausted {
        /// Bytes that could not be assigned to any block.
        remaining: u64,
    },
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestError::Io(e) => write!(f, "io error: {}", e),
            DigestError::ShortRead {
                offset,
                requested,
                received,
            } => {
                write!(
                    f,
                    "short read at offset {}: got {} of {} bytes",
                    offset, received, requested
                )
            }
            DigestError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            DigestError::BlockSizeExhausted { remaining } => {
                write!(f, "block size exhausted with {} bytes remaining", remaining)
            }
        }
    }
}

impl std::error::Error for DigestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DigestError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DigestError {
    fn from(e: std::io::Error) -> Self {
        DigestError::Io(e)
    }
}
