//! Digest value type.
//!
//! - [`Digest`] - 32-byte SHA-256 output, rendered as lowercase hex

mod value;

pub use value::Digest;
