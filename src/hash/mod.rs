//! Incremental SHA-256 state.
//!
//! This module wraps the hash backend behind a crate-local API. It is an
//! implementation detail and not part of the public surface.
//!
//! - [`Sha256Hasher`] - incremental SHA-256 via the `sha2` crate

mod sha256;

pub(crate) use sha256::Sha256Hasher;
