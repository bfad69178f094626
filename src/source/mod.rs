//! Byte-source abstraction - the read-by-range boundary.
//!
//! The streaming hasher never touches files or devices directly; it asks a
//! [`ByteSource`] for bytes at an offset. That keeps the hot path testable
//! against in-memory doubles and leaves the actual reader substitutable:
//! a positioned file read here, an external block-copy process elsewhere.
//!
//! - [`ByteSource`] - the capability trait
//! - [`FileSource`] - positioned reads over [`std::fs::File`], works for
//!   regular files and raw block devices
//!
//! [`Bytes`] and `&[u8]` also implement [`ByteSource`] for in-memory use.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use bytes::Bytes;

/// A capability to read bytes at a given offset.
///
/// Implementations return the number of bytes read, which may be less than
/// `buf.len()`; a return of `0` means end of input at `offset`. The hasher
/// calls `read_at` with strictly non-decreasing offsets, one read at a
/// time, so sequential-only media behave.
///
/// # Example
///
/// ```
/// use disksum::ByteSource;
/// use bytes::Bytes;
///
/// let mut source = Bytes::from_static(b"hello world");
/// let mut buf = [0u8; 5];
/// let n = source.read_at(6, &mut buf)?;
/// assert_eq!(&buf[..n], b"world");
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait ByteSource {
    /// Reads up to `buf.len()` bytes starting at `offset` into `buf`.
    ///
    /// Returns the number of bytes read; `0` only at end of input.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize>;
}

/// A byte source backed by a [`File`].
///
/// Each read seeks to the requested offset first. The hasher's access
/// pattern is strictly sequential, so the seeks are no-ops in practice;
/// they exist so a single missed or partial read cannot desynchronize the
/// stream position from the plan.
///
/// # Example
///
/// ```no_run
/// use disksum::{ByteSource, FileSource};
///
/// let mut source = FileSource::open("/dev/sda")?;
/// let mut buf = [0u8; 512];
/// source.read_at(0, &mut buf)?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct FileSource {
    file: File,
}

impl FileSource {
    /// Opens the file or device at `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            file: File::open(path)?,
        })
    }

    /// Wraps an already-open file.
    pub fn from_file(file: File) -> Self {
        Self { file }
    }
}

impl ByteSource for FileSource {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read(buf)
    }
}

impl ByteSource for Bytes {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        read_at_slice(self, offset, buf)
    }
}

impl ByteSource for &[u8] {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        read_at_slice(self, offset, buf)
    }
}

fn read_at_slice(data: &[u8], offset: u64, buf: &mut [u8]) -> io::Result<usize> {
    if offset >= data.len() as u64 {
        return Ok(0);
    }
    let start = offset as usize;
    let n = buf.len().min(data.len() - start);
    buf[..n].copy_from_slice(&data[start..start + n]);
    Ok(n)
}
