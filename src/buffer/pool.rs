//! Thread-local pool of block scratch buffers.

use std::cell::RefCell;

use crate::config::DEFAULT_MAX_BLOCK_SIZE;

/// Largest buffer capacity the pool will retain on drop.
const MAX_POOLED_CAPACITY: usize = 2 * DEFAULT_MAX_BLOCK_SIZE as usize;

/// Maximum number of buffers to keep per thread.
const MAX_POOL_SIZE: usize = 4;

/// A reusable block buffer.
///
/// Sized on demand per descriptor; the buffer never grows past the largest
/// block size the caller requests, which is what bounds the streaming
/// hasher's memory use.
pub struct BlockBuffer {
    data: Vec<u8>,
}

impl BlockBuffer {
    /// Takes a buffer from the thread-local pool or creates a new one with
    /// at least `capacity` bytes reserved.
    pub fn take(capacity: usize) -> Self {
        THREAD_BUFFER_POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            let mut data = pool.pop().unwrap_or_default();
            if data.capacity() < capacity {
                data.reserve(capacity - data.len());
            }
            Self { data }
        })
    }

    /// Resizes the buffer to exactly `len` bytes and returns it as a
    /// writable block.
    pub fn block(&mut self, len: usize) -> &mut [u8] {
        self.data.resize(len, 0);
        &mut self.data
    }
}

impl Drop for BlockBuffer {
    fn drop(&mut self) {
        if self.data.capacity() <= MAX_POOLED_CAPACITY {
            self.data.clear();
            THREAD_BUFFER_POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            });
        }
    }
}

// Thread-local buffer pool
thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
