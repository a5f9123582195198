//! Reusable buffer pools.
//!
//! A [`Pool`] hands out [`Pooled`] guards. Dropping a guard clears the buffer
//! and returns it to the pool, so the buffer is back in circulation on every
//! exit path, including unwinding. Buffers are always empty when handed out.
//!
//! Two process-wide pools are provided: [`strings`] for text accumulation and
//! [`bytes`] for serialization scratch space.

use std::ops::{Deref, DerefMut};
use std::sync::LazyLock;

use parking_lot::Mutex;
use tracing::warn;

use crate::config::PoolConfig;

/// A buffer that can be recycled through a [`Pool`].
pub trait Poolable: Default + Send {
    /// Reset to zero length, keeping the allocation.
    fn clear(&mut self);

    /// Allocated capacity in bytes.
    fn capacity(&self) -> usize;
}

impl Poolable for String {
    fn clear(&mut self) {
        String::clear(self);
    }

    fn capacity(&self) -> usize {
        String::capacity(self)
    }
}

impl Poolable for Vec<u8> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
}

/// A thread-safe free list of buffers.
pub struct Pool<T: Poolable> {
    free: Mutex<Vec<T>>,
    config: PoolConfig,
}

impl<T: Poolable> Pool<T> {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Take an idle buffer, or allocate a fresh one if none is available.
    pub fn get(&self) -> Pooled<'_, T> {
        let item = self.free.lock().pop().unwrap_or_default();
        Pooled { pool: self, item }
    }

    /// Number of idle buffers currently held.
    pub fn idle(&self) -> usize {
        self.free.lock().len()
    }

    fn put(&self, mut item: T) {
        item.clear();

        if item.capacity() > self.config.max_capacity {
            return;
        }

        let mut free = self.free.lock();
        if free.len() < self.config.max_retained {
            free.push(item);
        }
    }
}

impl<T: Poolable> Default for Pool<T> {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

/// A buffer on loan from a [`Pool`]. Returned when dropped.
pub struct Pooled<'a, T: Poolable> {
    pool: &'a Pool<T>,
    item: T,
}

impl<T: Poolable> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.item
    }
}

impl<T: Poolable> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.item
    }
}

impl<T: Poolable> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        let item = std::mem::take(&mut self.item);
        self.pool.put(item);
    }
}

static STRINGS: LazyLock<Pool<String>> = LazyLock::new(|| Pool::new(default_config()));
static BYTES: LazyLock<Pool<Vec<u8>>> = LazyLock::new(|| Pool::new(default_config()));

/// The shared pool of text buffers.
pub fn strings() -> &'static Pool<String> {
    &STRINGS
}

/// The shared pool of byte buffers.
pub fn bytes() -> &'static Pool<Vec<u8>> {
    &BYTES
}

fn default_config() -> PoolConfig {
    PoolConfig::from_env().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring pool configuration from environment");
        PoolConfig::default()
    })
}
