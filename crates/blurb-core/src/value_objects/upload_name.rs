//! Collision-free upload file names
//!
//! Names are hexadecimal numbers drawn from consecutive blocks of
//! [`UPLOAD_BLOCK_SIZE`] values. Call `n` draws a random value inside block
//! `counter + n`, so names never repeat and always grow. On startup the
//! counter is seeded past the largest name already on disk.

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::DomainError;

/// Width of the value range reserved for each generated name
pub const UPLOAD_BLOCK_SIZE: u64 = 1_000_000;

/// Generator for non-colliding upload names
#[derive(Debug)]
pub struct UploadNamer {
    counter: AtomicU64,
}

impl UploadNamer {
    /// Start handing out names from block `start` (at least 1)
    pub fn new(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start.max(1)),
        }
    }

    /// Seed the counter from the names already present in the upload directory.
    ///
    /// Names whose stem is not a hexadecimal number are ignored, as are
    /// stems so large that the block after them would not fit in a `u64`.
    pub fn seed_from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let max = names
            .into_iter()
            .filter_map(|name| Self::parse_stem(name.as_ref()))
            .filter(|stem| block_fits(stem / UPLOAD_BLOCK_SIZE + 1))
            .max()
            .unwrap_or(0);

        Self::new(max / UPLOAD_BLOCK_SIZE + 1)
    }

    /// Numeric value of a generated name, e.g. `"1e0000.png"` -> `0x1e0000`
    pub fn parse_stem(name: &str) -> Option<u64> {
        let stem = name.split('.').next().unwrap_or_default();
        if stem.is_empty() {
            return None;
        }
        u64::from_str_radix(stem, 16).ok()
    }

    /// Block the next name will be drawn from
    pub fn counter(&self) -> u64 {
        self.counter.load(Ordering::Acquire)
    }

    /// Reserve the next numeric value
    ///
    /// # Errors
    /// Returns `StorageError` once the name space is exhausted
    pub fn next_value(&self) -> Result<u64, DomainError> {
        let block = self.counter.fetch_add(1, Ordering::AcqRel);
        let offset = rand::thread_rng().gen_range(0..UPLOAD_BLOCK_SIZE);
        block
            .checked_mul(UPLOAD_BLOCK_SIZE)
            .filter(|_| block_fits(block))
            .and_then(|base| base.checked_add(offset))
            .ok_or_else(|| DomainError::StorageError("upload name space exhausted".to_string()))
    }

    /// Reserve the next file name with the given extension
    pub fn next_name(&self, extension: &str) -> Result<String, DomainError> {
        let value = self.next_value()?;
        Ok(if extension.is_empty() {
            format!("{value:x}")
        } else {
            format!("{value:x}.{extension}")
        })
    }
}

/// Every value in `block` is representable
fn block_fits(block: u64) -> bool {
    block
        .checked_add(1)
        .and_then(|next| next.checked_mul(UPLOAD_BLOCK_SIZE))
        .is_some()
}

impl Default for UploadNamer {
    fn default() -> Self {
        Self::new(1)
    }
}
