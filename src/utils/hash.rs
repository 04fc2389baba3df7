//! Content hashing using FxHash.
//!
//! Fast and deterministic; used to detect whether a document changed
//! between reloads, not for anything security-related.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let h = hash::compute("site_name: Docs"); // -> u64
//! ```

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_is_stable() {
        assert_eq!(compute("site_name: Docs"), compute(&String::from("site_name: Docs")));
        assert_ne!(compute("site_name: Docs"), compute("site_name: Docs\n"));
    }
}
