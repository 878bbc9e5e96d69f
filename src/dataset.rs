// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Harmonic dataset location.
//!
//! Spatial tidal forcing needs gridded harmonic constants (TPXO) that a
//! separate loader reads from a cache directory. This module only composes
//! the file path from an injected [`CacheDirProvider`]; it never reads or
//! writes anything, and the astronomical core never calls it.

use std::path::{Path, PathBuf};

/// Supplies the directory where harmonic datasets are cached.
pub trait CacheDirProvider {
    fn cache_dir(&self) -> PathBuf;
}

/// A fixed cache directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCacheDir(PathBuf);

impl StaticCacheDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self(dir.into())
    }
}

impl CacheDirProvider for StaticCacheDir {
    fn cache_dir(&self) -> PathBuf {
        self.0.clone()
    }
}

/// Adapts a closure into a [`CacheDirProvider`].
///
/// ```
/// use tidefac::{FnCacheDir, HarmonicDataset};
///
/// let provider = FnCacheDir(|| std::env::temp_dir().join("tidefac"));
/// let path = HarmonicDataset::TPXO9.locate(&provider);
/// assert!(path.ends_with("tidefac/h_tpxo9.v1.nc"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnCacheDir<F>(pub F);

impl<F> CacheDirProvider for FnCacheDir<F>
where
    F: Fn() -> PathBuf,
{
    fn cache_dir(&self) -> PathBuf {
        (self.0)()
    }
}

/// A gridded harmonic dataset identified by its cached file name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HarmonicDataset {
    file_name: &'static str,
}

impl HarmonicDataset {
    /// TPXO 9 global elevation constituents.
    pub const TPXO9: Self = Self {
        file_name: "h_tpxo9.v1.nc",
    };

    #[inline]
    pub const fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Path of the dataset inside `provider`'s cache directory.
    pub fn locate(&self, provider: &dyn CacheDirProvider) -> PathBuf {
        self.locate_in(&provider.cache_dir())
    }

    #[inline]
    pub fn locate_in(&self, cache_dir: &Path) -> PathBuf {
        cache_dir.join(self.file_name)
    }
}
