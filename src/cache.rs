//! In-memory asset cache
//!
//! Downloaded image and audio bodies are kept for the life of the process,
//! keyed by URL. Nothing is written to disk.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Immutable, cheaply clonable byte buffer
///
/// Implements `AsRef<[u8]>` so it can back a `std::io::Cursor` for decoding.
#[derive(Clone, PartialEq, Eq)]
pub struct Asset(Arc<[u8]>);

impl Asset {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl From<Vec<u8>> for Asset {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl AsRef<[u8]> for Asset {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Asset({} bytes)", self.0.len())
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub total_bytes: usize,
}

/// Thread-safe URL -> bytes map shared by download tasks
#[derive(Clone, Default)]
pub struct AssetCache {
    inner: Arc<RwLock<HashMap<String, Asset>>>,
}

impl std::fmt::Debug for AssetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetCache")
            .field("stats", &self.stats())
            .finish()
    }
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<Asset> {
        self.inner.read().get(url).cloned()
    }

    pub fn insert(&self, url: &str, asset: Asset) {
        self.inner.write().insert(url.to_string(), asset);
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.read();
        CacheStats {
            entries: inner.len(),
            total_bytes: inner.values().map(Asset::len).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let cache = AssetCache::new();
        assert!(cache.get("https://a").is_none());

        cache.insert("https://a", Asset::from(vec![1, 2, 3]));
        let asset = cache.get("https://a").unwrap();
        assert_eq!(asset.as_ref(), &[1, 2, 3]);
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 1,
                total_bytes: 3
            }
        );
    }

    #[test]
    fn test_clones_share_storage() {
        let cache = AssetCache::new();
        let other = cache.clone();
        other.insert("https://b", Asset::from(vec![0; 10]));
        assert_eq!(cache.stats().total_bytes, 10);
    }

    #[test]
    fn test_asset_debug_hides_contents() {
        let asset = Asset::from(vec![7; 4]);
        assert_eq!(format!("{:?}", asset), "Asset(4 bytes)");
    }
}
