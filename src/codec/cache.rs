// Tue Jan 13 2026 - Alex

use crate::codec::{Codec, CodecGenerator, Strategy};
use crate::error::Result;
use crate::layout::Layout;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

type CacheKey = (String, Strategy);

/// Shared codecs keyed by layout name and strategy. Oldest entries are
/// evicted first once `cache_capacity` is reached.
pub struct CodecCache {
    generator: CodecGenerator,
    cache: RwLock<IndexMap<CacheKey, Arc<dyn Codec>, ahash::RandomState>>,
}

impl CodecCache {
    pub fn new(generator: CodecGenerator) -> Self {
        Self {
            generator,
            cache: RwLock::new(IndexMap::default()),
        }
    }

    /// Cached codec for `layout`, if one was built for an equal layout.
    /// A codec cached under the same name for a different layout is not
    /// returned.
    pub fn get(&self, layout: &Layout, strategy: Strategy) -> Option<Arc<dyn Codec>> {
        self.cache
            .read()
            .get(&(layout.name().to_string(), strategy))
            .filter(|codec| codec.layout() == layout)
            .cloned()
    }

    pub fn get_or_build(&self, layout: &Layout) -> Result<Arc<dyn Codec>> {
        self.get_or_build_with(layout, self.generator.config().strategy)
    }

    /// Returns the cached codec when it was built for an equal layout,
    /// otherwise builds and stores a fresh one.
    pub fn get_or_build_with(&self, layout: &Layout, strategy: Strategy) -> Result<Arc<dyn Codec>> {
        let key = (layout.name().to_string(), strategy);
        if let Some(codec) = self.cache.read().get(&key) {
            if codec.layout() == layout {
                return Ok(Arc::clone(codec));
            }
        }

        let codec = self.generator.generate_with(layout, strategy)?;
        let mut cache = self.cache.write();
        if cache.shift_remove(&key).is_some() {
            log::debug!("Replacing cached codec for {} ({})", key.0, key.1);
        }
        while cache.len() >= self.generator.config().cache_capacity {
            cache.shift_remove_index(0);
        }
        cache.insert(key, Arc::clone(&codec));
        Ok(codec)
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    pub fn size(&self) -> usize {
        self.cache.read().len()
    }
}

impl Default for CodecCache {
    fn default() -> Self {
        Self::new(CodecGenerator::default())
    }
}
