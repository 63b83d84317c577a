// Tue Jan 13 2026 - Alex

use crate::codec::Strategy;
use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub strategy: Strategy,
    /// Keep the synthesized source around on [`SynthesizedCodec`](crate::codec::SynthesizedCodec).
    pub keep_source: bool,
    /// Run [`Layout::verify`](crate::layout::Layout::verify) before generating.
    pub verify_layout: bool,
    pub cache_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Synthesized,
            keep_source: true,
            verify_layout: true,
            cache_capacity: 64,
        }
    }
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_keep_source(mut self, keep: bool) -> Self {
        self.keep_source = keep;
        self
    }

    pub fn with_verify_layout(mut self, verify: bool) -> Self {
        self.verify_layout = verify;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(CodecError::InvalidConfig("cache_capacity must be greater than 0".to_string()));
        }
        Ok(())
    }
}
