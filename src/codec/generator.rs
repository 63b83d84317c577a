// Thu Jan 15 2026 - Alex

use crate::codec::{ClosureCodec, Codec, Strategy, SynthesizedCodec};
use crate::config::CodecConfig;
use crate::error::Result;
use crate::layout::Layout;
use crate::utils::logging::ScopedTimer;
use std::sync::Arc;

/// Turns a finished [`Layout`] into a [`Codec`]. This is the one-time cost;
/// the returned codec is immutable and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct CodecGenerator {
    config: CodecConfig,
}

impl CodecGenerator {
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn generate(&self, layout: &Layout) -> Result<Arc<dyn Codec>> {
        self.generate_with(layout, self.config.strategy)
    }

    pub fn generate_with(&self, layout: &Layout, strategy: Strategy) -> Result<Arc<dyn Codec>> {
        let _timer = ScopedTimer::new(&format!("codec {} ({})", layout.name(), strategy));
        log::debug!(
            "Generating {} codec for {}: {} fields, {} bytes, {}",
            strategy,
            layout.name(),
            layout.len(),
            layout.size(),
            layout.byte_order()
        );

        if self.config.verify_layout {
            layout.verify()?;
        }

        let codec: Arc<dyn Codec> = match strategy {
            Strategy::Synthesized => Arc::new(self.synthesized(layout)?),
            Strategy::ClosureTable => Arc::new(Self::closure_table(layout)),
        };
        Ok(codec)
    }

    pub fn synthesized(&self, layout: &Layout) -> Result<SynthesizedCodec> {
        SynthesizedCodec::with_source(layout, self.config.keep_source).map_err(|e| {
            log::warn!("Synthesis rejected layout {}: {}", layout.name(), e);
            e
        })
    }

    pub fn closure_table(layout: &Layout) -> ClosureCodec {
        ClosureCodec::new(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScalarType;
    use crate::codec::Record;
    use crate::error::CodecError;
    use crate::layout::LayoutBuilder;

    fn layout() -> Layout {
        LayoutBuilder::new()
            .add_field("a", ScalarType::U16).unwrap()
            .add_field("b", ScalarType::F32).unwrap()
            .build()
    }

    #[test]
    fn test_default_strategy() {
        let codec = CodecGenerator::default().generate(&layout()).unwrap();
        assert_eq!(codec.strategy(), Strategy::Synthesized);
        assert_eq!(codec.size(), 6);
    }

    #[test]
    fn test_configured_strategy() {
        let config = CodecConfig::new().with_strategy(Strategy::ClosureTable);
        let codec = CodecGenerator::new(config).unwrap().generate(&layout()).unwrap();
        assert_eq!(codec.strategy(), Strategy::ClosureTable);

        let record = Record::new().with("a", 5u16).with("b", 2.0f32);
        assert_eq!(codec.decode(&codec.encode(&record).unwrap()).unwrap(), record);
    }

    #[test]
    fn test_invalid_config() {
        let config = CodecConfig::new().with_cache_capacity(0);
        assert!(matches!(CodecGenerator::new(config), Err(CodecError::InvalidConfig(_))));
    }

    #[test]
    fn test_synthesis_error_surfaces_at_generate() {
        let layout = LayoutBuilder::new().add_field("bad name", ScalarType::U8).unwrap().build();
        let generator = CodecGenerator::default();
        assert!(matches!(generator.generate(&layout), Err(CodecError::Synthesis { .. })));
        assert!(generator.generate_with(&layout, Strategy::ClosureTable).is_ok());
    }
}
