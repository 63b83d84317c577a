// Tue Jan 13 2026 - Alex

pub mod record;
pub mod closure;
pub mod synthesis;
pub mod program;
pub mod generator;
pub mod cache;

pub use record::Record;
pub use closure::ClosureCodec;
pub use synthesis::{is_safe_identifier, SourceSynthesizer};
pub use program::{Instruction, Opcode, Program, SynthesizedCodec};
pub use generator::CodecGenerator;
pub use cache::CodecCache;

use crate::error::{CodecError, Result};
use crate::layout::Layout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a codec turns a layout into its hot path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Identifier-checked source synthesis lowered to a specialized program.
    #[default]
    Synthesized,
    /// One bound closure per field.
    ClosureTable,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synthesized => write!(f, "synthesized"),
            Self::ClosureTable => write!(f, "closure-table"),
        }
    }
}

/// Encode/decode pair bound to one [`Layout`].
pub trait Codec: Send + Sync {
    fn layout(&self) -> &Layout;

    fn strategy(&self) -> Strategy;

    fn size(&self) -> usize {
        self.layout().size()
    }

    /// Reads every field from `source`, which must hold at least `size` bytes.
    fn decode(&self, source: &[u8]) -> Result<Record>;

    /// Writes every field of `record` into `target`. Nothing is written
    /// unless the target is large enough and every field is present.
    fn encode_into(&self, record: &Record, target: &mut [u8]) -> Result<()>;

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.size()];
        self.encode_into(record, &mut buf)?;
        Ok(buf)
    }
}

#[inline]
pub(crate) fn ensure_len(needed: usize, len: usize) -> Result<()> {
    if len < needed {
        return Err(CodecError::BufferTooSmall { needed, len });
    }
    Ok(())
}

/// Presence pass run before any byte is written.
#[inline]
pub(crate) fn ensure_present<'a>(record: &Record, names: impl Iterator<Item = &'a str>) -> Result<()> {
    for name in names {
        if !record.contains(name) {
            return Err(CodecError::MissingField(name.to_string()));
        }
    }
    Ok(())
}

#[inline]
pub(crate) fn require(record: &Record, name: &str) -> Result<crate::catalog::Value> {
    record.get(name).ok_or_else(|| CodecError::MissingField(name.to_string()))
}
