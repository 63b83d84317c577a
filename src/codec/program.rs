// Thu Jan 15 2026 - Alex

use crate::catalog::accessor::{load, store};
use crate::catalog::{ByteOrder, ScalarType, Value};
use crate::codec::synthesis::SourceSynthesizer;
use crate::codec::{ensure_len, ensure_present, require, Codec, Record, Strategy};
use crate::error::Result;
use crate::layout::Layout;
use std::fmt;
use std::sync::Arc;

/// Scalar type and byte order folded into a single opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    U8,
    U16Le,
    U16Be,
    U32Le,
    U32Be,
    F32Le,
    F32Be,
}

impl Opcode {
    pub fn select(scalar: ScalarType, byte_order: ByteOrder) -> Self {
        match (scalar, byte_order) {
            (ScalarType::U8, _) => Self::U8,
            (ScalarType::U16, ByteOrder::LittleEndian) => Self::U16Le,
            (ScalarType::U16, ByteOrder::BigEndian) => Self::U16Be,
            (ScalarType::U32, ByteOrder::LittleEndian) => Self::U32Le,
            (ScalarType::U32, ByteOrder::BigEndian) => Self::U32Be,
            (ScalarType::F32, ByteOrder::LittleEndian) => Self::F32Le,
            (ScalarType::F32, ByteOrder::BigEndian) => Self::F32Be,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16Le => "u16.le",
            Self::U16Be => "u16.be",
            Self::U32Le => "u32.le",
            Self::U32Be => "u32.be",
            Self::F32Le => "f32.le",
            Self::F32Be => "f32.be",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub op: Opcode,
    pub offset: usize,
}

impl Instruction {
    #[inline(always)]
    fn load(self, src: &[u8]) -> Result<Value> {
        let offset = self.offset;
        Ok(match self.op {
            Opcode::U8 => Value::U8(load::<1>(src, offset)?[0]),
            Opcode::U16Le => Value::U16(u16::from_le_bytes(load(src, offset)?)),
            Opcode::U16Be => Value::U16(u16::from_be_bytes(load(src, offset)?)),
            Opcode::U32Le => Value::U32(u32::from_le_bytes(load(src, offset)?)),
            Opcode::U32Be => Value::U32(u32::from_be_bytes(load(src, offset)?)),
            Opcode::F32Le => Value::F32(f32::from_le_bytes(load(src, offset)?)),
            Opcode::F32Be => Value::F32(f32::from_be_bytes(load(src, offset)?)),
        })
    }

    #[inline(always)]
    fn store(self, dst: &mut [u8], value: Value) -> Result<()> {
        let offset = self.offset;
        match self.op {
            Opcode::U8 => store(dst, offset, [value.to_u8()]),
            Opcode::U16Le => store(dst, offset, value.to_u16().to_le_bytes()),
            Opcode::U16Be => store(dst, offset, value.to_u16().to_be_bytes()),
            Opcode::U32Le => store(dst, offset, value.to_u32().to_le_bytes()),
            Opcode::U32Be => store(dst, offset, value.to_u32().to_be_bytes()),
            Opcode::F32Le => store(dst, offset, value.to_f32().to_le_bytes()),
            Opcode::F32Be => store(dst, offset, value.to_f32().to_be_bytes()),
        }
    }
}

/// Fixed instruction array for one layout, one instruction per field.
#[derive(Debug, Clone)]
pub struct Program {
    instructions: Box<[Instruction]>,
    names: Box<[Arc<str>]>,
    size: usize,
}

impl Program {
    pub fn compile(layout: &Layout) -> Self {
        let byte_order = layout.byte_order();
        let instructions = layout
            .fields()
            .iter()
            .map(|field| Instruction {
                op: Opcode::select(field.scalar(), byte_order),
                offset: field.offset() as usize,
            })
            .collect();
        let names = layout.fields().iter().map(|f| Arc::clone(f.shared_name())).collect();

        Self {
            instructions,
            names,
            size: layout.size(),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn run_decode(&self, src: &[u8]) -> Result<Record> {
        ensure_len(self.size, src.len())?;

        let mut record = Record::with_capacity(self.instructions.len());
        for (ins, name) in self.instructions.iter().zip(self.names.iter()) {
            record.insert_shared(name, ins.load(src)?);
        }
        Ok(record)
    }

    pub fn run_encode(&self, record: &Record, dst: &mut [u8]) -> Result<()> {
        ensure_len(self.size, dst.len())?;
        ensure_present(record, self.names.iter().map(|name| name.as_ref()))?;

        for (ins, name) in self.instructions.iter().zip(self.names.iter()) {
            ins.store(dst, require(record, name)?)?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pc, (ins, name)) in self.instructions.iter().zip(self.names.iter()).enumerate() {
            writeln!(f, "{:04}  {:<6} @{:<4} {}", pc, ins.op.mnemonic(), ins.offset, name)?;
        }
        Ok(())
    }
}

/// Codec whose layout has been synthesized into source and lowered into a
/// [`Program`]. Field names are checked as identifiers when the codec is
/// built, so a bad name never reaches the first call.
pub struct SynthesizedCodec {
    layout: Layout,
    program: Program,
    source: Option<String>,
}

impl SynthesizedCodec {
    pub fn new(layout: &Layout) -> Result<Self> {
        Self::with_source(layout, true)
    }

    pub fn with_source(layout: &Layout, keep_source: bool) -> Result<Self> {
        let source = SourceSynthesizer::new(layout).synthesize()?;
        let program = Program::compile(layout);

        Ok(Self {
            layout: layout.clone(),
            program,
            source: keep_source.then_some(source),
        })
    }

    /// Generated Rust source with literal offsets, if it was kept.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }
}

impl Codec for SynthesizedCodec {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn strategy(&self) -> Strategy {
        Strategy::Synthesized
    }

    fn decode(&self, source: &[u8]) -> Result<Record> {
        self.program.run_decode(source)
    }

    fn encode_into(&self, record: &Record, target: &mut [u8]) -> Result<()> {
        self.program.run_encode(record, target)
    }
}

impl fmt::Debug for SynthesizedCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynthesizedCodec")
            .field("layout", &self.layout.name())
            .field("instructions", &self.program.instructions().len())
            .field("size", &self.program.size())
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::layout::LayoutBuilder;

    fn layout(order: ByteOrder) -> Layout {
        LayoutBuilder::named("Sample")
            .with_byte_order(order)
            .add_field("id", ScalarType::U32).unwrap()
            .add_field("x", ScalarType::F32).unwrap()
            .add_field("flags", ScalarType::U16).unwrap()
            .add_field("type", ScalarType::U8).unwrap()
            .build()
    }

    #[test]
    fn test_compile() {
        let program = Program::compile(&layout(ByteOrder::BigEndian));
        let ops: Vec<Opcode> = program.instructions().iter().map(|i| i.op).collect();
        let offsets: Vec<usize> = program.instructions().iter().map(|i| i.offset).collect();

        assert_eq!(ops, vec![Opcode::U32Be, Opcode::F32Be, Opcode::U16Be, Opcode::U8]);
        assert_eq!(offsets, vec![0, 4, 8, 10]);
        assert_eq!(program.size(), 11);
    }

    #[test]
    fn test_disassembly() {
        let program = Program::compile(&layout(ByteOrder::LittleEndian));
        let text = program.to_string();
        assert!(text.contains("0002  u16.le @8    flags"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_roundtrip() {
        let codec = SynthesizedCodec::new(&layout(ByteOrder::LittleEndian)).unwrap();
        let record = Record::new()
            .with("id", 77u32)
            .with("x", -0.5f32)
            .with("flags", 0xa5a5u16)
            .with("type", 3u8);

        let bytes = codec.encode(&record).unwrap();
        assert_eq!(bytes, vec![77, 0, 0, 0, 0, 0, 0, 0xbf, 0xa5, 0xa5, 3]);
        assert_eq!(codec.decode(&bytes).unwrap(), record);
        assert!(codec.source().unwrap().contains("pub struct Sample"));
    }

    #[test]
    fn test_source_dropped_on_request() {
        let codec = SynthesizedCodec::with_source(&layout(ByteOrder::LittleEndian), false).unwrap();
        assert!(codec.source().is_none());
    }

    #[test]
    fn test_unsafe_name_rejected_at_build() {
        let layout = LayoutBuilder::new().add_field("a-b", ScalarType::U8).unwrap().build();
        assert!(matches!(SynthesizedCodec::new(&layout), Err(CodecError::Synthesis { .. })));
    }

    #[test]
    fn test_missing_field() {
        let codec = SynthesizedCodec::new(&layout(ByteOrder::LittleEndian)).unwrap();
        let record = Record::new().with("id", 1u32).with("x", 1.0f32).with("flags", 1u16);
        let mut target = [0u8; 11];
        assert!(matches!(
            codec.encode_into(&record, &mut target),
            Err(CodecError::MissingField(name)) if name == "type"
        ));
        assert_eq!(target, [0u8; 11]);
    }
}
