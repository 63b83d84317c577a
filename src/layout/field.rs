// Tue Jan 13 2026 - Alex

use crate::catalog::ScalarType;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    name: Arc<str>,
    scalar: ScalarType,
    offset: u32,
    width: u32,
}

impl FieldSpec {
    pub(crate) fn new(name: Arc<str>, scalar: ScalarType, offset: u32) -> Self {
        Self {
            name,
            scalar,
            offset,
            width: scalar.width() as u32,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> &Arc<str> {
        &self.name
    }

    pub fn scalar(&self) -> ScalarType {
        self.scalar
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn end_offset(&self) -> u32 {
        self.offset + self.width
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.offset as usize..self.end_offset() as usize
    }

    pub fn overlaps(&self, other: &FieldSpec) -> bool {
        self.offset < other.end_offset() && other.offset < self.end_offset()
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ 0x{:x}: {} ({} bytes)", self.name, self.offset, self.scalar, self.width)
    }
}
