// Tue Jan 13 2026 - Alex

use crate::catalog::ByteOrder;
use crate::error::{CodecError, Result};
use crate::layout::FieldSpec;
use ahash::AHashMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Immutable description of one struct shape.
///
/// Cloning shares the underlying field list; nothing can mutate it after
/// [`LayoutBuilder::build`](crate::layout::LayoutBuilder::build).
#[derive(Clone)]
pub struct Layout {
    inner: Arc<LayoutInner>,
}

struct LayoutInner {
    name: Arc<str>,
    fields: Vec<FieldSpec>,
    field_map: AHashMap<Arc<str>, usize>,
    size: u32,
    byte_order: ByteOrder,
}

impl Layout {
    pub(crate) fn from_parts(
        name: Arc<str>,
        fields: Vec<FieldSpec>,
        field_map: AHashMap<Arc<str>, usize>,
        size: u32,
        byte_order: ByteOrder,
    ) -> Self {
        Self {
            inner: Arc::new(LayoutInner {
                name,
                fields,
                field_map,
                size,
                byte_order,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.inner.fields
    }

    pub fn len(&self) -> usize {
        self.inner.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.fields.is_empty()
    }

    /// Total encoded size in bytes.
    pub fn size(&self) -> usize {
        self.inner.size as usize
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.inner.byte_order
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.inner.field_map.get(name).copied()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.index_of(name).map(|idx| &self.inner.fields[idx])
    }

    pub fn byte_range(&self, index: usize) -> Option<Range<usize>> {
        self.inner.fields.get(index).map(FieldSpec::byte_range)
    }

    pub fn ptr_eq(&self, other: &Layout) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Re-checks offsets, total size and name uniqueness.
    pub fn verify(&self) -> Result<()> {
        let mut expected = 0u64;
        for (idx, field) in self.fields().iter().enumerate() {
            if field.offset() as u64 != expected {
                return Err(CodecError::LayoutMismatch(format!(
                    "field {} at offset {}, expected {}",
                    field.name(),
                    field.offset(),
                    expected
                )));
            }
            if field.width() as usize != field.scalar().width() {
                return Err(CodecError::LayoutMismatch(format!(
                    "field {} has width {}, {} is {} bytes",
                    field.name(),
                    field.width(),
                    field.scalar(),
                    field.scalar().width()
                )));
            }
            if self.index_of(field.name()) != Some(idx) {
                return Err(CodecError::DuplicateField(field.name().to_string()));
            }
            expected += field.width() as u64;
        }

        if expected != self.inner.size as u64 {
            return Err(CodecError::LayoutMismatch(format!(
                "size {} but fields cover {} bytes",
                self.inner.size, expected
            )));
        }
        if self.inner.field_map.len() != self.len() {
            return Err(CodecError::LayoutMismatch("field index out of sync".to_string()));
        }
        Ok(())
    }
}

impl PartialEq for Layout {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.inner.name == other.inner.name
                && self.inner.byte_order == other.inner.byte_order
                && self.inner.size == other.inner.size
                && self.inner.fields == other.inner.fields)
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("name", &self.name())
            .field("fields", &self.fields())
            .field("size", &self.size())
            .field("byte_order", &self.byte_order())
            .finish()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "struct {} ({} bytes, {})", self.name(), self.size(), self.byte_order())?;
        for field in self.fields() {
            writeln!(
                f,
                "  [{:>4}..{:<4}] {:<4} {}",
                field.offset(),
                field.end_offset(),
                field.scalar(),
                field.name()
            )?;
        }
        Ok(())
    }
}
