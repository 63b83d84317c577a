// Tue Jan 13 2026 - Alex

use crate::catalog::{ByteOrder, ScalarType};
use crate::error::{CodecError, Result};
use crate::layout::{FieldSpec, Layout};
use ahash::AHashMap;
use std::sync::Arc;

pub const DEFAULT_LAYOUT_NAME: &str = "Record";

/// Accumulates field declarations in order.
///
/// Offsets are assigned as fields are added, so `build` only has to freeze
/// what is already there.
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    name: Arc<str>,
    byte_order: ByteOrder,
    fields: Vec<FieldSpec>,
    field_map: AHashMap<Arc<str>, usize>,
    size: u64,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self::named(DEFAULT_LAYOUT_NAME)
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            byte_order: ByteOrder::default(),
            fields: Vec::new(),
            field_map: AHashMap::new(),
            size: 0,
        }
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn add_field(mut self, name: &str, scalar: ScalarType) -> Result<Self> {
        self.push_field(name, scalar)?;
        Ok(self)
    }

    /// Like [`add_field`](Self::add_field) with the type given by name
    /// (`"u8"`, `"u16"`, `"u32"`, `"f32"`).
    pub fn add_field_named(self, name: &str, type_name: &str) -> Result<Self> {
        let scalar = type_name.parse::<ScalarType>()?;
        self.add_field(name, scalar)
    }

    pub fn push_field(&mut self, name: &str, scalar: ScalarType) -> Result<&mut Self> {
        if name.is_empty() {
            return Err(CodecError::InvalidFieldName(name.to_string()));
        }
        if self.field_map.contains_key(name) {
            return Err(CodecError::DuplicateField(name.to_string()));
        }

        let end = self.size + scalar.width() as u64;
        if end > u32::MAX as u64 {
            return Err(CodecError::LayoutTooLarge(end));
        }

        let name: Arc<str> = Arc::from(name);
        self.field_map.insert(name.clone(), self.fields.len());
        self.fields.push(FieldSpec::new(name, scalar, self.size as u32));
        self.size = end;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn current_size(&self) -> usize {
        self.size as usize
    }

    /// Freezes the current declarations without consuming the builder.
    /// Later additions never show up in the returned layout.
    pub fn snapshot(&self) -> Layout {
        Layout::from_parts(
            self.name.clone(),
            self.fields.clone(),
            self.field_map.clone(),
            self.size as u32,
            self.byte_order,
        )
    }

    pub fn build(self) -> Layout {
        Layout::from_parts(self.name, self.fields, self.field_map, self.size as u32, self.byte_order)
    }
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}
