// Tue Jan 13 2026 - Alex

use crate::catalog::{ByteOrder, ScalarType};
use crate::error::{CodecError, Result};
use crate::layout::{Layout, LayoutBuilder};
use serde::{Deserialize, Serialize};

/// Serializable wire-format description of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    pub name: String,
    #[serde(default)]
    pub byte_order: ByteOrder,
    pub size: usize,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub scalar: ScalarType,
    pub offset: u32,
    pub width: u32,
}

impl From<&Layout> for LayoutDescriptor {
    fn from(layout: &Layout) -> Self {
        Self {
            name: layout.name().to_string(),
            byte_order: layout.byte_order(),
            size: layout.size(),
            fields: layout
                .fields()
                .iter()
                .map(|f| FieldDescriptor {
                    name: f.name().to_string(),
                    scalar: f.scalar(),
                    offset: f.offset(),
                    width: f.width(),
                })
                .collect(),
        }
    }
}

impl LayoutDescriptor {
    /// Rebuilds the layout from the field list and checks that the stored
    /// offsets, widths and size agree with the recomputed ones.
    pub fn to_layout(&self) -> Result<Layout> {
        let mut builder = LayoutBuilder::named(&self.name).with_byte_order(self.byte_order);
        for field in &self.fields {
            builder.push_field(&field.name, field.scalar)?;
        }
        let layout = builder.build();

        for (declared, actual) in self.fields.iter().zip(layout.fields()) {
            if declared.offset != actual.offset() || declared.width != actual.width() {
                return Err(CodecError::LayoutMismatch(format!(
                    "field {} declared at {}+{}, computed {}+{}",
                    declared.name,
                    declared.offset,
                    declared.width,
                    actual.offset(),
                    actual.width()
                )));
            }
        }
        if self.size != layout.size() {
            return Err(CodecError::LayoutMismatch(format!(
                "declared size {}, computed {}",
                self.size,
                layout.size()
            )));
        }
        Ok(layout)
    }
}

impl Layout {
    pub fn to_descriptor(&self) -> LayoutDescriptor {
        LayoutDescriptor::from(self)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_descriptor())?)
    }

    pub fn from_json(json: &str) -> Result<Layout> {
        let descriptor: LayoutDescriptor = serde_json::from_str(json)?;
        descriptor.to_layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Layout {
        LayoutBuilder::named("Sample")
            .with_byte_order(ByteOrder::BigEndian)
            .add_field("id", ScalarType::U32).unwrap()
            .add_field("flags", ScalarType::U16).unwrap()
            .add_field("type", ScalarType::U8).unwrap()
            .build()
    }

    #[test]
    fn test_json_roundtrip() {
        let layout = sample();
        let json = layout.to_json().unwrap();
        assert!(json.contains("\"type\": \"u16\""));
        assert!(json.contains("\"BigEndian\""));

        let restored = Layout::from_json(&json).unwrap();
        assert_eq!(restored, layout);
    }

    #[test]
    fn test_mismatched_offset_rejected() {
        let mut descriptor = sample().to_descriptor();
        descriptor.fields[1].offset = 5;
        assert!(matches!(descriptor.to_layout(), Err(CodecError::LayoutMismatch(_))));
    }

    #[test]
    fn test_mismatched_size_rejected() {
        let mut descriptor = sample().to_descriptor();
        descriptor.size = 18;
        assert!(matches!(descriptor.to_layout(), Err(CodecError::LayoutMismatch(_))));
    }

    #[test]
    fn test_bad_type_name_rejected() {
        let json = r#"{"name":"X","size":8,"fields":[{"name":"a","type":"u64","offset":0,"width":8}]}"#;
        assert!(matches!(Layout::from_json(json), Err(CodecError::Descriptor(_))));
    }

    #[test]
    fn test_duplicate_in_descriptor_rejected() {
        let json = r#"{"name":"X","size":2,"fields":[
            {"name":"a","type":"u8","offset":0,"width":1},
            {"name":"a","type":"u8","offset":1,"width":1}]}"#;
        assert!(matches!(Layout::from_json(json), Err(CodecError::DuplicateField(_))));
    }
}
