// Thu Jan 15 2026 - Alex

use crate::catalog::{ByteOrder, ScalarType};
use crate::error::{CodecError, Result};
use crate::layout::{FieldSpec, Layout};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

/// Keywords that are only usable as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords with no raw form.
const FORBIDDEN: &[&str] = &["_", "crate", "self", "Self", "super"];

/// Names the emitted source refers to. A struct named after one of them
/// shadows it inside its own impl.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "u8", "u16", "u32", "f32", "usize", "Option", "Some", "None", "Debug", "Clone", "Copy",
    "PartialEq", "Default",
];

pub fn is_safe_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !FORBIDDEN.contains(&name)
}

fn rust_ident(name: &str) -> String {
    if RAW_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

fn rust_type(scalar: ScalarType) -> &'static str {
    scalar.name()
}

/// Emits straight-line Rust source for one layout: a plain struct plus
/// `decode`/`encode` with every offset written out as a literal.
pub struct SourceSynthesizer<'a> {
    layout: &'a Layout,
}

impl<'a> SourceSynthesizer<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    /// Every name that ends up in the source must be a plain identifier.
    pub fn validate(&self) -> Result<()> {
        let struct_name = self.layout.name();
        if !is_safe_identifier(struct_name) || RAW_KEYWORDS.contains(&struct_name) {
            return Err(CodecError::Synthesis {
                name: struct_name.to_string(),
                reason: "struct name is not a usable identifier".to_string(),
            });
        }
        if RESERVED_TYPE_NAMES.contains(&struct_name) {
            return Err(CodecError::Synthesis {
                name: struct_name.to_string(),
                reason: "struct name shadows a type used by the generated code".to_string(),
            });
        }

        for field in self.layout.fields() {
            if !is_safe_identifier(field.name()) {
                return Err(CodecError::Synthesis {
                    name: field.name().to_string(),
                    reason: format!("field of {} is not a usable identifier", struct_name),
                });
            }
        }
        Ok(())
    }

    pub fn synthesize(&self) -> Result<String> {
        self.validate()?;

        let layout = self.layout;
        let name = layout.name();
        let mut code = String::new();

        code.push_str(&format!(
            "// {}: {} bytes, {}\n",
            name,
            layout.size(),
            layout.byte_order()
        ));
        code.push_str("#[derive(Debug, Clone, Copy, PartialEq, Default)]\n");
        code.push_str(&format!("pub struct {} {{\n", name));
        for field in layout.fields() {
            code.push_str(&format!(
                "    pub {}: {}, // offset 0x{:X}\n",
                rust_ident(field.name()),
                rust_type(field.scalar()),
                field.offset()
            ));
        }
        code.push_str("}\n\n");

        code.push_str(&format!("impl {} {{\n", name));
        code.push_str(&format!("    pub const SIZE: usize = {};\n\n", layout.size()));

        code.push_str("    pub fn decode(buf: &[u8]) -> Option<Self> {\n");
        code.push_str("        if buf.len() < Self::SIZE {\n            return None;\n        }\n");
        code.push_str("        Some(Self {\n");
        for field in layout.fields() {
            code.push_str(&format!(
                "            {}: {},\n",
                rust_ident(field.name()),
                read_expr(field, layout.byte_order())
            ));
        }
        code.push_str("        })\n    }\n\n");

        code.push_str("    pub fn encode(&self, buf: &mut [u8]) -> Option<()> {\n");
        code.push_str("        if buf.len() < Self::SIZE {\n            return None;\n        }\n");
        for field in layout.fields() {
            code.push_str(&format!("        {};\n", write_stmt(field, layout.byte_order())));
        }
        code.push_str("        Some(())\n    }\n}\n");

        Ok(code)
    }
}

fn read_expr(field: &FieldSpec, order: ByteOrder) -> String {
    let offset = field.offset() as usize;
    if field.scalar() == ScalarType::U8 {
        return format!("buf[{}]", offset);
    }
    let bytes = (offset..offset + field.width() as usize)
        .map(|i| format!("buf[{}]", i))
        .join(", ");
    format!("{}::from_{}_bytes([{}])", rust_type(field.scalar()), order.suffix(), bytes)
}

fn write_stmt(field: &FieldSpec, order: ByteOrder) -> String {
    let ident = rust_ident(field.name());
    let offset = field.offset();
    if field.scalar() == ScalarType::U8 {
        return format!("buf[{}] = self.{}", offset, ident);
    }
    format!(
        "buf[{}..{}].copy_from_slice(&self.{}.to_{}_bytes())",
        offset,
        field.end_offset(),
        ident,
        order.suffix()
    )
}
