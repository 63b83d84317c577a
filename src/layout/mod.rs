// Tue Jan 13 2026 - Alex

pub mod field;
pub mod layout;
pub mod builder;
pub mod serializer;

pub use field::FieldSpec;
pub use layout::Layout;
pub use builder::LayoutBuilder;
pub use serializer::{FieldDescriptor, LayoutDescriptor};
