// Tue Jan 13 2026 - Alex

//! Fixed-layout binary struct codec.
//!
//! Fields are declared on a [`LayoutBuilder`], frozen into a [`Layout`], and
//! turned once into a [`Codec`] that encodes and decodes [`Record`]s at the
//! precomputed offsets.
//!
//! ```
//! use layout_codec::{CodecGenerator, LayoutBuilder, Record, ScalarType};
//!
//! # fn main() -> layout_codec::Result<()> {
//! let layout = LayoutBuilder::named("Point")
//!     .add_field("x", ScalarType::F32)?
//!     .add_field("y", ScalarType::F32)?
//!     .add_field("tag", ScalarType::U8)?
//!     .build();
//! let codec = CodecGenerator::default().generate(&layout)?;
//!
//! let record = Record::new().with("x", 1.5f32).with("y", -2.0f32).with("tag", 7u8);
//! let bytes = codec.encode(&record)?;
//! assert_eq!(bytes.len(), 9);
//! assert_eq!(codec.decode(&bytes)?, record);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod layout;
pub mod utils;

pub use catalog::{Accessor, ByteOrder, ScalarType, Value};
pub use codec::{ClosureCodec, Codec, CodecCache, CodecGenerator, Record, Strategy, SynthesizedCodec};
pub use config::CodecConfig;
pub use error::{CodecError, Result};
pub use layout::{FieldSpec, Layout, LayoutBuilder, LayoutDescriptor};
