// Tue Jan 13 2026 - Alex

pub mod scalar;
pub mod byte_order;
pub mod value;
pub mod accessor;

pub use scalar::ScalarType;
pub use byte_order::ByteOrder;
pub use value::Value;
pub use accessor::Accessor;
