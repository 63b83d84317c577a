// Tue Jan 13 2026 - Alex

use crate::catalog::ScalarType;
use std::fmt;

/// A single field value.
///
/// Writing a value into a field of a different scalar type truncates it:
/// integers keep their low bits, floats go through `as u32` first (toward
/// zero, saturating, NaN becomes 0) and integers into `f32` round to nearest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    F32(f32),
}

impl Value {
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Self::U8(_) => ScalarType::U8,
            Self::U16(_) => ScalarType::U16,
            Self::U32(_) => ScalarType::U32,
            Self::F32(_) => ScalarType::F32,
        }
    }

    #[inline]
    pub fn to_u32(self) -> u32 {
        match self {
            Self::U8(v) => v as u32,
            Self::U16(v) => v as u32,
            Self::U32(v) => v,
            Self::F32(v) => v as u32,
        }
    }

    #[inline]
    pub fn to_u16(self) -> u16 {
        self.to_u32() as u16
    }

    #[inline]
    pub fn to_u8(self) -> u8 {
        self.to_u32() as u8
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        match self {
            Self::U8(v) => v as f32,
            Self::U16(v) => v as f32,
            Self::U32(v) => v as f32,
            Self::F32(v) => v,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::U8(v) => v as f64,
            Self::U16(v) => v as f64,
            Self::U32(v) => v as f64,
            Self::F32(v) => v as f64,
        }
    }

    /// Converts to the given scalar type with the truncation rules above.
    pub fn coerce(self, scalar: ScalarType) -> Value {
        match scalar {
            ScalarType::U8 => Self::U8(self.to_u8()),
            ScalarType::U16 => Self::U16(self.to_u16()),
            ScalarType::U32 => Self::U32(self.to_u32()),
            ScalarType::F32 => Self::F32(self.to_f32()),
        }
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Self::U8(value)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Self::U16(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::U32(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8(v) => write!(f, "{}", v),
            Self::U16(v) => write!(f, "{}", v),
            Self::U32(v) => write!(f, "{}", v),
            Self::F32(v) => write!(f, "{}", v),
        }
    }
}
