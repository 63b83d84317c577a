// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    pub fn is_little(self) -> bool {
        matches!(self, Self::LittleEndian)
    }

    /// Suffix of the `{to,from}_*_bytes` methods for this order.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::LittleEndian => "le",
            Self::BigEndian => "be",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LittleEndian => write!(f, "little-endian"),
            Self::BigEndian => write!(f, "big-endian"),
        }
    }
}
