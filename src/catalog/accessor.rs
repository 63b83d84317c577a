// Tue Jan 13 2026 - Alex

use crate::catalog::{ByteOrder, ScalarType, Value};
use crate::error::{CodecError, Result};

pub type ReadFn = fn(&[u8], usize) -> Result<Value>;
pub type WriteFn = fn(&mut [u8], usize, Value) -> Result<()>;

/// Bounded read/write pair for one scalar type in one byte order.
#[derive(Debug, Clone, Copy)]
pub struct Accessor {
    pub scalar: ScalarType,
    pub byte_order: ByteOrder,
    pub width: usize,
    pub read: ReadFn,
    pub write: WriteFn,
}

impl Accessor {
    pub fn for_scalar(scalar: ScalarType, byte_order: ByteOrder) -> Self {
        let (read, write): (ReadFn, WriteFn) = match (scalar, byte_order) {
            (ScalarType::U8, _) => (read_u8, write_u8),
            (ScalarType::U16, ByteOrder::LittleEndian) => (read_u16_le, write_u16_le),
            (ScalarType::U16, ByteOrder::BigEndian) => (read_u16_be, write_u16_be),
            (ScalarType::U32, ByteOrder::LittleEndian) => (read_u32_le, write_u32_le),
            (ScalarType::U32, ByteOrder::BigEndian) => (read_u32_be, write_u32_be),
            (ScalarType::F32, ByteOrder::LittleEndian) => (read_f32_le, write_f32_le),
            (ScalarType::F32, ByteOrder::BigEndian) => (read_f32_be, write_f32_be),
        };

        Self {
            scalar,
            byte_order,
            width: scalar.width(),
            read,
            write,
        }
    }

    #[inline]
    pub fn read(&self, data: &[u8], offset: usize) -> Result<Value> {
        (self.read)(data, offset)
    }

    #[inline]
    pub fn write(&self, data: &mut [u8], offset: usize, value: Value) -> Result<()> {
        (self.write)(data, offset, value)
    }
}

fn out_of_bounds(offset: usize, width: usize, len: usize) -> CodecError {
    CodecError::OutOfBounds { offset, width, len }
}

#[inline]
pub(crate) fn load<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    offset
        .checked_add(N)
        .and_then(|end| data.get(offset..end))
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| out_of_bounds(offset, N, data.len()))
}

#[inline]
pub(crate) fn store<const N: usize>(data: &mut [u8], offset: usize, bytes: [u8; N]) -> Result<()> {
    let len = data.len();
    let slot = offset
        .checked_add(N)
        .and_then(|end| data.get_mut(offset..end))
        .ok_or_else(|| out_of_bounds(offset, N, len))?;
    slot.copy_from_slice(&bytes);
    Ok(())
}

pub fn read_u8(data: &[u8], offset: usize) -> Result<Value> {
    load::<1>(data, offset).map(|b| Value::U8(b[0]))
}

pub fn read_u16_le(data: &[u8], offset: usize) -> Result<Value> {
    load(data, offset).map(|b| Value::U16(u16::from_le_bytes(b)))
}

pub fn read_u16_be(data: &[u8], offset: usize) -> Result<Value> {
    load(data, offset).map(|b| Value::U16(u16::from_be_bytes(b)))
}

pub fn read_u32_le(data: &[u8], offset: usize) -> Result<Value> {
    load(data, offset).map(|b| Value::U32(u32::from_le_bytes(b)))
}

pub fn read_u32_be(data: &[u8], offset: usize) -> Result<Value> {
    load(data, offset).map(|b| Value::U32(u32::from_be_bytes(b)))
}

pub fn read_f32_le(data: &[u8], offset: usize) -> Result<Value> {
    load(data, offset).map(|b| Value::F32(f32::from_le_bytes(b)))
}

pub fn read_f32_be(data: &[u8], offset: usize) -> Result<Value> {
    load(data, offset).map(|b| Value::F32(f32::from_be_bytes(b)))
}

pub fn write_u8(data: &mut [u8], offset: usize, value: Value) -> Result<()> {
    store(data, offset, [value.to_u8()])
}

pub fn write_u16_le(data: &mut [u8], offset: usize, value: Value) -> Result<()> {
    store(data, offset, value.to_u16().to_le_bytes())
}

pub fn write_u16_be(data: &mut [u8], offset: usize, value: Value) -> Result<()> {
    store(data, offset, value.to_u16().to_be_bytes())
}

pub fn write_u32_le(data: &mut [u8], offset: usize, value: Value) -> Result<()> {
    store(data, offset, value.to_u32().to_le_bytes())
}

pub fn write_u32_be(data: &mut [u8], offset: usize, value: Value) -> Result<()> {
    store(data, offset, value.to_u32().to_be_bytes())
}

pub fn write_f32_le(data: &mut [u8], offset: usize, value: Value) -> Result<()> {
    store(data, offset, value.to_f32().to_le_bytes())
}

pub fn write_f32_be(data: &mut [u8], offset: usize, value: Value) -> Result<()> {
    store(data, offset, value.to_f32().to_be_bytes())
}
