// ComplexStruct: 20 bytes, little-endian
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComplexStruct {
    pub id: u32, // offset 0x0
    pub x: f32, // offset 0x4
    pub y: f32, // offset 0x8
    pub z: f32, // offset 0xC
    pub flags: u16, // offset 0x10
    pub r#type: u8, // offset 0x12
    pub reserved: u8, // offset 0x13
}

impl ComplexStruct {
    pub const SIZE: usize = 20;

    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            id: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            x: f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
            y: f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
            z: f32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
            flags: u16::from_le_bytes([buf[16], buf[17]]),
            r#type: buf[18],
            reserved: buf[19],
        })
    }

    pub fn encode(&self, buf: &mut [u8]) -> Option<()> {
        if buf.len() < Self::SIZE {
            return None;
        }
        buf[0..4].copy_from_slice(&self.id.to_le_bytes());
        buf[4..8].copy_from_slice(&self.x.to_le_bytes());
        buf[8..12].copy_from_slice(&self.y.to_le_bytes());
        buf[12..16].copy_from_slice(&self.z.to_le_bytes());
        buf[16..18].copy_from_slice(&self.flags.to_le_bytes());
        buf[18] = self.r#type;
        buf[19] = self.reserved;
        Some(())
    }
}
