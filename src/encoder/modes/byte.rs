/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitWriter;

/// Packs byte segments
pub struct ByteEncoder;

impl ByteEncoder {
    /// Append each byte as 8 bits
    pub fn encode(data: &[u8], writer: &mut BitWriter) {
        for &b in data {
            writer.put(b as u32, 8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_encode() {
        let mut writer = BitWriter::new();
        ByteEncoder::encode(b"HI\xFF", &mut writer);
        assert_eq!(writer.len(), 24);
        assert_eq!(writer.into_bytes(), vec![0x48, 0x49, 0xFF]);
    }
}
