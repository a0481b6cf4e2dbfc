/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bitstream::BitWriter;
use crate::encoder::tables::ENCODING_TABLE;

/// Packs digit-only segments
pub struct NumericEncoder;

impl NumericEncoder {
    /// Append the payload of a digit-only segment
    pub fn encode(data: &[u8], writer: &mut BitWriter) {
        for group in data.chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &b| acc * 10 + ENCODING_TABLE[b as usize] as u32);
            let bits = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            writer.put(value, bits);
        }
    }
}
