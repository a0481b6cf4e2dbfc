/// Alphanumeric mode encoder (Mode 0010)
/// Pairs = 11 bits (45 * first + second), single = 6 bits
use crate::encoder::bitstream::BitWriter;
use crate::encoder::tables::ENCODING_TABLE;

/// Packs alphanumeric segments
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Append the payload of an alphanumeric segment
    pub fn encode(data: &[u8], writer: &mut BitWriter) {
        for pair in data.chunks(2) {
            let first = ENCODING_TABLE[pair[0] as usize] as u32;
            match pair.get(1) {
                Some(&second) => {
                    let second = ENCODING_TABLE[second as usize] as u32;
                    writer.put(45 * first + second, 11);
                }
                None => writer.put(first, 6),
            }
        }
    }
}
