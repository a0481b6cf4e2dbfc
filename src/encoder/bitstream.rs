/// Bit packing of data segments into data codewords
use crate::encoder::modes::{AlphanumericEncoder, ByteEncoder, NumericEncoder};
use crate::encoder::segment::DataSegment;
use crate::error::{QrError, Result};
use crate::models::{EncodingMode, Version};

/// Pad codewords appended after the terminator, alternating from the first
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// MSB-first bit accumulator
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    /// Empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty writer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_len: 0,
        }
    }

    /// Append the low `count` bits of `value`, most significant first
    pub fn put(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            self.push_bit((value >> i) & 1 == 1);
        }
    }

    /// Append a single bit
    pub fn push_bit(&mut self, bit: bool) {
        if self.bit_len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> (self.bit_len % 8);
        }
        self.bit_len += 1;
    }

    /// Bits written so far
    pub fn len(&self) -> usize {
        self.bit_len
    }

    /// True before the first bit
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Pad with zero bits up to the next byte boundary
    pub fn align_to_byte(&mut self) {
        self.bit_len = self.bytes.len() * 8;
    }

    /// Packed bytes, the last one zero-padded
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Assembles the data codeword stream for one symbol
pub struct CodewordEncoder;

impl CodewordEncoder {
    /// Pack every segment, then terminator, byte alignment and pad codewords.
    /// The result is exactly `max_data_codewords` long.
    pub fn encode(
        segments: &[DataSegment<'_>],
        version: Version,
        max_data_codewords: usize,
    ) -> Result<Vec<u8>> {
        let max_bits = max_data_codewords * 8;
        let mut writer = BitWriter::with_capacity(max_bits);

        for segment in segments {
            writer.put(segment.mode().indicator(), 4);
            writer.put(segment.len() as u32, segment.mode().count_bits(version));
            match segment.mode() {
                EncodingMode::Numeric => NumericEncoder::encode(segment.data(), &mut writer),
                EncodingMode::AlphaNumeric => {
                    AlphanumericEncoder::encode(segment.data(), &mut writer)
                }
                EncodingMode::Byte => ByteEncoder::encode(segment.data(), &mut writer),
            }
        }

        if writer.len() > max_bits {
            return Err(QrError::CapacityMismatch {
                expected: max_bits,
                actual: writer.len(),
            });
        }

        // Terminator, shortened when fewer than 4 bits remain
        let terminator = (max_bits - writer.len()).min(4);
        writer.put(0, terminator);
        writer.align_to_byte();

        let mut codewords = writer.into_bytes();
        let pad_count = max_data_codewords.saturating_sub(codewords.len());
        codewords.extend(PAD_CODEWORDS.iter().cycle().take(pad_count));

        if codewords.len() != max_data_codewords {
            return Err(QrError::CapacityMismatch {
                expected: max_data_codewords,
                actual: codewords.len(),
            });
        }
        Ok(codewords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_writer() {
        let mut writer = BitWriter::new();
        writer.put(0b0001, 4);
        writer.put(0b101, 3);
        assert_eq!(writer.len(), 7);
        writer.align_to_byte();
        assert_eq!(writer.len(), 8);
        writer.put(0xABC, 12);
        assert_eq!(writer.into_bytes(), vec![0b0001_1010, 0xAB, 0xC0]);
    }

    #[test]
    fn test_numeric_reference_codewords() {
        let segments = [DataSegment::new(b"01234567")];
        let codewords = CodewordEncoder::encode(&segments, Version::MIN, 16).unwrap();
        assert_eq!(
            codewords,
            vec![
                0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
                0x11, 0xEC, 0x11,
            ]
        );
    }

    #[test]
    fn test_alphanumeric_reference_codewords() {
        let segments = [DataSegment::new(b"HELLO WORLD")];
        let codewords = CodewordEncoder::encode(&segments, Version::MIN, 13).unwrap();
        assert_eq!(
            codewords,
            vec![32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236]
        );
    }

    #[test]
    fn test_mixed_segments_keep_their_own_modes() {
        let segments = [
            DataSegment::new(b"HELLO "),
            DataSegment::new(b"12345"),
            DataSegment::new(b"world"),
        ];
        let codewords = CodewordEncoder::encode(&segments, Version::new(2).unwrap(), 22).unwrap();
        assert_eq!(&codewords[..6], &[32, 51, 11, 120, 209, 112]);
        assert_eq!(codewords.len(), 22);
    }

    #[test]
    fn test_short_terminator_when_nearly_full() {
        // 38 data bits in a 40-bit stream leave room for two terminator bits
        let segments = [DataSegment::new(b"1234567")];
        let codewords = CodewordEncoder::encode(&segments, Version::MIN, 5).unwrap();
        assert_eq!(codewords.len(), 5);
        assert!(CodewordEncoder::encode(&segments, Version::MIN, 4).is_err());
    }
}
