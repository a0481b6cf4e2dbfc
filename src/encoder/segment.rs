/// Data segment classification
use crate::encoder::tables::ENCODING_TABLE;
use crate::models::{EncodingMode, Version};

/// One input byte sequence and the mode it will be packed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSegment<'a> {
    data: &'a [u8],
    mode: EncodingMode,
}

impl<'a> DataSegment<'a> {
    /// Classify `data`. The mode is the widest any single byte needs.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            mode: classify(data),
        }
    }

    /// Raw bytes
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Mode the bytes are packed in
    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// Character count written into the length field
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a segment without bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Payload bits, excluding mode indicator and length field
    pub fn payload_bits(&self) -> usize {
        let n = self.data.len();
        match self.mode {
            EncodingMode::Numeric => 10 * (n / 3) + [0, 4, 7][n % 3],
            EncodingMode::AlphaNumeric => 11 * (n / 2) + 6 * (n % 2),
            EncodingMode::Byte => 8 * n,
        }
    }

    /// Total bits for this segment at `version`: indicator, count field and payload
    pub fn bit_len(&self, version: Version) -> usize {
        4 + self.mode.count_bits(version) + self.payload_bits()
    }
}

/// Mode needed for a byte sequence. Escalates only, stops early at Byte.
pub fn classify(data: &[u8]) -> EncodingMode {
    let mut mode = EncodingMode::Numeric;
    for &b in data {
        let code = ENCODING_TABLE[b as usize];
        if code >= 45 {
            return EncodingMode::Byte;
        }
        if code >= 10 {
            mode = EncodingMode::AlphaNumeric;
        }
    }
    mode
}
