use crate::error::{QrError, Result};

/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
/// GF(256) field operations using log/exp tables
pub struct Gf256;

static LOG_TABLE: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141, 239,
    129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218,
    240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166, 6,
    191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208, 148, 206, 143,
    150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72, 126, 110, 107, 58,
    40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243,
    167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24, 227, 165,
    153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63, 209, 91, 149, 188, 207,
    205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57,
    83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156,
    169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116,
    214, 244, 234, 168, 80, 88, 175,
];

static EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211, 187,
    107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34, 68, 136,
    13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197,
    151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209, 191, 99, 198,
    145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150, 49, 98, 196, 149,
    55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167,
    83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18, 36, 72,
    144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44, 88, 176, 125, 250, 233, 207,
    131, 27, 54, 108, 216, 173, 71, 142, 1,
];

impl Gf256 {
    /// Field product
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// Discrete log of a non-zero element
    pub fn log(a: u8) -> u8 {
        LOG_TABLE[a as usize]
    }

    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }
}

// Generator polynomials g(x) = (x - a^0)(x - a^1)...(x - a^(n-1)), stored as the
// logs of the coefficients from x^(n-1) down to x^0. The leading x^n term is 1.
const GEN_7: [u8; 7] = [
    87, 229, 146, 149, 238, 102, 21,
];

const GEN_10: [u8; 10] = [
    251, 67, 46, 61, 118, 70, 64, 94, 32, 45,
];

const GEN_13: [u8; 13] = [
    74, 152, 176, 100, 86, 100, 106, 104, 130, 218, 206, 140, 78,
];

const GEN_15: [u8; 15] = [
    8, 183, 61, 91, 202, 37, 51, 58, 58, 237, 140, 124, 5, 99, 105,
];

const GEN_16: [u8; 16] = [
    120, 104, 107, 109, 102, 161, 76, 3, 91, 191, 147, 169, 182, 194, 225, 120,
];

const GEN_17: [u8; 17] = [
    43, 139, 206, 78, 43, 239, 123, 206, 214, 147, 24, 99, 150, 39, 243, 163, 136,
];

const GEN_18: [u8; 18] = [
    215, 234, 158, 94, 184, 97, 118, 170, 79, 187, 152, 148, 252, 179, 5, 98, 96, 153,
];

const GEN_20: [u8; 20] = [
    17, 60, 79, 50, 61, 163, 26, 187, 202, 180, 221, 225, 83, 239, 156, 164, 212, 212, 188,
    190,
];

const GEN_22: [u8; 22] = [
    210, 171, 247, 242, 93, 230, 14, 109, 221, 53, 200, 74, 8, 172, 98, 80, 219, 134, 160,
    105, 165, 231,
];

const GEN_24: [u8; 24] = [
    229, 121, 135, 48, 211, 117, 251, 126, 159, 180, 169, 152, 192, 226, 228, 218, 111, 0,
    117, 232, 87, 96, 227, 21,
];

const GEN_26: [u8; 26] = [
    173, 125, 158, 2, 103, 182, 118, 17, 145, 201, 111, 28, 165, 53, 161, 21, 245, 142, 13,
    102, 48, 227, 153, 145, 218, 70,
];

const GEN_28: [u8; 28] = [
    168, 223, 200, 104, 224, 234, 108, 180, 110, 190, 195, 147, 205, 27, 232, 201, 21, 43,
    245, 87, 42, 195, 212, 119, 242, 37, 9, 123,
];

const GEN_30: [u8; 30] = [
    41, 173, 145, 152, 216, 31, 179, 182, 50, 48, 110, 86, 239, 96, 222, 125, 42, 173, 226,
    193, 224, 130, 156, 37, 251, 216, 238, 40, 192, 180,
];

/// Generator polynomial logs for `ecc_len` parity codewords, `None` for a
/// length no QR block uses
pub fn generator_logs(ecc_len: usize) -> Option<&'static [u8]> {
    let logs: &'static [u8] = match ecc_len {
        7 => &GEN_7,
        10 => &GEN_10,
        13 => &GEN_13,
        15 => &GEN_15,
        16 => &GEN_16,
        17 => &GEN_17,
        18 => &GEN_18,
        20 => &GEN_20,
        22 => &GEN_22,
        24 => &GEN_24,
        26 => &GEN_26,
        28 => &GEN_28,
        30 => &GEN_30,
        _ => return None,
    };
    Some(logs)
}

/// Reed-Solomon encoder for one block size
pub struct ReedSolomonEncoder {
    generator: &'static [u8],
}

impl ReedSolomonEncoder {
    /// Encoder producing `ecc_len` parity codewords per block.
    /// Fails when no generator is tabulated for that length.
    pub fn new(ecc_len: usize) -> Result<Self> {
        generator_logs(ecc_len)
            .map(|generator| Self { generator })
            .ok_or(QrError::UnsupportedEccLength(ecc_len))
    }

    /// Number of parity codewords produced per block
    pub fn ecc_len(&self) -> usize {
        self.generator.len()
    }

    /// Parity codewords for `data`: the remainder of data(x) * x^n divided by g(x)
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let ecc_len = self.ecc_len();
        let mut buf = vec![0u8; data.len() + ecc_len];
        buf[..data.len()].copy_from_slice(data);

        for i in 0..data.len() {
            let lead = buf[i];
            if lead == 0 {
                continue;
            }
            let lead_log = Gf256::log(lead) as usize;
            for (j, &g) in self.generator.iter().enumerate() {
                buf[i + 1 + j] ^= Gf256::exp(g as usize + lead_log);
            }
        }

        buf.split_off(data.len())
    }
}
