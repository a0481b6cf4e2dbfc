//! 1-bit grayscale PNG output.
//!
//! Every module row is repeated `module_size` times and each quiet zone band
//! `quiet_zone` times, so only the first line of a band carries pixel data
//! (filter type None). The repeats use filter type Up with all-zero
//! differences, which deflate squeezes to almost nothing.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::DeflateEncoder;

use super::checksum::{Crc32, adler32};
use crate::error::Result;
use crate::models::Symbol;

/// Fixed 8-byte PNG file header
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// zlib header: deflate, 32K window, default compression
const ZLIB_HEADER: [u8; 2] = [0x78, 0x9C];

const FILTER_NONE: u8 = 0;
const FILTER_UP: u8 = 2;

/// Width (= height) in pixels of a rendered symbol
pub fn image_dimension(dimension: usize, module_size: usize, quiet_zone: usize) -> usize {
    2 * quiet_zone + dimension * module_size
}

/// Uncompressed scanlines: one filter byte then 1-bit pixels, MSB first,
/// black = 0. Padding bits past the image width are white.
pub fn scanlines(symbol: &Symbol, module_size: usize, quiet_zone: usize) -> Vec<u8> {
    let dimension = symbol.dimension();
    let width = image_dimension(dimension, module_size, quiet_zone);
    let stride = width.div_ceil(8) + 1;
    let mut out = Vec::with_capacity(stride * width);

    push_band(&mut out, stride, quiet_zone, |_| {});
    for row in 0..dimension {
        push_band(&mut out, stride, module_size, |line| {
            for col in (0..dimension).filter(|&col| symbol.is_dark(row, col)) {
                let left = quiet_zone + col * module_size;
                for x in left..left + module_size {
                    line[x / 8] &= !(0x80 >> (x % 8));
                }
            }
        });
    }
    push_band(&mut out, stride, quiet_zone, |_| {});

    out
}

/// First line white with `draw` applied, then `repeat - 1` copies
fn push_band(out: &mut Vec<u8>, stride: usize, repeat: usize, draw: impl FnOnce(&mut [u8])) {
    if repeat == 0 {
        return;
    }
    out.push(FILTER_NONE);
    let start = out.len();
    out.resize(start + stride - 1, 0xFF);
    draw(&mut out[start..]);
    for _ in 1..repeat {
        out.push(FILTER_UP);
        out.resize(out.len() + stride - 1, 0);
    }
}

/// zlib stream of the scanlines: header, raw deflate, Adler-32 (big-endian)
pub fn zlib_stream(raw: &[u8]) -> Result<Vec<u8>> {
    let mut out = ZLIB_HEADER.to_vec();
    DeflateEncoder::new(raw, Compression::default()).read_to_end(&mut out)?;
    out.extend_from_slice(&adler32(raw).to_be_bytes());
    Ok(out)
}

/// Write the symbol as a complete PNG file
pub fn write_png<W: Write>(
    symbol: &Symbol,
    module_size: usize,
    quiet_zone: usize,
    mut writer: W,
) -> Result<()> {
    let width = image_dimension(symbol.dimension(), module_size, quiet_zone) as u32;

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&width.to_be_bytes());
    // bit depth 1, grayscale, deflate, adaptive filtering, no interlace
    ihdr.extend_from_slice(&[1, 0, 0, 0, 0]);

    let idat = zlib_stream(&scanlines(symbol, module_size, quiet_zone))?;

    writer.write_all(&PNG_SIGNATURE)?;
    write_chunk(&mut writer, b"IHDR", &ihdr)?;
    write_chunk(&mut writer, b"IDAT", &idat)?;
    write_chunk(&mut writer, b"IEND", &[])?;
    writer.flush()?;
    Ok(())
}

/// Length, type, data, CRC-32 over type + data
fn write_chunk<W: Write>(writer: &mut W, kind: &[u8; 4], data: &[u8]) -> Result<()> {
    let mut crc = Crc32::new();
    crc.update(kind);
    crc.update(data);

    writer.write_all(&(data.len() as u32).to_be_bytes())?;
    writer.write_all(kind)?;
    writer.write_all(data)?;
    writer.write_all(&crc.finish().to_be_bytes())?;
    Ok(())
}
