/// Main QR encoder - wires the pipeline together
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::GrayImage;
use log::debug;

use crate::encoder::bitstream::CodewordEncoder;
use crate::encoder::config::EncoderConfig;
use crate::encoder::format::FormatInfo;
use crate::encoder::function_patterns::FunctionPatterns;
use crate::encoder::interleave::final_codewords;
use crate::encoder::mask::select_mask;
use crate::encoder::placement::place_codewords;
use crate::encoder::segment::DataSegment;
use crate::encoder::tables::BlockLayout;
use crate::encoder::version::{VersionInfo, select_version};
use crate::error::{QrError, Result};
use crate::models::{ECLevel, ModuleMatrix, Symbol, Version};
use crate::render;

/// Encodes data segments into QR symbols and renders them.
///
/// The encoder only holds configuration. Each call builds its own state and
/// returns a fresh [`Symbol`], so a failed call never exposes a half-built one.
#[derive(Debug, Clone, Default)]
pub struct QrEncoder {
    config: EncoderConfig,
}

impl QrEncoder {
    /// Encoder with default settings (level M, module size 2, quiet zone 8)
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder with explicit settings
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Current settings
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Settings changed here apply from the next call on
    pub fn config_mut(&mut self) -> &mut EncoderConfig {
        &mut self.config
    }

    /// Encode one or more segments into a single symbol.
    ///
    /// Each segment is packed in the narrowest mode that covers all of its
    /// bytes. Fails on an empty segment list, an empty segment, or data that
    /// exceeds version 40 at the configured error correction level.
    pub fn encode<S: AsRef<[u8]>>(&self, segments: &[S]) -> Result<Symbol> {
        let ctx = BuildContext::new(segments, self.config.ec_level())?;
        let data = ctx.data_codewords()?;
        let codewords = final_codewords(&data, &ctx.layout)?;
        let matrix = ctx.place(&codewords)?;
        Ok(ctx.finish(matrix))
    }

    /// Encode a single byte segment
    pub fn encode_bytes(&self, data: &[u8]) -> Result<Symbol> {
        self.encode(&[data])
    }

    /// Encode the UTF-8 bytes of `text` as a single segment
    pub fn encode_str(&self, text: &str) -> Result<Symbol> {
        self.encode(&[text])
    }

    /// Encode each string as its own segment
    pub fn encode_strs(&self, texts: &[&str]) -> Result<Symbol> {
        self.encode(texts)
    }

    /// Width (= height) in pixels of the rendered symbol
    pub fn image_dimension(&self, symbol: &Symbol) -> usize {
        render::image_dimension(
            symbol.dimension(),
            self.config.module_size(),
            self.config.quiet_zone(),
        )
    }

    /// Pixel grid with quiet zone, `true` = black
    pub fn to_pixels(&self, symbol: &Symbol) -> Vec<Vec<bool>> {
        render::to_pixels(symbol, self.config.module_size(), self.config.quiet_zone())
    }

    /// Grayscale image with quiet zone, black 0 and white 255
    pub fn to_image(&self, symbol: &Symbol) -> GrayImage {
        render::to_image(symbol, self.config.module_size(), self.config.quiet_zone())
    }

    /// Write the symbol as a PNG stream
    pub fn write_png<W: Write>(&self, symbol: &Symbol, writer: W) -> Result<()> {
        render::write_png(
            symbol,
            self.config.module_size(),
            self.config.quiet_zone(),
            writer,
        )
    }

    /// Save the symbol as a PNG file. The path must end in `.png`.
    pub fn save_png<P: AsRef<Path>>(&self, symbol: &Symbol, path: P) -> Result<()> {
        let path = path.as_ref();
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            return Err(QrError::InvalidFileName(path.to_path_buf()));
        }

        let file = File::create(path)?;
        self.write_png(symbol, BufWriter::new(file))?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

/// Per-call state threaded through the encoding stages
struct BuildContext<'a> {
    ec_level: ECLevel,
    segments: Vec<DataSegment<'a>>,
    version: Version,
    layout: BlockLayout,
}

impl<'a> BuildContext<'a> {
    /// Validate and classify the input, then pick the version
    fn new<S: AsRef<[u8]>>(segments: &'a [S], ec_level: ECLevel) -> Result<Self> {
        if segments.is_empty() {
            return Err(QrError::NoSegments);
        }
        if let Some(index) = segments.iter().position(|s| s.as_ref().is_empty()) {
            return Err(QrError::EmptySegment { index });
        }

        let segments: Vec<DataSegment<'a>> =
            segments.iter().map(|s| DataSegment::new(s.as_ref())).collect();
        let version = select_version(&segments, ec_level)?;
        let layout = BlockLayout::lookup(version, ec_level);
        debug!(
            "version {} level {}: {} segments, {} data codewords in {} blocks of ecc {}",
            version,
            ec_level,
            segments.len(),
            layout.max_data_codewords(),
            layout.total_blocks(),
            layout.ecc_per_block
        );

        Ok(Self {
            ec_level,
            segments,
            version,
            layout,
        })
    }

    fn data_codewords(&self) -> Result<Vec<u8>> {
        CodewordEncoder::encode(&self.segments, self.version, self.layout.max_data_codewords())
    }

    /// Skeleton plus codeword bits, before masking
    fn place(&self, codewords: &[u8]) -> Result<ModuleMatrix> {
        let mut matrix = FunctionPatterns::build(self.version);
        place_codewords(&mut matrix, codewords)?;
        Ok(matrix)
    }

    /// Commit the best mask, then write format and version information
    fn finish(self, unmasked: ModuleMatrix) -> Symbol {
        let choice = select_mask(&unmasked);
        debug!(
            "mask {} selected with penalty {}",
            choice.mask_pattern.id(),
            choice.score.total()
        );

        let mut matrix = choice.matrix;
        VersionInfo::write(&mut matrix, self.version);
        FormatInfo::new(self.ec_level, choice.mask_pattern).write(&mut matrix);
        Symbol::new(self.version, self.ec_level, choice.mask_pattern, matrix)
    }
}
