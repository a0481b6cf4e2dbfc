/// Pixel rasters of a symbol, quiet zone included
use image::{GrayImage, Luma};

use super::png::image_dimension;
use crate::models::Symbol;

/// Pixel grid, `true` = black
pub fn to_pixels(symbol: &Symbol, module_size: usize, quiet_zone: usize) -> Vec<Vec<bool>> {
    let width = image_dimension(symbol.dimension(), module_size, quiet_zone);
    let module_at = |p: usize| {
        p.checked_sub(quiet_zone)
            .and_then(|offset| offset.checked_div(module_size))
            .filter(|&m| m < symbol.dimension())
    };
    (0..width)
        .map(|y| {
            (0..width)
                .map(|x| match (module_at(y), module_at(x)) {
                    (Some(row), Some(col)) => symbol.is_dark(row, col),
                    _ => false,
                })
                .collect()
        })
        .collect()
}

/// 8-bit grayscale image, black 0 and white 255
pub fn to_image(symbol: &Symbol, module_size: usize, quiet_zone: usize) -> GrayImage {
    let pixels = to_pixels(symbol, module_size, quiet_zone);
    let width = pixels.len() as u32;
    GrayImage::from_fn(width, width, |x, y| {
        if pixels[y as usize][x as usize] {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}
