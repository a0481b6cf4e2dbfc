/// Module grid
pub mod matrix;
/// Version, levels, masks, modes and the finished symbol
pub mod qr_code;

pub use matrix::{Module, ModuleMatrix};
pub use qr_code::{ECLevel, EncodingMode, MaskPattern, Symbol, Version};
