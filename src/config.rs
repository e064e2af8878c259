use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything the packer used to hard-code. `Default` reproduces the font ROM
/// layout the hardware expects: 255 glyphs of 6×8 pixels, 64-digit rows.
#[derive(Clone, Debug)]
pub struct PackerConfig {
    pub bitmap_dir: PathBuf,
    pub output_path: PathBuf,
    pub glyph_count: usize,
    pub glyph_width: usize,
    pub glyph_height: usize,
    pub block_width: usize,
    pub filler: String,
    pub indent: String,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ConfigError {
    #[error("glyph count must be at least 1")]
    NoGlyphs,
    #[error("glyph width must be at least 1")]
    ZeroWidth,
    #[error("glyph height {0} does not fit in a column byte")]
    BadHeight(usize),
    #[error("block width must be at least 1")]
    ZeroBlockWidth,
}

impl Default for PackerConfig {
    fn default() -> Self {
        PackerConfig {
            bitmap_dir: PathBuf::from("bitmaps"),
            output_path: PathBuf::from("meminit.vhd"),
            glyph_count: 255,
            glyph_width: 6,
            glyph_height: 8,
            block_width: 64,
            filler: String::from("00"),
            indent: String::from("    "),
        }
    }
}

impl PackerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.glyph_count == 0 {
            return Err(ConfigError::NoGlyphs);
        }
        if self.glyph_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.glyph_height == 0 || self.glyph_height > 8 {
            return Err(ConfigError::BadHeight(self.glyph_height));
        }
        if self.block_width == 0 {
            return Err(ConfigError::ZeroBlockWidth);
        }
        Ok(())
    }
}

pub fn glyph_file(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("{:02}.bmp", index))
}
