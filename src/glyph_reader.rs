use std::path::PathBuf;
use anyhow::Context;
use log::trace;
use super::config::glyph_file;
use super::glyph::Glyph;

pub trait GlyphSource {
    fn load_glyph(&mut self, index: usize, width: usize, height: usize) -> anyhow::Result<Glyph>;
}

/// A directory of `NN.bmp` files, one per glyph.
pub struct BmpDirectory {
    pub dir: PathBuf,
}

impl BmpDirectory {
    pub fn new<P: Into<PathBuf>>(dir: P) -> BmpDirectory {
        BmpDirectory { dir: dir.into() }
    }
}

impl GlyphSource for BmpDirectory {
    fn load_glyph(&mut self, index: usize, width: usize, height: usize) -> anyhow::Result<Glyph> {
        let path = glyph_file(&self.dir, index);
        trace!("loading glyph {} from {}", index, path.display());
        // The decoded image is dropped before the next file is opened.
        let samples = image::open(&path)
            .with_context(|| format!("cannot read bitmap {}", path.display()))?
            .to_luma8()
            .into_raw();
        let glyph = Glyph::from_samples(&samples, width, height)
            .with_context(|| format!("malformed glyph {}", path.display()))?;
        Ok(glyph)
    }
}
