use thiserror::Error;

/// One packed character cell. Each entry is a column with row 0 in bit 7.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Glyph {
    pub columns: Vec<u8>,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum GlyphError {
    #[error("glyph has {found} pixel samples, needs at least {needed}")]
    TooFewSamples { found: usize, needed: usize },
}

impl Glyph {
    /// Packs a row-major run of samples, `width` per row. Any nonzero sample
    /// is a lit pixel. Samples past `width * height` are ignored.
    pub fn from_samples(samples: &[u8], width: usize, height: usize) -> Result<Glyph, GlyphError> {
        let needed = width * height;
        if samples.len() < needed {
            return Err(GlyphError::TooFewSamples { found: samples.len(), needed });
        }
        let columns = (0..width)
            .map(|c| {
                (0..height)
                    .filter(|r| samples[c + width * r] != 0)
                    .fold(0u8, |byte, r| byte | 1u8 << (7 - r))
            })
            .collect();
        Ok(Glyph { columns })
    }

    pub fn high_nibbles(&self) -> String {
        self.columns.iter().map(|c| format!("{:x}", c >> 4)).collect()
    }

    pub fn low_nibbles(&self) -> String {
        self.columns.iter().map(|c| format!("{:x}", c & 0xf)).collect()
    }
}
