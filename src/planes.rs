use log::debug;
use super::glyph::Glyph;

/// The two hex-digit streams the ROM is built from. `top` collects high
/// nibbles, `bottom` low nibbles, both in glyph then column order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NibblePlanes {
    pub top: String,
    pub bottom: String,
}

impl NibblePlanes {
    pub fn new() -> NibblePlanes {
        NibblePlanes::default()
    }

    pub fn push_glyph(&mut self, glyph: &Glyph, filler: &str) {
        self.top.push_str(&glyph.high_nibbles());
        self.top.push_str(filler);
        self.bottom.push_str(&glyph.low_nibbles());
        self.bottom.push_str(filler);
    }

    pub fn pad(&mut self, block: usize) {
        let added = pad_stream(&mut self.bottom, block);
        debug!("bottom plane padded by {} to {}", added, self.bottom.len());
        let added = pad_stream(&mut self.top, block);
        debug!("top plane padded by {} to {}", added, self.top.len());
    }
}

/// Never zero: an aligned stream still gets a whole block of padding.
pub fn pad_length(len: usize, block: usize) -> usize {
    block - len % block
}

pub fn pad_stream(stream: &mut String, block: usize) -> usize {
    let added = pad_length(stream.len(), block);
    stream.extend(std::iter::repeat('0').take(added));
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_push_glyph() {
        let mut planes = NibblePlanes::new();
        planes.push_glyph(&Glyph { columns: vec![0xff, 0, 0, 0, 0, 0] }, "00");
        assert_eq!(planes.top, "f0000000");
        assert_eq!(planes.bottom, "f0000000");
        planes.push_glyph(&Glyph { columns: vec![0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc] }, "00");
        assert_eq!(planes.top, "f000000013579b00");
        assert_eq!(planes.bottom, "f00000002468ac00");
    }

    #[test]
    fn can_compute_pad_length() {
        assert_eq!(pad_length(0, 64), 64);
        assert_eq!(pad_length(1, 64), 63);
        assert_eq!(pad_length(63, 64), 1);
        assert_eq!(pad_length(64, 64), 64);
        assert_eq!(pad_length(2040, 64), 8);
        for len in 0..300 {
            let pad = pad_length(len, 64);
            assert!(pad >= 1 && pad <= 64);
            assert_eq!((len + pad) % 64, 0);
        }
    }

    #[test]
    fn can_pad_aligned_stream() {
        let mut stream = "a".repeat(128);
        assert_eq!(pad_stream(&mut stream, 64), 64);
        assert_eq!(stream.len(), 192);
        assert!(stream.ends_with(&"0".repeat(64)));
    }

    #[test]
    fn can_pad_planes() {
        let mut planes = NibblePlanes::new();
        for _ in 0..255 {
            planes.push_glyph(&Glyph { columns: vec![0; 6] }, "00");
        }
        assert_eq!(planes.bottom.len(), 2040);
        assert_eq!(planes.top.len(), 2040);
        planes.pad(64);
        assert_eq!(planes.bottom.len(), 2048);
        assert_eq!(planes.top.len(), 2048);
    }
}
