use std::fs::File;
use std::io::{BufWriter, Write};
use anyhow::Context;
use log::{debug, info};
use super::config::PackerConfig;
use super::glyph_reader::{BmpDirectory, GlyphSource};
use super::meminit::write_meminit;
use super::planes::NibblePlanes;

/// Loads every glyph in index order and returns both planes, already padded.
pub fn pack_glyphs<S: GlyphSource>(source: &mut S, config: &PackerConfig) -> anyhow::Result<NibblePlanes> {
    config.validate()?;
    let mut planes = NibblePlanes::new();
    for index in 0..config.glyph_count {
        let glyph = source.load_glyph(index, config.glyph_width, config.glyph_height)
            .with_context(|| format!("glyph {:02}", index))?;
        planes.push_glyph(&glyph, &config.filler);
    }
    debug!("packed {} glyphs into {} + {} digits", config.glyph_count, planes.bottom.len(), planes.top.len());
    planes.pad(config.block_width);
    Ok(planes)
}

pub fn run(config: &PackerConfig) -> anyhow::Result<()> {
    info!("packing {} glyphs from {} into {}",
          config.glyph_count, config.bitmap_dir.display(), config.output_path.display());
    let mut source = BmpDirectory::new(config.bitmap_dir.clone());
    // Glyphs are read before the output is created, so a bad bitmap leaves no file behind.
    let planes = pack_glyphs(&mut source, config)?;
    let file = File::create(&config.output_path)
        .with_context(|| format!("cannot create {}", config.output_path.display()))?;
    let mut output = BufWriter::new(file);
    write_meminit(&mut output, &planes, config)?;
    output.flush()?;
    Ok(())
}
