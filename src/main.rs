mod config;
mod glyph;
mod glyph_reader;
mod planes;
mod meminit;
mod packer;

use crate::config::PackerConfig;
use crate::packer::run;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PackerConfig::default();
    run(&config)
}
