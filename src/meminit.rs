use std::io::Write;
use log::info;
use super::config::PackerConfig;
use super::planes::NibblePlanes;

/// First label for the top plane: the bottom row count rounded up to a power
/// of two, so the top half of the ROM starts on an address boundary.
pub fn row_label_base(rows: usize) -> usize {
    rows.next_power_of_two()
}

pub fn format_row(row: usize, chunk: &str, indent: &str) -> String {
    let payload: String = chunk.chars().rev().collect();
    format!("{}INIT_{:02X} => X\"{}\",\n", indent, row, payload)
}

/// Writes `stream` in `block`-character rows starting at label `first_row`
/// and returns the label following the last row written.
pub fn write_rows<W: Write>(output: &mut W, stream: &str, first_row: usize, block: usize, indent: &str)
    -> anyhow::Result<usize> {
    let mut row = first_row;
    let mut rest = stream;
    while !rest.is_empty() {
        let split = block.min(rest.len());
        let (chunk, tail) = rest.split_at(split);
        output.write_all(format_row(row, chunk, indent).as_bytes())?;
        rest = tail;
        row += 1;
    }
    Ok(row)
}

pub fn write_meminit<W: Write>(output: &mut W, planes: &NibblePlanes, config: &PackerConfig)
    -> anyhow::Result<()> {
    let bottom_end = write_rows(output, &planes.bottom, 0, config.block_width, &config.indent)?;
    let top_start = row_label_base(bottom_end);
    let top_end = write_rows(output, &planes.top, top_start, config.block_width, &config.indent)?;
    info!("wrote {} bottom rows, {} top rows from INIT_{:02X}", bottom_end, top_end - top_start, top_start);
    Ok(())
}
