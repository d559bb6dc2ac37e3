use crate::{config::Config, elements::parse_tle_collection, Error};
use std::{fs, io, path::Path};
use tracing::info;

/// Read TLE text, write the element sets in the configured format.
///
/// Returns the number of element sets written.
pub fn convert<R: io::Read, W: io::Write>(
    mut reader: R,
    mut writer: W,
    config: &Config,
) -> Result<usize, Error> {
    config.validate()?;

    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let sets = parse_tle_collection(&text, config.trailing_lines)?;
    config
        .format
        .write(&config.collection_name, &sets, &mut writer)?;
    writer.flush()?;

    info!(
        records = sets.len(),
        format = ?config.format,
        "Converted TLE collection"
    );
    Ok(sets.len())
}

/// Convert one file into another.
///
/// The output file is only created once the whole input converted, an
/// existing one is left untouched on error.
pub fn convert_file<I: AsRef<Path>, O: AsRef<Path>>(
    input: I,
    output: O,
    config: &Config,
) -> Result<usize, Error> {
    let reader = io::BufReader::new(fs::File::open(input)?);
    let mut rendered = Vec::new();
    let records = convert(reader, &mut rendered, config)?;
    fs::write(output, rendered)?;
    Ok(records)
}
