//! Converts the KANJIDIC2 and JMdict dictionaries into simplified JSON files.

mod error;
mod input;
mod output;

pub use self::{
    error::{Error, Result},
    input::{jmdict, kanjidic2},
    output::{kanjifile, vocabfile},
};
use serde::{de::DeserializeOwned, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// Deserializes one of the input files from XML.
/// The whole document is read into memory.
pub fn read_xml<T, R>(reader: R) -> Result<T>
where
    T: DeserializeOwned,
    R: Read,
{
    let value = serde_xml_rs::from_reader(BufReader::new(reader))?;
    Ok(value)
}

/// Writes the value as JSON indented with two spaces.
/// Non-ASCII characters are written as-is.
pub fn write_json<T, W>(writer: W, value: &T) -> Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
