use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::data::models::{CedictError, DictEntry};
use crate::utils::ensure_parent_dir;

const INDENT: &[u8] = b"  ";

/// Writes `entries` as an indented JSON array. Non-ASCII text is written as-is.
pub fn write_entries<W: Write>(mut writer: W, entries: &[DictEntry]) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    entries.serialize(&mut serializer)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)
}

pub fn read_entries<R: Read>(reader: R) -> serde_json::Result<Vec<DictEntry>> {
    serde_json::from_reader(reader)
}

/// Saves `entries` to `path`, creating missing parent directories.
pub fn save_entries(path: &Path, entries: &[DictEntry]) -> Result<(), CedictError> {
    let write_error = |source| CedictError::Write {
        path: path.to_path_buf(),
        source,
    };

    ensure_parent_dir(path).map_err(write_error)?;
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    write_entries(&mut writer, entries).map_err(|e| {
        if e.is_io() {
            write_error(io::Error::from(e))
        } else {
            CedictError::Json(e)
        }
    })?;
    writer.flush().map_err(write_error)
}

pub fn load_entries(path: &Path) -> Result<Vec<DictEntry>, CedictError> {
    let file = File::open(path).map_err(|source| CedictError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_entries(BufReader::new(file))?)
}
