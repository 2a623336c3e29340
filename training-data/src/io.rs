//! Dataset files: a JSON array in, a pretty-printed JSON array out.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::errors::Result;
use crate::types::CodeSample;

/// Read `[{code_id, code, label}, ...]`.
pub fn read_samples(path: impl AsRef<Path>) -> Result<Vec<CodeSample>> {
    let f = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(f))?)
}

/// Write `items` as a JSON array indented with four spaces.
pub fn write_pretty<T: Serialize>(path: impl AsRef<Path>, items: &[T]) -> Result<()> {
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    let mut ser = Serializer::with_formatter(&mut w, PrettyFormatter::with_indent(b"    "));
    items.serialize(&mut ser)?;
    w.flush()?;
    Ok(())
}
