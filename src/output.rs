//! Data structures for representing the output.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// The outlier word of one file.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct OFile {
    pub path: String,
    pub word: String,
    pub ratio: f64,
}

/// The outcome of a whole run: one entry per file that had any words,
/// in the order the files were processed.
#[derive(Clone, PartialEq, Debug, Default, Deserialize, Serialize)]
pub struct Output {
    pub files: Vec<OFile>,
}

/// How to render [Output].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `path: word`
    Plain,
    /// `path: word (ratio)`
    PlainWithRatio,
    Json,
    CompactJson,
}

pub fn pretty_ratio(ratio: f64) -> String {
    format!("{ratio:.3}")
}

impl Output {
    pub fn write<W: Write>(&self, mut writer: W, format: Format) -> io::Result<()> {
        match format {
            Format::Plain => {
                for f in &self.files {
                    writeln!(writer, "{}: {}", f.path, f.word)?;
                }
            }
            Format::PlainWithRatio => {
                for f in &self.files {
                    writeln!(writer, "{}: {} ({})", f.path, f.word, pretty_ratio(f.ratio))?;
                }
            }
            Format::Json => {
                serde_json::to_writer_pretty(&mut writer, self)?;
                writeln!(writer)?;
            }
            Format::CompactJson => {
                serde_json::to_writer(&mut writer, self)?;
                writeln!(writer)?;
            }
        }
        writer.flush()
    }
}
