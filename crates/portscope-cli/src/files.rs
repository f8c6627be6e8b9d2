//! Line-oriented banner file reading.

use anyhow::{Context as _, Result};
use flate2::read::GzDecoder;
use portscope_core::Banner;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

/// A downloaded banner file, read line by line.
///
/// Files ending in `.gz` are decompressed transparently. Each non-blank
/// line holds one JSON banner document; a malformed line ends the
/// iteration with an error naming its line number.
pub struct BannerFile {
    lines: Lines<BufReader<Box<dyn Read>>>,
    line_no: usize,
}

impl BannerFile {
    /// Open a plain or gzip-compressed banner file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("could not open {}", path.display()))?;

        let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        Ok(Self {
            lines: BufReader::new(reader).lines(),
            line_no: 0,
        })
    }
}

impl Iterator for BannerFile {
    type Item = Result<Banner>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(
                serde_json::from_str(&line)
                    .with_context(|| format!("malformed banner on line {}", self.line_no)),
            );
        }
    }
}
