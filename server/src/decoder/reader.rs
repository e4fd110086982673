use flate2::read::MultiGzDecoder;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::trace;

use super::{CombatLogEntry, DemoEvent, DemoStream, FileInfo};
use crate::error::DecodeError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Longest single message accepted from a demo export.
pub const MAX_LINE_BYTES: usize = 16 * 1024 * 1024;

/// One line of an exported demo stream.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DemoMessage {
    FileInfo(FileInfo),
    CombatLogEntry(CombatLogEntry),
    StringTable {
        table: String,
        index: i32,
        value: String,
    },
    #[serde(other)]
    Unhandled,
}

/// Reads a gzip-compressed, newline-delimited JSON demo export.
///
/// String table updates are applied as they are read, so lookups reflect the
/// tables at the reader's current position in the stream.
pub struct DemoReader<R> {
    lines: R,
    line_number: usize,
    max_line_bytes: usize,
    buffer: String,
    string_tables: HashMap<String, HashMap<i32, String>>,
}

/// A [`DemoReader`] over a compressed container read from `I`. Every gzip
/// member is read; bytes after the last member that are not a gzip member
/// fail the pass.
pub type ContainerReader<I> = DemoReader<BufReader<MultiGzDecoder<BufReader<I>>>>;

impl ContainerReader<File> {
    pub fn open_path(path: &Path) -> Result<Self, DecodeError> {
        let file = File::open(path)?;
        DemoReader::open(file)
    }
}

impl<I: Read> ContainerReader<I> {
    /// Checks the container header and prepares a single forward pass over
    /// `input`.
    pub fn open(input: I) -> Result<Self, DecodeError> {
        let mut input = BufReader::new(input);
        let header = input.fill_buf()?;
        if header.is_empty() {
            return Err(DecodeError::InvalidContainer("stream is empty".to_string()));
        }
        if !header.starts_with(&GZIP_MAGIC) {
            return Err(DecodeError::InvalidContainer(
                "missing gzip header".to_string(),
            ));
        }

        Ok(DemoReader::from_lines(BufReader::new(MultiGzDecoder::new(input))))
    }
}

impl<R: BufRead> DemoReader<R> {
    /// Wraps an already decompressed message stream.
    pub fn from_lines(lines: R) -> Self {
        Self {
            lines,
            line_number: 0,
            max_line_bytes: MAX_LINE_BYTES,
            buffer: String::new(),
            string_tables: HashMap::new(),
        }
    }

    pub fn with_max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.max_line_bytes = max_line_bytes;
        self
    }

    fn next_message(&mut self) -> Result<Option<DemoMessage>, DecodeError> {
        loop {
            self.buffer.clear();
            let limit = self.max_line_bytes as u64 + 1;
            if (&mut self.lines).take(limit).read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            if self.buffer.len() > self.max_line_bytes {
                return Err(DecodeError::LineTooLong {
                    line: self.line_number,
                    limit: self.max_line_bytes,
                });
            }

            let line = self.buffer.trim();
            if line.is_empty() {
                continue;
            }

            return serde_json::from_str(line)
                .map(Some)
                .map_err(|source| DecodeError::Malformed {
                    line: self.line_number,
                    source,
                });
        }
    }
}

impl<R: BufRead> DemoStream for DemoReader<R> {
    fn next_event(&mut self) -> Result<Option<DemoEvent>, DecodeError> {
        while let Some(message) = self.next_message()? {
            match message {
                DemoMessage::FileInfo(info) => return Ok(Some(DemoEvent::FileInfo(info))),
                DemoMessage::CombatLogEntry(entry) => return Ok(Some(DemoEvent::CombatLog(entry))),
                DemoMessage::StringTable { table, index, value } => {
                    self.string_tables.entry(table).or_default().insert(index, value);
                }
                DemoMessage::Unhandled => {
                    trace!("Skipping unhandled demo message on line {}", self.line_number);
                }
            }
        }
        Ok(None)
    }

    fn lookup_string(&self, table: &str, index: i32) -> Option<&str> {
        self.string_tables
            .get(table)
            .and_then(|entries| entries.get(&index))
            .map(String::as_str)
    }
}
