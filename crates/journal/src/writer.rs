//! Append-only JSON-lines writer.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::{Outcome, StackSnapshot};
use crate::record::JournalRecord;
use crate::types::MenuChoice;

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Session journal; a disabled journal accepts and drops every record.
pub struct Journal {
    sink: Option<BufWriter<File>>,
    path: Option<PathBuf>,
    seq: u64,
    buf: Vec<u8>,
}

impl Journal {
    /// Journal that writes nothing.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            path: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    /// Open (or create) `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open journal {}", path.display()))?;

        Ok(Self {
            sink: Some(BufWriter::new(file)),
            path: Some(path.to_path_buf()),
            seq: 0,
            buf: Vec::with_capacity(512),
        })
    }

    /// Open `path` if given, falling back to a disabled journal on failure.
    pub fn open_or_disabled(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::disabled();
        };
        match Self::open(path) {
            Ok(journal) => journal,
            Err(e) => {
                eprintln!("[Journal] disabled: {:#}", e);
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Sequence number of the last turn or exit record
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record_start(&mut self, seed: u32, snap: &StackSnapshot) {
        self.write(&JournalRecord::start(now_ms(), seed, snap));
    }

    pub fn record_turn(
        &mut self,
        input: &str,
        code: Option<i64>,
        choice: Option<MenuChoice>,
        outcome: &Outcome,
        snap: &StackSnapshot,
    ) {
        if !self.is_enabled() {
            return;
        }
        self.seq += 1;
        let rec = JournalRecord::turn(self.seq, now_ms(), input, code, choice, outcome, snap);
        self.write(&rec);
    }

    pub fn record_exit(&mut self, turns: u32) {
        if !self.is_enabled() {
            return;
        }
        self.seq += 1;
        self.write(&JournalRecord::exit(self.seq, now_ms(), turns));
    }

    fn write(&mut self, rec: &JournalRecord) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        self.buf.clear();
        if let Err(e) = serde_json::to_writer(&mut self.buf, rec) {
            eprintln!("[Journal] failed to encode record: {}", e);
            return;
        }
        self.buf.push(b'\n');

        let res = sink.write_all(&self.buf).and_then(|_| sink.flush());
        if let Err(e) = res {
            let path = self
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            eprintln!("[Journal] write to {} failed, journal disabled: {}", path, e);
            self.sink = None;
        }
    }
}
