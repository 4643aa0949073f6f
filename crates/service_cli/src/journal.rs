//! Persistent operation journal and session history.
//!
//! Every priced result is appended to the journal file as one line:
//!
//! ```text
//! 2026-01-05 14:03:22,MC,EUROPEAN_CALL {S=100.0000, ...},10.448812,nsim=100000,antithetic=true,seed=42
//! ```
//!
//! Entries made during an invocation also accumulate in memory and are
//! appended to the history file by [`Journal::save_history`]. At start the
//! last `history_limit` history lines are loaded back.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use csv::Writer;
use pricer_models::instruments::OptionContract;
use tracing::debug;

use crate::Result;

/// Timestamp layout of journal lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Journal tag for analytic prices.
pub const TAG_ANALYTIC: &str = "ANALYTIC";
/// Journal tag for Monte Carlo prices.
pub const TAG_MC: &str = "MC";
/// Journal tag for coordinator prices.
pub const TAG_MC_PARALLEL: &str = "MC_PARALLEL";
/// Journal tag for implied-volatility solves.
pub const TAG_IMPLIED_VOL: &str = "IMPLIED_VOL";

/// Builds a contract journal line.
pub fn format_entry(
    timestamp: &str,
    tag: &str,
    contract: &OptionContract,
    value: f64,
    meta: &str,
) -> String {
    format!("{timestamp},{tag},{contract},{value:.6},{meta}")
}

fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Splits a journal line into timestamp, tag and remainder.
fn split_entry(line: &str) -> (&str, &str, &str) {
    let mut parts = line.splitn(3, ',');
    let timestamp = parts.next().unwrap_or_default();
    let tag = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or_default();
    (timestamp, tag, rest)
}

/// Operation journal bound to a log file and a history file.
#[derive(Debug)]
pub struct Journal {
    log_path: PathBuf,
    history_path: PathBuf,
    previous: Vec<String>,
    session: Vec<String>,
}

impl Journal {
    /// Opens the journal and loads the last `history_limit` history lines.
    ///
    /// A missing history file yields an empty history.
    pub fn open(
        log_path: impl Into<PathBuf>,
        history_path: impl Into<PathBuf>,
        history_limit: usize,
    ) -> Result<Self> {
        let history_path = history_path.into();
        let previous = if history_path.exists() {
            let mut lines = read_lines(&history_path)?;
            let skip = lines.len().saturating_sub(history_limit);
            lines.drain(..skip);
            lines
        } else {
            Vec::new()
        };
        debug!(loaded = previous.len(), path = %history_path.display(), "history loaded");

        Ok(Self {
            log_path: log_path.into(),
            history_path,
            previous,
            session: Vec::new(),
        })
    }

    /// Journal file path.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// History lines loaded at start followed by this session's entries.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.previous
            .iter()
            .chain(self.session.iter())
            .map(String::as_str)
    }

    /// Number of history lines loaded at start.
    pub fn loaded_count(&self) -> usize {
        self.previous.len()
    }

    /// Records a priced result and appends it to the journal file.
    pub fn record(
        &mut self,
        tag: &str,
        contract: &OptionContract,
        value: f64,
        meta: &str,
    ) -> Result<String> {
        let entry = format_entry(&now(), tag, contract, value, meta);
        self.append(entry.clone())?;
        Ok(entry)
    }

    /// Records an event that is not tied to a single contract.
    pub fn note(&mut self, tag: &str, message: &str) -> Result<String> {
        let entry = format!("{},{tag},{message}", now());
        self.append(entry.clone())?;
        Ok(entry)
    }

    fn append(&mut self, entry: String) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{entry}")?;
        self.session.push(entry);
        Ok(())
    }

    /// Last `n` journal lines, oldest first. A missing journal is empty.
    pub fn tail(&self, n: usize) -> Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }
        let mut lines = read_lines(&self.log_path)?;
        let skip = lines.len().saturating_sub(n);
        lines.drain(..skip);
        Ok(lines)
    }

    /// Truncates the journal file.
    pub fn clear(&self) -> Result<()> {
        File::create(&self.log_path)?;
        Ok(())
    }

    /// Writes the journal as `timestamp,tag,entry` CSV; returns the row count.
    pub fn export_log(&self, out: impl AsRef<Path>) -> Result<usize> {
        let lines = self.tail(usize::MAX)?;
        let mut writer = Writer::from_path(out)?;
        writer.write_record(["timestamp", "tag", "entry"])?;
        for line in &lines {
            let (timestamp, tag, rest) = split_entry(line);
            writer.write_record([timestamp, tag, rest])?;
        }
        writer.flush()?;
        Ok(lines.len())
    }

    /// Writes the session history as `timestamp,entry` CSV; returns the row count.
    pub fn export_history(&self, out: impl AsRef<Path>) -> Result<usize> {
        let mut writer = Writer::from_path(out)?;
        writer.write_record(["timestamp", "entry"])?;
        let mut rows = 0;
        for line in self.history() {
            let (timestamp, rest) = line.split_once(',').unwrap_or((line, ""));
            writer.write_record([timestamp, rest])?;
            rows += 1;
        }
        writer.flush()?;
        Ok(rows)
    }

    /// Appends this session's entries to the history file and forgets them.
    pub fn save_history(&mut self) -> Result<()> {
        if self.session.is_empty() {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.history_path)?;
        for entry in &self.session {
            writeln!(file, "{entry}")?;
        }
        self.previous.append(&mut self.session);
        Ok(())
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    Ok(lines)
}
