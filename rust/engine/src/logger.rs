use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::board::{DealtBoard, Seat, Vulnerability};

/// One seat's hand as stored in the board history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub seat: Seat,
    /// `S.H.D.C` rank groups
    pub notation: String,
    pub hcp: u8,
    pub bpc: i32,
}

/// A dealt board, serialized as one JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardRecord {
    /// Unique identifier (format: YYYYMMDD-NNNNNN)
    pub board_id: String,
    pub board_number: u32,
    /// Deck seed, for replaying the deal
    pub seed: Option<u64>,
    pub dealer: Seat,
    pub vulnerability: Vulnerability,
    pub hands: Vec<SeatRecord>,
    /// RFC3339, filled in by the logger when absent
    #[serde(default)]
    pub ts: Option<String>,
}

impl BoardRecord {
    pub fn from_dealt(board_id: String, seed: Option<u64>, dealt: &DealtBoard) -> Self {
        let hands = Seat::ALL
            .iter()
            .map(|&seat| {
                let hand = dealt.hand(seat);
                SeatRecord {
                    seat,
                    notation: hand.to_string(),
                    hcp: hand.hcp(),
                    bpc: hand.bpc(),
                }
            })
            .collect();
        Self {
            board_id,
            board_number: dealt.board.number(),
            seed,
            dealer: dealt.board.dealer(),
            vulnerability: dealt.board.vulnerability(),
            hands,
            ts: None,
        }
    }
}

pub fn format_board_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct BoardLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn count_records(path: &Path) -> std::io::Result<u32> {
    let f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    let mut n = 0u32;
    for line in BufReader::new(f).lines() {
        if !line?.trim().is_empty() {
            n = n.saturating_add(1);
        }
    }
    Ok(n)
}

impl BoardLogger {
    /// Creates (or truncates) the history file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        ensure_parent(path.as_ref())?;
        let f = File::create(path)?;
        Ok(Self::with_file(f))
    }

    /// Opens the history file for appending, creating it if needed.
    ///
    /// Ids continue after the records already in the file, so ids stay
    /// unique across runs that share a history.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        ensure_parent(path)?;
        let existing = count_records(path)?;
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        let mut logger = Self::with_file(f);
        logger.seq = existing;
        Ok(logger)
    }

    fn with_file(f: File) -> Self {
        Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        }
    }

    /// Logger with a fixed date and no output file.
    #[cfg(test)]
    pub(crate) fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_board_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &BoardRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        tracing::trace!(board_id = %rec.board_id, "board logged");
        Ok(())
    }
}
