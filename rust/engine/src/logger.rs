use serde::{Deserialize, Serialize};

use crate::round::{RoundSummary, SettlementEntry};

/// Complete record of one round: the wagers staked, how every hand settled,
/// and the balances left behind. Serialized to JSONL for session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    pub wagers: Vec<(String, u32)>,
    pub settlements: Vec<SettlementEntry>,
    pub balances: Vec<(String, u32)>,
    /// Timestamp when the round finished (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_summary(round_id: String, summary: &RoundSummary) -> Self {
        Self {
            round_id,
            wagers: summary.wagers.clone(),
            settlements: summary.settlements.clone(),
            balances: summary.balances.clone(),
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends round records to a JSONL file, one line per round, flushed as
/// they are written.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger with no backing file, for exercising id sequencing.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
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
        Ok(())
    }
}
