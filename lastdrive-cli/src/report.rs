use anyhow::{Context, Result};
use lastdrive_game::{DrawCounts, DriveSummary};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

/// Machine-readable record of one drive.
#[derive(Debug, Serialize)]
pub struct DriveReport<'a> {
    pub version: &'static str,
    pub draws: DrawCounts,
    #[serde(flatten)]
    pub summary: &'a DriveSummary,
}

impl<'a> DriveReport<'a> {
    pub const fn new(summary: &'a DriveSummary, draws: DrawCounts) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            draws,
            summary,
        }
    }
}

pub fn write_json_report(report: &DriveReport<'_>, output: Option<PathBuf>) -> Result<()> {
    let mut target = OutputTarget::new(output)?;
    serde_json::to_writer_pretty(target.writer(), report).context("serializing drive report")?;
    writeln!(target.writer())?;
    target.flush_inner().context("flushing drive report")?;
    Ok(())
}

pub enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    pub fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    pub fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
