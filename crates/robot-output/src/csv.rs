//! CSV output backend.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::Writer;

use crate::writer::TrialWriter;
use crate::{OutputResult, TrialRow};

/// Writes one CSV row per trial, after a header row.
pub struct CsvTrialWriter<W: io::Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvTrialWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: io::Write> CsvTrialWriter<W> {
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(out);
        inner.write_record(TrialRow::HEADER)?;
        Ok(Self { inner, finished: false })
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.inner.flush()?;
        self.inner
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: io::Write> TrialWriter for CsvTrialWriter<W> {
    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()> {
        self.inner.write_record(&[
            row.trial.to_string(),
            row.parcels.to_string(),
            row.turns_a.to_string(),
            row.turns_b.to_string(),
            row.wasted_a.to_string(),
            row.wasted_b.to_string(),
            (row.converged_a as u8).to_string(),
            (row.converged_b as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
