//! `TrialLogObserver<W>` — bridges `SimObserver` to a `TrialWriter`.

use robot_sim::{SimObserver, TrialRecord};

use crate::writer::TrialWriter;
use crate::{OutputError, OutputResult, TrialRow};

/// A [`SimObserver`] that writes every finished trial to a [`TrialWriter`].
///
/// Observer callbacks cannot fail, so the first write error is stored and
/// later trials are skipped.  [`finish`][Self::finish] reports it.
pub struct TrialLogObserver<W: TrialWriter> {
    writer:     W,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: TrialWriter> TrialLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Rows written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Report any stored error, otherwise flush the writer.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: TrialWriter> SimObserver for TrialLogObserver<W> {
    fn on_trial_end(&mut self, record: &TrialRecord) {
        if self.last_error.is_some() {
            return;
        }
        match self.writer.write_trial(&TrialRow::from(record)) {
            Ok(()) => self.written += 1,
            Err(e) => self.last_error = Some(e),
        }
    }
}
