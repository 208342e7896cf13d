use crate::{OutputResult, TrialRow};

/// A sink for comparison trials.
pub trait TrialWriter {
    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()>;

    /// Flush buffered rows.  Calling it more than once is harmless.
    fn finish(&mut self) -> OutputResult<()>;
}
