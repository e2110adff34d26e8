//! Runs the full benchmark battery and streams results to a progress sink.

use std::sync::mpsc;

use crate::{Error, Result, SizerLimits, catalog, encode_record, measure_variant};

/// Receives benchmark results as they are produced, one record per variant,
/// followed by exactly one completion signal.
///
/// Implement this to connect the suite to whatever host is displaying progress.
/// A ready-made implementation exists for [`mpsc::Sender<SuiteEvent>`], which
/// lets a host consume results from another thread.
pub trait ProgressSink {
    /// Delivers one encoded result record (see [`encode_record`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SinkClosed`] when the record cannot be delivered; this
    /// aborts the suite run.
    fn record(&mut self, record: &str) -> Result<()>;

    /// Signals that every variant has been reported and no further records
    /// will follow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SinkClosed`] when the signal cannot be delivered.
    fn finished(&mut self) -> Result<()>;
}

/// One message from a suite run to a channel-connected host.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SuiteEvent {
    /// The encoded result record of one benchmark variant.
    Record(String),

    /// The suite has reported every variant; no further events follow.
    Finished,
}

impl ProgressSink for mpsc::Sender<SuiteEvent> {
    fn record(&mut self, record: &str) -> Result<()> {
        self.send(SuiteEvent::Record(record.to_string()))
            .map_err(|_| Error::SinkClosed)
    }

    fn finished(&mut self) -> Result<()> {
        self.send(SuiteEvent::Finished).map_err(|_| Error::SinkClosed)
    }
}

/// Executes the full benchmark battery with production limits, delivering one
/// record per catalog variant, in catalog order, then exactly one completion
/// signal.
///
/// The number of records delivered always equals [`crate::test_count()`]. A
/// variant whose allocations all fail is reported as a null record rather than
/// skipped, so hosts sizing a progress display by `test_count()` stay in sync.
///
/// The run is synchronous: it returns once the completion signal is delivered.
///
/// # Errors
///
/// Returns [`Error::SinkClosed`] when the sink rejects a record or the
/// completion signal. The benchmarks themselves cannot fail.
#[cfg_attr(test, mutants::skip)] // Trivial delegation; production limits are too slow for tests.
pub fn run_suite(sink: &mut impl ProgressSink) -> Result<()> {
    run_suite_with(SizerLimits::default(), sink)
}

/// Executes the full benchmark battery with caller-provided sizer limits.
///
/// Behaves exactly like [`run_suite()`] otherwise. Mainly useful for hosts that
/// want a quicker, coarser run, and for tests.
///
/// # Errors
///
/// Returns [`Error::SinkClosed`] when the sink rejects a record or the
/// completion signal.
pub fn run_suite_with(limits: SizerLimits, sink: &mut impl ProgressSink) -> Result<()> {
    for variant in catalog() {
        let measurement = measure_variant(&variant, limits);
        sink.record(&encode_record(variant.label(), &measurement))?;
    }

    sink.finished()
}
