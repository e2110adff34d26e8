//! The settled outcome of a benchmark variant and its derived metrics.

use std::time::Duration;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// The settled outcome of one benchmark variant: the raw measurements of the
/// last trial whose allocation succeeded and whose duration is known.
///
/// Derived metrics are computed on demand from these measurements, never stored.
/// A variant for which no allocation ever succeeded settles on the *null*
/// measurement (zero element count, zero duration), whose derived metrics are
/// both exactly zero.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Measurement {
    element_count: u64,
    element_bytes: u64,
    repetitions: u32,
    duration: Duration,
}

impl Measurement {
    /// The outcome of a variant for which no allocation ever succeeded.
    pub(crate) const NULL: Self = Self {
        element_count: 0,
        element_bytes: 0,
        repetitions: 0,
        duration: Duration::ZERO,
    };

    pub(crate) fn new(
        element_count: u64,
        element_bytes: u64,
        repetitions: u32,
        duration: Duration,
    ) -> Self {
        Self {
            element_count,
            element_bytes,
            repetitions,
            duration,
        }
    }

    /// Number of elements in the settled trial's buffer.
    #[must_use]
    pub fn element_count(&self) -> u64 {
        self.element_count
    }

    /// Size of one element in bytes.
    #[must_use]
    pub fn element_bytes(&self) -> u64 {
        self.element_bytes
    }

    /// How many passes over the buffer the settled trial performed.
    #[must_use]
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Wall-clock duration of the settled trial.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether this is the null measurement, meaning no allocation succeeded.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.element_count == 0
    }

    /// Element writes completed per second.
    ///
    /// Exactly zero when the element count or the duration is zero, strictly
    /// positive otherwise.
    #[must_use]
    pub fn throughput(&self) -> f64 {
        if self.element_count == 0 || self.duration.is_zero() {
            return 0.0;
        }

        let operations = self.element_count as f64 * f64::from(self.repetitions);
        operations / self.duration.as_secs_f64()
    }

    /// Data volume written per second, in MiB/s.
    ///
    /// Exactly zero when the element count or the duration is zero, strictly
    /// positive otherwise.
    #[must_use]
    pub fn bandwidth_mib_s(&self) -> f64 {
        if self.element_count == 0 || self.duration.is_zero() {
            return 0.0;
        }

        let bytes_processed =
            self.element_count as f64 * self.element_bytes as f64 * f64::from(self.repetitions);

        (bytes_processed / BYTES_PER_MIB) / self.duration.as_secs_f64()
    }
}
