//! The workload sizer: grows a variant's buffer until a trial overruns the stop
//! threshold, then settles on the last successful trial.

use std::time::{Duration, Instant};

use log::debug;

use crate::element::Element;
use crate::partition::run_partitioned;
use crate::worker::{bulk_fill, indexed_write};
use crate::{AccessPattern, ElementWidth, Measurement, Variant};

/// Tunables of the workload growth loop.
///
/// The defaults are the production values; tests inject smaller ones so the
/// stopping rule and ceiling policy can be exercised without gigabyte
/// allocations or 100 ms waits.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use mem_bw::SizerLimits;
///
/// // Settle every variant on its very first trial.
/// let limits = SizerLimits::default().stop_after(Duration::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SizerLimits {
    max_bytes: usize,
    stop_after: Duration,
    initial_elements: usize,
    initial_repetitions: u32,
}

impl Default for SizerLimits {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024 * 1024,
            stop_after: Duration::from_millis(100),
            initial_elements: 1024,
            initial_repetitions: 10,
        }
    }
}

impl SizerLimits {
    /// Sets the ceiling on a single trial's buffer size, in bytes.
    ///
    /// Growth terminates before any trial whose buffer would exceed this.
    #[must_use]
    pub fn max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Sets the trial duration beyond which the growth loop stops and the trial
    /// that overran becomes the settled result.
    #[must_use]
    pub fn stop_after(mut self, stop_after: Duration) -> Self {
        self.stop_after = stop_after;
        self
    }

    /// Sets the element count of the first trial.
    #[must_use]
    pub fn initial_elements(mut self, initial_elements: usize) -> Self {
        self.initial_elements = initial_elements;
        self
    }

    /// Sets the number of passes every trial performs over its buffer.
    #[must_use]
    pub fn initial_repetitions(mut self, initial_repetitions: u32) -> Self {
        self.initial_repetitions = initial_repetitions;
        self
    }
}

/// Produces the settled [`Measurement`] for one benchmark variant.
///
/// Starting from the initial element count, each iteration allocates a
/// zero-initialized buffer (the zeroing doubles as the warm-up pass, keeping
/// first-touch page faults out of the timed window), runs the variant's access
/// pattern across its thread count while timing it with a wall clock, then
/// doubles the element count. The loop ends when a trial overruns the stop
/// threshold, when the next buffer would exceed the byte ceiling, or when
/// allocation fails; the last completed trial is the settled result.
///
/// Allocation failure is terminal for the growth loop but never an error: if
/// even the first trial cannot allocate, the result is the null measurement.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use mem_bw::{SizerLimits, catalog, measure_variant};
///
/// let limits = SizerLimits::default().stop_after(Duration::ZERO);
/// let measurement = measure_variant(&catalog()[0], limits);
///
/// assert!(!measurement.is_null());
/// ```
#[must_use]
pub fn measure_variant(variant: &Variant, limits: SizerLimits) -> Measurement {
    match variant.pattern() {
        AccessPattern::BulkFill => grow(variant, limits, bulk_fill),
        AccessPattern::IndexedWrite => match variant.width() {
            ElementWidth::U8 => grow(variant, limits, indexed_write::<u8>),
            ElementWidth::U16 => grow(variant, limits, indexed_write::<u16>),
            ElementWidth::U32 => grow(variant, limits, indexed_write::<u32>),
            ElementWidth::U64 => grow(variant, limits, indexed_write::<u64>),
            ElementWidth::U128 => grow(variant, limits, indexed_write::<u128>),
        },
    }
}

fn grow<T: Element>(
    variant: &Variant,
    limits: SizerLimits,
    worker: fn(&mut [T], u32),
) -> Measurement {
    let repetitions = limits.initial_repetitions;
    let mut element_count = limits.initial_elements;
    let mut settled = None;

    loop {
        // Treat arithmetic overflow of the byte size the same as breaching the
        // ceiling: stop growing.
        let Some(trial_bytes) = element_count.checked_mul(size_of::<T>()) else {
            break;
        };

        if trial_bytes > limits.max_bytes {
            break;
        }

        let Some(mut buffer) = try_alloc_zeroed::<T>(element_count) else {
            break;
        };

        let started = Instant::now();
        run_partitioned(&mut buffer, variant.threads(), |chunk| {
            worker(chunk, repetitions);
        });
        let elapsed = started.elapsed();

        drop(buffer);

        debug!(
            "trial {}: {element_count} elements, {repetitions} reps, {elapsed:?}",
            variant.label()
        );

        settled = Some(Measurement::new(
            element_count as u64,
            size_of::<T>() as u64,
            repetitions,
            elapsed,
        ));

        if elapsed > limits.stop_after {
            break;
        }

        let Some(doubled) = element_count.checked_mul(2) else {
            break;
        };
        element_count = doubled;
    }

    settled.unwrap_or(Measurement::NULL)
}

/// Allocates a zero-initialized buffer of `count` elements, or `None` when the
/// memory cannot be obtained.
///
/// Zero-initialization touches every page of the buffer, which is exactly the
/// warm-up pass the timed run must not pay for.
fn try_alloc_zeroed<T: Element>(count: usize) -> Option<Vec<T>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(count).ok()?;
    buffer.resize(count, T::ZERO);

    Some(buffer)
}
