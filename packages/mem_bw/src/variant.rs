//! The fixed catalog of benchmark variants.

use std::num::NonZero;
use std::thread;

use crate::{AccessPattern, ElementWidth};

/// One benchmark test: an element width, a thread count and an access pattern,
/// plus the label under which its result record is reported.
///
/// Variants are immutable and constructed only by [`catalog()`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Variant {
    label: String,
    width: ElementWidth,
    threads: NonZero<usize>,
    pattern: AccessPattern,
}

impl Variant {
    pub(crate) fn new(
        label: String,
        width: ElementWidth,
        threads: NonZero<usize>,
        pattern: AccessPattern,
    ) -> Self {
        debug_assert!(
            !label.contains('|'),
            "the record encoding reserves '|' as the field delimiter"
        );

        Self {
            label,
            width,
            threads,
            pattern,
        }
    }

    /// The label under which this variant's result record is reported.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The element width the variant's buffer is made of.
    #[must_use]
    pub fn width(&self) -> ElementWidth {
        self.width
    }

    /// How many OS threads execute the access pattern concurrently.
    #[must_use]
    pub fn threads(&self) -> NonZero<usize> {
        self.threads
    }

    /// The access pattern the variant exercises.
    #[must_use]
    pub fn pattern(&self) -> AccessPattern {
        self.pattern
    }
}

/// Builds the fixed battery of benchmark variants, in execution order.
///
/// The battery is one single-threaded indexed-write test per element width,
/// narrowest first, followed by two all-hardware-threads tests (wide-width
/// indexed write and bulk fill) when the hardware parallelism is known. A host
/// where [`std::thread::available_parallelism()`] fails gets no multi-threaded
/// variants; that is never an error.
///
/// # Example
///
/// ```
/// use mem_bw::catalog;
///
/// for variant in catalog() {
///     println!("{} on {} thread(s)", variant.label(), variant.threads());
/// }
/// ```
#[must_use]
pub fn catalog() -> Vec<Variant> {
    let single = NonZero::<usize>::MIN;

    let mut variants: Vec<Variant> = ElementWidth::ALL
        .into_iter()
        .map(|width| {
            Variant::new(
                width.to_string(),
                width,
                single,
                AccessPattern::IndexedWrite,
            )
        })
        .collect();

    if let Ok(threads) = thread::available_parallelism() {
        variants.push(Variant::new(
            format!("{} ({threads} thr)", ElementWidth::U128),
            ElementWidth::U128,
            threads,
            AccessPattern::IndexedWrite,
        ));

        variants.push(Variant::new(
            format!("fill ({threads} thr)"),
            ElementWidth::U8,
            threads,
            AccessPattern::BulkFill,
        ));
    }

    variants
}

/// Reports how many benchmark variants a suite run will deliver to the progress
/// sink before the completion signal. Intended for hosts sizing a progress bar.
///
/// This is always exactly the number of records [`crate::run_suite()`] produces.
#[must_use]
pub fn test_count() -> usize {
    catalog().len()
}
