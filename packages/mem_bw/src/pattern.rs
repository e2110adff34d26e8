//! Access patterns the worker strategies implement.

/// The memory access pattern a benchmark variant exercises.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AccessPattern {
    /// Writes a per-pass value at every index of the assigned range, one element
    /// at a time. Exercises store bandwidth plus address computation.
    IndexedWrite,

    /// Fills the assigned byte range with a constant value per pass, always at
    /// 8-bit granularity regardless of the variant's labelled width. Exercises
    /// the platform's optimized block-fill path.
    BulkFill,
}
