use thiserror::Error;

/// Errors that can occur while running the benchmark suite.
///
/// Allocation failure during workload sizing is deliberately not represented here:
/// it terminates the growth loop of the affected variant and the suite continues,
/// so it never surfaces through the public API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The progress sink refused a record or the completion signal, typically
    /// because the receiving end of a channel sink has been dropped.
    #[error("progress sink is closed; benchmark results have nowhere to go")]
    SinkClosed,
}

/// A specialized `Result` type for benchmark suite operations, returning the
/// crate's [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
