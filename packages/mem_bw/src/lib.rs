//! Adaptive multithreaded memory throughput benchmarking engine.
//!
//! For a fixed battery of element widths (8/16/32/64/128-bit) and access patterns
//! (indexed sequential write, bulk byte-fill), the engine discovers the largest
//! workload that completes within a time budget, measures wall-clock duration under
//! single- and multi-threaded execution, and derives throughput (operations per
//! second) and bandwidth (MiB per second).
//!
//! # Execution model
//!
//! Each benchmark [`Variant`] is sized by a growth loop: start with 1024 elements,
//! allocate, warm up, run the access pattern for a fixed number of repetitions while
//! timing it, then double the element count and repeat until a trial takes longer
//! than the stop threshold (100 ms by default), the allocation ceiling (1 GiB by
//! default) is reached, or allocation fails. The last trial that both allocated and
//! completed is the settled [`Measurement`] for the variant.
//!
//! Multi-threaded variants split the buffer into near-equal contiguous chunks, one
//! per hardware thread, and run the access pattern on fresh OS threads. Thread
//! creation and joining are deliberately inside the timed window, so the numbers
//! reflect real fan-out overhead.
//!
//! Results stream to a [`ProgressSink`] as compact `label|throughput|bandwidth`
//! records, one per variant, followed by exactly one completion signal.
//!
//! # Example
//!
//! Run the full suite and collect records over a channel:
//!
//! ```no_run
//! use std::sync::mpsc;
//!
//! use mem_bw::{SuiteEvent, run_suite, test_count};
//!
//! # fn main() -> Result<(), mem_bw::Error> {
//! let (tx, rx) = mpsc::channel();
//!
//! let worker = std::thread::spawn(move || {
//!     let mut sink = tx;
//!     run_suite(&mut sink)
//! });
//!
//! let mut records = 0_usize;
//! while let Ok(event) = rx.recv() {
//!     match event {
//!         SuiteEvent::Record(record) => {
//!             println!("{record}");
//!             records += 1;
//!         }
//!         SuiteEvent::Finished => break,
//!     }
//! }
//!
//! assert_eq!(records, test_count());
//! worker.join().expect("suite thread panicked")?;
//! # Ok(())
//! # }
//! ```

mod element;
mod error;
mod metrics;
mod partition;
mod pattern;
mod report;
mod sizer;
mod suite;
mod variant;
mod worker;

pub use element::ElementWidth;
pub use error::*;
pub use metrics::Measurement;
pub use pattern::AccessPattern;
pub use report::encode_record;
pub use sizer::{SizerLimits, measure_variant};
pub use suite::*;
pub use variant::{Variant, catalog, test_count};
