//! Runs the full benchmark battery and prints one result record per line.
//!
//! Run with: `cargo run --release --example print_report`

#![allow(missing_docs, reason = "No need for API documentation in example code")]

use mem_bw::{ProgressSink, Result, run_suite, test_count};

/// Sink that prints records as they arrive.
#[derive(Debug)]
struct StdoutSink;

impl ProgressSink for StdoutSink {
    fn record(&mut self, record: &str) -> Result<()> {
        println!("{record}");
        Ok(())
    }

    fn finished(&mut self) -> Result<()> {
        println!("done");
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("Running {} memory benchmarks...", test_count());
    println!("label|throughput (ops/s)|bandwidth (MiB/s)");
    println!("--------------------------------------------");

    run_suite(&mut StdoutSink)
}
