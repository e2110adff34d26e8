//! End-to-end behavior of the suite runner: record count, ordering, completion
//! signalling and the degenerate all-allocations-fail path.
//!
//! These run the real sizer with shrunk limits so the whole battery completes
//! in milliseconds instead of minutes.

use std::time::Duration;

use mem_bw::{ProgressSink, Result, SizerLimits, catalog, run_suite_with, test_count};

/// Sink that remembers everything it was given.
#[derive(Debug, Default)]
struct RecordingSink {
    records: Vec<String>,
    finished_calls: usize,
}

impl ProgressSink for RecordingSink {
    fn record(&mut self, record: &str) -> Result<()> {
        assert_eq!(
            self.finished_calls, 0,
            "no record may arrive after completion"
        );

        self.records.push(record.to_string());
        Ok(())
    }

    fn finished(&mut self) -> Result<()> {
        self.finished_calls += 1;
        Ok(())
    }
}

fn quick_limits() -> SizerLimits {
    SizerLimits::default()
        .max_bytes(64 * 1024)
        .stop_after(Duration::ZERO)
}

#[test]
fn delivers_one_record_per_catalog_variant_in_order() {
    let mut sink = RecordingSink::default();

    run_suite_with(quick_limits(), &mut sink).unwrap();

    assert_eq!(sink.records.len(), test_count());
    assert_eq!(sink.finished_calls, 1);

    for (record, variant) in sink.records.iter().zip(catalog()) {
        let label = record.split('|').next().unwrap();
        assert_eq!(label, variant.label());
    }
}

#[test]
fn records_have_parseable_metric_fields() {
    let mut sink = RecordingSink::default();

    run_suite_with(quick_limits(), &mut sink).unwrap();

    for record in &sink.records {
        let fields: Vec<_> = record.split('|').collect();
        assert_eq!(fields.len(), 3, "unexpected layout in {record:?}");

        let throughput: f64 = fields[1].parse().unwrap();
        let bandwidth: f64 = fields[2].parse().unwrap();

        // These trials all allocated, so both metrics must be positive.
        assert!(throughput > 0.0, "null throughput in {record:?}");
        assert!(bandwidth > 0.0, "null bandwidth in {record:?}");
    }
}

#[test]
fn unallocatable_variants_report_null_records_and_suite_still_completes() {
    // A ceiling below even the smallest first trial makes every allocation
    // attempt impossible, which must degrade to null records, not to missing
    // records or a panic.
    let starved = SizerLimits::default().max_bytes(8);

    let mut sink = RecordingSink::default();
    run_suite_with(starved, &mut sink).unwrap();

    assert_eq!(sink.records.len(), test_count());
    assert_eq!(sink.finished_calls, 1);

    for (record, variant) in sink.records.iter().zip(catalog()) {
        assert_eq!(*record, format!("{}|0|0", variant.label()));
    }
}

#[test]
fn repeated_runs_deliver_the_same_record_count() {
    let mut first = RecordingSink::default();
    let mut second = RecordingSink::default();

    run_suite_with(quick_limits(), &mut first).unwrap();
    run_suite_with(quick_limits(), &mut second).unwrap();

    assert_eq!(first.records.len(), second.records.len());
}
