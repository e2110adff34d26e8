//! Encodes a variant's settled outcome into the record format the progress sink
//! consumes.

use crate::Measurement;

/// Serializes one variant's outcome into a compact pipe-delimited record.
///
/// The layout is the fixed three-field form
/// `<label>|<throughput ops/s>|<bandwidth MiB/s>`, with the metrics rendered as
/// plain `f64` display output. The pipe character never occurs in catalog
/// labels, so consumers can split positionally. The null outcome encodes as
/// `<label>|0|0`.
///
/// # Example
///
/// ```
/// use mem_bw::{SizerLimits, catalog, encode_record, measure_variant};
///
/// let limits = SizerLimits::default().stop_after(std::time::Duration::ZERO);
/// let variants = catalog();
/// let variant = &variants[0];
///
/// let record = encode_record(variant.label(), &measure_variant(variant, limits));
/// assert!(record.starts_with("8-bit|"));
/// assert_eq!(record.split('|').count(), 3);
/// ```
#[must_use]
pub fn encode_record(label: &str, measurement: &Measurement) -> String {
    format!(
        "{label}|{}|{}",
        measurement.throughput(),
        measurement.bandwidth_mib_s()
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn record_has_three_pipe_separated_fields() {
        let measurement = Measurement::new(1024, 1, 10, Duration::from_millis(1));

        let record = encode_record("8-bit", &measurement);
        let fields: Vec<_> = record.split('|').collect();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "8-bit");

        // Both metric fields must round-trip through standard float parsing.
        let throughput: f64 = fields[1].parse().unwrap();
        let bandwidth: f64 = fields[2].parse().unwrap();
        assert!(throughput > 0.0);
        assert!(bandwidth > 0.0);
    }

    #[test]
    fn null_outcome_encodes_as_zeroes() {
        let record = encode_record("128-bit", &Measurement::NULL);

        assert_eq!(record, "128-bit|0|0");
    }

    #[test]
    fn labels_with_spaces_survive_encoding() {
        let record = encode_record("fill (8 thr)", &Measurement::NULL);

        assert_eq!(record.split('|').next(), Some("fill (8 thr)"));
    }
}
