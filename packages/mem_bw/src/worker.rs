//! Worker strategies: the inner loops whose execution is timed.
//!
//! Both strategies operate on whatever sub-slice they are handed, so a worker
//! invoked on the full buffer (single-threaded) behaves identically to one
//! invoked on a partition chunk, and writes outside the assigned bounds are
//! unrepresentable.

use crate::element::Element;

/// Writes the pass counter at every index of the assigned range, once per pass.
///
/// The per-element store and the address computation it requires are the point;
/// the compiler must not collapse the passes because each pass writes a
/// different value.
#[inline]
pub(crate) fn indexed_write<T: Element>(chunk: &mut [T], repetitions: u32) {
    for pass in 0..repetitions {
        let value = T::from_pass(pass);

        for slot in chunk.iter_mut() {
            *slot = value;
        }
    }
}

/// Fills the assigned byte range with the pass counter, once per pass.
///
/// Always operates at 8-bit granularity; `slice::fill` lowers to the platform's
/// optimized block-fill (`memset`) path.
#[inline]
pub(crate) fn bulk_fill(chunk: &mut [u8], repetitions: u32) {
    for pass in 0..repetitions {
        chunk.fill(pass as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_write_leaves_final_pass_value() {
        let mut buffer = vec![0_u32; 64];

        indexed_write(&mut buffer, 10);

        assert!(buffer.iter().all(|&slot| slot == 9));
    }

    #[test]
    fn indexed_write_truncates_for_narrow_elements() {
        let mut buffer = vec![0_u8; 16];

        indexed_write(&mut buffer, 300);

        // Final pass counter is 299, which an 8-bit element sees modulo 256.
        assert!(buffer.iter().all(|&slot| slot == 43));
    }

    #[test]
    fn bulk_fill_leaves_final_pass_value() {
        let mut buffer = vec![0_u8; 64];

        bulk_fill(&mut buffer, 10);

        assert!(buffer.iter().all(|&slot| slot == 9));
    }

    #[test]
    fn zero_repetitions_write_nothing() {
        let mut buffer = vec![7_u64; 8];

        indexed_write(&mut buffer, 0);

        assert!(buffer.iter().all(|&slot| slot == 7));
    }

    #[test]
    fn workers_stay_within_the_assigned_subrange() {
        let mut buffer = vec![0_u16; 32];

        let (left, rest) = buffer.split_at_mut(8);
        let (middle, right) = rest.split_at_mut(16);

        indexed_write(middle, 5);

        assert!(left.iter().all(|&slot| slot == 0));
        assert!(middle.iter().all(|&slot| slot == 4));
        assert!(right.iter().all(|&slot| slot == 0));
    }
}
