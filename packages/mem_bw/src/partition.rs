//! Splits a contiguous element range into per-thread chunks and fans the worker
//! out over fresh OS threads.
//!
//! Threads are created per trial and joined before the trial's timer stops; the
//! creation and join cost is part of what a multi-threaded trial measures. No
//! pool persists between trials.

use std::num::NonZero;
use std::thread;

/// Computes the `(start, end)` bounds of each thread's chunk over `[0, len)`.
///
/// Every chunk is `len / threads` elements except the last, which extends to the
/// true end and thereby absorbs the remainder of the integer division. The
/// chunks are contiguous, disjoint and cover the range exactly.
pub(crate) fn chunk_bounds(len: usize, threads: NonZero<usize>) -> Vec<(usize, usize)> {
    let chunk_len = len / threads.get();

    (0..threads.get())
        .map(|index| {
            let start = index * chunk_len;
            let end = if index == threads.get() - 1 {
                len
            } else {
                start + chunk_len
            };

            (start, end)
        })
        .collect()
}

/// Executes `worker` over the whole of `data` exactly once, split across
/// `threads` concurrent OS threads.
///
/// A single-threaded invocation runs inline, with no thread machinery at all.
/// Otherwise one thread per chunk is spawned over disjoint `&mut` sub-slices
/// and all threads are joined before this function returns. Disjointness comes
/// from `split_at_mut`, so no synchronization between workers is needed.
pub(crate) fn run_partitioned<T, F>(data: &mut [T], threads: NonZero<usize>, worker: F)
where
    T: Send,
    F: Fn(&mut [T]) + Sync,
{
    if threads.get() == 1 {
        worker(data);
        return;
    }

    let bounds = chunk_bounds(data.len(), threads);
    let (last, head) = bounds
        .split_last()
        .expect("threads is nonzero so there is always at least one chunk");

    thread::scope(|scope| {
        let worker = &worker;
        let mut rest = data;

        for &(start, end) in head {
            let current = rest;
            let (chunk, tail) = current.split_at_mut(end - start);
            rest = tail;

            scope.spawn(move || worker(chunk));
        }

        debug_assert_eq!(rest.len(), last.1 - last.0);
        scope.spawn(move || worker(rest));
    });
}

#[cfg(test)]
mod tests {
    use new_zealand::nz;

    use super::*;

    #[test]
    fn chunks_cover_range_exactly_once() {
        // Lengths chosen to hit zero, shorter-than-thread-count, evenly divisible
        // and remainder-carrying cases.
        let lens = [0_usize, 1, 5, 7, 64, 100, 1023, 4096];

        for len in lens {
            for threads in 1..=8 {
                let threads = NonZero::new(threads).unwrap();
                let bounds = chunk_bounds(len, threads);

                assert_eq!(bounds.len(), threads.get());

                let mut expected_start = 0;
                for (start, end) in &bounds {
                    assert_eq!(*start, expected_start);
                    assert!(end >= start);
                    expected_start = *end;
                }

                assert_eq!(expected_start, len, "chunks must end at the range end");
            }
        }
    }

    #[test]
    fn remainder_goes_to_the_last_chunk() {
        let bounds = chunk_bounds(10, nz!(4));

        assert_eq!(bounds, [(0, 2), (2, 4), (4, 6), (6, 10)]);
    }

    #[test]
    fn single_thread_runs_inline_on_full_range() {
        let mut data = vec![0_u32; 100];

        run_partitioned(&mut data, nz!(1), |chunk| {
            assert_eq!(chunk.len(), 100);

            for slot in chunk.iter_mut() {
                *slot += 1;
            }
        });

        assert!(data.iter().all(|&slot| slot == 1));
    }

    #[test]
    fn every_element_is_visited_exactly_once_across_threads() {
        let mut data = vec![0_u8; 1003];

        run_partitioned(&mut data, nz!(4), |chunk| {
            for slot in chunk.iter_mut() {
                *slot += 1;
            }
        });

        // Any gap would leave a 0, any overlap is impossible to express but a
        // bookkeeping error would surface as a chunk visited twice.
        assert!(data.iter().all(|&slot| slot == 1));
    }

    #[test]
    fn more_threads_than_elements_still_covers_range() {
        let mut data = vec![0_u64; 3];

        run_partitioned(&mut data, nz!(8), |chunk| {
            for slot in chunk.iter_mut() {
                *slot += 1;
            }
        });

        assert!(data.iter().all(|&slot| slot == 1));
    }
}
