//! Conversions between the three encodings of a ragged partition
//!
//! A partition of the flat range `[0, M)` into `G` groups can be written as
//!
//! - *offsets*: `G + 1` non-decreasing boundaries, group `g` is
//!   `[offsets[g], offsets[g + 1])`
//! - *parents*: `M` group indices, `-1` where no group owns the position
//! - *starts/stops*: `G` explicit bound pairs, gaps and overlaps allowed
//!
//! The functions here work on native-order typed slices. Runtime-typed
//! buffers go through [`crate::dispatch`], which normalizes first.

use crate::error::{JaggedError, Result};
use crate::types::IndexType;
use num_traits::{AsPrimitive, ToPrimitive};
use tracing::trace;

/// Widen to `i64`, rejecting `u64` values above `i64::MAX`
pub(crate) fn to_i64<T: IndexType>(name: &'static str, values: &[T]) -> Result<Vec<i64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| {
            v.to_i64().ok_or_else(|| JaggedError::ValueTooLarge {
                name,
                index,
                value: v.to_u64().unwrap_or(u64::MAX),
            })
        })
        .collect()
}

pub(crate) fn check_non_negative(name: &'static str, values: &[i64]) -> Result<()> {
    match values.iter().position(|&v| v < 0) {
        Some(index) => Err(JaggedError::NegativeValue {
            name,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Cumulative sums of `counts`, starting at 0
pub fn counts_to_offsets<T: IndexType>(counts: &[T]) -> Result<Vec<i64>> {
    let counts = to_i64("counts", counts)?;
    check_non_negative("counts", &counts)?;

    let mut offsets = Vec::with_capacity(counts.len() + 1);
    let mut total = 0i64;
    offsets.push(total);
    for (index, count) in counts.into_iter().enumerate() {
        total = total
            .checked_add(count)
            .ok_or(JaggedError::OffsetOverflow { index })?;
        offsets.push(total);
    }

    trace!(groups = offsets.len() - 1, total, "counts_to_offsets");
    Ok(offsets)
}

/// Group index of every position in `[0, offsets[last])`
///
/// Positions before `offsets[0]` get `-1`.
pub fn offsets_to_parents<T: IndexType>(offsets: &[T]) -> Result<Vec<i64>> {
    let offsets = to_i64("offsets", offsets)?;
    let Some(&last) = offsets.last() else {
        return Err(JaggedError::EmptyOffsets);
    };
    check_non_negative("offsets", &offsets)?;
    for (index, pair) in offsets.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(JaggedError::DecreasingOffsets {
                index: index + 1,
                previous: pair[0],
                value: pair[1],
            });
        }
    }

    let mut parents = vec![-1i64; last as usize];
    for (group, pair) in offsets.windows(2).enumerate() {
        parents[pair[0] as usize..pair[1] as usize].fill(group as i64);
    }

    trace!(
        groups = offsets.len() - 1,
        len = parents.len(),
        "offsets_to_parents"
    );
    Ok(parents)
}

/// Group index of every position in `[0, max(stops))`
///
/// There is one group per start; `stops` may be longer, and every stop
/// counts towards the output length. Groups are written in ascending order,
/// so where ranges overlap the later group wins. Positions covered by no
/// group get `-1`.
pub fn starts_stops_to_parents<S: IndexType>(starts: &[S], stops: &[S]) -> Result<Vec<i64>> {
    if starts.len() > stops.len() {
        return Err(JaggedError::LengthMismatch {
            starts: starts.len(),
            stops: stops.len(),
        });
    }
    let starts = to_i64("starts", starts)?;
    let stops = to_i64("stops", stops)?;
    check_non_negative("starts", &starts)?;
    check_non_negative("stops", &stops)?;

    let len = stops.iter().copied().max().unwrap_or(0) as usize;
    let mut parents = vec![-1i64; len];
    for (group, (&start, &stop)) in starts.iter().zip(&stops).enumerate() {
        if start < stop {
            parents[start as usize..stop as usize].fill(group as i64);
        }
    }

    trace!(groups = starts.len(), len, "starts_stops_to_parents");
    Ok(parents)
}

/// Bounds of each group's run in `parents`
///
/// With `length` of `None` or negative, the number of groups is
/// `max(0, max(parents)) + 1`. Groups that never appear keep `[0, 0)`.
/// Parent values outside `[0, length)` are not recorded but still end the
/// preceding run.
pub fn parents_to_starts_stops<T: IndexType>(
    parents: &[T],
    length: Option<i64>,
) -> (Vec<i64>, Vec<i64>) {
    // Values above i64::MAX wrap negative and are skipped like any other
    // out-of-range parent.
    let parents: Vec<i64> = parents.iter().map(|v| v.as_()).collect();
    let length = match length {
        Some(n) if n >= 0 => n as usize,
        _ => parents.iter().copied().max().unwrap_or(0).max(0) as usize + 1,
    };
    let in_range = |parent: i64| parent >= 0 && (parent as usize) < length;

    let mut starts = vec![0i64; length];
    let mut stops = vec![0i64; length];
    let mut last = -1i64;
    for (k, &parent) in parents.iter().enumerate() {
        if parent != last {
            if in_range(last) {
                stops[last as usize] = k as i64;
            }
            if in_range(parent) {
                starts[parent as usize] = k as i64;
            }
        }
        last = parent;
    }
    if in_range(last) {
        stops[last as usize] = parents.len() as i64;
    }

    trace!(groups = length, len = parents.len(), "parents_to_starts_stops");
    (starts, stops)
}

/// Offsets and parents of the runs of equal adjacent values
///
/// `offsets` always starts with 0 and ends with `uniques.len()`.
pub fn uniques_to_offsets_parents<T: IndexType>(uniques: &[T]) -> (Vec<i64>, Vec<i64>) {
    let mut offsets = vec![0i64];
    let mut parents = Vec::with_capacity(uniques.len());
    let mut run = 0i64;
    for (i, value) in uniques.iter().enumerate() {
        if i > 0 && *value != uniques[i - 1] {
            offsets.push(i as i64);
            run += 1;
        }
        parents.push(run);
    }
    offsets.push(uniques.len() as i64);

    trace!(
        runs = offsets.len() - 1,
        len = uniques.len(),
        "uniques_to_offsets_parents"
    );
    (offsets, parents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_to_offsets_basic() {
        assert_eq!(counts_to_offsets(&[2u8, 0, 3]).unwrap(), vec![0, 2, 2, 5]);
    }

    #[test]
    fn counts_to_offsets_empty() {
        assert_eq!(counts_to_offsets::<i32>(&[]).unwrap(), vec![0]);
    }

    #[test]
    fn counts_to_offsets_rejects_negative() {
        let err = counts_to_offsets(&[1i16, -2]).unwrap_err();
        assert_eq!(
            err,
            JaggedError::NegativeValue {
                name: "counts",
                index: 1,
                value: -2
            }
        );
    }

    #[test]
    fn counts_to_offsets_overflow_is_an_error() {
        let err = counts_to_offsets(&[i64::MAX, 1]).unwrap_err();
        assert_eq!(err, JaggedError::OffsetOverflow { index: 1 });
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidArgument);
        assert_eq!(counts_to_offsets(&[i64::MAX]).unwrap(), vec![0, i64::MAX]);
    }

    #[test]
    fn values_above_i64_range_are_named() {
        let err = counts_to_offsets(&[1u64, u64::MAX]).unwrap_err();
        assert_eq!(
            err,
            JaggedError::ValueTooLarge {
                name: "counts",
                index: 1,
                value: u64::MAX
            }
        );
        assert_eq!(
            starts_stops_to_parents(&[0u64], &[1u64 << 63]).unwrap_err(),
            JaggedError::ValueTooLarge {
                name: "stops",
                index: 0,
                value: 1 << 63
            }
        );
    }

    #[test]
    fn offsets_to_parents_basic() {
        assert_eq!(
            offsets_to_parents(&[0i64, 2, 2, 5]).unwrap(),
            vec![0, 0, 2, 2, 2]
        );
    }

    #[test]
    fn offsets_to_parents_leading_gap() {
        assert_eq!(offsets_to_parents(&[2u32, 3, 5]).unwrap(), vec![-1, -1, 0, 1, 1]);
    }

    #[test]
    fn offsets_to_parents_single() {
        assert!(offsets_to_parents(&[0u16]).unwrap().is_empty());
    }

    #[test]
    fn offsets_to_parents_empty_fails() {
        assert_eq!(
            offsets_to_parents::<i64>(&[]).unwrap_err(),
            JaggedError::EmptyOffsets
        );
    }

    #[test]
    fn offsets_to_parents_rejects_decreasing() {
        let err = offsets_to_parents(&[0i32, 3, 1]).unwrap_err();
        assert_eq!(
            err,
            JaggedError::DecreasingOffsets {
                index: 2,
                previous: 3,
                value: 1
            }
        );
    }

    #[test]
    fn starts_stops_to_parents_gap() {
        assert_eq!(
            starts_stops_to_parents(&[0i64, 3], &[2, 5]).unwrap(),
            vec![0, 0, -1, 1, 1]
        );
    }

    #[test]
    fn starts_stops_to_parents_overlap_last_wins() {
        assert_eq!(
            starts_stops_to_parents(&[0u8, 1], &[3, 2]).unwrap(),
            vec![0, 1, 0]
        );
    }

    #[test]
    fn starts_stops_to_parents_empty() {
        assert!(starts_stops_to_parents::<i32>(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn starts_stops_to_parents_extra_stops_set_length() {
        assert_eq!(
            starts_stops_to_parents(&[0i64], &[2, 5]).unwrap(),
            vec![0, 0, -1, -1, -1]
        );
    }

    #[test]
    fn starts_stops_to_parents_more_starts_than_stops() {
        let err = starts_stops_to_parents(&[0i64, 1], &[1]).unwrap_err();
        assert_eq!(err, JaggedError::LengthMismatch { starts: 2, stops: 1 });
    }

    #[test]
    fn parents_to_starts_stops_large_unsigned_ignored() {
        let (starts, stops) = parents_to_starts_stops(&[0u64, u64::MAX, u64::MAX, 1], None);
        assert_eq!(starts, vec![0, 3]);
        assert_eq!(stops, vec![1, 4]);
    }

    #[test]
    fn parents_to_starts_stops_basic() {
        let (starts, stops) = parents_to_starts_stops(&[0i64, 0, -1, 1, 1], None);
        assert_eq!(starts, vec![0, 3]);
        assert_eq!(stops, vec![2, 5]);
    }

    #[test]
    fn parents_to_starts_stops_missing_group() {
        let (starts, stops) = parents_to_starts_stops(&[0i8, 2, 2], None);
        assert_eq!(starts, vec![0, 0, 1]);
        assert_eq!(stops, vec![1, 0, 3]);
    }

    #[test]
    fn parents_to_starts_stops_explicit_length() {
        let (starts, stops) = parents_to_starts_stops(&[0u16, 1, 1, 3], Some(2));
        assert_eq!(starts, vec![0, 1]);
        assert_eq!(stops, vec![1, 3]);

        let (starts, stops) = parents_to_starts_stops(&[0u16, 1], Some(4));
        assert_eq!(starts, vec![0, 1, 0, 0]);
        assert_eq!(stops, vec![1, 2, 0, 0]);
    }

    #[test]
    fn parents_to_starts_stops_negative_length_is_auto() {
        let auto = parents_to_starts_stops(&[0i32, 1], None);
        assert_eq!(parents_to_starts_stops(&[0i32, 1], Some(-1)), auto);
    }

    #[test]
    fn parents_to_starts_stops_empty() {
        let (starts, stops) = parents_to_starts_stops::<i64>(&[], None);
        assert_eq!(starts, vec![0]);
        assert_eq!(stops, vec![0]);
    }

    #[test]
    fn uniques_runs() {
        let (offsets, parents) = uniques_to_offsets_parents(&[3u32, 3, 5, 7, 7, 7]);
        assert_eq!(offsets, vec![0, 2, 3, 6]);
        assert_eq!(parents, vec![0, 0, 1, 2, 2, 2]);
    }

    #[test]
    fn uniques_empty_and_single() {
        assert_eq!(
            uniques_to_offsets_parents::<i64>(&[]),
            (vec![0, 0], vec![])
        );
        assert_eq!(uniques_to_offsets_parents(&[9i8]), (vec![0, 1], vec![0]));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn offsets_parents_round_trip(counts in prop::collection::vec(0u8..5, 0..20)) {
                let offsets = counts_to_offsets(&counts).unwrap();
                let parents = offsets_to_parents(&offsets).unwrap();
                let (starts, stops) =
                    parents_to_starts_stops(&parents, Some(counts.len() as i64));
                for (g, &count) in counts.iter().enumerate() {
                    if count > 0 {
                        prop_assert_eq!(starts[g], offsets[g]);
                        prop_assert_eq!(stops[g], offsets[g + 1]);
                    }
                }
            }

            #[test]
            fn parents_invert_counts(counts in prop::collection::vec(0u16..6, 0..20)) {
                let offsets = counts_to_offsets(&counts).unwrap();
                let parents = offsets_to_parents(&offsets).unwrap();
                prop_assert_eq!(parents.len() as i64, *offsets.last().unwrap());
                for (j, &parent) in parents.iter().enumerate() {
                    let g = parent as usize;
                    prop_assert!(offsets[g] <= j as i64 && (j as i64) < offsets[g + 1]);
                }
            }

            #[test]
            fn uniques_idempotent(mut uniques in prop::collection::vec(0i32..8, 0..30)) {
                uniques.sort();
                let (offsets, parents) = uniques_to_offsets_parents(&uniques);
                let (again, _) = uniques_to_offsets_parents(&parents);
                prop_assert_eq!(offsets, again);
            }
        }
    }
}
