//! End-to-end behaviour of `FloatList` on a small sampled curve.
//!
//! Covers the documented read, write and slice behaviour for every
//! boundary policy and write strategy, plus property-based checks of the
//! read/write invariants.

use approx::assert_relative_eq;
use floatlist_core::math::resolver::{BoundaryPolicy, ResolverConfig, WriteStrategy};
use floatlist_core::sequence::FloatList;
use floatlist_core::types::ResolveError;
use proptest::prelude::*;

fn curve() -> FloatList<f64> {
    FloatList::new(vec![0.0, 4.0, 5.0, 6.0])
}

// ========================================
// Read Tests
// ========================================

#[test]
fn test_interior_reads() {
    let list = curve();
    assert_relative_eq!(list.read(0.125).unwrap(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(list.read(0.75).unwrap(), 3.0, epsilon = 1e-12);
    assert_relative_eq!(list.read(2.5).unwrap(), 5.5, epsilon = 1e-12);
}

#[test]
fn test_exact_reads_return_stored_values() {
    let list = curve();
    for (k, &stored) in list.iter().enumerate() {
        assert_eq!(list.read(k as f64).unwrap(), stored);
    }
}

#[test]
fn test_clamped_reads() {
    let list = curve();
    assert_eq!(list.read(-0.5).unwrap(), 0.0);
    assert_eq!(list.read(10000.0).unwrap(), 6.0);
    assert_eq!(list.read(f64::NEG_INFINITY).unwrap(), 0.0);
}

#[test]
fn test_wrapped_reads() {
    let list = FloatList::with_config(curve().into_vec(), ResolverConfig::wrapping());
    assert_relative_eq!(list.read(-0.5).unwrap(), 3.0, epsilon = 1e-12);
    assert_eq!(list.read(10000.0).unwrap(), 0.0);
    assert_relative_eq!(list.read(4.125).unwrap(), 0.5, epsilon = 1e-12);
    assert_eq!(
        list.read(f64::INFINITY),
        Err(ResolveError::NonFiniteIndex {
            index: f64::INFINITY
        })
    );
}

#[test]
fn test_floor_mode_reads() {
    let list = FloatList::floor(curve().into_vec());
    assert_eq!(list.read(0.99).unwrap(), 0.0);
    assert_eq!(list.read(2.5).unwrap(), 5.0);
}

#[test]
fn test_empty_list_errors() {
    let list: FloatList<f64> = FloatList::default();
    assert_eq!(list.read(0.0), Err(ResolveError::EmptySequence));
    assert_eq!(list.range(0.0, 1.0, 0.5), Err(ResolveError::EmptySequence));
    assert!(!list.contains(0.0));
}

// ========================================
// Write Tests
// ========================================

#[test]
fn test_proportional_write_on_curve_is_noop() {
    let mut list = curve();
    list.write(0.5, 2.0).unwrap();
    assert_eq!(list.as_slice(), &[0.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_blend_write() {
    let config = ResolverConfig::default().with_write_strategy(WriteStrategy::Blend);
    let mut list = FloatList::with_config(curve().into_vec(), config);
    list.write(0.5, 2.0).unwrap();
    assert_eq!(list.as_slice(), &[1.0, 3.0, 5.0, 6.0]);
}

#[test]
fn test_exact_write_replaces() {
    let mut list = curve();
    list.write(2.0, -1.0).unwrap();
    assert_eq!(list.as_slice(), &[0.0, 4.0, -1.0, 6.0]);
}

#[test]
fn test_clamped_write_hits_boundary() {
    let mut list = curve();
    list.write(-3.0, 9.0).unwrap();
    list.write(42.0, 7.0).unwrap();
    assert_eq!(list.as_slice(), &[9.0, 4.0, 5.0, 7.0]);
}

#[test]
fn test_wrapped_write_on_closing_segment() {
    let mut list = FloatList::with_config(curve().into_vec(), ResolverConfig::wrapping());
    list.write(3.5, 1.0).unwrap();
    assert_relative_eq!(list.read(3.5).unwrap(), 1.0, epsilon = 1e-12);
    assert_eq!(list[1], 4.0);
    assert_eq!(list[2], 5.0);
}

// ========================================
// Range Tests
// ========================================

#[test]
fn test_inclusive_range_reaches_stop() {
    let values = curve().range_inclusive(0.0, 1.0, 0.2).unwrap();
    let expected = [0.0, 0.8, 1.6, 2.4, 3.2, 4.0];
    assert_eq!(values.len(), expected.len());
    for (v, e) in values.iter().zip(expected) {
        assert_relative_eq!(*v, e, epsilon = 1e-12);
    }
}

#[test]
fn test_half_open_range_excludes_stop() {
    let values = curve().range(0.0, 1.0, 0.2).unwrap();
    assert_eq!(values.len(), 5);
    assert_relative_eq!(values[4], 3.2, epsilon = 1e-12);
}

#[test]
fn test_wrapped_range_cycles() {
    let list = FloatList::with_config(vec![0.0, 1.0, 0.0, -1.0], ResolverConfig::wrapping());
    let values = list.range(0.0, 8.0, 1.0).unwrap();
    assert_eq!(values, vec![0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0]);
}

#[test]
fn test_write_range_copies_from_source() {
    let mut target = FloatList::new(vec![0.0; 4]);
    let source = curve();
    target.write_range(0.0, 4.0, 1.0, &source).unwrap();
    assert_eq!(target, source);
}

#[test]
fn test_write_range_error_leaves_target_untouched() {
    let mut target = curve();
    let source: FloatList<f64> = FloatList::default();
    let result = target.write_range(0.0, 2.0, 1.0, &source);
    assert_eq!(result, Err(ResolveError::EmptySequence));
    assert_eq!(target, curve());
}

// ========================================
// Contains Tests
// ========================================

#[test]
fn test_contains_on_curve() {
    let list = curve();
    assert!(list.contains(2.5));
    assert!(list.contains(6.0));
    assert!(!list.contains(-0.1));
    assert!(!list.contains(6.5));
}

#[test]
fn test_contains_in_floor_mode() {
    let list = FloatList::floor(curve().into_vec());
    assert!(list.contains(5.0));
    assert!(!list.contains(4.5));
}

// ========================================
// Property-Based Tests
// ========================================

fn samples_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, 2..32)
}

fn policy_strategy() -> impl Strategy<Value = BoundaryPolicy> {
    prop_oneof![Just(BoundaryPolicy::Clamp), Just(BoundaryPolicy::Wrap)]
}

/// Index span that reaches every segment: Wrap adds the closing segment
/// from the last element back to the first.
fn span(list: &FloatList<f64>, policy: BoundaryPolicy) -> f64 {
    match policy {
        BoundaryPolicy::Clamp => (list.len() - 1) as f64,
        BoundaryPolicy::Wrap => list.len() as f64,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_read_stays_within_neighbours(
        samples in samples_strategy(),
        t in 0.0f64..1.0,
        policy in policy_strategy()
    ) {
        let config = ResolverConfig::default().with_boundary(policy);
        let list = FloatList::with_config(samples, config);
        let index = t * (list.len() - 1) as f64;
        let d = list.decompose(index).unwrap();
        let lo = list[d.lo].min(list[d.hi]);
        let hi = list[d.lo].max(list[d.hi]);
        let value = list.read(index).unwrap();
        prop_assert!(value >= lo - 1e-9 && value <= hi + 1e-9);
    }

    #[test]
    fn test_write_then_read_returns_value(
        samples in samples_strategy(),
        t in 0.0f64..1.0,
        value in -100.0f64..100.0,
        policy in policy_strategy()
    ) {
        let config = ResolverConfig::default().with_boundary(policy);
        let mut list = FloatList::with_config(samples, config);
        let index = t * span(&list, policy);
        list.write(index, value).unwrap();
        prop_assert!((list.read(index).unwrap() - value).abs() < 1e-6);
    }

    #[test]
    fn test_write_touches_only_neighbours(
        samples in samples_strategy(),
        t in 0.0f64..1.0,
        value in -100.0f64..100.0,
        policy in policy_strategy()
    ) {
        let config = ResolverConfig::default().with_boundary(policy);
        let before = FloatList::with_config(samples, config);
        let index = t * span(&before, policy);
        let d = before.decompose(index).unwrap();
        let mut after = before.clone();
        after.write(index, value).unwrap();
        for k in 0..before.len() {
            if k != d.lo && k != d.hi {
                prop_assert_eq!(before[k], after[k]);
            }
        }

        // Neighbours shift in the ratio (1 - frac) : frac
        if d.lo != d.hi {
            let shift_lo = after[d.lo] - before[d.lo];
            let shift_hi = after[d.hi] - before[d.hi];
            prop_assert!((shift_lo * d.frac - shift_hi * (1.0 - d.frac)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_range_length_and_values(
        samples in samples_strategy(),
        start in -5.0f64..40.0,
        span in 0.0f64..20.0,
        step in 0.05f64..3.0
    ) {
        let list = FloatList::new(samples);
        let stop = start + span;
        let values = list.range(start, stop, step).unwrap();
        let expected = ((stop - start) / step).ceil() as usize;
        prop_assert_eq!(values.len(), expected);
        for (n, v) in values.iter().enumerate() {
            let read = list.read(start + step * n as f64).unwrap();
            prop_assert!((v - read).abs() < 1e-9);
        }
    }
}
