// Integration tests for the exported `calculate` symbol.
//
// The symbol is called through the same function pointer type a host binds
// it to, so the argument order and types are checked at compile time.

#![allow(clippy::float_cmp)]

use blackboxDll::{calculate, CalculateFn};
use proptest::prelude::*;
use quickcheck::quickcheck;

const EXPORT: CalculateFn = calculate;

fn formula(ow: f64, hlw: f64, o: f64, h: f64, l: f64, c: f64) -> f64 {
    (o * ow + h * hlw + l * hlw + c) / (ow + 2.0 * hlw + 1.0)
}

#[test]
fn test_reference_points() {
    assert_eq!(EXPORT(0, 1.0, 1.0, 10.0, 12.0, 8.0, 11.0), 10.25);
    assert_eq!(EXPORT(0, 0.0, 0.0, 5.0, 7.0, 3.0, 9.0), 9.0);
    assert_eq!(EXPORT(0, 2.0, 0.5, 100.0, 110.0, 90.0, 105.0), 101.25);
    assert_eq!(EXPORT(0, -0.5, 0.0, 1.0, 2.0, 3.0, 4.0), 7.0);
}

#[test]
fn test_zero_denominator_is_not_trapped() {
    // openWeight + 2 * highLowWeight == -1
    assert_eq!(EXPORT(0, -2.0, 0.5, 0.0, 1.0, 1.0, 1.0), f64::INFINITY);
    assert_eq!(EXPORT(0, -1.0, 0.0, 1.0, 5.0, 5.0, -3.0), f64::NEG_INFINITY);
    assert!(EXPORT(0, -1.0, 0.0, 2.0, 5.0, 5.0, 2.0).is_nan());
}

#[test]
fn test_non_finite_inputs_pass_through() {
    assert!(EXPORT(0, 1.0, 1.0, f64::NAN, 12.0, 8.0, 11.0).is_nan());
    assert_eq!(EXPORT(0, 0.0, 0.0, 1.0, 2.0, 3.0, f64::INFINITY), f64::INFINITY);
    assert!(EXPORT(0, f64::INFINITY, 0.0, 1.0, 2.0, 3.0, 4.0).is_nan());
}

#[test]
fn test_extreme_bar_indices() {
    let base = EXPORT(0, 0.7, 1.3, 10.0, 12.0, 8.0, 11.0);
    for index in [i32::MIN, -1, 1, 999, i32::MAX] {
        assert_eq!(
            EXPORT(index, 0.7, 1.3, 10.0, 12.0, 8.0, 11.0).to_bits(),
            base.to_bits()
        );
    }
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                (0..1000)
                    .map(|i| {
                        let p = f64::from(i);
                        EXPORT(i, f64::from(t) * 0.1, 0.5, p, p + 2.0, p - 2.0, p + 1.0)
                    })
                    .collect::<Vec<f64>>()
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let ow = t as f64 * 0.1;
        let values = handle.join().unwrap();
        for (i, value) in values.into_iter().enumerate() {
            let p = i as f64;
            assert_eq!(value, formula(ow, 0.5, p, p + 2.0, p - 2.0, p + 1.0));
        }
    }
}

proptest! {
    #[test]
    fn prop_matches_formula_bit_for_bit(
        index in any::<i32>(),
        ow in -1e3f64..1e3,
        hlw in -1e3f64..1e3,
        o in -1e6f64..1e6,
        h in -1e6f64..1e6,
        l in -1e6f64..1e6,
        c in -1e6f64..1e6,
    ) {
        let expected = formula(ow, hlw, o, h, l, c);
        let actual = EXPORT(index, ow, hlw, o, h, l, c);
        prop_assert!(actual.to_bits() == expected.to_bits() || (actual.is_nan() && expected.is_nan()));
    }
}

quickcheck! {
    fn qc_bar_index_is_ignored(a: i32, b: i32, ow: f64, hlw: f64, o: f64, h: f64, l: f64, c: f64) -> bool {
        let x = EXPORT(a, ow, hlw, o, h, l, c);
        let y = EXPORT(b, ow, hlw, o, h, l, c);
        x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan())
    }
}
