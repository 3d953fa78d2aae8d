// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Angle arithmetic on the circle group ℝ/2πℤ.
//!
//! Angles are radians in `[-π, π]`. The two representations of the branch point are folded onto `π` by [`canonical`], so the canonical range is `(-π, π]`. Reducing arbitrary angles into this range is the caller's job.

use num_traits::{Float, FloatConst};

pub use std::f64::consts::PI;

/// Length of the whole circle.
pub const TWO_PI: f64 = 2.0 * PI;

/// Maps the branch point `-π` onto `π` and leaves every other angle untouched.
pub fn canonical<F: Float + FloatConst>(p: F) -> F {
  if p == -F::PI() { F::PI() }
  else { p }
}

/// IEEE 754 remainder: `x - n * y` where `n` is `x / y` rounded to the nearest integer, ties to even.
///
/// The result lies in `[-|y|/2, |y|/2]`, which for `y = 2π` is the symmetric range around zero used to re-wrap angles.
pub fn remainder<F: Float>(x: F, y: F) -> F {
  debug_assert!(y != F::zero(), "The remainder by zero is undefined.");
  let two = F::one() + F::one();
  let y = y.abs();
  // `%` truncates the quotient and is exact.
  let r = x % y;
  let half = y / two;
  if r.abs() > half {
    if r > F::zero() { r - y } else { r + y }
  }
  else if r.abs() == half {
    let quotient = ((x - r) / y).abs();
    if quotient % two == F::one() {
      if r > F::zero() { r - y } else { r + y }
    }
    else { r }
  }
  else { r }
}

/// Counter-clockwise distance from `a` to `b`, in `[0, 2π)`.
///
/// Algebraically this is `b - a + 2π` when `b < a`, but it is evaluated as `(b + π) - (a - π)` so a tiny positive distance across the branch point does not collapse to zero.
pub fn positive_distance<F: Float + FloatConst>(a: F, b: F) -> F {
  let d = b - a;
  if d >= F::zero() { d }
  else {
    (b + F::PI()) - (a - F::PI())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;
  use proptest::prelude::*;
  use std::f64::consts::FRAC_PI_2;

  #[test]
  fn canonical_test() {
    assert_eq!(canonical(-PI), PI);
    assert_eq!(canonical(PI), PI);
    assert_eq!(canonical(0.0), 0.0);
    assert_eq!(canonical(-FRAC_PI_2), -FRAC_PI_2);
    assert_eq!(canonical(-std::f32::consts::PI), std::f32::consts::PI);
  }

  #[test]
  fn remainder_test() {
    let cases = vec![
      (1, 4.0, 3.0, 1.0),
      (2, 5.0, 3.0, -1.0),
      (3, -5.0, 3.0, 1.0),
      (4, 5.0, -3.0, -1.0),
      // ties go to the even quotient
      (5, 3.0, 2.0, -1.0),
      (6, 5.0, 2.0, 1.0),
      (7, 7.0, 2.0, -1.0),
      (8, -3.0, 2.0, 1.0),
      (9, -5.0, 2.0, -1.0),
      (10, 0.0, 2.0, 0.0),
    ];
    for (id, x, y, expected) in cases {
      assert_eq!(remainder(x, y), expected, "test #{}: remainder({}, {})", id, x, y);
    }
  }

  #[test]
  fn remainder_of_angles() {
    assert_eq!(remainder(PI, TWO_PI), PI);
    assert_eq!(remainder(-PI, TWO_PI), -PI);
    assert_eq!(remainder(-FRAC_PI_2, TWO_PI), -FRAC_PI_2);
    assert_abs_diff_eq!(remainder(PI + 0.5, TWO_PI), -PI + 0.5, epsilon = 1e-15);
    assert_abs_diff_eq!(remainder(-PI - 0.5, TWO_PI), PI - 0.5, epsilon = 1e-15);
    assert_abs_diff_eq!(remainder(5.0 * PI + 1.0, TWO_PI), -PI + 1.0, epsilon = 1e-14);
  }

  #[test]
  fn positive_distance_test() {
    assert_eq!(positive_distance(0.0, FRAC_PI_2), FRAC_PI_2);
    assert_eq!(positive_distance(FRAC_PI_2, FRAC_PI_2), 0.0);
    assert_eq!(positive_distance(FRAC_PI_2, 0.0), (0.0 + PI) - (FRAC_PI_2 - PI));
    assert_abs_diff_eq!(positive_distance(3.0, -3.0), TWO_PI - 6.0, epsilon = 1e-15);
    assert_abs_diff_eq!(positive_distance(-3.0, 3.0), 6.0);
    // Across the branch point the distance stays close to a full turn.
    let eps = 1e-15;
    assert!(positive_distance(PI, -PI + eps) > 0.0);
    assert_abs_diff_eq!(positive_distance(-PI + eps, PI), TWO_PI - eps, epsilon = 1e-15);
  }

  fn canonical_angle() -> impl Strategy<Value = f64> {
    (-PI..=PI).prop_map(canonical::<f64>)
  }

  proptest! {
    #[test]
    fn remainder_is_symmetric(x in -100.0..100.0f64) {
      let r = remainder(x, TWO_PI);
      prop_assert!(r.abs() <= PI);
      prop_assert!((remainder(x - r, TWO_PI)).abs() <= 1e-12);
    }

    #[test]
    fn positive_distance_range(a in canonical_angle(), b in canonical_angle()) {
      let d = positive_distance(a, b);
      prop_assert!(d >= 0.0);
      prop_assert!(d <= TWO_PI);
      prop_assert_eq!(d == 0.0, a == b);
    }

    #[test]
    fn positive_distance_complements(a in canonical_angle(), b in canonical_angle()) {
      prop_assume!(a != b);
      let turn = positive_distance(a, b) + positive_distance(b, a);
      prop_assert!((turn - TWO_PI).abs() <= 1e-12);
    }
  }
}
