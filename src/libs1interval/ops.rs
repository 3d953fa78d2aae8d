// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arc specific operations, complementing the set operations of `gcollections`.

/// Smallest interval containing both `self` and `rhs`.
///
/// `rhs` can be another interval or a single point.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// The interval covering every point of its domain.
pub trait Whole
{
  fn whole() -> Self;
}

#[cfg(test)]
mod tests {
  use super::{Hull, Whole};
  use crate::interval::*;
  use gcollections::ops::*;
  use std::f64::consts::{PI, FRAC_PI_2};

  fn bound_of<I, T>(items: &[T]) -> I where
    I: Empty + Hull<T, Output = I>
  {
    items.iter().fold(I::empty(), |acc, x| acc.hull(x))
  }

  #[test]
  fn hull_of_points() {
    let none: S1Interval = bound_of::<_, f64>(&[]);
    assert!(none.is_empty());
    assert_eq!(bound_of::<S1Interval, _>(&[0.0, FRAC_PI_2, PI]), S1Interval::new(0.0, PI));
    assert_eq!(bound_of::<S1Interval, _>(&[0.0, -PI]), S1Interval::new(0.0, PI));
    assert_eq!(bound_of::<S1Interval, _>(&[0.0, -FRAC_PI_2]), S1Interval::new(-FRAC_PI_2, 0.0));
  }

  #[test]
  fn hull_of_intervals() {
    let quad1 = S1Interval::new(0.0, FRAC_PI_2);
    let quad2 = S1Interval::new(FRAC_PI_2, -PI);
    let quad4 = S1Interval::new(-FRAC_PI_2, 0.0);
    assert_eq!(bound_of::<S1Interval, _>(&[quad1, quad2]), S1Interval::new(0.0, PI));
    assert_eq!(bound_of::<S1Interval, _>(&[quad4, quad1]), S1Interval::new(-FRAC_PI_2, FRAC_PI_2));
    assert!(bound_of::<S1Interval, _>(&[quad1, quad2, quad4]).contains_interval(&quad2));
  }

  #[test]
  fn whole_test() {
    let full: S1Interval = Whole::whole();
    assert!(full.is_full());
    assert_eq!(full, S1Interval::full());
  }
}
