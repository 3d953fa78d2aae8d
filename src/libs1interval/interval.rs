// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed arcs of the unit circle.
//!
//! An arc is stored as a pair of angles `[lo, hi]` in `[-π, π]` and runs counter-clockwise from `lo` to `hi`. When `lo > hi` the arc goes through the branch point `±π`, we call it *inverted*. Two sentinels are represented with both endpoints on the branch point:
//!
//! * the empty interval `[π, -π]`,
//! * the full interval `[-π, π]`.
//!
//! Everywhere else `-π` is rewritten to `π`, so every point has a single representation.
//!
//! # Examples
//!
//! ```rust
//! use s1interval::S1Interval;
//! use gcollections::ops::*;
//! use std::f64::consts::{PI, FRAC_PI_2};
//!
//! // From 3 to -2.5 through the branch point: a short inverted arc.
//! let arc = S1Interval::from_point_pair(-2.5, 3.0);
//! assert!(arc.is_inverted());
//! assert!(arc.contains(&PI));
//! assert!(!arc.contains(&0.0));
//!
//! let right = S1Interval::new(-FRAC_PI_2, FRAC_PI_2);
//! assert_eq!(right.union(&arc), S1Interval::new(3.0, FRAC_PI_2));
//! assert!(right.intersection(&arc).is_empty());
//! ```
//!
//! Equality is exact on the endpoints, use `approx` to compare arcs up to a tolerance:
//!
//! ```rust
//! use s1interval::S1Interval;
//! use approx::{assert_abs_diff_eq, assert_abs_diff_ne};
//!
//! let a = S1Interval::new(1.0, 2.0);
//! assert_abs_diff_eq!(a, S1Interval::new(1.0 + 1e-10, 2.0));
//! assert_abs_diff_ne!(a, S1Interval::new(1.1, 2.0));
//! ```

use crate::angle::{self, PI, TWO_PI};
use crate::ops::{Hull, Whole};
use approx::AbsDiffEq;
use gcollections::kind::*;
use gcollections::ops::*;
use std::fmt::{Display, Formatter, Error};
use std::hash::{Hash, Hasher};

/// Tolerance of the approximate comparison when none is given.
pub const DEFAULT_MAX_ERROR: f64 = 1e-9;

/// Rounding slack allowed on each endpoint when deciding that an expansion covers the circle.
const FULL_EXPANSION_SLACK: f64 = 1e-15;

const EMPTY: S1Interval = S1Interval { lo: PI, hi: -PI };
const FULL: S1Interval = S1Interval { lo: -PI, hi: PI };

#[derive(Debug, Copy, Clone)]
pub struct S1Interval {
  lo: f64,
  hi: f64
}

impl S1Interval
{
  /// Builds `[lo, hi]` with both endpoints in `[-π, π]`.
  ///
  /// An endpoint equal to `-π` is moved to `π` unless the pair describes the empty or the full interval.
  pub fn new(lo: f64, hi: f64) -> S1Interval {
    debug_assert!(lo.abs() <= PI && hi.abs() <= PI,
      "Interval bounds must lie in [-π, π], got [{}, {}].", lo, hi);
    let new_lo = if lo == -PI && hi != PI { PI } else { lo };
    let new_hi = if hi == -PI && lo != PI { PI } else { hi };
    S1Interval::new_unchecked(new_lo, new_hi)
  }

  /// Builds `[lo, hi]` without rewriting `-π`. The endpoints must already be in their canonical form.
  pub const fn new_unchecked(lo: f64, hi: f64) -> S1Interval {
    S1Interval { lo: lo, hi: hi }
  }

  pub const fn empty() -> S1Interval {
    EMPTY
  }

  pub const fn full() -> S1Interval {
    FULL
  }

  /// Minimal interval containing both points, that is the shorter of the two arcs joining them.
  pub fn from_point_pair(p1: f64, p2: f64) -> S1Interval {
    debug_assert!(p1.abs() <= PI && p2.abs() <= PI,
      "Points must lie in [-π, π], got {} and {}.", p1, p2);
    let p1 = angle::canonical(p1);
    let p2 = angle::canonical(p2);
    if angle::positive_distance(p1, p2) <= PI {
      S1Interval::new_unchecked(p1, p2)
    }
    else {
      S1Interval::new_unchecked(p2, p1)
    }
  }

  pub fn lo(&self) -> f64 {
    self.lo
  }

  pub fn hi(&self) -> f64 {
    self.hi
  }

  pub fn is_full(&self) -> bool {
    self.hi - self.lo == TWO_PI
  }

  /// True if `lo > hi`, which holds for the empty interval too.
  pub fn is_inverted(&self) -> bool {
    self.lo > self.hi
  }

  /// Midpoint of the arc in `(-π, π]`. Arbitrary for the empty and full intervals.
  pub fn center(&self) -> f64 {
    let center = 0.5 * (self.lo + self.hi);
    if !self.is_inverted() { center }
    else if center <= 0.0 { center + PI }
    else { center - PI }
  }

  /// Length of the arc. The empty interval has a length of exactly `-1`.
  pub fn length(&self) -> f64 {
    let length = self.hi - self.lo;
    if length >= 0.0 { length }
    else {
      let length = length + TWO_PI;
      if length > 0.0 { length } else { -1.0 }
    }
  }

  /// Same as `contains` but `p` must already be canonical (`-π` is not rewritten).
  pub fn fast_contains(&self, p: f64) -> bool {
    if self.is_inverted() {
      (p >= self.lo || p <= self.hi) && !self.is_empty()
    }
    else {
      p >= self.lo && p <= self.hi
    }
  }

  /// True if the open arc `(lo, hi)` contains `p`.
  pub fn interior_contains(&self, p: f64) -> bool {
    let p = angle::canonical(p);
    if self.is_inverted() {
      p > self.lo || p < self.hi
    }
    else {
      (p > self.lo && p < self.hi) || self.is_full()
    }
  }

  /// Set containment of `other` in `self`. Works with the empty, full and degenerate intervals.
  pub fn contains_interval(&self, other: &S1Interval) -> bool {
    if self.is_inverted() {
      if other.is_inverted() {
        other.lo >= self.lo && other.hi <= self.hi
      }
      else {
        (other.lo >= self.lo || other.hi <= self.hi) && !self.is_empty()
      }
    }
    else {
      if other.is_inverted() {
        self.is_full() || other.is_empty()
      }
      else {
        other.lo >= self.lo && other.hi <= self.hi
      }
    }
  }

  /// True if the interior of `self` contains `other`.
  ///
  /// `x.interior_contains_interval(&x)` only holds for the empty and full intervals.
  pub fn interior_contains_interval(&self, other: &S1Interval) -> bool {
    if self.is_inverted() {
      if !other.is_inverted() {
        other.lo > self.lo || other.hi < self.hi
      }
      else {
        (other.lo > self.lo && other.hi < self.hi) || other.is_empty()
      }
    }
    else {
      if other.is_inverted() {
        self.is_full() || other.is_empty()
      }
      else {
        (other.lo > self.lo && other.hi < self.hi) || self.is_full()
      }
    }
  }

  /// True if both intervals share at least one point.
  ///
  /// `±π` has two representations, hence `[-π, -3]` and `[2, π]` intersect.
  pub fn intersects(&self, other: &S1Interval) -> bool {
    if self.is_empty() || other.is_empty() {
      false
    }
    else if self.is_inverted() {
      // Every non-empty inverted interval contains π.
      other.is_inverted() || other.lo <= self.hi || other.hi >= self.lo
    }
    else if other.is_inverted() {
      other.lo <= self.hi || other.hi >= self.lo
    }
    else {
      other.lo <= self.hi && other.hi >= self.lo
    }
  }

  /// True if the interior of `self` shares a point with `other`.
  pub fn interior_intersects(&self, other: &S1Interval) -> bool {
    if self.is_empty() || other.is_empty() || self.lo == self.hi {
      false
    }
    else if self.is_inverted() {
      other.is_inverted() || other.lo < self.hi || other.hi > self.lo
    }
    else if other.is_inverted() {
      other.lo < self.hi || other.hi > self.lo
    }
    else {
      (other.lo < self.hi && other.hi > self.lo) || self.is_full()
    }
  }

  /// Every point within `radius` of a point of `self`. The empty interval stays empty.
  pub fn expanded(&self, radius: f64) -> S1Interval {
    debug_assert!(radius >= 0.0, "The expansion radius must be non-negative, got {}.", radius);
    if self.is_empty() {
      *self
    }
    // Each endpoint may be off by one bit after the remainder.
    else if self.length() + 2.0 * radius >= TWO_PI - FULL_EXPANSION_SLACK {
      S1Interval::full()
    }
    else {
      let lo = angle::canonical(angle::remainder(self.lo - radius, TWO_PI));
      let hi = angle::remainder(self.hi + radius, TWO_PI);
      S1Interval::new(lo, hi)
    }
  }
}

impl Collection for S1Interval
{
  type Item = f64;
}

impl Empty for S1Interval
{
  fn empty() -> S1Interval {
    S1Interval::empty()
  }
}

impl Whole for S1Interval
{
  fn whole() -> S1Interval {
    S1Interval::full()
  }
}

impl Singleton for S1Interval
{
  fn singleton(p: f64) -> S1Interval {
    debug_assert!(p.abs() <= PI, "Point must lie in [-π, π], got {}.", p);
    let p = angle::canonical(p);
    S1Interval::new_unchecked(p, p)
  }
}

impl IsEmpty for S1Interval
{
  fn is_empty(&self) -> bool {
    self.lo - self.hi == TWO_PI
  }
}

impl Bounded for S1Interval
{
  fn lower(&self) -> f64 {
    self.lo
  }

  fn upper(&self) -> f64 {
    self.hi
  }
}

impl Contains for S1Interval
{
  fn contains(&self, p: &f64) -> bool {
    self.fast_contains(angle::canonical(*p))
  }
}

impl Subset for S1Interval
{
  fn is_subset(&self, other: &S1Interval) -> bool {
    other.contains_interval(self)
  }
}

impl Overlap for S1Interval
{
  fn overlap(&self, other: &S1Interval) -> bool {
    self.intersects(other)
  }
}

impl Disjoint for S1Interval
{
  fn is_disjoint(&self, other: &S1Interval) -> bool {
    !self.intersects(other)
  }
}

impl Hull for S1Interval
{
  type Output = S1Interval;

  fn hull(&self, other: &S1Interval) -> S1Interval {
    if other.is_empty() {
      *self
    }
    else if self.fast_contains(other.lo) {
      if self.fast_contains(other.hi) {
        // Either `other` is inside or the two arcs cover the circle together.
        if self.contains_interval(other) { *self }
        else { S1Interval::full() }
      }
      else {
        S1Interval::new_unchecked(self.lo, other.hi)
      }
    }
    else if self.fast_contains(other.hi) {
      S1Interval::new_unchecked(other.lo, self.hi)
    }
    else if self.is_empty() || other.fast_contains(self.lo) {
      *other
    }
    else {
      // Disjoint arcs, bridge the narrower gap between them.
      let dlo = angle::positive_distance(other.hi, self.lo);
      let dhi = angle::positive_distance(self.hi, other.lo);
      if dlo < dhi {
        S1Interval::new_unchecked(other.lo, self.hi)
      }
      else {
        S1Interval::new_unchecked(self.lo, other.hi)
      }
    }
  }
}

/// Extends the interval by the minimum amount needed to contain the point.
impl Hull<f64> for S1Interval
{
  type Output = S1Interval;

  fn hull(&self, p: &f64) -> S1Interval {
    debug_assert!(p.abs() <= PI, "Point must lie in [-π, π], got {}.", p);
    let p = angle::canonical(*p);
    if self.fast_contains(p) {
      *self
    }
    else if self.is_empty() {
      S1Interval::singleton(p)
    }
    else {
      let dlo = angle::positive_distance(p, self.lo);
      let dhi = angle::positive_distance(self.hi, p);
      if dlo < dhi {
        S1Interval::new(p, self.hi)
      }
      else {
        S1Interval::new(self.lo, p)
      }
    }
  }
}

impl Union for S1Interval
{
  type Output = S1Interval;

  fn union(&self, other: &S1Interval) -> S1Interval {
    self.hull(other)
  }
}

impl Intersection for S1Interval
{
  type Output = S1Interval;

  /// Smallest interval containing the intersection. The intersection itself might be made of two disjoint arcs, in which case the shorter operand is returned.
  fn intersection(&self, other: &S1Interval) -> S1Interval {
    if other.is_empty() {
      S1Interval::empty()
    }
    else if self.fast_contains(other.lo) {
      if self.fast_contains(other.hi) {
        if other.length() < self.length() { *other }
        else { *self }
      }
      else {
        S1Interval::new_unchecked(other.lo, self.hi)
      }
    }
    else if self.fast_contains(other.hi) {
      S1Interval::new_unchecked(self.lo, other.hi)
    }
    // `self` contains neither endpoint: `other` covers it entirely, or they are disjoint.
    else if other.fast_contains(self.lo) {
      *self
    }
    else {
      S1Interval::empty()
    }
  }
}

impl Complement for S1Interval
{
  /// Closure of the complement: a degenerate interval complements to the full circle.
  fn complement(&self) -> S1Interval {
    if self.lo == self.hi {
      S1Interval::full()
    }
    else {
      S1Interval::new_unchecked(self.hi, self.lo)
    }
  }
}

impl PartialEq for S1Interval
{
  fn eq(&self, other: &S1Interval) -> bool {
    self.lo == other.lo && self.hi == other.hi
  }
}

impl Eq for S1Interval {}

// `0.0` and `-0.0` compare equal, so they must hash alike.
fn hash_bits(x: f64) -> u64 {
  if x == 0.0 { 0 } else { x.to_bits() }
}

impl Hash for S1Interval
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    hash_bits(self.lo).hash(state);
    hash_bits(self.hi).hash(state);
  }
}

impl AbsDiffEq for S1Interval
{
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    DEFAULT_MAX_ERROR
  }

  /// True if both endpoints are within `max_error` of each other, summed around the circle. An empty interval is close to any interval of length at most `max_error`.
  fn abs_diff_eq(&self, other: &S1Interval, max_error: f64) -> bool {
    if self.is_empty() {
      other.length() <= max_error
    }
    else if other.is_empty() {
      self.length() <= max_error
    }
    else {
      angle::remainder(other.lo - self.lo, TWO_PI).abs()
        + angle::remainder(other.hi - self.hi, TWO_PI).abs() <= max_error
    }
  }
}

impl Display for S1Interval
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    write!(formatter, "[{}, {}]", self.lo, self.hi)
  }
}
