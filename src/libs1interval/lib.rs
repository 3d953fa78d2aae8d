// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides closed intervals over the circle group ℝ/2πℤ, with angles in radians. They are the one-dimensional building block of spherical geometry, for example the longitude range of a bounding box on the sphere.
//!
//! Because the domain wraps around, an interval `[lo, hi]` with `lo > hi` is meaningful: it goes through the branch point `±π`. Set operations (containment, union, intersection, expansion, complement) are aware of this wrap-around. The generic operations are those of [gcollections](https://crates.io/crates/gcollections), the arc specific ones are in [ops](ops/index.html).
//!
//! # Examples
//!
//! ```rust
//! use s1interval::*;
//! use gcollections::ops::*;
//! use std::f64::consts::{PI, FRAC_PI_2};
//!
//! // A longitude range crossing the antimeridian.
//! let pacific = S1Interval::new(2.5, -2.5);
//! assert!(pacific.is_inverted());
//! assert!(pacific.contains(&-PI));
//! assert!((pacific.length() - (2.0 * PI - 5.0)).abs() < 1e-15);
//!
//! // Growing it point by point.
//! let grown = pacific.hull(&-FRAC_PI_2);
//! assert_eq!(grown, S1Interval::new(2.5, -FRAC_PI_2));
//!
//! assert!(pacific.expanded(PI).is_full());
//! assert!(pacific.complement().contains(&0.0));
//! ```
//!
//! For more examples see the [interval module](interval/index.html).
//!
//! # References
//! * [S2 Geometry Library](http://s2geometry.io/)

pub mod angle;
pub mod interval;
pub mod ops;

pub use crate::angle::positive_distance;
pub use crate::interval::S1Interval;
pub use crate::ops::{Hull, Whole};
