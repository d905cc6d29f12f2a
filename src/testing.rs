//! Property-test strategies for rectangles.
//!
//! Mirrors rgeometry's `src/testing.rs`: implement `Arbitrary` on the data
//! type itself so `#[proptest]` arguments can be typed directly, plus a
//! couple of named helper strategies for shapes the fuzz tests actually
//! want (small collections, in particular, since most interesting behavior
//! shows up with a handful of overlapping rectangles rather than one).

use crate::data::Rect;
use proptest::collection::vec;
use proptest::prelude::*;
use std::ops::Range;

const COORD_RANGE: Range<i64> = -64..64;

impl Arbitrary for Rect<i64> {
  type Parameters = ();
  type Strategy = BoxedStrategy<Rect<i64>>;

  fn arbitrary_with(_args: ()) -> Self::Strategy {
    (COORD_RANGE, COORD_RANGE, COORD_RANGE, COORD_RANGE)
      .prop_map(|(a, b, c, d)| Rect::new(a.min(c), b.min(d), a.max(c), b.max(d)))
      .boxed()
  }
}

/// A handful of rectangles drawn from a small shared coordinate range, so
/// that touching and overlapping configurations show up often.
pub fn small_rect_sets() -> impl Strategy<Value = Vec<Rect<i64>>> {
  vec(any::<Rect<i64>>(), 0..16)
}

/// Like [`small_rect_sets`] but guaranteed non-empty after filtering out
/// degenerate rectangles, for properties that only make sense when the
/// union is non-empty.
pub fn non_empty_rect_sets() -> impl Strategy<Value = Vec<Rect<i64>>> {
  small_rect_sets().prop_filter("at least one non-degenerate rectangle", |rects| {
    rects.iter().any(|r| !r.is_empty())
  })
}
