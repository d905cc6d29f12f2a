//! Coordinate compression: collect the distinct y-coordinates of non-empty
//! rectangles into a dense index space.

use crate::data::Rect;
use std::collections::BTreeMap;

/// A sorted, strictly-increasing sequence of distinct y-values, with a
/// reverse `y -> index` map used only while building events. Scoped to a
/// single `contour()` call and dropped after the sweep.
pub struct YScale<T> {
  ys: Vec<T>,
  index_of_y: BTreeMap<T, usize>,
}

impl<T: Ord + Clone> YScale<T> {
  /// Build the scale from the non-empty rectangles' `y_lo`/`y_hi` values.
  ///
  /// Returns `None` if no non-empty rectangle remains after filtering — the
  /// pipeline's single early-out, handled by the caller by returning an
  /// empty `Contour` immediately.
  pub fn build<'a, I>(rects: I) -> Option<YScale<T>>
  where
    I: IntoIterator<Item = &'a Rect<T>>,
    T: 'a,
  {
    let mut set: std::collections::BTreeSet<T> = std::collections::BTreeSet::new();
    for rect in rects {
      if rect.is_empty() {
        continue;
      }
      set.insert(rect.y_lo.clone());
      set.insert(rect.y_hi.clone());
    }
    if set.is_empty() {
      return None;
    }
    let ys: Vec<T> = set.into_iter().collect();
    debug_assert!(
      ys.len() >= 2,
      "every non-empty rectangle contributes two distinct y values"
    );
    let index_of_y = ys
      .iter()
      .cloned()
      .enumerate()
      .map(|(i, y)| (y, i))
      .collect();
    Some(YScale { ys, index_of_y })
  }

  pub fn index_of(&self, y: &T) -> usize {
    *self
      .index_of_y
      .get(y)
      .expect("y value must come from a rectangle this scale was built from")
  }

  pub fn value_at(&self, index: usize) -> &T {
    &self.ys[index]
  }

  /// Number of unit leaves the segment tree needs, i.e. `|ys| - 1`.
  pub fn leaf_count(&self) -> usize {
    self.ys.len() - 1
  }
}
