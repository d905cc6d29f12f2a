use super::{Point, Transform};
use std::ops::{Add, Mul};

/// A closed, axis-aligned polygonal cycle: an ordered, non-empty sequence of
/// vertices with the closing edge implicit.
///
/// Edges alternate strictly between horizontal and vertical, and the vertex
/// count is always even: 4 for a bare rectangle, `4 + 4*k` for `k` overlap
/// notches. Non-hole cycles are listed counter-clockwise; holes are
/// clockwise, produced automatically by the sweep's Entering/Exiting edge
/// convention — see `algorithms::sweep`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<T> {
  pub vertices: Vec<Point<T>>,
}

impl<T> Cycle<T> {
  pub fn new(vertices: Vec<Point<T>>) -> Cycle<T> {
    debug_assert!(!vertices.is_empty(), "a cycle must have at least one edge");
    debug_assert!(
      vertices.len() % 2 == 0,
      "a cycle's vertex count must be even"
    );
    Cycle { vertices }
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }
}

impl<T: Ord + Clone> Cycle<T> {
  /// Rotate the vertex sequence so the lexicographically smallest `(x, y)`
  /// vertex is first.
  ///
  /// Whether normalization should also reverse the vertex order is left
  /// open by design; this crate takes the rotation-only reading (see
  /// DESIGN.md, "Open Question: normalize() direction"), so `normalize()`
  /// never changes a cycle's orientation.
  pub fn normalize(&mut self) {
    if self.vertices.len() <= 1 {
      return;
    }
    let (min_idx, _) = self
      .vertices
      .iter()
      .enumerate()
      .min_by(|(_, a), (_, b)| a.cmp(b))
      .expect("non-empty cycle");
    self.vertices.rotate_left(min_idx);
  }

  pub fn normalized(&self) -> Cycle<T> {
    let mut out = self.clone();
    out.normalize();
    out
  }
}

impl<T: Clone> Cycle<T> {
  /// Map an affine transform over every vertex.
  pub fn applying<U>(&self, transform: &Transform<U>) -> Cycle<U>
  where
    U: Clone + Add<Output = U> + Mul<Output = U>,
    T: Into<U>,
  {
    Cycle::new(
      self
        .vertices
        .iter()
        .map(|p| transform * &p.map(|v| v.into()))
        .collect(),
    )
  }
}

impl<T: Ord> PartialOrd for Cycle<T> {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}
// Vec<Point<T>>'s derived Ord is already lexicographic-with-shorter-first,
// which is exactly the "breaking ties by length" rule `Contour::normalize()`
// needs for its cycle sort.
impl<T: Ord> Ord for Cycle<T> {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.vertices.cmp(&other.vertices)
  }
}
