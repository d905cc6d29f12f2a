use super::{Cycle, Transform};
use std::ops::{Add, Mul};

/// The polygonal union contour of a collection of rectangles: a set of
/// simple, mutually non-intersecting iso-oriented cycles.
///
/// Cycle order is implementation-defined unless `normalize()` has been
/// called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contour<T> {
  pub cycles: Vec<Cycle<T>>,
}

impl<T> Contour<T> {
  pub fn new(cycles: Vec<Cycle<T>>) -> Contour<T> {
    Contour { cycles }
  }

  pub fn empty() -> Contour<T> {
    Contour { cycles: Vec::new() }
  }

  pub fn is_empty(&self) -> bool {
    self.cycles.is_empty()
  }
}

impl<T: Ord + Clone> Contour<T> {
  /// Normalize each cycle, then sort cycles lexicographically by vertex
  /// sequence, breaking ties by length.
  pub fn normalize(&mut self) {
    for cycle in &mut self.cycles {
      cycle.normalize();
    }
    self.cycles.sort();
  }

  pub fn normalized(&self) -> Contour<T> {
    let mut out = self.clone();
    out.normalize();
    out
  }
}

impl<T: Clone> Contour<T> {
  pub fn applying<U>(&self, transform: &Transform<U>) -> Contour<U>
  where
    U: Clone + Add<Output = U> + Mul<Output = U>,
    T: Into<U>,
  {
    Contour::new(self.cycles.iter().map(|c| c.applying(transform)).collect())
  }
}
