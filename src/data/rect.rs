/// An axis-aligned rectangle, given by its low and high corners.
///
/// `Rect` makes no normalization promises: callers may hand in any
/// `x_lo <= x_hi`, `y_lo <= y_hi` rectangle, including degenerate
/// (zero-width or zero-height) ones. `contour()` filters those out before
/// they ever reach coordinate compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<T> {
  pub x_lo: T,
  pub y_lo: T,
  pub x_hi: T,
  pub y_hi: T,
}

impl<T> Rect<T> {
  pub const fn new(x_lo: T, y_lo: T, x_hi: T, y_hi: T) -> Rect<T> {
    Rect {
      x_lo,
      y_lo,
      x_hi,
      y_hi,
    }
  }
}

impl<T: Ord> Rect<T> {
  /// A rectangle is empty when either extent collapses to zero width or
  /// zero height.
  pub fn is_empty(&self) -> bool {
    self.x_lo >= self.x_hi || self.y_lo >= self.y_hi
  }
}

impl<T: Clone + num_traits::Num> Rect<T> {
  pub fn area(&self) -> T {
    (self.x_hi.clone() - self.x_lo.clone()) * (self.y_hi.clone() - self.y_lo.clone())
  }
}

impl<T> From<(T, T, T, T)> for Rect<T> {
  fn from((x_lo, y_lo, x_hi, y_hi): (T, T, T, T)) -> Rect<T> {
    Rect::new(x_lo, y_lo, x_hi, y_hi)
  }
}
