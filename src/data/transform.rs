use super::Point;
use std::ops::{Add, Mul};

/// A 2D affine transform, specialised to the integer-friendly coefficients
/// this crate actually needs: translation, axis scaling, and reflection.
///
/// This is a deliberately smaller cousin of rgeometry's `Transform<T, N>`
/// (`transformation.rs`), which backs its transform with a general
/// `N+1`-square homogeneous `Matrix` so it can represent projective maps and
/// therefore needs `Div`. Every transform this crate's translation- and
/// scale-invariance fuzz properties ever construct is a plain affine map, so
/// we drop the matrix and the `Div` bound and store the six coefficients
/// directly.
#[derive(Debug, Clone)]
pub struct Transform<T> {
  pub a: T,
  pub b: T,
  pub c: T,
  pub d: T,
  pub e: T,
  pub f: T,
}

impl<T> Transform<T>
where
  T: Clone + num_traits::Zero + num_traits::One,
{
  /// The identity transform.
  pub fn identity() -> Transform<T> {
    Transform {
      a: T::one(),
      b: T::zero(),
      c: T::zero(),
      d: T::one(),
      e: T::zero(),
      f: T::zero(),
    }
  }

  pub fn translate(dx: T, dy: T) -> Transform<T> {
    Transform {
      a: T::one(),
      b: T::zero(),
      c: T::zero(),
      d: T::one(),
      e: dx,
      f: dy,
    }
  }

  pub fn scale(sx: T, sy: T) -> Transform<T> {
    Transform {
      a: sx,
      b: T::zero(),
      c: T::zero(),
      d: sy,
      e: T::zero(),
      f: T::zero(),
    }
  }

  pub fn uniform_scale(s: T) -> Transform<T> {
    Transform::scale(s.clone(), s)
  }
}

// &transform * &point = point, mirroring rgeometry's
// `Mul<&Point<T, N>> for &Transform<T, N>` operator shape.
impl<'a, T> Mul<&'a Point<T>> for &'a Transform<T>
where
  T: Clone + Add<Output = T> + Mul<Output = T>,
{
  type Output = Point<T>;
  fn mul(self, p: &'a Point<T>) -> Point<T> {
    Point::new(
      self.a.clone() * p.x.clone() + self.b.clone() * p.y.clone() + self.e.clone(),
      self.c.clone() * p.x.clone() + self.d.clone() * p.y.clone() + self.f.clone(),
    )
  }
}

impl<T> Mul<Point<T>> for &Transform<T>
where
  T: Clone + Add<Output = T> + Mul<Output = T>,
{
  type Output = Point<T>;
  fn mul(self, p: Point<T>) -> Point<T> {
    self * &p
  }
}
