//! The polygonal union contour of a collection of axis-aligned rectangles,
//! computed by the Lipski & Preparata (1979) plane-sweep and segment-tree
//! algorithm: coordinate compression, an event-driven sweep that tracks
//! coverage with a segment tree, and a final stitching pass that assembles
//! the reported boundary edges into closed cycles.
//!
//! ```
//! use isocontour::{contour, Rect};
//!
//! let rects = vec![Rect::new(0, 0, 4, 2), Rect::new(2, 1, 6, 5)];
//! let region = contour(rects);
//! assert_eq!(region.cycles.len(), 1);
//! ```

use num_traits::{One, Zero};
use std::ops::{Add, Mul, Sub};

mod algorithms;
pub mod data;
#[cfg(test)]
mod tests;
pub mod testing;

pub use algorithms::contour;
pub use data::{Contour, Cycle, Point, Rect, Transform};

/// The scalar coordinate type a caller's rectangles are given in.
///
/// Bundles exactly what the pipeline needs — a total order (no NaN-style
/// tie-breaking), the ring operations coordinate arithmetic and areas use,
/// and cheap `Clone` — rather than reaching for a kitchen-sink numeric
/// trait. Any exact integer type works: `i32`, `i64`, `i128`. Floating-point
/// types are a poor fit since equality-based coordinate compression assumes
/// exact comparisons.
pub trait ContourScalar:
  Clone + Ord + Zero + One + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> ContourScalar for T where
  T: Clone + Ord + Zero + One + Add<Output = T> + Sub<Output = T> + Mul<Output = T>
{
}

/// Failure modes the sweep can detect in its own bookkeeping.
///
/// These indicate a broken invariant in the event stream or segment tree,
/// never a property of the caller's rectangles (any set of `Rect<T>` is a
/// valid input) — in debug builds they surface as panics instead, since
/// they should be unreachable in a correct implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The link map built while stitching edges into cycles was not a
  /// perfect matching: some edge's end point had no corresponding start
  /// point at the same height.
  UnmatchedEdge,
}
