//! The top-level pipeline: wire coordinate compression, the sweep, and
//! cycle stitching together into the public `contour()` entry point.

use super::compression::YScale;
use super::events::build_events;
use super::stitch::stitch;
use super::sweep::sweep;
use crate::data::{Contour, Rect};
use crate::ContourScalar;

/// Compute the polygonal union contour of a collection of rectangles.
///
/// Rectangles may overlap, touch, or be given in any order; degenerate
/// (zero-width or zero-height) rectangles contribute nothing. An empty input
/// (or an input made entirely of degenerate rectangles) yields an empty
/// contour.
pub fn contour<T: ContourScalar>(rects: impl IntoIterator<Item = Rect<T>>) -> Contour<T> {
  let rects: Vec<Rect<T>> = rects.into_iter().collect();
  let scale = match YScale::build(&rects) {
    Some(scale) => scale,
    None => return Contour::empty(),
  };
  let events = build_events(&rects, &scale);
  let edges = sweep(&events, &scale);
  Contour::new(stitch(&edges))
}
