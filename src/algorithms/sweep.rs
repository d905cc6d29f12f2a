//! The sweep driver: processes events left-to-right, drives the segment
//! tree, and collects emitted y-sub-spans into vertical contour edges.

use super::compression::YScale;
use super::events::{CrossingType, Event};
use super::segment_tree::{SegmentTree, Span};
use crate::data::Point;

/// A vertical edge of the output contour, still tagged with the crossing
/// type of the event that produced it.
///
/// `start`/`end` already encode the Entering-upward / Exiting-downward
/// traversal convention that gives non-hole cycles their counter-clockwise
/// orientation for free, with no post-processing pass needed in
/// `algorithms::contour`.
#[derive(Debug, Clone)]
pub struct ContourEdge<T> {
  pub x: T,
  pub y_lo: T,
  pub y_hi: T,
  pub crossing: CrossingType,
}

impl<T: Clone> ContourEdge<T> {
  pub fn start(&self) -> Point<T> {
    match self.crossing {
      CrossingType::Entering => Point::new(self.x.clone(), self.y_hi.clone()),
      CrossingType::Exiting => Point::new(self.x.clone(), self.y_lo.clone()),
    }
  }

  pub fn end(&self) -> Point<T> {
    match self.crossing {
      CrossingType::Entering => Point::new(self.x.clone(), self.y_lo.clone()),
      CrossingType::Exiting => Point::new(self.x.clone(), self.y_hi.clone()),
    }
  }
}

/// Coalesce consecutively emitted `[a, b)` spans that touch end-to-end into
/// single runs. Returns the resulting even-length list of endpoints,
/// interpreted as `(y_lo_idx, y_hi_idx)` pairs.
#[derive(Default)]
struct Endpoints {
  values: Vec<usize>,
}

impl Endpoints {
  fn push_span(&mut self, span: Span) {
    if self.values.last() == Some(&span.lo) {
      self.values.pop();
    } else {
      self.values.push(span.lo);
    }
    self.values.push(span.hi);
  }

  fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    debug_assert!(
      self.values.len() % 2 == 0,
      "coalesced endpoints must form complete pairs"
    );
    self.values.chunks(2).map(|pair| (pair[0], pair[1]))
  }
}

/// Run the sweep over `events`, returning the vertical contour edges in the
/// order the sweep produced them (x non-decreasing; within an x, in the
/// order the segment tree reported them).
pub fn sweep<T: Ord + Clone>(events: &[Event<T>], scale: &YScale<T>) -> Vec<ContourEdge<T>> {
  let mut tree = SegmentTree::new(scale.leaf_count());
  let mut edges = Vec::new();

  let mut i = 0;
  while i < events.len() {
    let x = events[i].x.clone();
    let mut endpoints = Endpoints::default();
    while i < events.len() && events[i].x == x {
      let event = &events[i];
      match event.crossing {
        CrossingType::Entering => {
          tree.insert(event.span, &mut |span| endpoints.push_span(span));
        }
        CrossingType::Exiting => {
          tree.remove(event.span, &mut |span| endpoints.push_span(span));
        }
      }
      let crossing = event.crossing;
      for (lo, hi) in endpoints_for_event(&mut endpoints, crossing) {
        edges.push(ContourEdge {
          x: x.clone(),
          y_lo: scale.value_at(lo).clone(),
          y_hi: scale.value_at(hi).clone(),
          crossing,
        });
      }
      i += 1;
    }
  }
  edges
}

// Each event's own endpoints are drained immediately after processing it,
// since coalescing only ever applies within one event's own batch of
// reported spans.
fn endpoints_for_event(endpoints: &mut Endpoints, _crossing: CrossingType) -> Vec<(usize, usize)> {
  let pairs: Vec<(usize, usize)> = endpoints.pairs().collect();
  endpoints.values.clear();
  pairs
}
