//! Event stream construction: one entering and one exiting event per
//! non-empty rectangle.

use super::compression::YScale;
use super::segment_tree::Span;
use crate::data::Rect;

/// Whether a sweep event opens or closes a y-interval. `Entering < Exiting`
/// so that, at equal x, entering events sort first — the tie-break that
/// fuses edge-to-edge rectangles instead of splitting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CrossingType {
  Entering,
  Exiting,
}

/// A sweep event: a rectangle boundary crossing the sweep line at `x`,
/// covering y-index span `span`.
#[derive(Debug, Clone, Copy)]
pub struct Event<T> {
  pub x: T,
  pub crossing: CrossingType,
  pub span: Span,
}

// Sort key `(x, crossingType, y_lo_idx, y_hi_idx)`.
impl<T: Ord> PartialEq for Event<T> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp_key() == other.cmp_key()
  }
}
impl<T: Ord> Eq for Event<T> {}
impl<T: Ord> PartialOrd for Event<T> {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}
impl<T: Ord> Ord for Event<T> {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.cmp_key().cmp(&other.cmp_key())
  }
}

impl<T: Ord> Event<T> {
  fn cmp_key(&self) -> (&T, CrossingType, usize, usize) {
    (&self.x, self.crossing, self.span.lo, self.span.hi)
  }
}

/// Build and sort the event stream for every non-empty rectangle in
/// `rects`, using `scale` to map y-values to compressed indices.
pub fn build_events<T: Ord + Clone>(rects: &[Rect<T>], scale: &YScale<T>) -> Vec<Event<T>> {
  let mut events = Vec::with_capacity(rects.len() * 2);
  for rect in rects {
    if rect.is_empty() {
      continue;
    }
    let span = Span::new(scale.index_of(&rect.y_lo), scale.index_of(&rect.y_hi));
    events.push(Event {
      x: rect.x_lo.clone(),
      crossing: CrossingType::Entering,
      span,
    });
    events.push(Event {
      x: rect.x_hi.clone(),
      crossing: CrossingType::Exiting,
      span,
    });
  }
  events.sort();
  events
}
