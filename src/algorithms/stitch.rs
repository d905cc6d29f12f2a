//! The cycle stitcher: pairs vertical contour edges by their shared
//! horizontal connectors and walks the resulting link graph into cycles.
//!
//! The link graph is a plain `edge_index -> edge_index` successor map, torn
//! down by repeated removal as cycles are walked off it — the same shape
//! geo's sweep-based boolean-op assembly uses for its "snake" successor
//! bookkeeping, rather than a heap-allocated graph with back-pointers.

use super::sweep::ContourEdge;
use crate::data::Cycle;
use std::collections::HashMap;

struct Vertex<T> {
  y: T,
  x: T,
  edge: usize,
  is_end: bool,
}

/// Build the functional bijection `end-of-edge -> start-of-next-edge` by
/// sorting every edge's two endpoints lexicographically on `(y, x)` and
/// pairing them up two at a time.
fn build_successors<T: Ord + Clone>(edges: &[ContourEdge<T>]) -> HashMap<usize, usize> {
  let mut vertices = Vec::with_capacity(edges.len() * 2);
  for (idx, edge) in edges.iter().enumerate() {
    let start = edge.start();
    let end = edge.end();
    vertices.push(Vertex {
      y: start.y,
      x: start.x,
      edge: idx,
      is_end: false,
    });
    vertices.push(Vertex {
      y: end.y,
      x: end.x,
      edge: idx,
      is_end: true,
    });
  }
  vertices.sort_by(|a, b| (&a.y, &a.x).cmp(&(&b.y, &b.x)));

  debug_assert!(
    vertices.len() % 2 == 0,
    "a horizontal line with contour activity is crossed an even number of times"
  );

  let mut successors = HashMap::with_capacity(edges.len());
  for pair in vertices.chunks_exact(2) {
    let a = &pair[0];
    let b = &pair[1];
    debug_assert!(
      a.is_end != b.is_end,
      "exactly one of a stitched pair must be an edge-end"
    );
    if a.is_end {
      successors.insert(a.edge, b.edge);
    } else {
      successors.insert(b.edge, a.edge);
    }
  }
  successors
}

/// Walk the chain starting at `start`, consuming links from `successors` as
/// it goes, and return the closed vertex sequence for one cycle.
fn walk_cycle<T: Clone>(
  start: usize,
  successors: &mut HashMap<usize, usize>,
  edges: &[ContourEdge<T>],
) -> Cycle<T> {
  let mut vertices = Vec::new();
  let mut current = start;
  loop {
    vertices.push(edges[current].end());
    let next = successors
      .remove(&current)
      .expect("the link map is a perfect matching on edge indices");
    vertices.push(edges[next].start());
    if next == start {
      break;
    }
    current = next;
  }
  Cycle::new(vertices)
}

/// Assemble vertical contour edges into closed cycles.
pub fn stitch<T: Ord + Clone>(edges: &[ContourEdge<T>]) -> Vec<Cycle<T>> {
  let mut successors = build_successors(edges);
  let mut cycles = Vec::new();
  while let Some(&start) = successors.keys().next() {
    cycles.push(walk_cycle(start, &mut successors, edges));
  }
  cycles
}
