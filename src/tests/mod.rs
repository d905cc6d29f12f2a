//! End-to-end tests against the public `contour()` entry point: the six
//! concrete scenarios plus fuzz properties checked against independent,
//! brute-force reference computations.

use crate::data::{Contour, Point, Rect};
use crate::testing::non_empty_rect_sets;
use crate::{contour, Transform};
use test_strategy::proptest;

fn signed_area2(vertices: &[Point<i64>]) -> i64 {
  let n = vertices.len();
  let mut total = 0i64;
  for i in 0..n {
    let a = &vertices[i];
    let b = &vertices[(i + 1) % n];
    total += a.x * b.y - b.x * a.y;
  }
  total
}

/// The area enclosed by a contour: outer cycles contribute positively,
/// holes (clockwise) contribute negatively, for free from the shoelace
/// formula's sign.
fn contour_area(c: &Contour<i64>) -> i64 {
  c.cycles.iter().map(|cyc| signed_area2(&cyc.vertices)).sum::<i64>() / 2
}

/// An independent, brute-force union area, by testing every grid cell of
/// the arrangement's own coordinate lines for coverage by at least one
/// rectangle. O(n^3) but only ever run against small fuzzed inputs.
fn union_area_bruteforce(rects: &[Rect<i64>]) -> i64 {
  let mut xs: Vec<i64> = rects.iter().flat_map(|r| [r.x_lo, r.x_hi]).collect();
  let mut ys: Vec<i64> = rects.iter().flat_map(|r| [r.y_lo, r.y_hi]).collect();
  xs.sort();
  xs.dedup();
  ys.sort();
  ys.dedup();

  let mut area = 0i64;
  for wx in xs.windows(2) {
    for wy in ys.windows(2) {
      let (x0, x1) = (wx[0], wx[1]);
      let (y0, y1) = (wy[0], wy[1]);
      let covered = rects
        .iter()
        .any(|r| r.x_lo <= x0 && x1 <= r.x_hi && r.y_lo <= y0 && y1 <= r.y_hi);
      if covered {
        area += (x1 - x0) * (y1 - y0);
      }
    }
  }
  area
}

#[test]
fn two_disjoint_rectangles_produce_two_cycles() {
  let rects = vec![Rect::new(0, 0, 3, 2), Rect::new(10, 10, 12, 11)];
  let c = contour(rects);
  assert_eq!(c.cycles.len(), 2);
  assert_eq!(contour_area(&c), 6 + 2);
}

#[test]
fn touching_rectangles_merge_with_no_seam() {
  let rects = vec![Rect::new(0, 0, 2, 2), Rect::new(2, 0, 4, 2)];
  let mut c = contour(rects);
  c.normalize();
  assert_eq!(c.cycles.len(), 1);
  assert_eq!(c.cycles[0].len(), 4);
  assert_eq!(contour_area(&c), 8);
}

#[test]
fn overlapping_rectangles_merge_into_one_notched_cycle() {
  let rects = vec![Rect::new(1, 2, 4, 6), Rect::new(2, 3, 7, 9)];
  let c = contour(rects.clone());
  assert_eq!(c.cycles.len(), 1);
  assert_eq!(contour_area(&c), union_area_bruteforce(&rects));
}

#[test]
fn nested_rectangle_is_fully_absorbed() {
  let rects = vec![Rect::new(0, 0, 10, 10), Rect::new(2, 2, 4, 4)];
  let c = contour(rects);
  assert_eq!(c.cycles.len(), 1);
  assert_eq!(contour_area(&c), 100);
}

#[test]
fn frame_of_rectangles_produces_an_outer_boundary_and_an_inner_hole() {
  let rects = vec![
    Rect::new(0, 0, 3, 1),
    Rect::new(0, 2, 3, 3),
    Rect::new(0, 0, 1, 3),
    Rect::new(2, 0, 3, 3),
  ];
  let c = contour(rects.clone());
  assert_eq!(c.cycles.len(), 2);
  assert_eq!(contour_area(&c), union_area_bruteforce(&rects));
}

#[test]
fn duplicate_rectangles_do_not_change_the_contour() {
  let rects = vec![Rect::new(1, 2, 4, 6), Rect::new(1, 2, 4, 6)];
  let c = contour(rects).normalized();
  let single = contour([Rect::new(1, 2, 4, 6)]).normalized();
  assert_eq!(c, single);
}

#[proptest]
fn area_matches_an_independent_brute_force_computation(
  #[strategy(non_empty_rect_sets())] rects: Vec<Rect<i64>>,
) {
  let c = contour(rects.clone());
  assert_eq!(contour_area(&c), union_area_bruteforce(&rects));
}

#[proptest]
fn translation_commutes_with_taking_the_contour(
  #[strategy(non_empty_rect_sets())] rects: Vec<Rect<i64>>,
  dx: i8,
  dy: i8,
) {
  let (dx, dy) = (dx as i64, dy as i64);
  let translated: Vec<Rect<i64>> = rects
    .iter()
    .map(|r| Rect::new(r.x_lo + dx, r.y_lo + dy, r.x_hi + dx, r.y_hi + dy))
    .collect();
  let moved_then_contoured = contour(translated).normalized();
  let contoured_then_moved = contour(rects)
    .applying(&Transform::translate(dx, dy))
    .normalized();
  assert_eq!(moved_then_contoured, contoured_then_moved);
}

#[proptest]
fn union_is_idempotent_under_duplication(
  #[strategy(non_empty_rect_sets())] rects: Vec<Rect<i64>>,
) {
  let mut doubled = rects.clone();
  doubled.extend(rects.iter().cloned());
  assert_eq!(contour(doubled).normalized(), contour(rects).normalized());
}

#[proptest]
fn positive_integer_scaling_commutes_with_taking_the_contour(
  #[strategy(non_empty_rect_sets())] rects: Vec<Rect<i64>>,
  #[strategy(1i64..5)] k: i64,
) {
  let scaled: Vec<Rect<i64>> = rects
    .iter()
    .map(|r| Rect::new(r.x_lo * k, r.y_lo * k, r.x_hi * k, r.y_hi * k))
    .collect();
  let scaled_then_contoured = contour(scaled).normalized();
  let contoured_then_scaled = contour(rects)
    .applying(&Transform::uniform_scale(k))
    .normalized();
  assert_eq!(scaled_then_contoured, contoured_then_scaled);
}
