use super::{DirtyList, MAX_DIRTY_RECTS};
use crate::canvas::Canvas;
use crate::geometry::Rect;

fn assert_disjoint(rects: &[Rect]) {
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
        }
    }
}

fn covered(rects: &[Rect], x: i32, y: i32) -> bool {
    rects.iter().any(|r| r.contains(x, y))
}

#[test]
fn empty_rects_are_dropped() {
    let mut list = DirtyList::default();
    list.add(Rect::new(3, 3, 0, 4));
    list.add(Rect::new(3, 3, 2, -1));
    assert!(list.as_slice().is_empty());
}

#[test]
fn overlapping_rects_merge() {
    let mut list = DirtyList::default();
    list.add(Rect::new(0, 0, 3, 3));
    list.add(Rect::new(2, 2, 3, 3));
    assert_eq!(list.as_slice(), &[Rect::new(0, 0, 5, 5)]);
}

#[test]
fn disjoint_rects_are_kept_apart() {
    let mut list = DirtyList::default();
    list.add(Rect::new(0, 0, 1, 1));
    list.add(Rect::new(5, 5, 1, 1));
    assert_eq!(list.as_slice().len(), 2);
}

#[test]
fn merge_cascades_through_grown_rect() {
    let mut list = DirtyList::default();
    list.add(Rect::new(0, 0, 2, 2));
    list.add(Rect::new(6, 0, 2, 2));
    // Bridges both, and the union touches neither other rect afterwards.
    list.add(Rect::new(1, 0, 6, 1));
    assert_eq!(list.as_slice(), &[Rect::new(0, 0, 8, 2)]);
}

#[test]
fn overflow_merges_cheapest_pair() {
    let mut list = DirtyList::default();
    for i in 0..MAX_DIRTY_RECTS as i32 {
        list.add(Rect::new(i * 10, 0, 1, 1));
    }
    assert_eq!(list.as_slice().len(), MAX_DIRTY_RECTS);

    // Next to the first rect, so merging those two wastes the least.
    list.add(Rect::new(2, 0, 1, 1));
    let rects = list.as_slice();
    assert_eq!(rects.len(), MAX_DIRTY_RECTS);
    assert!(rects.contains(&Rect::new(0, 0, 3, 1)));
    assert_disjoint(rects);
}

#[test]
fn remove_carves_region() {
    let mut list = DirtyList::default();
    list.add(Rect::new(0, 0, 6, 6));
    list.remove(Rect::new(2, 2, 2, 2));

    let rects = list.as_slice();
    assert_disjoint(rects);
    assert!(!covered(rects, 2, 2));
    assert!(!covered(rects, 3, 3));
    assert!(covered(rects, 0, 0));
    assert!(covered(rects, 5, 5));
    assert!(covered(rects, 4, 2));
}

#[test]
fn canvas_add_clips_to_bounds() {
    let mut cv = Canvas::new(10, 5).unwrap();
    cv.add_dirty_rect(Rect::new(-4, -4, 8, 8));
    assert_eq!(cv.dirty_rects(), &[Rect::new(0, 0, 4, 4)]);

    cv.add_dirty_rect(Rect::new(20, 20, 3, 3));
    assert_eq!(cv.dirty_rects().len(), 1);
}

#[test]
fn new_canvas_is_clean() {
    let cv = Canvas::new(10, 5).unwrap();
    assert!(cv.dirty_rects().is_empty());
}

#[test]
fn disabled_tracking_ignores_draws_but_not_explicit_adds() {
    let mut cv = Canvas::new(10, 5).unwrap();
    cv.disable_dirty_rect();
    cv.disable_dirty_rect();
    cv.put_char(1, 1, 'x');
    assert!(cv.dirty_rects().is_empty());

    cv.add_dirty_rect(Rect::new(1, 1, 1, 1));
    assert_eq!(cv.dirty_rects(), &[Rect::new(1, 1, 1, 1)]);

    cv.enable_dirty_rect();
    assert!(!cv.is_dirty_tracking_enabled());
    cv.enable_dirty_rect();
    assert!(cv.is_dirty_tracking_enabled());

    // Extra enable at depth zero is ignored.
    cv.enable_dirty_rect();
    assert!(cv.is_dirty_tracking_enabled());
    cv.disable_dirty_rect();
    assert!(!cv.is_dirty_tracking_enabled());
}

#[test]
fn deferred_marking_matches_direct_tracking() {
    let mut direct = Canvas::new(20, 10).unwrap();
    direct.fill_box(2, 2, 5, 3, '#');

    let mut deferred = Canvas::new(20, 10).unwrap();
    deferred.disable_dirty_rect();
    deferred.fill_box(2, 2, 5, 3, '#');
    deferred.enable_dirty_rect();
    deferred.add_dirty_rect(Rect::new(2, 2, 5, 3));

    assert_eq!(direct.dirty_rects(), deferred.dirty_rects());
    assert_eq!(direct.cells(), deferred.cells());
}

#[test]
fn clear_resets_list() {
    let mut cv = Canvas::new(10, 5).unwrap();
    cv.put_str(0, 0, "hello");
    assert!(!cv.dirty_rects().is_empty());
    cv.clear_dirty_rect_list();
    assert!(cv.dirty_rects().is_empty());
}

#[test]
fn put_char_marks_only_changed_cells() {
    let mut cv = Canvas::new(10, 5).unwrap();
    cv.put_char(3, 2, ' ');
    assert!(cv.dirty_rects().is_empty());

    cv.put_char(3, 2, 'a');
    assert_eq!(cv.dirty_rects(), &[Rect::new(3, 2, 1, 1)]);
    cv.clear_dirty_rect_list();

    cv.put_char(3, 2, 'a');
    assert!(cv.dirty_rects().is_empty());
}

#[test]
fn draws_cover_every_changed_cell() {
    let mut cv = Canvas::new(30, 15).unwrap();
    let before = cv.cells().to_vec();
    cv.draw_line(0, 0, 29, 14, '*');
    cv.draw_circle(15, 7, 5, 'o');
    cv.fill_triangle(2, 12, 10, 3, 20, 13, '%');
    cv.put_str(-2, 4, "clip me");

    let rects = cv.dirty_rects().to_vec();
    assert!(rects.len() <= MAX_DIRTY_RECTS);
    assert_disjoint(&rects);
    for (i, (old, new)) in before.iter().zip(cv.cells()).enumerate() {
        if old != new {
            let (x, y) = ((i % 30) as i32, (i / 30) as i32);
            assert!(covered(&rects, x, y), "cell ({x}, {y}) changed but is clean");
        }
    }
}
