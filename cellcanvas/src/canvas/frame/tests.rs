use crate::canvas::Canvas;
use crate::geometry::Point;

fn canvas() -> Canvas {
    Canvas::new(4, 2).unwrap()
}

#[test]
fn new_canvas_has_one_named_frame() {
    let cv = canvas();
    assert_eq!(cv.frame_count(), 1);
    assert_eq!(cv.frame_index(), 0);
    assert_eq!(cv.frame_name(), "frame#00000000");
}

#[test]
fn create_frame_copies_active_frame() {
    let mut cv = canvas();
    cv.put_str(0, 0, "ab");
    cv.goto(3, 1);
    cv.create_frame(1).unwrap();

    assert_eq!(cv.frame_count(), 2);
    assert_eq!(cv.frame_index(), 0);

    cv.set_frame(1).unwrap();
    assert_eq!(cv.get_char(0, 0), 'a');
    assert_eq!(cv.get_char(1, 0), 'b');
    assert_eq!(cv.cursor(), Point::new(3, 1));
    assert_eq!(cv.frame_name(), "frame#00000001");
}

#[test]
fn create_frame_before_active_shifts_its_index() {
    let mut cv = canvas();
    cv.put_char(0, 0, 'x');
    cv.create_frame(0).unwrap();

    assert_eq!(cv.frame_index(), 1);
    assert_eq!(cv.frame_name(), "frame#00000000");
    assert_eq!(cv.get_char(0, 0), 'x');
}

#[test]
fn create_frame_clamps_index() {
    let mut cv = canvas();
    cv.create_frame(99).unwrap();
    cv.create_frame(-5).unwrap();
    assert_eq!(cv.frame_count(), 3);
    // Inserted at the front, so the original frame moved to index 1.
    assert_eq!(cv.frame_index(), 1);
    cv.set_frame(2).unwrap();
    assert_eq!(cv.frame_name(), "frame#00000001");
    cv.set_frame(0).unwrap();
    assert_eq!(cv.frame_name(), "frame#00000002");
}

#[test]
fn frames_are_independent() {
    let mut cv = canvas();
    cv.create_frame(1).unwrap();
    cv.set_frame(1).unwrap();
    cv.put_char(0, 0, 'z');
    cv.set_frame(0).unwrap();
    assert_eq!(cv.get_char(0, 0), ' ');
}

#[test]
fn set_frame_out_of_range_fails() {
    let mut cv = canvas();
    assert!(cv.set_frame(1).is_err());
    assert_eq!(cv.frame_index(), 0);
}

#[test]
fn set_frame_marks_everything_dirty() {
    let mut cv = canvas();
    cv.create_frame(1).unwrap();
    cv.clear_dirty_rect_list();
    cv.set_frame(1).unwrap();
    assert_eq!(cv.dirty_rects(), &[cv.bounds()]);
}

#[test]
fn free_only_frame_fails() {
    let mut cv = canvas();
    assert!(cv.free_frame(0).is_err());
    assert_eq!(cv.frame_count(), 1);
}

#[test]
fn free_active_frame_selects_first() {
    let mut cv = canvas();
    cv.create_frame(1).unwrap();
    cv.create_frame(2).unwrap();
    cv.set_frame(2).unwrap();
    cv.clear_dirty_rect_list();

    cv.free_frame(2).unwrap();
    assert_eq!(cv.frame_count(), 2);
    assert_eq!(cv.frame_index(), 0);
    assert!(!cv.dirty_rects().is_empty());
}

#[test]
fn free_frame_before_active_shifts_index() {
    let mut cv = canvas();
    cv.create_frame(1).unwrap();
    cv.set_frame(1).unwrap();
    cv.set_frame_name("second");

    cv.free_frame(-3).unwrap();
    assert_eq!(cv.frame_index(), 0);
    assert_eq!(cv.frame_name(), "second");
}

#[test]
fn rename_frame() {
    let mut cv = canvas();
    cv.set_frame_name("intro");
    assert_eq!(cv.frame_name(), "intro");
}
