use super::{Display, Driver, VoidDriver};
use crate::canvas::Canvas;
use crate::error::Error;
use crate::geometry::Rect;

/// Records what it was asked to paint.
#[derive(Default)]
struct Recorder {
    frames: Vec<(String, Vec<Rect>)>,
}

impl Driver for Recorder {
    fn name(&self) -> &str {
        "recorder"
    }

    fn paint(&mut self, canvas: &Canvas) {
        let text = canvas.cells().iter().map(|c| c.ch).collect();
        self.frames.push((text, canvas.dirty_rects().to_vec()));
    }
}

#[test]
fn void_driver_paints_nothing() {
    let mut dp = Display::with_canvas(VoidDriver, 2, 2).unwrap();
    assert_eq!(dp.driver().name(), "null");
    dp.refresh();
}

#[test]
fn borrowed_canvas_is_attached_until_drop() {
    let mut cv = Canvas::new(3, 1).unwrap();
    {
        let mut dp = Display::new(Recorder::default(), &mut cv).unwrap();
        assert!(dp.canvas().is_attached());
        assert!(matches!(dp.canvas_mut().resize(5, 5), Err(Error::DriverAttached)));
        assert!(dp.canvas_mut().rotate_left().is_err());
    }
    assert!(!cv.is_attached());
    cv.resize(5, 5).unwrap();
}

#[test]
fn second_display_is_refused() {
    let mut cv = Canvas::new(3, 1).unwrap();
    cv.attach().unwrap();
    assert!(matches!(
        Display::new(VoidDriver, &mut cv),
        Err(Error::DriverAttached)
    ));
    // The failed display must not have detached the canvas.
    assert!(cv.is_attached());
}

#[test]
fn refresh_paints_then_clears_dirty_list() {
    let mut dp = Display::with_canvas(Recorder::default(), 3, 1).unwrap();
    dp.canvas_mut().put_str(0, 0, "abc");
    dp.refresh();
    dp.refresh();

    let frames = &dp.driver().frames;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].0, "abc");
    assert_eq!(frames[0].1, vec![Rect::new(0, 0, 3, 1)]);
    assert!(frames[1].1.is_empty());
    assert!(dp.canvas().dirty_rects().is_empty());
}

#[test]
fn driver_resize_bypasses_attachment() {
    let mut dp = Display::with_canvas(VoidDriver, 3, 1).unwrap();
    dp.resize(6, 4).unwrap();
    assert_eq!((dp.canvas().width(), dp.canvas().height()), (6, 4));
    assert!(dp.canvas().is_attached());
}
