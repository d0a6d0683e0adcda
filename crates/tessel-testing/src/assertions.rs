//! Assertion helpers for geometry.

use tessel_ui_graphics::{Rect, Size};

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_size_approx_eq(actual: Size, expected: Size, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.width, expected.width, tolerance, &format!("{} - width", msg));
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_size_approx_eq(
        Size::new(actual.width, actual.height),
        Size::new(expected.width, expected.height),
        tolerance,
        msg,
    );
}

/// Assert that `inner` lies completely inside `outer`.
pub fn assert_rect_within(inner: Rect, outer: Rect, msg: &str) {
    assert!(
        inner.x >= outer.x
            && inner.y >= outer.y
            && inner.right() <= outer.right()
            && inner.bottom() <= outer.bottom(),
        "{}: {:?} not within {:?}",
        msg,
        inner,
        outer
    );
}
