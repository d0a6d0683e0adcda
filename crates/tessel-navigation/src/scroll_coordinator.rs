//! Coordinated scrolling between a content scroller and a FREE-mode title bar.
//!
//! The content scroller reports drag start, deltas and drag end. While the
//! header sits between its collapsed and expanded heights it absorbs deltas by
//! changing its own height; past either bound only a sixth of the excess is
//! applied (rubber band). On release a spring snaps the header fully open or
//! fully collapsed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tessel_animation::{SpringAnimation, SpringSpec};

/// Fraction of an over-drag that still moves the header.
pub const RUBBER_BAND_RATIO: f32 = 1.0 / 6.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordScrollState {
    #[default]
    Idle,
    Dragging,
    Settling,
}

struct CoordinatorInner {
    state: CoordScrollState,
    min_offset: f32,
    max_offset: f32,
    rest_offset: f32,
    base_height: f32,
    /// Accumulated drag position before the rubber band is applied.
    raw_offset: f32,
    current_offset: f32,
    spring: Option<SpringAnimation>,
    spring_spec: SpringSpec,
}

impl CoordinatorInner {
    fn banded(&self, raw: f32) -> f32 {
        if raw < self.min_offset {
            self.min_offset + (raw - self.min_offset) * RUBBER_BAND_RATIO
        } else if raw > self.max_offset {
            self.max_offset + (raw - self.max_offset) * RUBBER_BAND_RATIO
        } else {
            raw
        }
    }

    fn transition(&mut self, next: CoordScrollState) {
        if self.state != next {
            log::trace!("title bar scroll {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    fn settle_target(&self) -> f32 {
        let to_min = (self.current_offset - self.min_offset).abs();
        let to_max = (self.max_offset - self.current_offset).abs();
        if to_min < to_max {
            self.min_offset
        } else {
            self.max_offset
        }
    }

    fn reset(&mut self) {
        self.spring = None;
        self.raw_offset = self.rest_offset;
        self.current_offset = self.rest_offset;
        self.transition(CoordScrollState::Idle);
    }
}

/// Shared handle to a title bar's coordinated-scroll state.
///
/// Clones share the same state: the title bar algorithm reads the header
/// height during measure while the scroller drives the transitions.
#[derive(Clone)]
pub struct TitleBarScrollCoordinator {
    inner: Rc<RefCell<CoordinatorInner>>,
}

impl TitleBarScrollCoordinator {
    /// Creates a coordinator moving between `min_offset` and `max_offset`.
    ///
    /// The header has `base_height` when the offset equals `rest_offset`.
    pub fn new(min_offset: f32, max_offset: f32, rest_offset: f32, base_height: f32) -> Self {
        let max_offset = max_offset.max(min_offset);
        let rest_offset = rest_offset.clamp(min_offset, max_offset);
        Self {
            inner: Rc::new(RefCell::new(CoordinatorInner {
                state: CoordScrollState::Idle,
                min_offset,
                max_offset,
                rest_offset,
                base_height,
                raw_offset: rest_offset,
                current_offset: rest_offset,
                spring: None,
                spring_spec: SpringSpec::header_snap(),
            })),
        }
    }

    /// Coordinator for a header that moves between `collapsed` and `expanded`
    /// heights and rests expanded.
    pub fn for_heights(collapsed: f32, expanded: f32) -> Self {
        Self::new(collapsed, expanded, expanded, expanded)
    }

    pub fn with_spring_spec(self, spec: SpringSpec) -> Self {
        self.inner.borrow_mut().spring_spec = spec;
        self
    }

    pub fn state(&self) -> CoordScrollState {
        self.inner.borrow().state
    }

    pub fn current_offset_y(&self) -> f32 {
        self.inner.borrow().current_offset
    }

    pub fn bounds(&self) -> (f32, f32) {
        let inner = self.inner.borrow();
        (inner.min_offset, inner.max_offset)
    }

    pub fn rest_offset(&self) -> f32 {
        self.inner.borrow().rest_offset
    }

    /// Header height for the current frame.
    pub fn header_height(&self) -> f32 {
        let inner = self.inner.borrow();
        inner.base_height + (inner.current_offset - inner.rest_offset)
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().state == CoordScrollState::Settling
    }

    /// Moves the header between `collapsed` and `expanded`, resting expanded.
    ///
    /// Called by the title bar on every measure. A change while idle snaps
    /// the header to its new rest height; a change mid-gesture keeps the
    /// current offset.
    pub fn set_height_bounds(&self, collapsed: f32, expanded: f32) {
        let mut inner = self.inner.borrow_mut();
        let expanded = expanded.max(collapsed);
        if inner.min_offset == collapsed && inner.max_offset == expanded {
            return;
        }
        inner.min_offset = collapsed;
        inner.max_offset = expanded;
        inner.rest_offset = expanded;
        inner.base_height = expanded;
        if inner.state == CoordScrollState::Idle {
            inner.raw_offset = expanded;
            inner.current_offset = expanded;
        }
    }

    /// Drag started on the content. Cancels any settling spring.
    pub fn on_coord_scroll_start(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.spring = None;
        inner.raw_offset = inner.current_offset;
        inner.transition(CoordScrollState::Dragging);
    }

    /// Applies a drag delta and returns how much of it the header consumed.
    ///
    /// Deltas arriving outside a drag are not consumed.
    pub fn on_coord_scroll_update(&self, delta: f32) -> f32 {
        let mut inner = self.inner.borrow_mut();
        if inner.state != CoordScrollState::Dragging || !delta.is_finite() {
            return 0.0;
        }
        inner.raw_offset += delta;
        let next = inner.banded(inner.raw_offset);
        let consumed = next - inner.current_offset;
        inner.current_offset = next;
        consumed
    }

    /// Drag ended; starts snapping to the nearer bound.
    pub fn on_coord_scroll_end(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.state != CoordScrollState::Dragging {
            return;
        }
        let target = inner.settle_target();
        let spring = SpringAnimation::new(inner.current_offset, target, inner.spring_spec);
        if spring.is_finished() {
            inner.current_offset = target;
            inner.raw_offset = target;
            inner.transition(CoordScrollState::Idle);
            return;
        }
        inner.spring = Some(spring);
        inner.transition(CoordScrollState::Settling);
    }

    /// Advances the settling spring. Returns `true` while still settling.
    pub fn on_frame(&self, frame_time_nanos: u64) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(spring) = inner.spring.as_mut() else {
            return false;
        };
        let value = spring.advance(frame_time_nanos);
        let finished = spring.is_finished();
        inner.current_offset = value;
        inner.raw_offset = value;
        if finished {
            inner.spring = None;
            inner.transition(CoordScrollState::Idle);
        }
        !finished
    }

    /// Returns to idle at the rest offset, discarding any spring.
    pub fn reset(&self) {
        self.inner.borrow_mut().reset();
    }

    /// Fold or display-mode change.
    pub fn on_display_mode_change(&self) {
        log::debug!("display mode changed, resetting title bar scroll");
        self.reset();
    }
}

impl Default for TitleBarScrollCoordinator {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl fmt::Debug for TitleBarScrollCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("TitleBarScrollCoordinator")
            .field("state", &inner.state)
            .field("bounds", &(inner.min_offset, inner.max_offset))
            .field("current_offset", &inner.current_offset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/scroll_coordinator_tests.rs"]
mod tests;
