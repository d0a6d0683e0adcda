//! Layout constraint system

use tessel_ui_graphics::{non_negative, EdgeInsets, Size};

/// A size where each axis may be left open.
///
/// `None` means "let the algorithm pick", which is distinct from `Some(0.0)`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct OptionalSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl OptionalSize {
    pub const NONE: OptionalSize = OptionalSize {
        width: None,
        height: None,
    };

    pub const fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    pub const fn from_size(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
        }
    }

    pub fn with_width(self, width: f32) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }

    pub fn with_height(self, height: f32) -> Self {
        Self {
            height: Some(height),
            ..self
        }
    }

    /// Returns true if both axes are set.
    pub fn is_full(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    /// Fills unset axes from `fallback`.
    pub fn or(self, fallback: OptionalSize) -> Self {
        Self {
            width: self.width.or(fallback.width),
            height: self.height.or(fallback.height),
        }
    }

    pub fn to_size(self) -> Option<Size> {
        Some(Size::new(self.width?, self.height?))
    }
}

/// Bounds under which a node must choose its size.
///
/// Produced by a parent and consumed by the child's `measure`. `min_size` must
/// not exceed `max_size`; [`LayoutConstraint::normalized`] clamps `min` down to
/// `max` on the offending axis instead of failing, and every resolution helper
/// here goes through it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConstraint {
    pub min_size: Size,
    pub max_size: Size,
    /// Size against which percentage lengths resolve.
    pub percent_reference: Size,
    /// Forced size per axis; overrides natural sizing when present.
    pub self_ideal_size: OptionalSize,
    /// Exact size the parent will have, when the child must match it before
    /// the parent itself is finalized.
    pub parent_ideal_size: OptionalSize,
}

impl Default for LayoutConstraint {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl LayoutConstraint {
    /// No bounds at all.
    pub fn unbounded() -> Self {
        Self {
            min_size: Size::ZERO,
            max_size: Size::new(f32::INFINITY, f32::INFINITY),
            percent_reference: Size::ZERO,
            self_ideal_size: OptionalSize::NONE,
            parent_ideal_size: OptionalSize::NONE,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given size).
    pub fn loose(max_size: Size) -> Self {
        Self {
            min_size: Size::ZERO,
            max_size,
            percent_reference: max_size,
            self_ideal_size: OptionalSize::NONE,
            parent_ideal_size: OptionalSize::NONE,
        }
    }

    /// Creates constraints that force exactly `size`.
    pub fn tight(size: Size) -> Self {
        Self {
            min_size: size,
            max_size: size,
            percent_reference: size,
            self_ideal_size: OptionalSize::from_size(size),
            parent_ideal_size: OptionalSize::NONE,
        }
    }

    /// Forced zero ideal size, used for hidden children.
    pub fn zero() -> Self {
        Self::tight(Size::ZERO)
    }

    /// Returns true if all bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.max_size.width.is_finite() && self.max_size.height.is_finite()
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_size.width.is_finite()
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_size.height.is_finite()
    }

    /// Clamps `min_size` to `max_size` per axis when a caller handed in an
    /// inverted pair.
    pub fn normalized(self) -> Self {
        let mut result = self;
        if result.min_size.width > result.max_size.width {
            log::warn!(
                "layout constraint min width {} exceeds max width {}, clamping",
                result.min_size.width,
                result.max_size.width
            );
            result.min_size.width = result.max_size.width;
        }
        if result.min_size.height > result.max_size.height {
            log::warn!(
                "layout constraint min height {} exceeds max height {}, clamping",
                result.min_size.height,
                result.max_size.height
            );
            result.min_size.height = result.max_size.height;
        }
        result.min_size = result.min_size.non_negative();
        result
    }

    /// Constrains the provided size to fit within these bounds.
    pub fn constrain(&self, size: Size) -> Size {
        let bounds = self.normalized();
        Size::new(
            size.width
                .clamp(bounds.min_size.width, bounds.max_size.width.max(bounds.min_size.width)),
            size.height.clamp(
                bounds.min_size.height,
                bounds.max_size.height.max(bounds.min_size.height),
            ),
        )
        .non_negative()
    }

    /// Resolves a node's frame size from its natural size.
    ///
    /// A self ideal size wins on its axis; the result is always kept inside the
    /// bounds and never negative.
    pub fn resolve(&self, natural: Size) -> Size {
        let width = self.self_ideal_size.width.unwrap_or(natural.width);
        let height = self.self_ideal_size.height.unwrap_or(natural.height);
        self.constrain(Size::new(width, height))
    }

    /// Largest size the node may take; unbounded axes fall back to the
    /// self ideal size, then to zero.
    pub fn max_resolved(&self) -> Size {
        let width = self
            .self_ideal_size
            .width
            .unwrap_or(if self.has_bounded_width() {
                self.max_size.width
            } else {
                0.0
            });
        let height = self
            .self_ideal_size
            .height
            .unwrap_or(if self.has_bounded_height() {
                self.max_size.height
            } else {
                0.0
            });
        Size::new(non_negative(width), non_negative(height))
    }

    pub fn with_self_ideal_size(self, ideal: OptionalSize) -> Self {
        Self {
            self_ideal_size: ideal,
            ..self
        }
    }

    pub fn with_parent_ideal_size(self, ideal: OptionalSize) -> Self {
        Self {
            parent_ideal_size: ideal,
            ..self
        }
    }

    pub fn with_self_ideal_width(self, width: f32) -> Self {
        Self {
            self_ideal_size: self.self_ideal_size.with_width(width),
            ..self
        }
    }

    pub fn with_self_ideal_height(self, height: f32) -> Self {
        Self {
            self_ideal_size: self.self_ideal_size.with_height(height),
            ..self
        }
    }

    /// Creates new constraints with the given max width; min width is pulled
    /// down with it if necessary.
    pub fn with_max_width(self, max_width: f32) -> Self {
        let max_width = non_negative(max_width);
        Self {
            min_size: Size::new(self.min_size.width.min(max_width), self.min_size.height),
            max_size: Size::new(max_width, self.max_size.height),
            ..self
        }
    }

    pub fn with_max_height(self, max_height: f32) -> Self {
        let max_height = non_negative(max_height);
        Self {
            min_size: Size::new(self.min_size.width, self.min_size.height.min(max_height)),
            max_size: Size::new(self.max_size.width, max_height),
            ..self
        }
    }

    /// Creates new constraints with loosened minimums (min = 0).
    pub fn loosen(self) -> Self {
        Self {
            min_size: Size::ZERO,
            ..self
        }
    }

    /// Deflates the constraint by padding and border before children are
    /// measured. Every axis is clamped at zero.
    pub fn deflate(self, insets: &EdgeInsets) -> Self {
        let horizontal = insets.horizontal_sum();
        let vertical = insets.vertical_sum();
        let shrink = |value: f32, by: f32| {
            if value.is_finite() {
                non_negative(value - by)
            } else {
                value
            }
        };
        let shrink_opt = |value: Option<f32>, by: f32| value.map(|v| shrink(v, by));
        Self {
            min_size: Size::new(
                shrink(self.min_size.width, horizontal),
                shrink(self.min_size.height, vertical),
            ),
            max_size: Size::new(
                shrink(self.max_size.width, horizontal),
                shrink(self.max_size.height, vertical),
            ),
            percent_reference: Size::new(
                shrink(self.percent_reference.width, horizontal),
                shrink(self.percent_reference.height, vertical),
            ),
            self_ideal_size: OptionalSize::new(
                shrink_opt(self.self_ideal_size.width, horizontal),
                shrink_opt(self.self_ideal_size.height, vertical),
            ),
            parent_ideal_size: self.parent_ideal_size,
        }
    }

    /// Child constraint derived from this one: same max bounds, no minimum,
    /// the parent's ideal size forwarded as `parent_ideal_size`.
    pub fn for_child(&self) -> Self {
        Self {
            min_size: Size::ZERO,
            max_size: self.max_size,
            percent_reference: self.percent_reference,
            self_ideal_size: OptionalSize::NONE,
            parent_ideal_size: self.self_ideal_size,
        }
    }
}

#[cfg(test)]
#[path = "tests/constraint_tests.rs"]
mod tests;
