//! Safe area types and the collaborator that reports them.
//!
//! The window system owns the real insets; layout only queries a snapshot.
//! [`SafeAreaState`] is a ready-made provider for hosts that push insets in
//! themselves (and for tests).

use std::cell::Cell;

bitflags::bitflags! {
    /// Edges a node may extend into.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct SafeAreaEdges: u8 {
        const TOP = 0b0001;
        const BOTTOM = 0b0010;
        /// Leading edge (left in LTR, right in RTL)
        const START = 0b0100;
        /// Trailing edge (right in LTR, left in RTL)
        const END = 0b1000;
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const HORIZONTAL = Self::START.bits() | Self::END.bits();
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

bitflags::bitflags! {
    /// Kinds of system-reserved area.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct SafeAreaTypes: u8 {
        /// Status bar and navigation indicator.
        const SYSTEM = 0b001;
        /// Display cutout.
        const CUTOUT = 0b010;
        /// Soft keyboard.
        const KEYBOARD = 0b100;
        const ALL = Self::SYSTEM.bits() | Self::CUTOUT.bits() | Self::KEYBOARD.bits();
    }
}

/// Which safe-area edges and types a node asks to lay out under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SafeAreaExpandOpts {
    pub types: SafeAreaTypes,
    pub edges: SafeAreaEdges,
}

impl SafeAreaExpandOpts {
    pub const fn new(types: SafeAreaTypes, edges: SafeAreaEdges) -> Self {
        Self { types, edges }
    }

    /// Returns true when at least one edge and one type are requested.
    pub fn expansive(&self) -> bool {
        !self.types.is_empty() && !self.edges.is_empty()
    }

    /// Returns true when `edge` is requested for `kind`.
    pub fn covers(&self, edge: SafeAreaEdges, kind: SafeAreaTypes) -> bool {
        self.edges.contains(edge) && self.types.contains(kind)
    }
}

/// Extent of the reserved region on each physical edge, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl SafeAreaInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Combine with another safe area (takes max of each edge)
    pub fn union(&self, other: &Self) -> Self {
        Self {
            top: self.top.max(other.top),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
            right: self.right.max(other.right),
        }
    }

    /// Keeps only the given edges; `START`/`END` map to left/right.
    pub fn only(&self, edges: SafeAreaEdges) -> Self {
        Self {
            top: if edges.contains(SafeAreaEdges::TOP) { self.top } else { 0.0 },
            bottom: if edges.contains(SafeAreaEdges::BOTTOM) { self.bottom } else { 0.0 },
            left: if edges.contains(SafeAreaEdges::START) { self.left } else { 0.0 },
            right: if edges.contains(SafeAreaEdges::END) { self.right } else { 0.0 },
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.bottom == 0.0 && self.left == 0.0 && self.right == 0.0
    }
}

/// Read-only source of safe-area insets for the current frame.
pub trait SafeAreaProvider {
    /// System safe area (status bar, navigation indicator).
    fn safe_area(&self) -> SafeAreaInsets;

    /// Union of the requested types, restricted to the requested edges.
    fn combined_safe_area(&self, edges: SafeAreaEdges, types: SafeAreaTypes) -> SafeAreaInsets;
}

/// Settable safe-area snapshot.
///
/// Values can change between `measure` and `layout` (animated system bars),
/// which is why they sit in `Cell`s rather than being captured by value.
#[derive(Debug, Default)]
pub struct SafeAreaState {
    system: Cell<SafeAreaInsets>,
    cutout: Cell<SafeAreaInsets>,
    keyboard: Cell<SafeAreaInsets>,
}

impl SafeAreaState {
    pub fn new(system: SafeAreaInsets) -> Self {
        Self {
            system: Cell::new(system),
            ..Self::default()
        }
    }

    pub fn set_system(&self, insets: SafeAreaInsets) {
        self.system.set(insets);
    }

    pub fn set_cutout(&self, insets: SafeAreaInsets) {
        self.cutout.set(insets);
    }

    pub fn set_keyboard(&self, insets: SafeAreaInsets) {
        self.keyboard.set(insets);
    }
}

impl SafeAreaProvider for SafeAreaState {
    fn safe_area(&self) -> SafeAreaInsets {
        self.system.get()
    }

    fn combined_safe_area(&self, edges: SafeAreaEdges, types: SafeAreaTypes) -> SafeAreaInsets {
        let mut combined = SafeAreaInsets::ZERO;
        if types.contains(SafeAreaTypes::SYSTEM) {
            combined = combined.union(&self.system.get());
        }
        if types.contains(SafeAreaTypes::CUTOUT) {
            combined = combined.union(&self.cutout.get());
        }
        if types.contains(SafeAreaTypes::KEYBOARD) {
            combined = combined.union(&self.keyboard.get());
        }
        combined.only(edges)
    }
}
