//! Frame environment for tests.

use std::rc::Rc;

use tessel_ui_graphics::Size;
use tessel_ui_layout::{
    DeviceType, DisplayInfo, GridColumnInfo, LayoutEnv, SafeAreaInsets, SafeAreaState,
    TextDirection,
};

/// A [`LayoutEnv`] together with the safe-area state behind it, so tests can
/// move insets between measure and layout.
pub struct TestEnv {
    pub safe_area: Rc<SafeAreaState>,
    pub env: LayoutEnv,
}

impl TestEnv {
    /// Phone portrait window, LTR, theme-driven API level, density 1.
    pub fn phone() -> Self {
        Self::with_display(DisplayInfo::default())
    }

    pub fn with_display(display: DisplayInfo) -> Self {
        let safe_area = Rc::new(SafeAreaState::default());
        let env = LayoutEnv::new(display, safe_area.clone());
        Self { safe_area, env }
    }

    pub fn rtl(self) -> Self {
        self.map_display(|display| display.direction = TextDirection::Rtl)
    }

    pub fn api_version(self, version: u32) -> Self {
        self.map_display(|display| display.api_target_version = version)
    }

    pub fn density(self, density: f32) -> Self {
        self.map_display(|display| display.density = density)
    }

    /// Window of `size` on a grid of `columns` columns, 24px gutters and
    /// margins.
    pub fn window(self, device_type: DeviceType, size: Size, columns: u32) -> Self {
        self.map_display(|display| {
            display.device_type = device_type;
            display.window_size = size;
            display.grid = GridColumnInfo::for_width(size.width, columns, 24.0, 24.0);
        })
    }

    pub fn system_insets(self, insets: SafeAreaInsets) -> Self {
        self.safe_area.set_system(insets);
        self
    }

    fn map_display(mut self, update: impl FnOnce(&mut DisplayInfo)) -> Self {
        update(&mut self.env.display);
        self
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::phone()
    }
}
