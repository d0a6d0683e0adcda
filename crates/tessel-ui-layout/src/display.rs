//! Display and window facts consumed by layout.

use crate::direction::TextDirection;
use tessel_ui_graphics::Size;

/// API level at which sizing switches from the legacy constants to the
/// theme-driven ones.
pub const THEME_DRIVEN_API_VERSION: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceType {
    #[default]
    Phone,
    Tablet,
    Other,
}

/// Column grid the window is currently laid out on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridColumnInfo {
    /// Number of columns of the parent grid at the current width.
    pub columns: u32,
    pub column_width: f32,
    pub gutter_width: f32,
    pub margin: f32,
}

impl Default for GridColumnInfo {
    fn default() -> Self {
        Self {
            columns: 4,
            column_width: 72.0,
            gutter_width: 24.0,
            margin: 24.0,
        }
    }
}

impl GridColumnInfo {
    /// Derives the column width for a window of `window_width` split into
    /// `columns` columns.
    pub fn for_width(window_width: f32, columns: u32, gutter_width: f32, margin: f32) -> Self {
        let columns = columns.max(1);
        let gutters = gutter_width * (columns - 1) as f32;
        let column_width = ((window_width - margin * 2.0 - gutters) / columns as f32).max(0.0);
        Self {
            columns,
            column_width,
            gutter_width,
            margin,
        }
    }

    /// Width covered by `span` columns including the gutters between them.
    pub fn span_width(&self, span: u32) -> f32 {
        if span == 0 {
            return 0.0;
        }
        self.column_width * span as f32 + self.gutter_width * (span - 1) as f32
    }
}

/// Per-frame display facts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayInfo {
    pub device_type: DeviceType,
    pub grid: GridColumnInfo,
    pub direction: TextDirection,
    pub api_target_version: u32,
    /// Pixels per density-independent pixel.
    pub density: f32,
    pub window_size: Size,
}

impl Default for DisplayInfo {
    fn default() -> Self {
        Self {
            device_type: DeviceType::Phone,
            grid: GridColumnInfo::default(),
            direction: TextDirection::Ltr,
            api_target_version: 12,
            density: 1.0,
            window_size: Size::new(360.0, 780.0),
        }
    }
}

impl DisplayInfo {
    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }
}
