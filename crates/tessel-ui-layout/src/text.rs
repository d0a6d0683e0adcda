//! Single-line text leaves.

use tessel_ui_graphics::{non_negative, Size};

use crate::algorithm::LayoutAlgorithm;
use crate::wrapper::LayoutWrapper;

pub const DEFAULT_FONT_SIZE: f32 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text
    pub line_height: f32,
    /// Number of lines in the text
    pub line_count: usize,
}

/// Shapes text into a box. Implementations must accept any width, including
/// zero, and report an empty visual line rather than fail.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics;
}

/// Fixed advance per character, proportional to the font size.
#[derive(Clone, Copy, Debug)]
pub struct MonospacedTextMeasurer {
    pub char_width_ratio: f32,
    pub line_height_ratio: f32,
}

impl Default for MonospacedTextMeasurer {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.5,
            line_height_ratio: 1.25,
        }
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        let lines: Vec<&str> = text.split('\n').collect();
        let line_count = lines.len().max(1);
        let char_width = font_size * self.char_width_ratio;
        let line_height = font_size * self.line_height_ratio;

        let width = lines
            .iter()
            .map(|line| line.chars().count() as f32 * char_width)
            .fold(0.0_f32, f32::max);

        TextMetrics {
            width,
            height: line_count as f32 * line_height,
            line_height,
            line_count,
        }
    }
}

/// Measures the node's text on one line, truncating to the available width.
#[derive(Clone, Copy, Debug)]
pub struct TextLayoutAlgorithm {
    default_font_size: f32,
}

impl Default for TextLayoutAlgorithm {
    fn default() -> Self {
        Self {
            default_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl TextLayoutAlgorithm {
    pub fn new(default_font_size: f32) -> Self {
        Self { default_font_size }
    }
}

impl LayoutAlgorithm for TextLayoutAlgorithm {
    fn measure(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        let property = wrapper.layout_property();
        let padding = property.padding_and_border();
        let font_size = property.font_size.unwrap_or(self.default_font_size);
        let text = property.text.as_deref().unwrap_or("");
        let metrics = wrapper.env().text_measurer.measure(text, font_size);

        let constraint = wrapper.layout_constraint().normalized();
        let constraint = constraint.with_self_ideal_size(
            constraint.self_ideal_size.or(property.user_size),
        );
        let available_width = non_negative(
            constraint
                .self_ideal_size
                .width
                .unwrap_or(constraint.max_size.width)
                - padding.horizontal_sum(),
        );
        // A width of zero still yields one (empty) line.
        let width = metrics.width.min(available_width);
        let natural = padding.inflate(Size::new(width, metrics.line_height));
        wrapper.set_frame_size(constraint.resolve(natural));
    }

    fn layout(&mut self, _wrapper: &mut LayoutWrapper<'_>) {}
}
