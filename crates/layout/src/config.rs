//! Layout configuration

use pdf_core::{Color, A4_HEIGHT, A4_WIDTH};

/// Page geometry and styling for one render call
///
/// All presentation constants flow through here so the engine itself can
/// be exercised independent of visual styling. Immutable per render call.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Page width in points
    pub page_width: f64,
    /// Page height in points
    pub page_height: f64,

    /// Distance from the page top to the first content baseline
    pub top_margin: f64,
    /// Reserved space at the page bottom; also implicitly reserves the
    /// footer area, so the footer pass never overflows
    pub bottom_margin: f64,
    pub left_margin: f64,
    pub right_margin: f64,

    /// Vertical distance between consecutive text baselines
    pub line_height: f64,
    /// Height of the filled section-header bar
    pub section_header_height: f64,
    /// Horizontal offset from the left margin to the value column
    pub label_column_width: f64,

    /// Page header text, re-emitted on every page
    pub header_title: String,
    /// Baseline of the page header text, from the page top
    pub header_baseline: f64,

    pub title_font_size: f32,
    pub body_font_size: f32,
    pub footer_font_size: f32,

    /// Footer baseline distance from the page bottom
    pub footer_offset: f64,

    pub primary_color: Color,
    pub secondary_color: Color,
    pub text_color: Color,
    pub label_color: Color,
    pub rule_color: Color,
    pub footer_color: Color,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            top_margin: 92.0,
            bottom_margin: 80.0,
            left_margin: 56.0,
            right_margin: 56.0,
            line_height: 16.0,
            section_header_height: 20.0,
            label_column_width: 128.0,
            header_title: "Legal Case Details".to_string(),
            header_baseline: 56.0,
            title_font_size: 18.0,
            body_font_size: 12.0,
            footer_font_size: 10.0,
            footer_offset: 42.0,
            primary_color: Color::from_rgb(0, 51, 102),
            secondary_color: Color::from_rgb(221, 234, 246),
            text_color: Color::black(),
            label_color: Color::from_rgb(26, 26, 26),
            rule_color: Color::gray(180),
            footer_color: Color::from_rgb(102, 102, 102),
        }
    }
}

impl LayoutConfig {
    /// Width available to content between the side margins
    pub fn content_width(&self) -> f64 {
        self.page_width - self.left_margin - self.right_margin
    }

    /// Lowest baseline a content line may occupy
    pub fn content_limit(&self) -> f64 {
        self.page_height - self.bottom_margin
    }

    /// X position of the value column
    pub fn value_column_x(&self) -> f64 {
        self.left_margin + self.label_column_width
    }

    /// Width available to wrapped field values
    pub fn value_column_width(&self) -> f64 {
        self.page_width - self.right_margin - self.value_column_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_a4() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.page_width, A4_WIDTH);
        assert_eq!(cfg.page_height, A4_HEIGHT);
    }

    #[test]
    fn test_derived_geometry() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.content_width(), cfg.page_width - 112.0);
        assert_eq!(cfg.content_limit(), cfg.page_height - 80.0);
        assert_eq!(cfg.value_column_x(), 184.0);
        assert_eq!(
            cfg.value_column_width(),
            cfg.page_width - 56.0 - cfg.value_column_x()
        );
    }
}
