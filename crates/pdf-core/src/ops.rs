//! Typed draw operations and PDF operator generation

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Neutral gray from a single 0-255 level
    pub fn gray(level: u8) -> Self {
        Self::from_rgb(level, level, level)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Font variant, resolved against the built-in Helvetica family
///
/// The three variants map to fixed page resource names so content
/// streams can be generated without tracking per-page font state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontVariant {
    #[default]
    Regular,
    Bold,
    Italic,
}

impl FontVariant {
    /// PDF resource name used in content streams (e.g., "F1")
    pub fn resource_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "F1",
            FontVariant::Bold => "F2",
            FontVariant::Italic => "F3",
        }
    }

    /// Base-14 font name for the font dictionary
    pub fn base_font(self) -> &'static str {
        match self {
            FontVariant::Regular => "Helvetica",
            FontVariant::Bold => "Helvetica-Bold",
            FontVariant::Italic => "Helvetica-Oblique",
        }
    }

    /// All variants, in resource-name order
    pub fn all() -> [FontVariant; 3] {
        [FontVariant::Regular, FontVariant::Bold, FontVariant::Italic]
    }
}

/// A single buffered page draw operation
///
/// Coordinates are in points with a top-left origin; conversion to PDF
/// bottom-origin coordinates happens when operators are generated, since
/// only then is the page height fixed.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A run of text at a baseline position
    Text {
        text: String,
        x: f64,
        y: f64,
        size: f32,
        variant: FontVariant,
        color: Color,
    },
    /// A stroked line between two points
    Rule {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        thickness: f64,
    },
    /// A filled rectangle; (x, y) is the top-left corner
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
}

impl DrawOp {
    /// Generate PDF content-stream operators for this operation
    ///
    /// # Arguments
    /// * `page_height` - Page height in points, for top-origin conversion
    pub fn to_operators(&self, page_height: f64) -> Vec<u8> {
        match self {
            DrawOp::Text {
                text,
                x,
                y,
                size,
                variant,
                color,
            } => generate_text_operators(text, *x, page_height - y, *size, *variant, *color),
            DrawOp::Rule {
                x1,
                y1,
                x2,
                y2,
                color,
                thickness,
            } => generate_rule_operators(
                *x1,
                page_height - y1,
                *x2,
                page_height - y2,
                *color,
                *thickness,
            ),
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => generate_rect_operators(*x, page_height - y - height, *width, *height, *color),
        }
    }
}

/// Escape a string for a PDF literal string object
///
/// Backslash, parentheses, and line endings must be escaped; everything
/// else passes through unchanged.
pub fn escape_pdf_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Generate PDF operators for text insertion
///
/// Creates the proper PDF text operators (BT, rg, Tf, Td, Tj, ET) to
/// render text at a baseline position.
///
/// # Arguments
/// * `text` - Text to render (escaped here)
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `size` - Font size in points
/// * `variant` - Font variant (selects the page font resource)
/// * `color` - Text color
fn generate_text_operators(
    text: &str,
    x: f64,
    y: f64,
    size: f32,
    variant: FontVariant,
    color: Color,
) -> Vec<u8> {
    let mut ops = String::new();

    // Begin Text
    ops.push_str("BT\n");

    // Set text color (rg operator for non-stroking color)
    ops.push_str(&format!("{} {} {} rg\n", color.r, color.g, color.b));

    // Set font and size: /F1 12 Tf
    ops.push_str(&format!("/{} {} Tf\n", variant.resource_name(), size));

    // Move to position: x y Td
    ops.push_str(&format!("{x} {y} Td\n"));

    // Show text: (escaped) Tj
    ops.push_str(&format!("({}) Tj\n", escape_pdf_string(text)));

    // End Text
    ops.push_str("ET\n");

    ops.into_bytes()
}

/// Generate PDF operators for a stroked line
fn generate_rule_operators(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Color,
    thickness: f64,
) -> Vec<u8> {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str(&format!("{} {} {} RG\n", color.r, color.g, color.b));
    ops.push_str(&format!("{thickness} w\n"));
    ops.push_str(&format!("{x1} {y1} m\n"));
    ops.push_str(&format!("{x2} {y2} l\n"));
    ops.push_str("S\nQ\n");

    ops.into_bytes()
}

/// Generate PDF operators for a filled rectangle
///
/// (x, y) is the bottom-left corner in PDF coordinates.
fn generate_rect_operators(x: f64, y: f64, width: f64, height: f64, color: Color) -> Vec<u8> {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str(&format!("{} {} {} rg\n", color.r, color.g, color.b));
    ops.push_str(&format!("{x} {y} {width} {height} re\nf\nQ\n"));

    ops.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_color_from_rgb() {
        let c = Color::from_rgb(255, 0, 0);
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_escape_parens() {
        assert_eq!(escape_pdf_string("a (b) c"), "a \\(b\\) c");
        assert_eq!(escape_pdf_string("back\\slash"), "back\\\\slash");
        assert_eq!(escape_pdf_string("plain"), "plain");
    }

    #[test]
    fn test_text_operators() {
        let op = DrawOp::Text {
            text: "Hello".to_string(),
            x: 100.0,
            y: 100.0,
            size: 12.0,
            variant: FontVariant::Regular,
            color: Color::black(),
        };
        let ops = String::from_utf8(op.to_operators(800.0)).unwrap();

        assert!(ops.contains("BT"));
        assert!(ops.contains("/F1 12 Tf"));
        assert!(ops.contains("100 700 Td"));
        assert!(ops.contains("(Hello) Tj"));
        assert!(ops.contains("ET"));
    }

    #[test]
    fn test_text_operators_bold_colored() {
        let op = DrawOp::Text {
            text: "Label:".to_string(),
            x: 56.0,
            y: 100.0,
            size: 12.0,
            variant: FontVariant::Bold,
            color: Color::rgb(1.0, 0.0, 0.0),
        };
        let ops = String::from_utf8(op.to_operators(800.0)).unwrap();

        assert!(ops.contains("/F2 12 Tf"));
        assert!(ops.contains("1 0 0 rg"));
        assert!(ops.contains("(Label:) Tj"));
    }

    #[test]
    fn test_rule_operators() {
        let op = DrawOp::Rule {
            x1: 50.0,
            y1: 100.0,
            x2: 550.0,
            y2: 100.0,
            color: Color::gray(180),
            thickness: 1.0,
        };
        let ops = String::from_utf8(op.to_operators(800.0)).unwrap();

        assert!(ops.contains("50 700 m"));
        assert!(ops.contains("550 700 l"));
        assert!(ops.contains("1 w"));
        assert!(ops.contains("S"));
    }

    #[test]
    fn test_rect_operators_top_origin() {
        let op = DrawOp::FillRect {
            x: 54.0,
            y: 90.0,
            width: 487.0,
            height: 20.0,
            color: Color::from_rgb(221, 234, 246),
        };
        let ops = String::from_utf8(op.to_operators(800.0)).unwrap();

        // Top-left (54, 90) with height 20 puts the PDF bottom edge at 690
        assert!(ops.contains("54 690 487 20 re"));
        assert!(ops.contains("f"));
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(FontVariant::Regular.resource_name(), "F1");
        assert_eq!(FontVariant::Bold.resource_name(), "F2");
        assert_eq!(FontVariant::Italic.resource_name(), "F3");
        assert_eq!(FontVariant::Italic.base_font(), "Helvetica-Oblique");
    }
}
