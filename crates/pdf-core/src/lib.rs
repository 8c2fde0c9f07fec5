//! PDF Core - Low-level PDF generation
//!
//! This crate provides functionality for:
//! - Measuring text with real or approximate font metrics
//! - Greedy word-wrapping against a maximum line width
//! - Typed page draw operations (text, rules, filled rectangles)
//! - Assembling buffered per-page operations into a saved PDF document
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Color, DrawOp, FontVariant, write_document};
//!
//! let page = vec![DrawOp::Text {
//!     text: "Hello, World!".to_string(),
//!     x: 100.0,
//!     y: 100.0,
//!     size: 12.0,
//!     variant: FontVariant::Regular,
//!     color: Color::black(),
//! }];
//! let bytes = write_document(&[page], 595.28, 841.89)?;
//! ```

mod font;
mod ops;
mod text;
mod writer;

pub use font::FontMetrics;
pub use ops::{Color, DrawOp, FontVariant};
pub use text::{wrap_text, PLACEHOLDER};
pub use writer::write_document;

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// A4 page width in points
pub const A4_WIDTH: f64 = 595.28;
/// A4 page height in points
pub const A4_HEIGHT: f64 = 841.89;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_default() {
        assert_eq!(FontVariant::default(), FontVariant::Regular);
    }

    #[test]
    fn test_a4_constants() {
        assert!(A4_HEIGHT > A4_WIDTH);
    }
}
