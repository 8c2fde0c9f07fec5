//! Layout Engine - paginated case documents
//!
//! This crate turns a structured legal-case record into a paginated,
//! printable PDF:
//! - Labeled fields laid out into titled sections
//! - Long values wrapped across lines and page boundaries
//! - Automatic page breaks with the page header re-emitted
//! - A second pass stamping "Page i of N" footers once the total page
//!   count is known
//!
//! Fetching the record and delivering the output file are the caller's
//! concern; the engine consumes a fully-resolved [`CaseRecord`] and
//! produces bytes plus a derived filename. Callers whose fetch step comes
//! up empty should surface [`LayoutError::MissingRecord`] instead of
//! invoking the engine.
//!
//! # Example
//!
//! ```ignore
//! use layout::{parse_record, render_case, FontMetrics, LayoutConfig, LayoutError};
//!
//! let record = fetched_json
//!     .ok_or(LayoutError::MissingRecord)
//!     .and_then(|json| parse_record(&json))?;
//! let rendered = render_case(&record, &LayoutConfig::default(), &FontMetrics::approximate())?;
//! std::fs::write(&rendered.file_name, &rendered.bytes)?;
//! ```

mod compose;
mod config;
mod cursor;
mod document;
mod footer;
mod schema;
mod section;

pub use compose::{derive_filename, output_filename, DocumentComposer};
pub use config::LayoutConfig;
pub use cursor::PageCursor;
pub use document::{Document, Page};
pub use footer::FooterStamper;
pub use schema::{
    parse_record, BarRegistration, CaseRecord, ContactInfo, EvidenceFile, Party, Representative,
};
pub use section::SectionRenderer;

// Re-exported so callers rarely need pdf-core directly
pub use pdf_core::{Color, DrawOp, FontMetrics, FontVariant, PLACEHOLDER};

use thiserror::Error;

/// Errors that can occur while rendering a case document
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The caller's fetch step produced no record. Raised by callers, not
    /// by the engine itself, which always receives a resolved record.
    #[error("no case record to render")]
    MissingRecord,

    #[error("case title is empty; cannot derive an output filename")]
    InvalidTitleForFilename,

    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// A fully rendered case document ready for delivery
#[derive(Debug, Clone)]
pub struct RenderedCase {
    /// Derived output filename, including the `.pdf` extension
    pub file_name: String,
    /// Serialized PDF bytes
    pub bytes: Vec<u8>,
}

/// Render one case record into a paginated PDF
///
/// Composes the document section by section, stamps footers once the
/// final page count is known, and serializes. Per-field problems degrade
/// to placeholders; the only fatal input error is a title from which no
/// output filename can be derived.
pub fn render_case(
    record: &CaseRecord,
    config: &LayoutConfig,
    metrics: &FontMetrics,
) -> Result<RenderedCase> {
    let file_name = output_filename(record.case_title.as_deref().unwrap_or(""))?;

    let mut document = DocumentComposer::new(config, metrics).compose(record);
    FooterStamper::new(config, metrics).stamp(&mut document);
    let bytes = document.to_pdf_bytes(config)?;

    log::info!(
        "rendered {} page(s) into {}",
        document.page_count(),
        file_name
    );

    Ok(RenderedCase { file_name, bytes })
}
