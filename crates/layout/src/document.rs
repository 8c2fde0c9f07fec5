//! Page and document model

use crate::{LayoutConfig, Result};
use pdf_core::{write_document, DrawOp};

/// One page of buffered draw operations plus a reserved footer slot
///
/// Content operations are append-only and never revisited once written;
/// the footer slot is filled by the second pass after composition, when
/// the total page count is known.
#[derive(Debug, Clone, Default)]
pub struct Page {
    ops: Vec<DrawOp>,
    footer: Vec<DrawOp>,
}

impl Page {
    /// Append a content operation
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Content operations, in emission order
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Footer operations (empty until the footer pass runs)
    pub fn footer(&self) -> &[DrawOp] {
        &self.footer
    }

    /// Fill the reserved footer slot
    pub fn set_footer(&mut self, ops: Vec<DrawOp>) {
        self.footer = ops;
    }
}

/// The ordered pages produced by one composition call
///
/// Page order is stable and equals allocation order. The total page count
/// is only final once composition returns, which is why footers are a
/// distinct second pass.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// An empty document with no pages allocated yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next page and return it for writing
    pub fn allocate_page(&mut self) -> &mut Page {
        self.pages.push(Page::default());
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// The page currently being written (allocates page 1 if none exists)
    pub fn current_page_mut(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut [Page] {
        &mut self.pages
    }

    /// Serialize all pages (content plus footer slots) to PDF bytes
    pub fn to_pdf_bytes(&self, config: &LayoutConfig) -> Result<Vec<u8>> {
        let pages: Vec<Vec<DrawOp>> = self
            .pages
            .iter()
            .map(|page| page.ops.iter().chain(page.footer.iter()).cloned().collect())
            .collect();

        Ok(write_document(
            &pages,
            config.page_width,
            config.page_height,
        )?)
    }
}
